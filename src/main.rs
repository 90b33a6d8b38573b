//! Styled QR CLI
//!
//! Usage:
//!   styled-qr [OPTIONS] <PAYLOAD>
//!
//! Options:
//!   -c, --color <COLOR>       Foreground color
//!   -b, --background <COLOR>  Background color
//!   -n, --name <TEXT>         Brand name drawn in the center
//!   -l, --logo <FILE>         Logo image embedded in the center
//!   -s, --size <PX>           Output edge length in pixels
//!   -f, --format <FORMAT>     svg or png
//!   -t, --theme <FILE>        Brand theme (TOML format)
//!   -o, --output <FILE>       Write to file instead of stdout
//!   --data-uri                Print a data URI instead of raw bytes
//!   -h, --help                Print help

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use styled_qr::output::data_uri;
use styled_qr::{generate, OutputFormat, QrError, RenderConfig, Theme};

#[derive(Parser)]
#[command(name = "styled-qr")]
#[command(about = "Brand-styled QR codes with rounded dots and a centered logo or name")]
struct Cli {
    /// URL or text to encode
    payload: String,

    /// Foreground color
    #[arg(short, long)]
    color: Option<String>,

    /// Background color
    #[arg(short, long)]
    background: Option<String>,

    /// Brand name drawn in the center (first 20 characters)
    #[arg(short, long)]
    name: Option<String>,

    /// Logo image embedded in the center; wins over --name
    #[arg(short, long)]
    logo: Option<PathBuf>,

    /// Output edge length in pixels
    #[arg(short, long)]
    size: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Brand theme file (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a data URI instead of raw image bytes
    #[arg(long)]
    data_uri: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Load theme
    let theme = match &cli.theme {
        Some(path) => match Theme::from_file(path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error loading theme '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Theme::default(),
    };

    let mut config = theme.apply(RenderConfig::default());
    if let Some(color) = cli.color {
        config = config.with_foreground(color);
    }
    if let Some(background) = cli.background {
        config = config.with_background(background);
    }
    if let Some(size) = cli.size {
        config = config.with_size(size);
    }
    if let Some(format) = cli.format {
        config = config.with_format(format);
    }
    if let Some(name) = cli.name {
        config = config.with_brand_name(name);
    }
    if let Some(path) = &cli.logo {
        match read_logo(path) {
            Ok(uri) => config = config.with_logo(uri),
            Err(e) => {
                eprintln!("Error reading logo '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    let result = match generate(&cli.payload, &config) {
        Ok(r) => r,
        Err(e) => fail(&e),
    };

    let bytes = if cli.data_uri {
        result.data_uri.into_bytes()
    } else {
        result.bytes
    };

    let written = match &cli.output {
        Some(path) => fs::write(path, &bytes),
        None => io::stdout().lock().write_all(&bytes),
    };
    if let Err(e) = written {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }
}

fn fail(err: &QrError) -> ! {
    eprintln!("Error [{}]: {}", err.code(), err);
    std::process::exit(1);
}

/// Read an image file and embed it as a data URI
fn read_logo(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(data_uri(logo_mime_type(path), &STANDARD.encode(bytes)))
}

fn logo_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("svg") => "image/svg+xml",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}
