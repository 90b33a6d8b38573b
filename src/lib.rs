//! Styled QR - brand-styled QR codes as SVG or PNG
//!
//! This library encodes a payload into a module grid, lays the grid out as
//! rounded finder patterns and circular dots with an optional centered logo
//! or brand name, and serializes the result as self-contained SVG. PNG output
//! is produced by rasterizing that SVG.
//!
//! # Example
//!
//! ```rust
//! use styled_qr::{render_svg, RenderConfig};
//!
//! let config = RenderConfig::new().with_foreground("#1a73e8").with_brand_name("Acme");
//! let svg = render_svg("https://example.com", &config).unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("Acme"));
//! ```

pub mod config;
pub mod error;
pub mod matrix;
pub mod output;
pub mod raster;
pub mod renderer;
pub mod scene;
pub mod theme;

pub use config::{OutputFormat, Overlay, RenderConfig};
pub use error::QrError;
pub use matrix::{MatrixProvider, ModuleGrid, QrcodeProvider};
pub use output::RenderOutput;
pub use raster::{Rasterizer, ResvgRasterizer};
pub use renderer::SvgConfig;
pub use scene::{build_scene, Scene};
pub use theme::{Theme, ThemeError};

use std::str::FromStr;

/// Reject inputs that cannot produce an image, before any rendering work
pub fn validate(payload: &str, config: &RenderConfig) -> Result<(), QrError> {
    if payload.is_empty() {
        return Err(QrError::validation(
            "a URL or text payload must be provided to generate a QR code",
        ));
    }
    if config.foreground.is_empty() {
        return Err(QrError::validation("foreground color must not be empty"));
    }
    if config.size == 0 {
        return Err(QrError::validation("image size must be positive"));
    }
    Ok(())
}

/// Reject colors the renderer cannot paint.
///
/// Accepts SVG color syntax: hex, `rgb()`/`hsl()` and named colors.
pub fn check_colors(config: &RenderConfig) -> Result<(), QrError> {
    for color in [&config.foreground, &config.background] {
        svgtypes::Color::from_str(color).map_err(|err| {
            QrError::render(format!("unsupported color syntax '{color}': {err}"))
        })?;
    }
    Ok(())
}

/// Render a payload to SVG markup with the default encoder
///
/// # Example
///
/// ```rust
/// use styled_qr::{render_svg, RenderConfig};
///
/// let svg = render_svg("hello", &RenderConfig::new().with_size(256)).unwrap();
/// assert!(svg.contains(r#"width="256""#));
/// ```
pub fn render_svg(payload: &str, config: &RenderConfig) -> Result<String, QrError> {
    render_svg_with(&QrcodeProvider, payload, config, &SvgConfig::default())
}

/// Render a payload to SVG markup with an explicit encoder and SVG options
pub fn render_svg_with(
    provider: &dyn MatrixProvider,
    payload: &str,
    config: &RenderConfig,
    svg_config: &SvgConfig,
) -> Result<String, QrError> {
    validate(payload, config)?;
    check_colors(config)?;

    let grid = provider.module_grid(payload)?;
    let scene = build_scene(&grid, config);

    Ok(renderer::render_svg(&scene, svg_config))
}

/// Render a payload to the configured output kind with default collaborators
///
/// # Example
///
/// ```rust
/// use styled_qr::{generate, OutputFormat, RenderConfig};
///
/// let config = RenderConfig::new().with_format(OutputFormat::Svg);
/// let out = generate("https://example.com", &config).unwrap();
/// assert_eq!(out.mime_type, "image/svg+xml");
/// assert!(out.data_uri.starts_with("data:image/svg+xml;base64,"));
/// ```
pub fn generate(payload: &str, config: &RenderConfig) -> Result<RenderOutput, QrError> {
    generate_with(&QrcodeProvider, &ResvgRasterizer::default(), payload, config)
}

/// Render a payload to the configured output kind with explicit collaborators
pub fn generate_with(
    provider: &dyn MatrixProvider,
    rasterizer: &dyn Rasterizer,
    payload: &str,
    config: &RenderConfig,
) -> Result<RenderOutput, QrError> {
    let svg = render_svg_with(provider, payload, config, &SvgConfig::default())?;

    let bytes = match config.format {
        OutputFormat::Svg => svg.into_bytes(),
        OutputFormat::Png => rasterizer.rasterize(&svg)?,
    };

    Ok(RenderOutput::new(bytes, config.format))
}
