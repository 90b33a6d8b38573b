//! Configuration for a single render request
//!
//! Defaults live here and are applied once; the scene builder and the
//! serializer only ever see a fully populated `RenderConfig`.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Default output edge length in pixels
pub const DEFAULT_SIZE: u32 = 1024;

/// Default module color
pub const DEFAULT_FOREGROUND: &str = "#000000";

/// Default canvas color
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Brand text longer than this is clipped
pub const MAX_BRAND_CHARS: usize = 20;

/// What, if anything, occupies the center cutout
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    /// Short brand name drawn as bold centered text
    Text(String),
    /// Embeddable image source, usually a data URI
    Logo(String),
}

impl Overlay {
    /// Build an overlay from independent name/logo inputs.
    ///
    /// A non-empty logo wins over a non-empty name; empty strings count as unset.
    pub fn from_parts(name: Option<&str>, logo: Option<&str>) -> Self {
        match (name.filter(|n| !n.is_empty()), logo.filter(|l| !l.is_empty())) {
            (_, Some(logo)) => Overlay::Logo(logo.to_string()),
            (Some(name), None) => Overlay::Text(name.to_string()),
            (None, None) => Overlay::None,
        }
    }

    pub fn is_some(&self) -> bool {
        !matches!(self, Overlay::None)
    }
}

/// Output kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Vector markup
    Svg,
    /// Rasterized PNG bytes
    #[default]
    Png,
}

impl OutputFormat {
    /// Media type of the produced bytes
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "image/svg+xml",
            OutputFormat::Png => "image/png",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Svg => write!(f, "svg"),
            OutputFormat::Png => write!(f, "png"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Styling and output options for one QR image
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output edge length in pixels
    pub size: u32,
    /// Color of finder patterns, dots and brand text
    pub foreground: String,
    /// Canvas color
    pub background: String,
    /// Center overlay
    pub overlay: Overlay,
    /// Output kind
    pub format: OutputFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            foreground: DEFAULT_FOREGROUND.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            overlay: Overlay::None,
            format: OutputFormat::default(),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output edge length in pixels
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the foreground color
    pub fn with_foreground(mut self, color: impl Into<String>) -> Self {
        self.foreground = color.into();
        self
    }

    /// Set the background color
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = color.into();
        self
    }

    /// Set the center overlay
    pub fn with_overlay(mut self, overlay: Overlay) -> Self {
        self.overlay = overlay;
        self
    }

    /// Draw brand text in the center, unless a logo is already set
    pub fn with_brand_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !matches!(self.overlay, Overlay::Logo(_)) && !name.is_empty() {
            self.overlay = Overlay::Text(name);
        }
        self
    }

    /// Draw a logo in the center, replacing any brand text
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        let logo = logo.into();
        if !logo.is_empty() {
            self.overlay = Overlay::Logo(logo);
        }
        self
    }

    /// Set the output kind
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.size, 1024);
        assert_eq!(config.foreground, "#000000");
        assert_eq!(config.background, "#ffffff");
        assert_eq!(config.overlay, Overlay::None);
        assert_eq!(config.format, OutputFormat::Png);
    }

    #[test]
    fn test_builder_pattern() {
        let config = RenderConfig::new()
            .with_size(512)
            .with_foreground("#1a73e8")
            .with_background("#fafafa")
            .with_brand_name("Acme")
            .with_format(OutputFormat::Svg);

        assert_eq!(config.size, 512);
        assert_eq!(config.foreground, "#1a73e8");
        assert_eq!(config.background, "#fafafa");
        assert_eq!(config.overlay, Overlay::Text("Acme".to_string()));
        assert_eq!(config.format, OutputFormat::Svg);
    }

    #[test]
    fn test_logo_takes_precedence_over_name() {
        let config = RenderConfig::new()
            .with_logo("data:image/png;base64,AAAA")
            .with_brand_name("Acme");
        assert_eq!(
            config.overlay,
            Overlay::Logo("data:image/png;base64,AAAA".to_string())
        );

        let config = RenderConfig::new()
            .with_brand_name("Acme")
            .with_logo("data:image/png;base64,AAAA");
        assert!(matches!(config.overlay, Overlay::Logo(_)));
    }

    #[test]
    fn test_overlay_from_parts() {
        assert_eq!(Overlay::from_parts(None, None), Overlay::None);
        assert_eq!(Overlay::from_parts(Some(""), Some("")), Overlay::None);
        assert_eq!(
            Overlay::from_parts(Some("Acme"), Some("")),
            Overlay::Text("Acme".to_string())
        );
        assert_eq!(
            Overlay::from_parts(Some("Acme"), Some("logo.png")),
            Overlay::Logo("logo.png".to_string())
        );
    }

    #[test]
    fn test_output_format() {
        assert_eq!("SVG".parse::<OutputFormat>(), Ok(OutputFormat::Svg));
        assert_eq!("png".parse::<OutputFormat>(), Ok(OutputFormat::Png));
        assert!("gif".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Svg.mime_type(), "image/svg+xml");
        assert_eq!(OutputFormat::Png.mime_type(), "image/png");
        assert_eq!(OutputFormat::Png.to_string(), "png");
    }
}
