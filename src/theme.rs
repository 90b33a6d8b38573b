//! Brand themes loaded from TOML
//!
//! A theme bundles the colors, brand overlay and output options a team
//! reuses across many codes. Every key is optional; unset keys leave the
//! corresponding `RenderConfig` value untouched.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::config::{Overlay, OutputFormat, RenderConfig};

/// Errors that can occur when loading or parsing themes
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A reusable brand theme
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    /// Optional name for the theme
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    pub foreground: Option<String>,
    pub background: Option<String>,
    /// Brand text for the center cutout
    pub brand_name: Option<String>,
    /// Logo reference for the center cutout; wins over `brand_name`
    pub logo: Option<String>,
    pub size: Option<u32>,
    pub format: Option<OutputFormat>,
}

/// TOML structure for deserializing themes
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    colors: Option<TomlColors>,
    brand: Option<TomlBrand>,
    output: Option<TomlOutput>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TomlColors {
    foreground: Option<String>,
    background: Option<String>,
}

#[derive(Deserialize)]
struct TomlBrand {
    name: Option<String>,
    logo: Option<String>,
}

#[derive(Deserialize)]
struct TomlOutput {
    size: Option<u32>,
    format: Option<OutputFormat>,
}

impl Theme {
    /// Load theme from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load theme from TOML string
    pub fn from_str(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;
        let (name, description) = parsed
            .metadata
            .map(|m| (m.name, m.description))
            .unwrap_or_default();
        let (foreground, background) = parsed
            .colors
            .map(|c| (c.foreground, c.background))
            .unwrap_or_default();
        let (brand_name, logo) = parsed
            .brand
            .map(|b| (b.name, b.logo))
            .unwrap_or_default();
        let (size, format) = parsed
            .output
            .map(|o| (o.size, o.format))
            .unwrap_or_default();

        Ok(Theme {
            name,
            description,
            foreground,
            background,
            brand_name,
            logo,
            size,
            format,
        })
    }

    /// Overlay this theme's set values onto `config`
    pub fn apply(&self, mut config: RenderConfig) -> RenderConfig {
        if let Some(fg) = &self.foreground {
            config.foreground = fg.clone();
        }
        if let Some(bg) = &self.background {
            config.background = bg.clone();
        }
        let overlay = Overlay::from_parts(self.brand_name.as_deref(), self.logo.as_deref());
        if overlay.is_some() {
            config.overlay = overlay;
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config
    }
}
