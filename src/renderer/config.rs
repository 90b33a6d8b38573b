//! Serializer options

/// Markup texture for `SvgBuilder`.
///
/// The default is a standalone, indented document with `qr-` element classes.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Emit the `<?xml ...?>` declaration
    pub standalone: bool,
    /// One element per line, indented
    pub pretty_print: bool,
    /// Prepended to every element class
    pub class_prefix: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            class_prefix: "qr-".to_string(),
        }
    }
}

impl SvgConfig {
    /// Single-line markup with no XML declaration, for inlining into HTML
    pub fn inline() -> Self {
        Self {
            standalone: false,
            pretty_print: false,
            ..Self::default()
        }
    }
}
