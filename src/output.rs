//! Encoded render results

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::config::OutputFormat;

/// Rendered image bytes with ready-to-embed encodings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    /// Raw image bytes (SVG markup or PNG)
    pub bytes: Vec<u8>,
    /// Standard base64 of `bytes`
    pub base64: String,
    /// `data:<mime>;base64,<base64>`
    pub data_uri: String,
    /// Media type of `bytes`
    pub mime_type: &'static str,
}

impl RenderOutput {
    pub fn new(bytes: Vec<u8>, format: OutputFormat) -> Self {
        let mime_type = format.mime_type();
        let base64 = STANDARD.encode(&bytes);
        let data_uri = data_uri(mime_type, &base64);
        Self {
            bytes,
            base64,
            data_uri,
            mime_type,
        }
    }
}

/// Build a base64 data URI from an already-encoded payload
pub fn data_uri(mime_type: &str, base64: &str) -> String {
    format!("data:{};base64,{}", mime_type, base64)
}
