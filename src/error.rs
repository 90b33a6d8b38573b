//! Error types for the render pipeline

use thiserror::Error;

/// Errors that can occur while turning a payload into a styled QR image
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QrError {
    /// Required input missing or empty, detected before any rendering work
    #[error("validation failed: {message}")]
    Validation { message: String },

    /// The symbol encoder rejected the payload
    #[error("failed to generate QR matrix: {0}")]
    Matrix(String),

    /// Serialization or rasterization failed
    #[error("failed to render QR code: {0}")]
    Render(String),
}

impl QrError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a matrix error, keeping the encoder's message
    pub fn matrix(message: impl ToString) -> Self {
        Self::Matrix(message.to_string())
    }

    /// Create a render error, keeping the collaborator's message
    pub fn render(message: impl ToString) -> Self {
        Self::Render(message.to_string())
    }

    /// Machine-readable short code for branching without matching on variants
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "QR_ERR_VALIDATION",
            Self::Matrix(_) => "QR_ERR_MATRIX",
            Self::Render(_) => "QR_ERR_RENDER",
        }
    }

    /// Whether the failure was caused by the caller's input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
