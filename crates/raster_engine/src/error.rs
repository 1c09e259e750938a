//! Unified error types for raster_engine

use thiserror::Error;

/// Main error type for raster_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === Layer Errors ===
    #[error("Layer {layer} out of range (0..{max})")]
    LayerOutOfRange { layer: usize, max: usize },

    #[error("Layer model has no current layer")]
    NoCurrentLayer,

    // === Color Errors ===
    #[error("Invalid hex color: {value}")]
    InvalidHexColor { value: String },

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for raster_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

// === Convenience constructors ===
impl EngineError {
    /// Create a generic error from any displayable type
    pub fn generic(msg: impl std::fmt::Display) -> Self {
        Self::Generic(msg.to_string())
    }

    /// Create an invalid hex color error
    pub fn invalid_hex_color(value: impl Into<String>) -> Self {
        Self::InvalidHexColor { value: value.into() }
    }
}
