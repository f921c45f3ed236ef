//! Error types for Pinbox operations.
//!
//! Layout and drawing cannot fail; every variant here comes from the output
//! boundary: configuration, format selection or writing the page.

use std::io;

use thiserror::Error;

use pinbox_core::color::ColorError;

/// The main error type for Pinbox operations.
#[derive(Debug, Error)]
pub enum PinboxError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unsupported output format `{extension}`")]
    UnsupportedFormat { extension: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}

impl From<ColorError> for PinboxError {
    fn from(err: ColorError) -> Self {
        Self::Config(err.to_string())
    }
}
