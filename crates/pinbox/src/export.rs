//! Export of symbols to page formats.
//!
//! # Pipeline Position
//!
//! ```text
//! Symbol
//!     ↓ measure (layout)
//! SectionMeasure per section
//!     ↓ place (layout)
//! SymbolLayout
//!     ↓ draw onto a surface + export (this module)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgExporter`] and [`svg::SvgSurface`]

/// SVG export backend.
pub mod svg;

use std::path::Path;

use crate::{PinboxError, Symbol};

/// Abstraction for symbol export backends.
pub trait Exporter {
    /// Lays out, draws and writes `symbol` as one page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing the output fails.
    fn export_symbol(&mut self, symbol: &Symbol) -> Result<(), Error>;
}

/// Errors that can occur during export.
///
/// Converted into [`PinboxError::Export`] at the crate boundary.
#[derive(Debug)]
pub enum Error {
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

/// Page formats a symbol can be written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
}

impl OutputFormat {
    /// Picks the format from the extension of `path`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`PinboxError::UnsupportedFormat`] for any extension other
    /// than `svg`, including a missing one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pinbox::export::OutputFormat;
    /// assert_eq!(OutputFormat::from_path("out/symbol.SVG").unwrap(), OutputFormat::Svg);
    /// assert!(OutputFormat::from_path("image.pdf").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PinboxError> {
        let extension = path
            .as_ref()
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "svg" => Ok(Self::Svg),
            _ => Err(PinboxError::UnsupportedFormat { extension }),
        }
    }
}
