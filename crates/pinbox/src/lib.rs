//! Pinbox - layout and rendering of schematic pin symbols.
//!
//! A [`Symbol`] is a title over vertically stacked [`Section`]s; each section
//! is a bordered box with input [`Pin`]s down its left side and output pins
//! down its right side. Every pin paints a name inside the border, a stem
//! across it and a type label outside it.
//!
//! Layout is measure-then-place (see [`layout`]) and drawing goes through the
//! [`surface::DrawingSurface`] trait, so the same symbol can be written as an
//! SVG page or recorded for inspection.

pub mod config;
pub mod export;
pub mod layout;
pub mod surface;

mod error;
mod symbol;

pub use pinbox_core::{color, draw, geometry};

pub use error::PinboxError;
pub use symbol::{
    BORDER_THICKNESS, BUS_STEM_WIDTH, Column, NAME_SPACING, PIN_SPACING, Pin, PinDirection,
    STEM_LENGTH, Section, SectionBuilder, Symbol, SymbolBuilder, TEXT_PADDING, TEXT_SEPARATOR,
    TOP_BOTTOM_PADDING, WIRE_STEM_WIDTH, section_height,
};

use std::path::Path;

use log::{debug, info};

use config::AppConfig;
use export::{
    Exporter, OutputFormat,
    svg::{SvgExporter, SvgSettings},
};

/// Renders symbols to pages using an [`AppConfig`].
///
/// # Examples
///
/// ```rust,no_run
/// use pinbox::{Pin, PinDirection, Section, Symbol, SymbolRenderer, config::AppConfig};
///
/// let symbol = Symbol::builder("My symbol")
///     .with_section(
///         Section::builder()
///             .with_pin(Pin::new("i_foo", PinDirection::In, true, "logic [15:0]"))
///             .with_pin(Pin::new("o_bar", PinDirection::Out, false, "logic"))
///             .build(),
///     )
///     .build();
///
/// let renderer = SymbolRenderer::new(AppConfig::default());
/// let svg = renderer.render_svg(&symbol).expect("Failed to render");
/// assert!(svg.contains("My symbol"));
///
/// renderer
///     .render_to_file(&symbol, "symbol.svg")
///     .expect("Failed to write");
/// ```
#[derive(Debug, Default)]
pub struct SymbolRenderer {
    config: AppConfig,
}

impl SymbolRenderer {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Render `symbol` as an SVG document string.
    ///
    /// # Errors
    ///
    /// Returns [`PinboxError::Config`] if a configured color is invalid.
    pub fn render_svg(&self, symbol: &Symbol) -> Result<String, PinboxError> {
        info!(name = symbol.name(); "Rendering symbol to SVG");
        let settings = self.settings()?;

        let doc = export::svg::render_document(symbol, settings);
        debug!("SVG document rendered");

        Ok(doc.to_string())
    }

    /// Render `symbol` and write it to `path`.
    ///
    /// The format follows the path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`PinboxError::UnsupportedFormat`] before touching the file
    /// system if the extension is not supported, [`PinboxError::Config`] for
    /// an invalid color and [`PinboxError::Export`] if writing fails.
    pub fn render_to_file(
        &self,
        symbol: &Symbol,
        path: impl AsRef<Path>,
    ) -> Result<(), PinboxError> {
        let path = path.as_ref();
        let format = OutputFormat::from_path(path)?;
        info!(name = symbol.name(), path:? = path, format:? = format; "Rendering symbol to file");

        let mut exporter = match format {
            OutputFormat::Svg => {
                SvgExporter::new(path.to_string_lossy().into_owned(), self.settings()?)
            }
        };
        exporter.export_symbol(symbol)?;

        info!(path:? = path; "Symbol written");
        Ok(())
    }

    fn settings(&self) -> Result<SvgSettings, PinboxError> {
        Ok(SvgSettings::from_config(&self.config)?)
    }
}
