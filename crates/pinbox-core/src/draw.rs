//! Drawing primitives shared by every surface.
//!
//! - Strokes: [`StrokeDefinition`] for stems and borders
//! - Text: [`TextDefinition`] and the [`TextMeasurer`] implementations

mod stroke;
mod text;

pub use stroke::StrokeDefinition;
pub use text::{FixedWidthMeasurer, FontMeasurer, TextDefinition, TextMeasurer, TextMetrics};
