//! Stroke definitions for pin stems and section borders.
//!
//! # Overview
//!
//! Exported types:
//! - [`StrokeDefinition`]: color and width of a stroked path
//! - [`apply_stroke!`](crate::apply_stroke!): Macro for applying stroke attributes to SVG elements
//!
//! The defaults match the usual vector-surface defaults: black and 1 unit
//! wide. Caps are always butt and joins always miter.
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute |
//! |--------------|---------------|
//! | `color` | `stroke`, `stroke-opacity` |
//! | `width` | `stroke-width` |
//! | (fixed) | `stroke-linecap="butt"` |
//! | (fixed) | `stroke-linejoin="miter"` |

use crate::color::Color;

/// A stroke definition for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use pinbox_core::draw::StrokeDefinition;
/// use pinbox_core::color::Color;
///
/// // Default stroke (black, 1px)
/// let wire = StrokeDefinition::default();
/// assert_eq!(wire.width(), 1.0);
///
/// let bus = StrokeDefinition::new(Color::new("black").unwrap(), 2.0);
/// assert_eq!(bus.width(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use pinbox_core::draw::StrokeDefinition;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::default();
/// let line = svg_element::Path::new().set("d", "M 0 0 L 15 0");
/// let line = pinbox_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", "butt")
            .set("stroke-linejoin", "miter")
    }};
}
