//! Sections: bordered, two-column groups of pins.

use log::debug;

use pinbox_core::{
    draw::TextMeasurer,
    geometry::{Bounds, Point},
};

use crate::{
    layout::{LayoutContext, SectionMeasure},
    surface::DrawingSurface,
    symbol::pin::{Column, Pin},
};

/// Minimum gap between the widest left name and the widest right name.
pub const TEXT_SEPARATOR: f32 = 10.0;
/// Space above the first row and below the last row.
pub const TOP_BOTTOM_PADDING: f32 = 10.0;
/// Line width of the section border.
pub const BORDER_THICKNESS: f32 = 1.5;
/// Vertical gap between consecutive rows.
pub const PIN_SPACING: f32 = 5.0;

/// Height of a section with `rows` rows of `row_height` each.
///
/// An empty section keeps its top and bottom padding, so it is never shorter
/// than `2 * TOP_BOTTOM_PADDING`.
pub fn section_height(rows: usize, row_height: f32) -> f32 {
    let gaps = rows.saturating_sub(1) as f32;
    PIN_SPACING * gaps + rows as f32 * row_height + 2.0 * TOP_BOTTOM_PADDING
}

/// A group of pins drawn inside one border.
///
/// Inputs go to the left column and everything else to the right column (see
/// [`PinDirection::column`](crate::PinDirection::column)). Within a column
/// pins keep their insertion order. Sections are assembled with a
/// [`SectionBuilder`] and are read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    name: Option<String>,
    pins: Vec<Pin>,
}

impl Section {
    pub fn builder() -> SectionBuilder {
        SectionBuilder::default()
    }

    /// Display name, reserved for section headers; not drawn.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// All pins in insertion order.
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// Pins of one column in insertion order.
    pub fn column(&self, column: Column) -> impl Iterator<Item = &Pin> {
        self.pins.iter().filter(move |pin| pin.column() == column)
    }

    /// Number of rows: the length of the longer column.
    pub fn rows(&self) -> usize {
        let left = self.column(Column::Left).count();
        let right = self.pins.len() - left;
        left.max(right)
    }

    pub fn height<M: TextMeasurer + ?Sized>(&self, ctx: &LayoutContext<'_, M>) -> f32 {
        section_height(self.rows(), ctx.row_height())
    }

    /// Width between the borders needed for the names of both columns not to
    /// collide: widest left name, plus [`TEXT_SEPARATOR`], plus widest right name.
    pub fn min_inner_width<M: TextMeasurer + ?Sized>(&self, ctx: &LayoutContext<'_, M>) -> f32 {
        let widest = |column: Column| {
            self.column(column)
                .map(|pin| pin.inner_width(ctx))
                .fold(0.0, f32::max)
        };
        widest(Column::Left) + TEXT_SEPARATOR + widest(Column::Right)
    }

    /// Margin needed outside the border: the widest outer width of any pin.
    pub fn min_outer_width<M: TextMeasurer + ?Sized>(&self, ctx: &LayoutContext<'_, M>) -> f32 {
        self.pins
            .iter()
            .map(|pin| pin.outer_width(ctx))
            .fold(0.0, f32::max)
    }

    pub fn measure<M: TextMeasurer + ?Sized>(&self, ctx: &LayoutContext<'_, M>) -> SectionMeasure {
        let measure = SectionMeasure::new(
            self.rows(),
            self.height(ctx),
            self.min_inner_width(ctx),
            self.min_outer_width(ctx),
        );
        debug!(
            name = self.name().unwrap_or_default(),
            rows = measure.rows(),
            height = measure.height();
            "Section measured"
        );
        measure
    }

    /// Stroke the border at `rect` and draw every pin.
    ///
    /// Each column walks its own cursor down from the top padding, so a
    /// shorter column simply ends early. The cursor is the baseline of the
    /// row, one `row_height` below the row's top.
    pub fn draw(&self, surface: &mut dyn DrawingSurface, rect: Bounds, row_height: f32) {
        surface.save();

        surface.save();
        surface.set_line_width(BORDER_THICKNESS);
        surface.rectangle(rect);
        surface.stroke();
        surface.restore();

        for (column, x) in [(Column::Left, rect.min_x()), (Column::Right, rect.max_x())] {
            let mut cursor = rect.min_y() + TOP_BOTTOM_PADDING;
            for pin in self.column(column) {
                cursor += row_height;
                pin.draw(surface, Point::new(x, cursor));
                cursor += PIN_SPACING;
            }
        }

        surface.restore();
    }
}

/// Append-only builder for [`Section`].
///
/// # Examples
///
/// ```
/// # use pinbox::{Pin, PinDirection, Section};
/// let section = Section::builder()
///     .with_pin(Pin::new("i_foo", PinDirection::In, true, "logic [15:0]"))
///     .with_pin(Pin::new("o_bar", PinDirection::Out, false, "logic"))
///     .build();
/// assert_eq!(section.rows(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SectionBuilder {
    section: Section,
}

impl SectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name (builder style).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.section.name = Some(name.into());
        self
    }

    /// Append a pin.
    pub fn add_pin(&mut self, pin: Pin) -> &mut Self {
        self.section.pins.push(pin);
        self
    }

    /// Append a pin (builder style).
    pub fn with_pin(mut self, pin: Pin) -> Self {
        self.add_pin(pin);
        self
    }

    pub fn build(self) -> Section {
        self.section
    }
}
