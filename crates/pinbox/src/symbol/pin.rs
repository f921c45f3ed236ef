//! Pins: the directional connection points of a symbol.

use std::fmt;

use log::trace;

use pinbox_core::{draw::TextMeasurer, geometry::Point};

use crate::{
    layout::{LayoutContext, PinMeasure},
    surface::{DrawingSurface, Ink},
};

/// Length of the stem line between the section border and the type label.
pub const STEM_LENGTH: f32 = 15.0;
/// Stem line width of single-wire pins.
pub const WIRE_STEM_WIDTH: f32 = 1.0;
/// Stem line width of bus pins.
pub const BUS_STEM_WIDTH: f32 = 2.0;
/// Gap between a label and the border or stem it belongs to.
pub const TEXT_PADDING: f32 = 5.0;

/// Signal direction of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinDirection {
    In,
    Out,
    InOut,
}

impl PinDirection {
    /// Column a pin of this direction is drawn in.
    ///
    /// | Direction | Column |
    /// |-----------|--------|
    /// | `In` | [`Column::Left`] |
    /// | `Out` | [`Column::Right`] |
    /// | `InOut` | [`Column::Right`] |
    ///
    /// Bidirectional pins share the output column and are drawn exactly like
    /// outputs.
    pub fn column(self) -> Column {
        match self {
            Self::In => Column::Left,
            Self::Out | Self::InOut => Column::Right,
        }
    }
}

impl fmt::Display for PinDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "inout",
        };
        f.write_str(name)
    }
}

/// One of the two pin columns of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Anchored on the left border; stems grow leftward.
    Left,
    /// Anchored on the right border; stems grow rightward.
    Right,
}

impl Column {
    /// Sign of the x direction pointing away from the section.
    fn outward(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Where text sits relative to the point it is drawn at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextAlign {
    /// Leading edge at the point; text grows rightward.
    Start,
    /// Trailing edge at the point; text grows leftward.
    End,
}

/// A named, typed connection point.
///
/// # Examples
///
/// ```
/// # use pinbox::{Pin, PinDirection, Column};
/// let pin = Pin::new("i_foo", PinDirection::In, true, "logic [15:0]");
/// assert_eq!(pin.column(), Column::Left);
/// assert!(pin.is_bus());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pin {
    name: String,
    direction: PinDirection,
    is_bus: bool,
    ty: String,
}

impl Pin {
    pub fn new(
        name: impl Into<String>,
        direction: PinDirection,
        is_bus: bool,
        ty: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            direction,
            is_bus,
            ty: ty.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> PinDirection {
        self.direction
    }

    pub fn is_bus(&self) -> bool {
        self.is_bus
    }

    /// Type annotation drawn past the stem.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn column(&self) -> Column {
        self.direction.column()
    }

    /// Line width of the stem.
    pub fn stem_width(&self) -> f32 {
        if self.is_bus {
            BUS_STEM_WIDTH
        } else {
            WIRE_STEM_WIDTH
        }
    }

    /// Space needed inside the section for the name: padding plus name width.
    pub fn inner_width<M: TextMeasurer + ?Sized>(&self, ctx: &LayoutContext<'_, M>) -> f32 {
        TEXT_PADDING + ctx.measure(&self.name).width()
    }

    /// Space needed outside the section: stem, padding and type width.
    pub fn outer_width<M: TextMeasurer + ?Sized>(&self, ctx: &LayoutContext<'_, M>) -> f32 {
        STEM_LENGTH + TEXT_PADDING + ctx.measure(&self.ty).width()
    }

    /// Row height shared by every pin in `ctx`.
    pub fn height<M: TextMeasurer + ?Sized>(ctx: &LayoutContext<'_, M>) -> f32 {
        ctx.row_height()
    }

    pub fn measure<M: TextMeasurer + ?Sized>(&self, ctx: &LayoutContext<'_, M>) -> PinMeasure {
        PinMeasure::new(self.inner_width(ctx), self.outer_width(ctx))
    }

    /// Paint the name, stem and type label of this pin.
    ///
    /// `anchor` is the point on the section border where the stem starts; its
    /// y is the baseline of both labels. The name sits inside the section and
    /// the type outside, each [`TEXT_PADDING`] away from the border or stem
    /// end, so left-column names and right-column types read left-to-right
    /// while the other two are right-aligned.
    pub fn draw(&self, surface: &mut dyn DrawingSurface, anchor: Point) {
        let column = self.column();
        let outward = column.outward();
        trace!(
            name = self.name,
            x = anchor.x(),
            y = anchor.y();
            "Drawing pin"
        );

        surface.save();

        let (name_align, type_align) = match column {
            Column::Left => (TextAlign::Start, TextAlign::End),
            Column::Right => (TextAlign::End, TextAlign::Start),
        };

        surface.save();
        show_aligned_text(
            surface,
            anchor.offset_x(-outward * TEXT_PADDING),
            &self.name,
            name_align,
        );
        surface.restore();

        // Center the stem on the name's glyphs rather than on its baseline
        let stem_y = anchor.y() + surface.measure(&self.name).vertical_bearing() / 2.0;
        surface.save();
        surface.set_line_width(self.stem_width());
        surface.move_to(anchor.with_y(stem_y));
        surface.line_to(Point::new(anchor.x() + outward * STEM_LENGTH, stem_y));
        surface.stroke();
        surface.restore();

        surface.save();
        surface.set_color(Ink::Secondary);
        show_aligned_text(
            surface,
            anchor.offset_x(outward * (STEM_LENGTH + TEXT_PADDING)),
            &self.ty,
            type_align,
        );
        surface.restore();

        surface.restore();
    }
}

fn show_aligned_text(surface: &mut dyn DrawingSurface, at: Point, text: &str, align: TextAlign) {
    surface.move_to(at);
    if align == TextAlign::End {
        let width = surface.measure(text).width();
        surface.rel_move_to(Point::new(-width, 0.0));
    }
    surface.show_text(text);
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use pinbox_core::draw::FixedWidthMeasurer;

    use super::*;
    use crate::surface::{Mark, PaintOp, RecordingSurface};

    fn measurer() -> FixedWidthMeasurer {
        FixedWidthMeasurer::new(5.0, 10.0, -8.0)
    }

    fn text_mark<'a>(surface: &'a RecordingSurface<FixedWidthMeasurer>, text: &str) -> &'a Mark {
        surface
            .texts()
            .find(|mark| matches!(mark, Mark::Text { text: t, .. } if t == text))
            .expect("text should be painted")
    }

    fn stem(surface: &RecordingSurface<FixedWidthMeasurer>) -> (Point, Point, f32) {
        surface
            .marks()
            .iter()
            .find_map(|mark| match mark {
                Mark::Line { from, to, width, .. } => Some((*from, *to, *width)),
                _ => None,
            })
            .expect("stem should be stroked")
    }

    #[test]
    fn test_direction_to_column() {
        assert_eq!(PinDirection::In.column(), Column::Left);
        assert_eq!(PinDirection::Out.column(), Column::Right);
        assert_eq!(PinDirection::InOut.column(), Column::Right);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(PinDirection::InOut.to_string(), "inout");
    }

    #[test]
    fn test_widths() {
        let measurer = measurer();
        let ctx = LayoutContext::new(&measurer);
        let pin = Pin::new("i_foo", PinDirection::In, true, "logic [15:0]");

        assert_approx_eq!(f32, pin.inner_width(&ctx), TEXT_PADDING + 25.0);
        assert_approx_eq!(f32, pin.outer_width(&ctx), STEM_LENGTH + TEXT_PADDING + 60.0);
        assert_approx_eq!(f32, Pin::height(&ctx), 10.0);
        assert_eq!(pin.measure(&ctx), PinMeasure::new(30.0, 80.0));
    }

    #[test]
    fn test_empty_strings_measure_to_padding_only() {
        let measurer = measurer();
        let ctx = LayoutContext::new(&measurer);
        let pin = Pin::new("", PinDirection::Out, false, "");
        assert_approx_eq!(f32, pin.inner_width(&ctx), TEXT_PADDING);
        assert_approx_eq!(f32, pin.outer_width(&ctx), STEM_LENGTH + TEXT_PADDING);
    }

    #[test]
    fn test_stem_width_follows_bus() {
        assert_approx_eq!(
            f32,
            Pin::new("a", PinDirection::In, true, "t").stem_width(),
            BUS_STEM_WIDTH
        );
        assert_approx_eq!(
            f32,
            Pin::new("a", PinDirection::In, false, "t").stem_width(),
            WIRE_STEM_WIDTH
        );
    }

    #[test]
    fn test_input_pin_geometry() {
        let mut surface = RecordingSurface::new(measurer());
        let pin = Pin::new("i_foo", PinDirection::In, true, "logic");
        pin.draw(&mut surface, Point::new(100.0, 40.0));

        // Name starts inside the border
        match text_mark(&surface, "i_foo") {
            Mark::Text { origin, ink, .. } => {
                assert_approx_eq!(f32, origin.x(), 100.0 + TEXT_PADDING);
                assert_approx_eq!(f32, origin.y(), 40.0);
                assert_eq!(*ink, Ink::Primary);
            }
            _ => unreachable!(),
        }

        // Stem grows leftward, centered on half the bearing
        let (from, to, width) = stem(&surface);
        assert_eq!(from, Point::new(100.0, 36.0));
        assert_eq!(to, Point::new(100.0 - STEM_LENGTH, 36.0));
        assert_approx_eq!(f32, width, BUS_STEM_WIDTH);

        // Type ends just past the stem end
        match text_mark(&surface, "logic") {
            Mark::Text {
                origin, width, ink, ..
            } => {
                assert_approx_eq!(f32, origin.x() + width, 100.0 - STEM_LENGTH - TEXT_PADDING);
                assert_eq!(*ink, Ink::Secondary);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_output_pin_geometry() {
        for direction in [PinDirection::Out, PinDirection::InOut] {
            let mut surface = RecordingSurface::new(measurer());
            let pin = Pin::new("o_bar", direction, false, "logic");
            pin.draw(&mut surface, Point::new(200.0, 40.0));

            // Name ends inside the border
            match text_mark(&surface, "o_bar") {
                Mark::Text { origin, width, .. } => {
                    assert_approx_eq!(f32, origin.x() + width, 200.0 - TEXT_PADDING);
                }
                _ => unreachable!(),
            }

            let (from, to, width) = stem(&surface);
            assert_eq!(from, Point::new(200.0, 36.0));
            assert_eq!(to, Point::new(200.0 + STEM_LENGTH, 36.0));
            assert_approx_eq!(f32, width, WIRE_STEM_WIDTH);

            match text_mark(&surface, "logic") {
                Mark::Text { origin, .. } => {
                    assert_approx_eq!(f32, origin.x(), 200.0 + STEM_LENGTH + TEXT_PADDING);
                }
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn test_draw_paint_sequence() {
        let mut surface = RecordingSurface::new(measurer());
        let pin = Pin::new("ab", PinDirection::Out, true, "t");
        pin.draw(&mut surface, Point::new(50.0, 20.0));

        let expected = vec![
            PaintOp::Save,
            PaintOp::Save,
            PaintOp::MoveTo(Point::new(45.0, 20.0)),
            PaintOp::RelMoveTo(Point::new(-10.0, 0.0)),
            PaintOp::ShowText("ab".to_string()),
            PaintOp::Restore,
            PaintOp::Save,
            PaintOp::SetLineWidth(BUS_STEM_WIDTH),
            PaintOp::MoveTo(Point::new(50.0, 16.0)),
            PaintOp::LineTo(Point::new(65.0, 16.0)),
            PaintOp::Stroke,
            PaintOp::Restore,
            PaintOp::Save,
            PaintOp::SetColor(Ink::Secondary),
            PaintOp::MoveTo(Point::new(70.0, 20.0)),
            PaintOp::ShowText("t".to_string()),
            PaintOp::Restore,
            PaintOp::Restore,
        ];
        assert_eq!(surface.ops(), expected.as_slice());
        assert_eq!(surface.save_depth(), 0);
    }
}
