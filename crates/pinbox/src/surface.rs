//! Drawing surfaces.
//!
//! A [`DrawingSurface`] is the small, stateful path-and-text API symbols are
//! painted through: a current point, a current path, and a stack of graphics
//! states (ink and line width). Every surface is also the [`TextMeasurer`] for
//! its own font, so labels can be aligned against their painted width.
//!
//! Two surfaces are provided:
//!
//! - [`SvgSurface`](crate::export::svg::SvgSurface) turns paint calls into SVG nodes.
//! - [`RecordingSurface`] keeps the call sequence and the resulting marks, which
//!   is what layout is checked against.
//!
//! Surfaces are not meant to be shared between threads while painting; use one
//! surface per render.

use pinbox_core::{
    draw::{TextMeasurer, TextMetrics},
    geometry::{Bounds, Point},
};

/// Semantic color of painted content.
///
/// Surfaces map inks to concrete colors from their own style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Ink {
    /// Borders, stems, pin names and the title.
    #[default]
    Primary,
    /// De-emphasized content such as pin type labels.
    Secondary,
}

/// Primitive drawing operations used by symbols.
pub trait DrawingSurface: TextMeasurer {
    /// Push a copy of the current graphics state.
    fn save(&mut self);

    /// Pop the graphics state pushed by the matching [`save`](Self::save).
    fn restore(&mut self);

    fn set_color(&mut self, ink: Ink);

    fn set_line_width(&mut self, width: f32);

    /// Start a new sub-path at `point`.
    fn move_to(&mut self, point: Point);

    /// Move the current point by `offset` without drawing.
    fn rel_move_to(&mut self, offset: Point);

    /// Add a straight segment from the current point to `point`.
    fn line_to(&mut self, point: Point);

    /// Add a closed rectangle sub-path.
    fn rectangle(&mut self, bounds: Bounds);

    /// Stroke and clear the current path using the current state.
    fn stroke(&mut self);

    /// Paint `text` with its leading edge and baseline at the current point,
    /// then advance the current point by the text width.
    fn show_text(&mut self, text: &str);
}

/// Ink and line width, saved and restored as a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GraphicsState {
    pub(crate) ink: Ink,
    pub(crate) line_width: f32,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            ink: Ink::Primary,
            line_width: 1.0,
        }
    }
}

/// Current graphics state plus the saved ones beneath it.
#[derive(Debug, Clone, Default)]
pub(crate) struct StateStack {
    current: GraphicsState,
    saved: Vec<GraphicsState>,
}

impl StateStack {
    pub(crate) fn current(&self) -> GraphicsState {
        self.current
    }

    pub(crate) fn current_mut(&mut self) -> &mut GraphicsState {
        &mut self.current
    }

    pub(crate) fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Unbalanced restores leave the state untouched.
    pub(crate) fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.current = state;
        }
    }

    pub(crate) fn depth(&self) -> usize {
        self.saved.len()
    }
}

/// A single call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Save,
    Restore,
    SetColor(Ink),
    SetLineWidth(f32),
    MoveTo(Point),
    RelMoveTo(Point),
    LineTo(Point),
    Rectangle(Bounds),
    Stroke,
    ShowText(String),
}

/// Something that ended up visible on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    /// A stroked straight segment.
    Line {
        from: Point,
        to: Point,
        width: f32,
        ink: Ink,
    },
    /// A stroked rectangle.
    Rectangle { bounds: Bounds, width: f32, ink: Ink },
    /// Painted text; `origin` is the baseline start and `width` its advance.
    Text {
        text: String,
        origin: Point,
        width: f32,
        ink: Ink,
    },
}

#[derive(Debug, Clone, PartialEq)]
enum PathSegment {
    Line(Point, Point),
    Rectangle(Bounds),
}

/// A surface that records paint calls instead of rendering them.
///
/// # Examples
///
/// ```
/// # use pinbox::surface::{DrawingSurface, Mark, RecordingSurface};
/// # use pinbox_core::{draw::FixedWidthMeasurer, geometry::Point};
/// let mut surface = RecordingSurface::new(FixedWidthMeasurer::new(5.0, 10.0, -8.0));
/// surface.move_to(Point::new(10.0, 20.0));
/// surface.show_text("abc");
///
/// match &surface.marks()[0] {
///     Mark::Text { origin, width, .. } => {
///         assert_eq!(*origin, Point::new(10.0, 20.0));
///         assert_eq!(*width, 15.0);
///     }
///     other => panic!("unexpected mark {other:?}"),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RecordingSurface<M: TextMeasurer> {
    measurer: M,
    ops: Vec<PaintOp>,
    marks: Vec<Mark>,
    state: StateStack,
    current_point: Point,
    path: Vec<PathSegment>,
}

impl<M: TextMeasurer> RecordingSurface<M> {
    pub fn new(measurer: M) -> Self {
        Self {
            measurer,
            ops: Vec::new(),
            marks: Vec::new(),
            state: StateStack::default(),
            current_point: Point::default(),
            path: Vec::new(),
        }
    }

    /// Calls made so far, in order.
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Visible output so far, in paint order.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Painted text marks only.
    pub fn texts(&self) -> impl Iterator<Item = &Mark> {
        self.marks
            .iter()
            .filter(|mark| matches!(mark, Mark::Text { .. }))
    }

    /// Number of saves not yet matched by a restore.
    pub fn save_depth(&self) -> usize {
        self.state.depth()
    }
}

impl<M: TextMeasurer> TextMeasurer for RecordingSurface<M> {
    fn measure(&self, text: &str) -> TextMetrics {
        self.measurer.measure(text)
    }
}

impl<M: TextMeasurer> DrawingSurface for RecordingSurface<M> {
    fn save(&mut self) {
        self.ops.push(PaintOp::Save);
        self.state.save();
    }

    fn restore(&mut self) {
        self.ops.push(PaintOp::Restore);
        self.state.restore();
    }

    fn set_color(&mut self, ink: Ink) {
        self.ops.push(PaintOp::SetColor(ink));
        self.state.current_mut().ink = ink;
    }

    fn set_line_width(&mut self, width: f32) {
        self.ops.push(PaintOp::SetLineWidth(width));
        self.state.current_mut().line_width = width;
    }

    fn move_to(&mut self, point: Point) {
        self.ops.push(PaintOp::MoveTo(point));
        self.current_point = point;
    }

    fn rel_move_to(&mut self, offset: Point) {
        self.ops.push(PaintOp::RelMoveTo(offset));
        self.current_point = self.current_point.add_point(offset);
    }

    fn line_to(&mut self, point: Point) {
        self.ops.push(PaintOp::LineTo(point));
        self.path.push(PathSegment::Line(self.current_point, point));
        self.current_point = point;
    }

    fn rectangle(&mut self, bounds: Bounds) {
        self.ops.push(PaintOp::Rectangle(bounds));
        self.path.push(PathSegment::Rectangle(bounds));
        self.current_point = bounds.min_point();
    }

    fn stroke(&mut self) {
        self.ops.push(PaintOp::Stroke);
        let GraphicsState { ink, line_width } = self.state.current();
        let marks = self.path.drain(..).map(|segment| match segment {
            PathSegment::Line(from, to) => Mark::Line {
                from,
                to,
                width: line_width,
                ink,
            },
            PathSegment::Rectangle(bounds) => Mark::Rectangle {
                bounds,
                width: line_width,
                ink,
            },
        });
        self.marks.extend(marks);
    }

    fn show_text(&mut self, text: &str) {
        self.ops.push(PaintOp::ShowText(text.to_string()));
        let width = self.measurer.measure(text).width();
        self.marks.push(Mark::Text {
            text: text.to_string(),
            origin: self.current_point,
            width,
            ink: self.state.current().ink,
        });
        self.current_point = self.current_point.offset_x(width);
    }
}
