//! Measure-then-place layout for symbols.
//!
//! Column widths are shared by every section of a symbol, so nothing can be
//! positioned until everything has been measured. Layout therefore runs in
//! two passes:
//!
//! 1. **Measure** (bottom-up): each [`Pin`](crate::Pin) reports a [`PinMeasure`],
//!    each [`Section`](crate::Section) folds its pins into a [`SectionMeasure`].
//! 2. **Place** (top-down): [`SymbolLayout::place`] takes the section measures
//!    and the title metrics, picks the shared widths and hands out one
//!    rectangle per section.
//!
//! Drawing then only reads the placed [`SymbolLayout`].

use log::debug;

use pinbox_core::{
    draw::{TextMeasurer, TextMetrics},
    geometry::{Bounds, Point, Size},
};

use crate::symbol::NAME_SPACING;

/// String whose rendered height is used as the height of every pin row.
pub const REFERENCE_TEXT: &str = "Hello world";

/// Font context for a layout pass.
///
/// Holds the measurer used for pin and title text, and the uniform row
/// height. The row height is measured once from [`REFERENCE_TEXT`] so all
/// rows stack evenly; glyphs taller than the reference string will overlap
/// the next row. Use [`LayoutContext::with_row_height`] to override it.
#[derive(Debug)]
pub struct LayoutContext<'a, M: TextMeasurer + ?Sized> {
    measurer: &'a M,
    row_height: f32,
}

impl<'a, M: TextMeasurer + ?Sized> LayoutContext<'a, M> {
    pub fn new(measurer: &'a M) -> Self {
        let row_height = measurer.measure(REFERENCE_TEXT).height();
        Self {
            measurer,
            row_height,
        }
    }

    /// Replace the measured row height (builder style).
    pub fn with_row_height(mut self, row_height: f32) -> Self {
        self.row_height = row_height;
        self
    }

    /// Height of a single pin row.
    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Measure `text` in this context's font.
    pub fn measure(&self, text: &str) -> TextMetrics {
        self.measurer.measure(text)
    }
}

/// Horizontal space a single pin needs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PinMeasure {
    inner_width: f32,
    outer_width: f32,
}

impl PinMeasure {
    pub fn new(inner_width: f32, outer_width: f32) -> Self {
        Self {
            inner_width,
            outer_width,
        }
    }

    /// Space taken inside the section by the name label and its padding.
    pub fn inner_width(self) -> f32 {
        self.inner_width
    }

    /// Space taken outside the section by the stem and type label.
    pub fn outer_width(self) -> f32 {
        self.outer_width
    }
}

/// Size requirements of a section.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SectionMeasure {
    rows: usize,
    height: f32,
    min_inner_width: f32,
    min_outer_width: f32,
}

impl SectionMeasure {
    pub fn new(rows: usize, height: f32, min_inner_width: f32, min_outer_width: f32) -> Self {
        Self {
            rows,
            height,
            min_inner_width,
            min_outer_width,
        }
    }

    pub fn rows(self) -> usize {
        self.rows
    }

    pub fn height(self) -> f32 {
        self.height
    }

    pub fn min_inner_width(self) -> f32 {
        self.min_inner_width
    }

    pub fn min_outer_width(self) -> f32 {
        self.min_outer_width
    }
}

/// A fully placed symbol: shared widths, title position and one rectangle
/// per section, in stacking order.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolLayout {
    row_height: f32,
    inner_width: f32,
    outer_width: f32,
    title_origin: Point,
    title_size: Size,
    sections: Vec<Bounds>,
}

impl SymbolLayout {
    /// Distribute the shared dimensions over the measured sections.
    ///
    /// Inner and outer widths are the maxima over all sections (zero when
    /// there are none). The title baseline sits at the title's own height and
    /// is centered over the inner width. Sections stack without gaps, starting
    /// [`NAME_SPACING`] below the title.
    pub fn place(sections: &[SectionMeasure], title: TextMetrics, row_height: f32) -> Self {
        let inner_width = sections
            .iter()
            .map(|section| section.min_inner_width())
            .fold(0.0, f32::max);
        let outer_width = sections
            .iter()
            .map(|section| section.min_outer_width())
            .fold(0.0, f32::max);

        let title_origin = Point::new(
            outer_width + (inner_width - title.width()) / 2.0,
            title.height(),
        );

        let mut cursor = title.height() + NAME_SPACING;
        let bounds = sections
            .iter()
            .map(|section| {
                let rect = Bounds::new_from_top_left(
                    Point::new(outer_width, cursor),
                    Size::new(inner_width, section.height()),
                );
                cursor += section.height();
                rect
            })
            .collect();

        debug!(
            inner_width,
            outer_width,
            sections_count = sections.len();
            "Symbol placed"
        );

        Self {
            row_height,
            inner_width,
            outer_width,
            title_origin,
            title_size: Size::new(title.width(), title.height()),
            sections: bounds,
        }
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Width shared by all section rectangles.
    pub fn inner_width(&self) -> f32 {
        self.inner_width
    }

    /// Margin left of the sections (and needed right of them) for stems and types.
    pub fn outer_width(&self) -> f32 {
        self.outer_width
    }

    /// Baseline origin of the title text.
    pub fn title_origin(&self) -> Point {
        self.title_origin
    }

    /// Section rectangles in stacking order.
    pub fn section_bounds(&self) -> &[Bounds] {
        &self.sections
    }

    /// Extent of everything the symbol paints, from the page origin.
    ///
    /// The right margin mirrors the left one, since output pins grow their
    /// stems and types outward by at most the shared outer width.
    pub fn bounds(&self) -> Bounds {
        let title = Bounds::new_from_top_left(
            Point::new(self.title_origin.x(), 0.0),
            self.title_size,
        );
        let body_height = self
            .sections
            .last()
            .map_or(self.title_size.height() + NAME_SPACING, |last| last.max_y());
        let body = Bounds::new_from_top_left(
            Point::default(),
            Size::new(2.0 * self.outer_width + self.inner_width, body_height),
        );
        body.merge(&title)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use pinbox_core::draw::FixedWidthMeasurer;

    use super::*;

    fn section(height: f32, inner: f32, outer: f32) -> SectionMeasure {
        SectionMeasure::new(1, height, inner, outer)
    }

    #[test]
    fn test_context_row_height_from_reference_text() {
        let measurer = FixedWidthMeasurer::new(6.0, 11.0, -8.0);
        let ctx = LayoutContext::new(&measurer);
        assert_approx_eq!(f32, ctx.row_height(), 11.0);

        let ctx = ctx.with_row_height(20.0);
        assert_approx_eq!(f32, ctx.row_height(), 20.0);
        assert_approx_eq!(f32, ctx.measure("ab").width(), 12.0);
    }

    #[test]
    fn test_place_widest_section_wins() {
        let measures = [
            section(30.0, 100.0, 40.0),
            section(40.0, 150.0, 20.0),
            section(50.0, 80.0, 60.0),
        ];
        let layout = SymbolLayout::place(&measures, TextMetrics::new(50.0, 10.0, -8.0), 10.0);

        assert_approx_eq!(f32, layout.inner_width(), 150.0);
        assert_approx_eq!(f32, layout.outer_width(), 60.0);
        for rect in layout.section_bounds() {
            assert_approx_eq!(f32, rect.width(), 150.0);
            assert_approx_eq!(f32, rect.min_x(), 60.0);
        }
    }

    #[test]
    fn test_place_stacks_sections_without_gaps() {
        let measures = [section(30.0, 10.0, 0.0), section(45.0, 10.0, 0.0)];
        let layout = SymbolLayout::place(&measures, TextMetrics::new(20.0, 12.0, -9.0), 10.0);
        let rects = layout.section_bounds();

        assert_approx_eq!(f32, rects[0].min_y(), 12.0 + NAME_SPACING);
        assert_approx_eq!(f32, rects[0].height(), 30.0);
        assert_approx_eq!(f32, rects[1].min_y(), rects[0].max_y());
        assert_approx_eq!(f32, rects[1].height(), 45.0);
    }

    #[test]
    fn test_place_centers_title() {
        let measures = [section(30.0, 100.0, 25.0)];
        let layout = SymbolLayout::place(&measures, TextMetrics::new(40.0, 12.0, -9.0), 10.0);
        assert_approx_eq!(f32, layout.title_origin().x(), 25.0 + 30.0);
        assert_approx_eq!(f32, layout.title_origin().y(), 12.0);
    }

    #[test]
    fn test_place_without_sections() {
        let layout = SymbolLayout::place(&[], TextMetrics::new(40.0, 12.0, -9.0), 10.0);
        assert_approx_eq!(f32, layout.inner_width(), 0.0);
        assert_approx_eq!(f32, layout.outer_width(), 0.0);
        assert!(layout.section_bounds().is_empty());
        // Title centered over a zero-width body hangs left of the origin
        assert_approx_eq!(f32, layout.title_origin().x(), -20.0);
    }

    #[test]
    fn test_bounds_cover_margins_and_sections() {
        let measures = [section(30.0, 100.0, 25.0), section(20.0, 60.0, 10.0)];
        let layout = SymbolLayout::place(&measures, TextMetrics::new(40.0, 12.0, -9.0), 10.0);
        let bounds = layout.bounds();
        assert_approx_eq!(f32, bounds.min_x(), 0.0);
        assert_approx_eq!(f32, bounds.width(), 150.0);
        assert_approx_eq!(f32, bounds.max_y(), 12.0 + NAME_SPACING + 50.0);
    }
}
