//! Symbols: a title over vertically stacked sections.
//!
//! # Structure
//!
//! ```text
//!              My symbol
//!          ┌───────────────────┐
//!  type ───┤ i_foo       o_bar ├─── type
//!  type ━━━┥ i_barfoo          │
//!          ├───────────────────┤
//!          │ ...               │
//!          └───────────────────┘
//!  <outer>  <----- inner ----->
//! ```
//!
//! All sections share one inner width (the widest section's) and one outer
//! margin, so their borders line up.

mod pin;
mod section;

pub use pin::{
    BUS_STEM_WIDTH, Column, Pin, PinDirection, STEM_LENGTH, TEXT_PADDING, WIRE_STEM_WIDTH,
};
pub use section::{
    BORDER_THICKNESS, PIN_SPACING, Section, SectionBuilder, TEXT_SEPARATOR, TOP_BOTTOM_PADDING,
    section_height,
};

use log::{debug, info};

use pinbox_core::draw::TextMeasurer;

use crate::{
    layout::{LayoutContext, SectionMeasure, SymbolLayout},
    surface::DrawingSurface,
};

/// Vertical gap between the title and the first section.
pub const NAME_SPACING: f32 = 5.0;

/// A named symbol made of stacked sections.
///
/// Built with a [`SymbolBuilder`], then laid out and drawn any number of
/// times. Drawing never changes the symbol.
///
/// # Examples
///
/// ```
/// # use pinbox::{Pin, PinDirection, Section, Symbol, surface::RecordingSurface};
/// # use pinbox_core::draw::FixedWidthMeasurer;
/// let section = Section::builder()
///     .with_pin(Pin::new("i_foo", PinDirection::In, true, "logic [15:0]"))
///     .build();
/// let symbol = Symbol::builder("My symbol").with_section(section).build();
///
/// let mut surface = RecordingSurface::new(FixedWidthMeasurer::default());
/// let layout = symbol.draw(&mut surface);
/// assert_eq!(layout.section_bounds().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    name: String,
    sections: Vec<Section>,
}

impl Symbol {
    pub fn builder(name: impl Into<String>) -> SymbolBuilder {
        SymbolBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sections in stacking order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// First layout pass: size requirements of every section.
    pub fn measure<M: TextMeasurer + ?Sized>(
        &self,
        ctx: &LayoutContext<'_, M>,
    ) -> Vec<SectionMeasure> {
        self.sections
            .iter()
            .map(|section| section.measure(ctx))
            .collect()
    }

    /// Measure and place the symbol.
    pub fn layout<M: TextMeasurer + ?Sized>(&self, ctx: &LayoutContext<'_, M>) -> SymbolLayout {
        let measures = self.measure(ctx);
        SymbolLayout::place(&measures, ctx.measure(&self.name), ctx.row_height())
    }

    /// Lay the symbol out in the surface's own font and draw it.
    ///
    /// Returns the layout that was drawn.
    pub fn draw(&self, surface: &mut dyn DrawingSurface) -> SymbolLayout {
        let layout = {
            let ctx = LayoutContext::new(&*surface);
            self.layout(&ctx)
        };
        self.draw_layout(surface, &layout);
        layout
    }

    /// Second layout pass: draw the title and every section into `layout`.
    ///
    /// `layout` must come from [`Symbol::layout`] on this symbol; extra
    /// section rectangles are ignored and missing ones leave sections undrawn.
    pub fn draw_layout(&self, surface: &mut dyn DrawingSurface, layout: &SymbolLayout) {
        info!(
            name = self.name,
            sections_count = self.sections.len();
            "Drawing symbol"
        );

        surface.save();
        surface.move_to(layout.title_origin());
        surface.show_text(&self.name);
        surface.restore();

        for (section, rect) in self.sections.iter().zip(layout.section_bounds()) {
            debug!(
                x = rect.min_x(),
                y = rect.min_y(),
                width = rect.width(),
                height = rect.height();
                "Drawing section"
            );
            section.draw(surface, *rect, layout.row_height());
        }
    }
}

/// Append-only builder for [`Symbol`].
#[derive(Debug, Clone)]
pub struct SymbolBuilder {
    symbol: Symbol,
}

impl SymbolBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            symbol: Symbol {
                name: name.into(),
                sections: Vec::new(),
            },
        }
    }

    /// Append a section below the previous ones.
    pub fn add_section(&mut self, section: Section) -> &mut Self {
        self.symbol.sections.push(section);
        self
    }

    /// Append a section (builder style).
    pub fn with_section(mut self, section: Section) -> Self {
        self.add_section(section);
        self
    }

    pub fn build(self) -> Symbol {
        self.symbol
    }
}
