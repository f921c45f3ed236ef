//! SVG page output.
//!
//! [`SvgSurface`] implements [`DrawingSurface`] on top of the `svg` crate:
//! each stroke becomes one `<path>` element and each label one `<text>`
//! element with its baseline at the current point. [`SvgExporter`] wraps it
//! into a page-sized document and writes the file.

use std::{fs::File, io::Write};

use log::{debug, error, info, warn};
use svg::{
    Document, Node,
    node::{
        Text as SvgText,
        element::{self as svg_element, path::Data},
    },
};

use pinbox_core::{
    apply_stroke,
    color::{Color, ColorError},
    draw::{FontMeasurer, StrokeDefinition, TextDefinition, TextMeasurer, TextMetrics},
    geometry::{Bounds, Point},
};

use crate::{
    Symbol,
    config::{AppConfig, PageConfig},
    export,
    layout::SymbolLayout,
    surface::{DrawingSurface, GraphicsState, Ink, StateStack},
};

/// Concrete colors for each [`Ink`], plus the page background.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    line_color: Color,
    type_color: Color,
    background_color: Option<Color>,
}

impl SvgStyle {
    pub fn new(line_color: Color, type_color: Color, background_color: Option<Color>) -> Self {
        Self {
            line_color,
            type_color,
            background_color,
        }
    }

    /// Color painted for `ink`.
    pub fn color(&self, ink: Ink) -> Color {
        match ink {
            Ink::Primary => self.line_color,
            Ink::Secondary => self.type_color,
        }
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            line_color: Color::default(),
            type_color: Color::new("#808080").expect("'#808080' is a valid CSS color"),
            background_color: None,
        }
    }
}

/// Everything an SVG page needs besides the symbol itself.
#[derive(Debug, Clone, Default)]
pub struct SvgSettings {
    page: PageConfig,
    text: TextDefinition,
    style: SvgStyle,
}

impl SvgSettings {
    pub fn new(page: PageConfig, text: TextDefinition, style: SvgStyle) -> Self {
        Self { page, text, style }
    }

    /// Resolve the page, font and colors of `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured color is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, ColorError> {
        let style = config.style();
        Ok(Self {
            page: *config.page(),
            text: config.text().to_definition(),
            style: SvgStyle::new(
                style.line_color()?,
                style.type_color()?,
                style.background_color()?,
            ),
        })
    }

    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    pub fn text(&self) -> &TextDefinition {
        &self.text
    }

    pub fn style(&self) -> &SvgStyle {
        &self.style
    }
}

#[derive(Debug, Clone, Copy)]
enum PathSegment {
    Line(Point, Point),
    Rectangle(Bounds),
}

/// A [`DrawingSurface`] producing SVG nodes.
///
/// The measurer decides the text widths used for alignment, and must match
/// the font the document declares; [`SvgSurface::with_font`] pairs them.
#[derive(Debug)]
pub struct SvgSurface<M: TextMeasurer = FontMeasurer> {
    measurer: M,
    settings: SvgSettings,
    state: StateStack,
    current_point: Point,
    path: Vec<PathSegment>,
    nodes: Vec<Box<dyn Node>>,
}

impl SvgSurface<FontMeasurer> {
    /// A surface measuring with the font declared in `settings`.
    pub fn with_font(settings: SvgSettings) -> Self {
        let measurer = FontMeasurer::new(settings.text().clone());
        Self::new(measurer, settings)
    }
}

impl<M: TextMeasurer> SvgSurface<M> {
    pub fn new(measurer: M, settings: SvgSettings) -> Self {
        Self {
            measurer,
            settings,
            state: StateStack::default(),
            current_point: Point::default(),
            path: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Number of elements painted so far.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Finish the page: a document of the configured size holding the
    /// optional background and every painted element in order.
    pub fn into_document(self) -> Document {
        let (width, height) = (self.settings.page.width(), self.settings.page.height());

        let mut doc = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0.0, 0.0, width, height));

        if let Some(background) = self.settings.style.background_color() {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", &background),
            );
        }

        self.nodes.into_iter().fold(doc, |doc, node| doc.add(node))
    }

    fn path_data(segments: &[PathSegment]) -> Data {
        segments.iter().fold(Data::new(), |data, segment| match *segment {
            PathSegment::Line(from, to) => data
                .move_to((from.x(), from.y()))
                .line_to((to.x(), to.y())),
            PathSegment::Rectangle(bounds) => data
                .move_to((bounds.min_x(), bounds.min_y()))
                .line_to((bounds.max_x(), bounds.min_y()))
                .line_to((bounds.max_x(), bounds.max_y()))
                .line_to((bounds.min_x(), bounds.max_y()))
                .close(),
        })
    }
}

impl<M: TextMeasurer> TextMeasurer for SvgSurface<M> {
    fn measure(&self, text: &str) -> TextMetrics {
        self.measurer.measure(text)
    }
}

impl<M: TextMeasurer> DrawingSurface for SvgSurface<M> {
    fn save(&mut self) {
        self.state.save();
    }

    fn restore(&mut self) {
        self.state.restore();
    }

    fn set_color(&mut self, ink: Ink) {
        self.state.current_mut().ink = ink;
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.current_mut().line_width = width;
    }

    fn move_to(&mut self, point: Point) {
        self.current_point = point;
    }

    fn rel_move_to(&mut self, offset: Point) {
        self.current_point = self.current_point.add_point(offset);
    }

    fn line_to(&mut self, point: Point) {
        self.path.push(PathSegment::Line(self.current_point, point));
        self.current_point = point;
    }

    fn rectangle(&mut self, bounds: Bounds) {
        self.path.push(PathSegment::Rectangle(bounds));
        self.current_point = bounds.min_point();
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }

        let GraphicsState { ink, line_width } = self.state.current();
        let stroke = StrokeDefinition::new(self.settings.style.color(ink), line_width);
        let data = Self::path_data(&self.path);
        self.path.clear();

        let path = svg_element::Path::new().set("fill", "none").set("d", data);
        self.nodes.push(Box::new(apply_stroke!(path, &stroke)));
    }

    fn show_text(&mut self, text: &str) {
        let width = self.measurer.measure(text).width();
        let color = self.settings.style.color(self.state.current().ink);

        let node = svg_element::Text::new("")
            .set("x", self.current_point.x())
            .set("y", self.current_point.y())
            .set("font-family", self.settings.text.font_family())
            .set("font-size", self.settings.text.font_size())
            .set("fill", &color)
            .set("fill-opacity", color.alpha())
            .add(SvgText::new(text));
        self.nodes.push(Box::new(node));

        self.current_point = self.current_point.offset_x(width);
    }
}

/// Writes symbols as standalone SVG files.
#[derive(Debug)]
pub struct SvgExporter {
    file_name: String,
    settings: SvgSettings,
}

impl SvgExporter {
    pub fn new(file_name: impl Into<String>, settings: SvgSettings) -> Self {
        Self {
            file_name: file_name.into(),
            settings,
        }
    }

    /// Draw `symbol` onto a fresh page without writing anything.
    pub fn render_document(&self, symbol: &Symbol) -> Document {
        render_document(symbol, self.settings.clone())
    }

    /// Writes an SVG document to the configured file.
    pub fn write_document(&self, doc: Document) -> Result<(), export::Error> {
        info!(file_name = self.file_name; "Creating SVG file");
        let f = match File::create(&self.file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = self.file_name, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(&f, "{doc}") {
            error!(file_name = self.file_name, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl export::Exporter for SvgExporter {
    fn export_symbol(&mut self, symbol: &Symbol) -> Result<(), export::Error> {
        let doc = self.render_document(symbol);
        debug!("SVG document rendered");

        self.write_document(doc)
    }
}

/// Draw `symbol` on a font-measured page described by `settings`.
pub fn render_document(symbol: &Symbol, settings: SvgSettings) -> Document {
    let page = *settings.page();
    let mut surface = SvgSurface::with_font(settings);
    let layout = symbol.draw(&mut surface);
    warn_on_overflow(&layout, &page);
    surface.into_document()
}

/// The page is never resized to fit; content past its edges is clipped.
fn warn_on_overflow(layout: &SymbolLayout, page: &PageConfig) {
    let bounds = layout.bounds();
    if bounds.min_x() < 0.0 || bounds.max_x() > page.width() || bounds.max_y() > page.height() {
        warn!(
            content_width = bounds.width(),
            content_height = bounds.max_y(),
            page_width = page.width(),
            page_height = page.height();
            "Symbol does not fit on the page"
        );
    }
}

#[cfg(test)]
mod tests {
    use pinbox_core::draw::FixedWidthMeasurer;

    use super::*;
    use crate::{Pin, PinDirection, Section};

    fn settings() -> SvgSettings {
        SvgSettings::new(
            PageConfig::new(320.0, 320.0),
            TextDefinition::default(),
            SvgStyle::new(
                Color::new("black").unwrap(),
                Color::new("#808080").unwrap(),
                Some(Color::new("white").unwrap()),
            ),
        )
    }

    fn surface() -> SvgSurface<FixedWidthMeasurer> {
        SvgSurface::new(FixedWidthMeasurer::new(5.0, 10.0, -8.0), settings())
    }

    #[test]
    fn test_document_has_page_size_and_background() {
        let doc = surface().into_document().to_string();
        assert!(doc.contains(r#"width="320""#));
        assert!(doc.contains(r#"height="320""#));
        assert!(doc.contains("<rect"));
    }

    #[test]
    fn test_stroke_emits_one_path_per_call() {
        let mut surface = surface();
        surface.set_line_width(2.0);
        surface.move_to(Point::new(0.0, 0.0));
        surface.line_to(Point::new(15.0, 0.0));
        surface.stroke();
        surface.stroke();

        assert_eq!(surface.node_count(), 1);
        let doc = surface.into_document().to_string();
        assert!(doc.contains(r#"stroke-width="2""#));
        assert!(doc.contains(r#"fill="none""#));
    }

    #[test]
    fn test_secondary_text_uses_type_color() {
        let mut surface = surface();
        surface.save();
        surface.set_color(Ink::Secondary);
        surface.move_to(Point::new(10.0, 20.0));
        surface.show_text("logic");
        surface.restore();

        let doc = surface.into_document().to_string();
        assert!(doc.contains(">logic</text>"));
        assert!(doc.contains(&Color::new("#808080").unwrap().to_string()));
    }

    #[test]
    fn test_symbol_draws_every_label() {
        let symbol = Symbol::builder("My symbol")
            .with_section(
                Section::builder()
                    .with_pin(Pin::new("i_foo", PinDirection::In, true, "logic [15:0]"))
                    .with_pin(Pin::new("o_bar", PinDirection::Out, false, "logic"))
                    .build(),
            )
            .build();

        let mut surface = surface();
        symbol.draw(&mut surface);
        let doc = surface.into_document().to_string();

        for label in ["My symbol", "i_foo", "o_bar", "logic [15:0]", "logic"] {
            assert!(doc.contains(&format!(">{label}</text>")), "missing {label}");
        }
    }

    #[test]
    fn test_style_maps_inks() {
        let style = SvgStyle::default();
        assert_eq!(style.color(Ink::Primary), Color::default());
        assert_ne!(style.color(Ink::Secondary), style.color(Ink::Primary));
        assert!(style.background_color().is_none());
    }
}
