//! Text styling and measurement for pin and symbol labels.
//!
//! Layout depends on how wide and tall labels render, so every length in a
//! symbol ultimately comes from a [`TextMeasurer`]. Two measurers are provided:
//!
//! - [`FontMeasurer`] shapes text with real fonts through cosmic-text, under a
//!   [`TextDefinition`] (font family and size).
//! - [`FixedWidthMeasurer`] gives every character the same advance. It is
//!   deterministic regardless of installed fonts.
//!
//! # Quick Start
//!
//! ```
//! # use pinbox_core::draw::{FixedWidthMeasurer, TextMeasurer};
//! let measurer = FixedWidthMeasurer::new(7.0, 12.0, -9.0);
//! let metrics = measurer.measure("i_foo");
//! assert_eq!(metrics.width(), 35.0);
//! assert_eq!(metrics.height(), 12.0);
//! ```

use std::sync::{Mutex, OnceLock, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::{info, trace};

/// Extents of a single line of text.
///
/// `height` and `vertical_bearing` describe the line box the text sits in,
/// not the ink of its glyphs, so they do not depend on which characters are
/// measured. `vertical_bearing` is the offset from the baseline to the top of
/// the line box; with y growing downward it is negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    width: f32,
    height: f32,
    vertical_bearing: f32,
}

impl TextMetrics {
    pub fn new(width: f32, height: f32, vertical_bearing: f32) -> Self {
        Self {
            width,
            height,
            vertical_bearing,
        }
    }

    /// Horizontal advance of the text.
    pub fn width(self) -> f32 {
        self.width
    }

    /// Height of the line box.
    pub fn height(self) -> f32 {
        self.height
    }

    /// Offset from the baseline to the top of the line box (negative upward).
    pub fn vertical_bearing(self) -> f32 {
        self.vertical_bearing
    }
}

/// Measures text under a fixed font context.
///
/// Implementations must be pure: the same string always yields the same
/// metrics. Empty strings measure to [`TextMetrics::default`].
pub trait TextMeasurer {
    fn measure(&self, text: &str) -> TextMetrics;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str) -> TextMetrics {
        (**self).measure(text)
    }
}

/// Font configuration for label text.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `12` |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family (e.g., "Arial", "monospace").
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 12,
        }
    }
}

/// Measures text by shaping it with cosmic-text.
///
/// All font measurers share one process-wide [`FontSystem`], which is
/// expensive to create; access to it is serialized by a mutex.
#[derive(Debug, Clone, Default)]
pub struct FontMeasurer {
    definition: TextDefinition,
}

impl FontMeasurer {
    pub fn new(definition: TextDefinition) -> Self {
        Self { definition }
    }

    /// Returns the font configuration this measurer shapes with.
    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }
}

impl TextMeasurer for FontMeasurer {
    fn measure(&self, text: &str) -> TextMetrics {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_metrics(text, &self.definition)
    }
}

/// TextManager handles text measurement and font operations
/// It maintains a reusable FontSystem instance to avoid expensive recreation
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Shape `text` and report its advance and line box in pixels.
    ///
    /// The line box is `1.15 * font_size` tall. Only the first line is
    /// considered; labels are single-line. When no layout run is produced
    /// (e.g. no usable font), an estimate based on the font size is returned
    /// instead.
    fn calculate_text_metrics(&self, text: &str, text_def: &TextDefinition) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::default();
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let font_size_px = f32::from(text_def.font_size());
        let metrics = Metrics::new(font_size_px, font_size_px * 1.15);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(text_def.font_family()));
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let measured = buffer.layout_runs().next().map(|run| {
            let width = run.glyphs.last().map_or(0.0, |last| last.x + last.w);
            TextMetrics::new(width, metrics.line_height, run.line_top - run.line_y)
        });

        let text_metrics = measured.unwrap_or_else(|| {
            TextMetrics::new(
                text.chars().count() as f32 * font_size_px * 0.55,
                metrics.line_height,
                -font_size_px * 0.8,
            )
        });
        trace!(
            text,
            width = text_metrics.width(),
            height = text_metrics.height();
            "Measured text"
        );
        text_metrics
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

/// Measures text as if every character had the same advance.
///
/// Height and bearing are the same for every non-empty string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidthMeasurer {
    advance: f32,
    height: f32,
    vertical_bearing: f32,
}

impl FixedWidthMeasurer {
    pub fn new(advance: f32, height: f32, vertical_bearing: f32) -> Self {
        Self {
            advance,
            height,
            vertical_bearing,
        }
    }

    /// Approximates a proportional font of the given size.
    pub fn for_font_size(font_size: f32) -> Self {
        Self::new(font_size * 0.6, font_size, -font_size * 0.75)
    }
}

impl Default for FixedWidthMeasurer {
    fn default() -> Self {
        Self::for_font_size(12.0)
    }
}

impl TextMeasurer for FixedWidthMeasurer {
    fn measure(&self, text: &str) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::default();
        }
        TextMetrics::new(
            text.chars().count() as f32 * self.advance,
            self.height,
            self.vertical_bearing,
        )
    }
}
