//! Configuration types for symbol rendering.
//!
//! All types implement [`serde::Deserialize`] with every field defaulted, so
//! a partial (or empty) configuration file is valid.
//!
//! - [`AppConfig`] - Root combining text, style and page settings.
//! - [`TextConfig`] - Font used for every label.
//! - [`StyleConfig`] - Colors of painted content and the page background.
//! - [`PageConfig`] - Output page size.
//!
//! # Example
//!
//! ```
//! # use pinbox::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().line_color().is_ok());
//! assert_eq!(config.page().width(), 320.0);
//! ```

use serde::Deserialize;

use pinbox_core::{
    color::{Color, ColorError},
    draw::TextDefinition,
};

const DEFAULT_FONT_FAMILY: &str = "sans-serif";
const DEFAULT_FONT_SIZE: u16 = 12;
const DEFAULT_LINE_COLOR: &str = "black";
const DEFAULT_TYPE_COLOR: &str = "#808080";
const DEFAULT_PAGE_SIZE: f32 = 320.0;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    text: TextConfig,

    #[serde(default)]
    style: StyleConfig,

    #[serde(default)]
    page: PageConfig,
}

impl AppConfig {
    pub fn new(text: TextConfig, style: StyleConfig, page: PageConfig) -> Self {
        Self { text, style, page }
    }

    pub fn text(&self) -> &TextConfig {
        &self.text
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    /// Mutable page settings, for command line overrides.
    pub fn page_mut(&mut self) -> &mut PageConfig {
        &mut self.page
    }
}

/// Font settings for pin names, type labels and the symbol title.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    font_family: String,
    font_size: u16,
}

impl TextConfig {
    pub fn new(font_family: impl Into<String>, font_size: u16) -> Self {
        Self {
            font_family: font_family.into(),
            font_size,
        }
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// The [`TextDefinition`] labels are measured and painted with.
    pub fn to_definition(&self) -> TextDefinition {
        let mut definition = TextDefinition::new();
        definition.set_font_family(&self.font_family);
        definition.set_font_size(self.font_size);
        definition
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE)
    }
}

/// Colors, as CSS color strings. They are parsed when read.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Option<String>,
    line_color: String,
    type_color: String,
}

impl StyleConfig {
    pub fn new(
        background_color: Option<String>,
        line_color: impl Into<String>,
        type_color: impl Into<String>,
    ) -> Self {
        Self {
            background_color,
            line_color: line_color.into(),
            type_color: type_color.into(),
        }
    }

    /// Page background, or `None` for a transparent page.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn background_color(&self) -> Result<Option<Color>, ColorError> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
    }

    /// Color of borders, stems, pin names and the title.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn line_color(&self) -> Result<Color, ColorError> {
        Color::new(&self.line_color)
    }

    /// Color of pin type labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn type_color(&self) -> Result<Color, ColorError> {
        Color::new(&self.type_color)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new(None, DEFAULT_LINE_COLOR, DEFAULT_TYPE_COLOR)
    }
}

/// Output page dimensions. The symbol is drawn from the page origin.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    width: f32,
    height: f32,
}

impl PageConfig {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE)
    }
}
