//! Integration tests for the SymbolRenderer API

use std::fs;

use tempfile::tempdir;

use pinbox::{
    Pin, PinDirection, PinboxError, Section, Symbol, SymbolRenderer,
    config::AppConfig,
    draw::FixedWidthMeasurer,
    surface::{Mark, RecordingSurface},
};

fn demo_symbol() -> Symbol {
    Symbol::builder("My symbol")
        .with_section(
            Section::builder()
                .with_pin(Pin::new("i_foo", PinDirection::In, true, "logic [15:0]"))
                .with_pin(Pin::new("o_bar", PinDirection::Out, false, "logic"))
                .with_pin(Pin::new("i_foobar", PinDirection::In, false, "logic"))
                .with_pin(Pin::new("i_barfoo", PinDirection::In, true, "logic [15:0]"))
                .build(),
        )
        .build()
}

#[test]
fn test_render_svg() {
    let renderer = SymbolRenderer::default();
    let result = renderer.render_svg(&demo_symbol());

    match result {
        Ok(svg) => {
            assert!(svg.contains("<svg"), "Output should contain SVG tag");
            assert!(svg.contains("</svg>"), "Output should be complete SVG");
            assert!(svg.contains("i_barfoo"));
        }
        Err(err) => panic!("Failed to render: {err:?}"),
    }
}

#[test]
fn test_render_to_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("symbol.svg");

    SymbolRenderer::default()
        .render_to_file(&demo_symbol(), &path)
        .expect("Failed to write symbol");

    let content = fs::read_to_string(&path).expect("Output file should exist");
    assert!(content.starts_with("<svg"));
    assert!(content.contains("My symbol"));
}

#[test]
fn test_unsupported_format_writes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("image.pdf");

    let result = SymbolRenderer::default().render_to_file(&demo_symbol(), &path);

    assert!(matches!(
        result,
        Err(PinboxError::UnsupportedFormat { ref extension }) if extension == "pdf"
    ));
    assert!(!path.exists());
}

#[test]
fn test_missing_directory_is_export_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("missing").join("symbol.svg");

    let result = SymbolRenderer::default().render_to_file(&demo_symbol(), &path);
    match result {
        Err(PinboxError::Export(pinbox::export::Error::Io(err))) => {
            assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected an export I/O error, got {other:?}"),
    }
}

#[test]
fn test_invalid_config_color_is_config_error() {
    let config = config_with_line_color("not-a-color");
    let result = SymbolRenderer::new(config).render_svg(&demo_symbol());
    assert!(matches!(result, Err(PinboxError::Config(_))), "{result:?}");
}

#[test]
fn test_recording_surface_sees_every_label() {
    let symbol = demo_symbol();
    let mut surface = RecordingSurface::new(FixedWidthMeasurer::default());
    symbol.draw(&mut surface);

    let texts: Vec<&str> = surface
        .texts()
        .filter_map(|mark| match mark {
            Mark::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();

    assert_eq!(texts[0], "My symbol");
    // Name and type for each of the four pins
    assert_eq!(texts.len(), 1 + 4 * 2);
    assert_eq!(surface.save_depth(), 0);
}

fn config_with_line_color(line_color: &str) -> AppConfig {
    use pinbox::config::{PageConfig, StyleConfig, TextConfig};

    let style = StyleConfig::new(None, line_color, "#808080");
    AppConfig::new(TextConfig::default(), style, PageConfig::default())
}
