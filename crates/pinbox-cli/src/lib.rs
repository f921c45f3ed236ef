//! CLI logic for the Pinbox symbol renderer.
//!
//! Renders the demonstration symbol to a single page.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::info;

use pinbox::{Pin, PinDirection, PinboxError, Section, Symbol, SymbolRenderer};

/// Run the Pinbox CLI application
///
/// Loads the configuration, applies the page size overrides and writes the
/// demonstration symbol to `args.output`.
///
/// # Errors
///
/// Returns `PinboxError` for:
/// - Configuration loading or validation errors
/// - Unsupported output formats
/// - Rendering or file errors
pub fn run(args: &Args) -> Result<(), PinboxError> {
    info!(output_path = args.output; "Rendering symbol page");

    let mut app_config = config::load_config(args.config.as_ref())?;
    config::apply_page_overrides(&mut app_config, args.width, args.height)?;

    let symbol = demo_symbol();
    let renderer = SymbolRenderer::new(app_config);
    renderer.render_to_file(&symbol, &args.output)?;

    info!(output_file = args.output; "Symbol exported successfully");

    Ok(())
}

/// The symbol drawn by the CLI: one section with three inputs and one output.
pub fn demo_symbol() -> Symbol {
    let section = Section::builder()
        .with_pin(Pin::new("i_foo", PinDirection::In, true, "logic [15:0]"))
        .with_pin(Pin::new("o_bar", PinDirection::Out, false, "logic"))
        .with_pin(Pin::new("i_foobar", PinDirection::In, false, "logic"))
        .with_pin(Pin::new("i_barfoo", PinDirection::In, true, "logic [15:0]"))
        .build();

    Symbol::builder("My symbol").with_section(section).build()
}
