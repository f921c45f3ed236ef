//! Error adapter for rendering [`PinboxError`] as miette diagnostics.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use pinbox::PinboxError;

/// Wraps a [`PinboxError`] so miette's report handlers can render it with
/// a code and, where there is something actionable, a help line.
pub struct ErrorAdapter<'a>(pub &'a PinboxError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            PinboxError::Io(_) => "pinbox::io",
            PinboxError::UnsupportedFormat { .. } => "pinbox::unsupported_format",
            PinboxError::Config(_) => "pinbox::config",
            PinboxError::Export(_) => "pinbox::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            PinboxError::UnsupportedFormat { .. } => "use an output path ending in `.svg`",
            PinboxError::Config(_) => {
                "check the configuration file; colors are CSS color strings and page sides must be positive"
            }
            PinboxError::Export(_) => "check that the output directory exists and is writable",
            PinboxError::Io(_) => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_of(err: &PinboxError) -> Option<String> {
        ErrorAdapter(err).code().map(|code| code.to_string())
    }

    #[test]
    fn test_codes_per_variant() {
        let unsupported = PinboxError::UnsupportedFormat {
            extension: "pdf".to_string(),
        };
        assert_eq!(
            code_of(&unsupported).as_deref(),
            Some("pinbox::unsupported_format")
        );
        assert_eq!(
            code_of(&PinboxError::Config("bad".to_string())).as_deref(),
            Some("pinbox::config")
        );
    }

    #[test]
    fn test_help_only_when_actionable() {
        let io = PinboxError::Io(std::io::Error::other("boom"));
        assert!(ErrorAdapter(&io).help().is_none());

        let unsupported = PinboxError::UnsupportedFormat {
            extension: "pdf".to_string(),
        };
        let help = ErrorAdapter(&unsupported).help().map(|h| h.to_string());
        assert!(help.is_some_and(|h| h.contains(".svg")));
    }

    #[test]
    fn test_renders_through_graphical_handler() {
        let err = PinboxError::UnsupportedFormat {
            extension: "pdf".to_string(),
        };
        let mut out = String::new();
        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
            .render_report(&mut out, &ErrorAdapter(&err))
            .unwrap();
        assert!(out.contains("Unsupported output format `pdf`"));
    }
}
