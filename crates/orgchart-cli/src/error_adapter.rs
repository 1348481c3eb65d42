//! Error adapter for converting OrgChartError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's report formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use orgchart::OrgChartError;

/// Adapter giving every [`OrgChartError`] variant a stable diagnostic code.
pub struct ErrorAdapter<'a>(pub &'a OrgChartError);

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
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            OrgChartError::InvalidInput(_) => "orgchart::invalid_input",
            OrgChartError::InvalidLayoutBounds { .. } => "orgchart::layout_bounds",
            OrgChartError::MissingParent(_) => "orgchart::missing_parent",
            OrgChartError::Surface(_) => "orgchart::surface",
            OrgChartError::Io(_) => "orgchart::io",
            OrgChartError::Export(_) => "orgchart::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            OrgChartError::InvalidInput(_) => {
                "the input must be a JSON object with a `name` and optional `children`"
            }
            OrgChartError::InvalidLayoutBounds { .. } => {
                "increase canvas_width/canvas_height or reduce the margins in [layout]"
            }
            OrgChartError::Surface(_) => "check the colors in the [style] section",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
