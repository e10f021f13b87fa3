//! Error adapter for converting GraffowlError to miette diagnostics.
//!
//! This module provides the bridge between the library's error and
//! diagnostic types and miette's rich report formatting used in the CLI.
//! Diagrams are not text, so reports carry the offending graphic's page and
//! position in their message instead of a source snippet.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan};

use graffowl::{Diagnostic, GraffowlError, Severity};

/// Adapter for a single compile diagnostic, error or warning.
#[derive(Debug)]
pub struct DiagnosticAdapter {
    diag: Diagnostic,
}

impl DiagnosticAdapter {
    pub fn new(diag: Diagnostic) -> Self {
        Self { diag }
    }
}

impl fmt::Display for DiagnosticAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.diag.location() {
            Some(location) => write!(f, "{}: {location}", self.diag.message()),
            None => f.write_str(self.diag.message()),
        }
    }
}

impl std::error::Error for DiagnosticAdapter {}

impl MietteDiagnostic for DiagnosticAdapter {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.diag.code()))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.diag.severity() {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }
}

/// Adapter for [`GraffowlError`] variants without a diagnostic code.
pub struct ErrorAdapter<'a>(pub &'a GraffowlError);

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
            GraffowlError::Io(_) => "graffowl::io",
            GraffowlError::Model(_) => "graffowl::model",
            GraffowlError::Compile(_) => "graffowl::compile",
            GraffowlError::PageNotFound(_) => "graffowl::page",
            GraffowlError::Export(_) => "graffowl::export",
        };
        Some(Box::new(code))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A coded compile diagnostic.
    Diagnostic(DiagnosticAdapter),
    /// Any other error.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn severity(&self) -> Option<miette::Severity> {
        match self {
            Reportable::Diagnostic(d) => d.severity(),
            Reportable::Error(e) => e.severity(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }
}

/// Convert a [`GraffowlError`] into a list of reportable errors.
///
/// Compile errors become coded diagnostics; every other variant is reported
/// as a plain error.
pub fn to_reportables(err: &GraffowlError) -> Vec<Reportable<'_>> {
    match err {
        GraffowlError::Compile(compile_err) => vec![Reportable::Diagnostic(
            DiagnosticAdapter::new(Diagnostic::from(compile_err.clone())),
        )],
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

/// Render a report with miette's graphical handler.
pub fn render(reportable: &Reportable<'_>) -> String {
    let mut writer = String::new();
    if GraphicalReportHandler::new()
        .render_report(&mut writer, reportable)
        .is_err()
    {
        return reportable.to_string();
    }
    writer
}
