//! Diagnostics reported alongside compilation.

use std::fmt;

use graffowl_core::model::Location;

use super::{CompileError, ErrorCode, Severity};

/// A reportable problem: either a fatal [`CompileError`] or a warning the
/// compiler recorded and moved past.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    severity: Severity,
    code: ErrorCode,
    message: String,
    location: Option<Location>,
    help: Option<String>,
}

impl Diagnostic {
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            location: None,
            help: None,
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl From<CompileError> for Diagnostic {
    fn from(error: CompileError) -> Self {
        Self {
            severity: Severity::Error,
            code: error.code(),
            message: error.message().to_string(),
            location: error.location().cloned(),
            help: error.help().map(str::to_string),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        if let Some(location) = &self.location {
            write!(f, " at {location}")?;
        }
        Ok(())
    }
}
