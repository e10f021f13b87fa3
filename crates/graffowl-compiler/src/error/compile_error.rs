use std::fmt;

use graffowl_core::model::Location;

use super::ErrorCode;

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, CompileError>;

/// A fatal compile error, located at the offending graphic when one is
/// known.
///
/// Displays as `<message>: '<page>'(x,y)`, or the bare message when there is
/// no location.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileError {
    code: ErrorCode,
    message: String,
    location: Option<Location>,
    help: Option<String>,
}

impl CompileError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            location: None,
            help: None,
        }
    }

    /// Pins the error to a graphic's location.
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
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

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{}: {location}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for CompileError {}
