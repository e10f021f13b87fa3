//! Errors and diagnostics raised while compiling a diagram.
//!
//! # Overview
//!
//! Compilation stops at the first [`CompileError`] on a page. Each error
//! carries an [`ErrorCode`], a message and, when the problem can be pinned
//! to a graphic, the [`Location`] of that graphic on its page.
//!
//! Problems that do not stop compilation, such as a note that names no known
//! tag, are reported as warning [`Diagnostic`]s instead.
//!
//! # Example
//!
//! ```
//! # use graffowl_compiler::error::{CompileError, ErrorCode};
//! # use graffowl_core::{geometry::Point, model::Location};
//! let error = CompileError::new(ErrorCode::E100, "Must be a shape")
//!     .at(Location::new("Animals", Point::new(10.0, 20.0)));
//!
//! assert_eq!(error.to_string(), "Must be a shape: 'Animals'(10,20)");
//! ```
//!
//! [`Location`]: graffowl_core::model::Location

mod compile_error;
mod diagnostic;
mod error_code;
mod severity;

pub(crate) use compile_error::Result;

pub use compile_error::CompileError;
pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use severity::Severity;
