//! Error types for Graffowl operations.
//!
//! This module provides the main error type [`GraffowlError`] which wraps
//! the error conditions of every pipeline stage.

use std::io;

use thiserror::Error;

use graffowl_compiler::CompileError;
use graffowl_core::model::ModelError;

/// The main error type for Graffowl operations.
///
/// # Diagnostic Variants
///
/// The `Compile` variant carries an [`ErrorCode`](graffowl_compiler::ErrorCode)
/// and, where one is known, the page and coordinates of the offending
/// graphic.
#[derive(Debug, Error)]
pub enum GraffowlError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The diagram could not be read or its model could not be built.
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("No page titled '{0}'")]
    PageNotFound(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for GraffowlError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
