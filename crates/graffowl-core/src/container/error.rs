use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while decoding a diagram container.
///
/// All of these are fatal for the load: nothing downstream can run on a
/// document that failed to decode.
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("I/O error reading `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed property list at {path}: expected {expected}")]
    Malformed { path: String, expected: &'static str },

    #[error("Missing key `{key}` in {context}")]
    MissingKey {
        key: &'static str,
        context: &'static str,
    },

    #[error("Invalid geometry string `{0}`")]
    InvalidGeometry(String),
}

impl ContainerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<String>, expected: &'static str) -> Self {
        Self::Malformed {
            path: path.into(),
            expected,
        }
    }
}
