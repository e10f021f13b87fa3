use thiserror::Error;

use crate::container::ContainerError;

/// Errors raised while building the graphic model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Container(#[from] ContainerError),

    /// A record declares a graphic class the model cannot represent.
    #[error("Unsupported graphic kind `{class}` (record {id}) on page '{page}'")]
    UnsupportedKind { page: String, id: i64, class: String },

    #[error("Duplicate graphic id {id} on page '{page}'")]
    DuplicateId { page: String, id: i64 },
}
