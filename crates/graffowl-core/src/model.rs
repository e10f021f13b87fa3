//! The graphic model.
//!
//! Each [`Page`] owns an arena of [`Graphic`] nodes addressed by
//! [`GraphicId`]. Cross references (parents, connector ends, labels, line
//! groups) are ids into the same arena, so the model is an ordinary owned
//! tree with an overlaid graph.
//!
//! Pages are built in two phases: every record is instantiated and
//! registered first, then connector ends and labels are linked against the
//! registry. A final pass relates root shapes geometrically.

mod build;
mod diagram;
mod error;
mod graphic;
mod page;

pub use diagram::Diagram;
pub use error::ModelError;
pub use graphic::{
    Ends, Graphic, GraphicId, GraphicKind, GroupData, Layer, LayerId, LineData, LineGroupId,
    Metadata, ShapeData, TableData,
};
pub use page::{Location, Page};
