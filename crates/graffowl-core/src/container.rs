//! Diagram container reading.
//!
//! Decodes a diagram file into a generic property-list tree and exposes
//! typed views over its sheets and graphic records.
//!
//! # Overview
//!
//! - [`DiagramDocument`] - A loaded document and its sheets
//! - [`SheetRecord`] - One sheet: title, layers, graphic records
//! - [`GraphicRecord`] - Typed accessors over one graphic dictionary
//! - [`PlistValue`] - The generic decoded value tree
//!
//! Both XML property lists and JSON documents of the same shape are
//! accepted, optionally gzip-compressed. Text stored as RTF is reduced to
//! plain text by the [`rtf`] module.

mod document;
mod error;
mod json;
mod record;
mod value;
mod xml;

pub mod rtf;

pub use document::{DiagramDocument, LayerRecord, SheetRecord, decode};
pub use error::ContainerError;
pub use json::parse_json;
pub use record::{GraphicClass, GraphicRecord, parse_bounds, parse_point};
pub use value::{Dict, PlistValue};
pub use xml::parse_xml;
