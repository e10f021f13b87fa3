//! Serialization of compiled ontologies and debugging dumps of diagrams.

mod functional;
#[cfg(feature = "graphviz")]
pub mod graphviz;

use std::io::{self, Write};

use thiserror::Error;

use graffowl_core::ontology::Ontology;

pub use functional::FunctionalSyntaxExporter;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to write ontology: {0}")]
    Io(#[from] io::Error),
}

/// Writes an ontology in some textual syntax.
pub trait Exporter {
    fn export(&self, ontology: &Ontology, out: &mut dyn Write) -> Result<(), Error>;

    /// Exports into a string.
    fn export_to_string(&self, ontology: &Ontology) -> Result<String, Error> {
        let mut buffer = Vec::new();
        self.export(ontology, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
