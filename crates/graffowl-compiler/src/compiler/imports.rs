//! `ontology-import` connectors.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use graffowl_core::ontology::{Entity, Iri, Ontology};
use log::info;
use thiserror::Error;

use super::{Compiler, Node};
use crate::{
    error::{CompileError, ErrorCode, Result},
    note::Note,
};

const DIAGRAM_EXTENSIONS: [&str; 3] = ["graffle", "plist", "json"];

/// Why an imported diagram could not be loaded.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The diagram is already being compiled further up the import chain.
    #[error("Import cycle through {}", .0.display())]
    Cycle(PathBuf),

    #[error("Failed to import {}", .path.display())]
    Failed {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// An ontology brought in by an `ontology-import` connector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Imported {
    iri: Iri,
    signature: BTreeSet<Entity>,
}

impl Imported {
    /// An import whose entities are unknown.
    pub fn new(iri: Iri) -> Self {
        Self {
            iri,
            signature: BTreeSet::new(),
        }
    }

    /// Entities declared by the import and by everything it imports.
    pub fn with_signature(mut self, signature: BTreeSet<Entity>) -> Self {
        self.signature = signature;
        self
    }

    pub fn iri(&self) -> &Iri {
        &self.iri
    }

    pub fn signature(&self) -> &BTreeSet<Entity> {
        &self.signature
    }
}

/// Loads and compiles the diagrams a diagram imports.
pub trait ImportLoader {
    /// Compiles the diagram at `path` and returns its ontology IRI along
    /// with the entities it makes visible.
    fn load(&self, path: &Path) -> std::result::Result<Imported, ImportError>;
}

impl<'d> Compiler<'d> {
    /// Adds the import declarations and returns the imported entities.
    pub(super) fn process_imports(&self, ontology: &mut Ontology) -> Result<BTreeSet<Entity>> {
        let mut visible = BTreeSet::new();
        for connector in self.connectors(Note::OntologyImport)? {
            let target = self.head(connector)?;
            let name = self.shape(target)?.text().trim();
            if !is_diagram_file(name) {
                return Err(target
                    .error(ErrorCode::E400, "Only diagram imports are supported")
                    .with_help(format!("`{name}` is not a .graffle, .plist or .json file")));
            }

            let path = match self.diagram.path().parent() {
                Some(dir) => dir.join(name),
                None => PathBuf::from(name),
            };
            info!(path:? = path; "Importing diagram");
            let imported = self
                .imports
                .load(&path)
                .map_err(|err| import_error(target, name, err))?;
            ontology.add_import(imported.iri.clone());
            visible.extend(imported.signature);
        }
        Ok(visible)
    }
}

fn is_diagram_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            DIAGRAM_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

fn import_error(target: Node<'_>, name: &str, err: ImportError) -> CompileError {
    match err {
        ImportError::Cycle(path) => target
            .error(ErrorCode::E401, "Import cycle")
            .with_help(format!("{} is already being compiled", path.display())),
        ImportError::Failed { source, .. } => target
            .error(ErrorCode::E402, format!("Failed to import {name}"))
            .with_help(source.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagram_extensions() {
        assert!(is_diagram_file("animals.graffle"));
        assert!(is_diagram_file("sub/dir/pets.JSON"));
        assert!(is_diagram_file("x.plist"));
        assert!(!is_diagram_file("animals.owl"));
        assert!(!is_diagram_file("graffle"));
        assert!(!is_diagram_file(""));
    }
}
