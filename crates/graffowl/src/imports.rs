//! Import loaders used by [`OntologyBuilder`](crate::OntologyBuilder).

use std::{
    cell::RefCell,
    collections::{BTreeSet, HashMap},
    path::{Path, PathBuf},
};

use log::{debug, info};

use graffowl_compiler::{Diagnostic, ImportError, ImportLoader, Imported};
use graffowl_core::{
    model::Diagram,
    ontology::{Entity, Iri, Ontology},
};

use crate::OntologyBuilder;

/// Loads and compiles imported diagrams recursively.
///
/// The paths currently being compiled form a stack; importing one of them
/// again is a cycle. Compiled imports and their warnings are kept so callers
/// can report and write them alongside the importing ontology.
///
/// Each compiled import hands back its signature together with the
/// signatures of everything it imports.
pub(crate) struct RecursiveImports<'b> {
    builder: &'b OntologyBuilder,
    stack: RefCell<Vec<PathBuf>>,
    compiled: RefCell<Vec<Ontology>>,
    signatures: RefCell<HashMap<Iri, BTreeSet<Entity>>>,
    warnings: RefCell<Vec<Diagnostic>>,
}

impl<'b> RecursiveImports<'b> {
    pub(crate) fn new(builder: &'b OntologyBuilder, root: &Path) -> Self {
        Self {
            builder,
            stack: RefCell::new(vec![normalize_path(root)]),
            compiled: RefCell::new(Vec::new()),
            signatures: RefCell::new(HashMap::new()),
            warnings: RefCell::new(Vec::new()),
        }
    }

    /// The compiled imports in completion order, and their warnings.
    pub(crate) fn into_parts(self) -> (Vec<Ontology>, Vec<Diagnostic>) {
        (self.compiled.into_inner(), self.warnings.into_inner())
    }

    /// The signature of `ontology` and of every import compiled for it.
    fn closure(&self, ontology: &Ontology) -> BTreeSet<Entity> {
        let signatures = self.signatures.borrow();
        let mut signature = ontology.signature();
        for import in ontology.imports() {
            if let Some(imported) = signatures.get(import) {
                signature.extend(imported.iter().cloned());
            }
        }
        signature
    }
}

impl ImportLoader for RecursiveImports<'_> {
    fn load(&self, path: &Path) -> Result<Imported, ImportError> {
        let key = normalize_path(path);
        if self.stack.borrow().contains(&key) {
            return Err(ImportError::Cycle(path.to_path_buf()));
        }

        info!(path:? = path, depth = self.stack.borrow().len(); "Compiling import");
        self.stack.borrow_mut().push(key);
        let result = Diagram::load(path)
            .map_err(crate::GraffowlError::from)
            .and_then(|diagram| self.builder.compile_with(&diagram, &[], self));
        self.stack.borrow_mut().pop();

        let compilation = result.map_err(|err| ImportError::Failed {
            path: path.to_path_buf(),
            source: Box::new(err),
        })?;
        let iri = compilation.ontology.iri().clone();
        let signature = self.closure(&compilation.ontology);
        debug!(ontology = iri.as_str(), entities = signature.len(); "Import compiled");
        self.signatures
            .borrow_mut()
            .insert(iri.clone(), signature.clone());
        self.warnings.borrow_mut().extend(compilation.warnings);
        self.compiled.borrow_mut().push(compilation.ontology);
        Ok(Imported::new(iri).with_signature(signature))
    }
}

/// Names imports by where they would live without loading them.
///
/// An import's IRI is the configured base followed by its file name, the
/// same default namespace the imported diagram gets when it declares none.
pub(crate) struct UnresolvedImports<'b> {
    base: &'b str,
}

impl<'b> UnresolvedImports<'b> {
    pub(crate) fn new(base: &'b str) -> Self {
        Self { base }
    }
}

impl ImportLoader for UnresolvedImports<'_> {
    fn load(&self, path: &Path) -> Result<Imported, ImportError> {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        debug!(path:? = path; "Import not followed");
        Ok(Imported::new(Iri::new(format!("{}{name}", self.base))))
    }
}

/// Canonical form of a path for cycle detection, falling back to the path
/// as given when it cannot be resolved.
fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
