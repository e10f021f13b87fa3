//! # Graffowl Compiler
//!
//! Turns a tagged box-and-line [`Diagram`] into an OWL 2 [`Ontology`].
//!
//! Each graphic's note names what it stands for (`owl-class`,
//! `subclass-of`, `some-values`, …). The compiler reads those tags, follows
//! connectors between graphics to build nested class expressions, data
//! ranges and property expressions, and adds the resulting axioms to the
//! ontology.
//!
//! ## Usage
//!
//! ```no_run
//! # use std::path::Path;
//! # use graffowl_compiler::{ImportError, ImportLoader, Imported, NamespaceResolver, compile};
//! # use graffowl_core::model::Diagram;
//! struct NoImports;
//!
//! impl ImportLoader for NoImports {
//!     fn load(&self, path: &Path) -> Result<Imported, ImportError> {
//!         Err(ImportError::Cycle(path.to_path_buf()))
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let diagram = Diagram::load("animals.graffle")?;
//! let namespaces = NamespaceResolver::scan(&diagram, graffowl_compiler::DEFAULT_BASE)?;
//! let (ontology, _warnings) = compile(&diagram, &namespaces, &NoImports)?;
//! println!("{} axioms", ontology.axiom_count());
//! # Ok(())
//! # }
//! ```

pub mod cardinality;
mod compiler;
pub mod error;
pub mod namespace;
pub mod note;
pub mod rule;

pub use compiler::{Compiler, ImportError, ImportLoader, Imported};
pub use error::{CompileError, Diagnostic, ErrorCode, Severity};
pub use namespace::{DEFAULT_BASE, NamespaceResolver, normalize};
pub use note::{Note, NoteCategory};

use graffowl_core::{model::Diagram, ontology::Ontology};

/// Compiles every page of `diagram` into a fresh ontology named by the
/// default namespace.
///
/// Returns the ontology with any warnings raised along the way.
pub fn compile(
    diagram: &Diagram,
    namespaces: &NamespaceResolver,
    imports: &dyn ImportLoader,
) -> Result<(Ontology, Vec<Diagnostic>), CompileError> {
    let mut compiler = Compiler::new(diagram, namespaces, imports);
    let mut ontology = compiler.create_ontology();
    compiler.compile_diagram(&mut ontology)?;
    Ok((ontology, compiler.warnings().to_vec()))
}
