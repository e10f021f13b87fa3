//! Graffowl - Compile box-and-line diagrams into OWL 2 ontologies.
//!
//! Loading, model building, compilation and serialization for diagrams whose
//! graphics carry ontology tags in their notes. Imported diagrams are
//! followed and compiled along the way.

pub mod config;

mod error;
mod export;
mod imports;

pub use graffowl_compiler::{CompileError, Diagnostic, ErrorCode, Severity};
pub use graffowl_core::{model, ontology};

pub use error::GraffowlError;
pub use export::{Error as ExportError, Exporter, FunctionalSyntaxExporter};

use std::{io::Write, path::Path};

use log::{debug, info, trace, warn};

use graffowl_compiler::{Compiler, ImportLoader, NamespaceResolver};
use graffowl_core::{model::Diagram, ontology::Ontology};

use config::{AppConfig, OutputFormat};
use imports::{RecursiveImports, UnresolvedImports};

/// The result of compiling one diagram.
#[derive(Debug, Clone)]
pub struct Compilation {
    ontology: Ontology,
    warnings: Vec<Diagnostic>,
    imports: Vec<Ontology>,
}

impl Compilation {
    pub fn ontology(&self) -> &Ontology {
        &self.ontology
    }

    /// Problems that did not stop compilation, imports included.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Ontologies compiled from imported diagrams, innermost first.
    pub fn imports(&self) -> &[Ontology] {
        &self.imports
    }

    pub fn into_ontology(self) -> Ontology {
        self.ontology
    }
}

/// Builder for loading, compiling and writing diagram ontologies.
///
/// # Examples
///
/// ```rust,no_run
/// use graffowl::{OntologyBuilder, config::AppConfig};
///
/// let builder = OntologyBuilder::new(AppConfig::default());
///
/// // Load and compile a diagram, following its imports
/// let compilation = builder.build("animals.graffle")
///     .expect("Failed to compile");
///
/// // Write it as OWL functional syntax
/// let text = builder.render(compilation.ontology())
///     .expect("Failed to render");
/// println!("{text}");
/// ```
#[derive(Debug, Default)]
pub struct OntologyBuilder {
    config: AppConfig,
}

impl OntologyBuilder {
    /// Create a new ontology builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Namespace, compilation and output settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Load a diagram file and build its graphic model.
    ///
    /// # Errors
    ///
    /// Returns `GraffowlError::Model` when the file cannot be read or
    /// decoded, or holds a graphic the model cannot represent.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Diagram, GraffowlError> {
        let path = path.as_ref();
        info!(path:? = path; "Loading diagram");
        let diagram = Diagram::load(path)?;
        debug!(pages = diagram.pages().len(); "Diagram loaded");
        Ok(diagram)
    }

    /// Compile a loaded diagram into an ontology.
    ///
    /// Only the configured pages are compiled, or every page when none are
    /// configured. Imports are compiled recursively when `follow_imports` is
    /// set; otherwise they are named without being loaded.
    ///
    /// # Errors
    ///
    /// Returns `GraffowlError::Compile` for the first located compilation
    /// error, `GraffowlError::PageNotFound` for a configured page the
    /// diagram lacks.
    pub fn compile(&self, diagram: &Diagram) -> Result<Compilation, GraffowlError> {
        let pages = self.config.compile().pages();

        if !self.config.compile().follow_imports() {
            let imports = UnresolvedImports::new(self.config.namespaces().base());
            return self.compile_with(diagram, pages, &imports);
        }

        let imports = RecursiveImports::new(self, diagram.path());
        let mut compilation = self.compile_with(diagram, pages, &imports)?;
        let (ontologies, warnings) = imports.into_parts();
        compilation.imports = ontologies;
        compilation.warnings.extend(warnings);
        Ok(compilation)
    }

    /// Load and compile a diagram file.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`load`](Self::load) and
    /// [`compile`](Self::compile).
    pub fn build(&self, path: impl AsRef<Path>) -> Result<Compilation, GraffowlError> {
        let diagram = self.load(path)?;
        let compilation = self.compile(&diagram)?;
        for warning in compilation.warnings() {
            warn!(code = warning.code().as_str(); "{warning}");
        }
        Ok(compilation)
    }

    /// Write an ontology in the configured output format.
    ///
    /// # Errors
    ///
    /// Returns `GraffowlError::Export` when writing fails.
    pub fn write(&self, ontology: &Ontology, out: &mut dyn Write) -> Result<(), GraffowlError> {
        self.exporter().export(ontology, out)?;
        Ok(())
    }

    /// Render an ontology to a string in the configured output format.
    ///
    /// # Errors
    ///
    /// Returns `GraffowlError::Export` when rendering fails.
    pub fn render(&self, ontology: &Ontology) -> Result<String, GraffowlError> {
        Ok(self.exporter().export_to_string(ontology)?)
    }

    /// Render the graphic model of a diagram as a Graphviz DOT digraph.
    #[cfg(feature = "graphviz")]
    pub fn render_graph(&self, diagram: &Diagram) -> String {
        info!(diagram = diagram.file_name(); "Rendering diagram graph");
        export::graphviz::render(diagram)
    }

    fn exporter(&self) -> Box<dyn Exporter> {
        match self.config.output().format() {
            OutputFormat::Functional => Box::new(FunctionalSyntaxExporter::new()),
        }
    }

    /// Compiles `diagram`, restricted to `pages` when non-empty, resolving
    /// imports through `imports`.
    pub(crate) fn compile_with(
        &self,
        diagram: &Diagram,
        pages: &[String],
        imports: &dyn ImportLoader,
    ) -> Result<Compilation, GraffowlError> {
        let namespaces = NamespaceResolver::scan_with_prefixes(
            diagram,
            self.config.namespaces().base(),
            self.config.namespaces().prefixes(),
        )?;
        trace!(namespace = namespaces.default_namespace(); "Namespaces resolved");

        let mut compiler = Compiler::new(diagram, &namespaces, imports);
        let mut ontology = compiler.create_ontology();
        if pages.is_empty() {
            compiler.compile_diagram(&mut ontology)?;
        } else {
            for title in pages {
                let page = diagram
                    .page_by_title(title)
                    .ok_or_else(|| GraffowlError::PageNotFound(title.clone()))?;
                compiler.compile_page(page, &mut ontology)?;
            }
        }

        Ok(Compilation {
            warnings: compiler.warnings().to_vec(),
            ontology,
            imports: Vec::new(),
        })
    }
}
