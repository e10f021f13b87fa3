//! Graffowl CLI library.
//!
//! This crate provides the command-line interface for Graffowl: argument
//! parsing, configuration file discovery and rendering of errors and
//! warnings as miette reports.

mod args;
mod config;

pub mod error_adapter;

pub use args::Args;

use std::{fs, path::Path};

use log::{info, warn};

use graffowl::{GraffowlError, OntologyBuilder};

use error_adapter::{DiagnosticAdapter, Reportable};

/// Run the Graffowl compiler with the given arguments.
///
/// Loads the configuration, compiles the input diagram (following its
/// imports unless configured otherwise) and writes the ontology in OWL
/// functional syntax. Warnings are reported through the log.
///
/// # Errors
///
/// Returns a [`GraffowlError`] if configuration loading, diagram loading,
/// compilation or writing any output fails.
pub fn run(args: &Args) -> Result<(), GraffowlError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let input = Path::new(&args.input);
    let mut app_config = config::load_config(args.config.as_deref().map(Path::new), input)?;
    if !args.pages.is_empty() {
        app_config = app_config.with_pages(args.pages.clone());
    }

    let builder = OntologyBuilder::new(app_config);
    let diagram = builder.load(input)?;

    #[cfg(feature = "graphviz")]
    if let Some(graph) = &args.graph {
        fs::write(graph, builder.render_graph(&diagram))?;
        info!(graph_file = graph; "Diagram graph written");
    }

    let compilation = builder.compile(&diagram)?;
    for warning in compilation.warnings() {
        let report = Reportable::Diagnostic(DiagnosticAdapter::new(warning.clone()));
        warn!("{}", error_adapter::render(&report));
    }

    let text = builder.render(compilation.ontology())?;
    fs::write(&args.output, text)?;

    info!(
        output_file = args.output,
        axioms = compilation.ontology().axiom_count(),
        imports = compilation.imports().len();
        "Ontology exported successfully"
    );

    Ok(())
}
