//! Command-line argument definitions for the Graffowl CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, page selection and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Graffowl diagram compiler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram
    #[arg(help = "Path to the input diagram (.graffle, .plist or .json)")]
    pub input: String,

    /// Path to the output ontology file
    #[arg(short, long, default_value = "out.owl")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Compile only the page with this title; may be repeated
    #[arg(long = "page", value_name = "TITLE")]
    pub pages: Vec<String>,

    /// Also write the diagram's graphic model as a Graphviz DOT file
    #[cfg(feature = "graphviz")]
    #[arg(long, value_name = "DOT_FILE")]
    pub graph: Option<String>,
}
