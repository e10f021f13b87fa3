//! Configuration types for Graffowl compilation.
//!
//! This module provides the configuration structures that control how
//! diagrams are named, which pages are compiled and how the result is
//! written. All types implement [`serde::Deserialize`] so they can be read
//! from a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`NamespaceConfig`] - Base for default namespaces and extra prefixes.
//! - [`CompileConfig`] - Page selection and import following.
//! - [`OutputConfig`] - The serialization format.
//!
//! # Example
//!
//! ```
//! # use graffowl::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.compile().follow_imports());
//! assert!(config.compile().pages().is_empty());
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use graffowl_compiler::DEFAULT_BASE;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Namespace configuration section.
    #[serde(default)]
    namespaces: NamespaceConfig,

    /// Compilation configuration section.
    #[serde(default)]
    compile: CompileConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(namespaces: NamespaceConfig, compile: CompileConfig, output: OutputConfig) -> Self {
        Self {
            namespaces,
            compile,
            output,
        }
    }

    pub fn namespaces(&self) -> &NamespaceConfig {
        &self.namespaces
    }

    pub fn compile(&self) -> &CompileConfig {
        &self.compile
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Restricts compilation to the named pages, replacing any configured
    /// selection.
    pub fn with_pages(mut self, pages: Vec<String>) -> Self {
        self.compile.pages = pages;
        self
    }
}

/// Namespace settings.
///
/// A diagram without a `namespace` shape gets `base` followed by its file
/// name as its default namespace.
#[derive(Debug, Clone, Deserialize)]
pub struct NamespaceConfig {
    #[serde(default = "default_base")]
    base: String,

    /// Prefixes available to every diagram, before its own namespace shapes.
    #[serde(default)]
    prefixes: IndexMap<String, String>,
}

impl NamespaceConfig {
    pub fn new(base: impl Into<String>, prefixes: IndexMap<String, String>) -> Self {
        Self {
            base: base.into(),
            prefixes,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn prefixes(&self) -> &IndexMap<String, String> {
        &self.prefixes
    }
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self::new(default_base(), IndexMap::new())
    }
}

fn default_base() -> String {
    DEFAULT_BASE.to_string()
}

/// Compilation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CompileConfig {
    /// Titles of the pages to compile. Empty means every page.
    #[serde(default)]
    pages: Vec<String>,

    /// Whether imported diagrams are loaded and compiled too.
    #[serde(default = "default_follow_imports")]
    follow_imports: bool,
}

impl CompileConfig {
    pub fn new(pages: Vec<String>, follow_imports: bool) -> Self {
        Self {
            pages,
            follow_imports,
        }
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn follow_imports(&self) -> bool {
        self.follow_imports
    }
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self::new(Vec::new(), default_follow_imports())
    }
}

fn default_follow_imports() -> bool {
    true
}

/// Serialization formats for the compiled ontology.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// OWL 2 functional-style syntax.
    #[default]
    Functional,
}

/// Output settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    format: OutputFormat,
}

impl OutputConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}
