//! Prefix and default-namespace resolution for shape text.
//!
//! Shapes name their entities with short text: `Dog`, `foaf:Person`, or a
//! full `http://…` URI. The [`NamespaceResolver`] turns that text into an
//! absolute IRI using the prefixes and default namespace declared by the
//! diagram's `namespace` shapes.

use graffowl_core::{
    model::{Diagram, Graphic, Page, ShapeData},
    ontology::vocab,
    visitor::{Visit, Visitor},
};
use indexmap::IndexMap;
use log::{debug, trace};

use crate::{
    error::{CompileError, ErrorCode},
    note::is_namespace_note,
};

/// The base a diagram's file name is appended to when it declares no
/// default namespace.
pub const DEFAULT_BASE: &str = "http://epistem.org/og-owl/";

const ABSOLUTE_SCHEMES: [&str; 6] = ["http:", "https:", "urn:", "ftp:", "file:", "mailto:"];

/// Resolves shape text to absolute IRIs.
///
/// Built once per diagram by [`NamespaceResolver::scan`] and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceResolver {
    default_namespace: String,
    prefixes: IndexMap<String, String>,
}

impl NamespaceResolver {
    /// A resolver holding only the bootstrap prefixes.
    pub fn new(default_namespace: impl Into<String>) -> Self {
        let prefixes = vocab::BOOTSTRAP_PREFIXES
            .iter()
            .map(|(prefix, namespace)| (prefix.to_string(), namespace.to_string()))
            .collect();
        Self {
            default_namespace: default_namespace.into(),
            prefixes,
        }
    }

    /// Reads the namespace shapes of `diagram`.
    ///
    /// The default namespace is `<base><file name>` unless a namespace shape
    /// overrides it.
    pub fn scan(diagram: &Diagram, base: &str) -> Result<Self, CompileError> {
        Self::scan_with_prefixes(diagram, base, &IndexMap::new())
    }

    /// Like [`scan`](Self::scan), registering `extra` prefixes before the
    /// diagram's own. Namespace shapes override both.
    pub fn scan_with_prefixes(
        diagram: &Diagram,
        base: &str,
        extra: &IndexMap<String, String>,
    ) -> Result<Self, CompileError> {
        let mut resolver = Self::new(format!("{base}{}", diagram.file_name()));
        for (prefix, namespace) in extra {
            resolver.set_prefix(prefix, namespace);
        }

        let mut collector = NamespaceCollector {
            resolver,
            error: None,
        };
        diagram.accept(&mut collector);
        if let Some(error) = collector.error {
            return Err(error);
        }

        let resolver = collector.resolver;
        debug!(
            default = resolver.default_namespace,
            prefixes = resolver.prefixes.len();
            "Resolved namespaces"
        );
        Ok(resolver)
    }

    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }

    pub fn set_default_namespace(&mut self, namespace: impl Into<String>) {
        self.default_namespace = namespace.into();
    }

    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    pub fn prefixes(&self) -> &IndexMap<String, String> {
        &self.prefixes
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Resolves shape text to an absolute IRI.
    ///
    /// Returns `None` when the text uses a prefix with no registered
    /// namespace.
    pub fn resolve(&self, text: &str) -> Option<String> {
        if ABSOLUTE_SCHEMES.iter().any(|scheme| text.starts_with(scheme)) {
            return Some(text.to_string());
        }
        match text.find(':') {
            Some(colon) if colon > 0 => {
                let namespace = self.prefixes.get(&text[..colon])?;
                Some(format!("{namespace}{}", normalize(&text[colon + 1..])))
            }
            _ => Some(format!("{}#{}", self.default_namespace, normalize(text))),
        }
    }

    fn apply(&mut self, text: &str) {
        match text.find('=') {
            Some(eq) if eq > 0 => {
                let prefix = text[..eq].trim();
                let namespace = text[eq + 1..].trim();
                trace!(prefix, namespace; "Namespace prefix");
                self.set_prefix(prefix, namespace);
            }
            _ => {
                trace!(namespace = text; "Default namespace");
                self.set_default_namespace(text);
            }
        }
    }
}

/// Turns free text into a name fragment.
///
/// Whitespace is dropped. When a later word starts with a lowercase letter a
/// hyphen joins it to the previous word; capitalised words are joined
/// directly, so `has part` becomes `has-part` and `Big Cat` becomes `BigCat`.
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut at_word_start = false;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            continue;
        }
        if at_word_start && !normalized.is_empty() && c.is_lowercase() {
            normalized.push('-');
        }
        at_word_start = false;
        normalized.push(c);
    }
    normalized
}

struct NamespaceCollector {
    resolver: NamespaceResolver,
    error: Option<CompileError>,
}

impl Visitor for NamespaceCollector {
    fn shape(&mut self, page: &Page, graphic: &Graphic, shape: &ShapeData) -> Visit {
        if !graphic.metadata().note().is_some_and(is_namespace_note) {
            return Visit::Continue;
        }
        let text = shape.text().trim();
        if text.is_empty() {
            self.error = Some(
                CompileError::new(ErrorCode::E205, "Blank namespace")
                    .at(page.location(graphic.id()))
                    .with_help("write a default namespace URI, or `prefix = uri`"),
            );
            return Visit::Stop;
        }
        self.resolver.apply(text);
        Visit::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> NamespaceResolver {
        let mut resolver = NamespaceResolver::new("http://example.org/zoo");
        resolver.set_prefix("ex", "http://example.org/ex#");
        resolver
    }

    #[test]
    fn test_default_namespace() {
        assert_eq!(
            resolver().resolve("Big Cat").as_deref(),
            Some("http://example.org/zoo#BigCat")
        );
    }

    #[test]
    fn test_prefixed_name() {
        assert_eq!(
            resolver().resolve("ex:has part").as_deref(),
            Some("http://example.org/ex#has-part")
        );
        assert_eq!(
            resolver().resolve("xsd:integer").as_deref(),
            Some("http://www.w3.org/2001/XMLSchema#integer")
        );
    }

    #[test]
    fn test_unknown_prefix() {
        assert_eq!(resolver().resolve("nope:Thing"), None);
    }

    #[test]
    fn test_absolute_uris_are_verbatim() {
        for uri in ["http://a.org/x y", "https://a.org/X", "urn:isbn:123", "mailto:a@b.org"] {
            assert_eq!(resolver().resolve(uri).as_deref(), Some(uri));
        }
    }

    #[test]
    fn test_leading_colon_uses_default() {
        assert_eq!(
            resolver().resolve(":x").as_deref(),
            Some("http://example.org/zoo#:x")
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("data prop a"), "data-prop-a");
        assert_eq!(normalize("ClassA"), "ClassA");
        assert_eq!(normalize("Class A"), "ClassA");
        assert_eq!(normalize("has part"), "has-part");
        assert_eq!(normalize("Big Cat"), "BigCat");
        assert_eq!(normalize("  eats  meat "), "eats-meat");
        assert_eq!(normalize("a\tb\nC"), "a-bC");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_apply_prefix_and_default() {
        let mut resolver = NamespaceResolver::new("http://x.org/d");
        resolver.apply("foo = http://foo.org/#");
        resolver.apply("http://zoo.org/animals");
        assert_eq!(resolver.namespace("foo"), Some("http://foo.org/#"));
        assert_eq!(resolver.default_namespace(), "http://zoo.org/animals");
    }

    #[test]
    fn test_equals_at_start_sets_default() {
        let mut resolver = NamespaceResolver::new("http://x.org/d");
        resolver.apply("=http://odd.org");
        assert_eq!(resolver.default_namespace(), "=http://odd.org");
    }

    #[test]
    fn test_bootstrap_prefixes() {
        let resolver = NamespaceResolver::new("http://x.org/d");
        assert_eq!(resolver.prefixes().len(), 9);
        assert_eq!(resolver.namespace("owl"), Some(vocab::OWL));
        assert_eq!(resolver.namespace("swrlb"), Some(vocab::SWRLB));
    }
}
