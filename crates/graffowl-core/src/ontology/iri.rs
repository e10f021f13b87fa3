//! IRIs, literals and well-known vocabulary.

use std::fmt;

/// Namespaces pre-registered for every diagram.
pub mod vocab {
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const OWL2XML: &str = "http://www.w3.org/2006/12/owl2-xml#";
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
    pub const SWRL: &str = "http://www.w3.org/2003/11/swrl#";
    pub const SWRLB: &str = "http://www.w3.org/2003/11/swrlb#";
    pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";

    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// Prefix table installed before any namespace shape is read.
    pub const BOOTSTRAP_PREFIXES: [(&str, &str); 9] = [
        ("owl", OWL),
        ("xsd", XSD),
        ("owl2xml", OWL2XML),
        ("rdfs", RDFS),
        ("rdf", RDF),
        ("dc", DC),
        ("swrl", SWRL),
        ("swrlb", SWRLB),
        ("foaf", FOAF),
    ];
}

/// An absolute IRI.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iri(String);

impl Iri {
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this IRI begins with `namespace`.
    pub fn is_in(&self, namespace: &str) -> bool {
        self.0.starts_with(namespace)
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Iri {
    fn from(iri: &str) -> Self {
        Self::new(iri)
    }
}

impl From<String> for Iri {
    fn from(iri: String) -> Self {
        Self(iri)
    }
}

/// A data value: a lexical form with an optional datatype or language tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    lexical: String,
    datatype: Option<Iri>,
    lang: Option<String>,
}

impl Literal {
    /// A plain literal with neither datatype nor language.
    pub fn plain(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            lang: None,
        }
    }

    pub fn typed(lexical: impl Into<String>, datatype: Iri) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Some(datatype),
            lang: None,
        }
    }

    pub fn with_lang(lexical: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            lang: Some(lang.into()),
        }
    }

    /// An `xsd:integer` literal.
    pub fn integer(value: u64) -> Self {
        Self::typed(value.to_string(), Iri::new(vocab::XSD_INTEGER))
    }

    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    pub fn datatype(&self) -> Option<&Iri> {
        self.datatype.as_ref()
    }

    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }
}
