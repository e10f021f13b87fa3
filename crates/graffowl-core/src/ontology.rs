//! The logical ontology model.
//!
//! An [`Ontology`] is the sink the compiler writes into: an IRI, a set of
//! imports, a prefix table carried through to serialization, and an ordered
//! set of [`Axiom`]s. Every set-valued part is ordered, so two compilations
//! of the same diagram yield equal ontologies.
//!
//! # Overview
//!
//! - [`Iri`], [`Literal`] - Names and data values
//! - [`Entity`], [`EntityKind`] - The named entities of a signature
//! - [`ClassExpression`], [`DataRange`], [`ObjectPropertyExpression`] - Expressions
//! - [`Axiom`] - One logical assertion
//! - [`Rule`], [`Atom`], [`RuleArgument`] - SWRL rules

mod axiom;
mod expression;
mod iri;
mod rule;
mod signature;

use std::collections::BTreeSet;

use indexmap::IndexMap;
use log::trace;

pub use axiom::Axiom;
pub use expression::{
    CardinalityKind, ClassExpression, DataRange, Entity, EntityKind, Facet, FacetRestriction,
    ObjectPropertyExpression, PropertyExpression,
};
pub use iri::{Iri, Literal, vocab};
pub use rule::{Atom, Rule, RuleArgument};

use signature::SignatureCollector;

/// A set of axioms under an ontology IRI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ontology {
    iri: Iri,
    imports: BTreeSet<Iri>,
    prefixes: IndexMap<String, String>,
    axioms: BTreeSet<Axiom>,
}

impl Ontology {
    pub fn new(iri: Iri) -> Self {
        Self {
            iri,
            imports: BTreeSet::new(),
            prefixes: IndexMap::new(),
            axioms: BTreeSet::new(),
        }
    }

    pub fn iri(&self) -> &Iri {
        &self.iri
    }

    pub fn imports(&self) -> &BTreeSet<Iri> {
        &self.imports
    }

    /// Records an import of another ontology. Returns `false` if it was
    /// already imported.
    pub fn add_import(&mut self, iri: Iri) -> bool {
        self.imports.insert(iri)
    }

    pub fn prefixes(&self) -> &IndexMap<String, String> {
        &self.prefixes
    }

    /// Registers a prefix for serialization, replacing any previous
    /// namespace for the same prefix.
    pub fn set_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    pub fn axioms(&self) -> &BTreeSet<Axiom> {
        &self.axioms
    }

    pub fn axiom_count(&self) -> usize {
        self.axioms.len()
    }

    /// Adds an axiom. Returns `false` if an equal axiom was already present.
    pub fn add_axiom(&mut self, axiom: Axiom) -> bool {
        trace!(kind = axiom.keyword(); "Adding axiom");
        self.axioms.insert(axiom)
    }

    pub fn contains(&self, axiom: &Axiom) -> bool {
        self.axioms.contains(axiom)
    }

    /// Every named entity mentioned by the axioms.
    pub fn signature(&self) -> BTreeSet<Entity> {
        let mut collector = SignatureCollector::default();
        for axiom in &self.axioms {
            collector.axiom(axiom);
        }
        collector.into_entities()
    }

    /// The entities of the signature named by `iri`, ordered by kind.
    ///
    /// One IRI may name several entities of different kinds (punning).
    pub fn entities_with_iri(&self, iri: &Iri) -> Vec<Entity> {
        self.signature()
            .into_iter()
            .filter(|entity| entity.iri() == iri)
            .collect()
    }
}
