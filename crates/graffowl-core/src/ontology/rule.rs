//! SWRL rules.

use std::collections::BTreeSet;

use crate::ontology::{Iri, Literal};

/// An argument of a rule atom.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleArgument {
    Variable(Iri),
    Individual(Iri),
    Literal(Literal),
}

/// One clause of a rule body or head.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Atom {
    Class {
        class: Iri,
        argument: RuleArgument,
    },
    DataRange {
        datatype: Iri,
        argument: RuleArgument,
    },
    ObjectProperty {
        property: Iri,
        subject: RuleArgument,
        object: RuleArgument,
    },
    DataProperty {
        property: Iri,
        subject: RuleArgument,
        value: RuleArgument,
    },
    SameIndividual(RuleArgument, RuleArgument),
    DifferentIndividuals(RuleArgument, RuleArgument),
    BuiltIn {
        predicate: Iri,
        arguments: Vec<RuleArgument>,
    },
}

impl Atom {
    /// The arguments of the atom in order.
    pub fn arguments(&self) -> Vec<&RuleArgument> {
        match self {
            Self::Class { argument, .. } | Self::DataRange { argument, .. } => vec![argument],
            Self::ObjectProperty { subject, object, .. } => vec![subject, object],
            Self::DataProperty { subject, value, .. } => vec![subject, value],
            Self::SameIndividual(a, b) | Self::DifferentIndividuals(a, b) => vec![a, b],
            Self::BuiltIn { arguments, .. } => arguments.iter().collect(),
        }
    }
}

/// A rule: when every body atom holds, every head atom holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rule {
    pub body: BTreeSet<Atom>,
    pub head: BTreeSet<Atom>,
}

impl Rule {
    pub fn new(body: BTreeSet<Atom>, head: BTreeSet<Atom>) -> Self {
        Self { body, head }
    }

    /// All atoms, body first.
    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.body.iter().chain(&self.head)
    }
}
