use std::collections::BTreeSet;

use crate::ontology::{
    ClassExpression, DataRange, Entity, Iri, Literal, ObjectPropertyExpression, Rule,
};

/// A logical assertion of the ontology.
///
/// Set-valued operands are ordered sets, so two axioms built from the same
/// operands in any order compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axiom {
    Declaration(Entity),

    SubClassOf {
        sub: ClassExpression,
        sup: ClassExpression,
    },
    EquivalentClasses(BTreeSet<ClassExpression>),
    DisjointClasses(BTreeSet<ClassExpression>),
    DisjointUnion {
        class: Iri,
        members: BTreeSet<ClassExpression>,
    },
    HasKey {
        class: ClassExpression,
        object_properties: BTreeSet<ObjectPropertyExpression>,
        data_properties: BTreeSet<Iri>,
    },

    ClassAssertion {
        class: ClassExpression,
        individual: Iri,
    },
    SameIndividual(BTreeSet<Iri>),
    DifferentIndividuals(BTreeSet<Iri>),
    ObjectPropertyAssertion {
        property: ObjectPropertyExpression,
        subject: Iri,
        object: Iri,
    },
    NegativeObjectPropertyAssertion {
        property: ObjectPropertyExpression,
        subject: Iri,
        object: Iri,
    },
    DataPropertyAssertion {
        property: Iri,
        subject: Iri,
        value: Literal,
    },
    NegativeDataPropertyAssertion {
        property: Iri,
        subject: Iri,
        value: Literal,
    },

    FunctionalObjectProperty(ObjectPropertyExpression),
    InverseFunctionalObjectProperty(ObjectPropertyExpression),
    ReflexiveObjectProperty(ObjectPropertyExpression),
    IrreflexiveObjectProperty(ObjectPropertyExpression),
    SymmetricObjectProperty(ObjectPropertyExpression),
    AsymmetricObjectProperty(ObjectPropertyExpression),
    TransitiveObjectProperty(ObjectPropertyExpression),
    InverseObjectProperties(ObjectPropertyExpression, ObjectPropertyExpression),
    EquivalentObjectProperties(BTreeSet<ObjectPropertyExpression>),
    DisjointObjectProperties(BTreeSet<ObjectPropertyExpression>),
    SubObjectPropertyOf {
        sub: ObjectPropertyExpression,
        sup: ObjectPropertyExpression,
    },
    SubObjectPropertyChain {
        chain: Vec<ObjectPropertyExpression>,
        sup: ObjectPropertyExpression,
    },
    ObjectPropertyDomain {
        property: ObjectPropertyExpression,
        domain: ClassExpression,
    },
    ObjectPropertyRange {
        property: ObjectPropertyExpression,
        range: ClassExpression,
    },

    FunctionalDataProperty(Iri),
    EquivalentDataProperties(BTreeSet<Iri>),
    DisjointDataProperties(BTreeSet<Iri>),
    SubDataPropertyOf {
        sub: Iri,
        sup: Iri,
    },
    DataPropertyDomain {
        property: Iri,
        domain: ClassExpression,
    },
    DataPropertyRange {
        property: Iri,
        range: DataRange,
    },

    DatatypeDefinition {
        datatype: Iri,
        range: DataRange,
    },

    AnnotationAssertion {
        property: Iri,
        subject: Iri,
        value: Literal,
    },

    Rule(Rule),
}

impl Axiom {
    /// The functional-syntax keyword of the axiom.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Declaration(_) => "Declaration",
            Self::SubClassOf { .. } => "SubClassOf",
            Self::EquivalentClasses(_) => "EquivalentClasses",
            Self::DisjointClasses(_) => "DisjointClasses",
            Self::DisjointUnion { .. } => "DisjointUnion",
            Self::HasKey { .. } => "HasKey",
            Self::ClassAssertion { .. } => "ClassAssertion",
            Self::SameIndividual(_) => "SameIndividual",
            Self::DifferentIndividuals(_) => "DifferentIndividuals",
            Self::ObjectPropertyAssertion { .. } => "ObjectPropertyAssertion",
            Self::NegativeObjectPropertyAssertion { .. } => "NegativeObjectPropertyAssertion",
            Self::DataPropertyAssertion { .. } => "DataPropertyAssertion",
            Self::NegativeDataPropertyAssertion { .. } => "NegativeDataPropertyAssertion",
            Self::FunctionalObjectProperty(_) => "FunctionalObjectProperty",
            Self::InverseFunctionalObjectProperty(_) => "InverseFunctionalObjectProperty",
            Self::ReflexiveObjectProperty(_) => "ReflexiveObjectProperty",
            Self::IrreflexiveObjectProperty(_) => "IrreflexiveObjectProperty",
            Self::SymmetricObjectProperty(_) => "SymmetricObjectProperty",
            Self::AsymmetricObjectProperty(_) => "AsymmetricObjectProperty",
            Self::TransitiveObjectProperty(_) => "TransitiveObjectProperty",
            Self::InverseObjectProperties(..) => "InverseObjectProperties",
            Self::EquivalentObjectProperties(_) => "EquivalentObjectProperties",
            Self::DisjointObjectProperties(_) => "DisjointObjectProperties",
            Self::SubObjectPropertyOf { .. } | Self::SubObjectPropertyChain { .. } => {
                "SubObjectPropertyOf"
            }
            Self::ObjectPropertyDomain { .. } => "ObjectPropertyDomain",
            Self::ObjectPropertyRange { .. } => "ObjectPropertyRange",
            Self::FunctionalDataProperty(_) => "FunctionalDataProperty",
            Self::EquivalentDataProperties(_) => "EquivalentDataProperties",
            Self::DisjointDataProperties(_) => "DisjointDataProperties",
            Self::SubDataPropertyOf { .. } => "SubDataPropertyOf",
            Self::DataPropertyDomain { .. } => "DataPropertyDomain",
            Self::DataPropertyRange { .. } => "DataPropertyRange",
            Self::DatatypeDefinition { .. } => "DatatypeDefinition",
            Self::AnnotationAssertion { .. } => "AnnotationAssertion",
            Self::Rule(_) => "DLSafeRule",
        }
    }

    /// Returns `true` for class axioms: subclass, equivalence, disjointness,
    /// disjoint union and keys.
    pub fn is_class_axiom(&self) -> bool {
        matches!(
            self,
            Self::SubClassOf { .. }
                | Self::EquivalentClasses(_)
                | Self::DisjointClasses(_)
                | Self::DisjointUnion { .. }
                | Self::HasKey { .. }
        )
    }
}
