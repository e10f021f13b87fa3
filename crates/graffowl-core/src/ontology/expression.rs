//! Entities, property expressions, class expressions and data ranges.

use std::{collections::BTreeSet, fmt};

use crate::ontology::{Iri, Literal, iri::vocab};

/// The kinds of named entity an ontology signature holds.
///
/// The declaration order is the order in which rule predicates are tried
/// when one IRI names several entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    Class,
    DataProperty,
    Datatype,
    ObjectProperty,
    AnnotationProperty,
    NamedIndividual,
}

impl EntityKind {
    /// The functional-syntax keyword for the entity kind.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::DataProperty => "DataProperty",
            Self::Datatype => "Datatype",
            Self::ObjectProperty => "ObjectProperty",
            Self::AnnotationProperty => "AnnotationProperty",
            Self::NamedIndividual => "NamedIndividual",
        }
    }
}

/// A named entity: an IRI together with its kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entity {
    kind: EntityKind,
    iri: Iri,
}

impl Entity {
    pub fn new(kind: EntityKind, iri: Iri) -> Self {
        Self { kind, iri }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn iri(&self) -> &Iri {
        &self.iri
    }
}

/// An object property or its inverse.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObjectPropertyExpression {
    Property(Iri),
    InverseOf(Iri),
}

impl ObjectPropertyExpression {
    /// The named property underneath the expression.
    pub fn property(&self) -> &Iri {
        match self {
            Self::Property(iri) | Self::InverseOf(iri) => iri,
        }
    }
}

/// Either kind of property expression a graphic may denote.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropertyExpression {
    Object(ObjectPropertyExpression),
    Data(Iri),
}

/// Min, max or exact cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardinalityKind {
    Min,
    Max,
    Exact,
}

impl fmt::Display for CardinalityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Min => "Min",
            Self::Max => "Max",
            Self::Exact => "Exact",
        })
    }
}

/// An OWL 2 class expression.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClassExpression {
    Class(Iri),
    ObjectIntersectionOf(BTreeSet<ClassExpression>),
    ObjectUnionOf(BTreeSet<ClassExpression>),
    ObjectComplementOf(Box<ClassExpression>),
    ObjectOneOf(BTreeSet<Iri>),
    ObjectSomeValuesFrom(ObjectPropertyExpression, Box<ClassExpression>),
    ObjectAllValuesFrom(ObjectPropertyExpression, Box<ClassExpression>),
    ObjectHasValue(ObjectPropertyExpression, Iri),
    ObjectHasSelf(ObjectPropertyExpression),
    ObjectCardinality {
        kind: CardinalityKind,
        count: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },
    DataSomeValuesFrom(Iri, Box<DataRange>),
    DataAllValuesFrom(Iri, Box<DataRange>),
    DataHasValue(Iri, Literal),
    DataCardinality {
        kind: CardinalityKind,
        count: u32,
        property: Iri,
        filler: Option<Box<DataRange>>,
    },
}

impl ClassExpression {
    /// The class IRI, for atomic classes only.
    pub fn as_class(&self) -> Option<&Iri> {
        match self {
            Self::Class(iri) => Some(iri),
            _ => None,
        }
    }
}

/// One of the XSD constraining facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Facet {
    Length,
    MinLength,
    MaxLength,
    Pattern,
    LangRange,
    MinInclusive,
    MinExclusive,
    MaxInclusive,
    MaxExclusive,
    TotalDigits,
    FractionDigits,
}

impl Facet {
    const ALL: [Facet; 11] = [
        Self::Length,
        Self::MinLength,
        Self::MaxLength,
        Self::Pattern,
        Self::LangRange,
        Self::MinInclusive,
        Self::MinExclusive,
        Self::MaxInclusive,
        Self::MaxExclusive,
        Self::TotalDigits,
        Self::FractionDigits,
    ];

    /// The facet's local name in the XSD namespace.
    pub fn name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Pattern => "pattern",
            Self::LangRange => "langRange",
            Self::MinInclusive => "minInclusive",
            Self::MinExclusive => "minExclusive",
            Self::MaxInclusive => "maxInclusive",
            Self::MaxExclusive => "maxExclusive",
            Self::TotalDigits => "totalDigits",
            Self::FractionDigits => "fractionDigits",
        }
    }

    pub fn iri(self) -> Iri {
        Iri::new(format!("{}{}", vocab::XSD, self.name()))
    }

    /// Looks a facet up by its full IRI.
    pub fn from_iri(iri: &Iri) -> Option<Self> {
        let name = iri.as_str().strip_prefix(vocab::XSD)?;
        Self::ALL.into_iter().find(|facet| facet.name() == name)
    }
}

/// A facet paired with its constraining value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FacetRestriction {
    pub facet: Facet,
    pub value: Literal,
}

/// An OWL 2 data range.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataRange {
    Datatype(Iri),
    ComplementOf(Box<DataRange>),
    UnionOf(BTreeSet<DataRange>),
    IntersectionOf(BTreeSet<DataRange>),
    OneOf(BTreeSet<Literal>),
    Restriction {
        datatype: Iri,
        facets: BTreeSet<FacetRestriction>,
    },
}
