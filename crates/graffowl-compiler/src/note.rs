//! The tags a graphic's note may carry.
//!
//! A note names what a graphic means to the compiler: `owl-class` makes a
//! shape a class, `subclass-of` makes a line a subclass axiom, and so on.
//! Tags are written hyphenated; the older underscore spelling
//! (`subclass_of`) is accepted as an alias.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// The tag a namespace shape carries. It is read by the namespace resolver,
/// not the compiler.
pub const NAMESPACE_NOTE: &str = "namespace";

/// Returns `true` when a raw note marks a namespace shape.
///
/// The note must match exactly, without surrounding whitespace.
pub fn is_namespace_note(note: &str) -> bool {
    note == NAMESPACE_NOTE
}

/// A note that names no known tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized graphic note `{0}`")]
pub struct UnknownNote(pub String);

/// The group a tag belongs to, in compilation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoteCategory {
    Import,
    ClassAxiom,
    ClassExpression,
    Individual,
    ObjectProperty,
    DataProperty,
    Datatype,
    Rule,
    Annotation,
}

macro_rules! notes {
    ($($variant:ident => $name:literal, $category:ident;)+) => {
        /// A compiler tag.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Note {
            $($variant,)+
        }

        impl Note {
            /// Every tag, in catalogue order.
            pub const ALL: &'static [Note] = &[$(Self::$variant,)+];

            /// The canonical hyphenated spelling.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            pub fn category(self) -> NoteCategory {
                match self {
                    $(Self::$variant => NoteCategory::$category,)+
                }
            }
        }

        impl FromStr for Note {
            type Err = UnknownNote;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.replace('_', "-").as_str() {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(UnknownNote(s.to_string())),
                }
            }
        }
    };
}

notes! {
    OntologyImport => "ontology-import", Import;

    SubclassOf => "subclass-of", ClassAxiom;
    EquivalentClasses => "equivalent-classes", ClassAxiom;
    DisjointClasses => "disjoint-classes", ClassAxiom;
    PairwiseDisjoint => "pairwise-disjoint", ClassAxiom;
    DisjointUnion => "disjoint-union", ClassAxiom;
    HasKey => "has-key", ClassAxiom;

    OwlClass => "owl-class", ClassExpression;
    ObjUnion => "obj-union", ClassExpression;
    ObjIntersection => "obj-intersection", ClassExpression;
    ObjComplement => "obj-complement", ClassExpression;
    ObjOneOf => "obj-one-of", ClassExpression;
    HasValue => "has-value", ClassExpression;
    SomeValues => "some-values", ClassExpression;
    AllValues => "all-values", ClassExpression;
    HasSelf => "has-self", ClassExpression;
    Cardinality => "cardinality", ClassExpression;

    Individual => "individual", Individual;
    PropAssertion => "prop-assertion", Individual;
    NegPropAssertion => "neg-prop-assertion", Individual;
    SameIndividual => "same-individual", Individual;
    DifferentIndividuals => "different-individuals", Individual;
    ClassAssertion => "class-assertion", Individual;

    ObjectProperty => "object-property", ObjectProperty;
    InverseObjectProperty => "inverse-object-property", ObjectProperty;
    Functional => "functional", ObjectProperty;
    InverseFunctional => "inverse-functional", ObjectProperty;
    Reflexive => "reflexive", ObjectProperty;
    Irreflexive => "irreflexive", ObjectProperty;
    Symmetric => "symmetric", ObjectProperty;
    Asymmetric => "asymmetric", ObjectProperty;
    Transitive => "transitive", ObjectProperty;
    InverseProperties => "inverse-properties", ObjectProperty;
    EquivalentObjectProperties => "equivalent-object-properties", ObjectProperty;
    DisjointObjectProperties => "disjoint-object-properties", ObjectProperty;
    PairwiseDisjointObjectProperties => "pairwise-disjoint-object-properties", ObjectProperty;
    SubObjectPropertyOf => "sub-object-property-of", ObjectProperty;
    ObjectPropertyDomain => "object-property-domain", ObjectProperty;
    ObjectPropertyRange => "object-property-range", ObjectProperty;
    SubObjectPropertyChain => "sub-object-property-chain", ObjectProperty;

    DataProperty => "data-property", DataProperty;
    FunctionalDataProperty => "functional-data-property", DataProperty;
    EquivalentDataProperties => "equivalent-data-properties", DataProperty;
    DisjointDataProperties => "disjoint-data-properties", DataProperty;
    PairwiseDisjointDataProperties => "pairwise-disjoint-data-properties", DataProperty;
    SubDataPropertyOf => "sub-data-property-of", DataProperty;
    DataPropertyDomain => "data-property-domain", DataProperty;
    DataPropertyRange => "data-property-range", DataProperty;

    Datatype => "datatype", Datatype;
    Literal => "literal", Datatype;
    DataComplementOf => "data-complement-of", Datatype;
    DataUnionOf => "data-union-of", Datatype;
    DataIntersectionOf => "data-intersection-of", Datatype;
    DataOneOf => "data-one-of", Datatype;
    DatatypeRestriction => "datatype-restriction", Datatype;
    DatatypeDefinition => "datatype-definition", Datatype;

    Rule => "rule", Rule;

    Annotation => "annotation", Annotation;
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_spelling_round_trips() {
        for note in Note::ALL {
            assert_eq!(note.as_str().parse::<Note>(), Ok(*note));
        }
    }

    #[test]
    fn test_underscore_alias() {
        assert_eq!("subclass_of".parse::<Note>(), Ok(Note::SubclassOf));
        assert_eq!("owl_class".parse::<Note>(), Ok(Note::OwlClass));
        assert_eq!(
            "pairwise_disjoint_object_properties".parse::<Note>(),
            Ok(Note::PairwiseDisjointObjectProperties)
        );
    }

    #[test]
    fn test_unknown_note() {
        let err = "subclass".parse::<Note>().unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized graphic note `subclass`");
        assert!("Owl-Class".parse::<Note>().is_err());
    }

    #[test]
    fn test_namespace_is_not_a_tag() {
        assert!(is_namespace_note("namespace"));
        assert!(!is_namespace_note(" namespace"));
        assert!("namespace".parse::<Note>().is_err());
    }

    #[test]
    fn test_categories() {
        assert_eq!(Note::OntologyImport.category(), NoteCategory::Import);
        assert_eq!(Note::HasKey.category(), NoteCategory::ClassAxiom);
        assert_eq!(Note::Cardinality.category(), NoteCategory::ClassExpression);
        assert_eq!(Note::Transitive.category(), NoteCategory::ObjectProperty);
        assert_eq!(Note::DatatypeDefinition.category(), NoteCategory::Datatype);
        assert!(NoteCategory::Import < NoteCategory::Annotation);
    }

    #[test]
    fn test_catalogue_size() {
        assert_eq!(Note::ALL.len(), 58);
    }
}
