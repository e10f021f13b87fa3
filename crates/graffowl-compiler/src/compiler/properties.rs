//! Object and data property axioms.

use std::collections::BTreeSet;

use graffowl_core::ontology::{
    Axiom, Entity, EntityKind, Iri, ObjectPropertyExpression, Ontology, PropertyExpression,
};

use super::{Compiler, Node};
use crate::{
    error::{ErrorCode, Result},
    note::Note,
};

type Characteristic = fn(ObjectPropertyExpression) -> Axiom;

const CHARACTERISTICS: [(Note, Characteristic); 7] = [
    (Note::Functional, Axiom::FunctionalObjectProperty),
    (Note::Reflexive, Axiom::ReflexiveObjectProperty),
    (Note::Irreflexive, Axiom::IrreflexiveObjectProperty),
    (Note::Symmetric, Axiom::SymmetricObjectProperty),
    (Note::Transitive, Axiom::TransitiveObjectProperty),
    (Note::Asymmetric, Axiom::AsymmetricObjectProperty),
    (Note::InverseFunctional, Axiom::InverseFunctionalObjectProperty),
];

impl<'d> Compiler<'d> {
    pub(super) fn process_object_properties(&self, ontology: &mut Ontology) -> Result<()> {
        for shape in self.shapes(Note::ObjectProperty)? {
            let iri = self.uri(shape)?;
            if self.is_local(&iri) {
                ontology.add_axiom(Axiom::Declaration(Entity::new(EntityKind::ObjectProperty, iri)));
            }
        }

        for (note, characteristic) in CHARACTERISTICS {
            for shape in self.shapes(note)? {
                ontology.add_axiom(characteristic(self.object_property_target(shape)?));
            }
        }

        for connector in self.connectors(Note::InverseProperties)? {
            let (a, b) = self.object_property_pair(connector)?;
            ontology.add_axiom(Axiom::InverseObjectProperties(a, b));
        }

        for connector in self.connectors(Note::EquivalentObjectProperties)? {
            let (a, b) = self.object_property_pair(connector)?;
            ontology.add_axiom(Axiom::EquivalentObjectProperties([a, b].into()));
        }

        for connector in self.connectors(Note::DisjointObjectProperties)? {
            let (a, b) = self.object_property_pair(connector)?;
            ontology.add_axiom(Axiom::DisjointObjectProperties([a, b].into()));
        }

        for shape in self.shapes(Note::PairwiseDisjointObjectProperties)? {
            let properties = self.object_property_targets(shape)?;
            ontology.add_axiom(Axiom::DisjointObjectProperties(properties));
        }

        for connector in self.connectors(Note::SubObjectPropertyOf)? {
            let (sub, sup) = self.object_property_pair(connector)?;
            ontology.add_axiom(Axiom::SubObjectPropertyOf { sub, sup });
        }

        for connector in self.connectors(Note::ObjectPropertyDomain)? {
            let property = self.object_property(self.tail(connector)?)?;
            let domain = self.class_expression(self.head(connector)?)?;
            ontology.add_axiom(Axiom::ObjectPropertyDomain { property, domain });
        }

        for connector in self.connectors(Note::ObjectPropertyRange)? {
            let property = self.object_property(self.tail(connector)?)?;
            let range = self.class_expression(self.head(connector)?)?;
            ontology.add_axiom(Axiom::ObjectPropertyRange { property, range });
        }

        for connector in self.connectors(Note::SubObjectPropertyChain)? {
            if connector.line().is_none() {
                return Err(connector.error(ErrorCode::E100, "Property chain must be a line"));
            }
            let mut chain = vec![self.object_property(self.tail(connector)?)?];
            for label in connector.labels() {
                chain.push(self.object_property(label)?);
            }
            let sup = self.object_property(self.head(connector)?)?;
            ontology.add_axiom(Axiom::SubObjectPropertyChain { chain, sup });
        }
        Ok(())
    }

    pub(super) fn process_data_properties(&self, ontology: &mut Ontology) -> Result<()> {
        for shape in self.shapes(Note::DataProperty)? {
            let iri = self.uri(shape)?;
            if self.is_local(&iri) {
                ontology.add_axiom(Axiom::Declaration(Entity::new(EntityKind::DataProperty, iri)));
            }
        }

        for shape in self.shapes(Note::FunctionalDataProperty)? {
            let property = self.data_property_target(shape)?;
            ontology.add_axiom(Axiom::FunctionalDataProperty(property));
        }

        for connector in self.connectors(Note::EquivalentDataProperties)? {
            let (a, b) = self.data_property_pair(connector)?;
            ontology.add_axiom(Axiom::EquivalentDataProperties([a, b].into()));
        }

        for connector in self.connectors(Note::DataPropertyDomain)? {
            let property = self.data_property(self.tail(connector)?)?;
            let domain = self.class_expression(self.head(connector)?)?;
            ontology.add_axiom(Axiom::DataPropertyDomain { property, domain });
        }

        for connector in self.connectors(Note::DataPropertyRange)? {
            let property = self.data_property(self.tail(connector)?)?;
            let range = self.data_range(self.head(connector)?)?;
            ontology.add_axiom(Axiom::DataPropertyRange { property, range });
        }

        for connector in self.connectors(Note::DisjointDataProperties)? {
            let (a, b) = self.data_property_pair(connector)?;
            ontology.add_axiom(Axiom::DisjointDataProperties([a, b].into()));
        }

        for shape in self.shapes(Note::PairwiseDisjointDataProperties)? {
            let properties = self.data_property_targets(shape)?;
            ontology.add_axiom(Axiom::DisjointDataProperties(properties));
        }

        for connector in self.connectors(Note::SubDataPropertyOf)? {
            let (sub, sup) = self.data_property_pair(connector)?;
            ontology.add_axiom(Axiom::SubDataPropertyOf { sub, sup });
        }
        Ok(())
    }

    /// The property a graphic denotes, or `None` when the graphic carries
    /// no note or a note that is not a property tag.
    fn maybe_property(&self, node: Node<'d>) -> Result<Option<PropertyExpression>> {
        if node.tag().is_none() {
            return Ok(None);
        }
        let property = match self.note(node)? {
            Note::ObjectProperty => {
                PropertyExpression::Object(ObjectPropertyExpression::Property(self.uri(node)?))
            }
            Note::InverseObjectProperty => {
                PropertyExpression::Object(ObjectPropertyExpression::InverseOf(self.uri(node)?))
            }
            Note::DataProperty => PropertyExpression::Data(self.uri(node)?),
            _ => return Ok(None),
        };
        Ok(Some(property))
    }

    pub(super) fn property(&self, node: Node<'d>) -> Result<PropertyExpression> {
        self.maybe_property(node)?.ok_or_else(|| {
            node.error(ErrorCode::E203, "Could not create property expression for graphic")
        })
    }

    fn object_property(&self, node: Node<'d>) -> Result<ObjectPropertyExpression> {
        match self.maybe_property(node)? {
            Some(PropertyExpression::Object(property)) => Ok(property),
            _ => Err(node.error(
                ErrorCode::E203,
                "Could not create object property expression for graphic",
            )),
        }
    }

    fn data_property(&self, node: Node<'d>) -> Result<Iri> {
        match self.maybe_property(node)? {
            Some(PropertyExpression::Data(property)) => Ok(property),
            _ => Err(node.error(
                ErrorCode::E203,
                "Could not create data property expression for graphic",
            )),
        }
    }

    fn object_property_pair(
        &self,
        connector: Node<'d>,
    ) -> Result<(ObjectPropertyExpression, ObjectPropertyExpression)> {
        let tail = self.object_property(self.tail(connector)?)?;
        let head = self.object_property(self.head(connector)?)?;
        Ok((tail, head))
    }

    fn data_property_pair(&self, connector: Node<'d>) -> Result<(Iri, Iri)> {
        let tail = self.data_property(self.tail(connector)?)?;
        let head = self.data_property(self.head(connector)?)?;
        Ok((tail, head))
    }

    /// The property named by the labels of a line.
    ///
    /// Exactly one label may denote a property; other labels, such as a
    /// cardinality, are ignored.
    pub(super) fn line_property(&self, connector: Node<'d>) -> Result<PropertyExpression> {
        if connector.line().is_none() {
            return Err(connector.error(
                ErrorCode::E100,
                "Cannot get prop expression from connector",
            ));
        }
        let mut found = None;
        for label in connector.labels() {
            let Some(property) = self.maybe_property(label)? else {
                continue;
            };
            if found.is_some() {
                return Err(connector.error(
                    ErrorCode::E104,
                    "More than one property expression label on a line",
                ));
            }
            found = Some(property);
        }
        found.ok_or_else(|| {
            connector
                .error(ErrorCode::E104, "Prop-assertion line must have a prop label")
                .with_help("label the line with an `object-property` or `data-property` shape")
        })
    }

    /// The property at the head of a shape's single outgoing connector.
    fn property_target(&self, shape: Node<'d>) -> Result<(Node<'d>, PropertyExpression)> {
        let mut outgoing = shape.outgoing();
        let connector = match (outgoing.next(), outgoing.next()) {
            (Some(connector), None) => connector,
            _ => return Err(shape.error(ErrorCode::E101, "Must have one outgoing connector")),
        };
        let head = self.head(connector)?;
        Ok((head, self.property(head)?))
    }

    fn object_property_target(&self, shape: Node<'d>) -> Result<ObjectPropertyExpression> {
        match self.property_target(shape)? {
            (_, PropertyExpression::Object(property)) => Ok(property),
            (head, _) => Err(head.error(ErrorCode::E203, "Not an object property expression")),
        }
    }

    fn data_property_target(&self, shape: Node<'d>) -> Result<Iri> {
        match self.property_target(shape)? {
            (_, PropertyExpression::Data(property)) => Ok(property),
            (head, _) => Err(head.error(ErrorCode::E203, "Not a data property expression")),
        }
    }

    fn object_property_targets(&self, shape: Node<'d>) -> Result<BTreeSet<ObjectPropertyExpression>> {
        let mut targets = BTreeSet::new();
        for connector in shape.outgoing() {
            let head = self.head(connector)?;
            match self.property(head)? {
                PropertyExpression::Object(property) => targets.insert(property),
                PropertyExpression::Data(_) => {
                    return Err(head.error(ErrorCode::E203, "Not an object property expression"));
                }
            };
        }
        if targets.len() < 2 {
            return Err(shape.error(
                ErrorCode::E101,
                "Must have 2 or more outgoing connections to object props",
            ));
        }
        Ok(targets)
    }

    fn data_property_targets(&self, shape: Node<'d>) -> Result<BTreeSet<Iri>> {
        let mut targets = BTreeSet::new();
        for connector in shape.outgoing() {
            let head = self.head(connector)?;
            match self.property(head)? {
                PropertyExpression::Data(property) => targets.insert(property),
                PropertyExpression::Object(_) => {
                    return Err(head.error(ErrorCode::E203, "Not a data property expression"));
                }
            };
        }
        if targets.len() < 2 {
            return Err(shape.error(
                ErrorCode::E101,
                "Must have 2 or more outgoing connections to data props",
            ));
        }
        Ok(targets)
    }
}
