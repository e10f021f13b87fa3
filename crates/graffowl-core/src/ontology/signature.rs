//! Collection of the named entities an axiom mentions.

use std::collections::BTreeSet;

use crate::ontology::{
    Atom, Axiom, ClassExpression, DataRange, Entity, EntityKind, Iri, Literal,
    ObjectPropertyExpression, RuleArgument,
};

#[derive(Debug, Default)]
pub(super) struct SignatureCollector {
    entities: BTreeSet<Entity>,
}

impl SignatureCollector {
    pub(super) fn into_entities(self) -> BTreeSet<Entity> {
        self.entities
    }

    fn add(&mut self, kind: EntityKind, iri: &Iri) {
        self.entities.insert(Entity::new(kind, iri.clone()));
    }

    pub(super) fn axiom(&mut self, axiom: &Axiom) {
        match axiom {
            Axiom::Declaration(entity) => {
                self.entities.insert(entity.clone());
            }
            Axiom::SubClassOf { sub, sup } => {
                self.class_expression(sub);
                self.class_expression(sup);
            }
            Axiom::EquivalentClasses(classes) | Axiom::DisjointClasses(classes) => {
                classes.iter().for_each(|class| self.class_expression(class));
            }
            Axiom::DisjointUnion { class, members } => {
                self.add(EntityKind::Class, class);
                members.iter().for_each(|member| self.class_expression(member));
            }
            Axiom::HasKey {
                class,
                object_properties,
                data_properties,
            } => {
                self.class_expression(class);
                object_properties.iter().for_each(|p| self.object_property(p));
                data_properties
                    .iter()
                    .for_each(|p| self.add(EntityKind::DataProperty, p));
            }
            Axiom::ClassAssertion { class, individual } => {
                self.class_expression(class);
                self.add(EntityKind::NamedIndividual, individual);
            }
            Axiom::SameIndividual(individuals) | Axiom::DifferentIndividuals(individuals) => {
                individuals
                    .iter()
                    .for_each(|i| self.add(EntityKind::NamedIndividual, i));
            }
            Axiom::ObjectPropertyAssertion {
                property,
                subject,
                object,
            }
            | Axiom::NegativeObjectPropertyAssertion {
                property,
                subject,
                object,
            } => {
                self.object_property(property);
                self.add(EntityKind::NamedIndividual, subject);
                self.add(EntityKind::NamedIndividual, object);
            }
            Axiom::DataPropertyAssertion {
                property,
                subject,
                value,
            }
            | Axiom::NegativeDataPropertyAssertion {
                property,
                subject,
                value,
            } => {
                self.add(EntityKind::DataProperty, property);
                self.add(EntityKind::NamedIndividual, subject);
                self.literal(value);
            }
            Axiom::FunctionalObjectProperty(p)
            | Axiom::InverseFunctionalObjectProperty(p)
            | Axiom::ReflexiveObjectProperty(p)
            | Axiom::IrreflexiveObjectProperty(p)
            | Axiom::SymmetricObjectProperty(p)
            | Axiom::AsymmetricObjectProperty(p)
            | Axiom::TransitiveObjectProperty(p) => self.object_property(p),
            Axiom::InverseObjectProperties(a, b) | Axiom::SubObjectPropertyOf { sub: a, sup: b } => {
                self.object_property(a);
                self.object_property(b);
            }
            Axiom::EquivalentObjectProperties(properties)
            | Axiom::DisjointObjectProperties(properties) => {
                properties.iter().for_each(|p| self.object_property(p));
            }
            Axiom::SubObjectPropertyChain { chain, sup } => {
                chain.iter().for_each(|p| self.object_property(p));
                self.object_property(sup);
            }
            Axiom::ObjectPropertyDomain { property, domain: class }
            | Axiom::ObjectPropertyRange { property, range: class } => {
                self.object_property(property);
                self.class_expression(class);
            }
            Axiom::FunctionalDataProperty(p) => self.add(EntityKind::DataProperty, p),
            Axiom::EquivalentDataProperties(properties)
            | Axiom::DisjointDataProperties(properties) => {
                properties
                    .iter()
                    .for_each(|p| self.add(EntityKind::DataProperty, p));
            }
            Axiom::SubDataPropertyOf { sub, sup } => {
                self.add(EntityKind::DataProperty, sub);
                self.add(EntityKind::DataProperty, sup);
            }
            Axiom::DataPropertyDomain { property, domain } => {
                self.add(EntityKind::DataProperty, property);
                self.class_expression(domain);
            }
            Axiom::DataPropertyRange { property, range } => {
                self.add(EntityKind::DataProperty, property);
                self.data_range(range);
            }
            Axiom::DatatypeDefinition { datatype, range } => {
                self.add(EntityKind::Datatype, datatype);
                self.data_range(range);
            }
            Axiom::AnnotationAssertion {
                property, value, ..
            } => {
                self.add(EntityKind::AnnotationProperty, property);
                self.literal(value);
            }
            Axiom::Rule(rule) => rule.atoms().for_each(|atom| self.atom(atom)),
        }
    }

    fn object_property(&mut self, property: &ObjectPropertyExpression) {
        self.add(EntityKind::ObjectProperty, property.property());
    }

    fn literal(&mut self, literal: &Literal) {
        if let Some(datatype) = literal.datatype() {
            self.add(EntityKind::Datatype, datatype);
        }
    }

    fn class_expression(&mut self, expression: &ClassExpression) {
        match expression {
            ClassExpression::Class(iri) => self.add(EntityKind::Class, iri),
            ClassExpression::ObjectIntersectionOf(operands)
            | ClassExpression::ObjectUnionOf(operands) => {
                operands.iter().for_each(|c| self.class_expression(c));
            }
            ClassExpression::ObjectComplementOf(operand) => self.class_expression(operand),
            ClassExpression::ObjectOneOf(individuals) => individuals
                .iter()
                .for_each(|i| self.add(EntityKind::NamedIndividual, i)),
            ClassExpression::ObjectSomeValuesFrom(property, filler)
            | ClassExpression::ObjectAllValuesFrom(property, filler) => {
                self.object_property(property);
                self.class_expression(filler);
            }
            ClassExpression::ObjectHasValue(property, individual) => {
                self.object_property(property);
                self.add(EntityKind::NamedIndividual, individual);
            }
            ClassExpression::ObjectHasSelf(property) => self.object_property(property),
            ClassExpression::ObjectCardinality {
                property, filler, ..
            } => {
                self.object_property(property);
                if let Some(filler) = filler {
                    self.class_expression(filler);
                }
            }
            ClassExpression::DataSomeValuesFrom(property, range)
            | ClassExpression::DataAllValuesFrom(property, range) => {
                self.add(EntityKind::DataProperty, property);
                self.data_range(range);
            }
            ClassExpression::DataHasValue(property, value) => {
                self.add(EntityKind::DataProperty, property);
                self.literal(value);
            }
            ClassExpression::DataCardinality {
                property, filler, ..
            } => {
                self.add(EntityKind::DataProperty, property);
                if let Some(filler) = filler {
                    self.data_range(filler);
                }
            }
        }
    }

    fn data_range(&mut self, range: &DataRange) {
        match range {
            DataRange::Datatype(iri) => self.add(EntityKind::Datatype, iri),
            DataRange::ComplementOf(operand) => self.data_range(operand),
            DataRange::UnionOf(operands) | DataRange::IntersectionOf(operands) => {
                operands.iter().for_each(|r| self.data_range(r));
            }
            DataRange::OneOf(literals) => literals.iter().for_each(|l| self.literal(l)),
            DataRange::Restriction { datatype, facets } => {
                self.add(EntityKind::Datatype, datatype);
                facets.iter().for_each(|f| self.literal(&f.value));
            }
        }
    }

    fn atom(&mut self, atom: &Atom) {
        match atom {
            Atom::Class { class, .. } => self.add(EntityKind::Class, class),
            Atom::DataRange { datatype, .. } => self.add(EntityKind::Datatype, datatype),
            Atom::ObjectProperty { property, .. } => self.add(EntityKind::ObjectProperty, property),
            Atom::DataProperty { property, .. } => self.add(EntityKind::DataProperty, property),
            Atom::SameIndividual(..) | Atom::DifferentIndividuals(..) | Atom::BuiltIn { .. } => {}
        }
        for argument in atom.arguments() {
            match argument {
                RuleArgument::Individual(iri) => self.add(EntityKind::NamedIndividual, iri),
                RuleArgument::Literal(literal) => self.literal(literal),
                RuleArgument::Variable(_) => {}
            }
        }
    }
}
