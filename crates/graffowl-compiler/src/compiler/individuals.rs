//! Individuals and assertions about them.

use graffowl_core::ontology::{Axiom, Entity, EntityKind, Iri, Ontology, PropertyExpression};

use super::{Compiler, Node};
use crate::{
    error::{ErrorCode, Result},
    note::Note,
};

impl<'d> Compiler<'d> {
    pub(super) fn process_individuals(&self, ontology: &mut Ontology) -> Result<()> {
        for shape in self.shapes(Note::Individual)? {
            let iri = self.individual(shape)?;
            if self.is_local(&iri) {
                ontology.add_axiom(Axiom::Declaration(Entity::new(EntityKind::NamedIndividual, iri)));
            }
        }

        for connector in self.connectors(Note::SameIndividual)? {
            let (a, b) = self.individual_pair(connector)?;
            ontology.add_axiom(Axiom::SameIndividual([a, b].into()));
        }

        for connector in self.connectors(Note::DifferentIndividuals)? {
            let (a, b) = self.individual_pair(connector)?;
            ontology.add_axiom(Axiom::DifferentIndividuals([a, b].into()));
        }

        for connector in self.connectors(Note::ClassAssertion)? {
            let class = self.class_expression(self.head(connector)?)?;
            let individual = self.individual(self.tail(connector)?)?;
            ontology.add_axiom(Axiom::ClassAssertion { class, individual });
        }

        for connector in self.connectors(Note::PropAssertion)? {
            ontology.add_axiom(self.property_assertion(connector, false)?);
        }

        for connector in self.connectors(Note::NegPropAssertion)? {
            ontology.add_axiom(self.property_assertion(connector, true)?);
        }
        Ok(())
    }

    /// The individual a graphic names. The graphic must be tagged
    /// `individual`.
    pub(super) fn individual(&self, node: Node<'d>) -> Result<Iri> {
        match self.note(node)? {
            Note::Individual => self.uri(node),
            _ => Err(node.error(ErrorCode::E203, "Could not create Individual from graphic")),
        }
    }

    fn individual_pair(&self, connector: Node<'d>) -> Result<(Iri, Iri)> {
        let tail = self.individual(self.tail(connector)?)?;
        let head = self.individual(self.head(connector)?)?;
        Ok((tail, head))
    }

    /// An assertion read from a labelled line: individual to individual for
    /// object properties, individual to literal for data properties.
    fn property_assertion(&self, connector: Node<'d>, negative: bool) -> Result<Axiom> {
        let property = self.line_property(connector)?;
        let subject = self.individual(self.tail(connector)?)?;
        let head = self.head(connector)?;

        Ok(match property {
            PropertyExpression::Object(property) => {
                let object = self.individual(head)?;
                if negative {
                    Axiom::NegativeObjectPropertyAssertion {
                        property,
                        subject,
                        object,
                    }
                } else {
                    Axiom::ObjectPropertyAssertion {
                        property,
                        subject,
                        object,
                    }
                }
            }
            PropertyExpression::Data(property) => {
                let value = self.literal(head)?;
                if negative {
                    Axiom::NegativeDataPropertyAssertion {
                        property,
                        subject,
                        value,
                    }
                } else {
                    Axiom::DataPropertyAssertion {
                        property,
                        subject,
                        value,
                    }
                }
            }
        })
    }
}
