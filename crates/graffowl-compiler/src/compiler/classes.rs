//! Class axioms and class expressions.

use std::collections::BTreeSet;

use graffowl_core::ontology::{Axiom, ClassExpression, Ontology, PropertyExpression};

use super::{Compiler, Node};
use crate::{
    cardinality::{Cardinality, InvalidCardinality},
    error::{ErrorCode, Result},
    note::Note,
};

impl<'d> Compiler<'d> {
    pub(super) fn process_class_axioms(&self, ontology: &mut Ontology) -> Result<()> {
        for connector in self.connectors(Note::SubclassOf)? {
            let (sub, sup) = self.class_pair(connector)?;
            ontology.add_axiom(Axiom::SubClassOf { sub, sup });
        }

        for connector in self.connectors(Note::EquivalentClasses)? {
            let (a, b) = self.class_pair(connector)?;
            ontology.add_axiom(Axiom::EquivalentClasses([a, b].into()));
        }

        for connector in self.connectors(Note::DisjointClasses)? {
            let (a, b) = self.class_pair(connector)?;
            ontology.add_axiom(Axiom::DisjointClasses([a, b].into()));
        }

        for shape in self.shapes(Note::PairwiseDisjoint)? {
            let classes = self.class_targets(shape)?;
            if classes.len() < 2 {
                return Err(shape.error(
                    ErrorCode::E101,
                    "Must have 2 or more outgoing connections to classes",
                ));
            }
            ontology.add_axiom(Axiom::DisjointClasses(classes));
        }

        for shape in self.shapes(Note::DisjointUnion)? {
            let incoming = self.single_incoming(shape, "Disjoint union")?;
            let tail = self.tail(incoming)?;
            let class = match self.class_expression(tail)? {
                ClassExpression::Class(iri) => iri,
                _ => return Err(tail.error(ErrorCode::E203, "Disjoint union requires a class")),
            };
            let members = self.class_targets(shape)?;
            if members.is_empty() {
                return Err(shape.error(
                    ErrorCode::E101,
                    "Disjoint union must have one or more member classes",
                ));
            }
            ontology.add_axiom(Axiom::DisjointUnion { class, members });
        }

        for shape in self.shapes(Note::HasKey)? {
            let incoming = self.single_incoming(shape, "HasKey")?;
            let class = self.class_expression(self.tail(incoming)?)?;

            let mut object_properties = BTreeSet::new();
            let mut data_properties = BTreeSet::new();
            for connector in shape.outgoing() {
                match self.property(self.head(connector)?)? {
                    PropertyExpression::Object(property) => object_properties.insert(property),
                    PropertyExpression::Data(property) => data_properties.insert(property),
                };
            }
            if object_properties.is_empty() && data_properties.is_empty() {
                return Err(shape.error(ErrorCode::E101, "HasKey must have one or more target props"));
            }
            ontology.add_axiom(Axiom::HasKey {
                class,
                object_properties,
                data_properties,
            });
        }
        Ok(())
    }

    /// Class expressions at the tail and head of a connector.
    fn class_pair(&self, connector: Node<'d>) -> Result<(ClassExpression, ClassExpression)> {
        let tail = self.class_expression(self.tail(connector)?)?;
        let head = self.class_expression(self.head(connector)?)?;
        Ok((tail, head))
    }

    /// The class expression a graphic denotes.
    pub(super) fn class_expression(&self, node: Node<'d>) -> Result<ClassExpression> {
        let expression = match self.note(node)? {
            Note::OwlClass => ClassExpression::Class(self.uri(node)?),
            Note::ObjUnion => ClassExpression::ObjectUnionOf(self.class_operands(node)?),
            Note::ObjIntersection => {
                ClassExpression::ObjectIntersectionOf(self.class_operands(node)?)
            }
            Note::ObjComplement => {
                let connector = self.single_outgoing(node, "obj-complement")?;
                let operand = self.class_expression(self.head(connector)?)?;
                ClassExpression::ObjectComplementOf(Box::new(operand))
            }
            Note::ObjOneOf => {
                self.shape(node)?;
                let individuals = self
                    .shape_targets(node)?
                    .into_iter()
                    .map(|target| self.individual(target))
                    .collect::<Result<BTreeSet<_>>>()?;
                if individuals.is_empty() {
                    return Err(node.error(
                        ErrorCode::E101,
                        "obj-one-of must have one or more outgoing connections",
                    ));
                }
                ClassExpression::ObjectOneOf(individuals)
            }
            Note::HasValue => self.has_value(node)?,
            Note::SomeValues => self.some_values(node)?,
            Note::AllValues => self.all_values(node)?,
            Note::HasSelf => self.has_self(node)?,
            Note::Cardinality => self.cardinality(node)?,
            _ => {
                return Err(node.error(
                    ErrorCode::E203,
                    "Could not create Class Expression from graphic",
                ));
            }
        };
        Ok(expression)
    }

    /// Operands of a union or intersection.
    fn class_operands(&self, node: Node<'d>) -> Result<BTreeSet<ClassExpression>> {
        self.shape(node)?;
        let operands = self.class_targets(node)?;
        if operands.is_empty() {
            return Err(node.error(
                ErrorCode::E101,
                "Must have one or more outgoing connections to class expressions",
            ));
        }
        Ok(operands)
    }

    /// Class expressions at the heads of a shape's outgoing connectors.
    pub(super) fn class_targets(&self, node: Node<'d>) -> Result<BTreeSet<ClassExpression>> {
        self.shape_targets(node)?
            .into_iter()
            .map(|target| self.class_expression(target))
            .collect()
    }

    /// Heads of a shape's outgoing connectors, which must all be shapes.
    fn shape_targets(&self, node: Node<'d>) -> Result<Vec<Node<'d>>> {
        node.outgoing()
            .map(|connector| {
                let head = connector
                    .head()
                    .ok_or_else(|| connector.error(ErrorCode::E102, "Missing target"))?;
                match head.shape() {
                    Some(_) => Ok(head),
                    None => Err(head.error(ErrorCode::E100, "Must be a shape")),
                }
            })
            .collect()
    }

    fn some_values(&self, node: Node<'d>) -> Result<ClassExpression> {
        let connector = self.single_outgoing(node, "some-values")?;
        let filler = self.head(connector)?;
        Ok(match self.line_property(connector)? {
            PropertyExpression::Object(property) => ClassExpression::ObjectSomeValuesFrom(
                property,
                Box::new(self.class_expression(filler)?),
            ),
            PropertyExpression::Data(property) => ClassExpression::DataSomeValuesFrom(
                property,
                Box::new(self.data_range(filler)?),
            ),
        })
    }

    fn all_values(&self, node: Node<'d>) -> Result<ClassExpression> {
        let connector = self.single_outgoing(node, "all-values")?;
        let filler = self.head(connector)?;
        Ok(match self.line_property(connector)? {
            PropertyExpression::Object(property) => ClassExpression::ObjectAllValuesFrom(
                property,
                Box::new(self.class_expression(filler)?),
            ),
            PropertyExpression::Data(property) => ClassExpression::DataAllValuesFrom(
                property,
                Box::new(self.data_range(filler)?),
            ),
        })
    }

    fn has_value(&self, node: Node<'d>) -> Result<ClassExpression> {
        let connector = self.single_outgoing(node, "has-value")?;
        let value = self.head(connector)?;
        Ok(match self.line_property(connector)? {
            PropertyExpression::Object(property) => {
                ClassExpression::ObjectHasValue(property, self.individual(value)?)
            }
            PropertyExpression::Data(property) => {
                ClassExpression::DataHasValue(property, self.literal(value)?)
            }
        })
    }

    fn has_self(&self, node: Node<'d>) -> Result<ClassExpression> {
        let connector = self.single_outgoing(node, "has-self")?;
        match self.line_property(connector)? {
            PropertyExpression::Object(property) => Ok(ClassExpression::ObjectHasSelf(property)),
            PropertyExpression::Data(_) => Err(connector.error(
                ErrorCode::E203,
                "Has-self property must be an object property",
            )),
        }
    }

    fn cardinality(&self, node: Node<'d>) -> Result<ClassExpression> {
        let connector = self.single_outgoing(node, "cardinality expression")?;
        let property = self.line_property(connector)?;
        let Cardinality { kind, count } = self.cardinality_label(connector)?;

        Ok(match property {
            PropertyExpression::Object(property) => ClassExpression::ObjectCardinality {
                kind,
                count,
                property,
                filler: connector
                    .head()
                    .map(|head| self.class_expression(head).map(Box::new))
                    .transpose()?,
            },
            PropertyExpression::Data(property) => ClassExpression::DataCardinality {
                kind,
                count,
                property,
                filler: connector
                    .head()
                    .map(|head| self.data_range(head).map(Box::new))
                    .transpose()?,
            },
        })
    }

    /// The first `[...]` label of a cardinality line.
    fn cardinality_label(&self, connector: Node<'d>) -> Result<Cardinality> {
        if connector.line().is_none() {
            return Err(connector.error(ErrorCode::E100, "Cardinality must be a line"));
        }
        let label = connector
            .labels()
            .into_iter()
            .filter_map(|label| label.shape())
            .map(|shape| shape.text().trim())
            .find(|text| text.starts_with('['))
            .ok_or_else(|| {
                connector.error(
                    ErrorCode::E104,
                    "Cardinality must be a line label using square brackets",
                )
            })?;
        label
            .parse()
            .map_err(|err: InvalidCardinality| {
                connector
                    .error(ErrorCode::E300, err.to_string())
                    .with_help("write `[n]`, `[n..]` or `[..n]`")
            })
    }
}
