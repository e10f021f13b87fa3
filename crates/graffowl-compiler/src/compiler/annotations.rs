//! Annotation tables and comment shapes.

use graffowl_core::{
    model::TableData,
    ontology::{Axiom, Iri, Literal, Ontology, vocab},
};

use super::{Compiler, Node};
use crate::{
    error::{ErrorCode, Result},
    note::Note,
};

impl<'d> Compiler<'d> {
    /// An annotation table annotates the shapes it points at, or the
    /// ontology itself when it points nowhere. Each row is a property and a
    /// value. An annotation shape adds its text as an `rdfs:comment` to the
    /// shapes it points at.
    pub(super) fn process_annotations(&self, ontology: &mut Ontology) -> Result<()> {
        for &node in self.graphics(Note::Annotation) {
            if let Some(data) = node.table() {
                if node.graphic().outgoing().is_empty() {
                    let subject = ontology.iri().clone();
                    self.annotate(ontology, subject, node, data)?;
                }
                for connector in node.outgoing() {
                    let subject = self.uri(self.head(connector)?)?;
                    self.annotate(ontology, subject, node, data)?;
                }
            } else if let Some(shape) = node.graphic().as_shape() {
                for connector in node.outgoing() {
                    let subject = self.uri(self.head(connector)?)?;
                    ontology.add_axiom(Axiom::AnnotationAssertion {
                        property: Iri::new(vocab::RDFS_COMMENT),
                        subject,
                        value: Literal::plain(shape.text()),
                    });
                }
            } else {
                return Err(node.error(
                    ErrorCode::E100,
                    "Only table and shape annotations supported",
                ));
            }
        }
        Ok(())
    }

    fn annotate(
        &self,
        ontology: &mut Ontology,
        subject: Iri,
        table: Node<'d>,
        data: &TableData,
    ) -> Result<()> {
        let columns_error = || table.error(ErrorCode::E103, "Annotation table must have 2 columns");
        if data.column_count() != 2 {
            return Err(columns_error());
        }
        for row in data.rows() {
            let [property, value] = row.as_slice() else {
                return Err(columns_error());
            };
            let property = self.uri(table.cell(*property))?;
            let value = self.shape(table.cell(*value))?.text();
            ontology.add_axiom(Axiom::AnnotationAssertion {
                property,
                subject: subject.clone(),
                value: Literal::plain(value),
            });
        }
        Ok(())
    }
}
