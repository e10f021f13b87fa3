//! Data ranges, literals and datatype definitions.

use std::collections::BTreeSet;

use graffowl_core::ontology::{
    Axiom, DataRange, Entity, EntityKind, Facet, FacetRestriction, Literal, Ontology,
};

use super::{Compiler, Node};
use crate::{
    error::{ErrorCode, Result},
    note::Note,
};

impl<'d> Compiler<'d> {
    pub(super) fn process_datatypes(&self, ontology: &mut Ontology) -> Result<()> {
        for connector in self.connectors(Note::DatatypeDefinition)? {
            let datatype = self.uri(self.tail(connector)?)?;
            let range = self.data_range(self.head(connector)?)?;
            ontology.add_axiom(Axiom::Declaration(Entity::new(
                EntityKind::Datatype,
                datatype.clone(),
            )));
            ontology.add_axiom(Axiom::DatatypeDefinition { datatype, range });
        }
        Ok(())
    }

    /// The data range a graphic denotes.
    pub(super) fn data_range(&self, node: Node<'d>) -> Result<DataRange> {
        let range = match self.note(node)? {
            Note::Datatype => DataRange::Datatype(self.uri(node)?),
            Note::DataComplementOf => {
                let mut outgoing = node.outgoing();
                let connector = match (outgoing.next(), outgoing.next()) {
                    (Some(connector), None) => connector,
                    _ => return Err(node.error(ErrorCode::E101, "Must target 1 datatype")),
                };
                let target = connector
                    .head()
                    .ok_or_else(|| node.error(ErrorCode::E102, "Must target a datatype"))?;
                DataRange::ComplementOf(Box::new(self.data_range(target)?))
            }
            Note::DataUnionOf => DataRange::UnionOf(self.data_range_targets(node)?),
            Note::DataIntersectionOf => DataRange::IntersectionOf(self.data_range_targets(node)?),
            Note::DataOneOf => DataRange::OneOf(self.literal_targets(node)?),
            Note::DatatypeRestriction => self.datatype_restriction(node)?,
            _ => {
                return Err(node.error(ErrorCode::E203, "Could not create Datatype from graphic"));
            }
        };
        Ok(range)
    }

    fn data_range_targets(&self, node: Node<'d>) -> Result<BTreeSet<DataRange>> {
        if node.outgoing().len() < 2 {
            return Err(node.error(ErrorCode::E101, "Must target 2 or more datatypes"));
        }
        node.outgoing()
            .map(|connector| self.data_range(self.head(connector)?))
            .collect()
    }

    fn literal_targets(&self, node: Node<'d>) -> Result<BTreeSet<Literal>> {
        if node.outgoing().len() < 2 {
            return Err(node.error(ErrorCode::E101, "Must target 2 or more literals"));
        }
        node.outgoing()
            .map(|connector| self.literal(self.head(connector)?))
            .collect()
    }

    /// A datatype narrowed by facets. The shape's own text names the
    /// datatype; each outgoing line carries a facet label and points at the
    /// facet's value.
    fn datatype_restriction(&self, node: Node<'d>) -> Result<DataRange> {
        let datatype = self.uri(node)?;

        let mut facets = BTreeSet::new();
        for connector in node.outgoing() {
            if connector.line().is_none() {
                return Err(connector.error(ErrorCode::E100, "Facet restriction must be a line"));
            }
            let labels = connector.labels();
            let [label] = labels.as_slice() else {
                return Err(connector.error(
                    ErrorCode::E104,
                    "Facet restriction requires a facet URI label",
                ));
            };
            let iri = self.uri(*label)?;
            let facet = Facet::from_iri(&iri).ok_or_else(|| {
                label
                    .error(ErrorCode::E204, format!("Unknown facet `{iri}`"))
                    .with_help("use an XSD facet such as `xsd:minInclusive` or `xsd:pattern`")
            })?;
            let value = self.literal(self.head(connector)?)?;
            facets.insert(FacetRestriction { facet, value });
        }

        if facets.is_empty() {
            return Err(node.error(
                ErrorCode::E101,
                "Datatype restriction requires some facet restrictions",
            ));
        }
        Ok(DataRange::Restriction { datatype, facets })
    }

    /// The literal a graphic denotes.
    ///
    /// A shape gives a plain literal of its text. A two-row table gives a
    /// typed literal: the datatype in the first row, the value in the
    /// second.
    pub(super) fn literal(&self, node: Node<'d>) -> Result<Literal> {
        if let Some(shape) = node.shape() {
            return Ok(Literal::plain(shape.text()));
        }
        let Some(table) = node.table() else {
            return Err(node.error(ErrorCode::E100, "Cannot make Literal from graphic"));
        };
        if table.cells().len() != 2 {
            return Err(node.error(ErrorCode::E103, "Literal table must have 2 cells"));
        }
        let rows_error = || node.error(ErrorCode::E103, "Literal table must have 2 rows");
        if table.row_count() != 2 {
            return Err(rows_error());
        }
        let (Some(datatype), Some(value)) = (table.cell(0, 0), table.cell(1, 0)) else {
            return Err(rows_error());
        };
        let datatype = self.uri(node.cell(datatype))?;
        let value = self.shape(node.cell(value))?.text().trim();
        Ok(Literal::typed(value, datatype))
    }
}
