//! OWL 2 functional-style syntax writer.

use std::{collections::BTreeMap, io::Write};

use log::debug;

use graffowl_core::ontology::{
    Atom, Axiom, CardinalityKind, ClassExpression, DataRange, FacetRestriction, Iri, Literal,
    ObjectPropertyExpression, Ontology, RuleArgument,
};

use super::{Error, Exporter};

/// Writes `Prefix(...)` declarations followed by one `Ontology(...)` block
/// with one axiom per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct FunctionalSyntaxExporter;

impl FunctionalSyntaxExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for FunctionalSyntaxExporter {
    fn export(&self, ontology: &Ontology, out: &mut dyn Write) -> Result<(), Error> {
        let prefixes: BTreeMap<&str, &str> = ontology
            .prefixes()
            .iter()
            .map(|(prefix, namespace)| (prefix.as_str(), namespace.as_str()))
            .collect();
        for (prefix, namespace) in &prefixes {
            writeln!(out, "Prefix({prefix}:=<{namespace}>)")?;
        }
        writeln!(out)?;

        let writer = Writer::new(prefixes);
        writeln!(out, "Ontology(<{}>", ontology.iri())?;
        for import in ontology.imports() {
            writeln!(out, "Import(<{import}>)")?;
        }
        if !ontology.imports().is_empty() {
            writeln!(out)?;
        }
        for axiom in ontology.axioms() {
            writeln!(out, "{}", writer.axiom(axiom))?;
        }
        writeln!(out, ")")?;

        debug!(
            ontology = ontology.iri().as_str(),
            axioms = ontology.axiom_count();
            "Wrote functional syntax"
        );
        Ok(())
    }
}

/// Renders ontology terms against a prefix table.
struct Writer<'a> {
    prefixes: BTreeMap<&'a str, &'a str>,
}

fn call(name: &str, arguments: impl IntoIterator<Item = String>) -> String {
    let arguments: Vec<String> = arguments.into_iter().collect();
    format!("{name}({})", arguments.join(" "))
}

/// A name usable after `prefix:` without angle brackets. A local name may
/// contain `.` but not end with one.
fn is_simple_name(local: &str) -> bool {
    let mut chars = local.chars();
    chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        && !local.ends_with('.')
}

fn escape(lexical: &str) -> String {
    lexical.replace('\\', "\\\\").replace('"', "\\\"")
}

impl<'a> Writer<'a> {
    fn new(prefixes: BTreeMap<&'a str, &'a str>) -> Self {
        Self { prefixes }
    }

    /// `prefix:local` under the longest matching namespace, else `<iri>`.
    fn iri(&self, iri: &Iri) -> String {
        let abbreviated = self
            .prefixes
            .iter()
            .filter_map(|(prefix, namespace)| {
                let local = iri.as_str().strip_prefix(namespace)?;
                is_simple_name(local).then_some((namespace.len(), prefix, local))
            })
            .max_by_key(|(len, ..)| *len);
        match abbreviated {
            Some((_, prefix, local)) => format!("{prefix}:{local}"),
            None => format!("<{iri}>"),
        }
    }

    fn literal(&self, literal: &Literal) -> String {
        let quoted = format!("\"{}\"", escape(literal.lexical()));
        match (literal.datatype(), literal.lang()) {
            (Some(datatype), _) => format!("{quoted}^^{}", self.iri(datatype)),
            (None, Some(lang)) => format!("{quoted}@{lang}"),
            (None, None) => quoted,
        }
    }

    fn object_property(&self, property: &ObjectPropertyExpression) -> String {
        match property {
            ObjectPropertyExpression::Property(iri) => self.iri(iri),
            ObjectPropertyExpression::InverseOf(iri) => call("ObjectInverseOf", [self.iri(iri)]),
        }
    }

    fn cardinality_name(prefix: &str, kind: CardinalityKind) -> String {
        format!("{prefix}{kind}Cardinality")
    }

    fn class(&self, expression: &ClassExpression) -> String {
        match expression {
            ClassExpression::Class(iri) => self.iri(iri),
            ClassExpression::ObjectIntersectionOf(operands) => {
                call("ObjectIntersectionOf", operands.iter().map(|c| self.class(c)))
            }
            ClassExpression::ObjectUnionOf(operands) => {
                call("ObjectUnionOf", operands.iter().map(|c| self.class(c)))
            }
            ClassExpression::ObjectComplementOf(operand) => {
                call("ObjectComplementOf", [self.class(operand)])
            }
            ClassExpression::ObjectOneOf(individuals) => {
                call("ObjectOneOf", individuals.iter().map(|i| self.iri(i)))
            }
            ClassExpression::ObjectSomeValuesFrom(property, filler) => call(
                "ObjectSomeValuesFrom",
                [self.object_property(property), self.class(filler)],
            ),
            ClassExpression::ObjectAllValuesFrom(property, filler) => call(
                "ObjectAllValuesFrom",
                [self.object_property(property), self.class(filler)],
            ),
            ClassExpression::ObjectHasValue(property, individual) => call(
                "ObjectHasValue",
                [self.object_property(property), self.iri(individual)],
            ),
            ClassExpression::ObjectHasSelf(property) => {
                call("ObjectHasSelf", [self.object_property(property)])
            }
            ClassExpression::ObjectCardinality {
                kind,
                count,
                property,
                filler,
            } => call(
                &Self::cardinality_name("Object", *kind),
                [count.to_string(), self.object_property(property)]
                    .into_iter()
                    .chain(filler.as_deref().map(|c| self.class(c))),
            ),
            ClassExpression::DataSomeValuesFrom(property, range) => call(
                "DataSomeValuesFrom",
                [self.iri(property), self.data_range(range)],
            ),
            ClassExpression::DataAllValuesFrom(property, range) => call(
                "DataAllValuesFrom",
                [self.iri(property), self.data_range(range)],
            ),
            ClassExpression::DataHasValue(property, value) => {
                call("DataHasValue", [self.iri(property), self.literal(value)])
            }
            ClassExpression::DataCardinality {
                kind,
                count,
                property,
                filler,
            } => call(
                &Self::cardinality_name("Data", *kind),
                [count.to_string(), self.iri(property)]
                    .into_iter()
                    .chain(filler.as_deref().map(|r| self.data_range(r))),
            ),
        }
    }

    fn facet(&self, restriction: &FacetRestriction) -> String {
        format!(
            "{} {}",
            self.iri(&restriction.facet.iri()),
            self.literal(&restriction.value)
        )
    }

    fn data_range(&self, range: &DataRange) -> String {
        match range {
            DataRange::Datatype(iri) => self.iri(iri),
            DataRange::ComplementOf(operand) => call("DataComplementOf", [self.data_range(operand)]),
            DataRange::UnionOf(operands) => {
                call("DataUnionOf", operands.iter().map(|r| self.data_range(r)))
            }
            DataRange::IntersectionOf(operands) => {
                call("DataIntersectionOf", operands.iter().map(|r| self.data_range(r)))
            }
            DataRange::OneOf(literals) => {
                call("DataOneOf", literals.iter().map(|l| self.literal(l)))
            }
            DataRange::Restriction { datatype, facets } => call(
                "DatatypeRestriction",
                std::iter::once(self.iri(datatype)).chain(facets.iter().map(|f| self.facet(f))),
            ),
        }
    }

    fn argument(&self, argument: &RuleArgument) -> String {
        match argument {
            RuleArgument::Variable(iri) => call("Variable", [self.iri(iri)]),
            RuleArgument::Individual(iri) => self.iri(iri),
            RuleArgument::Literal(literal) => self.literal(literal),
        }
    }

    fn atom(&self, atom: &Atom) -> String {
        let arguments = atom.arguments().into_iter().map(|a| self.argument(a));
        match atom {
            Atom::Class { class, .. } => {
                call("ClassAtom", std::iter::once(self.iri(class)).chain(arguments))
            }
            Atom::DataRange { datatype, .. } => {
                call("DataRangeAtom", std::iter::once(self.iri(datatype)).chain(arguments))
            }
            Atom::ObjectProperty { property, .. } => {
                call("ObjectPropertyAtom", std::iter::once(self.iri(property)).chain(arguments))
            }
            Atom::DataProperty { property, .. } => {
                call("DataPropertyAtom", std::iter::once(self.iri(property)).chain(arguments))
            }
            Atom::SameIndividual(..) => call("SameIndividualAtom", arguments),
            Atom::DifferentIndividuals(..) => call("DifferentIndividualsAtom", arguments),
            Atom::BuiltIn { predicate, .. } => {
                call("BuiltInAtom", std::iter::once(self.iri(predicate)).chain(arguments))
            }
        }
    }

    fn axiom(&self, axiom: &Axiom) -> String {
        let name = axiom.keyword();
        match axiom {
            Axiom::Declaration(entity) => call(
                name,
                [call(entity.kind().keyword(), [self.iri(entity.iri())])],
            ),
            Axiom::SubClassOf { sub, sup } => call(name, [self.class(sub), self.class(sup)]),
            Axiom::EquivalentClasses(classes) | Axiom::DisjointClasses(classes) => {
                call(name, classes.iter().map(|c| self.class(c)))
            }
            Axiom::DisjointUnion { class, members } => call(
                name,
                std::iter::once(self.iri(class)).chain(members.iter().map(|c| self.class(c))),
            ),
            Axiom::HasKey {
                class,
                object_properties,
                data_properties,
            } => call(
                name,
                [
                    self.class(class),
                    call("", object_properties.iter().map(|p| self.object_property(p))),
                    call("", data_properties.iter().map(|p| self.iri(p))),
                ],
            ),
            Axiom::ClassAssertion { class, individual } => {
                call(name, [self.class(class), self.iri(individual)])
            }
            Axiom::SameIndividual(individuals) | Axiom::DifferentIndividuals(individuals) => {
                call(name, individuals.iter().map(|i| self.iri(i)))
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
            } => call(
                name,
                [
                    self.object_property(property),
                    self.iri(subject),
                    self.iri(object),
                ],
            ),
            Axiom::DataPropertyAssertion {
                property,
                subject,
                value,
            }
            | Axiom::NegativeDataPropertyAssertion {
                property,
                subject,
                value,
            } => call(
                name,
                [self.iri(property), self.iri(subject), self.literal(value)],
            ),
            Axiom::FunctionalObjectProperty(p)
            | Axiom::InverseFunctionalObjectProperty(p)
            | Axiom::ReflexiveObjectProperty(p)
            | Axiom::IrreflexiveObjectProperty(p)
            | Axiom::SymmetricObjectProperty(p)
            | Axiom::AsymmetricObjectProperty(p)
            | Axiom::TransitiveObjectProperty(p) => call(name, [self.object_property(p)]),
            Axiom::InverseObjectProperties(a, b) | Axiom::SubObjectPropertyOf { sub: a, sup: b } => {
                call(name, [self.object_property(a), self.object_property(b)])
            }
            Axiom::EquivalentObjectProperties(properties)
            | Axiom::DisjointObjectProperties(properties) => {
                call(name, properties.iter().map(|p| self.object_property(p)))
            }
            Axiom::SubObjectPropertyChain { chain, sup } => call(
                name,
                [
                    call(
                        "ObjectPropertyChain",
                        chain.iter().map(|p| self.object_property(p)),
                    ),
                    self.object_property(sup),
                ],
            ),
            Axiom::ObjectPropertyDomain {
                property,
                domain: class,
            }
            | Axiom::ObjectPropertyRange {
                property,
                range: class,
            } => call(name, [self.object_property(property), self.class(class)]),
            Axiom::FunctionalDataProperty(p) => call(name, [self.iri(p)]),
            Axiom::EquivalentDataProperties(properties)
            | Axiom::DisjointDataProperties(properties) => {
                call(name, properties.iter().map(|p| self.iri(p)))
            }
            Axiom::SubDataPropertyOf { sub, sup } => call(name, [self.iri(sub), self.iri(sup)]),
            Axiom::DataPropertyDomain { property, domain } => {
                call(name, [self.iri(property), self.class(domain)])
            }
            Axiom::DataPropertyRange { property, range } => {
                call(name, [self.iri(property), self.data_range(range)])
            }
            Axiom::DatatypeDefinition { datatype, range } => {
                call(name, [self.iri(datatype), self.data_range(range)])
            }
            Axiom::AnnotationAssertion {
                property,
                subject,
                value,
            } => call(
                name,
                [self.iri(property), self.iri(subject), self.literal(value)],
            ),
            Axiom::Rule(rule) => call(
                name,
                [
                    call("Body", rule.body.iter().map(|a| self.atom(a))),
                    call("Head", rule.head.iter().map(|a| self.atom(a))),
                ],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use graffowl_core::ontology::{Entity, EntityKind, Facet, Rule, vocab};

    use super::*;

    const ZOO: &str = "http://example.org/zoo#";

    fn zoo(name: &str) -> Iri {
        Iri::new(format!("{ZOO}{name}"))
    }

    fn ontology() -> Ontology {
        let mut ontology = Ontology::new(Iri::new("http://example.org/zoo"));
        ontology.set_prefix("xsd", vocab::XSD);
        ontology.set_prefix("", ZOO);
        ontology
    }

    fn render(ontology: &Ontology) -> String {
        FunctionalSyntaxExporter::new()
            .export_to_string(ontology)
            .expect("Failed to export")
    }

    fn writer(ontology: &Ontology) -> Writer<'_> {
        Writer::new(
            ontology
                .prefixes()
                .iter()
                .map(|(p, n)| (p.as_str(), n.as_str()))
                .collect(),
        )
    }

    #[test]
    fn test_document_layout() {
        let mut ontology = ontology();
        ontology.add_import(Iri::new("http://example.org/plants"));
        ontology.add_axiom(Axiom::Declaration(Entity::new(EntityKind::Class, zoo("Dog"))));
        ontology.add_axiom(Axiom::SubClassOf {
            sub: ClassExpression::Class(zoo("Dog")),
            sup: ClassExpression::Class(zoo("Animal")),
        });

        let expected = "\
Prefix(:=<http://example.org/zoo#>)
Prefix(xsd:=<http://www.w3.org/2001/XMLSchema#>)

Ontology(<http://example.org/zoo>
Import(<http://example.org/plants>)

Declaration(Class(:Dog))
SubClassOf(:Dog :Animal)
)
";
        assert_eq!(render(&ontology), expected);
    }

    #[test]
    fn test_iri_abbreviation() {
        let ontology = ontology();
        let writer = writer(&ontology);
        assert_eq!(writer.iri(&zoo("Dog")), ":Dog");
        assert_eq!(writer.iri(&Iri::new(vocab::XSD_INTEGER)), "xsd:integer");
        assert_eq!(writer.iri(&zoo("Big Cat")), "<http://example.org/zoo#Big Cat>");
        assert_eq!(writer.iri(&zoo("")), "<http://example.org/zoo#>");
        assert_eq!(writer.iri(&zoo("v1.2")), ":v1.2");
        assert_eq!(writer.iri(&zoo("Dog.")), "<http://example.org/zoo#Dog.>");
        assert_eq!(
            writer.iri(&Iri::new("http://elsewhere.org/x")),
            "<http://elsewhere.org/x>"
        );
    }

    #[test]
    fn test_literals() {
        let ontology = ontology();
        let writer = writer(&ontology);
        assert_eq!(writer.literal(&Literal::plain("say \"hi\"")), r#""say \"hi\"""#);
        assert_eq!(writer.literal(&Literal::integer(7)), r#""7"^^xsd:integer"#);
        assert_eq!(writer.literal(&Literal::with_lang("chien", "fr")), r#""chien"@fr"#);
    }

    #[test]
    fn test_nested_expressions() {
        let ontology = ontology();
        let writer = writer(&ontology);
        let eats = ObjectPropertyExpression::InverseOf(zoo("eatenBy"));
        let expression = ClassExpression::ObjectCardinality {
            kind: CardinalityKind::Min,
            count: 2,
            property: eats,
            filler: Some(Box::new(ClassExpression::ObjectComplementOf(Box::new(
                ClassExpression::Class(zoo("Plant")),
            )))),
        };
        assert_eq!(
            writer.class(&expression),
            "ObjectMinCardinality(2 ObjectInverseOf(:eatenBy) ObjectComplementOf(:Plant))"
        );

        let range = DataRange::Restriction {
            datatype: Iri::new(vocab::XSD_INTEGER),
            facets: [FacetRestriction {
                facet: Facet::MinInclusive,
                value: Literal::plain("18"),
            }]
            .into(),
        };
        assert_eq!(
            writer.data_range(&range),
            r#"DatatypeRestriction(xsd:integer xsd:minInclusive "18")"#
        );
    }

    #[test]
    fn test_rule_and_chain() {
        let ontology = ontology();
        let writer = writer(&ontology);
        let x = RuleArgument::Variable(zoo("swrlVar_x"));
        let rule = Rule::new(
            [Atom::Class {
                class: zoo("Dog"),
                argument: x.clone(),
            }]
            .into(),
            [Atom::Class {
                class: zoo("Animal"),
                argument: x,
            }]
            .into(),
        );
        assert_eq!(
            writer.axiom(&Axiom::Rule(rule)),
            "DLSafeRule(Body(ClassAtom(:Dog Variable(:swrlVar_x))) \
             Head(ClassAtom(:Animal Variable(:swrlVar_x))))"
        );

        let chain = Axiom::SubObjectPropertyChain {
            chain: vec![
                ObjectPropertyExpression::Property(zoo("parentOf")),
                ObjectPropertyExpression::Property(zoo("parentOf")),
            ],
            sup: ObjectPropertyExpression::Property(zoo("grandparentOf")),
        };
        assert_eq!(
            writer.axiom(&chain),
            "SubObjectPropertyOf(ObjectPropertyChain(:parentOf :parentOf) :grandparentOf)"
        );
    }

    #[test]
    fn test_has_key_groups_properties() {
        let ontology = ontology();
        let writer = writer(&ontology);
        let axiom = Axiom::HasKey {
            class: ClassExpression::Class(zoo("Person")),
            object_properties: Default::default(),
            data_properties: [zoo("ssn")].into(),
        };
        assert_eq!(writer.axiom(&axiom), "HasKey(:Person () (:ssn))");
    }
}
