//! SWRL rules read from the text of connected shapes.

use std::collections::BTreeSet;

use graffowl_core::ontology::{
    Atom, Axiom, Entity, EntityKind, Iri, Literal, Ontology, Rule, RuleArgument,
};
use log::debug;

use super::{Compiler, Node};
use crate::{
    error::{ErrorCode, Result},
    note::Note,
    rule::{Predicate, RawArgument, RawAtom, parse_atoms},
};

/// What an atom argument position accepts.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Individual,
    Data,
}

impl Slot {
    fn accepts(self, argument: &RawArgument<'_>) -> bool {
        match self {
            Self::Individual => argument.is_individual(),
            Self::Data => argument.is_data(),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Individual => "a variable or an individual",
            Self::Data => "a variable or a literal",
        }
    }
}

impl<'d> Compiler<'d> {
    /// A `rule` connector's tail shape holds the body atoms, its head shape
    /// the head atoms. Predicates resolve against the ontology and the
    /// `imported` entities.
    pub(super) fn process_rules(
        &self,
        ontology: &mut Ontology,
        imported: &BTreeSet<Entity>,
    ) -> Result<()> {
        for connector in self.connectors(Note::Rule)? {
            let body = self.atoms(self.tail(connector)?, ontology, imported)?;
            let head = self.atoms(self.head(connector)?, ontology, imported)?;
            ontology.add_axiom(Axiom::Rule(Rule::new(body, head)));
        }
        Ok(())
    }

    fn atoms(
        &self,
        node: Node<'d>,
        ontology: &Ontology,
        imported: &BTreeSet<Entity>,
    ) -> Result<BTreeSet<Atom>> {
        let text = self.shape(node)?.text();
        let parsed = parse_atoms(text).map_err(|err| node.error(ErrorCode::E301, err.to_string()))?;

        let mut atoms = BTreeSet::new();
        for atom in &parsed {
            self.resolve_atom(atom, node, ontology, imported, &mut atoms)?;
        }
        Ok(atoms)
    }

    /// Resolves one atom. A predicate naming several entities yields one
    /// atom per entity; a predicate naming none yields nothing.
    fn resolve_atom(
        &self,
        atom: &RawAtom<'_>,
        node: Node<'d>,
        ontology: &Ontology,
        imported: &BTreeSet<Entity>,
        atoms: &mut BTreeSet<Atom>,
    ) -> Result<()> {
        let arguments = atom
            .arguments
            .iter()
            .map(|argument| self.rule_argument(argument, node))
            .collect::<Result<Vec<_>>>()?;

        match atom.predicate_kind() {
            Predicate::SameAs | Predicate::DifferentFrom => {
                self.check_arguments(atom, &[Slot::Individual, Slot::Individual], node)?;
                if let [a, b] = arguments.as_slice() {
                    let (a, b) = (a.clone(), b.clone());
                    atoms.insert(match atom.predicate_kind() {
                        Predicate::SameAs => Atom::SameIndividual(a, b),
                        _ => Atom::DifferentIndividuals(a, b),
                    });
                }
            }
            Predicate::BuiltIn(predicate) => {
                let slots = vec![Slot::Data; atom.arguments.len()];
                self.check_arguments(atom, &slots, node)?;
                atoms.insert(Atom::BuiltIn {
                    predicate: self.resolve(predicate, node)?,
                    arguments,
                });
            }
            Predicate::Named(predicate) => {
                let iri = self.resolve(predicate, node)?;
                let mut entities = ontology.entities_with_iri(&iri);
                entities.extend(imported.iter().filter(|entity| entity.iri() == &iri).cloned());
                entities.sort();
                entities.dedup();
                if entities.is_empty() {
                    debug!(predicate = iri.as_str(); "Rule predicate names no entity");
                }
                for entity in entities {
                    let slots: &[Slot] = match entity.kind() {
                        EntityKind::Class => &[Slot::Individual],
                        EntityKind::DataProperty => &[Slot::Individual, Slot::Data],
                        EntityKind::Datatype => &[Slot::Data],
                        EntityKind::ObjectProperty => &[Slot::Individual, Slot::Individual],
                        EntityKind::AnnotationProperty | EntityKind::NamedIndividual => continue,
                    };
                    self.check_arguments(atom, slots, node)?;
                    if let Some(resolved) = entity_atom(entity.kind(), &iri, &arguments) {
                        atoms.insert(resolved);
                    }
                }
            }
        }
        Ok(())
    }

    fn check_arguments(&self, atom: &RawAtom<'_>, slots: &[Slot], node: Node<'d>) -> Result<()> {
        if atom.arguments.len() != slots.len() {
            return Err(node
                .error(ErrorCode::E302, "Rule atom has wrong number of arguments")
                .with_help(format!(
                    "`{}` takes {} argument(s), found {}",
                    atom.predicate,
                    slots.len(),
                    atom.arguments.len()
                )));
        }
        for (position, (argument, slot)) in atom.arguments.iter().zip(slots).enumerate() {
            if !slot.accepts(argument) {
                return Err(node.error(
                    ErrorCode::E302,
                    format!(
                        "Argument {} of `{}` must be {}",
                        position + 1,
                        atom.predicate,
                        slot.describe()
                    ),
                ));
            }
        }
        Ok(())
    }

    fn rule_argument(&self, argument: &RawArgument<'_>, node: Node<'d>) -> Result<RuleArgument> {
        Ok(match argument {
            RawArgument::Variable(name) => RuleArgument::Variable(Iri::new(format!(
                "{}#swrlVar_{name}",
                self.namespaces.default_namespace()
            ))),
            RawArgument::Name(name) => RuleArgument::Individual(self.resolve(name, node)?),
            RawArgument::Integer(value) => RuleArgument::Literal(Literal::integer(*value)),
            RawArgument::Text { value, datatype } => RuleArgument::Literal(match datatype {
                Some(datatype) => Literal::typed(*value, self.resolve(datatype, node)?),
                None => Literal::plain(*value),
            }),
        })
    }
}

fn entity_atom(kind: EntityKind, iri: &Iri, arguments: &[RuleArgument]) -> Option<Atom> {
    let atom = match (kind, arguments) {
        (EntityKind::Class, [argument]) => Atom::Class {
            class: iri.clone(),
            argument: argument.clone(),
        },
        (EntityKind::DataProperty, [subject, value]) => Atom::DataProperty {
            property: iri.clone(),
            subject: subject.clone(),
            value: value.clone(),
        },
        (EntityKind::Datatype, [argument]) => Atom::DataRange {
            datatype: iri.clone(),
            argument: argument.clone(),
        },
        (EntityKind::ObjectProperty, [subject, object]) => Atom::ObjectProperty {
            property: iri.clone(),
            subject: subject.clone(),
            object: object.clone(),
        },
        _ => return None,
    };
    Some(atom)
}
