mod common;

use std::collections::BTreeSet;

use common::*;
use graffowl_compiler::{Compiler, DEFAULT_BASE, ErrorCode, NamespaceResolver, Severity};
use graffowl_core::ontology::{
    Atom, Axiom, CardinalityKind, ClassExpression, DataRange, Entity, EntityKind, Facet,
    FacetRestriction, Iri, Literal, ObjectPropertyExpression, Rule, RuleArgument, vocab,
};

fn class(name: &str) -> ClassExpression {
    ClassExpression::Class(local(name))
}

fn xsd(name: &str) -> Iri {
    Iri::new(format!("{}{name}", vocab::XSD))
}

fn declaration(kind: EntityKind, name: &str) -> Axiom {
    Axiom::Declaration(Entity::new(kind, local(name)))
}

#[test]
fn test_subclass_of() {
    let ontology = compile_ok(&[
        shape(1, "owl-class", "Dog"),
        shape(2, "owl-class", "Animal"),
        line(3, "subclass-of", 1, 2),
    ]);

    assert_eq!(ontology.iri().as_str(), "http://epistem.org/og-owl/zoo.graffle");
    let expected: BTreeSet<_> = [Axiom::SubClassOf {
        sub: class("Dog"),
        sup: class("Animal"),
    }]
    .into();
    assert_eq!(ontology.axioms(), &expected);
}

#[test]
fn test_class_names_are_normalized() {
    let ontology = compile_ok(&[
        shape(1, "owl-class", "Big Cat"),
        shape(2, "owl-class", "Animal"),
        line(3, "subclass-of", 1, 2),
    ]);

    assert!(ontology.contains(&Axiom::SubClassOf {
        sub: class("BigCat"),
        sup: class("Animal"),
    }));
}

#[test]
fn test_namespace_shapes() {
    let ontology = compile_ok(&[
        shape(1, "namespace", ZOO),
        shape(2, "namespace", "ex = http://example.org/ex#"),
        shape(3, "owl-class", "Dog"),
        shape(4, "owl-class", "ex:Pet"),
        line(5, "subclass-of", 3, 4),
    ]);

    assert_eq!(ontology.iri().as_str(), ZOO);
    assert!(ontology.contains(&Axiom::SubClassOf {
        sub: ClassExpression::Class(zoo("Dog")),
        sup: ClassExpression::Class(Iri::new("http://example.org/ex#Pet")),
    }));
    assert_eq!(
        ontology.prefixes().get("ex").map(String::as_str),
        Some("http://example.org/ex#")
    );
    assert_eq!(
        ontology.prefixes().get("").map(String::as_str),
        Some(format!("{ZOO}#").as_str())
    );
    assert_eq!(
        ontology.prefixes().get("xsd").map(String::as_str),
        Some(vocab::XSD)
    );
}

#[test]
fn test_union_of_classes() {
    let ontology = compile_ok(&[
        shape(1, "owl-class", "Pet"),
        shape(2, "obj-union", ""),
        line(3, "equivalent-classes", 1, 2),
        shape(4, "owl-class", "Cat"),
        shape(5, "owl-class", "Dog"),
        line(6, "", 2, 4),
        line(7, "", 2, 5),
    ]);

    let union = ClassExpression::ObjectUnionOf([class("Cat"), class("Dog")].into());
    assert!(ontology.contains(&Axiom::EquivalentClasses([class("Pet"), union].into())));
}

#[test]
fn test_some_values_restriction() {
    let ontology = compile_ok(&[
        shape(1, "owl-class", "Lion"),
        shape(2, "some-values", ""),
        shape(3, "owl-class", "Meat"),
        line(4, "subclass-of", 1, 2),
        line(5, "", 2, 3),
        label(6, "object-property", "eats", 5),
    ]);

    let eats = ObjectPropertyExpression::Property(local("eats"));
    assert!(ontology.contains(&Axiom::SubClassOf {
        sub: class("Lion"),
        sup: ClassExpression::ObjectSomeValuesFrom(eats, Box::new(class("Meat"))),
    }));
    assert!(ontology.contains(&declaration(EntityKind::ObjectProperty, "eats")));
}

#[test]
fn test_cardinality_without_filler() {
    let ontology = compile_ok(&[
        shape(1, "owl-class", "Lion"),
        shape(2, "cardinality", ""),
        line(3, "subclass-of", 1, 2),
        line(4, "", 2, 0),
        label(5, "object-property", "leg", 4),
        label(6, "", "[4]", 4),
    ]);

    assert!(ontology.contains(&Axiom::SubClassOf {
        sub: class("Lion"),
        sup: ClassExpression::ObjectCardinality {
            kind: CardinalityKind::Exact,
            count: 4,
            property: ObjectPropertyExpression::Property(local("leg")),
            filler: None,
        },
    }));
}

#[test]
fn test_data_cardinality_with_filler() {
    let ontology = compile_ok(&[
        shape(1, "owl-class", "Person"),
        shape(2, "cardinality", ""),
        line(3, "subclass-of", 1, 2),
        shape(4, "datatype", "xsd:string"),
        line(5, "", 2, 4),
        label(6, "data-property", "nickname", 5),
        label(7, "", "[2..]", 5),
    ]);

    assert!(ontology.contains(&Axiom::SubClassOf {
        sub: class("Person"),
        sup: ClassExpression::DataCardinality {
            kind: CardinalityKind::Min,
            count: 2,
            property: local("nickname"),
            filler: Some(Box::new(DataRange::Datatype(xsd("string")))),
        },
    }));
}

#[test]
fn test_invalid_cardinality_label() {
    let err = compile_err(&[
        shape(1, "owl-class", "Lion"),
        shape(2, "cardinality", ""),
        line(3, "subclass-of", 1, 2),
        line(4, "", 2, 0),
        label(5, "object-property", "leg", 4),
        label(6, "", "[four]", 4),
    ]);

    assert_eq!(err.code(), ErrorCode::E300);
    assert_eq!(err.message(), "Invalid cardinality label `[four]`");
}

#[test]
fn test_disjoint_union() {
    let ontology = compile_ok(&[
        shape(1, "disjoint-union", ""),
        shape(2, "owl-class", "Animal"),
        line(3, "", 2, 1),
        shape(4, "owl-class", "Cat"),
        shape(5, "owl-class", "Dog"),
        line(6, "", 1, 4),
        line(7, "", 1, 5),
    ]);

    assert!(ontology.contains(&Axiom::DisjointUnion {
        class: local("Animal"),
        members: [class("Cat"), class("Dog")].into(),
    }));
}

#[test]
fn test_has_key() {
    let ontology = compile_ok(&[
        shape(1, "has-key", ""),
        shape(2, "owl-class", "Person"),
        line(3, "", 2, 1),
        shape(4, "data-property", "ssn"),
        line(5, "", 1, 4),
    ]);

    assert!(ontology.contains(&Axiom::HasKey {
        class: class("Person"),
        object_properties: BTreeSet::new(),
        data_properties: [local("ssn")].into(),
    }));
    assert!(ontology.contains(&declaration(EntityKind::DataProperty, "ssn")));
}

#[test]
fn test_has_key_object_properties() {
    let ontology = compile_ok(&[
        shape(1, "has-key", ""),
        shape(2, "owl-class", "Person"),
        line(3, "", 2, 1),
        shape(4, "object-property", "hasMother"),
        line(5, "", 1, 4),
        shape(6, "object-property", "hasFather"),
        line(7, "", 1, 6),
    ]);

    assert!(ontology.contains(&Axiom::HasKey {
        class: class("Person"),
        object_properties: [
            ObjectPropertyExpression::Property(local("hasFather")),
            ObjectPropertyExpression::Property(local("hasMother")),
        ]
        .into(),
        data_properties: BTreeSet::new(),
    }));
    assert!(ontology.contains(&declaration(EntityKind::ObjectProperty, "hasMother")));
    assert!(ontology.contains(&declaration(EntityKind::ObjectProperty, "hasFather")));
}

#[test]
fn test_has_key_needs_properties() {
    let err = compile_err(&[
        shape(1, "has-key", ""),
        shape(2, "owl-class", "Person"),
        line(3, "", 2, 1),
    ]);

    assert_eq!(err.code(), ErrorCode::E101);
    assert_eq!(
        err.to_string(),
        "HasKey must have one or more target props: 'Main'(250,25)"
    );
}

#[test]
fn test_pairwise_disjoint_needs_two_classes() {
    let err = compile_err(&[
        shape(1, "pairwise-disjoint", ""),
        shape(2, "owl-class", "Cat"),
        line(3, "", 1, 2),
    ]);

    assert_eq!(err.code(), ErrorCode::E101);
    assert_eq!(
        err.to_string(),
        "Must have 2 or more outgoing connections to classes: 'Main'(250,25)"
    );
}

#[test]
fn test_property_characteristics() {
    let ontology = compile_ok(&[
        shape(1, "object-property", "owns"),
        shape(2, "transitive", ""),
        line(3, "", 2, 1),
        shape(4, "functional", ""),
        line(5, "", 4, 1),
    ]);

    let owns = ObjectPropertyExpression::Property(local("owns"));
    assert!(ontology.contains(&declaration(EntityKind::ObjectProperty, "owns")));
    assert!(ontology.contains(&Axiom::TransitiveObjectProperty(owns.clone())));
    assert!(ontology.contains(&Axiom::FunctionalObjectProperty(owns)));
    assert_eq!(ontology.axiom_count(), 3);
}

#[test]
fn test_characteristic_needs_one_connector() {
    let err = compile_err(&[
        shape(1, "object-property", "owns"),
        shape(2, "object-property", "holds"),
        shape(3, "symmetric", ""),
        line(4, "", 3, 1),
        line(5, "", 3, 2),
    ]);

    assert_eq!(err.code(), ErrorCode::E101);
    assert_eq!(err.to_string(), "Must have one outgoing connector: 'Main'(650,25)");
}

#[test]
fn test_imported_property_is_not_declared() {
    let ontology = compile_ok(&[
        shape(1, "namespace", "ex = http://example.org/ex#"),
        shape(2, "object-property", "ex:owns"),
        shape(3, "inverse-object-property", "owns"),
        line(4, "inverse-properties", 2, 3),
    ]);

    assert!(ontology.contains(&Axiom::InverseObjectProperties(
        ObjectPropertyExpression::Property(Iri::new("http://example.org/ex#owns")),
        ObjectPropertyExpression::InverseOf(local("owns")),
    )));
    assert!(!ontology.axioms().iter().any(|axiom| matches!(
        axiom,
        Axiom::Declaration(entity) if entity.iri().as_str() == "http://example.org/ex#owns"
    )));
}

#[test]
fn test_property_assertions() {
    let ontology = compile_ok(&[
        shape(1, "individual", "Rex"),
        shape(2, "individual", "Bob"),
        line(3, "prop-assertion", 2, 1),
        label(4, "object-property", "owns", 3),
        shape(5, "", "7"),
        line(6, "neg-prop-assertion", 1, 5),
        label(7, "data-property", "age", 6),
    ]);

    assert!(ontology.contains(&declaration(EntityKind::NamedIndividual, "Rex")));
    assert!(ontology.contains(&declaration(EntityKind::NamedIndividual, "Bob")));
    assert!(ontology.contains(&Axiom::ObjectPropertyAssertion {
        property: ObjectPropertyExpression::Property(local("owns")),
        subject: local("Bob"),
        object: local("Rex"),
    }));
    assert!(ontology.contains(&Axiom::NegativeDataPropertyAssertion {
        property: local("age"),
        subject: local("Rex"),
        value: Literal::plain("7"),
    }));
}

#[test]
fn test_typed_literal_table() {
    let ontology = compile_ok(&[
        shape(1, "individual", "Rex"),
        table(2, "", &[&["xsd:integer"], &["7"]]),
        line(3, "prop-assertion", 1, 2),
        label(4, "data-property", "age", 3),
    ]);

    assert!(ontology.contains(&Axiom::DataPropertyAssertion {
        property: local("age"),
        subject: local("Rex"),
        value: Literal::typed("7", xsd("integer")),
    }));
}

#[test]
fn test_literal_table_shape() {
    let err = compile_err(&[
        shape(1, "individual", "Rex"),
        table(2, "", &[&["xsd:integer", "7"]]),
        line(3, "prop-assertion", 1, 2),
        label(4, "data-property", "age", 3),
    ]);

    assert_eq!(err.code(), ErrorCode::E103);
    assert_eq!(err.message(), "Literal table must have 2 rows");
}

#[test]
fn test_prop_assertion_requires_label() {
    let err = compile_err(&[
        shape(1, "individual", "Rex"),
        shape(2, "individual", "Bob"),
        line(3, "prop-assertion", 2, 1),
    ]);

    assert_eq!(err.code(), ErrorCode::E104);
    assert_eq!(err.message(), "Prop-assertion line must have a prop label");
    assert!(err.help().is_some());
}

#[test]
fn test_class_assertion_requires_individual() {
    let err = compile_err(&[
        shape(1, "owl-class", "Dog"),
        shape(2, "owl-class", "Rex"),
        line(3, "class-assertion", 2, 1),
    ]);

    assert_eq!(err.code(), ErrorCode::E203);
    assert_eq!(
        err.to_string(),
        "Could not create Individual from graphic: 'Main'(450,25)"
    );
}

#[test]
fn test_datatype_definition_with_restriction() {
    let ontology = compile_ok(&[
        shape(1, "datatype", "adultAge"),
        shape(2, "datatype-restriction", "xsd:integer"),
        line(3, "datatype-definition", 1, 2),
        shape(4, "", "18"),
        line(5, "", 2, 4),
        label(6, "", "xsd:minInclusive", 5),
    ]);

    assert!(ontology.contains(&declaration(EntityKind::Datatype, "adultAge")));
    assert!(ontology.contains(&Axiom::DatatypeDefinition {
        datatype: local("adultAge"),
        range: DataRange::Restriction {
            datatype: xsd("integer"),
            facets: [FacetRestriction {
                facet: Facet::MinInclusive,
                value: Literal::plain("18"),
            }]
            .into(),
        },
    }));
}

#[test]
fn test_unknown_facet() {
    let err = compile_err(&[
        shape(1, "datatype", "adultAge"),
        shape(2, "datatype-restriction", "xsd:integer"),
        line(3, "datatype-definition", 1, 2),
        shape(4, "", "18"),
        line(5, "", 2, 4),
        label(6, "", "xsd:colour", 5),
    ]);

    assert_eq!(err.code(), ErrorCode::E204);
    assert_eq!(
        err.message(),
        "Unknown facet `http://www.w3.org/2001/XMLSchema#colour`"
    );
}

#[test]
fn test_data_one_of_needs_two_literals() {
    let err = compile_err(&[
        shape(1, "datatype", "Size"),
        shape(2, "data-one-of", ""),
        line(3, "datatype-definition", 1, 2),
        shape(4, "", "small"),
        line(5, "", 2, 4),
    ]);

    assert_eq!(err.message(), "Must target 2 or more literals");
}

#[test]
fn test_rule() {
    let ontology = compile_ok(&[
        shape(1, "owl-class", "Dog"),
        shape(2, "owl-class", "Animal"),
        line(3, "subclass-of", 1, 2),
        shape(4, "", "Dog(?x)"),
        shape(5, "", "Animal(?x)"),
        line(6, "rule", 4, 5),
    ]);

    let x = RuleArgument::Variable(local("swrlVar_x"));
    let body = [Atom::Class {
        class: local("Dog"),
        argument: x.clone(),
    }];
    let head = [Atom::Class {
        class: local("Animal"),
        argument: x,
    }];
    assert!(ontology.contains(&Axiom::Rule(Rule::new(body.into(), head.into()))));
}

#[test]
fn test_rule_builtin_with_literal() {
    let ontology = compile_ok(&[
        shape(1, "data-property", "age"),
        shape(2, "owl-class", "Adult"),
        shape(3, "owl-class", "Person"),
        line(4, "subclass-of", 2, 3),
        shape(5, "", "age(?p, ?a)\\nswrlb:greaterThan(?a, 17)"),
        shape(6, "", "Adult(?p)"),
        line(7, "rule", 5, 6),
    ]);

    let p = RuleArgument::Variable(local("swrlVar_p"));
    let a = RuleArgument::Variable(local("swrlVar_a"));
    let body = [
        Atom::DataProperty {
            property: local("age"),
            subject: p.clone(),
            value: a.clone(),
        },
        Atom::BuiltIn {
            predicate: Iri::new(format!("{}greaterThan", vocab::SWRLB)),
            arguments: vec![a, RuleArgument::Literal(Literal::integer(17))],
        },
    ];
    let head = [Atom::Class {
        class: local("Adult"),
        argument: p,
    }];
    assert!(ontology.contains(&Axiom::Rule(Rule::new(body.into(), head.into()))));
}

#[test]
fn test_rule_wrong_arity() {
    let err = compile_err(&[
        shape(1, "owl-class", "Dog"),
        shape(2, "owl-class", "Animal"),
        line(3, "subclass-of", 1, 2),
        shape(4, "", "Dog(?x, ?y)"),
        shape(5, "", "Animal(?x)"),
        line(6, "rule", 4, 5),
    ]);

    assert_eq!(err.code(), ErrorCode::E302);
    assert_eq!(err.message(), "Rule atom has wrong number of arguments");
}

#[test]
fn test_rule_syntax_error() {
    let err = compile_err(&[
        shape(1, "", "Dog ?x"),
        shape(2, "", "Animal(?x)"),
        line(3, "rule", 1, 2),
    ]);

    assert_eq!(err.code(), ErrorCode::E301);
    assert_eq!(
        err.to_string(),
        "Rule atom must include an open paren: Dog ?x: 'Main'(250,25)"
    );
}

#[test]
fn test_ontology_annotation_table() {
    let ontology = compile_ok(&[table(
        1,
        "annotation",
        &[&["rdfs:label", "Zoo"], &["dc:creator", "Keeper"]],
    )]);

    assert!(ontology.contains(&Axiom::AnnotationAssertion {
        property: Iri::new(format!("{}label", vocab::RDFS)),
        subject: ontology.iri().clone(),
        value: Literal::plain("Zoo"),
    }));
    assert!(ontology.contains(&Axiom::AnnotationAssertion {
        property: Iri::new(format!("{}creator", vocab::DC)),
        subject: ontology.iri().clone(),
        value: Literal::plain("Keeper"),
    }));
}

#[test]
fn test_annotation_table_on_class() {
    let ontology = compile_ok(&[
        table(1, "annotation", &[&["rdfs:label", "Hound"]]),
        shape(5, "owl-class", "Dog"),
        line(6, "", 1, 5),
    ]);

    let label = Axiom::AnnotationAssertion {
        property: Iri::new(format!("{}label", vocab::RDFS)),
        subject: local("Dog"),
        value: Literal::plain("Hound"),
    };
    assert!(ontology.contains(&label));
    assert!(!ontology.axioms().iter().any(|axiom| matches!(
        axiom,
        Axiom::AnnotationAssertion { subject, .. } if subject == ontology.iri()
    )));
}

#[test]
fn test_comment_annotation() {
    let ontology = compile_ok(&[
        shape(1, "owl-class", "Dog"),
        shape(2, "annotation", "Good boy"),
        line(3, "", 2, 1),
    ]);

    assert!(ontology.contains(&Axiom::AnnotationAssertion {
        property: Iri::new(vocab::RDFS_COMMENT),
        subject: local("Dog"),
        value: Literal::plain("Good boy"),
    }));
}

#[test]
fn test_annotation_table_needs_two_columns() {
    let err = compile_err(&[table(1, "annotation", &[&["rdfs:label"]])]);

    assert_eq!(err.code(), ErrorCode::E103);
    assert_eq!(err.message(), "Annotation table must have 2 columns");
}

#[test]
fn test_imports() {
    let ontology = compile_ok(&[
        shape(1, "", "Zoo"),
        shape(2, "", "mammals.graffle"),
        line(3, "ontology-import", 1, 2),
    ]);

    let expected: BTreeSet<_> = [Iri::new(format!("{DEFAULT_BASE}mammals.graffle"))].into();
    assert_eq!(ontology.imports(), &expected);
}

#[test]
fn test_rule_predicate_from_import() {
    let ontology = compile_ok(&[
        shape(1, "namespace", &format!("zoo = {ZOO}#")),
        shape(2, "", "Zoo"),
        shape(3, "", "animals.graffle"),
        line(4, "ontology-import", 2, 3),
        shape(5, "owl-class", "Dog"),
        shape(6, "owl-class", "Pet"),
        line(7, "subclass-of", 5, 6),
        shape(8, "", "Dog(?x)"),
        shape(9, "", "zoo:Animal(?x)"),
        line(10, "rule", 8, 9),
    ]);

    let x = RuleArgument::Variable(local("swrlVar_x"));
    let body = [Atom::Class {
        class: local("Dog"),
        argument: x.clone(),
    }];
    let head = [Atom::Class {
        class: zoo("Animal"),
        argument: x,
    }];
    assert!(ontology.contains(&Axiom::Rule(Rule::new(body.into(), head.into()))));
}

#[test]
fn test_rule_predicate_unknown_to_imports() {
    let ontology = compile_ok(&[
        shape(1, "namespace", &format!("zoo = {ZOO}#")),
        shape(2, "", "Zoo"),
        shape(3, "", "mammals.graffle"),
        line(4, "ontology-import", 2, 3),
        shape(5, "owl-class", "Dog"),
        shape(6, "owl-class", "Pet"),
        line(7, "subclass-of", 5, 6),
        shape(8, "", "Dog(?x)"),
        shape(9, "", "zoo:Animal(?x)"),
        line(10, "rule", 8, 9),
    ]);

    let body = [Atom::Class {
        class: local("Dog"),
        argument: RuleArgument::Variable(local("swrlVar_x")),
    }];
    assert!(ontology.contains(&Axiom::Rule(Rule::new(body.into(), BTreeSet::new()))));
}

#[test]
fn test_import_cycle() {
    let err = compile_err(&[
        shape(1, "", "Zoo"),
        shape(2, "", "self.graffle"),
        line(3, "ontology-import", 1, 2),
    ]);

    assert_eq!(err.code(), ErrorCode::E401);
    assert_eq!(err.to_string(), "Import cycle: 'Main'(450,25)");
}

#[test]
fn test_only_diagram_imports() {
    let err = compile_err(&[
        shape(1, "", "Zoo"),
        shape(2, "", "mammals.owl"),
        line(3, "ontology-import", 1, 2),
    ]);

    assert_eq!(err.code(), ErrorCode::E400);
    assert!(err.help().is_some_and(|help| help.contains("mammals.owl")));
}

#[test]
fn test_unrecognized_note_is_a_warning() {
    let (ontology, warnings) = try_compile(&[
        shape(1, "owl-clas", "Dog"),
        shape(2, "owl-class", "Animal"),
    ])
    .expect("Failed to compile");

    assert_eq!(ontology.axiom_count(), 0);
    let [warning] = warnings.as_slice() else {
        panic!("Expected one warning, got {warnings:?}");
    };
    assert_eq!(warning.severity(), Severity::Warning);
    assert_eq!(warning.code(), ErrorCode::E201);
    assert_eq!(warning.message(), "Unrecognized graphic note `owl-clas`");
    assert_eq!(
        warning.location().map(ToString::to_string).as_deref(),
        Some("'Main'(250,25)")
    );
}

#[test]
fn test_axiom_tag_on_a_shape() {
    let err = compile_err(&[shape(1, "subclass-of", "Dog")]);

    assert_eq!(err.code(), ErrorCode::E100);
    assert_eq!(err.to_string(), "Must be a connector: 'Main'(250,25)");
}

#[test]
fn test_connector_needs_both_ends() {
    let err = compile_err(&[shape(1, "owl-class", "Dog"), line(2, "subclass-of", 1, 0)]);

    assert_eq!(err.code(), ErrorCode::E102);
    assert_eq!(err.message(), "Must have a head target");
}

#[test]
fn test_missing_note_on_target() {
    let err = compile_err(&[
        shape(1, "owl-class", "Dog"),
        shape(2, "", "Animal"),
        line(3, "subclass-of", 1, 2),
    ]);

    assert_eq!(err.code(), ErrorCode::E200);
    assert_eq!(err.to_string(), "Missing graphic note: 'Main'(450,25)");
}

#[test]
fn test_unknown_prefix() {
    let err = compile_err(&[
        shape(1, "owl-class", "nope:Dog"),
        shape(2, "owl-class", "Animal"),
        line(3, "subclass-of", 1, 2),
    ]);

    assert_eq!(err.code(), ErrorCode::E202);
    assert_eq!(err.message(), "Unknown namespace prefix in `nope:Dog`");
}

#[test]
fn test_blank_namespace() {
    let err = compile_err(&[shape(1, "namespace", "  "), shape(2, "owl-class", "Dog")]);

    assert_eq!(err.code(), ErrorCode::E205);
    assert_eq!(err.to_string(), "Blank namespace: 'Main'(250,25)");
}

#[test]
fn test_compile_single_page() {
    let diagram = diagram_from_pages(
        "zoo.graffle",
        &[
            page(
                "Classes",
                &[
                    shape(1, "owl-class", "Dog"),
                    shape(2, "owl-class", "Animal"),
                    line(3, "subclass-of", 1, 2),
                ],
            ),
            page(
                "Individuals",
                &[
                    shape(1, "individual", "Rex"),
                    shape(2, "owl-class", "Dog"),
                    line(3, "class-assertion", 1, 2),
                ],
            ),
        ],
    );
    let namespaces = NamespaceResolver::scan(&diagram, DEFAULT_BASE).expect("Failed to scan");
    let page = diagram.page_by_title("Individuals").expect("Missing page");

    let mut compiler = Compiler::new(&diagram, &namespaces, &FakeImports);
    let mut ontology = compiler.create_ontology();
    compiler
        .compile_page(page, &mut ontology)
        .expect("Failed to compile");

    assert!(ontology.contains(&Axiom::ClassAssertion {
        class: class("Dog"),
        individual: local("Rex"),
    }));
    assert!(!ontology.axioms().iter().any(Axiom::is_class_axiom));
}

#[test]
fn test_pages_share_one_ontology() {
    let diagram = diagram_from_pages(
        "zoo.graffle",
        &[
            page(
                "Classes",
                &[
                    shape(1, "owl-class", "Dog"),
                    shape(2, "owl-class", "Animal"),
                    line(3, "subclass-of", 1, 2),
                ],
            ),
            page(
                "Individuals",
                &[
                    shape(1, "individual", "Rex"),
                    shape(2, "owl-class", "Dog"),
                    line(3, "class-assertion", 1, 2),
                ],
            ),
        ],
    );
    let namespaces = NamespaceResolver::scan(&diagram, DEFAULT_BASE).expect("Failed to scan");
    let (ontology, warnings) =
        graffowl_compiler::compile(&diagram, &namespaces, &FakeImports).expect("Failed to compile");

    assert!(warnings.is_empty());
    assert!(ontology.contains(&Axiom::SubClassOf {
        sub: class("Dog"),
        sup: class("Animal"),
    }));
    assert!(ontology.contains(&Axiom::ClassAssertion {
        class: class("Dog"),
        individual: local("Rex"),
    }));
}
