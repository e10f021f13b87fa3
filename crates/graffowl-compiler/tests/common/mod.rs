//! Builders for small JSON diagrams.

#![allow(dead_code)]

use std::path::Path;

use graffowl_compiler::{
    CompileError, DEFAULT_BASE, Diagnostic, ImportError, ImportLoader, Imported, NamespaceResolver,
    compile,
};
use graffowl_core::{
    container::{DiagramDocument, decode},
    model::Diagram,
    ontology::{Entity, EntityKind, Iri, Ontology},
};

pub const ZOO: &str = "http://zoo.example.org/animals";

/// A shape placed by id: `{{id*200, 0}, {100, 50}}`, centred on
/// `(id*200+50, 25)`.
pub fn shape(id: i64, note: &str, text: &str) -> String {
    format!(
        r#"{{"Class": "ShapedGraphic", "ID": {id}, "Bounds": "{{{{{x}, 0}}, {{100, 50}}}}",
            "Notes": "{note}", "Text": {{"Text": "{text}"}}}}"#,
        x = id * 200,
    )
}

/// A line from `tail` to `head`. An id of `0` leaves that end dangling.
pub fn line(id: i64, note: &str, tail: i64, head: i64) -> String {
    format!(
        r#"{{"Class": "LineGraphic", "ID": {id}, "Notes": "{note}",
            "Tail": {{"ID": {tail}}}, "Head": {{"ID": {head}}},
            "Points": ["{{0, 0}}", "{{10, 10}}"]}}"#
    )
}

/// A label shape on `line`.
pub fn label(id: i64, note: &str, text: &str, line: i64) -> String {
    format!(
        r#"{{"Class": "ShapedGraphic", "ID": {id}, "Bounds": "{{{{0, 0}}, {{10, 10}}}}",
            "Notes": "{note}", "Text": {{"Text": "{text}"}},
            "Line": {{"ID": {line}, "Position": 0.5}}}}"#
    )
}

/// A table whose cells are given row by row.
pub fn table(id: i64, note: &str, rows: &[&[&str]]) -> String {
    let mut cells = Vec::new();
    for (r, row) in rows.iter().enumerate() {
        for (c, text) in row.iter().enumerate() {
            let cell_id = id * 100 + (r * 10 + c) as i64;
            cells.push(format!(
                r#"{{"Class": "ShapedGraphic", "ID": {cell_id},
                    "Bounds": "{{{{{x}, {y}}}, {{50, 20}}}}", "Text": {{"Text": "{text}"}}}}"#,
                x = c * 50,
                y = 1000 + r * 20,
            ));
        }
    }
    format!(
        r#"{{"Class": "TableGroup", "ID": {id}, "Notes": "{note}", "Graphics": [{}]}}"#,
        cells.join(",")
    )
}

pub fn page(title: &str, graphics: &[String]) -> String {
    format!(
        r#"{{"SheetTitle": "{title}", "GraphicsList": [{}]}}"#,
        graphics.join(",")
    )
}

pub fn diagram_from_pages(name: &str, pages: &[String]) -> Diagram {
    let json = format!(r#"{{"Sheets": [{}]}}"#, pages.join(","));
    let root = decode(json.as_bytes()).expect("valid test diagram");
    Diagram::build(&DiagramDocument::from_value(name, root)).expect("buildable test diagram")
}

pub fn diagram(graphics: &[String]) -> Diagram {
    diagram_from_pages("zoo.graffle", &[page("Main", graphics)])
}

/// Hands out IRIs without reading anything. `self.graffle` is reported as
/// a cycle, and `animals.graffle` declares the class `zoo:Animal`.
pub struct FakeImports;

impl ImportLoader for FakeImports {
    fn load(&self, path: &Path) -> Result<Imported, ImportError> {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        if name == "self.graffle" {
            return Err(ImportError::Cycle(path.to_path_buf()));
        }
        let imported = Imported::new(Iri::new(format!("{DEFAULT_BASE}{name}")));
        Ok(match name {
            "animals.graffle" => {
                imported.with_signature([Entity::new(EntityKind::Class, zoo("Animal"))].into())
            }
            _ => imported,
        })
    }
}

pub fn try_compile(graphics: &[String]) -> Result<(Ontology, Vec<Diagnostic>), CompileError> {
    let diagram = diagram(graphics);
    let namespaces = NamespaceResolver::scan(&diagram, DEFAULT_BASE)?;
    compile(&diagram, &namespaces, &FakeImports)
}

pub fn compile_ok(graphics: &[String]) -> Ontology {
    try_compile(graphics).expect("Failed to compile").0
}

pub fn compile_err(graphics: &[String]) -> CompileError {
    try_compile(graphics).expect_err("Expected a compile error")
}

/// An IRI in the default namespace of `zoo.graffle`.
pub fn local(name: &str) -> Iri {
    Iri::new(format!("{DEFAULT_BASE}zoo.graffle#{name}"))
}

pub fn zoo(name: &str) -> Iri {
    Iri::new(format!("{ZOO}#{name}"))
}
