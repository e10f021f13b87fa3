//! Graphviz dump of the graphic model, for debugging diagrams.
//!
//! Every page and graphic becomes a node. Edges show how the model relates
//! them: `page` from a page to its root graphics, `child` into groups,
//! `label` from a line to its labels, `cell` from a table to its cells, and
//! `head` / `tail` from a connector to its ends.

use dot_structures::{Attribute, Edge, EdgeTy, Graph, Id, Node, NodeId, Stmt, Vertex};
use graphviz_rust::printer::{DotPrinter, PrinterContext};
use log::debug;

use graffowl_core::{
    model::{Diagram, Ends, Graphic, GraphicId, GroupData, LineData, Page, ShapeData, TableData},
    visitor::{Visit, Visitor},
};

/// Renders a diagram's model as a DOT digraph.
pub fn render(diagram: &Diagram) -> String {
    let mut dumper = GraphDumper::default();
    diagram.accept(&mut dumper);
    debug!(statements = dumper.stmts.len(); "Diagram graph built");
    dumper.into_graph().print(&mut PrinterContext::default())
}

#[derive(Debug, Default)]
struct GraphDumper {
    stmts: Vec<Stmt>,
}

fn quoted(text: &str) -> Id {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    Id::Escaped(format!("\"{escaped}\""))
}

fn node_id(name: String) -> NodeId {
    NodeId(Id::Plain(name), None)
}

fn page_node(page: &Page) -> String {
    format!("page_{}", page.index())
}

fn graphic_node(page: &Page, id: GraphicId) -> String {
    format!("g_{}_{}", page.index(), id.index())
}

impl GraphDumper {
    fn into_graph(self) -> Graph {
        Graph::DiGraph {
            id: Id::Plain("diagram".to_string()),
            strict: false,
            stmts: self.stmts,
        }
    }

    fn node(&mut self, name: String, label: &str, shape: &str) {
        self.stmts.push(Stmt::Node(Node {
            id: node_id(name),
            attributes: vec![
                Attribute(Id::Plain("label".to_string()), quoted(label)),
                Attribute(Id::Plain("shape".to_string()), Id::Plain(shape.to_string())),
            ],
        }));
    }

    fn edge(&mut self, from: String, to: String, label: &str) {
        self.stmts.push(Stmt::Edge(Edge {
            ty: EdgeTy::Pair(Vertex::N(node_id(from)), Vertex::N(node_id(to))),
            attributes: vec![Attribute(Id::Plain("label".to_string()), quoted(label))],
        }));
    }

    fn edges(&mut self, page: &Page, from: GraphicId, to: &[GraphicId], label: &str) {
        for id in to {
            self.edge(graphic_node(page, from), graphic_node(page, *id), label);
        }
    }

    /// Adds the node for a graphic, labelled with its kind, record id and
    /// note or text.
    fn graphic(&mut self, page: &Page, graphic: &Graphic, detail: &str) {
        let mut label = format!("{} {}", graphic.kind_name(), graphic.record_id());
        if let Some(tag) = graphic.metadata().tag() {
            label.push_str(&format!("\n[{tag}]"));
        }
        let detail = detail.trim();
        if !detail.is_empty() {
            label.push('\n');
            label.push_str(detail);
        }
        let shape = if graphic.is_connector() { "ellipse" } else { "box" };
        self.node(graphic_node(page, graphic.id()), &label, shape);

        if let Some(ends) = graphic.connector_ends() {
            self.ends(page, graphic.id(), ends);
        }
    }

    fn ends(&mut self, page: &Page, id: GraphicId, ends: Ends) {
        if let Some(head) = ends.head() {
            self.edge(graphic_node(page, id), graphic_node(page, head), "head");
        }
        if let Some(tail) = ends.tail() {
            self.edge(graphic_node(page, id), graphic_node(page, tail), "tail");
        }
    }
}

impl Visitor for GraphDumper {
    fn diagram_start(&mut self, diagram: &Diagram) -> Visit {
        self.node("diagram_root".to_string(), diagram.file_name(), "folder");
        Visit::Continue
    }

    fn page_start(&mut self, page: &Page) -> Visit {
        self.node(page_node(page), page.title(), "tab");
        self.edge("diagram_root".to_string(), page_node(page), "page");
        for id in page.roots() {
            self.edge(page_node(page), graphic_node(page, *id), "page");
        }
        Visit::Continue
    }

    fn group_start(&mut self, page: &Page, graphic: &Graphic, group: &GroupData) -> Visit {
        self.graphic(page, graphic, "");
        self.edges(page, graphic.id(), group.children(), "child");
        Visit::Continue
    }

    fn line_start(&mut self, page: &Page, graphic: &Graphic, line: &LineData) -> Visit {
        self.graphic(page, graphic, "");
        let labels: Vec<GraphicId> = line.labels().collect();
        self.edges(page, graphic.id(), &labels, "label");
        Visit::Continue
    }

    fn table_start(&mut self, page: &Page, graphic: &Graphic, table: &TableData) -> Visit {
        self.graphic(page, graphic, "");
        self.edges(page, graphic.id(), table.cells(), "cell");
        Visit::Continue
    }

    fn shape(&mut self, page: &Page, graphic: &Graphic, shape: &ShapeData) -> Visit {
        self.graphic(page, graphic, shape.text());
        Visit::Continue
    }

    fn connector_shape(
        &mut self,
        page: &Page,
        graphic: &Graphic,
        shape: &ShapeData,
        _ends: Ends,
    ) -> Visit {
        self.graphic(page, graphic, shape.text());
        Visit::Continue
    }
}

#[cfg(test)]
mod tests {
    use graffowl_core::container::{DiagramDocument, decode};

    use super::*;

    #[test]
    fn test_render_relations() {
        let json = r#"{"SheetTitle": "Main", "GraphicsList": [
            {"Class": "ShapedGraphic", "ID": 1, "Bounds": "{{0, 0}, {100, 50}}",
             "Notes": "owl-class", "Text": {"Text": "Dog"}},
            {"Class": "ShapedGraphic", "ID": 2, "Bounds": "{{300, 0}, {100, 50}}",
             "Notes": "owl-class", "Text": {"Text": "Animal"}},
            {"Class": "LineGraphic", "ID": 3, "Notes": "subclass-of",
             "Tail": {"ID": 1}, "Head": {"ID": 2}, "Points": ["{100, 25}", "{300, 25}"]},
            {"Class": "ShapedGraphic", "ID": 4, "Bounds": "{{200, 20}, {10, 10}}",
             "Text": {"Text": "is a"}, "Line": {"ID": 3, "Position": 0.5}}
        ]}"#;
        let root = decode(json.as_bytes()).expect("Failed to decode");
        let diagram = Diagram::build(&DiagramDocument::from_value("zoo.graffle", root))
            .expect("Failed to build");

        let dot = render(&diagram);
        assert!(dot.starts_with("digraph diagram"));
        assert!(dot.contains(r#"label="Main""#));
        assert!(dot.contains(r#"label="head""#));
        assert!(dot.contains(r#"label="tail""#));
        assert!(dot.contains(r#"label="label""#));
        assert!(dot.contains("[owl-class]"));
    }
}
