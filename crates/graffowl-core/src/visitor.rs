//! Depth-first traversal of the graphic model.
//!
//! A [`Visitor`] receives start/end callbacks for containers (diagram, page,
//! group, line, table) and a single callback for leaves (shapes and
//! connector shapes). Every method has a no-op default, so implementations
//! override only what they need.
//!
//! Traversal order:
//! - pages in document order
//! - root graphics in document order
//! - group children in document order
//! - line labels ordered by their position along the line
//! - table cells in row-major order
//!
//! ```
//! # use graffowl_core::model::{Graphic, Page, ShapeData};
//! # use graffowl_core::visitor::{Visit, Visitor};
//! #[derive(Default)]
//! struct ShapeCounter(usize);
//!
//! impl Visitor for ShapeCounter {
//!     fn shape(&mut self, _page: &Page, _graphic: &Graphic, _shape: &ShapeData) -> Visit {
//!         self.0 += 1;
//!         Visit::Continue
//!     }
//! }
//! ```

use std::ops::ControlFlow;

use crate::model::{
    Diagram, Ends, Graphic, GraphicId, GraphicKind, GroupData, LineData, Page, ShapeData,
    TableData,
};

/// What a traversal does after a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visit {
    /// Descend into children and keep walking.
    #[default]
    Continue,
    /// Skip the children. The matching end callback is still called.
    Skip,
    /// Abort the whole walk.
    Stop,
}

/// Callbacks for a model traversal.
#[allow(unused_variables)]
pub trait Visitor {
    fn diagram_start(&mut self, diagram: &Diagram) -> Visit {
        Visit::Continue
    }

    fn diagram_end(&mut self, diagram: &Diagram) {}

    fn page_start(&mut self, page: &Page) -> Visit {
        Visit::Continue
    }

    fn page_end(&mut self, page: &Page) {}

    fn group_start(&mut self, page: &Page, graphic: &Graphic, group: &GroupData) -> Visit {
        Visit::Continue
    }

    fn group_end(&mut self, page: &Page, graphic: &Graphic, group: &GroupData) {}

    /// Called before the line's labels are visited.
    fn line_start(&mut self, page: &Page, graphic: &Graphic, line: &LineData) -> Visit {
        Visit::Continue
    }

    fn line_end(&mut self, page: &Page, graphic: &Graphic, line: &LineData) {}

    /// Called before the table's cells are visited.
    fn table_start(&mut self, page: &Page, graphic: &Graphic, table: &TableData) -> Visit {
        Visit::Continue
    }

    fn table_end(&mut self, page: &Page, graphic: &Graphic, table: &TableData) {}

    fn shape(&mut self, page: &Page, graphic: &Graphic, shape: &ShapeData) -> Visit {
        Visit::Continue
    }

    fn connector_shape(
        &mut self,
        page: &Page,
        graphic: &Graphic,
        shape: &ShapeData,
        ends: Ends,
    ) -> Visit {
        Visit::Continue
    }
}

/// Adapter that skips groups, lines and tables.
///
/// Only root shapes and connector shapes reach the wrapped visitor, along
/// with the diagram and page callbacks.
#[derive(Debug, Default)]
pub struct Shallow<V>(pub V);

impl<V> Shallow<V> {
    pub fn into_inner(self) -> V {
        self.0
    }
}

impl<V: Visitor> Visitor for Shallow<V> {
    fn diagram_start(&mut self, diagram: &Diagram) -> Visit {
        self.0.diagram_start(diagram)
    }

    fn diagram_end(&mut self, diagram: &Diagram) {
        self.0.diagram_end(diagram);
    }

    fn page_start(&mut self, page: &Page) -> Visit {
        self.0.page_start(page)
    }

    fn page_end(&mut self, page: &Page) {
        self.0.page_end(page);
    }

    fn group_start(&mut self, _page: &Page, _graphic: &Graphic, _group: &GroupData) -> Visit {
        Visit::Skip
    }

    fn line_start(&mut self, _page: &Page, _graphic: &Graphic, _line: &LineData) -> Visit {
        Visit::Skip
    }

    fn table_start(&mut self, _page: &Page, _graphic: &Graphic, _table: &TableData) -> Visit {
        Visit::Skip
    }

    fn shape(&mut self, page: &Page, graphic: &Graphic, shape: &ShapeData) -> Visit {
        self.0.shape(page, graphic, shape)
    }

    fn connector_shape(
        &mut self,
        page: &Page,
        graphic: &Graphic,
        shape: &ShapeData,
        ends: Ends,
    ) -> Visit {
        self.0.connector_shape(page, graphic, shape, ends)
    }
}

impl Diagram {
    /// Walks every page of the diagram.
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        let _ = walk_diagram(self, visitor);
    }
}

impl Page {
    /// Walks the page's root graphics.
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        let _ = walk_page(self, visitor);
    }
}

/// Continues past `Skip`, breaks on `Stop`.
fn proceed(visit: Visit) -> ControlFlow<()> {
    match visit {
        Visit::Stop => ControlFlow::Break(()),
        Visit::Continue | Visit::Skip => ControlFlow::Continue(()),
    }
}

pub fn walk_diagram(diagram: &Diagram, visitor: &mut dyn Visitor) -> ControlFlow<()> {
    match visitor.diagram_start(diagram) {
        Visit::Stop => return ControlFlow::Break(()),
        Visit::Skip => {}
        Visit::Continue => {
            for page in diagram.pages() {
                walk_page(page, visitor)?;
            }
        }
    }
    visitor.diagram_end(diagram);
    ControlFlow::Continue(())
}

pub fn walk_page(page: &Page, visitor: &mut dyn Visitor) -> ControlFlow<()> {
    match visitor.page_start(page) {
        Visit::Stop => return ControlFlow::Break(()),
        Visit::Skip => {}
        Visit::Continue => {
            for id in page.roots() {
                walk_graphic(page, *id, visitor)?;
            }
        }
    }
    visitor.page_end(page);
    ControlFlow::Continue(())
}

/// Walks one graphic and everything beneath it.
pub fn walk_graphic(page: &Page, id: GraphicId, visitor: &mut dyn Visitor) -> ControlFlow<()> {
    let graphic = page.graphic(id);
    match graphic.kind() {
        GraphicKind::Shape(shape) => proceed(visitor.shape(page, graphic, shape)),
        GraphicKind::ConnectorShape { shape, ends } => {
            proceed(visitor.connector_shape(page, graphic, shape, *ends))
        }
        GraphicKind::Group(group) => {
            let start = visitor.group_start(page, graphic, group);
            walk_children(start, group.children(), page, visitor)?;
            visitor.group_end(page, graphic, group);
            ControlFlow::Continue(())
        }
        GraphicKind::Line(line) => {
            let labels: Vec<GraphicId> = line.labels().collect();
            let start = visitor.line_start(page, graphic, line);
            walk_children(start, &labels, page, visitor)?;
            visitor.line_end(page, graphic, line);
            ControlFlow::Continue(())
        }
        GraphicKind::Table(table) => {
            let start = visitor.table_start(page, graphic, table);
            walk_children(start, table.cells(), page, visitor)?;
            visitor.table_end(page, graphic, table);
            ControlFlow::Continue(())
        }
    }
}

/// Walks `children` after a start callback. A skipped container has its
/// children passed over; only `Stop` breaks.
fn walk_children(
    start: Visit,
    children: &[GraphicId],
    page: &Page,
    visitor: &mut dyn Visitor,
) -> ControlFlow<()> {
    match start {
        Visit::Stop => ControlFlow::Break(()),
        Visit::Skip => ControlFlow::Continue(()),
        Visit::Continue => {
            for child in children {
                walk_graphic(page, *child, visitor)?;
            }
            ControlFlow::Continue(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{DiagramDocument, decode};

    const DIAGRAM: &str = r#"{"Sheets": [
        {"SheetTitle": "One", "GraphicsList": [
            {"Class": "ShapedGraphic", "ID": 1, "Bounds": "{{0, 0}, {10, 10}}", "Text": {"Text": "a"}},
            {"Class": "Group", "ID": 2, "Graphics": [
                {"Class": "ShapedGraphic", "ID": 3, "Text": {"Text": "b"}},
                {"Class": "ShapedGraphic", "ID": 4, "Text": {"Text": "c"}}
            ]},
            {"Class": "LineGraphic", "ID": 5, "Tail": {"ID": 1}, "Head": {"ID": 3}},
            {"Class": "ShapedGraphic", "ID": 6, "Text": {"Text": "label"}, "Line": {"ID": 5, "Position": 0.5}},
            {"Class": "ShapedGraphic", "ID": 7, "Text": {"Text": "d"}, "Head": {"ID": 1}}
        ]},
        {"SheetTitle": "Two", "GraphicsList": [
            {"Class": "ShapedGraphic", "ID": 1, "Text": {"Text": "e"}}
        ]}
    ]}"#;

    fn diagram() -> Diagram {
        let root = decode(DIAGRAM.as_bytes()).unwrap();
        Diagram::build(&DiagramDocument::from_value("walk.json", root)).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        skip_groups: bool,
        skip_lines: bool,
        stop_at: Option<&'static str>,
    }

    impl Recorder {
        fn leaf(&mut self, text: &str) -> Visit {
            self.events.push(text.to_string());
            if self.stop_at == Some(text) {
                Visit::Stop
            } else {
                Visit::Continue
            }
        }
    }

    impl Visitor for Recorder {
        fn diagram_start(&mut self, _diagram: &Diagram) -> Visit {
            self.events.push("diagram[".into());
            Visit::Continue
        }

        fn diagram_end(&mut self, _diagram: &Diagram) {
            self.events.push("]diagram".into());
        }

        fn page_start(&mut self, page: &Page) -> Visit {
            self.events.push(format!("page {}[", page.title()));
            Visit::Continue
        }

        fn page_end(&mut self, page: &Page) {
            self.events.push(format!("]page {}", page.title()));
        }

        fn group_start(&mut self, _page: &Page, _graphic: &Graphic, _group: &GroupData) -> Visit {
            self.events.push("group[".into());
            if self.skip_groups { Visit::Skip } else { Visit::Continue }
        }

        fn group_end(&mut self, _page: &Page, _graphic: &Graphic, _group: &GroupData) {
            self.events.push("]group".into());
        }

        fn line_start(&mut self, _page: &Page, _graphic: &Graphic, _line: &LineData) -> Visit {
            self.events.push("line[".into());
            if self.skip_lines { Visit::Skip } else { Visit::Continue }
        }

        fn line_end(&mut self, _page: &Page, _graphic: &Graphic, _line: &LineData) {
            self.events.push("]line".into());
        }

        fn shape(&mut self, _page: &Page, _graphic: &Graphic, shape: &ShapeData) -> Visit {
            self.leaf(shape.text())
        }

        fn connector_shape(
            &mut self,
            _page: &Page,
            _graphic: &Graphic,
            shape: &ShapeData,
            _ends: Ends,
        ) -> Visit {
            let text = format!("connector {}", shape.text());
            self.leaf(&text)
        }
    }

    #[test]
    fn test_full_walk_order() {
        let mut recorder = Recorder::default();
        diagram().accept(&mut recorder);
        assert_eq!(
            recorder.events,
            vec![
                "diagram[", "page One[", "a", "group[", "b", "c", "]group", "line[", "label",
                "]line", "connector d", "]page One", "page Two[", "e", "]page Two", "]diagram",
            ]
        );
    }

    #[test]
    fn test_skip_suppresses_children_only() {
        let mut recorder = Recorder {
            skip_groups: true,
            ..Recorder::default()
        };
        diagram().pages()[0].accept(&mut recorder);
        assert_eq!(
            recorder.events,
            vec![
                "page One[", "a", "group[", "]group", "line[", "label", "]line", "connector d",
                "]page One",
            ]
        );
    }

    #[test]
    fn test_skipped_starts_are_balanced_by_ends() {
        let mut recorder = Recorder {
            skip_groups: true,
            skip_lines: true,
            ..Recorder::default()
        };
        diagram().accept(&mut recorder);

        let count = |event: &str| recorder.events.iter().filter(|e| e.as_str() == event).count();
        assert_eq!(count("line["), 1);
        assert_eq!(count("]line"), 1);
        assert_eq!(count("group["), count("]group"));
        assert!(!recorder.events.iter().any(|e| e == "label" || e == "b"));
    }

    #[test]
    fn test_stop_aborts_walk() {
        let mut recorder = Recorder {
            stop_at: Some("b"),
            ..Recorder::default()
        };
        diagram().accept(&mut recorder);
        assert_eq!(recorder.events, vec!["diagram[", "page One[", "a", "group[", "b"]);
    }

    #[test]
    fn test_shallow_visits_root_shapes_only() {
        let mut shallow = Shallow(Recorder::default());
        diagram().accept(&mut shallow);
        assert_eq!(
            shallow.into_inner().events,
            vec![
                "diagram[", "page One[", "a", "connector d", "]page One", "page Two[", "e",
                "]page Two", "]diagram",
            ]
        );
    }
}
