//! Graphic nodes stored in a page arena.

use std::fmt;

use indexmap::{IndexMap, IndexSet};

use crate::geometry::{Bounds, Point};

/// Index of a graphic in its page's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GraphicId(pub(super) usize);

impl GraphicId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for GraphicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of a layer in its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerId(pub(super) usize);

impl LayerId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Identifies one line group of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineGroupId(pub(super) usize);

/// A named page layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    name: String,
    visible: bool,
}

impl Layer {
    pub fn new(name: impl Into<String>, visible: bool) -> Self {
        Self {
            name: name.into(),
            visible,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// The note and user properties attached to a graphic or a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    note: Option<String>,
    properties: IndexMap<String, String>,
}

impl Metadata {
    pub fn new(note: Option<String>, properties: IndexMap<String, String>) -> Self {
        Self { note, properties }
    }

    /// The raw note text.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// The trimmed note, or `None` when the note is absent or blank.
    pub fn tag(&self) -> Option<&str> {
        self.note.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }

    pub fn properties(&self) -> &IndexMap<String, String> {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

/// The resolved ends of a connector.
///
/// Either end may be missing: a dangling connector is valid at this layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ends {
    pub(super) head: Option<GraphicId>,
    pub(super) tail: Option<GraphicId>,
}

impl Ends {
    pub fn head(&self) -> Option<GraphicId> {
        self.head
    }

    pub fn tail(&self) -> Option<GraphicId> {
        self.tail
    }
}

/// Content shared by shapes and connector shapes.
#[derive(Debug, Clone, Default)]
pub struct ShapeData {
    pub(super) text: String,
    pub(super) rich_text: Option<String>,
    pub(super) bounds: Bounds,
    pub(super) shape: Option<String>,
    pub(super) contained: IndexSet<GraphicId>,
    pub(super) containing: IndexSet<GraphicId>,
    pub(super) intersecting: IndexSet<GraphicId>,
}

impl ShapeData {
    /// Plain display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text as stored in the document, before RTF stripping.
    pub fn rich_text(&self) -> Option<&str> {
        self.rich_text.as_deref()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The drawn shape name, e.g. `Rectangle`.
    pub fn shape(&self) -> Option<&str> {
        self.shape.as_deref()
    }

    /// Root shapes whose bounds lie inside this shape's bounds.
    pub fn contained_shapes(&self) -> &IndexSet<GraphicId> {
        &self.contained
    }

    /// Root shapes whose bounds contain this shape's bounds.
    pub fn containing_shapes(&self) -> &IndexSet<GraphicId> {
        &self.containing
    }

    /// Root shapes whose bounds overlap this shape's bounds.
    pub fn intersecting_shapes(&self) -> &IndexSet<GraphicId> {
        &self.intersecting
    }
}

/// A line connector with its labels.
#[derive(Debug, Clone, Default)]
pub struct LineData {
    pub(super) ends: Ends,
    pub(super) head_arrow: Option<String>,
    pub(super) tail_arrow: Option<String>,
    pub(super) points: Vec<Point>,
    pub(super) labels: Vec<(f64, GraphicId)>,
    pub(super) group: Option<LineGroupId>,
}

impl LineData {
    pub fn ends(&self) -> Ends {
        self.ends
    }

    pub fn head_arrow(&self) -> Option<&str> {
        self.head_arrow.as_deref()
    }

    pub fn tail_arrow(&self) -> Option<&str> {
        self.tail_arrow.as_deref()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Label shapes ordered by their position along the line, from tail to head.
    pub fn labels(&self) -> impl ExactSizeIterator<Item = GraphicId> + '_ {
        self.labels.iter().map(|(_, id)| *id)
    }

    /// The line group this line belongs to, if it shares an endpoint with
    /// another line.
    pub fn group(&self) -> Option<LineGroupId> {
        self.group
    }
}

/// A table of shape cells.
#[derive(Debug, Clone, Default)]
pub struct TableData {
    pub(super) rows: Vec<Vec<GraphicId>>,
    pub(super) cells: Vec<GraphicId>,
}

impl TableData {
    /// Cells in row-major order.
    pub fn rows(&self) -> &[Vec<GraphicId>] {
        &self.rows
    }

    pub fn cells(&self) -> &[GraphicId] {
        &self.cells
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, taken from the first row.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<GraphicId> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }
}

/// A group of child graphics.
#[derive(Debug, Clone, Default)]
pub struct GroupData {
    pub(super) children: Vec<GraphicId>,
    pub(super) subgraph: bool,
}

impl GroupData {
    pub fn children(&self) -> &[GraphicId] {
        &self.children
    }

    /// Returns `true` for a subgraph, which reads as its last child's shape.
    pub fn is_subgraph(&self) -> bool {
        self.subgraph
    }
}

/// The closed set of graphic variants.
#[derive(Debug, Clone)]
pub enum GraphicKind {
    Shape(ShapeData),
    ConnectorShape { shape: ShapeData, ends: Ends },
    Line(LineData),
    Table(TableData),
    Group(GroupData),
}

/// A node of the graphic model.
#[derive(Debug, Clone)]
pub struct Graphic {
    pub(super) id: GraphicId,
    pub(super) record_id: i64,
    pub(super) center: Point,
    pub(super) solid: bool,
    pub(super) metadata: Metadata,
    pub(super) layer: Option<LayerId>,
    pub(super) parent: Option<GraphicId>,
    pub(super) incoming: IndexSet<GraphicId>,
    pub(super) outgoing: IndexSet<GraphicId>,
    pub(super) kind: GraphicKind,
}

impl Graphic {
    pub fn id(&self) -> GraphicId {
        self.id
    }

    /// The id this graphic carries in the source document.
    pub fn record_id(&self) -> i64 {
        self.record_id
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns `true` for a solid stroke, `false` for a dashed one.
    pub fn is_solid(&self) -> bool {
        self.solid
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn layer(&self) -> Option<LayerId> {
        self.layer
    }

    /// The owning group, table, or line (for labels). `None` for roots.
    pub fn parent(&self) -> Option<GraphicId> {
        self.parent
    }

    /// Connectors whose head is this graphic.
    pub fn incoming(&self) -> &IndexSet<GraphicId> {
        &self.incoming
    }

    /// Connectors whose tail is this graphic.
    pub fn outgoing(&self) -> &IndexSet<GraphicId> {
        &self.outgoing
    }

    pub fn kind(&self) -> &GraphicKind {
        &self.kind
    }

    /// A short name for the variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            GraphicKind::Shape(_) => "shape",
            GraphicKind::ConnectorShape { .. } => "connector shape",
            GraphicKind::Line(_) => "line",
            GraphicKind::Table(_) => "table",
            GraphicKind::Group(_) => "group",
        }
    }

    /// Shape content for shapes and connector shapes.
    pub fn as_shape(&self) -> Option<&ShapeData> {
        match &self.kind {
            GraphicKind::Shape(shape) | GraphicKind::ConnectorShape { shape, .. } => Some(shape),
            _ => None,
        }
    }

    /// Resolved ends for connectors: lines and connector shapes.
    pub fn connector_ends(&self) -> Option<Ends> {
        match &self.kind {
            GraphicKind::ConnectorShape { ends, .. } => Some(*ends),
            GraphicKind::Line(line) => Some(line.ends),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&LineData> {
        match &self.kind {
            GraphicKind::Line(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&TableData> {
        match &self.kind {
            GraphicKind::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&GroupData> {
        match &self.kind {
            GraphicKind::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn is_connector(&self) -> bool {
        self.connector_ends().is_some()
    }
}
