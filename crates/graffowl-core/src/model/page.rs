//! Pages and source locations.

use std::{fmt, ops::Index};

use crate::{
    container::SheetRecord,
    geometry::Point,
    model::{
        ModelError,
        build::PageBuilder,
        graphic::{Graphic, GraphicId, GraphicKind, Layer, LayerId, LineGroupId, Metadata, ShapeData},
    },
};

/// A position on a named page, used to point diagnostics at a graphic.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    page: String,
    point: Point,
}

impl Location {
    pub fn new(page: impl Into<String>, point: Point) -> Self {
        Self {
            page: page.into(),
            point,
        }
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn point(&self) -> Point {
        self.point
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'{}", self.page, self.point)
    }
}

/// One sheet of a diagram with its graphics.
#[derive(Debug, Clone)]
pub struct Page {
    index: usize,
    title: String,
    metadata: Metadata,
    layers: Vec<Layer>,
    graphics: Vec<Graphic>,
    roots: Vec<GraphicId>,
    line_groups: Vec<Vec<GraphicId>>,
}

impl Page {
    pub(super) fn new(
        index: usize,
        title: String,
        metadata: Metadata,
        layers: Vec<Layer>,
        graphics: Vec<Graphic>,
        roots: Vec<GraphicId>,
        line_groups: Vec<Vec<GraphicId>>,
    ) -> Self {
        Self {
            index,
            title,
            metadata,
            layers,
            graphics,
            roots,
            line_groups,
        }
    }

    /// Builds a page from a sheet record.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] for records of an unsupported class, duplicate
    /// record ids, or malformed record content.
    pub fn build(index: usize, sheet: &SheetRecord<'_>) -> Result<Self, ModelError> {
        PageBuilder::build(index, sheet)
    }

    /// Position of the page within its diagram.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Notes and properties of the page background.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, id: LayerId) -> &Layer {
        &self.layers[id.0]
    }

    /// Every graphic of the page in arena order.
    pub fn graphics(&self) -> &[Graphic] {
        &self.graphics
    }

    pub fn graphic(&self, id: GraphicId) -> &Graphic {
        &self.graphics[id.0]
    }

    /// Top-level graphics in document order. Line labels are not roots.
    pub fn roots(&self) -> &[GraphicId] {
        &self.roots
    }

    pub fn line_groups(&self) -> &[Vec<GraphicId>] {
        &self.line_groups
    }

    /// Members of a line group, in arena order.
    pub fn line_group(&self, id: LineGroupId) -> &[GraphicId] {
        &self.line_groups[id.0]
    }

    /// The line group of a line, if it is joined to another line.
    pub fn line_group_of(&self, id: GraphicId) -> Option<&[GraphicId]> {
        self.graphic(id)
            .as_line()
            .and_then(|line| line.group)
            .map(|group| self.line_group(group))
    }

    /// Looks a graphic up by the id it carries in the source document.
    pub fn find_by_record_id(&self, record_id: i64) -> Option<GraphicId> {
        self.graphics
            .iter()
            .find(|graphic| graphic.record_id == record_id)
            .map(|graphic| graphic.id)
    }

    /// Shape content of a graphic.
    ///
    /// Shapes and connector shapes yield their own content. A subgraph group
    /// yields the content of its last child.
    pub fn shape_content(&self, id: GraphicId) -> Option<&ShapeData> {
        let graphic = self.graphic(id);
        match &graphic.kind {
            GraphicKind::Shape(shape) | GraphicKind::ConnectorShape { shape, .. } => Some(shape),
            GraphicKind::Group(group) if group.subgraph => group
                .children
                .last()
                .and_then(|child| self.shape_content(*child)),
            _ => None,
        }
    }

    /// Where a graphic sits on this page.
    pub fn location(&self, id: GraphicId) -> Location {
        Location::new(self.title.clone(), self.graphic(id).center)
    }
}

impl Index<GraphicId> for Page {
    type Output = Graphic;

    fn index(&self, id: GraphicId) -> &Graphic {
        self.graphic(id)
    }
}
