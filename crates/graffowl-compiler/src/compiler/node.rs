use graffowl_core::model::{
    Graphic, GraphicId, LineData, Location, Page, ShapeData, TableData,
};

use crate::error::{CompileError, ErrorCode};

/// A graphic together with the page it lives on.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Node<'d> {
    page: &'d Page,
    id: GraphicId,
}

impl<'d> Node<'d> {
    pub(crate) fn new(page: &'d Page, id: GraphicId) -> Self {
        Self { page, id }
    }

    /// Another graphic on the same page.
    fn sibling(self, id: GraphicId) -> Self {
        Self::new(self.page, id)
    }

    pub(crate) fn graphic(self) -> &'d Graphic {
        self.page.graphic(self.id)
    }

    pub(crate) fn location(self) -> Location {
        self.page.location(self.id)
    }

    /// An error located at this graphic.
    pub(crate) fn error(self, code: ErrorCode, message: impl Into<String>) -> CompileError {
        CompileError::new(code, message).at(self.location())
    }

    /// The trimmed note, `None` when blank.
    pub(crate) fn tag(self) -> Option<&'d str> {
        self.graphic().metadata().tag()
    }

    /// Shape content, looking through subgraph groups.
    pub(crate) fn shape(self) -> Option<&'d ShapeData> {
        self.page.shape_content(self.id)
    }

    pub(crate) fn line(self) -> Option<&'d LineData> {
        self.graphic().as_line()
    }

    pub(crate) fn table(self) -> Option<&'d TableData> {
        self.graphic().as_table()
    }

    pub(crate) fn is_connector(self) -> bool {
        self.graphic().is_connector()
    }

    /// Connectors leaving this graphic.
    pub(crate) fn outgoing(self) -> impl ExactSizeIterator<Item = Node<'d>> + 'd {
        let page = self.page;
        self.graphic()
            .outgoing()
            .iter()
            .map(move |id| Node::new(page, *id))
    }

    /// Connectors arriving at this graphic.
    pub(crate) fn incoming(self) -> impl ExactSizeIterator<Item = Node<'d>> + 'd {
        let page = self.page;
        self.graphic()
            .incoming()
            .iter()
            .map(move |id| Node::new(page, *id))
    }

    pub(crate) fn head(self) -> Option<Node<'d>> {
        let ends = self.graphic().connector_ends()?;
        ends.head().map(|id| self.sibling(id))
    }

    pub(crate) fn tail(self) -> Option<Node<'d>> {
        let ends = self.graphic().connector_ends()?;
        ends.tail().map(|id| self.sibling(id))
    }

    /// Label shapes of a line, ordered along the line.
    pub(crate) fn labels(self) -> Vec<Node<'d>> {
        self.line()
            .map(|line| line.labels().map(|id| self.sibling(id)).collect())
            .unwrap_or_default()
    }

    pub(crate) fn cell(self, id: GraphicId) -> Node<'d> {
        self.sibling(id)
    }
}
