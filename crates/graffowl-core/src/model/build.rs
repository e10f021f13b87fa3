//! Two-phase page construction.
//!
//! 1. **Instantiation** walks the sheet's records depth-first and creates one
//!    arena node per record, registering its document id before descending
//!    into children.
//! 2. **Linking** resolves head, tail and label-line ids against the
//!    registry, fills incoming/outgoing sets, attaches labels to their lines
//!    and merges line groups.
//!
//! A final geometric pass relates every pair of root shapes.

use std::collections::HashMap;

use indexmap::IndexSet;
use log::{debug, trace};
use petgraph::unionfind::UnionFind;

use crate::{
    container::{GraphicClass, GraphicRecord, SheetRecord},
    geometry::Bounds,
    model::{
        ModelError,
        graphic::{
            Ends, Graphic, GraphicId, GraphicKind, GroupData, Layer, LayerId, LineData,
            LineGroupId, Metadata, ShapeData, TableData,
        },
        page::Page,
    },
};

/// Raw id references captured during instantiation.
#[derive(Debug, Clone, Copy)]
struct PendingLinks {
    head: i64,
    tail: i64,
    label_line: i64,
    label_position: f64,
}

pub(super) struct PageBuilder<'a> {
    title: &'a str,
    layer_count: usize,
    graphics: Vec<Graphic>,
    links: Vec<PendingLinks>,
    registry: HashMap<i64, GraphicId>,
    roots: Vec<GraphicId>,
}

impl<'a> PageBuilder<'a> {
    pub(super) fn build(index: usize, sheet: &SheetRecord<'a>) -> Result<Page, ModelError> {
        let layers: Vec<Layer> = sheet
            .layers()
            .into_iter()
            .map(|layer| Layer::new(layer.name, layer.visible))
            .collect();

        let mut builder = PageBuilder {
            title: sheet.title(),
            layer_count: layers.len(),
            graphics: Vec::new(),
            links: Vec::new(),
            registry: HashMap::new(),
            roots: Vec::new(),
        };

        for record in sheet.graphics()? {
            let id = builder.instantiate(record, None)?;
            builder.roots.push(id);
        }

        let line_groups = builder.link();
        builder.relate_root_shapes();

        debug!(
            page = builder.title,
            graphics = builder.graphics.len(),
            roots = builder.roots.len(),
            line_groups = line_groups.len();
            "Page built"
        );

        Ok(Page::new(
            index,
            builder.title.to_string(),
            Metadata::new(sheet.background_notes(), sheet.background_user_info()),
            layers,
            builder.graphics,
            builder.roots,
            line_groups,
        ))
    }

    // ---------------------------------------------------------------------
    // Instantiation
    // ---------------------------------------------------------------------

    fn instantiate(
        &mut self,
        record: GraphicRecord<'a>,
        parent: Option<GraphicId>,
    ) -> Result<GraphicId, ModelError> {
        let class_name = record.class_name()?;
        let Some(class) = GraphicClass::from_name(class_name) else {
            return Err(ModelError::UnsupportedKind {
                page: self.title.to_string(),
                id: record.id()?,
                class: class_name.to_string(),
            });
        };

        match class {
            GraphicClass::Group => {
                let group = GroupData {
                    children: Vec::new(),
                    subgraph: record.is_subgraph(),
                };
                let id = self.register(record, parent, GraphicKind::Group(group))?;

                let children = record
                    .children()?
                    .into_iter()
                    .map(|child| self.instantiate(child, Some(id)))
                    .collect::<Result<Vec<_>, _>>()?;
                if let GraphicKind::Group(group) = &mut self.graphics[id.0].kind {
                    group.children = children;
                }
                Ok(id)
            }
            GraphicClass::TableGroup => {
                let id = self.register(record, parent, GraphicKind::Table(TableData::default()))?;

                let mut table = TableData::default();
                for row in record.table_rows()? {
                    let mut cells = Vec::with_capacity(row.len());
                    for cell in row {
                        let shape = Self::shape_data(cell)?;
                        let cell_id = self.register(cell, Some(id), GraphicKind::Shape(shape))?;
                        cells.push(cell_id);
                        table.cells.push(cell_id);
                    }
                    table.rows.push(cells);
                }
                self.graphics[id.0].kind = GraphicKind::Table(table);
                Ok(id)
            }
            GraphicClass::LineGraphic => {
                let line = LineData {
                    head_arrow: record.head_arrow().map(str::to_string),
                    tail_arrow: record.tail_arrow().map(str::to_string),
                    points: record.points()?,
                    ..LineData::default()
                };
                self.register(record, parent, GraphicKind::Line(line))
            }
            GraphicClass::ShapedGraphic => {
                let shape = Self::shape_data(record)?;
                let kind = if record.head_id() != 0 || record.tail_id() != 0 {
                    GraphicKind::ConnectorShape {
                        shape,
                        ends: Ends::default(),
                    }
                } else {
                    GraphicKind::Shape(shape)
                };
                self.register(record, parent, kind)
            }
        }
    }

    /// Reads shape content, unwrapping a subgraph record to its last child.
    fn shape_data(record: GraphicRecord<'a>) -> Result<ShapeData, ModelError> {
        let source = if record.is_subgraph() {
            record.children()?.pop().unwrap_or(record)
        } else {
            record
        };

        Ok(ShapeData {
            text: source.text().unwrap_or_default(),
            rich_text: source.rich_text().map(str::to_string),
            bounds: source.bounds()?,
            shape: record.shape().map(str::to_string),
            ..ShapeData::default()
        })
    }

    fn register(
        &mut self,
        record: GraphicRecord<'a>,
        parent: Option<GraphicId>,
        kind: GraphicKind,
    ) -> Result<GraphicId, ModelError> {
        let record_id = record.id()?;
        let id = GraphicId(self.graphics.len());
        if self.registry.insert(record_id, id).is_some() {
            return Err(ModelError::DuplicateId {
                page: self.title.to_string(),
                id: record_id,
            });
        }

        let bounds = record.bounds()?;
        let center = match &kind {
            GraphicKind::Line(line) if bounds.is_empty() && !line.points.is_empty() => {
                let first = line.points[0];
                let last = line.points[line.points.len() - 1];
                first.midpoint(last)
            }
            _ => bounds.center(),
        };

        let layer = record
            .layer_index()
            .filter(|index| *index < self.layer_count)
            .map(LayerId);

        trace!(record_id, id = id.0; "Registered graphic");

        self.graphics.push(Graphic {
            id,
            record_id,
            center,
            solid: record.stroke_pattern() == 0,
            metadata: Metadata::new(record.notes(), record.user_properties()),
            layer,
            parent,
            incoming: IndexSet::new(),
            outgoing: IndexSet::new(),
            kind,
        });
        self.links.push(PendingLinks {
            head: record.head_id(),
            tail: record.tail_id(),
            label_line: record.label_line_id(),
            label_position: record.label_position(),
        });

        Ok(id)
    }

    // ---------------------------------------------------------------------
    // Linking
    // ---------------------------------------------------------------------

    fn resolve(&self, record_id: i64) -> Option<GraphicId> {
        if record_id == 0 {
            return None;
        }
        self.registry.get(&record_id).copied()
    }

    fn is_line(&self, id: GraphicId) -> bool {
        matches!(self.graphics[id.0].kind, GraphicKind::Line(_))
    }

    /// Resolves references and returns the page's line groups.
    fn link(&mut self) -> Vec<Vec<GraphicId>> {
        let count = self.graphics.len();
        let mut union_find = UnionFind::<usize>::new(count);
        let mut grouped = vec![false; count];
        let mut labels = IndexSet::new();

        for index in 0..count {
            let id = GraphicId(index);
            let links = self.links[index];

            if self.graphics[index].as_shape().is_some() && links.label_line != 0 {
                match self.resolve(links.label_line) {
                    Some(line_id) if self.is_line(line_id) => {
                        if let GraphicKind::Line(line) = &mut self.graphics[line_id.0].kind {
                            line.labels.push((links.label_position, id));
                        }
                        self.graphics[index].parent = Some(line_id);
                        labels.insert(id);
                    }
                    _ => debug!(
                        page = self.title,
                        record_id = self.graphics[index].record_id,
                        line_id = links.label_line;
                        "Label refers to a missing line"
                    ),
                }
            }

            if !self.graphics[index].is_connector() {
                continue;
            }

            let ends = Ends {
                head: self.resolve(links.head),
                tail: self.resolve(links.tail),
            };

            match &mut self.graphics[index].kind {
                GraphicKind::ConnectorShape { ends: slot, .. } => *slot = ends,
                GraphicKind::Line(line) => line.ends = ends,
                _ => {}
            }

            if let Some(head) = ends.head {
                self.graphics[head.0].incoming.insert(id);
            }
            if let Some(tail) = ends.tail {
                self.graphics[tail.0].outgoing.insert(id);
            }

            if self.is_line(id) {
                for end in [ends.head, ends.tail].into_iter().flatten() {
                    if self.is_line(end) {
                        union_find.union(index, end.0);
                        grouped[index] = true;
                        grouped[end.0] = true;
                    }
                }
            }
        }

        for graphic in &mut self.graphics {
            if let GraphicKind::Line(line) = &mut graphic.kind {
                line.labels.sort_by(|(a, _), (b, _)| a.total_cmp(b));
            }
        }
        self.roots.retain(|root| !labels.contains(root));

        let labeling = union_find.into_labeling();
        let mut group_ids: HashMap<usize, LineGroupId> = HashMap::new();
        let mut groups: Vec<Vec<GraphicId>> = Vec::new();

        for index in (0..count).filter(|index| grouped[*index]) {
            let group_id = *group_ids.entry(labeling[index]).or_insert_with(|| {
                groups.push(Vec::new());
                LineGroupId(groups.len() - 1)
            });
            groups[group_id.0].push(GraphicId(index));
            if let GraphicKind::Line(line) = &mut self.graphics[index].kind {
                line.group = Some(group_id);
            }
        }

        groups
    }

    // ---------------------------------------------------------------------
    // Geometry
    // ---------------------------------------------------------------------

    /// Records containment and intersection between every pair of root shapes.
    fn relate_root_shapes(&mut self) {
        let shapes: Vec<(GraphicId, Bounds)> = self
            .roots
            .iter()
            .filter_map(|id| {
                self.graphics[id.0]
                    .as_shape()
                    .map(|shape| (*id, shape.bounds))
            })
            .collect();

        for (i, (a, a_bounds)) in shapes.iter().enumerate() {
            for (b, b_bounds) in &shapes[i + 1..] {
                if a_bounds.intersects(b_bounds) {
                    self.shape_mut(*a).intersecting.insert(*b);
                    self.shape_mut(*b).intersecting.insert(*a);
                }
                if a_bounds.contains(b_bounds) {
                    self.shape_mut(*a).contained.insert(*b);
                    self.shape_mut(*b).containing.insert(*a);
                }
                if b_bounds.contains(a_bounds) {
                    self.shape_mut(*b).contained.insert(*a);
                    self.shape_mut(*a).containing.insert(*b);
                }
            }
        }
    }

    fn shape_mut(&mut self, id: GraphicId) -> &mut ShapeData {
        match &mut self.graphics[id.0].kind {
            GraphicKind::Shape(shape) | GraphicKind::ConnectorShape { shape, .. } => shape,
            _ => unreachable!("relate_root_shapes only collects shape ids"),
        }
    }
}
