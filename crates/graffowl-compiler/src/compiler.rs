//! Diagram to ontology compilation.
//!
//! The [`Compiler`] first walks the diagram and files every tagged graphic
//! under its [`Note`]. It then works through the buckets in a fixed order:
//! imports, class axioms, individuals, object properties, data properties,
//! datatypes, rules and annotations. Each tag has a constructor that reads
//! the tagged graphic and the graphics its connectors reach, and adds the
//! resulting axioms to the [`Ontology`].
//!
//! Constructors recurse through connectors to build nested expressions: an
//! `obj-union` shape becomes the union of the class expressions its
//! outgoing connectors point at, each of which may itself be a restriction
//! or another union.

mod annotations;
mod classes;
mod datatypes;
mod imports;
mod individuals;
mod node;
mod properties;
mod rules;

use graffowl_core::{
    model::{
        Diagram, Ends, Graphic, GraphicId, GroupData, LineData, Page, ShapeData, TableData,
    },
    ontology::{Iri, Ontology},
    visitor::{Visit, Visitor},
};
use indexmap::IndexMap;
use log::{debug, info, trace};

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    namespace::NamespaceResolver,
    note::{Note, UnknownNote, is_namespace_note},
};

pub use imports::{ImportError, ImportLoader, Imported};

pub(crate) use node::Node;

/// Compiles one diagram into an ontology.
pub struct Compiler<'d> {
    diagram: &'d Diagram,
    namespaces: &'d NamespaceResolver,
    imports: &'d dyn ImportLoader,
    buckets: IndexMap<Note, Vec<Node<'d>>>,
    warnings: Vec<Diagnostic>,
}

impl<'d> Compiler<'d> {
    pub fn new(
        diagram: &'d Diagram,
        namespaces: &'d NamespaceResolver,
        imports: &'d dyn ImportLoader,
    ) -> Self {
        Self {
            diagram,
            namespaces,
            imports,
            buckets: IndexMap::new(),
            warnings: Vec::new(),
        }
    }

    /// An empty ontology named by the default namespace.
    pub fn create_ontology(&self) -> Ontology {
        Ontology::new(Iri::new(self.namespaces.default_namespace()))
    }

    /// Compiles every page of the diagram.
    pub fn compile_diagram(&mut self, ontology: &mut Ontology) -> Result<()> {
        info!(diagram = self.diagram.file_name(); "Compiling diagram");
        self.buckets.clear();
        let diagram = self.diagram;
        for page in diagram.pages() {
            self.collect(page);
        }
        self.process(ontology)
    }

    /// Compiles a single page. Connectors are followed within the page only.
    pub fn compile_page(&mut self, page: &'d Page, ontology: &mut Ontology) -> Result<()> {
        info!(diagram = self.diagram.file_name(), page = page.title(); "Compiling page");
        self.buckets.clear();
        self.collect(page);
        self.process(ontology)
    }

    /// Problems found while compiling that did not stop compilation.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    fn collect(&mut self, page: &'d Page) {
        let mut collector = NoteCollector::default();
        page.accept(&mut collector);
        for (note, id) in collector.tagged {
            self.buckets
                .entry(note)
                .or_default()
                .push(Node::new(page, id));
        }
        self.warnings.extend(collector.warnings);
    }

    fn process(&self, ontology: &mut Ontology) -> Result<()> {
        for (prefix, namespace) in self.namespaces.prefixes() {
            ontology.set_prefix(prefix.as_str(), namespace.as_str());
        }
        ontology.set_prefix("", format!("{}#", self.namespaces.default_namespace()));

        let imported = self.process_imports(ontology)?;
        self.process_class_axioms(ontology)?;
        self.process_individuals(ontology)?;
        self.process_object_properties(ontology)?;
        self.process_data_properties(ontology)?;
        self.process_datatypes(ontology)?;
        self.process_rules(ontology, &imported)?;
        self.process_annotations(ontology)?;

        info!(
            ontology = ontology.iri().as_str(),
            axioms = ontology.axiom_count(),
            imports = ontology.imports().len();
            "Compiled ontology"
        );
        Ok(())
    }

    /// Every graphic tagged `note`, in visit order.
    fn graphics(&self, note: Note) -> &[Node<'d>] {
        let graphics = self.buckets.get(&note).map(Vec::as_slice).unwrap_or_default();
        if !graphics.is_empty() {
            trace!(note = note.as_str(), count = graphics.len(); "Processing tag");
        }
        graphics
    }

    /// The graphics tagged `note`, which must all be shapes.
    fn shapes(&self, note: Note) -> Result<Vec<Node<'d>>> {
        self.graphics(note)
            .iter()
            .map(|node| match node.shape() {
                Some(_) => Ok(*node),
                None => Err(node.error(ErrorCode::E100, "Must be a shape")),
            })
            .collect()
    }

    /// The graphics tagged `note`, which must all be connectors.
    fn connectors(&self, note: Note) -> Result<Vec<Node<'d>>> {
        self.graphics(note)
            .iter()
            .map(|node| match node.is_connector() {
                true => Ok(*node),
                false => Err(node.error(ErrorCode::E100, "Must be a connector")),
            })
            .collect()
    }

    /// The tag of a graphic reached while building an expression.
    fn note(&self, node: Node<'d>) -> Result<Note> {
        let tag = node
            .tag()
            .ok_or_else(|| node.error(ErrorCode::E200, "Missing graphic note"))?;
        tag.parse()
            .map_err(|err: UnknownNote| node.error(ErrorCode::E201, err.to_string()))
    }

    fn shape(&self, node: Node<'d>) -> Result<&'d ShapeData> {
        node.shape()
            .ok_or_else(|| node.error(ErrorCode::E100, "Expecting a shape"))
    }

    /// The IRI named by a shape's text.
    fn uri(&self, node: Node<'d>) -> Result<Iri> {
        let text = self.shape(node)?.text().trim();
        if text.is_empty() {
            return Err(node.error(ErrorCode::E202, "Missing URI"));
        }
        self.resolve(text, node)
    }

    /// Resolves text against the diagram's namespaces, blaming `node` on
    /// failure.
    fn resolve(&self, text: &str, node: Node<'d>) -> Result<Iri> {
        self.namespaces.resolve(text).map(Iri::new).ok_or_else(|| {
            node.error(ErrorCode::E202, format!("Unknown namespace prefix in `{text}`"))
                .with_help("declare the prefix with a `namespace` shape: `prefix = uri`")
        })
    }

    /// Returns `true` for IRIs in the diagram's own namespace.
    fn is_local(&self, iri: &Iri) -> bool {
        iri.is_in(self.namespaces.default_namespace())
    }

    fn head(&self, connector: Node<'d>) -> Result<Node<'d>> {
        connector
            .head()
            .ok_or_else(|| connector.error(ErrorCode::E102, "Must have a head target"))
    }

    fn tail(&self, connector: Node<'d>) -> Result<Node<'d>> {
        connector
            .tail()
            .ok_or_else(|| connector.error(ErrorCode::E102, "Must have a tail target"))
    }

    /// The only connector leaving `node`.
    fn single_outgoing(&self, node: Node<'d>, what: &str) -> Result<Node<'d>> {
        let mut outgoing = node.outgoing();
        match (outgoing.next(), outgoing.next()) {
            (Some(connector), None) => Ok(connector),
            _ => Err(node.error(
                ErrorCode::E101,
                format!("{what} can only have one outgoing connection"),
            )),
        }
    }

    /// The only connector arriving at `node`.
    fn single_incoming(&self, node: Node<'d>, what: &str) -> Result<Node<'d>> {
        let mut incoming = node.incoming();
        match (incoming.next(), incoming.next()) {
            (Some(connector), None) => Ok(connector),
            _ => Err(node.error(
                ErrorCode::E101,
                format!("{what} can only have one incoming connector"),
            )),
        }
    }
}

/// Files tagged graphics by note during a deep walk.
#[derive(Default)]
struct NoteCollector {
    tagged: Vec<(Note, GraphicId)>,
    warnings: Vec<Diagnostic>,
}

impl NoteCollector {
    fn register(&mut self, page: &Page, graphic: &Graphic) {
        let metadata = graphic.metadata();
        let Some(tag) = metadata.tag() else {
            return;
        };
        if metadata.note().is_some_and(is_namespace_note) {
            return;
        }
        match tag.parse::<Note>() {
            Ok(note) => self.tagged.push((note, graphic.id())),
            Err(err) => {
                debug!(page = page.title(), note = tag; "Skipping unrecognized note");
                self.warnings.push(
                    Diagnostic::warning(ErrorCode::E201, err.to_string())
                        .at(page.location(graphic.id())),
                );
            }
        }
    }
}

impl Visitor for NoteCollector {
    fn group_start(&mut self, page: &Page, graphic: &Graphic, _group: &GroupData) -> Visit {
        self.register(page, graphic);
        Visit::Continue
    }

    fn line_start(&mut self, page: &Page, graphic: &Graphic, _line: &LineData) -> Visit {
        self.register(page, graphic);
        Visit::Continue
    }

    fn table_start(&mut self, page: &Page, graphic: &Graphic, _table: &TableData) -> Visit {
        self.register(page, graphic);
        Visit::Continue
    }

    fn shape(&mut self, page: &Page, graphic: &Graphic, _shape: &ShapeData) -> Visit {
        self.register(page, graphic);
        Visit::Continue
    }

    fn connector_shape(
        &mut self,
        page: &Page,
        graphic: &Graphic,
        _shape: &ShapeData,
        _ends: Ends,
    ) -> Visit {
        self.register(page, graphic);
        Visit::Continue
    }
}
