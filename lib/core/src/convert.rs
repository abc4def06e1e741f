// Model graph -> GraphWalker conversion
use ahash::AHashMap;
use tracing::{debug, trace, warn};
use crate::graph::{Edge, GraphWalkerDocument, Vertex, VertexId};
use crate::index::build_vertices;
use crate::relation::{Multiplicity, RelationKind};
use crate::report::{ConversionReport, DroppedRelation};
use crate::schema::ModelGraphDocument;
use crate::{Error, Result};

/// Configuration for a conversion
#[derive(Debug, Clone, Default)]
pub struct ConverterConfig {
    /// Fail on relations whose target model is unknown instead of dropping them
    pub strict: bool,
}

/// Result of a successful conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    pub document: GraphWalkerDocument,
    pub report: ConversionReport,
}

/// Dedup key for merged edges, taken after the inheritance swap
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct EdgeKey {
    source: VertexId,
    dest: VertexId,
    kind: RelationKind,
}

/// Edges in emission order plus a keyed view into the same storage
#[derive(Debug, Default)]
struct EdgeArena {
    edges: Vec<Edge>,
    by_key: AHashMap<EdgeKey, usize>,
}

impl EdgeArena {
    /// Returns `true` when the field was folded into an existing edge
    fn add(
        &mut self,
        kind: &RelationKind,
        source: &Vertex,
        dest: &Vertex,
        multiplicity: Option<Multiplicity>,
        field: &str,
    ) -> bool {
        let key = EdgeKey {
            source: source.id.clone(),
            dest: dest.id.clone(),
            kind: kind.clone(),
        };

        if let Some(&slot) = self.by_key.get(&key) {
            self.edges[slot].push_field(field.to_string());
            return true;
        }

        self.by_key.insert(key, self.edges.len());
        self.edges.push(Edge::new(
            kind.clone(),
            source.id.clone(),
            dest.id.clone(),
            multiplicity,
            field.to_string(),
        ));
        false
    }

    fn finish(mut self) -> Vec<Edge> {
        for edge in &mut self.edges {
            edge.finalize_label();
        }
        self.edges
    }
}

pub struct Converter {
    config: ConverterConfig,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert a whole document in one pass over models and one over relations.
    ///
    /// Every alias must be known before any relation is resolved, since a
    /// relation may point into an app graph that comes later in the document.
    pub fn convert(&self, doc: &ModelGraphDocument) -> Result<Conversion> {
        let (vertices, index) = build_vertices(doc);
        debug!("Built {} vertices under {} aliases", vertices.len(), index.len());

        let mut report = ConversionReport {
            app_graphs: doc.graphs.len(),
            models: doc.model_count(),
            vertices: vertices.len(),
            ..Default::default()
        };
        let mut arena = EdgeArena::default();

        for graph in &doc.graphs {
            for model in &graph.models {
                for relation in &model.relations {
                    report.relations += 1;

                    let source = index.resolve(&graph.app_name, &model.name);
                    let dest = index.resolve(&relation.target_app, &relation.target);
                    let (mut source, mut dest) = match (source, dest) {
                        (Some(s), Some(d)) => (&vertices[s], &vertices[d]),
                        _ => {
                            if self.config.strict {
                                return Err(Error::UnresolvedTarget {
                                    app: graph.app_name.clone(),
                                    model: model.name.clone(),
                                    field: relation.name.clone(),
                                    target_app: relation.target_app.clone(),
                                    target: relation.target.clone(),
                                });
                            }
                            let dropped = DroppedRelation {
                                app_name: graph.app_name.clone(),
                                model_name: model.name.clone(),
                                field: relation.name.clone(),
                                target_app: relation.target_app.clone(),
                                target: relation.target.clone(),
                            };
                            warn!("Dropping relation with unknown endpoint: {}", dropped);
                            report.dropped.push(dropped);
                            continue;
                        }
                    };

                    let mut multiplicity = relation.kind.multiplicity();
                    if relation.kind.is_inheritance() {
                        std::mem::swap(&mut source, &mut dest);
                        multiplicity = None;
                        report.inverted_relations += 1;
                    }

                    if arena.add(&relation.kind, source, dest, multiplicity, &relation.name) {
                        trace!(
                            "Merged {} into {} edge {} -> {}",
                            relation.name,
                            relation.kind,
                            source.qualified_name(),
                            dest.qualified_name()
                        );
                        report.merged_relations += 1;
                    }
                }
            }
        }

        let edges = arena.finish();
        report.edges = edges.len();
        debug!("Conversion finished: {}", report);

        Ok(Conversion {
            document: GraphWalkerDocument { vertices, edges },
            report,
        })
    }
}

/// Convert with the default, non-strict configuration
pub fn convert(doc: &ModelGraphDocument) -> Result<GraphWalkerDocument> {
    Converter::default().convert(doc).map(|c| c.document)
}
