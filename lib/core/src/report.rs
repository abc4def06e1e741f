use std::fmt;

/// A relation that produced no edge because an endpoint was unknown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedRelation {
    pub app_name: String,
    pub model_name: String,
    pub field: String,
    pub target_app: String,
    pub target: String,
}

impl fmt::Display for DroppedRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{} -> {}.{}",
            self.app_name, self.model_name, self.field, self.target_app, self.target
        )
    }
}

/// Statistics gathered during one conversion.
///
/// Never part of the output document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub app_graphs: usize,
    pub models: usize,
    pub vertices: usize,
    pub relations: usize,
    pub edges: usize,
    /// Relations folded into an edge that already existed
    pub merged_relations: usize,
    /// Inheritance relations whose direction was swapped
    pub inverted_relations: usize,
    pub dropped: Vec<DroppedRelation>,
}

impl ConversionReport {
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    pub fn is_lossless(&self) -> bool {
        self.dropped.is_empty()
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} app graphs, {} models -> {} vertices; {} relations -> {} edges ({} merged, {} inverted, {} dropped)",
            self.app_graphs,
            self.models,
            self.vertices,
            self.relations,
            self.edges,
            self.merged_relations,
            self.inverted_relations,
            self.dropped.len()
        )
    }
}
