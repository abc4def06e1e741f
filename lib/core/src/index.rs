// Alias index: (namespace, model name) -> position in the vertex list
use ahash::AHashMap;
use crate::graph::Vertex;
use crate::schema::ModelGraphDocument;

/// Composite lookup key for a model
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelKey {
    pub app_name: String,
    pub model_name: String,
}

impl ModelKey {
    pub fn new(app_name: &str, model_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            model_name: model_name.to_string(),
        }
    }
}

/// Maps every alias of a model to the index of its vertex.
///
/// The vertex list owns the vertices; the index only stores positions
/// into it, so two aliases of one model always land on the same vertex.
#[derive(Debug, Default)]
pub struct AliasIndex {
    positions: AHashMap<ModelKey, usize>,
}

impl AliasIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later inserts for the same key win
    pub fn insert(&mut self, key: ModelKey, position: usize) -> Option<usize> {
        self.positions.insert(key, position)
    }

    pub fn resolve(&self, app_name: &str, model_name: &str) -> Option<usize> {
        self.positions.get(&ModelKey::new(app_name, model_name)).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// First pass: one vertex per model in document order, plus the alias index
pub fn build_vertices(doc: &ModelGraphDocument) -> (Vec<Vertex>, AliasIndex) {
    let mut vertices = Vec::with_capacity(doc.model_count());
    let mut index = AliasIndex::new();

    for graph in &doc.graphs {
        for model in &graph.models {
            let position = vertices.len();
            vertices.push(Vertex::new(
                &graph.app_name,
                &model.app_name,
                &model.name,
                model.base_classes().to_vec(),
            ));

            index.insert(ModelKey::new(&graph.app_name, &model.name), position);
            index.insert(ModelKey::new(&model.app_name, &model.name), position);
        }
    }

    (vertices, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id;
    use crate::schema::{AppGraph, Model};

    #[test]
    fn test_both_aliases_resolve_to_same_vertex() {
        let doc = ModelGraphDocument::new(vec![
            AppGraph::new("blog").with_model(Model::new("content", "Author")),
        ]);
        let (vertices, index) = build_vertices(&doc);

        assert_eq!(vertices.len(), 1);
        assert_eq!(index.len(), 2);
        let via_graph = index.resolve("blog", "Author").unwrap();
        let via_model = index.resolve("content", "Author").unwrap();
        assert_eq!(via_graph, via_model);
        assert_eq!(vertices[via_graph].id, id::digest("blog.Author"));
        assert_eq!(vertices[via_graph].properties.internal_app_name, "content");
        assert!(index.resolve("blog", "Post").is_none());
    }

    #[test]
    fn test_duplicate_models_keep_both_vertices() {
        let doc = ModelGraphDocument::new(vec![
            AppGraph::new("blog")
                .with_model(Model::new("blog", "Post").with_abstracts(vec!["First".to_string()]))
                .with_model(Model::new("blog", "Post").with_abstracts(vec!["Second".to_string()])),
        ]);
        let (vertices, index) = build_vertices(&doc);

        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0].id, vertices[1].id);
        assert_eq!(index.len(), 1);
        // the later model owns the alias
        assert_eq!(index.resolve("blog", "Post"), Some(1));
    }

    #[test]
    fn test_vertices_follow_document_order() {
        let doc = ModelGraphDocument::new(vec![
            AppGraph::new("b").with_model(Model::new("b", "Z")).with_model(Model::new("b", "A")),
            AppGraph::new("a").with_model(Model::new("a", "M")),
        ]);
        let (vertices, _) = build_vertices(&doc);
        let names: Vec<_> = vertices.iter().map(|v| v.qualified_name()).collect();
        assert_eq!(names, ["b.Z", "b.A", "a.M"]);
    }
}
