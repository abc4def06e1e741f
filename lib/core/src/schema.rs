// Input document: the JSON emitted by django-extensions `graph_models --json`
use serde::{Deserialize, Serialize};
use crate::relation::RelationKind;

/// Top-level input document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelGraphDocument {
    pub graphs: Vec<AppGraph>,
}

/// All models of one Django app
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppGraph {
    pub app_name: String,
    pub models: Vec<Model>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    /// App label the model declares for itself; may differ from the
    /// enclosing [`AppGraph::app_name`]
    pub app_name: String,
    /// Base class names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abstracts: Option<Vec<String>>,
    pub relations: Vec<Relation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relation {
    #[serde(rename = "type")]
    pub kind: RelationKind,
    /// Field or attribute name on the owning model
    pub name: String,
    pub target_app: String,
    pub target: String,
}

impl ModelGraphDocument {
    pub fn new(graphs: Vec<AppGraph>) -> Self {
        Self { graphs }
    }

    pub fn model_count(&self) -> usize {
        self.graphs.iter().map(|g| g.models.len()).sum()
    }

    pub fn relation_count(&self) -> usize {
        self.graphs
            .iter()
            .flat_map(|g| g.models.iter())
            .map(|m| m.relations.len())
            .sum()
    }
}

impl AppGraph {
    #[inline]
    #[must_use]
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            models: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_model(mut self, model: Model) -> Self {
        self.models.push(model);
        self
    }
}

impl Model {
    #[inline]
    #[must_use]
    pub fn new(app_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            app_name: app_name.into(),
            abstracts: None,
            relations: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_abstracts(mut self, abstracts: Vec<String>) -> Self {
        self.abstracts = Some(abstracts);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }

    /// Base class names, empty when none were declared
    pub fn base_classes(&self) -> &[String] {
        self.abstracts.as_deref().unwrap_or(&[])
    }
}

impl Relation {
    #[inline]
    #[must_use]
    pub fn new(
        kind: RelationKind,
        name: impl Into<String>,
        target_app: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            target_app: target_app.into(),
            target: target.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_exporter_output() {
        // graph_models emits plenty of keys the converter never reads
        let raw = json!({
            "created_at": "2024-01-01 00:00",
            "graphs": [{
                "app_name": "blog",
                "cluster_app_name": "cluster_blog",
                "models": [{
                    "name": "Post",
                    "app_name": "blog",
                    "label": "Post",
                    "abstracts": ["TimeStampedModel"],
                    "fields": [{"name": "id", "type": "AutoField"}],
                    "relations": [{
                        "type": "ForeignKey",
                        "name": "author",
                        "target_app": "blog",
                        "target": "Author",
                        "arrows": "[arrowhead=none, arrowtail=dot]",
                        "needs_node": false
                    }]
                }]
            }]
        });

        let doc: ModelGraphDocument = serde_json::from_value(raw).unwrap();
        assert_eq!(doc.model_count(), 1);
        assert_eq!(doc.relation_count(), 1);

        let post = &doc.graphs[0].models[0];
        assert_eq!(post.base_classes(), ["TimeStampedModel".to_string()]);
        assert_eq!(post.relations[0].kind, RelationKind::ForeignKey);
        assert_eq!(post.relations[0].target, "Author");
    }

    #[test]
    fn test_missing_relations_is_rejected() {
        let raw = json!({
            "graphs": [{"app_name": "blog", "models": [{"name": "Post", "app_name": "blog"}]}]
        });
        assert!(serde_json::from_value::<ModelGraphDocument>(raw).is_err());
    }

    #[test]
    fn test_abstracts_default_to_empty() {
        let raw = json!({"name": "Author", "app_name": "blog", "relations": []});
        let model: Model = serde_json::from_value(raw).unwrap();
        assert!(model.base_classes().is_empty());
    }
}
