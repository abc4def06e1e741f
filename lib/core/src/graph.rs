// GraphWalker output document - vertices and edges
use serde::{Deserialize, Serialize};
use crate::id;
use crate::relation::{Multiplicity, RelationKind};

pub type VertexId = String;
pub type EdgeId = String;

/// Output document handed to the serializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphWalkerDocument {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vertex {
    pub id: VertexId,
    pub label: String,
    /// `[appName, modelName]`
    pub searchable_components: Vec<String>,
    pub properties: VertexProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexProperties {
    pub internal_app_name: String,
    pub app_name: String,
    pub model_name: String,
    pub base_classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: VertexId,
    pub dest: VertexId,
    pub label: String,
    pub properties: EdgeProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeProperties {
    #[serde(rename = "type")]
    pub kind: RelationKind,
    pub multiplicity: Option<Multiplicity>,
    /// Field names of every relation merged into this edge, in document order
    pub fields: Vec<String>,
}

impl Vertex {
    /// Vertex for `model_name` inside app graph `app_name`, whose own
    /// declared app label is `internal_app_name`
    #[must_use]
    pub fn new(app_name: &str, internal_app_name: &str, model_name: &str, base_classes: Vec<String>) -> Self {
        Self {
            id: id::vertex_id(app_name, model_name),
            label: model_name.to_string(),
            searchable_components: vec![app_name.to_string(), model_name.to_string()],
            properties: VertexProperties {
                internal_app_name: internal_app_name.to_string(),
                app_name: app_name.to_string(),
                model_name: model_name.to_string(),
                base_classes,
            },
        }
    }

    pub fn qualified_name(&self) -> String {
        id::qualified_name(&self.properties.app_name, &self.properties.model_name)
    }
}

impl Edge {
    /// A fresh edge carrying a single field; the label stays empty until
    /// [`Edge::finalize_label`] runs
    #[must_use]
    pub fn new(
        kind: RelationKind,
        source: VertexId,
        dest: VertexId,
        multiplicity: Option<Multiplicity>,
        field: String,
    ) -> Self {
        Self {
            id: id::edge_id(kind.as_str(), &source, &dest),
            source,
            dest,
            label: String::new(),
            properties: EdgeProperties {
                kind,
                multiplicity,
                fields: vec![field],
            },
        }
    }

    #[inline]
    pub fn push_field(&mut self, field: String) {
        self.properties.fields.push(field);
    }

    /// `"author, editor (*..1)"`, or just the joined fields when there is
    /// no multiplicity
    pub fn render_label(&self) -> String {
        let fields = self.properties.fields.join(", ");
        match self.properties.multiplicity {
            Some(m) => format!("{} ({})", fields, m),
            None => fields,
        }
    }

    pub fn finalize_label(&mut self) {
        self.label = self.render_label();
    }
}

impl GraphWalkerDocument {
    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    pub fn edges_from<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.source == source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vertex_serializes_camel_case() {
        let v = Vertex::new("blog", "content", "Author", vec![]);
        let value = serde_json::to_value(&v).unwrap();
        assert_eq!(value["label"], "Author");
        assert_eq!(value["searchableComponents"], json!(["blog", "Author"]));
        assert_eq!(value["properties"]["internalAppName"], "content");
        assert_eq!(value["properties"]["appName"], "blog");
        assert_eq!(value["properties"]["baseClasses"], json!([]));
        assert_eq!(v.qualified_name(), "blog.Author");
    }

    #[test]
    fn test_edge_label_with_and_without_multiplicity() {
        let mut e = Edge::new(
            RelationKind::ForeignKey,
            "a".to_string(),
            "b".to_string(),
            Some(Multiplicity::ManyToOne),
            "author".to_string(),
        );
        e.push_field("editor".to_string());
        e.finalize_label();
        assert_eq!(e.label, "author, editor (*..1)");

        let mut inh = Edge::new(RelationKind::Inheritance, "b".to_string(), "a".to_string(), None, "base_ptr".to_string());
        inh.finalize_label();
        assert_eq!(inh.label, "base_ptr");
    }

    #[test]
    fn test_absent_multiplicity_serializes_as_null() {
        let e = Edge::new(RelationKind::Inheritance, "b".to_string(), "a".to_string(), None, "ptr".to_string());
        let value = serde_json::to_value(&e).unwrap();
        assert!(value["properties"]["multiplicity"].is_null());
        assert_eq!(value["properties"]["type"], "inheritance");
        assert_eq!(value["properties"]["fields"], json!(["ptr"]));
    }
}
