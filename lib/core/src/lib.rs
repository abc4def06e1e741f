//! # modelgraph Core
//!
//! Converts the JSON model graph written by django-extensions
//! `graph_models --json` into a GraphWalker vertex/edge document.
//!
//! - [`ModelGraphDocument`] - parsed input: app graphs, models, relations
//! - [`GraphWalkerDocument`] - output: hashed vertices and merged edges
//! - [`Converter`] - the two-pass conversion (vertices first, then edges)
//! - [`ConversionReport`] - counts and dangling relations from one run
//!
//! ## Example
//!
//! ```rust
//! use modelgraph_core::{convert, AppGraph, Model, ModelGraphDocument, Relation, RelationKind};
//!
//! let doc = ModelGraphDocument::new(vec![
//!     AppGraph::new("blog")
//!         .with_model(Model::new("blog", "Post").with_relation(Relation::new(
//!             RelationKind::ForeignKey,
//!             "author",
//!             "blog",
//!             "Author",
//!         )))
//!         .with_model(Model::new("blog", "Author")),
//! ]);
//!
//! let out = convert(&doc).unwrap();
//! assert_eq!(out.vertices.len(), 2);
//! assert_eq!(out.edges[0].label, "author (*..1)");
//! ```

pub mod convert;
pub mod error;
pub mod graph;
pub mod id;
pub mod index;
pub mod io;
pub mod relation;
pub mod report;
pub mod schema;

pub use convert::{convert, Conversion, Converter, ConverterConfig};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, EdgeProperties, GraphWalkerDocument, Vertex, VertexId, VertexProperties};
pub use index::{AliasIndex, ModelKey};
pub use relation::{Multiplicity, RelationKind};
pub use report::{ConversionReport, DroppedRelation};
pub use schema::{AppGraph, Model, ModelGraphDocument, Relation};
