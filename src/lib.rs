//! # modelgraph
//!
//! Converts Django model graphs into GraphWalker vertex/edge documents.
//!
//! The input is the JSON written by django-extensions `graph_models --json`:
//! app graphs, each holding models and their typed relations. The output is a
//! flat list of vertices (one per model, with ids hashed from the qualified
//! model name) and edges (one per distinct source, destination and relation
//! type, with parallel relations merged into a single labeled edge).
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! python manage.py graph_models --json -a > models.json
//! modelgraph models.json > graphwalker.json
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use modelgraph::prelude::*;
//!
//! let doc = modelgraph::io::read_document("models.json").unwrap();
//! let conversion = Converter::new(ConverterConfig { strict: false })
//!     .convert(&doc)
//!     .unwrap();
//!
//! println!("{}", conversion.report);
//! let json = modelgraph::io::to_string(&conversion.document, true).unwrap();
//! ```
//!
//! ## Crate Structure
//!
//! - [`modelgraph-core`](https://docs.rs/modelgraph-core) - Input schema, output graph, conversion
//!
//! ## Conversion rules
//!
//! - **Dual aliases**: a model resolves under its app graph's name and under its own `app_name`
//! - **Multiplicity**: `ForeignKey` → `*..1`, `ManyToManyField` → `*..*`, `OneToOneField` → `1..1`
//! - **Inheritance**: edges point from the base class to the subclass
//! - **Merging**: relations sharing source, destination and type become one edge
//! - **Dangling targets**: dropped and reported, or rejected in strict mode

// Re-export core types
pub use modelgraph_core::{
    convert, Conversion, Converter, ConverterConfig,
    ModelGraphDocument, AppGraph, Model, Relation, RelationKind, Multiplicity,
    GraphWalkerDocument, Vertex, VertexProperties, Edge, EdgeProperties,
    ConversionReport, DroppedRelation,
    Error, Result,
};

/// Document I/O helpers
pub mod io {
    pub use modelgraph_core::io::{from_reader, from_str, read_document, to_string, write_document};
}

/// Deterministic id helpers
pub mod id {
    pub use modelgraph_core::id::{digest, edge_id, qualified_name, vertex_id};
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        convert, Conversion, Converter, ConverterConfig,
        ModelGraphDocument, AppGraph, Model, Relation, RelationKind, Multiplicity,
        GraphWalkerDocument, Vertex, Edge,
        ConversionReport,
        Error, Result,
    };
}
