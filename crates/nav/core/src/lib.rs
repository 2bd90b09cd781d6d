//! Zone graph and route search shared by every agent in a scene.
//!
//! `nav-core` defines the canonical navigation data (vertices tagged with a
//! passability zone and an interest category) and the pure queries agents run
//! against it. Nothing in this crate performs I/O; loaders live in
//! `nav-content` and the tick loop lives in `runtime`.
//!
//! - [`VertexStore`]: keyed storage with deterministic iteration
//! - [`Graph`]: editing entry points plus spatial and hop-range queries
//! - [`GraphBuilder`]: edit-time construction with validation
//! - [`PathFinder`]: A* with interest/prohibited category filters and retry
pub mod builder;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod path;
pub mod store;
pub mod vertex;

pub use builder::GraphBuilder;
pub use error::GraphError;
pub use geometry::Vec3;
pub use graph::{Graph, HopRange};
pub use path::PathFinder;
pub use store::VertexStore;
pub use vertex::{Category, CategorySet, Color, Vertex, VertexId, ZoneKind};
