//! Data-driven graph fixtures and their loaders.
//!
//! Graph layouts for demos and tests are described in RON and turned into
//! [`nav_core::Graph`] values through [`nav_core::GraphBuilder`], so every
//! loaded graph passes the same validation as a hand-built one.
//!
//! The fixture format here is a tooling convenience; it is not how scenes
//! embed their graphs.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, GraphFile, GraphLoader, LoadResult, VertexSpec};
