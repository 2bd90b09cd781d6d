//! Graph fixture loader.
//!
//! ```text
//! GraphFile(
//!     vertices: [
//!         (id: 0, name: Some("den"), position: (0.0, 0.0, 0.0), category: 2),
//!         (id: 1, position: (1.0, 0.0, 0.0), zone: Blocked),
//!     ],
//!     edges: [(0, 1)],
//! )
//! ```

use std::path::Path;

use nav_core::{Category, Color, Graph, GraphBuilder, Vec3, Vertex, VertexId, ZoneKind};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// One vertex as written in a fixture. Omitted attributes take their defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct VertexSpec {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    pub position: (f32, f32, f32),
    #[serde(default)]
    pub zone: ZoneKind,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub hint: Option<Color>,
}

/// Graph fixture structure for RON files.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphFile {
    pub vertices: Vec<VertexSpec>,
    #[serde(default)]
    pub edges: Vec<(u32, u32)>,
}

impl GraphFile {
    /// Validates the description and builds the graph.
    pub fn into_graph(self) -> LoadResult<Graph> {
        let mut builder = GraphBuilder::new();
        for spec in self.vertices {
            let id = VertexId(spec.id);
            let (x, y, z) = spec.position;
            let mut vertex = Vertex::new(id, Vec3::new(x, y, z))
                .with_zone(spec.zone)
                .with_category(spec.category);
            if let Some(name) = spec.name {
                vertex = vertex.with_name(name);
            }
            if let Some(hint) = spec.hint {
                vertex = vertex.with_hint(hint);
            }
            builder.push(vertex);
        }
        for (a, b) in self.edges {
            builder.edge(VertexId(a), VertexId(b));
        }

        builder
            .build()
            .map_err(|e| anyhow::anyhow!("Invalid graph description: {}", e))
    }
}

/// Loader for graph fixtures from RON files.
pub struct GraphLoader;

impl GraphLoader {
    /// Load a graph from a RON file.
    pub fn load(path: &Path) -> LoadResult<Graph> {
        let content = read_file(path)?;
        let graph = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            vertices = graph.len(),
            "graph fixture loaded"
        );
        Ok(graph)
    }

    /// Parse a graph from RON text.
    pub fn parse(content: &str) -> LoadResult<Graph> {
        let file: GraphFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse graph RON: {}", e))?;
        file.into_graph()
    }
}
