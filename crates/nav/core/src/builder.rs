//! Edit-time graph construction.
//!
//! The builder collects vertices and edges without caring about order and
//! only checks consistency once, in [`GraphBuilder::build`]. The resulting
//! [`Graph`] is what agents read at runtime.
//!
//! # Example
//!
//! ```
//! use nav_core::{Category, GraphBuilder, Vec3};
//!
//! let mut builder = GraphBuilder::new();
//! let den = builder.vertex(Vec3::planar(0.0, 0.0));
//! let bush = builder.vertex(Vec3::planar(3.0, 0.0));
//! builder.category(bush, Category::FOOD).edge(den, bush);
//!
//! let graph = builder.build().unwrap();
//! assert_eq!(graph.len(), 2);
//! ```

use crate::error::GraphError;
use crate::geometry::Vec3;
use crate::graph::Graph;
use crate::vertex::{Category, Color, Vertex, VertexId, ZoneKind};

#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    vertices: Vec<Vertex>,
    edges: Vec<(VertexId, VertexId)>,
    next_id: u32,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex with the next free id.
    pub fn vertex(&mut self, position: Vec3) -> VertexId {
        let id = VertexId(self.next_id);
        self.push(Vertex::new(id, position));
        id
    }

    /// Adds a fully specified vertex. Its neighbor list is ignored; use
    /// [`GraphBuilder::edge`] for connectivity.
    pub fn push(&mut self, mut vertex: Vertex) -> &mut Self {
        self.next_id = self.next_id.max(vertex.id.0.saturating_add(1));
        vertex.neighbors.clear();
        self.vertices.push(vertex);
        self
    }

    pub fn edge(&mut self, a: VertexId, b: VertexId) -> &mut Self {
        self.edges.push((a, b));
        self
    }

    pub fn name(&mut self, id: VertexId, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.with_vertex(id, |v| v.name = name)
    }

    pub fn zone(&mut self, id: VertexId, zone: ZoneKind) -> &mut Self {
        self.with_vertex(id, |v| v.zone = zone)
    }

    pub fn category(&mut self, id: VertexId, category: Category) -> &mut Self {
        self.with_vertex(id, |v| v.category = category)
    }

    pub fn hint(&mut self, id: VertexId, hint: Color) -> &mut Self {
        self.with_vertex(id, |v| v.hint = Some(hint))
    }

    fn with_vertex(&mut self, id: VertexId, edit: impl FnOnce(&mut Vertex)) -> &mut Self {
        // Later pushes with the same id win in `build`, so edit the last one.
        if let Some(vertex) = self.vertices.iter_mut().rev().find(|v| v.id == id) {
            edit(vertex);
        }
        self
    }

    /// Validates the accumulated description and produces a graph.
    ///
    /// Fails on duplicate vertex ids, edges to unknown vertices and self loops.
    pub fn build(self) -> Result<Graph, GraphError> {
        let mut graph = Graph::from_vertices(self.vertices)?;
        for (a, b) in self.edges {
            graph.add_edge(a, b)?;
        }
        tracing::debug!(
            vertices = graph.len(),
            edges = graph.edges().count(),
            "graph built"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_connects_edges_symmetrically() {
        let mut builder = GraphBuilder::new();
        let a = builder.vertex(Vec3::ZERO);
        let b = builder.vertex(Vec3::planar(1.0, 0.0));
        builder.edge(a, b).edge(b, a);

        let graph = builder.build().unwrap();
        assert_eq!(graph.vertex(a).unwrap().neighbors, vec![b]);
        assert_eq!(graph.vertex(b).unwrap().neighbors, vec![a]);
    }

    #[test]
    fn build_rejects_edge_to_unknown_vertex() {
        let mut builder = GraphBuilder::new();
        let a = builder.vertex(Vec3::ZERO);
        builder.edge(a, VertexId(5));

        assert_eq!(
            builder.build().unwrap_err(),
            GraphError::VertexNotFound(VertexId(5))
        );
    }

    #[test]
    fn build_rejects_duplicate_ids() {
        let mut builder = GraphBuilder::new();
        builder
            .push(Vertex::new(VertexId(1), Vec3::ZERO))
            .push(Vertex::new(VertexId(1), Vec3::ZERO));

        assert_eq!(
            builder.build().unwrap_err(),
            GraphError::DuplicateVertex(VertexId(1))
        );
    }

    #[test]
    fn explicit_ids_advance_the_counter() {
        let mut builder = GraphBuilder::new();
        builder.push(Vertex::new(VertexId(10), Vec3::ZERO));
        assert_eq!(builder.vertex(Vec3::ZERO), VertexId(11));
    }

    #[test]
    fn attribute_setters_apply() {
        let mut builder = GraphBuilder::new();
        let a = builder.vertex(Vec3::ZERO);
        builder
            .name(a, "den")
            .zone(a, ZoneKind::Custom(3))
            .category(a, Category::HOME)
            .hint(a, Color::rgb(0, 255, 0));

        let graph = builder.build().unwrap();
        let vertex = graph.vertex(a).unwrap();
        assert_eq!(vertex.name, "den");
        assert_eq!(vertex.zone, ZoneKind::Custom(3));
        assert_eq!(vertex.category, Category::HOME);
        assert_eq!(vertex.hint, Some(Color::rgb(0, 255, 0)));
    }
}
