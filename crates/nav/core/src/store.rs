//! Keyed vertex storage.
use std::collections::HashMap;

use crate::vertex::{Vertex, VertexId};

/// Hash map from [`VertexId`] to [`Vertex`] that remembers insertion order.
///
/// Lookups and upserts are O(1) amortized. Iteration follows the order in
/// which ids were first inserted; replacing a vertex keeps its slot. Scans
/// that resolve ties by "first encountered" therefore behave the same on
/// every run.
#[derive(Clone, Debug, Default)]
pub struct VertexStore {
    vertices: HashMap<VertexId, Vertex>,
    order: Vec<VertexId>,
}

impl VertexStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `vertex` under its own id, replacing any previous record.
    ///
    /// Returns the replaced vertex, if there was one.
    pub fn upsert(&mut self, vertex: Vertex) -> Option<Vertex> {
        let id = vertex.id;
        let previous = self.vertices.insert(id, vertex);
        if previous.is_none() {
            self.order.push(id);
        }
        previous
    }

    pub fn get(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(&id)
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Point-in-time copy of every vertex, in insertion order.
    pub fn all(&self) -> Vec<Vertex> {
        self.iter().cloned().collect()
    }

    /// Borrowing iterator in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.order.iter().filter_map(|id| self.vertices.get(id))
    }

    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
