//! The zone graph and its neighbor-aware queries.
use std::collections::{HashSet, VecDeque};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::GraphError;
use crate::geometry::Vec3;
use crate::store::VertexStore;
use crate::vertex::{Category, Vertex, VertexId};

/// How [`Graph::vertices_in_hop_range`] treats depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HopRange {
    /// Every vertex whose shortest hop distance is `<= hops`, start included.
    #[default]
    UpTo,
    /// Only vertices whose shortest hop distance is exactly `hops`.
    Exact,
}

/// Undirected spatial graph of typed vertices.
///
/// The graph is populated by an editing flow (`add_vertex`, `add_edge`,
/// `update_vertex`) and read by any number of agents afterwards. Vertices are
/// never removed, and ids come from a counter that only moves forward.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    store: VertexStore,
    next_id: u32,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from complete vertex records and validates it.
    ///
    /// The id counter starts one past the largest id seen. An id of
    /// `u32::MAX` is rejected.
    pub fn from_vertices(vertices: impl IntoIterator<Item = Vertex>) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for vertex in vertices {
            let id = vertex.id;
            let next = id.0.checked_add(1).ok_or(GraphError::IdSpaceExhausted(id))?;
            if graph.store.upsert(vertex).is_some() {
                return Err(GraphError::DuplicateVertex(id));
            }
            graph.next_id = graph.next_id.max(next);
        }
        graph.validate()?;
        Ok(graph)
    }

    // ========================================================================
    // Editing
    // ========================================================================

    /// Allocates the next id and stores a fresh vertex at `position`.
    ///
    /// Fails once every id below `u32::MAX` has been handed out.
    pub fn add_vertex(&mut self, position: Vec3) -> Result<VertexId, GraphError> {
        let id = VertexId(self.next_id);
        if self.next_id == u32::MAX {
            return Err(GraphError::IdSpaceExhausted(id));
        }
        self.next_id += 1;
        self.store.upsert(Vertex::new(id, position));
        tracing::trace!(%id, %position, "vertex added");
        Ok(id)
    }

    /// Connects `a` and `b` in both directions.
    ///
    /// Each side is only appended if missing, so repeated calls are no-ops.
    /// Returns `true` if either neighbor list changed.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<bool, GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        if !self.store.contains(a) {
            return Err(GraphError::VertexNotFound(a));
        }
        if !self.store.contains(b) {
            return Err(GraphError::VertexNotFound(b));
        }

        let mut changed = false;
        for (from, to) in [(a, b), (b, a)] {
            let vertex = self
                .store
                .get_mut(from)
                .ok_or(GraphError::VertexNotFound(from))?;
            if !vertex.neighbors.contains(&to) {
                vertex.neighbors.push(to);
                changed = true;
            }
        }
        Ok(changed)
    }

    /// Edits the attributes of an existing vertex.
    ///
    /// Id and neighbor list are restored after `edit` runs; edges can only be
    /// created through [`Graph::add_edge`].
    pub fn update_vertex(
        &mut self,
        id: VertexId,
        edit: impl FnOnce(&mut Vertex),
    ) -> Result<(), GraphError> {
        let vertex = self.store.get_mut(id).ok_or(GraphError::VertexNotFound(id))?;
        let neighbors = std::mem::take(&mut vertex.neighbors);
        edit(vertex);
        vertex.id = id;
        vertex.neighbors = neighbors;
        Ok(())
    }

    /// Checks that every neighbor exists and that every edge is mirrored.
    pub fn validate(&self) -> Result<(), GraphError> {
        for vertex in self.store.iter() {
            for &neighbor in &vertex.neighbors {
                if neighbor == vertex.id {
                    return Err(GraphError::SelfLoop(vertex.id));
                }
                let other = self
                    .store
                    .get(neighbor)
                    .ok_or(GraphError::DanglingNeighbor {
                        vertex: vertex.id,
                        neighbor,
                    })?;
                if !other.is_adjacent_to(vertex.id) {
                    return Err(GraphError::AsymmetricEdge {
                        from: vertex.id,
                        to: neighbor,
                    });
                }
            }
        }
        Ok(())
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.store.get(id)
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.store.contains(id)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.store.iter()
    }

    /// Snapshot list of all vertices.
    pub fn all_vertices(&self) -> Vec<Vertex> {
        self.store.all()
    }

    /// Neighbors of `id` that still resolve to a vertex. Stale ids are skipped.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = &Vertex> + '_ {
        self.store
            .get(id)
            .into_iter()
            .flat_map(|vertex| vertex.neighbors.iter())
            .filter_map(|neighbor| self.store.get(*neighbor))
    }

    /// Every undirected edge once, as `(lower id, higher id)`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.store.iter().flat_map(|vertex| {
            vertex
                .neighbors
                .iter()
                .filter(move |neighbor| **neighbor > vertex.id)
                .map(move |neighbor| (vertex.id, *neighbor))
        })
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The id the next `add_vertex` call will hand out.
    pub fn next_id(&self) -> VertexId {
        VertexId(self.next_id)
    }

    // ========================================================================
    // Spatial queries
    // ========================================================================

    /// Nearest passable vertex to `point`.
    ///
    /// Ties keep the first vertex in iteration order.
    pub fn find_closest_vertex(&self, point: Vec3) -> Option<&Vertex> {
        self.closest_matching(point, |_| true)
    }

    /// Nearest passable vertex of the given category.
    pub fn find_closest_vertex_of_category(
        &self,
        point: Vec3,
        category: Category,
    ) -> Option<&Vertex> {
        self.closest_matching(point, |vertex| vertex.category == category)
    }

    fn closest_matching(
        &self,
        point: Vec3,
        predicate: impl Fn(&Vertex) -> bool,
    ) -> Option<&Vertex> {
        let mut best: Option<(&Vertex, f32)> = None;
        for vertex in self.store.iter() {
            if vertex.is_blocked() || !predicate(vertex) {
                continue;
            }
            let distance = vertex.distance_to(point);
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((vertex, distance)),
            }
        }
        best.map(|(vertex, _)| vertex)
    }

    /// Breadth-first expansion from `start`, counted in edges.
    ///
    /// Results are in discovery order. Passability is ignored: this answers
    /// "what is topologically near", which is what the sensors need.
    pub fn vertices_in_hop_range(
        &self,
        start: VertexId,
        hops: usize,
        range: HopRange,
    ) -> Vec<&Vertex> {
        let Some(origin) = self.store.get(start) else {
            return Vec::new();
        };

        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([(origin, 0usize)]);
        let mut found = Vec::new();

        while let Some((vertex, depth)) = queue.pop_front() {
            let keep = match range {
                HopRange::UpTo => true,
                HopRange::Exact => depth == hops,
            };
            if keep {
                found.push(vertex);
            }
            if depth == hops {
                continue;
            }
            for neighbor in self.neighbors(vertex.id) {
                if seen.insert(neighbor.id) {
                    queue.push_back((neighbor, depth + 1));
                }
            }
        }

        found
    }

    /// Uniformly random passable vertex, or `None` if there is none.
    pub fn random_vertex<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Vertex> {
        let passable: Vec<&Vertex> = self.store.iter().filter(|v| !v.is_blocked()).collect();
        passable.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::ZoneKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// 0 - 1 - 2 - 3 on the x axis, one unit apart.
    fn line(n: u32) -> Graph {
        let mut graph = Graph::new();
        for i in 0..n {
            graph.add_vertex(Vec3::planar(i as f32, 0.0)).unwrap();
        }
        for i in 1..n {
            graph.add_edge(VertexId(i - 1), VertexId(i)).unwrap();
        }
        graph
    }

    #[test]
    fn add_vertex_allocates_sequential_ids() {
        let mut graph = Graph::new();
        assert_eq!(graph.add_vertex(Vec3::ZERO), Ok(VertexId(0)));
        assert_eq!(graph.add_vertex(Vec3::ZERO), Ok(VertexId(1)));
        assert_eq!(graph.next_id(), VertexId(2));
    }

    #[test]
    fn from_vertices_continues_after_largest_id() {
        let graph = Graph::from_vertices([
            Vertex::new(VertexId(7), Vec3::ZERO),
            Vertex::new(VertexId(2), Vec3::ZERO),
        ])
        .unwrap();
        assert_eq!(graph.next_id(), VertexId(8));
    }

    #[test]
    fn max_id_is_rejected() {
        let err =
            Graph::from_vertices([Vertex::new(VertexId(u32::MAX), Vec3::ZERO)]).unwrap_err();
        assert_eq!(err, GraphError::IdSpaceExhausted(VertexId(u32::MAX)));
    }

    #[test]
    fn exhausted_ids_never_overwrite() {
        let last = VertexId(u32::MAX - 1);
        let mut graph =
            Graph::from_vertices([Vertex::new(last, Vec3::ZERO).with_name("keep")]).unwrap();

        assert_eq!(
            graph.add_vertex(Vec3::planar(1.0, 0.0)),
            Err(GraphError::IdSpaceExhausted(VertexId(u32::MAX)))
        );
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.vertex(last).unwrap().name, "keep");
        assert!(graph.vertex(VertexId(0)).is_none());
    }

    #[test]
    fn add_edge_is_symmetric_and_idempotent() {
        let mut graph = line(2);
        let a = VertexId(0);
        let b = VertexId(1);

        assert!(!graph.add_edge(a, b).unwrap());
        assert!(!graph.add_edge(b, a).unwrap());

        assert_eq!(graph.vertex(a).unwrap().neighbors, vec![b]);
        assert_eq!(graph.vertex(b).unwrap().neighbors, vec![a]);
    }

    #[test]
    fn add_edge_rejects_unknown_and_self() {
        let mut graph = line(1);
        assert_eq!(
            graph.add_edge(VertexId(0), VertexId(9)),
            Err(GraphError::VertexNotFound(VertexId(9)))
        );
        assert_eq!(
            graph.add_edge(VertexId(0), VertexId(0)),
            Err(GraphError::SelfLoop(VertexId(0)))
        );
    }

    #[test]
    fn update_vertex_keeps_neighbors() {
        let mut graph = line(2);
        graph
            .update_vertex(VertexId(0), |v| {
                v.zone = ZoneKind::Blocked;
                v.neighbors.clear();
                v.id = VertexId(99);
            })
            .unwrap();

        let vertex = graph.vertex(VertexId(0)).unwrap();
        assert!(vertex.is_blocked());
        assert_eq!(vertex.neighbors, vec![VertexId(1)]);
        assert!(graph.vertex(VertexId(99)).is_none());
    }

    #[test]
    fn closest_vertex_skips_blocked() {
        let mut graph = line(3);
        graph
            .update_vertex(VertexId(0), |v| v.zone = ZoneKind::Blocked)
            .unwrap();

        let closest = graph.find_closest_vertex(Vec3::planar(-5.0, 0.0)).unwrap();
        assert_eq!(closest.id, VertexId(1));
    }

    #[test]
    fn closest_vertex_none_when_everything_blocked() {
        let mut graph = line(2);
        for id in [VertexId(0), VertexId(1)] {
            graph.update_vertex(id, |v| v.zone = ZoneKind::Blocked).unwrap();
        }
        assert!(graph.find_closest_vertex(Vec3::ZERO).is_none());
        assert!(Graph::new().find_closest_vertex(Vec3::ZERO).is_none());
    }

    #[test]
    fn closest_vertex_tie_keeps_first() {
        let mut graph = Graph::new();
        graph.add_vertex(Vec3::planar(1.0, 0.0)).unwrap();
        graph.add_vertex(Vec3::planar(-1.0, 0.0)).unwrap();
        assert_eq!(graph.find_closest_vertex(Vec3::ZERO).unwrap().id, VertexId(0));
    }

    #[test]
    fn closest_of_category_filters() {
        let mut graph = line(4);
        graph
            .update_vertex(VertexId(3), |v| v.category = Category::FOOD)
            .unwrap();

        let food = graph
            .find_closest_vertex_of_category(Vec3::ZERO, Category::FOOD)
            .unwrap();
        assert_eq!(food.id, VertexId(3));
        assert!(
            graph
                .find_closest_vertex_of_category(Vec3::ZERO, Category::WATER)
                .is_none()
        );
    }

    #[test]
    fn closest_of_category_skips_blocked() {
        let mut graph = line(4);
        for id in [1, 3] {
            graph
                .update_vertex(VertexId(id), |v| v.category = Category::FOOD)
                .unwrap();
        }
        graph
            .update_vertex(VertexId(1), |v| v.zone = ZoneKind::Blocked)
            .unwrap();

        let food = graph
            .find_closest_vertex_of_category(Vec3::ZERO, Category::FOOD)
            .unwrap();
        assert_eq!(food.id, VertexId(3));

        graph
            .update_vertex(VertexId(3), |v| v.zone = ZoneKind::Blocked)
            .unwrap();
        assert!(
            graph
                .find_closest_vertex_of_category(Vec3::ZERO, Category::FOOD)
                .is_none()
        );
    }

    #[test]
    fn hop_range_up_to_includes_start() {
        let graph = line(5);
        let ids: Vec<_> = graph
            .vertices_in_hop_range(VertexId(0), 2, HopRange::UpTo)
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec![VertexId(0), VertexId(1), VertexId(2)]);
    }

    #[test]
    fn hop_range_exact_uses_shortest_distance() {
        // Triangle 0-1-2 plus tail 2-3: vertex 2 is one hop away, not two.
        let mut graph = line(4);
        graph.add_edge(VertexId(0), VertexId(2)).unwrap();

        let ids: Vec<_> = graph
            .vertices_in_hop_range(VertexId(0), 2, HopRange::Exact)
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec![VertexId(3)]);
    }

    #[test]
    fn hop_range_unknown_start_is_empty() {
        let graph = line(2);
        assert!(
            graph
                .vertices_in_hop_range(VertexId(10), 3, HopRange::UpTo)
                .is_empty()
        );
    }

    #[test]
    fn edges_are_listed_once() {
        let graph = line(3);
        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(
            edges,
            vec![(VertexId(0), VertexId(1)), (VertexId(1), VertexId(2))]
        );
    }

    #[test]
    fn random_vertex_never_blocked() {
        let mut graph = line(3);
        graph
            .update_vertex(VertexId(1), |v| v.zone = ZoneKind::Blocked)
            .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..32 {
            let vertex = graph.random_vertex(&mut rng).unwrap();
            assert_ne!(vertex.id, VertexId(1));
        }
    }

    #[test]
    fn validate_reports_asymmetry() {
        let mut a = Vertex::new(VertexId(0), Vec3::ZERO);
        a.neighbors.push(VertexId(1));
        let b = Vertex::new(VertexId(1), Vec3::ZERO);

        assert_eq!(
            Graph::from_vertices([a, b]).unwrap_err(),
            GraphError::AsymmetricEdge {
                from: VertexId(0),
                to: VertexId(1)
            }
        );
    }
}
