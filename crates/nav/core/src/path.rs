//! A* route search over the zone graph.
//!
//! Goals are expressed as predicates over vertices (a category set or a
//! specific id), so the search cannot aim at a known point. The heuristic term
//! is therefore the Euclidean distance from a candidate to its immediate
//! predecessor, not to a goal. That relaxation is intentional: it is not
//! admissible toward the nearest interest vertex in every topology, and routes
//! should be read as "good, deterministic" rather than "provably shortest".
//!
//! # Filtering
//!
//! Neighbors that are [`ZoneKind::Blocked`](crate::ZoneKind::Blocked) or whose
//! category is in the active prohibited set are never enqueued. The start
//! vertex itself is exempt from the prohibited filter.
//!
//! # Retry policy
//!
//! When an attempt comes back empty and the caller allows it, the search is
//! repeated once with an empty prohibited set ("face your fears").
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::geometry::Vec3;
use crate::graph::Graph;
use crate::vertex::{CategorySet, Vertex, VertexId};

/// Read-only route finder bound to one graph.
#[derive(Clone, Copy, Debug)]
pub struct PathFinder<'g> {
    graph: &'g Graph,
}

impl<'g> PathFinder<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Route from the vertex closest to `start_position` to the nearest
    /// reachable vertex whose category is in `interests`.
    ///
    /// Returns start-to-goal ids inclusive, or an empty list if no interest
    /// vertex is reachable (after the optional relaxed retry).
    pub fn find_interest_path(
        &self,
        start_position: Vec3,
        interests: &CategorySet,
        prohibited: &CategorySet,
        allow_retry: bool,
    ) -> Vec<VertexId> {
        self.search_with_retry(start_position, prohibited, allow_retry, |vertex| {
            interests.contains(&vertex.category)
        })
    }

    /// Route from the vertex closest to `start_position` to `target`.
    ///
    /// Unknown or blocked targets yield an empty list.
    pub fn find_path_to(
        &self,
        start_position: Vec3,
        target: VertexId,
        prohibited: &CategorySet,
        allow_retry: bool,
    ) -> Vec<VertexId> {
        match self.graph.vertex(target) {
            Some(vertex) if !vertex.is_blocked() => {}
            _ => {
                tracing::debug!(%target, "path target missing or blocked");
                return Vec::new();
            }
        }
        self.search_with_retry(start_position, prohibited, allow_retry, |vertex| {
            vertex.id == target
        })
    }

    fn search_with_retry(
        &self,
        start_position: Vec3,
        prohibited: &CategorySet,
        allow_retry: bool,
        goal: impl Fn(&Vertex) -> bool,
    ) -> Vec<VertexId> {
        let Some(start) = self.graph.find_closest_vertex(start_position) else {
            tracing::debug!(%start_position, "no passable start vertex");
            return Vec::new();
        };

        let strict = self.search(start, prohibited, &goal);
        tracing::debug!(
            start = %start.id,
            expansions = strict.expansions,
            found = strict.path.is_some(),
            "path search"
        );
        if let Some(path) = strict.path {
            return path;
        }

        if !allow_retry || prohibited.is_empty() {
            return Vec::new();
        }

        let relaxed = self.search(start, &CategorySet::new(), &goal);
        tracing::debug!(
            start = %start.id,
            expansions = relaxed.expansions,
            found = relaxed.path.is_some(),
            "path search retried without prohibited categories"
        );
        relaxed.path.unwrap_or_default()
    }

    fn search(
        &self,
        start: &Vertex,
        prohibited: &CategorySet,
        goal: &impl Fn(&Vertex) -> bool,
    ) -> SearchOutcome {
        let mut frontier = Frontier::default();
        let mut cost: HashMap<VertexId, f32> = HashMap::from([(start.id, 0.0)]);
        let mut came_from: HashMap<VertexId, VertexId> = HashMap::new();
        let mut expansions = 0usize;

        frontier.push(start.id, 0.0);

        while let Some(current_id) = frontier.pop() {
            let Some(current) = self.graph.vertex(current_id) else {
                continue;
            };
            expansions += 1;

            if goal(current) {
                return SearchOutcome {
                    path: Some(reconstruct(&came_from, start.id, current_id)),
                    expansions,
                };
            }

            let current_cost = cost.get(&current_id).copied().unwrap_or(f32::INFINITY);
            for neighbor in self.graph.neighbors(current_id) {
                if neighbor.is_blocked() || prohibited.contains(&neighbor.category) {
                    continue;
                }

                let step = current.position.distance(neighbor.position);
                let tentative = current_cost + step;
                let improves = cost
                    .get(&neighbor.id)
                    .is_none_or(|&known| tentative < known);
                if !improves {
                    continue;
                }

                cost.insert(neighbor.id, tentative);
                came_from.insert(neighbor.id, current_id);
                // Heuristic: distance back to the predecessor, see module docs.
                frontier.push(neighbor.id, tentative + step);
            }
        }

        SearchOutcome {
            path: None,
            expansions,
        }
    }
}

struct SearchOutcome {
    path: Option<Vec<VertexId>>,
    expansions: usize,
}

fn reconstruct(
    came_from: &HashMap<VertexId, VertexId>,
    start: VertexId,
    goal: VertexId,
) -> Vec<VertexId> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match came_from.get(&current) {
            Some(&previous) if path.len() <= came_from.len() => {
                path.push(previous);
                current = previous;
            }
            _ => break,
        }
    }
    path.reverse();
    path
}

/// Min-priority queue that pops the earliest-inserted entry among equal
/// priorities.
#[derive(Default)]
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    sequence: u64,
}

impl Frontier {
    fn push(&mut self, id: VertexId, priority: f32) {
        self.heap.push(FrontierEntry {
            priority,
            sequence: self.sequence,
            id,
        });
        self.sequence += 1;
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.heap.pop().map(|entry| entry.id)
    }
}

struct FrontierEntry {
    priority: f32,
    sequence: u64,
    id: VertexId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: lower priority and older sequence rank higher.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}
