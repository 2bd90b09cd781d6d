//! Waypoint-by-waypoint route following.
use nav_core::{Graph, Vec3, VertexId};

/// What the follower wants this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RouteStep {
    /// Head for this waypoint.
    MoveTo { vertex: VertexId, position: Vec3 },
    /// The last waypoint was reached this tick.
    Arrived(VertexId),
    /// No route is being followed.
    Idle,
}

/// Consumes a route one vertex at a time.
///
/// A waypoint counts as reached once the agent is strictly closer than the
/// arrival radius. Several waypoints may be passed in one tick if the agent
/// is already within reach of them.
#[derive(Clone, Debug, Default)]
pub struct RouteFollower {
    route: Vec<VertexId>,
    cursor: usize,
    following: bool,
}

impl RouteFollower {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current route. An empty route leaves the follower idle.
    pub fn start(&mut self, route: Vec<VertexId>) {
        self.following = !route.is_empty();
        self.route = route;
        self.cursor = 0;
    }

    pub fn reset(&mut self) {
        self.route.clear();
        self.cursor = 0;
        self.following = false;
    }

    pub fn is_following(&self) -> bool {
        self.following
    }

    pub fn route(&self) -> &[VertexId] {
        &self.route
    }

    /// Waypoint currently being approached.
    pub fn target(&self) -> Option<VertexId> {
        if self.following {
            self.route.get(self.cursor).copied()
        } else {
            None
        }
    }

    pub fn advance(&mut self, graph: &Graph, position: Vec3, arrival_radius: f32) -> RouteStep {
        if !self.following {
            return RouteStep::Idle;
        }

        while let Some(&id) = self.route.get(self.cursor) {
            let Some(vertex) = graph.vertex(id) else {
                tracing::debug!(%id, "route waypoint vanished, dropping route");
                self.reset();
                return RouteStep::Idle;
            };
            if vertex.distance_to(position) < arrival_radius {
                self.cursor += 1;
                continue;
            }
            return RouteStep::MoveTo {
                vertex: id,
                position: vertex.position,
            };
        }

        self.following = false;
        match self.route.last() {
            Some(&last) => RouteStep::Arrived(last),
            None => RouteStep::Idle,
        }
    }
}
