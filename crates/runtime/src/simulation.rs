//! Fixed-step driver for many agents over one shared graph.
//!
//! The bodies here are deliberately simple: they move in a straight line at
//! constant speed toward whatever the agent asked for. Anything smarter
//! (steering, collisions) belongs to a real host.

use std::sync::Arc;

use nav_core::{Graph, Vec3, VertexId};
use serde::Serialize;

use crate::agent::{Agent, Locomotion, Observation};
use crate::behavior::BehaviorMode;
use crate::config::SightConfig;

/// Kinematic point mover.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub position: Vec3,
    /// Direction of the last non-zero move. Zero until the body first moves.
    pub facing: Vec3,
    pub speed: f32,
    pub travelled: f32,
}

impl Body {
    pub fn new(position: Vec3, speed: f32) -> Self {
        Self {
            position,
            facing: Vec3::ZERO,
            speed,
            travelled: 0.0,
        }
    }

    pub fn apply(&mut self, command: Locomotion, dt: f32) {
        let Locomotion::MoveTo(target) = command else {
            return;
        };
        let next = self.position.move_towards(target, self.speed * dt);
        let step = next - self.position;
        if step.length_squared() > 0.0 {
            self.facing = step.normalize_or_zero();
            self.travelled += step.length();
        }
        self.position = next;
    }
}

/// Player stand-in that loops over a list of waypoints.
#[derive(Clone, Debug)]
pub struct PlayerTrack {
    waypoints: Vec<Vec3>,
    next: usize,
    body: Body,
}

impl PlayerTrack {
    /// Starts at the first waypoint. Returns `None` for an empty track.
    pub fn new(waypoints: Vec<Vec3>, speed: f32) -> Option<Self> {
        let start = *waypoints.first()?;
        Some(Self {
            next: 1 % waypoints.len(),
            waypoints,
            body: Body::new(start, speed),
        })
    }

    pub fn position(&self) -> Vec3 {
        self.body.position
    }

    pub fn step(&mut self, dt: f32) {
        let target = self.waypoints[self.next];
        self.body.apply(Locomotion::MoveTo(target), dt);
        if self.body.position == target {
            self.next = (self.next + 1) % self.waypoints.len();
        }
    }
}

/// An agent together with the body it steers.
pub struct Actor {
    pub agent: Agent,
    pub body: Body,
    /// Current health over maximum health.
    pub health: f32,
    pub sight: SightConfig,
}

/// End-of-run snapshot of one agent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AgentSummary {
    pub name: String,
    pub mode: BehaviorMode,
    pub position: (f32, f32, f32),
    pub closest_vertex: Option<VertexId>,
    pub hunger: f32,
    pub hungry: bool,
    pub comfort: bool,
    pub replans: u64,
    pub travelled: f32,
    pub plan: Vec<String>,
    /// Name of the plan step being executed.
    pub step: Option<String>,
}

pub struct Simulation {
    graph: Arc<Graph>,
    actors: Vec<Actor>,
    player: Option<PlayerTrack>,
    ticks: u64,
    elapsed: f32,
}

impl Simulation {
    pub fn new(graph: Arc<Graph>) -> Self {
        Self {
            graph,
            actors: Vec::new(),
            player: None,
            ticks: 0,
            elapsed: 0.0,
        }
    }

    pub fn add_agent(&mut self, agent: Agent, spawn: Vec3, health: f32) {
        let body = Body::new(spawn, agent.config().speed);
        let sight = agent.config().senses.sight.clone();
        self.actors.push(Actor {
            agent,
            body,
            health: health.clamp(0.0, 1.0),
            sight,
        });
    }

    pub fn set_player(&mut self, player: Option<PlayerTrack>) {
        self.player = player;
    }

    /// Advances every agent by `dt` seconds, in insertion order.
    pub fn step(&mut self, dt: f32) {
        if let Some(player) = &mut self.player {
            player.step(dt);
        }
        let player = self.player.as_ref().map(PlayerTrack::position);

        for actor in &mut self.actors {
            let player_visible = player
                .is_some_and(|p| actor.sight.can_see(actor.body.position, actor.body.facing, p));
            let observation = Observation {
                position: actor.body.position,
                player,
                player_visible,
                health_fraction: actor.health,
            };
            let command = actor.agent.tick(&self.graph, &observation, dt);
            actor.body.apply(command, dt);
        }

        self.ticks += 1;
        self.elapsed += dt;
    }

    pub fn run(&mut self, ticks: u64, dt: f32) {
        for _ in 0..ticks {
            self.step(dt);
        }
        tracing::info!(
            ticks = self.ticks,
            elapsed = self.elapsed,
            agents = self.actors.len(),
            "simulation finished"
        );
    }

    pub fn graph(&self) -> &Arc<Graph> {
        &self.graph
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn player(&self) -> Option<&PlayerTrack> {
        self.player.as_ref()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn summaries(&self) -> Vec<AgentSummary> {
        self.actors
            .iter()
            .map(|actor| {
                let agent = &actor.agent;
                let position = actor.body.position;
                AgentSummary {
                    name: agent.name().to_owned(),
                    mode: agent.mode(),
                    position: (position.x, position.y, position.z),
                    closest_vertex: self.graph.find_closest_vertex(position).map(|v| v.id),
                    hunger: agent.hunger().level(),
                    hungry: agent.hunger().is_hungry(),
                    comfort: agent.readings().comfort,
                    replans: agent.executor().replans(),
                    travelled: actor.body.travelled,
                    plan: agent
                        .executor()
                        .plan()
                        .map(|plan| plan.names().into_iter().map(str::to_owned).collect())
                        .unwrap_or_default(),
                    step: agent
                        .executor()
                        .current_step()
                        .map(|action| action.name().to_owned()),
                }
            })
            .collect()
    }
}
