//! A single planning agent.
//!
//! Each tick the agent:
//! 1. integrates hunger
//! 2. samples its sensors into a [`WorldState`]
//! 3. lets the [`PlanExecutor`] decide whether a new step starts
//! 4. runs the active [`BehaviorMode`] and returns a [`Locomotion`] command
//!
//! The agent never moves itself. Whoever owns the body applies the command
//! and reports the new position on the next tick.

use std::sync::Arc;

use goap::{ActionCatalog, Directive, IdleReason, PlanExecutor, Planner, WorldState};
use nav_core::{CategorySet, Graph, PathFinder, Vec3, VertexId};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::behavior::BehaviorMode;
use crate::config::AgentConfig;
use crate::hunger::Hunger;
use crate::route::{RouteFollower, RouteStep};
use crate::sensors::{SensorInput, SensorReadings};

/// Movement request for the external mover.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Locomotion {
    MoveTo(Vec3),
    Stop,
}

/// What the agent is told about the world this tick.
#[derive(Clone, Copy, Debug)]
pub struct Observation {
    pub position: Vec3,
    /// Player position, known even when the player is not visible.
    pub player: Option<Vec3>,
    pub player_visible: bool,
    pub health_fraction: f32,
}

impl Observation {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            player: None,
            player_visible: false,
            health_fraction: 1.0,
        }
    }
}

pub struct Agent {
    name: String,
    home: VertexId,
    config: AgentConfig,
    catalog: Arc<ActionCatalog<BehaviorMode>>,
    goal: WorldState,
    executor: PlanExecutor<BehaviorMode>,
    mode: BehaviorMode,
    route: RouteFollower,
    visited: CategorySet,
    hunger: Hunger,
    readings: SensorReadings,
    idle: Option<IdleReason>,
    rng: ChaCha8Rng,
}

impl Agent {
    pub fn new(
        name: impl Into<String>,
        home: VertexId,
        config: AgentConfig,
        catalog: Arc<ActionCatalog<BehaviorMode>>,
        goal: WorldState,
        seed: u64,
    ) -> Self {
        let executor = PlanExecutor::new(Planner::new(config.planner));
        let hunger = Hunger::new(config.hunger.clone());
        Self {
            name: name.into(),
            home,
            config,
            catalog,
            goal,
            executor,
            mode: BehaviorMode::default(),
            route: RouteFollower::new(),
            visited: CategorySet::new(),
            hunger,
            readings: SensorReadings::default(),
            idle: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Replaces the hunger meter, e.g. to start an agent already fed.
    pub fn with_hunger(mut self, hunger: Hunger) -> Self {
        self.hunger = hunger;
        self
    }

    pub fn tick(&mut self, graph: &Graph, observation: &Observation, dt: f32) -> Locomotion {
        let eating = self.mode == BehaviorMode::Eating && self.idle.is_none();
        self.hunger.tick(dt, eating);

        self.readings = SensorReadings::sample(
            graph,
            &self.config.senses,
            &SensorInput {
                position: observation.position,
                home: self.home,
                interests: &self.config.interests,
                hungry: self.hunger.is_hungry(),
                health_fraction: observation.health_fraction,
                player_visible: observation.player_visible,
            },
        );

        let step = match self.executor.tick(
            &self.catalog,
            &self.goal,
            self.readings.to_world_state(),
        ) {
            Directive::Dispatch { action, .. } => {
                Ok(Some((action.name().to_owned(), *action.kind())))
            }
            Directive::Hold => Ok(None),
            Directive::Idle(reason) => Err(reason),
        };

        match step {
            Ok(Some((name, mode))) => {
                self.idle = None;
                self.switch_mode(&name, mode);
            }
            Ok(None) => {}
            Err(reason) => {
                if self.idle != Some(reason) {
                    tracing::debug!(agent = %self.name, ?reason, "idle");
                }
                self.idle = Some(reason);
                self.route.reset();
                return Locomotion::Stop;
            }
        }

        self.run_mode(graph, observation)
    }

    /// Enters `mode`, dropping any route and the visited-interest memory.
    pub fn switch_mode(&mut self, step: &str, mode: BehaviorMode) {
        if mode != self.mode {
            tracing::info!(
                agent = %self.name,
                step,
                from = %self.mode,
                to = %mode,
                "mode switch"
            );
        } else {
            tracing::debug!(agent = %self.name, step, %mode, "mode restarted");
        }
        self.mode = mode;
        self.route.reset();
        self.visited.clear();
    }

    fn run_mode(&mut self, graph: &Graph, observation: &Observation) -> Locomotion {
        let position = observation.position;
        match self.mode {
            BehaviorMode::Patrol => self.follow_or(graph, position, |agent, finder| {
                let target = graph.random_vertex(&mut agent.rng)?.id;
                Some(finder.find_path_to(
                    position,
                    target,
                    &agent.config.fears,
                    agent.config.face_fears,
                ))
            }),
            BehaviorMode::GoToFood => self.follow_or(graph, position, |agent, finder| {
                let remaining: CategorySet = agent
                    .config
                    .interests
                    .difference(&agent.visited)
                    .copied()
                    .collect();
                if remaining.is_empty() {
                    return None;
                }
                Some(finder.find_interest_path(
                    position,
                    &remaining,
                    &agent.config.fears,
                    agent.config.face_fears,
                ))
            }),
            BehaviorMode::GoToHome => {
                let home = self.home;
                self.follow_or(graph, position, |agent, finder| {
                    Some(finder.find_path_to(
                        position,
                        home,
                        &agent.config.fears,
                        agent.config.face_fears,
                    ))
                })
            }
            BehaviorMode::GoToPlayer => match observation.player {
                Some(player) if position.distance(player) > self.config.stop_distance => {
                    Locomotion::MoveTo(player)
                }
                _ => Locomotion::Stop,
            },
            BehaviorMode::Eating => Locomotion::Stop,
        }
    }

    /// Follows the current route, or asks `plan_route` for a new one when
    /// there is none. A missing or empty route means standing still.
    fn follow_or(
        &mut self,
        graph: &Graph,
        position: Vec3,
        plan_route: impl FnOnce(&mut Self, PathFinder<'_>) -> Option<Vec<VertexId>>,
    ) -> Locomotion {
        if !self.route.is_following() {
            let route = plan_route(self, PathFinder::new(graph)).unwrap_or_default();
            if route.is_empty() {
                tracing::debug!(agent = %self.name, mode = %self.mode, "no route");
                return Locomotion::Stop;
            }
            tracing::debug!(agent = %self.name, mode = %self.mode, ?route, "route started");
            self.route.start(route);
        }

        match self.route.advance(graph, position, self.config.arrival_radius) {
            RouteStep::MoveTo { position, .. } => Locomotion::MoveTo(position),
            RouteStep::Arrived(vertex) => {
                if let Some(reached) = graph.vertex(vertex) {
                    self.visited.insert(reached.category);
                }
                Locomotion::Stop
            }
            RouteStep::Idle => Locomotion::Stop,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn home(&self) -> VertexId {
        self.home
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn mode(&self) -> BehaviorMode {
        self.mode
    }

    pub fn hunger(&self) -> &Hunger {
        &self.hunger
    }

    /// Why the agent is standing idle, if it is.
    pub fn idle_reason(&self) -> Option<IdleReason> {
        self.idle
    }

    pub fn readings(&self) -> SensorReadings {
        self.readings
    }

    pub fn executor(&self) -> &PlanExecutor<BehaviorMode> {
        &self.executor
    }

    pub fn route(&self) -> &RouteFollower {
        &self.route
    }

    pub fn visited(&self) -> &CategorySet {
        &self.visited
    }
}
