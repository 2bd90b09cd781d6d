//! Scenario files: which graph, which agents, and where the player walks.
//!
//! ```text
//! Scenario(
//!     graph: "meadow",
//!     agents: [
//!         (name: "rabbit", spawn: (0.0, 0.0, 0.0), home: 0),
//!         (name: "fox", spawn: (6.0, 4.0, 0.0), home: 11, health: 0.2,
//!          profile: Some((speed: 4.0))),
//!     ],
//!     player: Some((waypoints: [(2.0, 4.0, 0.0), (4.0, 4.0, 0.0)], speed: 1.5)),
//! )
//! ```
//!
//! The graph is referenced by name. Resolving that name to a file is the
//! host's job.

use std::path::Path;
use std::sync::Arc;

use nav_core::{Graph, Vec3, VertexId};
use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::catalog::{default_catalog, default_goal};
use crate::config::AgentConfig;
use crate::error::{Result, RuntimeError};
use crate::hunger::Hunger;
use crate::simulation::{PlayerTrack, Simulation};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Graph fixture name.
    pub graph: String,
    pub agents: Vec<AgentSpec>,
    #[serde(default)]
    pub player: Option<PlayerSpec>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub name: String,
    pub spawn: (f32, f32, f32),
    pub home: VertexId,
    /// Health over maximum health.
    #[serde(default = "full_health")]
    pub health: f32,
    /// Starting hunger level. Defaults to the profile's maximum.
    #[serde(default)]
    pub hunger: Option<f32>,
    /// Replaces the base configuration for this agent.
    #[serde(default)]
    pub profile: Option<AgentConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub waypoints: Vec<(f32, f32, f32)>,
    pub speed: f32,
}

fn full_health() -> f32 {
    1.0
}

fn point((x, y, z): (f32, f32, f32)) -> Vec3 {
    Vec3::new(x, y, z)
}

impl Scenario {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RuntimeError::ReadScenario {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        ron::from_str(content).map_err(RuntimeError::ParseScenario)
    }

    /// Creates the agents and player described here on top of `graph`.
    ///
    /// `base` is used for agents without a profile. Agent `i` seeds its RNG
    /// with `seed + i`.
    pub fn build(&self, graph: Arc<Graph>, base: &AgentConfig, seed: u64) -> Result<Simulation> {
        if self.agents.is_empty() {
            return Err(RuntimeError::NoAgents);
        }

        let catalog = Arc::new(default_catalog()?);
        let goal = default_goal();
        let mut simulation = Simulation::new(Arc::clone(&graph));

        for (index, spec) in self.agents.iter().enumerate() {
            match graph.vertex(spec.home) {
                None => {
                    return Err(RuntimeError::UnknownHome {
                        agent: spec.name.clone(),
                        home: spec.home,
                    });
                }
                Some(home) if home.is_blocked() => {
                    return Err(RuntimeError::BlockedHome {
                        agent: spec.name.clone(),
                        home: spec.home,
                    });
                }
                Some(_) => {}
            }

            let config = spec.profile.clone().unwrap_or_else(|| base.clone());
            config.validate()?;

            let mut agent = Agent::new(
                spec.name.clone(),
                spec.home,
                config,
                Arc::clone(&catalog),
                goal.clone(),
                seed.wrapping_add(index as u64),
            );
            if let Some(level) = spec.hunger {
                let hunger = Hunger::with_level(agent.config().hunger.clone(), level);
                agent = agent.with_hunger(hunger);
            }

            tracing::debug!(agent = %spec.name, home = %spec.home, "agent spawned");
            simulation.add_agent(agent, point(spec.spawn), spec.health);
        }

        if let Some(player) = &self.player {
            let waypoints = player.waypoints.iter().copied().map(point).collect();
            let track = PlayerTrack::new(waypoints, player.speed);
            if track.is_none() {
                tracing::warn!("player track has no waypoints, running without a player");
            }
            simulation.set_player(track);
        }

        tracing::info!(
            graph = %self.graph,
            agents = self.agents.len(),
            player = self.player.is_some(),
            "scenario built"
        );
        Ok(simulation)
    }
}
