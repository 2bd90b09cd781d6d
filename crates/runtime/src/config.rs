//! Agent tuning and its loaders.
//!
//! Every field has a default, so scenario files only spell out what they
//! change. [`AgentConfig::from_env`] layers process environment overrides on
//! top of the defaults for quick experiments.

use std::env;

use goap::PlannerConfig;
use nav_core::{Category, CategorySet, HopRange};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuntimeError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Units per second.
    pub speed: f32,
    /// A route waypoint counts as reached within this distance.
    pub arrival_radius: f32,
    /// Chasing stops this close to the player.
    pub stop_distance: f32,
    /// Categories the agent forages for.
    pub interests: CategorySet,
    /// Categories avoided while routing.
    pub fears: CategorySet,
    /// Retry through feared vertices when no other route exists.
    pub face_fears: bool,
    pub senses: SenseConfig,
    pub hunger: HungerConfig,
    pub planner: PlannerConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            speed: 3.0,
            arrival_radius: 1.0,
            stop_distance: 1.3,
            interests: CategorySet::from([Category::FOOD]),
            fears: CategorySet::from([Category::DANGER]),
            face_fears: true,
            senses: SenseConfig::default(),
            hunger: HungerConfig::default(),
            planner: PlannerConfig::default(),
        }
    }
}

impl AgentConfig {
    /// Defaults overridden from process environment variables.
    ///
    /// Environment variables:
    /// - `AGENT_SPEED` - Movement speed (default: 3.0)
    /// - `AGENT_ARRIVAL_RADIUS` - Waypoint arrival radius (default: 1.0)
    /// - `AGENT_STOP_DISTANCE` - Chase stop distance (default: 1.3)
    /// - `AGENT_FACE_FEARS` - Allow routing through feared vertices (default: true)
    /// - `AGENT_FOOD_HOPS` - Food sensing range in edges (default: 2)
    /// - `AGENT_SIGHT_DISTANCE` - Player sighting distance (default: 6.0)
    /// - `AGENT_HUNGER_RATE` - Hunger gained per second (default: 2.0)
    /// - `AGENT_EAT_RATE` - Hunger lost per second while eating (default: 25.0)
    /// - `AGENT_PLANNER_MAX_NODES` - Planner node cap (default: 10000)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(speed) = read_env::<f32>("AGENT_SPEED") {
            config.speed = speed.max(0.0);
        }
        if let Some(radius) = read_env::<f32>("AGENT_ARRIVAL_RADIUS") {
            config.arrival_radius = radius;
        }
        if let Some(distance) = read_env::<f32>("AGENT_STOP_DISTANCE") {
            config.stop_distance = distance;
        }
        if let Some(face) = read_env_bool("AGENT_FACE_FEARS") {
            config.face_fears = face;
        }
        if let Some(hops) = read_env::<usize>("AGENT_FOOD_HOPS") {
            config.senses.food_hops = hops;
        }
        if let Some(distance) = read_env::<f32>("AGENT_SIGHT_DISTANCE") {
            config.senses.sight.max_distance = distance;
        }
        if let Some(rate) = read_env::<f32>("AGENT_HUNGER_RATE") {
            config.hunger.deplete_rate = rate;
        }
        if let Some(rate) = read_env::<f32>("AGENT_EAT_RATE") {
            config.hunger.replenish_rate = rate;
        }
        if let Some(max_nodes) = read_env::<usize>("AGENT_PLANNER_MAX_NODES") {
            config.planner.max_nodes = max_nodes.max(1);
        }

        config
    }

    /// Rejects values that would make an agent stall or oscillate.
    pub fn validate(&self) -> Result<()> {
        if !(self.arrival_radius > 0.0) {
            return Err(RuntimeError::InvalidConfig(format!(
                "arrival_radius must be positive, got {}",
                self.arrival_radius
            )));
        }
        if !(self.speed >= 0.0) {
            return Err(RuntimeError::InvalidConfig(format!(
                "speed must not be negative, got {}",
                self.speed
            )));
        }
        let hunger = &self.hunger;
        let ordered = 0.0 <= hunger.sated_at
            && hunger.sated_at < hunger.hungry_at
            && hunger.hungry_at <= hunger.max;
        if !ordered {
            return Err(RuntimeError::InvalidConfig(format!(
                "hunger thresholds must satisfy 0 <= sated_at < hungry_at <= max, got {} / {} / {}",
                hunger.sated_at, hunger.hungry_at, hunger.max
            )));
        }
        if self.planner.max_nodes == 0 {
            return Err(RuntimeError::InvalidConfig(
                "planner.max_nodes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Sensor ranges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SenseConfig {
    /// Food is "found" when an interest vertex lies within this many edges of
    /// the agent's closest vertex.
    pub food_hops: usize,
    pub food_range: HopRange,
    /// Health below `max * low_health_fraction` counts as low.
    pub low_health_fraction: f32,
    pub sight: SightConfig,
}

impl Default for SenseConfig {
    fn default() -> Self {
        Self {
            food_hops: 2,
            food_range: HopRange::UpTo,
            low_health_fraction: 1.0 / 3.0,
            sight: SightConfig::default(),
        }
    }
}

/// Player visibility: a cone in front of the agent plus a small all-round
/// radius. Occlusion is not modelled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SightConfig {
    pub max_distance: f32,
    pub inner_radius: f32,
    /// Half-angle of the view cone, in degrees.
    pub max_angle: f32,
}

impl Default for SightConfig {
    fn default() -> Self {
        Self {
            max_distance: 6.0,
            inner_radius: 2.0,
            max_angle: 60.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HungerConfig {
    pub max: f32,
    /// Gained per second while not eating.
    pub deplete_rate: f32,
    /// Lost per second while eating.
    pub replenish_rate: f32,
    /// The agent becomes hungry at or above this level...
    pub hungry_at: f32,
    /// ...and stays hungry until it eats down to this level.
    pub sated_at: f32,
}

impl Default for HungerConfig {
    fn default() -> Self {
        Self {
            max: 100.0,
            deplete_rate: 2.0,
            replenish_rate: 25.0,
            hungry_at: 60.0,
            sated_at: 10.0,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
