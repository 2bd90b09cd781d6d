//! Planning agents that live on a zone graph.
//!
//! This crate glues the route search from `nav-core` to the planner from
//! `goap`. An [`Agent`] senses its surroundings, keeps a plan of
//! [`BehaviorMode`] steps current, and turns the active mode into a
//! [`Locomotion`] command. [`Simulation`] steps many agents over one shared
//! graph, and [`Scenario`] describes such a setup in RON.
//!
//! Modules are organized by responsibility:
//! - [`agent`] hosts the per-tick loop
//! - [`sensors`] and [`catalog`] define the facts and the actions over them
//! - [`route`] and [`hunger`] hold the per-agent state the modes act on
//! - [`simulation`] and [`scenario`] drive agents outside a game engine
pub mod agent;
pub mod behavior;
pub mod catalog;
pub mod config;
pub mod error;
pub mod hunger;
pub mod route;
pub mod scenario;
pub mod sensors;
pub mod simulation;

pub use agent::{Agent, Locomotion, Observation};
pub use behavior::BehaviorMode;
pub use catalog::{default_actions, default_catalog, default_goal};
pub use config::{AgentConfig, HungerConfig, SenseConfig, SightConfig};
pub use error::{Result, RuntimeError};
pub use hunger::Hunger;
pub use route::{RouteFollower, RouteStep};
pub use scenario::{AgentSpec, PlayerSpec, Scenario};
pub use sensors::{SensorInput, SensorReadings, keys};
pub use simulation::{Actor, AgentSummary, Body, PlayerTrack, Simulation};
