//! Goal-oriented action planning over boolean world states.
//!
//! The planner is uninformed breadth-first search: it always returns a plan
//! with the fewest actions, and among equally short plans the one whose
//! actions come first in the catalog.
//!
//! - **Closed world**: a proposition missing from a state fails every
//!   requirement that names it
//! - **No costs**: plan length is the only measure
//! - **No repeats**: an action appears at most once per plan
//! - **Bounded**: search stops after [`PlannerConfig::max_nodes`] nodes
//!
//! # Architecture
//!
//! - [`WorldState`]: proposition to truth value map, with the [`world_state!`]
//!   literal macro
//! - [`Action`]: preconditions, effects and an opaque kind `K`
//! - [`ActionCatalog`]: validated action list, order is significant
//! - [`Planner`]: produces a [`Plan`]
//! - [`PlanExecutor`]: tick-driven follower that re-plans when the world
//!   diverges from what the current step predicted

pub mod action;
pub mod catalog;
pub mod error;
pub mod executor;
pub mod planner;
pub mod state;

pub use action::Action;
pub use catalog::ActionCatalog;
pub use error::{CatalogError, PlanError};
pub use executor::{Directive, IdleReason, PlanExecutor};
pub use planner::{Plan, Planner, PlannerConfig};
pub use state::WorldState;
