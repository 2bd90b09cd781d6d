//! Error types surfaced by the agent runtime.
//!
//! Route and plan failures are not errors here: agents degrade to `Stop` or
//! idle. These variants cover setup problems that make a simulation
//! impossible to build.
use std::path::PathBuf;

use goap::CatalogError;
use nav_core::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to read scenario file {path}")]
    ReadScenario {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario RON")]
    ParseScenario(#[source] ron::error::SpannedError),

    #[error("scenario declares no agents")]
    NoAgents,

    #[error("home vertex {home} of agent {agent:?} is not in the graph")]
    UnknownHome { agent: String, home: VertexId },

    #[error("home vertex {home} of agent {agent:?} is blocked")]
    BlockedHome { agent: String, home: VertexId },

    #[error("invalid agent configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
