//! Headless driver for zone-graph agents.
//!
//! Loads a scenario and its graph from a data directory, steps the
//! simulation for a fixed number of ticks, and reports where every agent
//! ended up.

pub mod config;
pub mod logging;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use nav_content::{ContentFactory, GraphLoader};
use nav_core::Graph;
use runtime::{AgentSummary, Scenario, Simulation};

pub use config::SimConfig;

/// Scenario file for `name`: an existing `.ron` path is used as is,
/// anything else is looked up in the factory's `scenarios/` directory.
pub fn resolve_scenario(factory: &ContentFactory, name: &str) -> PathBuf {
    let path = Path::new(name);
    if path.extension().is_some_and(|ext| ext == "ron") && path.is_file() {
        path.to_path_buf()
    } else {
        factory.scenario_path(name)
    }
}

/// Graph for a scenario. A `.ron` graph reference is a path relative to the
/// scenario file, anything else a fixture name.
pub fn load_graph(factory: &ContentFactory, scenario_path: &Path, graph: &str) -> Result<Graph> {
    if graph.ends_with(".ron") {
        let base = scenario_path.parent().unwrap_or_else(|| Path::new("."));
        GraphLoader::load(&base.join(graph))
    } else {
        factory.load_graph(graph)
    }
}

/// Loads everything `config` points at and builds the simulation.
pub fn prepare(config: &SimConfig) -> Result<Simulation> {
    let factory = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };

    let scenario_path = resolve_scenario(&factory, &config.scenario);
    let scenario = Scenario::load_from_file(&scenario_path)
        .with_context(|| format!("Failed to load scenario {}", scenario_path.display()))?;
    let graph = load_graph(&factory, &scenario_path, &scenario.graph)?;
    tracing::info!(
        scenario = %scenario_path.display(),
        graph = %scenario.graph,
        vertices = graph.len(),
        "scenario loaded"
    );

    let simulation = scenario
        .build(Arc::new(graph), &config.agent, config.seed)
        .context("Failed to build simulation")?;
    Ok(simulation)
}

/// Runs the configured simulation to completion.
pub fn run(config: &SimConfig) -> Result<Vec<AgentSummary>> {
    let mut simulation = prepare(config)?;
    simulation.run(config.ticks, config.dt);
    Ok(simulation.summaries())
}
