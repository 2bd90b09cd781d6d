//! Simulation settings read from the environment.

use std::env;
use std::path::PathBuf;

use runtime::AgentConfig;

#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Scenario name in the data directory, or a path to a `.ron` file.
    pub scenario: String,
    pub ticks: u64,
    /// Seconds per tick.
    pub dt: f32,
    pub seed: u64,
    /// Data directory override. `None` uses the fixtures bundled with
    /// `nav-content`.
    pub data_dir: Option<PathBuf>,
    /// Log directory override. `None` uses the platform cache directory.
    pub log_dir: Option<PathBuf>,
    /// Base profile for agents whose scenario entry has none.
    pub agent: AgentConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            scenario: "meadow".to_string(),
            ticks: 600,
            dt: 0.1,
            seed: 0,
            data_dir: None,
            log_dir: None,
            agent: AgentConfig::default(),
        }
    }
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ZONESIM_SCENARIO` - Scenario name or path (default: meadow)
    /// - `ZONESIM_TICKS` - Number of ticks to run (default: 600)
    /// - `ZONESIM_DT` - Seconds per tick (default: 0.1)
    /// - `ZONESIM_SEED` - Base RNG seed (default: 0)
    /// - `ZONESIM_DATA_DIR` - Data directory with `graphs/` and `scenarios/`
    /// - `ZONESIM_LOG_DIR` - Log directory
    /// - `AGENT_*` - Base agent profile, see [`AgentConfig::from_env`]
    pub fn from_env() -> Self {
        let mut config = Self {
            agent: AgentConfig::from_env(),
            ..Self::default()
        };

        if let Some(scenario) = env::var("ZONESIM_SCENARIO")
            .ok()
            .filter(|s| !s.trim().is_empty())
        {
            config.scenario = scenario;
        }
        if let Some(ticks) = read_env::<u64>("ZONESIM_TICKS") {
            config.ticks = ticks;
        }
        if let Some(dt) = read_env::<f32>("ZONESIM_DT").filter(|dt| *dt > 0.0) {
            config.dt = dt;
        }
        if let Some(seed) = read_env::<u64>("ZONESIM_SEED") {
            config.seed = seed;
        }
        if let Some(dir) = env::var_os("ZONESIM_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(dir) = env::var_os("ZONESIM_LOG_DIR") {
            config.log_dir = Some(PathBuf::from(dir));
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
