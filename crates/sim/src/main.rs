//! `zonesim` entry point.
//!
//! Reads `.env`, runs the configured scenario and prints one JSON object per
//! agent on stdout. Logs go to stderr and to a file in the log directory.
//!
//! ```bash
//! ZONESIM_TICKS=2000 RUST_LOG=runtime=debug cargo run -p zone-sim
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use zone_sim::{SimConfig, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = SimConfig::from_env();

    let run_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| format!("run_{}", elapsed.as_secs()))
        .unwrap_or_else(|_| "run".to_string());
    let log_dir = config.log_dir.clone().unwrap_or_else(logging::default_log_dir);
    let _guard = logging::setup_logging(&log_dir, &run_id)?;

    tracing::info!(
        scenario = %config.scenario,
        ticks = config.ticks,
        dt = config.dt,
        seed = config.seed,
        "Starting zonesim"
    );

    let summaries = zone_sim::run(&config)?;
    for summary in &summaries {
        println!("{}", serde_json::to_string(summary)?);
    }

    Ok(())
}
