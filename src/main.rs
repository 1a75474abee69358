mod charts;
mod color;
mod config;
mod data;
mod error;
mod pipeline;
mod report;
mod stats;

use std::io;
use std::path::Path;

use anyhow::Result;

use config::{AnalysisConfig, CONFIG_FILE};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AnalysisConfig::load_or_default(Path::new(CONFIG_FILE))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let output = pipeline::run(&config, &mut out)?;
    log::info!(
        "done: {} charts written, {} columns imputed",
        output.charts.len(),
        output.outcome.imputed.len()
    );
    log::debug!("moments: {:?}", output.moments);
    Ok(())
}
