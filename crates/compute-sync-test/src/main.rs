mod app;
mod config;

use anyhow::Result;
use clap::Parser;

use compute_sync_engine::logging::{init_logging, LoggingConfig};
use compute_sync_engine::window::Runtime;

use crate::app::ComputeSyncTest;
use crate::config::{Args, SampleConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = SampleConfig::from_args(Args::parse())?;
    log::info!(
        "{}: {:?} preset, {} particles",
        config.runtime.title,
        config.preset,
        config.preset.count(),
    );
    log::info!("keys: space/p pause, r reset, esc/q quit");

    let runtime = config.runtime.clone();
    let gpu_init = config.gpu.clone();

    Runtime::run(runtime, gpu_init, ComputeSyncTest::new(config)?)
}
