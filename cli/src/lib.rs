use anyhow::{Context, Result};
use diagnostics::TracingSink;
use natives::{Config, Runtime};
use std::sync::Arc;

pub mod commands;
pub mod logging;

/// Build the runtime from `config_path`, or from defaults when absent.
/// Diagnostics go to the tracing subscriber.
pub fn load_runtime(config_path: Option<&str>) -> Result<Runtime> {
    let config = match config_path {
        Some(path) => Config::load(path).with_context(|| format!("loading {path}"))?,
        None => Config::default(),
    };
    Runtime::init(config, Arc::new(TracingSink)).context("failed to initialise native functions")
}
