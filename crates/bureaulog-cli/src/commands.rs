use super::args::Cli;
use super::handlers;
use crate::config::{Config, resolve_config_path};
use crate::logging;
use anyhow::{Result, bail};

pub fn run(cli: Cli) -> Result<()> {
    if let Some(explicit) = &cli.config
        && !explicit.exists()
    {
        bail!("Config file not found: {}", explicit.display());
    }

    let config_path = resolve_config_path(cli.config.as_deref());
    let config = match &config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    }
    .merge_args(&cli);

    logging::init(logging::effective_level(config.log_level, config.verbose));
    if let Some(path) = &config_path {
        tracing::debug!(path = %path.display(), "config resolved");
    }

    handlers::check::handle(&config, &cli.files)
}
