use crate::args::Cli;
use crate::types::{LogLevel, OutputFormat};
use anyhow::{Context, Result, anyhow};
use bureaulog_engine::DEFAULT_BUREAU_LOGGER;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the configuration file path based on priority:
/// 1. Explicit path (`--config`)
/// 2. BUREAULOG_CONFIG environment variable
/// 3. `<config dir>/bureaulog/config.toml`
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var("BUREAULOG_CONFIG") {
        return Some(PathBuf::from(env_path));
    }

    dirs::config_dir().map(|dir| dir.join("bureaulog").join("config.toml"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub verbose: bool,
    pub summary: bool,
    pub color: bool,
    pub format: OutputFormat,
    /// Logger name the bureau registry writes under
    pub logger: String,
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            summary: false,
            color: true,
            format: OutputFormat::default(),
            logger: DEFAULT_BUREAU_LOGGER.to_string(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }

    #[cfg(test)]
    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Command-line flags override file values; switches can only turn
    /// features on (or colour off).
    pub fn merge_args(mut self, cli: &Cli) -> Self {
        self.verbose |= cli.verbose;
        self.summary |= cli.summary;
        if cli.no_color {
            self.color = false;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(logger) = &cli.logger {
            self.logger = logger.clone();
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        self
    }
}
