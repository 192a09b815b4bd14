//! CLI configuration.
use std::env;
use std::path::PathBuf;

use fleet_content::{ContentFactory, LoadResult};

/// Where the CLI finds master data.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `equipment.ron`, `ships.ron` and `fleets/`.
    pub data_dir: PathBuf,
    /// Optional TOML file overriding catalog file locations.
    pub data_config: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            data_config: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FLEET_DATA_DIR` - Master data directory (default: `data`)
    /// - `FLEET_DATA_CONFIG` - Data config TOML (default: none)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("FLEET_DATA_DIR") {
            config.data_dir = dir;
        }
        config.data_config = read_env::<PathBuf>("FLEET_DATA_CONFIG");

        config
    }

    /// Applies command line overrides on top of the environment.
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, data_config: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if data_config.is_some() {
            self.data_config = data_config;
        }
        self
    }

    /// Builds the content factory for this configuration.
    pub fn content_factory(&self) -> LoadResult<ContentFactory> {
        match &self.data_config {
            Some(path) => ContentFactory::from_config(&self.data_dir, path),
            None => Ok(ContentFactory::new(&self.data_dir)),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok().filter(|value| !value.is_empty())?.parse().ok()
}
