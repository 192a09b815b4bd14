//! Data directory configuration loader.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Where the master data files live.
///
/// Relative paths are resolved against the directory holding the TOML file.
///
/// ```toml
/// equipment = "equipment.ron"
/// ships = "ships.ron"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    pub equipment: PathBuf,
    pub ships: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            equipment: PathBuf::from("equipment.ron"),
            ships: PathBuf::from("ships.ron"),
        }
    }
}

impl DataConfig {
    /// Returns a copy with every relative path joined onto `base`.
    pub fn resolved_against(&self, base: &Path) -> Self {
        let resolve = |path: &Path| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                base.join(path)
            }
        };

        Self {
            equipment: resolve(&self.equipment),
            ships: resolve(&self.ships),
        }
    }
}

/// Loader for data configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`DataConfig`] from a TOML file.
    ///
    /// The returned paths are already resolved against the file's directory.
    pub fn load(path: &Path) -> LoadResult<DataConfig> {
        let content = read_file(path)?;
        let config: DataConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse data config TOML: {}", e))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.resolved_against(base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_follow_the_config_file() {
        let config = DataConfig {
            equipment: PathBuf::from("master/equipment.ron"),
            ships: PathBuf::from("/srv/ships.ron"),
        };

        let resolved = config.resolved_against(Path::new("/etc/fleet"));
        assert_eq!(resolved.equipment, Path::new("/etc/fleet/master/equipment.ron"));
        assert_eq!(resolved.ships, Path::new("/srv/ships.ron"));
    }

    #[test]
    fn parses_toml() {
        let config: DataConfig =
            toml::from_str("equipment = \"eq.ron\"\nships = \"sh.ron\"\n").unwrap();
        assert_eq!(config.equipment, Path::new("eq.ron"));
        assert_eq!(config.ships, Path::new("sh.ron"));
    }
}
