//! Content factory for building catalogs from data files.

use std::path::{Path, PathBuf};

use fleet_core::{CatalogSnapshot, EquipmentSnapshot, Fleet, ShipSnapshot};

use crate::loaders::{ConfigLoader, DataConfig, EquipmentLoader, FleetLoader, LoadResult, ShipLoader};

/// Content factory that loads master data from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── equipment.ron
/// ├── ships.ron
/// └── fleets/
///     ├── kido_butai.ron
///     └── escort.ron
/// ```
///
/// Catalog file locations can be overridden with a [`DataConfig`].
pub struct ContentFactory {
    data_dir: PathBuf,
    files: DataConfig,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let files = DataConfig::default().resolved_against(&data_dir);
        Self { data_dir, files }
    }

    /// Creates a factory whose catalog paths come from a TOML config file.
    ///
    /// Fleets are still looked up under `data_dir`.
    pub fn from_config(data_dir: impl Into<PathBuf>, config_path: &Path) -> LoadResult<Self> {
        let files = ConfigLoader::load(config_path)?;
        Ok(Self {
            data_dir: data_dir.into(),
            files,
        })
    }

    /// Load the equipment catalog.
    pub fn load_equipment(&self) -> LoadResult<EquipmentSnapshot> {
        EquipmentLoader::load(&self.files.equipment)
    }

    /// Load the ship catalog.
    pub fn load_ships(&self) -> LoadResult<ShipSnapshot> {
        ShipLoader::load(&self.files.ships)
    }

    /// Load both catalogs.
    pub fn load_catalogs(&self) -> LoadResult<CatalogSnapshot> {
        let equipment = self.load_equipment()?;
        let ships = self.load_ships()?;
        tracing::info!(
            equipment = equipment.len(),
            ships = ships.len(),
            "master data loaded"
        );
        Ok(CatalogSnapshot::new(equipment, ships))
    }

    /// Load a fleet from `fleets/{fleet_name}.ron`.
    ///
    /// # Arguments
    ///
    /// * `fleet_name` - Name of the fleet file (without `.ron` extension)
    pub fn load_fleet(&self, fleet_name: &str) -> LoadResult<Fleet> {
        let path = self
            .data_dir
            .join("fleets")
            .join(format!("{}.ron", fleet_name));
        FleetLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the resolved catalog file locations.
    pub fn files(&self) -> &DataConfig {
        &self.files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(factory.files().equipment, Path::new("/tmp/data/equipment.ron"));
        assert_eq!(factory.files().ships, Path::new("/tmp/data/ships.ron"));
    }

    #[test]
    fn missing_files_are_reported() {
        let factory = ContentFactory::new("/nonexistent/fleet-data");
        let message = factory.load_catalogs().unwrap_err().to_string();
        assert!(message.contains("equipment.ron"), "{message}");
    }
}
