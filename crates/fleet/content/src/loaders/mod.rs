//! Content loaders for reading master data from files.
//!
//! Each loader turns one RON/TOML file into the matching `fleet-core` type.
//! [`ContentFactory`] wires them together for a whole data directory.

pub mod config;
pub mod equipment;
pub mod factory;
pub mod fleet;
pub mod ships;

pub use config::{ConfigLoader, DataConfig};
pub use equipment::EquipmentLoader;
pub use factory::ContentFactory;
pub use fleet::FleetLoader;
pub use ships::ShipLoader;

use std::path::Path;

use fleet_core::{CatalogError, FleetError};

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Converts a catalog build failure, keeping its stable error code.
pub(crate) fn catalog_error(error: CatalogError) -> anyhow::Error {
    anyhow::anyhow!("{} [{}]", error, error.error_code())
}
