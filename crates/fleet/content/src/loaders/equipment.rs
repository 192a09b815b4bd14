//! Equipment master data loader.

use std::path::Path;

use fleet_core::{EquipmentRef, EquipmentSnapshot};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, catalog_error, read_file};

/// Equipment catalog structure for RON files.
///
/// Example:
/// ```ron
/// (
///     equipment: [
///         (id: 19, category: 6, anti_air: 6),
///         (id: 2, category: 1, anti_air: 2),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentCatalogRon {
    pub equipment: Vec<EquipmentRef>,
}

/// Loader for equipment master data from RON files.
pub struct EquipmentLoader;

impl EquipmentLoader {
    /// Load the equipment catalog from a RON file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed, or if two records share an id.
    pub fn load(path: &Path) -> LoadResult<EquipmentSnapshot> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load equipment catalog {}: {}", path.display(), e))
    }

    /// Parse an equipment catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<EquipmentSnapshot> {
        let catalog: EquipmentCatalogRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse equipment catalog RON: {}", e))?;

        let snapshot = EquipmentSnapshot::from_records(catalog.equipment).map_err(catalog_error)?;
        tracing::debug!(records = snapshot.len(), "loaded equipment catalog");
        Ok(snapshot)
    }
}
