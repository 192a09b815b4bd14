//! Ship master data loader.

use std::path::Path;

use fleet_core::{ShipRef, ShipSnapshot};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, catalog_error, read_file};

/// Ship catalog structure for RON files.
///
/// Example:
/// ```ron
/// (
///     ships: [
///         (id: 83, ship_type: 11, default_slots: Some([20, 23, 16, -1]), aircraft: [20, 20, 32, 10, 0]),
///         (id: 501, ship_type: 2),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipCatalogRon {
    pub ships: Vec<ShipRef>,
}

/// Loader for ship master data from RON files.
pub struct ShipLoader;

impl ShipLoader {
    /// Load the ship catalog from a RON file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed, or if two records share an id.
    pub fn load(path: &Path) -> LoadResult<ShipSnapshot> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load ship catalog {}: {}", path.display(), e))
    }

    /// Parse a ship catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<ShipSnapshot> {
        let catalog: ShipCatalogRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ship catalog RON: {}", e))?;

        for ship in &catalog.ships {
            if let Some(slots) = &ship.default_slots
                && slots.len() > ship.aircraft.len()
            {
                tracing::warn!(
                    ship = %ship.id,
                    slots = slots.len(),
                    capacities = ship.aircraft.len(),
                    "ship has more default slots than aircraft capacities; extra slots carry no planes"
                );
            }
        }

        let snapshot = ShipSnapshot::from_records(catalog.ships).map_err(catalog_error)?;
        tracing::debug!(records = snapshot.len(), "loaded ship catalog");
        Ok(snapshot)
    }
}
