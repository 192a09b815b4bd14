//! Fleet composition loader.

use std::path::Path;

use fleet_core::{CoreConfig, Fleet};

use crate::loaders::{LoadResult, read_file};

/// Loader for live fleet compositions from RON files.
///
/// Example:
/// ```ron
/// (
///     members: [
///         Some((ship_id: 83, slots: [20, 23, 16, -1], aircraft: [20, 20, 32, 10])),
///         None,
///     ],
/// )
/// ```
pub struct FleetLoader;

impl FleetLoader {
    /// Load a fleet from a RON file.
    pub fn load(path: &Path) -> LoadResult<Fleet> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load fleet {}: {}", path.display(), e))
    }

    /// Parse a fleet from RON text.
    pub fn parse(content: &str) -> LoadResult<Fleet> {
        let fleet: Fleet = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse fleet RON: {}", e))?;

        if !fleet.is_within_capacity() {
            tracing::warn!(
                members = fleet.len(),
                capacity = CoreConfig::MAX_FLEET_SHIPS,
                "fleet is larger than an in-game fleet"
            );
        }

        Ok(fleet)
    }
}
