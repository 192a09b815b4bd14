//! Fleet air superiority.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use fleet_content::{ContentFactory, FleetLoader};
use fleet_core::{CatalogSnapshot, ShipId, fleet_air_superiority, fleet_ids_air_superiority};

use crate::config::CliConfig;

/// Compute the air superiority of a fleet
#[derive(Parser, Debug)]
pub struct Air {
    /// Master ship ids in fleet order; default equipment and capacities are used
    #[arg(
        long = "ship",
        value_name = "ID",
        num_args = 1..,
        allow_negative_numbers = true,
        conflicts_with = "fleet",
        required_unless_present = "fleet"
    )]
    ships: Vec<i32>,

    /// Live fleet: a `.ron` file path, or a fleet name under `<data-dir>/fleets/`
    #[arg(long, value_name = "FLEET")]
    fleet: Option<PathBuf>,
}

impl Air {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let factory = config.content_factory()?;
        let catalog = factory.load_catalogs()?;
        let value = self.evaluate(&factory, &catalog)?;

        println!("{} {}", style("Air superiority:").bold().cyan(), value);
        Ok(())
    }

    pub fn evaluate(&self, factory: &ContentFactory, catalog: &CatalogSnapshot) -> Result<u32> {
        let Some(fleet) = &self.fleet else {
            let ids: Vec<ShipId> = self.ships.iter().copied().map(ShipId).collect();
            tracing::debug!(ships = ids.len(), "air superiority of master ids");
            return Ok(fleet_ids_air_superiority(&ids, &catalog.catalogs()));
        };

        let fleet = if fleet.extension().is_some_and(|ext| ext == "ron") {
            FleetLoader::load(fleet)?
        } else {
            factory.load_fleet(&fleet.to_string_lossy())?
        };
        tracing::debug!(members = fleet.len(), "air superiority of live fleet");

        Ok(fleet_air_superiority(&fleet, &catalog.equipment))
    }
}
