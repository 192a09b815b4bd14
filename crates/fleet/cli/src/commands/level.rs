//! Level-scaled parameter interpolation.

use anyhow::Result;
use clap::Parser;
use console::style;
use fleet_core::{CoreConfig, level_parameter};

/// Interpolate a parameter between its level 0 and level 99 values
#[derive(Parser, Debug)]
pub struct Level {
    /// Value at level 0
    #[arg(value_name = "MIN", allow_negative_numbers = true)]
    pub min: i32,

    /// Value at level 99
    #[arg(value_name = "MAX", allow_negative_numbers = true)]
    pub max: i32,

    /// Ship level
    #[arg(value_name = "LEVEL", allow_negative_numbers = true)]
    pub level: i32,
}

impl Level {
    pub fn execute(self) -> Result<()> {
        if !(0..=CoreConfig::LEVEL_CAP).contains(&self.level) {
            tracing::warn!(
                level = self.level,
                cap = CoreConfig::LEVEL_CAP,
                "level outside 0..=cap, value is extrapolated"
            );
        }

        println!("{} {}", style("Parameter:").bold().cyan(), self.evaluate());
        Ok(())
    }

    pub fn evaluate(&self) -> i32 {
        level_parameter(self.min, self.max, self.level)
    }
}
