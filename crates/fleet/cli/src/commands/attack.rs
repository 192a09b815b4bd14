//! Day and night attack kind classification.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use clap::{Args, Parser};
use console::style;
use fleet_core::{
    Catalogs, DayAttackKind, EquipmentCatalog, EquipmentId, NightAttackKind, ShipCatalog, ShipId,
    ShipType, classify_day_attack, classify_night_attack,
};

use crate::config::CliConfig;

/// Comma separated equipment master ids, `-1` for an empty slot.
///
/// An empty string is a ship with nothing equipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlotList(pub Vec<EquipmentId>);

impl FromStr for SlotList {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<i32>().map(EquipmentId))
            .collect::<Result<Vec<_>, _>>()
            .map(SlotList)
    }
}

/// A classified attack, ready to print.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackReport {
    pub code: i32,
    pub name: String,
    pub cutin: bool,
    pub attacker: Option<ShipType>,
    pub defender: Option<ShipType>,
}

impl fmt::Display for AttackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}", self.code, self.name)?;
        if self.cutin {
            f.write_str(", cut-in")?;
        }
        f.write_str(")")?;

        match self.attacker {
            Some(hull) => write!(f, " {hull}")?,
            None => f.write_str(" unknown ship")?,
        }
        if let Some(hull) = self.defender {
            write!(f, " vs {hull}")?;
        }
        Ok(())
    }
}

/// Arguments shared by `day` and `night`.
#[derive(Args, Debug)]
pub struct AttackArgs {
    /// Attacker's equipment, e.g. `--slots=7,7,116,25`; omit when unknown
    #[arg(long, value_name = "IDS", allow_hyphen_values = true)]
    pub slots: Option<SlotList>,

    /// Attacker's master ship id
    #[arg(long, value_name = "ID", allow_negative_numbers = true)]
    pub attacker: i32,

    /// Defender's master ship id
    #[arg(long, value_name = "ID", allow_negative_numbers = true)]
    pub defender: Option<i32>,
}

impl AttackArgs {
    fn slots(&self) -> Option<&[EquipmentId]> {
        self.slots.as_ref().map(|list| list.0.as_slice())
    }

    fn attacker(&self) -> ShipId {
        ShipId(self.attacker)
    }

    fn defender(&self) -> Option<ShipId> {
        self.defender.map(ShipId)
    }

    fn hulls<E, S>(&self, catalogs: &Catalogs<'_, E, S>) -> (Option<ShipType>, Option<ShipType>)
    where
        E: EquipmentCatalog + ?Sized,
        S: ShipCatalog + ?Sized,
    {
        (
            catalogs.ship_type(self.attacker()),
            self.defender().and_then(|id| catalogs.ship_type(id)),
        )
    }
}

/// Classify a daytime shelling attack
#[derive(Parser, Debug)]
pub struct Day {
    #[command(flatten)]
    pub attack: AttackArgs,
}

impl Day {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let catalog = config.content_factory()?.load_catalogs()?;
        let report = self.report(&catalog.catalogs());

        println!("{} {}", style("Day attack:").bold().cyan(), style(report).bold());
        Ok(())
    }

    pub fn report<E, S>(&self, catalogs: &Catalogs<'_, E, S>) -> AttackReport
    where
        E: EquipmentCatalog + ?Sized,
        S: ShipCatalog + ?Sized,
    {
        let kind = self.evaluate(catalogs);
        let (attacker, defender) = self.attack.hulls(catalogs);
        AttackReport {
            code: kind.code(),
            name: kind.to_string(),
            cutin: kind.is_cutin(),
            attacker,
            defender,
        }
    }

    pub fn evaluate<E, S>(&self, catalogs: &Catalogs<'_, E, S>) -> DayAttackKind
    where
        E: EquipmentCatalog + ?Sized,
        S: ShipCatalog + ?Sized,
    {
        let args = &self.attack;
        classify_day_attack(args.slots(), args.attacker(), args.defender(), catalogs)
    }
}

/// Classify a night battle attack
#[derive(Parser, Debug)]
pub struct Night {
    #[command(flatten)]
    pub attack: AttackArgs,
}

impl Night {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let catalog = config.content_factory()?.load_catalogs()?;
        let report = self.report(&catalog.catalogs());

        println!("{} {}", style("Night attack:").bold().cyan(), style(report).bold());
        Ok(())
    }

    pub fn report<E, S>(&self, catalogs: &Catalogs<'_, E, S>) -> AttackReport
    where
        E: EquipmentCatalog + ?Sized,
        S: ShipCatalog + ?Sized,
    {
        let kind = self.evaluate(catalogs);
        let (attacker, defender) = self.attack.hulls(catalogs);
        AttackReport {
            code: kind.code(),
            name: kind.to_string(),
            cutin: kind.is_cutin(),
            attacker,
            defender,
        }
    }

    pub fn evaluate<E, S>(&self, catalogs: &Catalogs<'_, E, S>) -> NightAttackKind
    where
        E: EquipmentCatalog + ?Sized,
        S: ShipCatalog + ?Sized,
    {
        let args = &self.attack;
        classify_night_attack(args.slots(), args.attacker(), args.defender(), catalogs)
    }
}
