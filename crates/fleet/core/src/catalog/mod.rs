//! Traits describing read-only master data.
//!
//! Catalogs answer "what is equipment X" and "what is ship Y". Calculators
//! never own master data; they borrow a [`Catalogs`] bundle for the duration
//! of one call, so any backing store (snapshot, database, test fixture) works
//! as long as it answers synchronously.
mod snapshot;

pub use snapshot::{CatalogSnapshot, EquipmentSnapshot, ShipSnapshot};

use crate::ids::{EquipmentId, ShipId};
use crate::taxonomy::{EquipmentCategory, ShipType};

/// Lookup of equipment master records.
pub trait EquipmentCatalog: Send + Sync {
    fn equipment(&self, id: EquipmentId) -> Option<EquipmentRef>;
}

/// Lookup of ship master records.
pub trait ShipCatalog: Send + Sync {
    fn ship(&self, id: ShipId) -> Option<ShipRef>;

    /// Hull type alone. Backends that can answer without building a whole
    /// [`ShipRef`] should override this.
    fn ship_type(&self, id: ShipId) -> Option<ShipType> {
        self.ship(id).map(|ship| ship.ship_type)
    }
}

/// Equipment master record, reduced to the fields the calculators read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentRef {
    pub id: EquipmentId,
    pub category: EquipmentCategory,
    /// Anti-air stat. This is the attack power of aircraft in the air contest.
    pub anti_air: u32,
}

impl EquipmentRef {
    pub fn new(id: EquipmentId, category: EquipmentCategory, anti_air: u32) -> Self {
        Self {
            id,
            category,
            anti_air,
        }
    }
}

/// Ship master record.
///
/// `default_slots` is `None` for ships whose stock loadout is unknown (enemy
/// ships the player has not yet met, for instance). `aircraft` lists the
/// per-slot plane capacity and is usually longer than the slot list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipRef {
    pub id: ShipId,
    pub ship_type: ShipType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub default_slots: Option<Vec<EquipmentId>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub aircraft: Vec<u32>,
}

impl ShipRef {
    pub fn new(id: ShipId, ship_type: ShipType) -> Self {
        Self {
            id,
            ship_type,
            default_slots: None,
            aircraft: Vec::new(),
        }
    }

    pub fn with_default_slots(mut self, slots: impl Into<Vec<EquipmentId>>) -> Self {
        self.default_slots = Some(slots.into());
        self
    }

    pub fn with_aircraft(mut self, aircraft: impl Into<Vec<u32>>) -> Self {
        self.aircraft = aircraft.into();
        self
    }
}

/// Bundles the catalogs a calculation needs.
#[derive(Debug)]
pub struct Catalogs<'a, E, S>
where
    E: EquipmentCatalog + ?Sized,
    S: ShipCatalog + ?Sized,
{
    equipment: &'a E,
    ships: &'a S,
}

/// Trait-object flavour of [`Catalogs`] for callers that mix backends.
pub type CatalogEnv<'a> = Catalogs<'a, dyn EquipmentCatalog + 'a, dyn ShipCatalog + 'a>;

impl<E, S> Clone for Catalogs<'_, E, S>
where
    E: EquipmentCatalog + ?Sized,
    S: ShipCatalog + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, S> Copy for Catalogs<'_, E, S>
where
    E: EquipmentCatalog + ?Sized,
    S: ShipCatalog + ?Sized,
{
}

impl<'a, E, S> Catalogs<'a, E, S>
where
    E: EquipmentCatalog + ?Sized,
    S: ShipCatalog + ?Sized,
{
    pub fn new(equipment: &'a E, ships: &'a S) -> Self {
        Self { equipment, ships }
    }

    pub fn equipment(&self) -> &'a E {
        self.equipment
    }

    pub fn ships(&self) -> &'a S {
        self.ships
    }

    /// Resolves an equipment id; unknown ids (including the empty-slot filler) yield `None`.
    pub fn lookup_equipment(&self, id: EquipmentId) -> Option<EquipmentRef> {
        self.equipment.equipment(id)
    }

    pub fn lookup_ship(&self, id: ShipId) -> Option<ShipRef> {
        self.ships.ship(id)
    }

    pub fn ship_type(&self, id: ShipId) -> Option<ShipType> {
        self.ships.ship_type(id)
    }
}

impl<'a, E, S> Catalogs<'a, E, S>
where
    E: EquipmentCatalog + 'a,
    S: ShipCatalog + 'a,
{
    /// Erases the concrete catalog types.
    pub fn as_catalog_env(&self) -> CatalogEnv<'a> {
        let equipment: &'a dyn EquipmentCatalog = self.equipment;
        let ships: &'a dyn ShipCatalog = self.ships;
        Catalogs::new(equipment, ships)
    }
}
