//! In-memory catalogs backed by ordered maps.
//!
//! Snapshots are what content loaders produce and what tests use as
//! fixtures. They serialize as a flat list of records; duplicate ids are
//! rejected both when inserting and when deserializing.

use std::collections::BTreeMap;

use super::{Catalogs, EquipmentCatalog, EquipmentRef, ShipCatalog, ShipRef};
use crate::error::CatalogError;
use crate::ids::{EquipmentId, ShipId};
use crate::taxonomy::ShipType;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Equipment master records keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<EquipmentRef>", into = "Vec<EquipmentRef>")
)]
pub struct EquipmentSnapshot {
    records: BTreeMap<EquipmentId, EquipmentRef>,
}

impl EquipmentSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a snapshot from a list of records.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateEquipment` if two records share an id.
    pub fn from_records(
        records: impl IntoIterator<Item = EquipmentRef>,
    ) -> Result<Self, CatalogError> {
        let mut snapshot = Self::empty();
        for record in records {
            snapshot.insert(record)?;
        }
        Ok(snapshot)
    }

    /// Adds one record.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateEquipment` if the id is already present.
    pub fn insert(&mut self, record: EquipmentRef) -> Result<(), CatalogError> {
        if self.records.contains_key(&record.id) {
            return Err(CatalogError::DuplicateEquipment(record.id));
        }
        self.records.insert(record.id, record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl EquipmentCatalog for EquipmentSnapshot {
    fn equipment(&self, id: EquipmentId) -> Option<EquipmentRef> {
        self.records.get(&id).copied()
    }
}

impl TryFrom<Vec<EquipmentRef>> for EquipmentSnapshot {
    type Error = CatalogError;

    fn try_from(records: Vec<EquipmentRef>) -> Result<Self, Self::Error> {
        Self::from_records(records)
    }
}

impl From<EquipmentSnapshot> for Vec<EquipmentRef> {
    fn from(snapshot: EquipmentSnapshot) -> Self {
        snapshot.records.into_values().collect()
    }
}

/// Ship master records keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<ShipRef>", into = "Vec<ShipRef>"))]
pub struct ShipSnapshot {
    records: BTreeMap<ShipId, ShipRef>,
}

impl ShipSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a snapshot from a list of records.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateShip` if two records share an id.
    pub fn from_records(records: impl IntoIterator<Item = ShipRef>) -> Result<Self, CatalogError> {
        let mut snapshot = Self::empty();
        for record in records {
            snapshot.insert(record)?;
        }
        Ok(snapshot)
    }

    /// Adds one record.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateShip` if the id is already present.
    pub fn insert(&mut self, record: ShipRef) -> Result<(), CatalogError> {
        if self.records.contains_key(&record.id) {
            return Err(CatalogError::DuplicateShip(record.id));
        }
        self.records.insert(record.id, record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ShipCatalog for ShipSnapshot {
    fn ship(&self, id: ShipId) -> Option<ShipRef> {
        self.records.get(&id).cloned()
    }

    fn ship_type(&self, id: ShipId) -> Option<ShipType> {
        self.records.get(&id).map(|ship| ship.ship_type)
    }
}

impl TryFrom<Vec<ShipRef>> for ShipSnapshot {
    type Error = CatalogError;

    fn try_from(records: Vec<ShipRef>) -> Result<Self, Self::Error> {
        Self::from_records(records)
    }
}

impl From<ShipSnapshot> for Vec<ShipRef> {
    fn from(snapshot: ShipSnapshot) -> Self {
        snapshot.records.into_values().collect()
    }
}

/// Complete master data snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogSnapshot {
    pub equipment: EquipmentSnapshot,
    pub ships: ShipSnapshot,
}

impl CatalogSnapshot {
    pub fn new(equipment: EquipmentSnapshot, ships: ShipSnapshot) -> Self {
        Self { equipment, ships }
    }

    /// Borrows both snapshots as a [`Catalogs`] bundle.
    pub fn catalogs(&self) -> Catalogs<'_, EquipmentSnapshot, ShipSnapshot> {
        Catalogs::new(&self.equipment, &self.ships)
    }
}
