//! Live ship instances and fleet composition.
//!
//! Instances are owned by the caller (typically rebuilt from the latest
//! server response) and only read by the calculators.

use crate::config::CoreConfig;
use crate::ids::{EquipmentId, ShipId};

/// A ship the player owns, with what it actually carries right now.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipInstance {
    /// Master id of the ship.
    pub ship_id: ShipId,
    /// Master ids of equipped items, one per slot.
    #[cfg_attr(feature = "serde", serde(default))]
    pub slots: Vec<EquipmentId>,
    /// Aircraft currently loaded in each slot.
    #[cfg_attr(feature = "serde", serde(default))]
    pub aircraft: Vec<u32>,
}

impl ShipInstance {
    pub fn new(ship_id: ShipId) -> Self {
        Self {
            ship_id,
            slots: Vec::with_capacity(CoreConfig::MAX_SLOTS),
            aircraft: Vec::with_capacity(CoreConfig::MAX_SLOTS),
        }
    }

    /// Appends a slot holding `equipment` with `aircraft` planes loaded.
    pub fn with_slot(mut self, equipment: EquipmentId, aircraft: u32) -> Self {
        self.slots.push(equipment);
        self.aircraft.push(aircraft);
        self
    }
}

/// Ordered fleet positions; `None` marks an empty position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    pub members: Vec<Option<ShipInstance>>,
}

impl Fleet {
    pub fn new(members: Vec<Option<ShipInstance>>) -> Self {
        Self { members }
    }

    /// Ships actually present, in fleet order.
    pub fn ships(&self) -> impl Iterator<Item = &ShipInstance> {
        self.members.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether the fleet fits in a single in-game fleet.
    pub fn is_within_capacity(&self) -> bool {
        self.members.len() <= CoreConfig::MAX_FLEET_SHIPS
    }
}

impl FromIterator<ShipInstance> for Fleet {
    fn from_iter<T: IntoIterator<Item = ShipInstance>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(Some).collect())
    }
}
