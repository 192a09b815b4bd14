//! Identifiers for master data records.
//!
//! Both identifiers wrap the raw integer the game server uses. Negative
//! values show up in slot arrays as the "nothing equipped" filler; they are
//! legal identifiers that never resolve in a catalog.

use core::fmt;

/// Master identifier of an equipment record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EquipmentId(pub i32);

impl EquipmentId {
    /// Filler the server writes into unused slots.
    pub const EMPTY: Self = Self(-1);
}

impl Default for EquipmentId {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<i32> for EquipmentId {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EquipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "eq#{}", self.0)
    }
}

/// Master identifier of a ship record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ShipId(pub i32);

impl ShipId {
    /// Placeholder for "no ship", e.g. when no defender is targeted.
    pub const NONE: Self = Self(-1);
}

impl Default for ShipId {
    fn default() -> Self {
        Self::NONE
    }
}

impl From<i32> for ShipId {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ship#{}", self.0)
    }
}
