//! Common error infrastructure for fleet-core.
//!
//! The calculators themselves never fail: every lookup miss degrades to a
//! defined default. Errors only arise while assembling catalogs from raw
//! master data, where an inconsistent record must be rejected before any
//! calculation sees it.

use crate::ids::{EquipmentId, ShipId};

/// Common trait for all fleet-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Codes are stable and safe to match on in callers and logs
pub trait FleetError: core::error::Error {
    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Errors raised while building a catalog snapshot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    /// Two equipment records share one master id.
    #[error("equipment {0} is defined more than once")]
    DuplicateEquipment(EquipmentId),

    /// Two ship records share one master id.
    #[error("ship {0} is defined more than once")]
    DuplicateShip(ShipId),
}

impl FleetError for CatalogError {
    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            DuplicateEquipment(_) => "CATALOG_DUPLICATE_EQUIPMENT",
            DuplicateShip(_) => "CATALOG_DUPLICATE_SHIP",
        }
    }
}
