//! Deterministic combat arithmetic for fleet battle analysis.
//!
//! `fleet-core` computes air superiority for carried aircraft and classifies
//! which attack a ship performs in day and night battle. All functions are
//! pure: master data is borrowed through the [`catalog`] traits, inputs are
//! never mutated, and identical inputs always give identical outputs.
pub mod air;
pub mod attack;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fleet;
pub mod ids;
pub mod taxonomy;

pub use air::{
    air_superiority, fleet_air_superiority, fleet_ids_air_superiority,
    fleet_ids_with_slots_air_superiority, instance_air_superiority, level_parameter,
    master_air_superiority, slot_air_power,
};
pub use attack::{DayAttackKind, NightAttackKind, classify_day_attack, classify_night_attack};
pub use catalog::{
    CatalogEnv, CatalogSnapshot, Catalogs, EquipmentCatalog, EquipmentRef, EquipmentSnapshot,
    ShipCatalog, ShipRef, ShipSnapshot,
};
pub use config::CoreConfig;
pub use error::{CatalogError, FleetError};
pub use fleet::{Fleet, ShipInstance};
pub use ids::{EquipmentId, ShipId};
pub use taxonomy::{EquipmentCategory, ShipType};
