//! Data-driven master data and loaders.
//!
//! This crate reads the files that back the catalogs in `fleet-core`:
//! - Equipment master records (RON)
//! - Ship master records (RON)
//! - Fleet compositions (RON)
//! - Data directory configuration (TOML)
//!
//! Loaded content is turned into `fleet-core` snapshots and never mutated.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, DataConfig, EquipmentLoader, FleetLoader, LoadResult,
    ShipLoader,
};
