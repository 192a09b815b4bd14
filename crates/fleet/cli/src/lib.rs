//! Command line front end for the fleet calculators.
//!
//! The binary wires [`config::CliConfig`] and the subcommands in
//! [`commands`] together; everything here is also usable as a library.

pub mod commands;
pub mod config;

pub use config::CliConfig;
