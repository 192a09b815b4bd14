//! Subcommand implementations.
//!
//! Each command is a separate module that owns its CLI args and execution logic.

mod air;
mod attack;
mod level;

pub use air::Air;
pub use attack::{AttackArgs, AttackReport, Day, Night, SlotList};
pub use level::Level;
