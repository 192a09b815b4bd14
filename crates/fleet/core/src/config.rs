/// Fixed dimensions of the game's data model.
///
/// None of these are enforced by the calculators; they document what
/// well-formed server data looks like and size preallocations.
#[derive(Clone, Copy, Debug)]
pub struct CoreConfig;

impl CoreConfig {
    /// Equipment slots a ship can have.
    pub const MAX_SLOTS: usize = 5;
    /// Ships in a single fleet.
    pub const MAX_FLEET_SHIPS: usize = 6;
    /// Level at which a level-scaled parameter reaches its maximum.
    pub const LEVEL_CAP: i32 = 99;
}
