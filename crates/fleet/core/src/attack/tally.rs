//! Equipment counters the attack rules are written against.

use crate::catalog::EquipmentCatalog;
use crate::ids::EquipmentId;
use crate::taxonomy::EquipmentCategory;

/// Equipment counts relevant to daytime shelling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DayTally {
    pub recon: u32,
    pub main_gun: u32,
    pub secondary_gun: u32,
    pub ap_shell: u32,
    pub radar: u32,
}

impl DayTally {
    /// Counts every resolvable slot; unknown ids are skipped.
    pub fn from_slots(slots: &[EquipmentId], equipment: &(impl EquipmentCatalog + ?Sized)) -> Self {
        let mut tally = Self::default();
        for eq in slots.iter().filter_map(|&id| equipment.equipment(id)) {
            tally.record(eq.category);
        }
        tally
    }

    pub fn record(&mut self, category: EquipmentCategory) {
        if category.is_main_gun() {
            self.main_gun += 1;
        } else if category == EquipmentCategory::SecondaryGun {
            self.secondary_gun += 1;
        } else if category.is_recon_plane() {
            self.recon += 1;
        } else if category.is_radar() {
            self.radar += 1;
        } else if category == EquipmentCategory::ApShell {
            self.ap_shell += 1;
        }
    }
}

/// Equipment counts relevant to night battle. Spotting planes, radar and
/// AP shells play no part at night.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NightTally {
    pub main_gun: u32,
    pub secondary_gun: u32,
    pub torpedo: u32,
}

impl NightTally {
    /// Counts every resolvable slot; unknown ids are skipped.
    pub fn from_slots(slots: &[EquipmentId], equipment: &(impl EquipmentCatalog + ?Sized)) -> Self {
        let mut tally = Self::default();
        for eq in slots.iter().filter_map(|&id| equipment.equipment(id)) {
            tally.record(eq.category);
        }
        tally
    }

    pub fn record(&mut self, category: EquipmentCategory) {
        if category.is_main_gun() {
            self.main_gun += 1;
        } else if category == EquipmentCategory::SecondaryGun {
            self.secondary_gun += 1;
        } else if category.is_torpedo() {
            self.torpedo += 1;
        }
    }
}
