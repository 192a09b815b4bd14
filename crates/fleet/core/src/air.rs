//! Air superiority and level scaling.
//!
//! # Formula
//!
//! ```text
//! slot_power  = floor(anti_air * sqrt(aircraft))   (fighter-type slots only)
//! air_power   = sum(slot_power)
//! ```
//!
//! Slots and aircraft counts are paired by index up to the shorter of the two
//! sequences. Every sum saturates at `u32::MAX`. Unknown equipment is an empty slot and contributes nothing, the
//! same goes for ships missing from the catalog when summing over a fleet.

use crate::catalog::{Catalogs, EquipmentCatalog, ShipCatalog, ShipRef};
use crate::config::CoreConfig;
use crate::fleet::{Fleet, ShipInstance};
use crate::ids::{EquipmentId, ShipId};

/// Interpolates a stat between its level 0 value and its level 99 value.
///
/// ```text
/// value = min + (max - min) * level / 99
/// ```
///
/// Division truncates toward zero. Levels outside `0..=99` are not clamped;
/// the line is simply extended.
pub fn level_parameter(min: i32, max: i32, level: i32) -> i32 {
    let span = i64::from(max) - i64::from(min);
    let value = i64::from(min) + span * i64::from(level) / i64::from(CoreConfig::LEVEL_CAP);
    value as i32
}

/// Air power of one slot, truncated like the game's fixed-point arithmetic.
pub fn slot_air_power(anti_air: u32, aircraft: u32) -> u32 {
    (f64::from(anti_air) * f64::from(aircraft).sqrt()) as u32
}

/// Air superiority of one slot layout.
///
/// # Arguments
///
/// * `slots` - Equipment master ids, one per slot
/// * `aircraft` - Aircraft count per slot
/// * `equipment` - Equipment catalog
pub fn air_superiority(
    slots: &[EquipmentId],
    aircraft: &[u32],
    equipment: &(impl EquipmentCatalog + ?Sized),
) -> u32 {
    slots
        .iter()
        .zip(aircraft)
        .filter_map(|(&id, &count)| {
            let eq = equipment.equipment(id)?;
            eq.category
                .is_fighter_type()
                .then(|| slot_air_power(eq.anti_air, count))
        })
        .fold(0, u32::saturating_add)
}

/// Air superiority of a ship in its stock loadout at full plane capacity.
///
/// Ships without known default slots contribute 0.
pub fn master_air_superiority(ship: &ShipRef, equipment: &(impl EquipmentCatalog + ?Sized)) -> u32 {
    match &ship.default_slots {
        Some(slots) => air_superiority(slots, &ship.aircraft, equipment),
        None => 0,
    }
}

/// Air superiority of a live ship with what it currently carries.
pub fn instance_air_superiority(
    ship: &ShipInstance,
    equipment: &(impl EquipmentCatalog + ?Sized),
) -> u32 {
    air_superiority(&ship.slots, &ship.aircraft, equipment)
}

/// Sum over master ship ids, each in its stock loadout.
pub fn fleet_ids_air_superiority<E, S>(fleet: &[ShipId], catalogs: &Catalogs<'_, E, S>) -> u32
where
    E: EquipmentCatalog + ?Sized,
    S: ShipCatalog + ?Sized,
{
    fleet
        .iter()
        .filter_map(|&id| resolve_ship(catalogs, id))
        .map(|ship| master_air_superiority(&ship, catalogs.equipment()))
        .fold(0, u32::saturating_add)
}

/// Sum over master ship ids with caller-supplied slots.
///
/// `slots[i]` is paired with `fleet[i]`; plane counts come from the ship
/// master's capacities. Extra entries on either side are ignored.
pub fn fleet_ids_with_slots_air_superiority<E, S, L>(
    fleet: &[ShipId],
    slots: &[L],
    catalogs: &Catalogs<'_, E, S>,
) -> u32
where
    E: EquipmentCatalog + ?Sized,
    S: ShipCatalog + ?Sized,
    L: AsRef<[EquipmentId]>,
{
    fleet
        .iter()
        .zip(slots)
        .filter_map(|(&id, layout)| {
            let ship = resolve_ship(catalogs, id)?;
            Some(air_superiority(
                layout.as_ref(),
                &ship.aircraft,
                catalogs.equipment(),
            ))
        })
        .fold(0, u32::saturating_add)
}

/// Sum over the ships present in a live fleet.
pub fn fleet_air_superiority(fleet: &Fleet, equipment: &(impl EquipmentCatalog + ?Sized)) -> u32 {
    fleet
        .ships()
        .map(|ship| instance_air_superiority(ship, equipment))
        .fold(0, u32::saturating_add)
}

fn resolve_ship<E, S>(catalogs: &Catalogs<'_, E, S>, id: ShipId) -> Option<ShipRef>
where
    E: EquipmentCatalog + ?Sized,
    S: ShipCatalog + ?Sized,
{
    let ship = catalogs.lookup_ship(id);
    if ship.is_none() {
        tracing::debug!(ship = %id, "ship not in catalog, contributes no air power");
    }
    ship
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EquipmentRef, EquipmentSnapshot};
    use crate::taxonomy::EquipmentCategory;

    fn equipment() -> EquipmentSnapshot {
        EquipmentSnapshot::from_records([
            EquipmentRef::new(EquipmentId(1), EquipmentCategory::CarrierFighter, 10),
            EquipmentRef::new(EquipmentId(2), EquipmentCategory::CarrierDiveBomber, 3),
            EquipmentRef::new(EquipmentId(3), EquipmentCategory::CarrierRecon, 2),
            EquipmentRef::new(EquipmentId(4), EquipmentCategory::SeaplaneBomber, 3),
            EquipmentRef::new(EquipmentId(5), EquipmentCategory::SmallMainGun, 8),
        ])
        .unwrap()
    }

    #[test]
    fn level_parameter_endpoints() {
        assert_eq!(level_parameter(10, 49, 0), 10);
        assert_eq!(level_parameter(10, 49, 99), 49);
        assert_eq!(level_parameter(-5, 5, 99), 5);
    }

    #[test]
    fn level_parameter_truncates_toward_zero() {
        // 10 + 39 * 50 / 99 = 10 + 1950 / 99 = 10 + 19
        assert_eq!(level_parameter(10, 49, 50), 29);
        // Descending: 10 + (-10 * 1) / 99 = 10 + 0
        assert_eq!(level_parameter(10, 0, 1), 10);
    }

    #[test]
    fn level_parameter_extrapolates() {
        // 0 + 99 * 150 / 99
        assert_eq!(level_parameter(0, 99, 150), 150);
        assert_eq!(level_parameter(0, 99, -1), -1);
    }

    #[test]
    fn slot_power_truncates() {
        assert_eq!(slot_air_power(10, 9), 30);
        // 3 * sqrt(20) = 13.416...
        assert_eq!(slot_air_power(3, 20), 13);
        assert_eq!(slot_air_power(7, 0), 0);
    }

    #[test]
    fn only_fighter_types_count() {
        let catalog = equipment();
        let slots = [EquipmentId(1), EquipmentId(2), EquipmentId(3), EquipmentId(4), EquipmentId(5)];
        let aircraft = [9, 20, 16, 4, 16];

        // 30 + 13 + 0 + 6 + 0
        assert_eq!(air_superiority(&slots, &aircraft, &catalog), 49);
    }

    #[test]
    fn unknown_equipment_is_an_empty_slot() {
        let catalog = equipment();
        let slots = [EquipmentId::EMPTY, EquipmentId(999), EquipmentId(1)];

        assert_eq!(air_superiority(&slots, &[16, 16, 9], &catalog), 30);
    }

    #[test]
    fn pairs_up_to_shorter_sequence() {
        let catalog = equipment();

        assert_eq!(air_superiority(&[], &[], &catalog), 0);
        assert_eq!(air_superiority(&[EquipmentId(1)], &[], &catalog), 0);
        assert_eq!(
            air_superiority(&[EquipmentId(1), EquipmentId(1)], &[9], &catalog),
            30
        );
        assert_eq!(air_superiority(&[EquipmentId(1)], &[9, 100, 100], &catalog), 30);
    }

    #[test]
    fn master_without_default_slots_contributes_zero() {
        let catalog = equipment();
        let ship = ShipRef::new(ShipId(1), crate::ShipType::Cv).with_aircraft([9, 9, 9, 9]);

        assert_eq!(master_air_superiority(&ship, &catalog), 0);
        assert_eq!(
            master_air_superiority(&ship.with_default_slots([EquipmentId(1)]), &catalog),
            30
        );
    }
}
