//! Attack kind classification for day and night battle.
//!
//! Both classifiers are single-shot decision procedures:
//!
//! 1. Missing slot data short-circuits to `NoData`.
//! 2. Equipment is tallied and the ordered rule table is consulted.
//! 3. Otherwise attacker/defender hull types decide ([`ship_type_attack`]).
//! 4. Otherwise the ship shells normally.
//!
//! Nothing is cached between calls and catalogs are only read.

pub mod fallback;
pub mod kind;
pub mod rules;
pub mod tally;

pub use fallback::{ShipTypeAttack, ship_type_attack};
pub use kind::{DayAttackKind, NightAttackKind};
pub use rules::{DAY_CUTIN_RULES, NIGHT_CUTIN_RULES, Rule, first_match};
pub use tally::{DayTally, NightTally};

use crate::catalog::{Catalogs, EquipmentCatalog, ShipCatalog};
use crate::ids::{EquipmentId, ShipId};
use crate::taxonomy::{EquipmentCategory, ShipType};

/// Classifies the daytime shelling attack of a ship.
///
/// # Arguments
///
/// * `slots` - Attacker's equipment master ids; `None` when unknown
/// * `attacker` - Attacker's master ship id
/// * `defender` - Defender's master ship id, if a target is known
/// * `catalogs` - Master data
pub fn classify_day_attack<E, S>(
    slots: Option<&[EquipmentId]>,
    attacker: ShipId,
    defender: Option<ShipId>,
    catalogs: &Catalogs<'_, E, S>,
) -> DayAttackKind
where
    E: EquipmentCatalog + ?Sized,
    S: ShipCatalog + ?Sized,
{
    let Some(slots) = slots else {
        return DayAttackKind::NoData;
    };

    let tally = DayTally::from_slots(slots, catalogs.equipment());
    if tally.recon > 0
        && let Some(kind) = first_match(&DAY_CUTIN_RULES, &tally)
    {
        tracing::trace!(%attacker, ?tally, %kind, "day attack from equipment");
        return kind;
    }

    let (attacker_type, defender_type) = hull_types(attacker, defender, catalogs);
    let kind = match ship_type_attack(attacker_type, defender_type) {
        Some(ShipTypeAttack::AirAttack) => DayAttackKind::AirAttack,
        Some(ShipTypeAttack::DepthCharge) => DayAttackKind::DepthCharge,
        // Intentional: submarines have no daytime shelling entry in the game's
        // own table. They are reported as torpedo attacks here on purpose.
        Some(ShipTypeAttack::Torpedo) => DayAttackKind::Torpedo,
        None => DayAttackKind::Shelling,
    };
    tracing::trace!(%attacker, ?attacker_type, ?defender_type, %kind, "day attack from hull types");
    kind
}

/// Classifies the night battle attack of a ship.
///
/// Same inputs as [`classify_day_attack`].
pub fn classify_night_attack<E, S>(
    slots: Option<&[EquipmentId]>,
    attacker: ShipId,
    defender: Option<ShipId>,
    catalogs: &Catalogs<'_, E, S>,
) -> NightAttackKind
where
    E: EquipmentCatalog + ?Sized,
    S: ShipCatalog + ?Sized,
{
    let Some(slots) = slots else {
        return NightAttackKind::NoData;
    };

    let tally = NightTally::from_slots(slots, catalogs.equipment());
    if let Some(kind) = first_match(&NIGHT_CUTIN_RULES, &tally) {
        tracing::trace!(%attacker, ?tally, %kind, "night attack from equipment");
        return kind;
    }

    let (attacker_type, defender_type) = hull_types(attacker, defender, catalogs);
    let kind = match ship_type_attack(attacker_type, defender_type) {
        Some(ShipTypeAttack::AirAttack) => NightAttackKind::AirAttack,
        Some(ShipTypeAttack::DepthCharge) => NightAttackKind::DepthCharge,
        Some(ShipTypeAttack::Torpedo) => NightAttackKind::Torpedo,
        // Intentional: only the first slot is re-checked, and only for the
        // surface torpedo category. Slightly narrower than the game's own
        // check but it never changes the outcome in practice.
        None if attacker_type.is_some() && first_slot_is_torpedo(slots, catalogs.equipment()) => {
            NightAttackKind::Torpedo
        }
        None => NightAttackKind::Shelling,
    };
    tracing::trace!(%attacker, ?attacker_type, ?defender_type, %kind, "night attack from hull types");
    kind
}

fn hull_types<E, S>(
    attacker: ShipId,
    defender: Option<ShipId>,
    catalogs: &Catalogs<'_, E, S>,
) -> (Option<ShipType>, Option<ShipType>)
where
    E: EquipmentCatalog + ?Sized,
    S: ShipCatalog + ?Sized,
{
    let attacker_type = catalogs.ship_type(attacker);
    let defender_type = defender.and_then(|id| catalogs.ship_type(id));
    (attacker_type, defender_type)
}

fn first_slot_is_torpedo(
    slots: &[EquipmentId],
    equipment: &(impl EquipmentCatalog + ?Sized),
) -> bool {
    slots
        .first()
        .and_then(|&id| equipment.equipment(id))
        .is_some_and(|eq| eq.category == EquipmentCategory::Torpedo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSnapshot, EquipmentRef, EquipmentSnapshot, ShipRef, ShipSnapshot};

    const MAIN_GUN: EquipmentId = EquipmentId(2);
    const SECONDARY: EquipmentId = EquipmentId(4);
    const TORPEDO: EquipmentId = EquipmentId(5);
    const SUB_TORPEDO: EquipmentId = EquipmentId(32);
    const RECON: EquipmentId = EquipmentId(10);

    const DESTROYER: ShipId = ShipId(1);
    const SUBMARINE: ShipId = ShipId(2);

    fn snapshot() -> CatalogSnapshot {
        let equipment = EquipmentSnapshot::from_records([
            EquipmentRef::new(MAIN_GUN, EquipmentCategory::MediumMainGun, 0),
            EquipmentRef::new(SECONDARY, EquipmentCategory::SecondaryGun, 0),
            EquipmentRef::new(TORPEDO, EquipmentCategory::Torpedo, 0),
            EquipmentRef::new(SUB_TORPEDO, EquipmentCategory::SubmarineTorpedo, 0),
            EquipmentRef::new(RECON, EquipmentCategory::SeaplaneRecon, 1),
        ])
        .unwrap();
        let ships = ShipSnapshot::from_records([
            ShipRef::new(DESTROYER, ShipType::Dd),
            ShipRef::new(SUBMARINE, ShipType::Ss),
        ])
        .unwrap();
        CatalogSnapshot::new(equipment, ships)
    }

    fn day(slots: &[EquipmentId], attacker: ShipId, defender: Option<ShipId>) -> DayAttackKind {
        let snapshot = snapshot();
        classify_day_attack(Some(slots), attacker, defender, &snapshot.catalogs())
    }

    fn night(slots: &[EquipmentId], attacker: ShipId, defender: Option<ShipId>) -> NightAttackKind {
        let snapshot = snapshot();
        classify_night_attack(Some(slots), attacker, defender, &snapshot.catalogs())
    }

    /// Answers hull types only; full records are never built.
    struct HullTypes;

    impl ShipCatalog for HullTypes {
        fn ship(&self, _id: ShipId) -> Option<ShipRef> {
            unreachable!("classification only needs hull types")
        }

        fn ship_type(&self, id: ShipId) -> Option<ShipType> {
            match id {
                DESTROYER => Some(ShipType::Dd),
                SUBMARINE => Some(ShipType::Ss),
                _ => None,
            }
        }
    }

    #[test]
    fn missing_slots_are_no_data() {
        let snapshot = snapshot();
        let catalogs = snapshot.catalogs();

        assert_eq!(
            classify_day_attack(None, DESTROYER, None, &catalogs),
            DayAttackKind::NoData
        );
        assert_eq!(
            classify_night_attack(None, DESTROYER, None, &catalogs),
            NightAttackKind::NoData
        );
    }

    #[test]
    fn empty_slots_are_shelling() {
        assert_eq!(day(&[], DESTROYER, None), DayAttackKind::Shelling);
        assert_eq!(night(&[], DESTROYER, None), NightAttackKind::Shelling);
    }

    #[test]
    fn day_cutin_requires_recon() {
        assert_eq!(
            day(&[MAIN_GUN, MAIN_GUN], DESTROYER, None),
            DayAttackKind::Shelling
        );
        assert_eq!(
            day(&[MAIN_GUN, MAIN_GUN, RECON], DESTROYER, None),
            DayAttackKind::DoubleAttack
        );
    }

    #[test]
    fn first_slot_torpedo_recheck() {
        assert_eq!(night(&[TORPEDO], DESTROYER, None), NightAttackKind::Torpedo);
        // Only the first slot is looked at.
        assert_eq!(
            night(&[SECONDARY, TORPEDO], DESTROYER, None),
            NightAttackKind::Shelling
        );
        // Submarine torpedoes do not take part in the re-check.
        assert_eq!(
            night(&[SUB_TORPEDO], DESTROYER, None),
            NightAttackKind::Shelling
        );
        // Unknown attacker skips every hull-type rule, the re-check included.
        assert_eq!(
            night(&[TORPEDO], ShipId(999), None),
            NightAttackKind::Shelling
        );
    }

    #[test]
    fn classifiers_only_read_hull_types() {
        let snapshot = snapshot();
        let catalogs = Catalogs::new(&snapshot.equipment, &HullTypes);

        assert_eq!(
            classify_day_attack(Some(&[][..]), DESTROYER, Some(SUBMARINE), &catalogs),
            DayAttackKind::DepthCharge
        );
        assert_eq!(
            classify_night_attack(Some(&[TORPEDO][..]), DESTROYER, None, &catalogs),
            NightAttackKind::Torpedo
        );
        assert_eq!(
            classify_night_attack(Some(&[][..]), SUBMARINE, Some(ShipId(404)), &catalogs),
            NightAttackKind::Torpedo
        );
    }

    #[test]
    fn submarine_attacker_torpedoes_day_and_night() {
        assert_eq!(
            day(&[SUB_TORPEDO], SUBMARINE, Some(DESTROYER)),
            DayAttackKind::Torpedo
        );
        assert_eq!(
            night(&[SUB_TORPEDO], SUBMARINE, Some(DESTROYER)),
            NightAttackKind::Torpedo
        );
    }
}
