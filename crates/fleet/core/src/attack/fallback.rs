//! Ship-type rules applied when no equipment rule fired.

use crate::taxonomy::ShipType;

/// Attack decided by hull types alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShipTypeAttack {
    AirAttack,
    DepthCharge,
    Torpedo,
}

/// Decides an attack from attacker and defender hull types.
///
/// An unknown attacker decides nothing. An unknown or absent defender is
/// treated as a surface target.
pub fn ship_type_attack(
    attacker: Option<ShipType>,
    defender: Option<ShipType>,
) -> Option<ShipTypeAttack> {
    let attacker = attacker?;

    if attacker.is_carrier() {
        return Some(ShipTypeAttack::AirAttack);
    }

    if defender.is_some_and(ShipType::is_submarine) {
        return Some(if attacker.is_asw_aviation() {
            ShipTypeAttack::AirAttack
        } else {
            ShipTypeAttack::DepthCharge
        });
    }

    if attacker.is_submarine() {
        return Some(ShipTypeAttack::Torpedo);
    }

    None
}
