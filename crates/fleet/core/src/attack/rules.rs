//! Ordered equipment rules for special attacks.
//!
//! Each table is evaluated top to bottom and the first rule whose predicate
//! holds decides the attack kind. The order is part of the rule set: several
//! loadouts satisfy more than one predicate.

use super::kind::{DayAttackKind, NightAttackKind};
use super::tally::{DayTally, NightTally};

/// One `(predicate, kind)` pair of a rule table.
#[derive(Clone, Copy)]
pub struct Rule<T, K> {
    pub kind: K,
    pub applies: fn(&T) -> bool,
}

pub type DayRule = Rule<DayTally, DayAttackKind>;
pub type NightRule = Rule<NightTally, NightAttackKind>;

/// Daytime special attacks. Only consulted when a spotting plane is equipped.
pub const DAY_CUTIN_RULES: [DayRule; 5] = [
    Rule {
        kind: DayAttackKind::CutinMainMain,
        applies: |t| t.main_gun == 2 && t.ap_shell == 1,
    },
    Rule {
        kind: DayAttackKind::CutinMainApShell,
        applies: |t| t.main_gun == 1 && t.secondary_gun == 1 && t.ap_shell == 1,
    },
    Rule {
        kind: DayAttackKind::CutinMainRadar,
        applies: |t| t.main_gun == 1 && t.secondary_gun == 1 && t.radar == 1,
    },
    Rule {
        kind: DayAttackKind::CutinMainSecondary,
        applies: |t| t.main_gun >= 1 && t.secondary_gun >= 1,
    },
    Rule {
        kind: DayAttackKind::DoubleAttack,
        applies: |t| t.main_gun >= 2,
    },
];

/// Night special attacks.
pub const NIGHT_CUTIN_RULES: [NightRule; 5] = [
    Rule {
        kind: NightAttackKind::CutinTorpedoTorpedo,
        applies: |t| t.torpedo >= 2,
    },
    Rule {
        kind: NightAttackKind::CutinMainMain,
        applies: |t| t.main_gun >= 3,
    },
    Rule {
        kind: NightAttackKind::CutinMainSecondary,
        applies: |t| t.main_gun == 2 && t.secondary_gun > 0,
    },
    Rule {
        kind: NightAttackKind::CutinMainTorpedo,
        applies: |t| {
            (t.main_gun == 2 && t.secondary_gun == 0 && t.torpedo == 1)
                || (t.main_gun == 1 && t.torpedo == 1)
        },
    },
    Rule {
        kind: NightAttackKind::DoubleAttack,
        applies: |t| {
            (t.main_gun == 2 && t.secondary_gun == 0 && t.torpedo == 0)
                || (t.main_gun == 1 && t.secondary_gun > 0)
                || (t.secondary_gun >= 2 && t.torpedo <= 1)
        },
    },
];

/// Returns the kind of the first rule that applies.
pub fn first_match<T, K: Copy>(rules: &[Rule<T, K>], tally: &T) -> Option<K> {
    rules
        .iter()
        .find(|rule| (rule.applies)(tally))
        .map(|rule| rule.kind)
}
