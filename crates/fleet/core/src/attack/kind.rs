//! Attack kinds produced by the classifiers.
//!
//! Codes follow the server's battle data so a classification can be compared
//! directly against what the battle actually did. `NoData` (`-1`) means the
//! slot list itself was missing; `Shelling` (`0`) means the ship was
//! classified and fires a plain shot. The two must never be conflated.

use core::fmt;

/// Daytime shelling attack kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::AsRefStr, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DayAttackKind {
    /// No slot data was available.
    NoData,
    /// Single shot.
    Shelling,
    /// Two shots.
    DoubleAttack,
    /// Main gun + secondary gun.
    CutinMainSecondary,
    /// Main gun + radar.
    CutinMainRadar,
    /// Main gun + AP shell.
    CutinMainApShell,
    /// Main gun + main gun.
    CutinMainMain,
    /// Carrier-style air strike.
    AirAttack,
    /// Depth charges against a submarine.
    DepthCharge,
    /// Torpedo.
    Torpedo,
}

impl DayAttackKind {
    pub const fn code(self) -> i32 {
        match self {
            Self::NoData => -1,
            Self::Shelling => 0,
            Self::DoubleAttack => 2,
            Self::CutinMainSecondary => 3,
            Self::CutinMainRadar => 4,
            Self::CutinMainApShell => 5,
            Self::CutinMainMain => 6,
            Self::AirAttack => 7,
            Self::DepthCharge => 8,
            Self::Torpedo => 9,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            -1 => Self::NoData,
            0 => Self::Shelling,
            2 => Self::DoubleAttack,
            3 => Self::CutinMainSecondary,
            4 => Self::CutinMainRadar,
            5 => Self::CutinMainApShell,
            6 => Self::CutinMainMain,
            7 => Self::AirAttack,
            8 => Self::DepthCharge,
            9 => Self::Torpedo,
            _ => return None,
        })
    }

    pub const fn is_cutin(self) -> bool {
        matches!(
            self,
            Self::CutinMainSecondary
                | Self::CutinMainRadar
                | Self::CutinMainApShell
                | Self::CutinMainMain
        )
    }
}

impl fmt::Display for DayAttackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Night battle attack kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::AsRefStr, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum NightAttackKind {
    /// No slot data was available.
    NoData,
    /// Single shot.
    Shelling,
    /// Two shots.
    DoubleAttack,
    /// Main gun + torpedo.
    CutinMainTorpedo,
    /// Torpedo + torpedo.
    CutinTorpedoTorpedo,
    /// Two main guns + secondary gun.
    CutinMainSecondary,
    /// Three main guns.
    CutinMainMain,
    /// Carrier-style air strike.
    AirAttack,
    /// Depth charges against a submarine.
    DepthCharge,
    /// Torpedo.
    Torpedo,
}

impl NightAttackKind {
    pub const fn code(self) -> i32 {
        match self {
            Self::NoData => -1,
            Self::Shelling => 0,
            Self::DoubleAttack => 1,
            Self::CutinMainTorpedo => 2,
            Self::CutinTorpedoTorpedo => 3,
            Self::CutinMainSecondary => 4,
            Self::CutinMainMain => 5,
            Self::AirAttack => 7,
            Self::DepthCharge => 8,
            Self::Torpedo => 9,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            -1 => Self::NoData,
            0 => Self::Shelling,
            1 => Self::DoubleAttack,
            2 => Self::CutinMainTorpedo,
            3 => Self::CutinTorpedoTorpedo,
            4 => Self::CutinMainSecondary,
            5 => Self::CutinMainMain,
            7 => Self::AirAttack,
            8 => Self::DepthCharge,
            9 => Self::Torpedo,
            _ => return None,
        })
    }

    pub const fn is_cutin(self) -> bool {
        matches!(
            self,
            Self::CutinMainTorpedo
                | Self::CutinTorpedoTorpedo
                | Self::CutinMainSecondary
                | Self::CutinMainMain
        )
    }
}

impl fmt::Display for NightAttackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}
