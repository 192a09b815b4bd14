//! Equipment categories and ship types.
//!
//! Master data identifies both with small integers. Only the codes this crate
//! inspects get named variants; everything else is preserved in `Other` so a
//! category can always be turned back into the code it came from.

use core::fmt;

/// Equipment category (the third entry of the master equipment type tuple).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u16", into = "u16"))]
pub enum EquipmentCategory {
    SmallMainGun,
    MediumMainGun,
    LargeMainGun,
    SecondaryGun,
    Torpedo,
    CarrierFighter,
    CarrierDiveBomber,
    CarrierTorpedoBomber,
    CarrierRecon,
    SeaplaneRecon,
    SeaplaneBomber,
    SmallRadar,
    LargeRadar,
    ApShell,
    SubmarineTorpedo,
    /// Any category code without special meaning here.
    Other(u16),
}

impl EquipmentCategory {
    pub const fn from_code(code: u16) -> Self {
        match code {
            1 => Self::SmallMainGun,
            2 => Self::MediumMainGun,
            3 => Self::LargeMainGun,
            4 => Self::SecondaryGun,
            5 => Self::Torpedo,
            6 => Self::CarrierFighter,
            7 => Self::CarrierDiveBomber,
            8 => Self::CarrierTorpedoBomber,
            9 => Self::CarrierRecon,
            10 => Self::SeaplaneRecon,
            11 => Self::SeaplaneBomber,
            12 => Self::SmallRadar,
            13 => Self::LargeRadar,
            19 => Self::ApShell,
            32 => Self::SubmarineTorpedo,
            other => Self::Other(other),
        }
    }

    pub const fn code(self) -> u16 {
        match self {
            Self::SmallMainGun => 1,
            Self::MediumMainGun => 2,
            Self::LargeMainGun => 3,
            Self::SecondaryGun => 4,
            Self::Torpedo => 5,
            Self::CarrierFighter => 6,
            Self::CarrierDiveBomber => 7,
            Self::CarrierTorpedoBomber => 8,
            Self::CarrierRecon => 9,
            Self::SeaplaneRecon => 10,
            Self::SeaplaneBomber => 11,
            Self::SmallRadar => 12,
            Self::LargeRadar => 13,
            Self::ApShell => 19,
            Self::SubmarineTorpedo => 32,
            Self::Other(code) => code,
        }
    }

    /// Snake-case name of a named category; `None` for [`Self::Other`].
    pub const fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::SmallMainGun => "small_main_gun",
            Self::MediumMainGun => "medium_main_gun",
            Self::LargeMainGun => "large_main_gun",
            Self::SecondaryGun => "secondary_gun",
            Self::Torpedo => "torpedo",
            Self::CarrierFighter => "carrier_fighter",
            Self::CarrierDiveBomber => "carrier_dive_bomber",
            Self::CarrierTorpedoBomber => "carrier_torpedo_bomber",
            Self::CarrierRecon => "carrier_recon",
            Self::SeaplaneRecon => "seaplane_recon",
            Self::SeaplaneBomber => "seaplane_bomber",
            Self::SmallRadar => "small_radar",
            Self::LargeRadar => "large_radar",
            Self::ApShell => "ap_shell",
            Self::SubmarineTorpedo => "submarine_torpedo",
            Self::Other(_) => return None,
        })
    }

    /// Aircraft that take part in the air superiority contest.
    ///
    /// Carrier recon planes are excluded; seaplane bombers count.
    pub const fn is_fighter_type(self) -> bool {
        matches!(
            self,
            Self::CarrierFighter
                | Self::CarrierDiveBomber
                | Self::CarrierTorpedoBomber
                | Self::SeaplaneBomber
        )
    }

    pub const fn is_main_gun(self) -> bool {
        matches!(
            self,
            Self::SmallMainGun | Self::MediumMainGun | Self::LargeMainGun
        )
    }

    /// Planes that enable daytime spotting. Seaplane bombers spot too.
    pub const fn is_recon_plane(self) -> bool {
        matches!(self, Self::SeaplaneRecon | Self::SeaplaneBomber)
    }

    pub const fn is_radar(self) -> bool {
        matches!(self, Self::SmallRadar | Self::LargeRadar)
    }

    pub const fn is_torpedo(self) -> bool {
        matches!(self, Self::Torpedo | Self::SubmarineTorpedo)
    }
}

impl From<u16> for EquipmentCategory {
    fn from(code: u16) -> Self {
        Self::from_code(code)
    }
}

impl From<EquipmentCategory> for u16 {
    fn from(category: EquipmentCategory) -> Self {
        category.code()
    }
}

impl fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "other({})", self.code()),
        }
    }
}

/// Ship type (hull classification) of a master ship record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub enum ShipType {
    /// Coastal defense ship
    De,
    /// Destroyer
    Dd,
    /// Light cruiser
    Cl,
    /// Torpedo cruiser
    Clt,
    /// Heavy cruiser
    Ca,
    /// Aviation cruiser
    Cav,
    /// Light carrier
    Cvl,
    /// Fast battleship
    Fbb,
    /// Battleship
    Bb,
    /// Aviation battleship
    Bbv,
    /// Standard carrier
    Cv,
    /// Super-dreadnought
    Xbb,
    /// Submarine
    Ss,
    /// Aircraft-carrying submarine
    Ssv,
    /// Transport
    Ap,
    /// Seaplane tender
    Av,
    /// Amphibious assault ship
    Lha,
    /// Armored carrier
    Cvb,
    /// Repair ship
    Ar,
    /// Submarine tender
    As,
    /// Training cruiser
    Ct,
    /// Fleet oiler
    Ao,
    Other(u8),
}

impl ShipType {
    pub const fn from_code(code: u8) -> Self {
        match code {
            1 => Self::De,
            2 => Self::Dd,
            3 => Self::Cl,
            4 => Self::Clt,
            5 => Self::Ca,
            6 => Self::Cav,
            7 => Self::Cvl,
            8 => Self::Fbb,
            9 => Self::Bb,
            10 => Self::Bbv,
            11 => Self::Cv,
            12 => Self::Xbb,
            13 => Self::Ss,
            14 => Self::Ssv,
            15 => Self::Ap,
            16 => Self::Av,
            17 => Self::Lha,
            18 => Self::Cvb,
            19 => Self::Ar,
            20 => Self::As,
            21 => Self::Ct,
            22 => Self::Ao,
            other => Self::Other(other),
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::De => 1,
            Self::Dd => 2,
            Self::Cl => 3,
            Self::Clt => 4,
            Self::Ca => 5,
            Self::Cav => 6,
            Self::Cvl => 7,
            Self::Fbb => 8,
            Self::Bb => 9,
            Self::Bbv => 10,
            Self::Cv => 11,
            Self::Xbb => 12,
            Self::Ss => 13,
            Self::Ssv => 14,
            Self::Ap => 15,
            Self::Av => 16,
            Self::Lha => 17,
            Self::Cvb => 18,
            Self::Ar => 19,
            Self::As => 20,
            Self::Ct => 21,
            Self::Ao => 22,
            Self::Other(code) => code,
        }
    }

    /// Hull abbreviation (`DD`, `CV`, ...); `None` for [`Self::Other`].
    pub const fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::De => "DE",
            Self::Dd => "DD",
            Self::Cl => "CL",
            Self::Clt => "CLT",
            Self::Ca => "CA",
            Self::Cav => "CAV",
            Self::Cvl => "CVL",
            Self::Fbb => "FBB",
            Self::Bb => "BB",
            Self::Bbv => "BBV",
            Self::Cv => "CV",
            Self::Xbb => "XBB",
            Self::Ss => "SS",
            Self::Ssv => "SSV",
            Self::Ap => "AP",
            Self::Av => "AV",
            Self::Lha => "LHA",
            Self::Cvb => "CVB",
            Self::Ar => "AR",
            Self::As => "AS",
            Self::Ct => "CT",
            Self::Ao => "AO",
            Self::Other(_) => return None,
        })
    }

    /// Light, standard and armored carriers.
    pub const fn is_carrier(self) -> bool {
        matches!(self, Self::Cvl | Self::Cv | Self::Cvb)
    }

    pub const fn is_submarine(self) -> bool {
        matches!(self, Self::Ss | Self::Ssv)
    }

    /// Surface ships that engage submarines with aircraft instead of depth charges.
    pub const fn is_asw_aviation(self) -> bool {
        matches!(self, Self::Cav | Self::Bbv | Self::Av | Self::Lha)
    }
}

impl From<u8> for ShipType {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

impl From<ShipType> for u8 {
    fn from(ship_type: ShipType) -> Self {
        ship_type.code()
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "type({})", self.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equipment_category_code_table() {
        let table = [
            (1, EquipmentCategory::SmallMainGun),
            (2, EquipmentCategory::MediumMainGun),
            (3, EquipmentCategory::LargeMainGun),
            (4, EquipmentCategory::SecondaryGun),
            (5, EquipmentCategory::Torpedo),
            (6, EquipmentCategory::CarrierFighter),
            (7, EquipmentCategory::CarrierDiveBomber),
            (8, EquipmentCategory::CarrierTorpedoBomber),
            (9, EquipmentCategory::CarrierRecon),
            (10, EquipmentCategory::SeaplaneRecon),
            (11, EquipmentCategory::SeaplaneBomber),
            (12, EquipmentCategory::SmallRadar),
            (13, EquipmentCategory::LargeRadar),
            (19, EquipmentCategory::ApShell),
            (32, EquipmentCategory::SubmarineTorpedo),
        ];

        for (code, category) in table {
            assert_eq!(EquipmentCategory::from_code(code), category, "code {code}");
            assert_eq!(category.code(), code);
        }
    }

    #[test]
    fn unknown_category_codes_are_preserved() {
        for code in [0, 14, 15, 18, 21, 29, 31, 33, 94] {
            let category = EquipmentCategory::from_code(code);
            assert_eq!(category, EquipmentCategory::Other(code));
            assert_eq!(category.code(), code);
        }
    }

    #[test]
    fn fighter_type_codes() {
        let fighters: Vec<u16> = (0..=40)
            .filter(|&code| EquipmentCategory::from_code(code).is_fighter_type())
            .collect();
        assert_eq!(fighters, vec![6, 7, 8, 11]);
    }

    #[test]
    fn day_and_night_groupings() {
        let main_guns: Vec<u16> = (0..=40)
            .filter(|&code| EquipmentCategory::from_code(code).is_main_gun())
            .collect();
        assert_eq!(main_guns, vec![1, 2, 3]);

        let recon: Vec<u16> = (0..=40)
            .filter(|&code| EquipmentCategory::from_code(code).is_recon_plane())
            .collect();
        assert_eq!(recon, vec![10, 11]);

        let radar: Vec<u16> = (0..=40)
            .filter(|&code| EquipmentCategory::from_code(code).is_radar())
            .collect();
        assert_eq!(radar, vec![12, 13]);

        let torpedoes: Vec<u16> = (0..=40)
            .filter(|&code| EquipmentCategory::from_code(code).is_torpedo())
            .collect();
        assert_eq!(torpedoes, vec![5, 32]);
    }

    #[test]
    fn ship_type_code_table() {
        let names = [
            "DE", "DD", "CL", "CLT", "CA", "CAV", "CVL", "FBB", "BB", "BBV", "CV", "XBB", "SS",
            "SSV", "AP", "AV", "LHA", "CVB", "AR", "AS", "CT", "AO",
        ];

        for (index, name) in names.iter().enumerate() {
            let code = index as u8 + 1;
            let ship_type = ShipType::from_code(code);
            assert_eq!(ship_type.code(), code);
            assert_eq!(ship_type.name(), Some(*name));
            assert_eq!(ship_type.to_string(), *name);
        }

        assert_eq!(ShipType::from_code(0), ShipType::Other(0));
        assert_eq!(ShipType::from_code(23).to_string(), "type(23)");
        assert_eq!(ShipType::Other(40).name(), None);
        assert_eq!(ShipType::Other(40).to_string(), "type(40)");
    }

    #[test]
    fn ship_type_groups() {
        let carriers: Vec<u8> = (1..=22)
            .filter(|&code| ShipType::from_code(code).is_carrier())
            .collect();
        assert_eq!(carriers, vec![7, 11, 18]);

        let submarines: Vec<u8> = (1..=22)
            .filter(|&code| ShipType::from_code(code).is_submarine())
            .collect();
        assert_eq!(submarines, vec![13, 14]);

        let asw_aviation: Vec<u8> = (1..=22)
            .filter(|&code| ShipType::from_code(code).is_asw_aviation())
            .collect();
        assert_eq!(asw_aviation, vec![6, 10, 16, 17]);
    }

    #[test]
    fn category_names() {
        assert_eq!(EquipmentCategory::CarrierFighter.name(), Some("carrier_fighter"));
        assert_eq!(EquipmentCategory::ApShell.to_string(), "ap_shell");

        // Codes loaded from master data without a named variant still print.
        for code in [15, 21] {
            let category = EquipmentCategory::from_code(code);
            assert_eq!(category.name(), None);
            assert_eq!(category.to_string(), format!("other({code})"));
        }
    }
}
