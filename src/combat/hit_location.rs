//! Hit location tables (four facings, 2d6 indexed)
//!
//! A location roll is looked up in the table for the side of the target
//! the attack comes from.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use BodyLocation::*;

/// Side of the target facing the attacker
///
/// Deserializes leniently through [`Facing::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    #[default]
    Front,
    Left,
    Right,
    Rear,
}

impl Facing {
    /// Lenient parse for facings coming from map tokens or sheets
    ///
    /// Anything unrecognised falls back to [`Facing::Front`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Facing::Left,
            "right" | "r" => Facing::Right,
            "rear" | "back" | "b" => Facing::Rear,
            _ => Facing::Front,
        }
    }
}

impl<'de> Deserialize<'de> for Facing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Facing::parse(&raw))
    }
}

/// Body locations damage can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyLocation {
    Head,
    CenterTorso,
    LeftTorso,
    RightTorso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
    /// Torso hits from behind land on the rear armor
    CenterTorsoRear,
    LeftTorsoRear,
    RightTorsoRear,
}

impl BodyLocation {
    /// Returns all body locations
    pub fn all() -> [BodyLocation; 11] {
        [
            BodyLocation::Head,
            BodyLocation::CenterTorso,
            BodyLocation::LeftTorso,
            BodyLocation::RightTorso,
            BodyLocation::LeftArm,
            BodyLocation::RightArm,
            BodyLocation::LeftLeg,
            BodyLocation::RightLeg,
            BodyLocation::CenterTorsoRear,
            BodyLocation::LeftTorsoRear,
            BodyLocation::RightTorsoRear,
        ]
    }

    /// Short code used on record sheets and in the battle log
    pub fn code(&self) -> &'static str {
        match self {
            BodyLocation::Head => "HD",
            BodyLocation::CenterTorso => "CT",
            BodyLocation::LeftTorso => "LT",
            BodyLocation::RightTorso => "RT",
            BodyLocation::LeftArm => "LA",
            BodyLocation::RightArm => "RA",
            BodyLocation::LeftLeg => "LL",
            BodyLocation::RightLeg => "RL",
            BodyLocation::CenterTorsoRear => "CTR",
            BodyLocation::LeftTorsoRear => "LTR",
            BodyLocation::RightTorsoRear => "RTR",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|location| location.code().eq_ignore_ascii_case(code))
    }

    pub fn is_rear(&self) -> bool {
        matches!(
            self,
            BodyLocation::CenterTorsoRear
                | BodyLocation::LeftTorsoRear
                | BodyLocation::RightTorsoRear
        )
    }
}

impl fmt::Display for BodyLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Index 0 is a roll of 2, index 10 a roll of 12
type LocationTable = [BodyLocation; 11];

const FRONT_TABLE: LocationTable = [
    CenterTorso,
    RightArm,
    RightArm,
    RightLeg,
    RightTorso,
    CenterTorso,
    LeftTorso,
    LeftLeg,
    LeftArm,
    LeftArm,
    Head,
];

const LEFT_TABLE: LocationTable = [
    LeftTorso,
    LeftLeg,
    LeftArm,
    LeftArm,
    LeftLeg,
    LeftTorso,
    CenterTorso,
    RightTorso,
    RightArm,
    RightLeg,
    Head,
];

const RIGHT_TABLE: LocationTable = [
    RightTorso,
    RightLeg,
    RightArm,
    RightArm,
    RightLeg,
    RightTorso,
    CenterTorso,
    LeftTorso,
    LeftArm,
    LeftLeg,
    Head,
];

const REAR_TABLE: LocationTable = [
    CenterTorsoRear,
    RightArm,
    RightArm,
    RightLeg,
    RightTorsoRear,
    CenterTorsoRear,
    LeftTorsoRear,
    LeftLeg,
    LeftArm,
    LeftArm,
    Head,
];

fn table_for(facing: Facing) -> &'static LocationTable {
    match facing {
        Facing::Front => &FRONT_TABLE,
        Facing::Left => &LEFT_TABLE,
        Facing::Right => &RIGHT_TABLE,
        Facing::Rear => &REAR_TABLE,
    }
}

/// Location hit by a 2d6 location roll against the given facing
///
/// Rolls outside 2..=12 have no table entry and land on the center torso.
pub fn resolve_hit_location(facing: Facing, roll: u8) -> BodyLocation {
    usize::from(roll)
        .checked_sub(2)
        .and_then(|index| table_for(facing).get(index))
        .copied()
        .unwrap_or(BodyLocation::CenterTorso)
}
