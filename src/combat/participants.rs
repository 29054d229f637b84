//! Attacker and target records
//!
//! Built fresh by the caller for each attack and never mutated by the engine.

use serde::{Deserialize, Serialize};

use crate::combat::hit_location::Facing;

/// How the attacker moved this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementMode {
    #[default]
    Stationary,
    Walked,
    Ran,
    Jumped,
}

impl MovementMode {
    /// Attacker movement to-hit modifier
    pub fn modifier(&self) -> i32 {
        match self {
            MovementMode::Stationary | MovementMode::Walked => 0,
            MovementMode::Ran => 2,
            MovementMode::Jumped => 3,
        }
    }
}

/// The unit making the attack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attacker {
    pub gunnery: i32,
    pub piloting: i32,
    #[serde(default)]
    pub movement: MovementMode,
    #[serde(default)]
    pub targeting_computer: bool,
    /// Free-form bonus granted by the theater of operations
    #[serde(default)]
    pub theater_bonus: i32,
}

impl Attacker {
    pub fn new(gunnery: i32, piloting: i32) -> Self {
        Self {
            gunnery,
            piloting,
            movement: MovementMode::Stationary,
            targeting_computer: false,
            theater_bonus: 0,
        }
    }

    /// Standard 4/5 pilot
    pub fn regular() -> Self {
        Self::new(4, 5)
    }

    /// 3/4 pilot
    pub fn veteran() -> Self {
        Self::new(3, 4)
    }

    /// 5/6 pilot
    pub fn green() -> Self {
        Self::new(5, 6)
    }

    pub fn moving(mut self, movement: MovementMode) -> Self {
        self.movement = movement;
        self
    }
}

impl Default for Attacker {
    fn default() -> Self {
        Self::regular()
    }
}

/// Woods density of a single hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WoodsDensity {
    Light,
    Heavy,
}

/// The unit being shot at
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Target {
    /// Hexes moved this turn
    #[serde(default)]
    pub hexes_moved: u32,
    /// Woods in the target's own hex
    #[serde(default)]
    pub woods: Option<WoodsDensity>,
    #[serde(default)]
    pub partial_cover: bool,
    #[serde(default)]
    pub prone: bool,
    /// Shut down, destroyed legs, or otherwise unable to move
    #[serde(default)]
    pub immobile: bool,
    #[serde(default)]
    pub facing: Facing,
}

impl Target {
    /// Stationary, in the open, seen from the front
    pub fn standing() -> Self {
        Self::default()
    }

    pub fn immobile() -> Self {
        Self {
            immobile: true,
            ..Self::default()
        }
    }

    pub fn moved(mut self, hexes: u32) -> Self {
        self.hexes_moved = hexes;
        self
    }

    pub fn facing(mut self, facing: Facing) -> Self {
        self.facing = facing;
        self
    }

    /// Woods hexes the target's own hex adds: (light, heavy)
    pub fn own_hex_woods(&self) -> (u32, u32) {
        match self.woods {
            Some(WoodsDensity::Light) => (1, 0),
            Some(WoodsDensity::Heavy) => (0, 1),
            None => (0, 0),
        }
    }
}
