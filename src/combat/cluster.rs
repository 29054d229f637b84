//! Cluster hit tables
//!
//! A cluster weapon's attack roll is reused to look up how many of its
//! warheads connect. Missile racks read the missile family; every other
//! cluster weapon reads the standard family.

use serde::{Deserialize, Serialize};

use crate::combat::weapons::{Weapon, WeaponClass};

/// Hits per 2d6 roll, index 0 is a roll of 2
type ClusterRow = [u32; 11];

/// Missile racks: (rack size, hits by roll)
const MISSILE_CLUSTER_TABLE: [(i32, ClusterRow); 7] = [
    (2, [1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2]),
    (4, [1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4]),
    (5, [1, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5]),
    (6, [2, 2, 3, 3, 4, 4, 4, 5, 5, 6, 6]),
    (10, [3, 3, 4, 5, 6, 6, 7, 8, 9, 10, 10]),
    (15, [5, 5, 6, 8, 9, 9, 10, 12, 13, 15, 15]),
    (20, [6, 6, 9, 11, 12, 12, 14, 16, 18, 20, 20]),
];

/// Everything else (LB-X, multi-shot cannons): (cluster size, hits by roll)
const STANDARD_CLUSTER_TABLE: [(i32, ClusterRow); 8] = [
    (2, [1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2]),
    (3, [1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3]),
    (4, [1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4]),
    (5, [1, 2, 2, 3, 3, 3, 3, 4, 4, 5, 5]),
    (6, [2, 2, 3, 3, 4, 4, 4, 5, 5, 6, 6]),
    (10, [3, 3, 4, 6, 6, 6, 6, 8, 8, 10, 10]),
    (15, [5, 5, 6, 9, 9, 9, 9, 12, 12, 15, 15]),
    (20, [6, 6, 9, 12, 12, 12, 12, 16, 16, 20, 20]),
];

/// Which cluster table family a weapon reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterFamily {
    Missile,
    Standard,
}

impl ClusterFamily {
    pub fn for_class(class: WeaponClass) -> Self {
        match class {
            WeaponClass::Missile => ClusterFamily::Missile,
            WeaponClass::Energy | WeaponClass::Ballistic => ClusterFamily::Standard,
        }
    }

    fn table(&self) -> &'static [(i32, ClusterRow)] {
        match self {
            ClusterFamily::Missile => &MISSILE_CLUSTER_TABLE,
            ClusterFamily::Standard => &STANDARD_CLUSTER_TABLE,
        }
    }

    /// Cluster sizes this family has a row for
    pub fn sizes(&self) -> impl Iterator<Item = i32> {
        self.table().iter().map(|(size, _)| *size)
    }
}

/// Hits for a cluster size and roll. Unknown size or roll gives 0.
pub fn cluster_hits(family: ClusterFamily, size: i32, roll: u8) -> u32 {
    let Some((_, row)) = family.table().iter().find(|(s, _)| *s == size) else {
        return 0;
    };
    usize::from(roll)
        .checked_sub(2)
        .and_then(|index| row.get(index))
        .copied()
        .unwrap_or(0)
}

/// Number of warheads that land for `roll`
///
/// `None` when the weapon is not a cluster weapon or its size is not positive.
pub fn resolve_cluster_hits(weapon: &Weapon, roll: u8) -> Option<u32> {
    let cluster = weapon.cluster?;
    if cluster.size <= 0 {
        return None;
    }
    let family = ClusterFamily::for_class(weapon.class);
    Some(cluster_hits(family, cluster.size, roll))
}
