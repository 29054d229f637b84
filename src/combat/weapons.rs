//! Weapon records for to-hit and damage resolution
//!
//! A weapon carries its range bands, damage, heat, and an optional
//! cluster descriptor. Range bands determine the range modifier via
//! a closed set of bands, not arithmetic on distance.

use serde::{Deserialize, Serialize};

/// Broad weapon family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponClass {
    /// Lasers, PPCs
    Energy,
    /// Autocannons, machine guns, LB-X
    Ballistic,
    /// LRM and SRM racks
    Missile,
}

/// Which band a distance falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeBand {
    Short,
    Medium,
    Long,
    /// Past the long threshold - cannot hit
    Beyond,
}

impl RangeBand {
    /// To-hit modifier for the band, `None` when the shot is impossible
    pub fn modifier(&self) -> Option<i32> {
        match self {
            RangeBand::Short => Some(0),
            RangeBand::Medium => Some(2),
            RangeBand::Long => Some(4),
            RangeBand::Beyond => None,
        }
    }
}

/// Range thresholds in hexes, inclusive upper bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeBands {
    #[serde(default)]
    pub minimum: Option<u32>,
    pub short: u32,
    pub medium: u32,
    pub long: u32,
}

impl RangeBands {
    pub fn new(short: u32, medium: u32, long: u32) -> Self {
        Self {
            minimum: None,
            short,
            medium,
            long,
        }
    }

    pub fn with_minimum(mut self, minimum: u32) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Short <= medium <= long
    pub fn is_ordered(&self) -> bool {
        self.short <= self.medium && self.medium <= self.long
    }

    pub fn band_for(&self, distance: u32) -> RangeBand {
        if distance <= self.short {
            RangeBand::Short
        } else if distance <= self.medium {
            RangeBand::Medium
        } else if distance <= self.long {
            RangeBand::Long
        } else {
            RangeBand::Beyond
        }
    }
}

/// Multi-warhead payload: one attack roll decides how many warheads land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterDescriptor {
    /// Warheads per rack. Non-positive means the cluster table does not apply.
    pub size: i32,
    /// Damage each landed warhead deals
    pub damage_per_hit: u32,
}

/// Complete weapon record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage: u32,
    pub heat: u32,
    pub class: WeaponClass,
    pub range: RangeBands,
    #[serde(default)]
    pub pulse: bool,
    /// Flat to-hit adjustment built into the weapon
    #[serde(default)]
    pub targeting_bonus: Option<i32>,
    #[serde(default)]
    pub cluster: Option<ClusterDescriptor>,
}

impl Weapon {
    pub fn new(
        name: impl Into<String>,
        damage: u32,
        heat: u32,
        class: WeaponClass,
        range: RangeBands,
    ) -> Self {
        Self {
            name: name.into(),
            damage,
            heat,
            class,
            range,
            pulse: false,
            targeting_bonus: None,
            cluster: None,
        }
    }

    pub fn is_cluster(&self) -> bool {
        self.cluster.is_some()
    }

    pub fn medium_laser() -> Self {
        Self::new("Medium Laser", 5, 3, WeaponClass::Energy, RangeBands::new(3, 6, 9))
    }

    pub fn large_laser() -> Self {
        Self::new("Large Laser", 8, 8, WeaponClass::Energy, RangeBands::new(5, 10, 15))
    }

    pub fn medium_pulse_laser() -> Self {
        Self {
            pulse: true,
            ..Self::new(
                "Medium Pulse Laser",
                6,
                4,
                WeaponClass::Energy,
                RangeBands::new(2, 4, 6),
            )
        }
    }

    /// PPC: minimum range 3
    pub fn ppc() -> Self {
        Self::new(
            "PPC",
            10,
            10,
            WeaponClass::Energy,
            RangeBands::new(6, 12, 18).with_minimum(3),
        )
    }

    pub fn autocannon_10() -> Self {
        Self::new("AC/10", 10, 3, WeaponClass::Ballistic, RangeBands::new(5, 10, 15))
    }

    pub fn autocannon_20() -> Self {
        Self::new("AC/20", 20, 7, WeaponClass::Ballistic, RangeBands::new(3, 6, 9))
    }

    pub fn machine_gun() -> Self {
        Self::new("Machine Gun", 2, 0, WeaponClass::Ballistic, RangeBands::new(1, 2, 3))
    }

    /// LB 10-X firing cluster rounds: ballistic, standard cluster table
    pub fn lb_10x() -> Self {
        Self {
            cluster: Some(ClusterDescriptor {
                size: 10,
                damage_per_hit: 1,
            }),
            ..Self::new("LB 10-X AC", 10, 2, WeaponClass::Ballistic, RangeBands::new(6, 12, 18))
        }
    }

    /// Long-range missile rack: 1 damage per missile, minimum range 6
    pub fn lrm(size: i32) -> Self {
        let heat = if size <= 5 {
            2
        } else if size <= 10 {
            4
        } else if size <= 15 {
            5
        } else {
            6
        };
        Self {
            cluster: Some(ClusterDescriptor {
                size,
                damage_per_hit: 1,
            }),
            ..Self::new(
                format!("LRM {}", size),
                size.max(0) as u32,
                heat,
                WeaponClass::Missile,
                RangeBands::new(7, 14, 21).with_minimum(6),
            )
        }
    }

    /// Short-range missile rack: 2 damage per missile
    pub fn srm(size: i32) -> Self {
        let heat = if size <= 2 {
            2
        } else if size <= 4 {
            3
        } else {
            4
        };
        Self {
            cluster: Some(ClusterDescriptor {
                size,
                damage_per_hit: 2,
            }),
            ..Self::new(
                format!("SRM {}", size),
                size.max(0) as u32 * 2,
                heat,
                WeaponClass::Missile,
                RangeBands::new(3, 6, 9),
            )
        }
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Self::medium_laser()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_inclusive() {
        let bands = RangeBands::new(3, 6, 9);
        assert_eq!(bands.band_for(0), RangeBand::Short);
        assert_eq!(bands.band_for(3), RangeBand::Short);
        assert_eq!(bands.band_for(4), RangeBand::Medium);
        assert_eq!(bands.band_for(6), RangeBand::Medium);
        assert_eq!(bands.band_for(9), RangeBand::Long);
        assert_eq!(bands.band_for(10), RangeBand::Beyond);
        assert_eq!(bands.band_for(12), RangeBand::Beyond);
    }

    #[test]
    fn test_band_modifiers() {
        assert_eq!(RangeBand::Short.modifier(), Some(0));
        assert_eq!(RangeBand::Medium.modifier(), Some(2));
        assert_eq!(RangeBand::Long.modifier(), Some(4));
        assert_eq!(RangeBand::Beyond.modifier(), None);
    }

    #[test]
    fn test_collapsed_bands_skip_to_next() {
        // Medium == short: nothing lands in the medium band
        let bands = RangeBands::new(4, 4, 8);
        assert_eq!(bands.band_for(4), RangeBand::Short);
        assert_eq!(bands.band_for(5), RangeBand::Long);
        assert!(bands.is_ordered());
        assert!(!RangeBands::new(5, 4, 8).is_ordered());
    }

    #[test]
    fn test_common_weapons() {
        assert!(!Weapon::medium_laser().is_cluster());
        assert!(Weapon::medium_pulse_laser().pulse);
        assert_eq!(Weapon::ppc().range.minimum, Some(3));

        let lrm = Weapon::lrm(10);
        assert_eq!(lrm.name, "LRM 10");
        assert_eq!(lrm.class, WeaponClass::Missile);
        assert_eq!(lrm.range.minimum, Some(6));
        assert_eq!(lrm.cluster.map(|c| c.size), Some(10));

        let srm = Weapon::srm(6);
        assert_eq!(srm.cluster.map(|c| c.damage_per_hit), Some(2));
        assert_eq!(Weapon::lb_10x().class, WeaponClass::Ballistic);
    }

    #[test]
    fn test_all_builtin_bands_ordered() {
        for weapon in [
            Weapon::medium_laser(),
            Weapon::large_laser(),
            Weapon::medium_pulse_laser(),
            Weapon::ppc(),
            Weapon::autocannon_10(),
            Weapon::autocannon_20(),
            Weapon::machine_gun(),
            Weapon::lb_10x(),
            Weapon::lrm(20),
            Weapon::srm(4),
        ] {
            assert!(weapon.range.is_ordered(), "{}", weapon.name);
        }
    }
}
