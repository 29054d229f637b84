//! Exact 2d6 odds for display next to a target number

use crate::combat::cluster::resolve_cluster_hits;
use crate::combat::to_hit::TargetNumber;
use crate::combat::weapons::Weapon;

/// Ways to roll each total out of 36, index 0 is a total of 2
pub const TWO_D6_WAYS: [u32; 11] = [1, 2, 3, 4, 5, 6, 5, 4, 3, 2, 1];

fn ways(total: u8) -> u32 {
    TWO_D6_WAYS[usize::from(total - 2)]
}

/// Chance in [0, 1] that 2d6 meets or beats `target_number`
pub fn hit_probability(target_number: TargetNumber) -> f64 {
    let successes: u32 = (2..=12u8)
        .filter(|&roll| target_number.is_met_by(roll))
        .map(ways)
        .sum();
    f64::from(successes) / 36.0
}

/// Average warheads landed given that the attack hit
///
/// `None` for non-cluster weapons or when no roll can hit.
pub fn expected_cluster_hits(weapon: &Weapon, target_number: TargetNumber) -> Option<f64> {
    let mut weighted = 0u32;
    let mut hitting = 0u32;
    for roll in (2..=12u8).filter(|&roll| target_number.is_met_by(roll)) {
        weighted += resolve_cluster_hits(weapon, roll)? * ways(roll);
        hitting += ways(roll);
    }
    if hitting == 0 {
        return None;
    }
    Some(f64::from(weighted) / f64::from(hitting))
}
