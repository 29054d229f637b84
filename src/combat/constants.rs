//! To-hit modifier tables - all tunable values in one place
//!
//! Every modifier is ADDITIVE to the target number. Lower is better for the attacker.

/// No target number is ever lower than this
pub const MIN_TARGET_NUMBER: i32 = 2;

/// Fixed target number against an immobile target
pub const IMMOBILE_TARGET_NUMBER: i32 = 4;

// Target cover and posture
pub const PARTIAL_COVER_MODIFIER: i32 = 1;
pub const PRONE_MODIFIER: i32 = 1;

// Woods, per hex in line of sight
pub const LIGHT_WOODS_MODIFIER: i32 = 1;
pub const HEAVY_WOODS_MODIFIER: i32 = 2;

// Engagement conditions
pub const NIGHT_MODIFIER: i32 = 2;
pub const PARTIAL_LINE_OF_SIGHT_MODIFIER: i32 = 1;
pub const CALLED_SHOT_MODIFIER: i32 = 3;

// Equipment
pub const PULSE_MODIFIER: i32 = -2;
pub const TARGETING_COMPUTER_MODIFIER: i32 = -1;

/// Cap on the minimum-range penalty
pub const MAX_MINIMUM_RANGE_PENALTY: i32 = 6;

/// Target movement steps: (fewest hexes moved, modifier), ascending
///
/// Anything past the last step uses the last step.
pub const TARGET_MOVEMENT_STEPS: [(u32, i32); 7] = [
    (0, 0),
    (3, 1),
    (5, 2),
    (7, 3),
    (10, 4),
    (18, 5),
    (25, 6),
];

/// Modifier for how far the target moved this turn
pub fn target_movement_modifier(hexes_moved: u32) -> i32 {
    TARGET_MOVEMENT_STEPS
        .iter()
        .rev()
        .find(|(min_hexes, _)| hexes_moved >= *min_hexes)
        .map(|(_, modifier)| *modifier)
        .unwrap_or(0)
}

/// Modifier for woods hexes between attacker and target, saturating at `i32::MAX`
pub fn woods_modifier(light_hexes: u32, heavy_hexes: u32) -> i32 {
    let light = i32::try_from(light_hexes).unwrap_or(i32::MAX);
    let heavy = i32::try_from(heavy_hexes).unwrap_or(i32::MAX);
    light
        .saturating_mul(LIGHT_WOODS_MODIFIER)
        .saturating_add(heavy.saturating_mul(HEAVY_WOODS_MODIFIER))
}

/// Penalty for firing inside a weapon's minimum range
///
/// Zero at or beyond the minimum, otherwise the shortfall capped at 6.
pub fn minimum_range_penalty(minimum: Option<u32>, distance: u32) -> i32 {
    match minimum {
        Some(minimum) if distance < minimum => {
            let shortfall = i32::try_from(minimum - distance).unwrap_or(i32::MAX);
            shortfall.clamp(0, MAX_MINIMUM_RANGE_PENALTY)
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_steps_ascending() {
        for pair in TARGET_MOVEMENT_STEPS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 < pair[1].1);
        }
    }

    #[test]
    fn test_target_movement_step_boundaries() {
        assert_eq!(target_movement_modifier(0), 0);
        assert_eq!(target_movement_modifier(2), 0);
        assert_eq!(target_movement_modifier(3), 1);
        assert_eq!(target_movement_modifier(6), 2);
        assert_eq!(target_movement_modifier(7), 3);
        assert_eq!(target_movement_modifier(17), 4);
        assert_eq!(target_movement_modifier(24), 5);
        assert_eq!(target_movement_modifier(25), 6);
    }

    #[test]
    fn test_target_movement_clamps_to_top_step() {
        assert_eq!(target_movement_modifier(400), 6);
        assert_eq!(target_movement_modifier(u32::MAX), 6);
    }

    #[test]
    fn test_woods_weights() {
        assert_eq!(woods_modifier(0, 0), 0);
        assert_eq!(woods_modifier(2, 0), 2);
        assert_eq!(woods_modifier(1, 1), 3);
        assert_eq!(woods_modifier(0, 2), 4);
    }

    #[test]
    fn test_huge_woods_counts_saturate() {
        assert_eq!(woods_modifier(u32::MAX, 0), i32::MAX);
        assert_eq!(woods_modifier(0, u32::MAX / 2), i32::MAX);
        assert_eq!(woods_modifier(u32::MAX, u32::MAX), i32::MAX);
    }

    #[test]
    fn test_minimum_range_penalty() {
        assert_eq!(minimum_range_penalty(None, 1), 0);
        assert_eq!(minimum_range_penalty(Some(6), 6), 0);
        assert_eq!(minimum_range_penalty(Some(6), 9), 0);
        assert_eq!(minimum_range_penalty(Some(6), 4), 2);
        assert_eq!(minimum_range_penalty(Some(6), 0), 6);
    }

    #[test]
    fn test_minimum_range_penalty_capped() {
        assert_eq!(minimum_range_penalty(Some(12), 1), MAX_MINIMUM_RANGE_PENALTY);
        assert_eq!(minimum_range_penalty(Some(u32::MAX), 0), MAX_MINIMUM_RANGE_PENALTY);
    }

    #[test]
    fn test_equipment_modifiers_help_attacker() {
        assert!(PULSE_MODIFIER < 0);
        assert!(TARGETING_COMPUTER_MODIFIER < 0);
        assert!(CALLED_SHOT_MODIFIER > 0);
    }
}
