//! Skill checks
//!
//! Roll 2d6 against skill + modifier. Used for anything that isn't an attack:
//! stability after heavy damage, standing up, avoiding a fall.

use serde::{Deserialize, Serialize};

use crate::combat::participants::Attacker;
use crate::dice::{roll_2d6, RollSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCheckResult {
    pub success: bool,
    pub target_number: i32,
    pub roll: u8,
}

impl SkillCheckResult {
    /// How far the roll beat (positive) or missed (negative) the target number
    pub fn margin(&self) -> i32 {
        i32::from(self.roll).saturating_sub(self.target_number)
    }
}

/// Roll 2d6 against `skill + modifier`. Draws exactly once.
pub fn skill_check(skill: i32, modifier: i32, rolls: &mut impl RollSource) -> SkillCheckResult {
    let target_number = skill.saturating_add(modifier);
    let roll = roll_2d6(rolls);
    let success = i32::from(roll) >= target_number;
    tracing::debug!(
        "Skill check: rolled {} vs TN {} ({})",
        roll,
        target_number,
        if success { "pass" } else { "fail" }
    );
    SkillCheckResult {
        success,
        target_number,
        roll,
    }
}

/// Piloting check for the attacker's unit (falls, stability)
pub fn piloting_check(
    attacker: &Attacker,
    modifier: i32,
    rolls: &mut impl RollSource,
) -> SkillCheckResult {
    skill_check(attacker.piloting, modifier, rolls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRolls;

    #[test]
    fn test_meeting_target_number_passes() {
        let mut rolls = ScriptedRolls::from_totals(&[7]);
        let result = skill_check(5, 2, &mut rolls);
        assert!(result.success);
        assert_eq!(result.target_number, 7);
        assert_eq!(result.roll, 7);
        assert_eq!(result.margin(), 0);
    }

    #[test]
    fn test_below_target_number_fails() {
        let mut rolls = ScriptedRolls::from_totals(&[6]);
        let result = skill_check(5, 2, &mut rolls);
        assert!(!result.success);
        assert_eq!(result.margin(), -1);
    }

    #[test]
    fn test_single_draw() {
        let mut rolls = ScriptedRolls::from_totals(&[9, 9]);
        skill_check(4, 0, &mut rolls);
        assert_eq!(rolls.rolls_drawn(), 1);
    }

    #[test]
    fn test_negative_modifier_makes_it_easier() {
        let mut rolls = ScriptedRolls::from_totals(&[3]);
        let result = skill_check(5, -2, &mut rolls);
        assert!(result.success);
    }

    #[test]
    fn test_piloting_check_uses_piloting() {
        let mut rolls = ScriptedRolls::from_totals(&[6]);
        let result = piloting_check(&Attacker::regular(), 1, &mut rolls);
        assert_eq!(result.target_number, 6);
        assert!(result.success);
    }

    #[test]
    fn test_extreme_modifier_saturates() {
        let mut rolls = ScriptedRolls::from_totals(&[12]);
        let result = skill_check(5, i32::MAX, &mut rolls);
        assert_eq!(result.target_number, i32::MAX);
        assert!(!result.success);

        let mut rolls = ScriptedRolls::from_totals(&[2]);
        let result = skill_check(0, i32::MIN, &mut rolls);
        assert!(result.success);
        assert_eq!(result.margin(), i32::MAX);
    }
}
