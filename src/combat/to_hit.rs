//! To-hit target number calculation
//!
//! Precedence:
//! 1. Immobile target: fixed TN 4, nothing else is looked at (not even range)
//! 2. Beyond long range: unbounded, no modifiers computed
//! 3. Otherwise gunnery plus every additive modifier, floored at 2
//!
//! Sums saturate, so out-of-scale inputs give a huge TN rather than a panic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::combat::constants::{
    minimum_range_penalty, target_movement_modifier, woods_modifier, CALLED_SHOT_MODIFIER,
    IMMOBILE_TARGET_NUMBER, MIN_TARGET_NUMBER, NIGHT_MODIFIER, PARTIAL_COVER_MODIFIER,
    PARTIAL_LINE_OF_SIGHT_MODIFIER, PRONE_MODIFIER, PULSE_MODIFIER, TARGETING_COMPUTER_MODIFIER,
};
use crate::combat::context::{EngagementContext, LineOfSight};
use crate::combat::participants::{Attacker, Target};
use crate::combat::weapons::{RangeBand, Weapon};

/// Roll needed on 2d6, or no roll can succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetNumber {
    Value(i32),
    Unbounded,
}

impl TargetNumber {
    pub fn value(&self) -> Option<i32> {
        match self {
            TargetNumber::Value(tn) => Some(*tn),
            TargetNumber::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, TargetNumber::Unbounded)
    }

    /// Does `roll` meet or beat this number?
    pub fn is_met_by(&self, roll: u8) -> bool {
        match self {
            TargetNumber::Value(tn) => i32::from(roll) >= *tn,
            TargetNumber::Unbounded => false,
        }
    }
}

impl fmt::Display for TargetNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetNumber::Value(tn) => write!(f, "{}", tn),
            TargetNumber::Unbounded => f.write_str("impossible"),
        }
    }
}

/// Source of one term in the target number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    Immobile,
    Gunnery,
    AttackerMovement,
    TargetMovement,
    Woods,
    PartialCover,
    Prone,
    Range,
    MinimumRange,
    Night,
    PartialLineOfSight,
    Pulse,
    TargetingComputer,
    WeaponBonus,
    Custom,
    Theater,
    CalledShot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    pub kind: ModifierKind,
    pub value: i32,
}

/// Itemised target number, for showing the player where a number came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToHitBreakdown {
    /// Non-zero terms in application order (gunnery is always present)
    pub modifiers: Vec<Modifier>,
    /// `None` when the immobile rule bypassed range
    pub range_band: Option<RangeBand>,
    pub target_number: TargetNumber,
}

impl ToHitBreakdown {
    /// Sum of the listed terms before the floor is applied
    pub fn raw_total(&self) -> i32 {
        saturating_total(&self.modifiers)
    }

    pub fn get(&self, kind: ModifierKind) -> Option<i32> {
        self.modifiers
            .iter()
            .find(|m| m.kind == kind)
            .map(|m| m.value)
    }
}

fn saturating_total(modifiers: &[Modifier]) -> i32 {
    modifiers
        .iter()
        .fold(0i32, |total, m| total.saturating_add(m.value))
}

/// Collects terms, skipping zeros
#[derive(Default)]
struct ModifierStack {
    modifiers: Vec<Modifier>,
}

impl ModifierStack {
    fn push(&mut self, kind: ModifierKind, value: i32) {
        if value != 0 {
            tracing::trace!("to-hit {:?} {:+}", kind, value);
            self.modifiers.push(Modifier { kind, value });
        }
    }
}

/// Compute the target number with every term itemised
pub fn explain_tn(
    attacker: &Attacker,
    target: &Target,
    weapon: &Weapon,
    context: &EngagementContext,
) -> ToHitBreakdown {
    if target.immobile {
        return ToHitBreakdown {
            modifiers: vec![Modifier {
                kind: ModifierKind::Immobile,
                value: IMMOBILE_TARGET_NUMBER,
            }],
            range_band: None,
            target_number: TargetNumber::Value(IMMOBILE_TARGET_NUMBER),
        };
    }

    let band = weapon.range.band_for(context.distance);
    let Some(range_modifier) = band.modifier() else {
        return ToHitBreakdown {
            modifiers: Vec::new(),
            range_band: Some(band),
            target_number: TargetNumber::Unbounded,
        };
    };

    let mut stack = ModifierStack::default();
    stack.modifiers.push(Modifier {
        kind: ModifierKind::Gunnery,
        value: attacker.gunnery,
    });
    stack.push(ModifierKind::AttackerMovement, attacker.movement.modifier());
    stack.push(
        ModifierKind::TargetMovement,
        target_movement_modifier(target.hexes_moved),
    );

    let (own_light, own_heavy) = target.own_hex_woods();
    stack.push(
        ModifierKind::Woods,
        woods_modifier(
            context.light_woods.saturating_add(own_light),
            context.heavy_woods.saturating_add(own_heavy),
        ),
    );
    if target.partial_cover {
        stack.push(ModifierKind::PartialCover, PARTIAL_COVER_MODIFIER);
    }
    if target.prone {
        stack.push(ModifierKind::Prone, PRONE_MODIFIER);
    }

    stack.push(ModifierKind::Range, range_modifier);
    stack.push(
        ModifierKind::MinimumRange,
        minimum_range_penalty(weapon.range.minimum, context.distance),
    );

    if context.night {
        stack.push(ModifierKind::Night, NIGHT_MODIFIER);
    }
    if context.line_of_sight == LineOfSight::Partial {
        stack.push(ModifierKind::PartialLineOfSight, PARTIAL_LINE_OF_SIGHT_MODIFIER);
    }
    if weapon.pulse {
        stack.push(ModifierKind::Pulse, PULSE_MODIFIER);
    }
    if attacker.targeting_computer {
        stack.push(ModifierKind::TargetingComputer, TARGETING_COMPUTER_MODIFIER);
    }
    stack.push(ModifierKind::WeaponBonus, weapon.targeting_bonus.unwrap_or(0));
    stack.push(ModifierKind::Custom, context.custom_modifier);
    stack.push(ModifierKind::Theater, attacker.theater_bonus);
    if context.called_shot {
        stack.push(ModifierKind::CalledShot, CALLED_SHOT_MODIFIER);
    }

    let raw = saturating_total(&stack.modifiers);
    ToHitBreakdown {
        modifiers: stack.modifiers,
        range_band: Some(band),
        target_number: TargetNumber::Value(raw.max(MIN_TARGET_NUMBER)),
    }
}

/// Target number for one weapon against one target
pub fn compute_tn(
    attacker: &Attacker,
    target: &Target,
    weapon: &Weapon,
    context: &EngagementContext,
) -> TargetNumber {
    explain_tn(attacker, target, weapon, context).target_number
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::participants::{MovementMode, WoodsDensity};
    use crate::combat::weapons::{RangeBands, WeaponClass};

    fn laser() -> Weapon {
        Weapon::medium_laser()
    }

    #[test]
    fn test_baseline_is_gunnery() {
        let tn = compute_tn(
            &Attacker::regular(),
            &Target::standing(),
            &laser(),
            &EngagementContext::at_range(2),
        );
        assert_eq!(tn, TargetNumber::Value(4));
    }

    #[test]
    fn test_beyond_long_is_unbounded() {
        let tn = compute_tn(
            &Attacker::regular(),
            &Target::standing(),
            &laser(),
            &EngagementContext::at_range(12),
        );
        assert_eq!(tn, TargetNumber::Unbounded);
    }

    #[test]
    fn test_immobile_bypasses_range_and_modifiers() {
        let mut attacker = Attacker::green().moving(MovementMode::Jumped);
        attacker.theater_bonus = 5;
        let mut context = EngagementContext::at_range(40);
        context.night = true;
        context.called_shot = true;
        let breakdown = explain_tn(&attacker, &Target::immobile(), &laser(), &context);
        assert_eq!(breakdown.target_number, TargetNumber::Value(4));
        assert_eq!(breakdown.range_band, None);
    }

    #[test]
    fn test_range_band_modifiers() {
        let attacker = Attacker::regular();
        let target = Target::standing();
        let at = |d| compute_tn(&attacker, &target, &laser(), &EngagementContext::at_range(d));
        assert_eq!(at(3), TargetNumber::Value(4));
        assert_eq!(at(5), TargetNumber::Value(6));
        assert_eq!(at(9), TargetNumber::Value(8));
    }

    #[test]
    fn test_movement_stacks() {
        let attacker = Attacker::regular().moving(MovementMode::Ran);
        let target = Target::standing().moved(8);
        let tn = compute_tn(&attacker, &target, &laser(), &EngagementContext::at_range(1));
        // 4 gunnery + 2 ran + 3 for 7-9 hexes
        assert_eq!(tn, TargetNumber::Value(9));
    }

    #[test]
    fn test_woods_include_target_hex() {
        let mut target = Target::standing();
        target.woods = Some(WoodsDensity::Heavy);
        let mut context = EngagementContext::at_range(1);
        context.light_woods = 1;
        let breakdown = explain_tn(&Attacker::regular(), &target, &laser(), &context);
        assert_eq!(breakdown.get(ModifierKind::Woods), Some(3));
        assert_eq!(breakdown.target_number, TargetNumber::Value(7));
    }

    #[test]
    fn test_cover_prone_night_partial_los() {
        let mut target = Target::standing();
        target.partial_cover = true;
        target.prone = true;
        let mut context = EngagementContext::at_range(1);
        context.night = true;
        context.line_of_sight = LineOfSight::Partial;
        let tn = compute_tn(&Attacker::regular(), &target, &laser(), &context);
        assert_eq!(tn, TargetNumber::Value(4 + 1 + 1 + 2 + 1));
    }

    #[test]
    fn test_minimum_range_penalty_applies() {
        // PPC minimum 3, distance 1 => +2
        let tn = compute_tn(
            &Attacker::regular(),
            &Target::standing(),
            &Weapon::ppc(),
            &EngagementContext::at_range(1),
        );
        assert_eq!(tn, TargetNumber::Value(6));
    }

    #[test]
    fn test_called_shot_adds_three() {
        let mut context = EngagementContext::at_range(1);
        context.called_shot = true;
        let breakdown = explain_tn(&Attacker::regular(), &Target::standing(), &laser(), &context);
        assert_eq!(breakdown.get(ModifierKind::CalledShot), Some(3));
        assert_eq!(breakdown.target_number, TargetNumber::Value(7));
    }

    #[test]
    fn test_floor_at_two() {
        let mut attacker = Attacker::new(0, 0);
        attacker.targeting_computer = true;
        attacker.theater_bonus = -3;
        let mut context = EngagementContext::at_range(1);
        context.custom_modifier = -4;
        let breakdown = explain_tn(
            &attacker,
            &Target::standing(),
            &Weapon::medium_pulse_laser(),
            &context,
        );
        assert_eq!(breakdown.raw_total(), -10);
        assert_eq!(breakdown.target_number, TargetNumber::Value(2));
    }

    #[test]
    fn test_weapon_targeting_bonus() {
        let mut weapon = Weapon::new("Sniper", 8, 3, WeaponClass::Ballistic, RangeBands::new(4, 8, 12));
        weapon.targeting_bonus = Some(-1);
        let tn = compute_tn(
            &Attacker::regular(),
            &Target::standing(),
            &weapon,
            &EngagementContext::at_range(6),
        );
        assert_eq!(tn, TargetNumber::Value(5));
    }

    #[test]
    fn test_breakdown_sums_to_target_number() {
        let mut context = EngagementContext::at_range(7);
        context.heavy_woods = 1;
        context.custom_modifier = 1;
        let breakdown = explain_tn(
            &Attacker::regular().moving(MovementMode::Walked),
            &Target::standing().moved(4),
            &Weapon::large_laser(),
            &context,
        );
        assert_eq!(
            breakdown.target_number,
            TargetNumber::Value(breakdown.raw_total().max(2))
        );
        assert_eq!(breakdown.range_band, Some(RangeBand::Medium));
        assert_eq!(breakdown.get(ModifierKind::AttackerMovement), None);
    }

    #[test]
    fn test_out_of_scale_inputs_saturate() {
        let mut target = Target::standing();
        target.woods = Some(WoodsDensity::Light);
        let mut context = EngagementContext::at_range(1);
        context.light_woods = u32::MAX;
        let breakdown = explain_tn(&Attacker::regular(), &target, &laser(), &context);
        assert_eq!(breakdown.get(ModifierKind::Woods), Some(i32::MAX));
        assert_eq!(breakdown.target_number, TargetNumber::Value(i32::MAX));

        let mut context = EngagementContext::at_range(1);
        context.custom_modifier = i32::MAX;
        context.night = true;
        let tn = compute_tn(&Attacker::regular(), &Target::standing(), &laser(), &context);
        assert_eq!(tn, TargetNumber::Value(i32::MAX));
        assert!(!tn.is_met_by(12));

        let mut attacker = Attacker::regular();
        attacker.theater_bonus = i32::MIN;
        let breakdown = explain_tn(&attacker, &Target::standing(), &laser(), &EngagementContext::at_range(1));
        assert_eq!(breakdown.raw_total(), i32::MIN + 4);
        assert_eq!(breakdown.target_number, TargetNumber::Value(2));
    }

    #[test]
    fn test_unbounded_is_never_met() {
        assert!(!TargetNumber::Unbounded.is_met_by(12));
        assert!(TargetNumber::Value(8).is_met_by(8));
        assert!(!TargetNumber::Value(8).is_met_by(7));
        assert_eq!(TargetNumber::Unbounded.to_string(), "impossible");
    }
}
