//! Attack resolution
//!
//! One attack runs straight through: target number, attack roll, location
//! roll, damage packets. No phase is ever revisited.
//!
//! Dice drawn (2d6 rolls), which replays depend on:
//! - out of range: 0
//! - miss: 1
//! - hit, single-shot weapon: 2
//! - hit, cluster weapon landing N warheads: 2 + N (the location roll is drawn and unused)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::combat::cluster::resolve_cluster_hits;
use crate::combat::context::EngagementContext;
use crate::combat::hit_location::{resolve_hit_location, BodyLocation};
use crate::combat::participants::{Attacker, Target};
use crate::combat::to_hit::{compute_tn, TargetNumber};
use crate::combat::weapons::Weapon;
use crate::dice::{roll_2d6, RollSource};

/// Note attached to attacks that never rolled
pub const OUT_OF_RANGE_NOTE: &str = "target beyond maximum range";

/// One discrete chunk of damage bound for one location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamagePacket {
    pub damage: u32,
    pub location: BodyLocation,
    /// Location roll that picked `location`
    pub roll: u8,
}

/// Result of one attack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResult {
    pub hit: bool,
    pub target_number: TargetNumber,
    /// Absent when the shot was impossible and nothing was rolled
    pub attack_roll: Option<u8>,
    /// In the order they were rolled
    pub packets: Vec<DamagePacket>,
    /// Warheads landed, when a cluster table was read
    pub cluster_hits: Option<u32>,
    /// Heat the attacker generated. The caller applies it.
    pub heat: u32,
    pub note: Option<String>,
}

impl AttackResult {
    fn out_of_range() -> Self {
        Self {
            hit: false,
            target_number: TargetNumber::Unbounded,
            attack_roll: None,
            packets: Vec::new(),
            cluster_hits: None,
            heat: 0,
            note: Some(OUT_OF_RANGE_NOTE.to_string()),
        }
    }

    pub fn total_damage(&self) -> u32 {
        self.packets.iter().map(|p| p.damage).sum()
    }
}

impl fmt::Display for AttackResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(roll) = self.attack_roll else {
            return write!(f, "MISS (TN {})", self.target_number);
        };
        if !self.hit {
            return write!(f, "MISS: rolled {} vs TN {}", roll, self.target_number);
        }
        write!(f, "HIT: rolled {} vs TN {}", roll, self.target_number)?;
        if let Some(hits) = self.cluster_hits {
            write!(f, ", {} cluster hits", hits)?;
        }
        for packet in &self.packets {
            write!(f, " [{} {} (loc {})]", packet.damage, packet.location, packet.roll)?;
        }
        Ok(())
    }
}

/// Resolve one weapon attack
///
/// # Arguments
/// * `rolls` - the only randomness consumed; draw order is fixed per the module docs
///
/// # Returns
/// Hit flag, TN, attack roll, and damage packets for the caller to apply
pub fn resolve_attack(
    attacker: &Attacker,
    target: &Target,
    weapon: &Weapon,
    context: &EngagementContext,
    rolls: &mut impl RollSource,
) -> AttackResult {
    // Step 1: Target number
    let target_number = compute_tn(attacker, target, weapon, context);
    if target_number.is_unbounded() {
        tracing::debug!(
            "{} at {} hexes: beyond maximum range, no roll",
            weapon.name,
            context.distance
        );
        return AttackResult::out_of_range();
    }

    // Step 2: Attack roll
    let attack_roll = roll_2d6(rolls);
    if !target_number.is_met_by(attack_roll) {
        tracing::debug!(
            "{} missed: rolled {} vs TN {}",
            weapon.name,
            attack_roll,
            target_number
        );
        return AttackResult {
            hit: false,
            target_number,
            attack_roll: Some(attack_roll),
            packets: Vec::new(),
            cluster_hits: None,
            heat: weapon.heat,
            note: None,
        };
    }

    // Step 3: Location roll, always drawn on a hit
    let location_roll = roll_2d6(rolls);
    let location = resolve_hit_location(target.facing, location_roll);

    // Step 4: Packets. Cluster count is keyed off the attack roll.
    let (packets, cluster_hits) = match (weapon.cluster, resolve_cluster_hits(weapon, attack_roll)) {
        (Some(cluster), Some(hits)) => {
            let packets = (0..hits)
                .map(|_| {
                    let roll = roll_2d6(rolls);
                    DamagePacket {
                        damage: cluster.damage_per_hit,
                        location: resolve_hit_location(target.facing, roll),
                        roll,
                    }
                })
                .collect();
            (packets, Some(hits))
        }
        _ => (
            vec![DamagePacket {
                damage: weapon.damage,
                location,
                roll: location_roll,
            }],
            None,
        ),
    };

    tracing::debug!(
        "{} hit: rolled {} vs TN {}, {} packet(s)",
        weapon.name,
        attack_roll,
        target_number,
        packets.len()
    );

    // Step 5
    AttackResult {
        hit: true,
        target_number,
        attack_roll: Some(attack_roll),
        packets,
        cluster_hits,
        heat: weapon.heat,
        note: None,
    }
}
