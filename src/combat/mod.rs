pub mod cluster;
pub mod constants;
pub mod context;
pub mod hit_location;
pub mod odds;
pub mod participants;
pub mod resolution;
pub mod skill;
pub mod to_hit;
pub mod weapons;

pub use cluster::{cluster_hits, resolve_cluster_hits, ClusterFamily};
pub use context::{EngagementContext, LineOfSight};
pub use hit_location::{resolve_hit_location, BodyLocation, Facing};
pub use odds::{expected_cluster_hits, hit_probability};
pub use participants::{Attacker, MovementMode, Target, WoodsDensity};
pub use resolution::{resolve_attack, AttackResult, DamagePacket, OUT_OF_RANGE_NOTE};
pub use skill::{piloting_check, skill_check, SkillCheckResult};
pub use to_hit::{compute_tn, explain_tn, Modifier, ModifierKind, TargetNumber, ToHitBreakdown};
pub use weapons::{ClusterDescriptor, RangeBand, RangeBands, Weapon, WeaponClass};
