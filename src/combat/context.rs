//! Engagement context: everything about the shot that belongs to neither unit

use serde::{Deserialize, Serialize};

/// Coarse line-of-sight class between attacker and target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineOfSight {
    #[default]
    Clear,
    Woods,
    Partial,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngagementContext {
    /// Resolved range in hexes
    pub distance: u32,
    #[serde(default)]
    pub line_of_sight: LineOfSight,
    /// Intervening light woods hexes
    #[serde(default)]
    pub light_woods: u32,
    /// Intervening heavy woods hexes
    #[serde(default)]
    pub heavy_woods: u32,
    #[serde(default)]
    pub night: bool,
    #[serde(default)]
    pub called_shot: bool,
    /// House-rule bucket, added as-is
    #[serde(default)]
    pub custom_modifier: i32,
}

impl EngagementContext {
    pub fn at_range(distance: u32) -> Self {
        Self {
            distance,
            ..Self::default()
        }
    }
}
