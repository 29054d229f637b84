//! Weapon catalog - named weapon records callers hand to the engine
//!
//! Lookups are case-insensitive. Catalogs load from TOML:
//!
//! ```toml
//! [[weapons]]
//! name = "LRM 10"
//! damage = 10
//! heat = 4
//! class = "missile"
//! range = { minimum = 6, short = 7, medium = 14, long = 21 }
//! cluster = { size = 10, damage_per_hit = 1 }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::combat::weapons::Weapon;
use crate::core::error::{HexfireError, Result};

/// Catalog of all available weapons
#[derive(Debug, Clone, Default)]
pub struct WeaponCatalog {
    weapons: Vec<Weapon>,
}

impl WeaponCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in weapons
    pub fn with_defaults() -> Self {
        let weapons = vec![
            Weapon::medium_laser(),
            Weapon::large_laser(),
            Weapon::medium_pulse_laser(),
            Weapon::ppc(),
            Weapon::autocannon_10(),
            Weapon::autocannon_20(),
            Weapon::machine_gun(),
            Weapon::lb_10x(),
            Weapon::lrm(5),
            Weapon::lrm(10),
            Weapon::lrm(15),
            Weapon::lrm(20),
            Weapon::srm(2),
            Weapon::srm(4),
            Weapon::srm(6),
        ];
        Self { weapons }
    }

    /// Add a weapon, rejecting malformed records and name clashes
    pub fn add(&mut self, weapon: Weapon) -> Result<()> {
        validate_weapon(&weapon)?;
        if self.get(&weapon.name).is_some() {
            return Err(HexfireError::DuplicateWeapon(weapon.name));
        }
        self.weapons.push(weapon);
        Ok(())
    }

    /// Get a weapon by name
    pub fn get(&self, name: &str) -> Option<&Weapon> {
        let name = name.trim();
        self.weapons
            .iter()
            .find(|w| w.name.eq_ignore_ascii_case(name))
    }

    /// Get a weapon by name, or an error naming what was missing
    pub fn require(&self, name: &str) -> Result<&Weapon> {
        self.get(name)
            .ok_or_else(|| HexfireError::UnknownWeapon(name.to_string()))
    }

    /// Get all weapons
    pub fn all(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    /// Load weapons from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::parse_toml(&content)?;
        tracing::info!("Loaded {} weapons from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse weapons from TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let toml_data: TomlWeapons = toml::from_str(content)?;
        let mut catalog = Self::new();
        for weapon in toml_data.weapons {
            catalog.add(weapon)?;
        }
        Ok(catalog)
    }
}

/// TOML representation of a weapons file
#[derive(Debug, Deserialize)]
struct TomlWeapons {
    #[serde(default)]
    weapons: Vec<Weapon>,
}

fn validate_weapon(weapon: &Weapon) -> Result<()> {
    let invalid = |reason: &str| HexfireError::InvalidWeapon {
        name: weapon.name.clone(),
        reason: reason.to_string(),
    };
    if weapon.name.trim().is_empty() {
        return Err(invalid("name must not be empty"));
    }
    if !weapon.range.is_ordered() {
        return Err(invalid("range bands must satisfy short <= medium <= long"));
    }
    Ok(())
}
