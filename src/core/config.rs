//! Session configuration
//!
//! Read once at the outermost boundary. The engine functions never see it;
//! it only decides which roll source and weapon catalog a session uses.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::WeaponCatalog;
use crate::core::error::{HexfireError, Result};
use crate::dice::SeededRollSource;

/// Default tracing filter for the binary
pub const DEFAULT_LOG_FILTER: &str = "hexfire=info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed seed for reproducible sessions. Unset means OS entropy.
    pub seed: Option<u64>,

    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,

    /// Weapon catalog TOML. Unset means the built-in catalog.
    pub catalog: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            catalog: None,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(HexfireError::InvalidConfig(
                "log_filter must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Roll source for this session
    pub fn roll_source(&self) -> SeededRollSource {
        match self.seed {
            Some(seed) => SeededRollSource::new(seed),
            None => SeededRollSource::from_entropy(),
        }
    }

    /// Weapon catalog for this session
    pub fn weapon_catalog(&self) -> Result<WeaponCatalog> {
        match &self.catalog {
            Some(path) => WeaponCatalog::load_from_toml(path),
            None => Ok(WeaponCatalog::with_defaults()),
        }
    }
}
