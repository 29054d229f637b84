use thiserror::Error;

/// Errors from the outer boundary: loading catalogs and config.
/// Combat resolution itself never fails.
#[derive(Error, Debug)]
pub enum HexfireError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid weapon '{name}': {reason}")]
    InvalidWeapon { name: String, reason: String },

    #[error("Duplicate weapon: {0}")]
    DuplicateWeapon(String),

    #[error("Unknown weapon: {0}")]
    UnknownWeapon(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, HexfireError>;
