//! Error types for Dino Hunt.
//!
//! Gameplay updates never fail; these cover configuration and host-side
//! bookkeeping only.

use thiserror::Error;

use crate::EntityId;

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the config file failed
    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for the config schema
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// The config could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(String),

    /// A value is outside its allowed range
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending field
        field: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl ConfigError {
    /// Shorthand for [`ConfigError::Invalid`].
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised when addressing creatures by id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// No creature with this id is alive or pending removal
    #[error("creature not found: {0}")]
    UnknownCreature(EntityId),

    /// The id is already registered
    #[error("creature already registered: {0}")]
    AlreadyRegistered(EntityId),
}
