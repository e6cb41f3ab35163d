//! Execution environment flags
//!
//! The translation layer degrades differently depending on where the process
//! runs: development fails hard on missing phrases, while staging and
//! production recover with placeholders. The environment is read once at
//! startup and handed to the components that need it.

use crate::error::{Result, TallyError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment variable consulted by [`Environment::from_env`]
pub const ENVIRONMENT_VAR: &str = "TALLY_ENV";

/// Execution environment for the running process
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        Self::Development
    }
}

impl Environment {
    /// Get the identifier for this environment
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    /// Parse an environment from its identifier
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "staging" => Some(Self::Staging),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    /// Read the environment from `TALLY_ENV`
    ///
    /// An unset variable means development; an unrecognized value is a
    /// configuration error rather than a silent default.
    pub fn from_env() -> Result<Self> {
        match std::env::var(ENVIRONMENT_VAR) {
            Ok(value) => Self::from_code(&value).ok_or_else(|| {
                TallyError::config(format!("unrecognized {ENVIRONMENT_VAR} value: {value}"))
            }),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(err) => Err(TallyError::config_with_source(
                format!("failed to read {ENVIRONMENT_VAR}"),
                err,
            )),
        }
    }

    /// Get all environments
    pub fn all() -> Vec<Self> {
        vec![Self::Development, Self::Staging, Self::Production]
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn is_staging(&self) -> bool {
        matches!(self, Self::Staging)
    }

    /// True for the environments that must never crash on a missing phrase
    pub fn is_production_like(&self) -> bool {
        self.is_production() || self.is_staging()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_development() {
        assert_eq!(Environment::default(), Environment::Development);
        assert!(!Environment::default().is_production_like());
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Environment::from_code("production"), Some(Environment::Production));
        assert_eq!(Environment::from_code("prod"), Some(Environment::Production));
        assert_eq!(Environment::from_code("Staging"), Some(Environment::Staging));
        assert_eq!(Environment::from_code("dev"), Some(Environment::Development));
        assert_eq!(Environment::from_code("qa"), None);
    }

    #[test]
    fn test_production_like() {
        assert!(Environment::Production.is_production_like());
        assert!(Environment::Staging.is_production_like());
        assert!(!Environment::Development.is_production_like());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Environment::Staging).unwrap();
        assert_eq!(json, "\"staging\"");
        let parsed: Environment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Environment::Staging);
    }
}
