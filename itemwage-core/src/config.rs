//! Startup configuration
//!
//! Loaded once from a TOML file (or defaults) and then passed by value
//! into the server. Nothing here is read again after startup.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ItemwageError, Result};
use crate::wage::{ExperiencePolicy, WageModel, DEFAULT_BASE_SALARY, DEFAULT_INCREMENT};

/// Top-level configuration for the itemwage service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemwageConfig {
    pub wage: WageConfig,
    pub server: ServerSection,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WageConfig {
    pub base_salary: i64,
    pub increment: i64,
    pub experience_policy: ExperiencePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
    /// Allow any CORS origin instead of localhost only
    pub cors_permissive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for WageConfig {
    fn default() -> Self {
        Self {
            base_salary: DEFAULT_BASE_SALARY,
            increment: DEFAULT_INCREMENT,
            experience_policy: ExperiencePolicy::default(),
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_permissive: false,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://items.db".to_string(),
            max_connections: 5,
        }
    }
}

impl WageConfig {
    /// Build the formula from the configured constants.
    pub fn model(&self) -> WageModel {
        WageModel::new(self.base_salary, self.increment)
    }
}

impl ItemwageConfig {
    /// Load and validate config from a TOML file.
    ///
    /// Missing sections fall back to defaults; a missing or malformed file
    /// is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ItemwageError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content).map_err(|err| match err {
            ItemwageError::ConfigParse { source, .. } => ItemwageError::ConfigParse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|source| ItemwageError::ConfigParse {
            path: Default::default(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.wage.base_salary < 0 {
            return Err(ItemwageError::invalid_config(
                "wage.base_salary must be non-negative",
            ));
        }
        if self.wage.increment < 0 {
            return Err(ItemwageError::invalid_config(
                "wage.increment must be non-negative",
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ItemwageError::invalid_config(
                "database.max_connections must be at least 1",
            ));
        }
        Ok(())
    }
}
