use std::env;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::PlatformError;
use crate::platform;
use crate::types::NodeContext;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Node identity; None means ask the platform
    pub fqdn: Option<String>,
    // Compliance mode; None means ask the platform
    pub fips: Option<bool>,

    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fqdn: None,
            fips: None,
            log_level: "warn".to_string(),
        }
    }
}

fn parse_flag(name: &str, val: &str) -> Result<bool, ConfigError> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar(name.to_string(), val.to_string())),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Ok(val) = env::var("FQDN_RAND_FQDN") {
            config.fqdn = Some(val);
        }

        if let Ok(val) = env::var("FQDN_RAND_FIPS") {
            config.fips = Some(parse_flag("FQDN_RAND_FIPS", &val)?);
        }

        if let Ok(val) = env::var("LOG_LEVEL") {
            config.log_level = val;
        }

        Ok(config)
    }

    pub fn with_fqdn(mut self, fqdn: Option<String>) -> Self {
        if fqdn.is_some() {
            self.fqdn = fqdn;
        }
        self
    }

    pub fn with_fips(mut self, fips: Option<bool>) -> Self {
        if fips.is_some() {
            self.fips = fips;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(fqdn) = &self.fqdn {
            if fqdn.trim().is_empty() {
                return Err(ConfigError::ValidationError("FQDN_RAND_FQDN must not be empty".to_string()));
            }
            if fqdn.chars().any(char::is_whitespace) {
                return Err(ConfigError::ValidationError("FQDN_RAND_FQDN must not contain whitespace".to_string()));
            }
        }

        if self.log_level.trim().is_empty() {
            return Err(ConfigError::ValidationError("LOG_LEVEL must not be empty".to_string()));
        }

        Ok(())
    }

    /// Fills the gaps from the running platform.
    pub fn node_context(&self) -> Result<NodeContext, ConfigError> {
        let fqdn = match &self.fqdn {
            Some(f) => f.clone(),
            None => platform::fqdn()?,
        };
        let fips_enabled = match self.fips {
            Some(f) => f,
            None => platform::fips_enabled()?,
        };
        Ok(NodeContext { fqdn, fips_enabled })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_parse_loosely() {
        assert!(parse_flag("X", "1").unwrap());
        assert!(parse_flag("X", " TRUE ").unwrap());
        assert!(!parse_flag("X", "no").unwrap());
        assert!(matches!(parse_flag("X", "maybe"), Err(ConfigError::InvalidEnvVar(..))));
    }

    #[test]
    fn overrides_only_replace_when_given() {
        let base = Config { fqdn: Some("a.example.com".into()), fips: Some(false), ..Config::default() };
        let same = base.clone().with_fqdn(None).with_fips(None);
        assert_eq!(same.fqdn.as_deref(), Some("a.example.com"));
        assert_eq!(same.fips, Some(false));
        let over = base.with_fqdn(Some("b.example.com".into())).with_fips(Some(true));
        assert_eq!(over.fqdn.as_deref(), Some("b.example.com"));
        assert_eq!(over.fips, Some(true));
    }

    #[test]
    fn validation_rejects_blank_identity() {
        let cfg = Config { fqdn: Some("  ".into()), ..Config::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::ValidationError(_))));
        let cfg = Config { fqdn: Some("web 01".into()), ..Config::default() };
        assert!(cfg.validate().is_err());
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn explicit_values_skip_the_platform() {
        let cfg = Config { fqdn: Some("Web01.Example.com".into()), fips: Some(true), ..Config::default() };
        let ctx = cfg.node_context().unwrap();
        assert_eq!(ctx, NodeContext::new("Web01.Example.com", true));
    }
}
