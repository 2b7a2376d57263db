use std::sync::OnceLock;

use log::{warn, Level};
use serde::Deserialize;
use thiserror::Error;

use crate::motion::spring::{SpringConfig, SpringConfigError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site config has a bad spring: {0}")]
    Spring(#[from] SpringConfigError),
}

const SITE_JSON: &str = include_str!("../assets/site.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub company: String,
    pub contact_email: String,
    pub phones: Vec<String>,
    pub linkedin: String,
    pub instagram: String,
    /// Height of the fixed navbar; anchor scrolling stops this far above a section.
    pub header_offset: f64,
    /// Scroll distance over which the navbar fades into its scrolled look.
    pub navbar_scroll_range: f64,
    pub spring: SpringConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company: "OneThrive".to_string(),
            contact_email: "info.onethrive@gmail.com".to_string(),
            phones: Vec::new(),
            linkedin: String::new(),
            instagram: String::new(),
            header_offset: 80.0,
            navbar_scroll_range: 100.0,
            spring: SpringConfig::SCROLL,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.spring.validate()?;
        Ok(config)
    }
}

/// Site settings bundled at build time.
pub fn site() -> &'static SiteConfig {
    static SITE: OnceLock<SiteConfig> = OnceLock::new();
    SITE.get_or_init(|| {
        SiteConfig::from_json(SITE_JSON).unwrap_or_else(|e| {
            warn!("Invalid site config, using defaults: {}", e);
            SiteConfig::default()
        })
    })
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = SiteConfig::from_json(SITE_JSON).unwrap();
        assert_eq!(config.company, "OneThrive");
        assert_eq!(config.header_offset, 80.0);
        assert_eq!(config.phones.len(), 2);
        assert_eq!(config.spring, SpringConfig::SCROLL);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = SiteConfig::from_json(r#"{ "header_offset": 64.0, "spring": { "stiffness": 300.0 } }"#)
            .unwrap();
        assert_eq!(config.header_offset, 64.0);
        assert_eq!(config.navbar_scroll_range, 100.0);
        assert_eq!(config.spring.stiffness, 300.0);
        assert_eq!(config.spring.damping, 30.0);
        assert_eq!(config.contact_email, "info.onethrive@gmail.com");
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_zero_mass_spring() {
        let result = SiteConfig::from_json(r#"{ "spring": { "mass": 0.0 } }"#);
        assert!(matches!(
            result,
            Err(ConfigError::Spring(SpringConfigError::NotPositive { field: "mass", .. }))
        ));
    }
}
