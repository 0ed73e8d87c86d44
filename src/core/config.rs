// src/core/config.rs
use std::env;
use std::collections::BTreeSet;
use log::LevelFilter;

use crate::core::session::DEFAULT_MAX_LENGTH;
use crate::models::{CharacterClass, PasswordPolicy};

// Configuration for the generator, its CLI and its HTTP API
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub max_password_length: usize,
    pub default_classes: BTreeSet<CharacterClass>,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 8,
            max_password_length: DEFAULT_MAX_LENGTH,
            default_classes: [CharacterClass::Uppercase].into_iter().collect(),

            // Web Interface
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Build a configuration from any key lookup; unparsable values keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("MAX_PASSWORD_LENGTH") {
            if let Ok(max) = val.parse() {
                config.max_password_length = max;
            }
        }

        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        if config.default_password_length > config.max_password_length {
            log::warn!(
                "Default password length {} exceeds maximum {}, clamping",
                config.default_password_length,
                config.max_password_length
            );
            config.default_password_length = config.max_password_length;
        }

        if let Some(val) = lookup("DEFAULT_CHARACTER_CLASSES") {
            match parse_classes(&val) {
                Ok(classes) if !classes.is_empty() => config.default_classes = classes,
                Ok(_) => log::warn!("DEFAULT_CHARACTER_CLASSES is empty, keeping defaults"),
                Err(e) => log::warn!("{}, keeping default character classes", e),
            }
        }

        // Web Interface
        if let Some(val) = lookup("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }

    // The policy a fresh session or request starts from
    pub fn default_policy(&self) -> PasswordPolicy {
        PasswordPolicy::new(self.default_classes.iter().copied(), self.default_password_length)
    }
}

fn parse_classes(list: &str) -> Result<BTreeSet<CharacterClass>, crate::models::ParseClassError> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_initial_form() {
        let config = config_from(&[]);
        assert_eq!(config.default_password_length, 8);
        assert_eq!(config.max_password_length, 20);
        assert_eq!(config.default_policy(), PasswordPolicy::default());
        assert_eq!(config.web_port, 5000);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "12"),
            ("DEFAULT_CHARACTER_CLASSES", "lower, digits,special"),
            ("WEB_PORT", "8080"),
            ("LOG_LEVEL", "DEBUG"),
        ]);
        assert_eq!(config.default_password_length, 12);
        assert_eq!(config.default_classes.len(), 3);
        assert!(!config.default_classes.contains(&CharacterClass::Uppercase));
        assert_eq!(config.web_port, 8080);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn default_length_is_clamped_to_maximum() {
        let config = config_from(&[("DEFAULT_PASSWORD_LENGTH", "40")]);
        assert_eq!(config.default_password_length, 20);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "-3"),
            ("DEFAULT_CHARACTER_CLASSES", "upper,emoji"),
            ("WEB_PORT", "not-a-port"),
        ]);
        assert_eq!(config.default_password_length, 8);
        assert_eq!(config.default_classes, Config::default().default_classes);
        assert_eq!(config.web_port, 5000);
    }

    #[test]
    fn empty_class_list_keeps_defaults() {
        let config = config_from(&[("DEFAULT_CHARACTER_CLASSES", " , ")]);
        assert_eq!(config.default_classes, Config::default().default_classes);
    }
}
