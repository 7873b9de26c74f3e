//! Configuration state: enabled character classes and password length.

use thiserror::Error;

use crate::charset::{CharacterClass, CharacterSet};

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 40;
pub const DEFAULT_LENGTH: usize = 8;

pub const LENGTH_ENV: &str = "PWD_GEN_LENGTH";
pub const CLASSES_ENV: &str = "PWD_GEN_CLASSES";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("At least one character class must be enabled")]
    NoClassEnabled,
    #[error("Cannot disable {0}: it is the only enabled character class")]
    LastEnabledClass(CharacterClass),
    #[error("Password length {0} is outside {min}..={max}", min = MIN_LENGTH, max = MAX_LENGTH)]
    LengthOutOfRange(usize),
    #[error("Unknown character class: {0}")]
    UnknownClass(String),
    #[error("Invalid password length: {0}")]
    InvalidLength(String),
}

/// User-controlled generator settings.
///
/// The enabled set is never empty and the length always lies in
/// `MIN_LENGTH..=MAX_LENGTH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    enabled: CharacterSet,
    length: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            enabled: CharacterSet::all(),
            length: DEFAULT_LENGTH,
        }
    }
}

impl Configuration {
    /// Builds a validated configuration.
    ///
    /// # Errors
    ///
    /// - `NoClassEnabled` if `enabled` is empty
    /// - `LengthOutOfRange` if `length` is outside the slider bounds
    pub fn new(enabled: CharacterSet, length: usize) -> Result<Self, ConfigError> {
        if enabled.is_empty() {
            return Err(ConfigError::NoClassEnabled);
        }
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(ConfigError::LengthOutOfRange(length));
        }
        Ok(Self { enabled, length })
    }

    /// Loads the configuration from the environment, falling back to defaults.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_GEN_LENGTH`: initial length, clamped to the slider bounds
    /// - `PWD_GEN_CLASSES`: comma-separated class names, e.g. `lowercase,digits`
    ///
    /// # Errors
    ///
    /// Returns error if the length is not a number, a class name is unknown,
    /// or the class list is empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(LENGTH_ENV) {
            let length = raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidLength(raw.clone()))?;
            config.set_length(length);
        }

        if let Ok(raw) = std::env::var(CLASSES_ENV) {
            let enabled = raw
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(str::parse)
                .collect::<Result<CharacterSet, _>>()?;
            if enabled.is_empty() {
                return Err(ConfigError::NoClassEnabled);
            }
            config.enabled = enabled;
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Generator configuration loaded: length {}, {} classes",
            config.length,
            config.enabled.len()
        );

        Ok(config)
    }

    pub fn enabled(&self) -> &CharacterSet {
        &self.enabled
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        self.enabled.contains(class)
    }

    /// True when `class` is the only enabled class and therefore cannot be
    /// toggled off.
    pub fn is_locked(&self, class: CharacterClass) -> bool {
        self.enabled.len() == 1 && self.enabled.contains(class)
    }

    /// Flips `class` on or off.
    ///
    /// # Errors
    ///
    /// Returns `LastEnabledClass` and leaves the state unchanged when
    /// disabling `class` would leave no class enabled.
    pub fn toggle(&mut self, class: CharacterClass) -> Result<(), ConfigError> {
        if self.is_locked(class) {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejected toggle: {} is the last enabled class", class);
            return Err(ConfigError::LastEnabledClass(class));
        }
        if !self.enabled.remove(class) {
            self.enabled.insert(class);
        }
        Ok(())
    }

    /// Clamps `length` into the slider bounds, stores it and returns the
    /// stored value.
    pub fn set_length(&mut self, length: usize) -> usize {
        self.length = length.clamp(MIN_LENGTH, MAX_LENGTH);
        self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert_eq!(config.length(), DEFAULT_LENGTH);
        for class in CharacterClass::ALL {
            assert!(config.is_enabled(class));
            assert!(!config.is_locked(class));
        }
    }

    #[test]
    fn test_new_rejects_empty_set() {
        let result = Configuration::new(CharacterSet::empty(), 12);
        assert_eq!(result, Err(ConfigError::NoClassEnabled));
    }

    #[test]
    fn test_new_rejects_length_out_of_range() {
        let set = CharacterSet::from([CharacterClass::Lowercase]);
        assert_eq!(
            Configuration::new(set.clone(), 7),
            Err(ConfigError::LengthOutOfRange(7))
        );
        assert_eq!(
            Configuration::new(set, 41),
            Err(ConfigError::LengthOutOfRange(41))
        );
    }

    #[test]
    fn test_toggle_off_and_on_keeps_length() {
        let mut config = Configuration::default();
        config.set_length(20);

        config.toggle(CharacterClass::Symbols).unwrap();
        assert!(!config.is_enabled(CharacterClass::Symbols));
        assert_eq!(config.length(), 20);

        config.toggle(CharacterClass::Symbols).unwrap();
        assert!(config.is_enabled(CharacterClass::Symbols));
        assert_eq!(config.length(), 20);
    }

    #[test]
    fn test_toggle_last_class_rejected() {
        let mut config =
            Configuration::new(CharacterSet::from([CharacterClass::Digits]), 10).unwrap();
        assert!(config.is_locked(CharacterClass::Digits));

        let result = config.toggle(CharacterClass::Digits);
        assert_eq!(result, Err(ConfigError::LastEnabledClass(CharacterClass::Digits)));
        assert_eq!(config.enabled().len(), 1);
        assert!(config.is_enabled(CharacterClass::Digits));
    }

    #[test]
    fn test_toggle_down_to_one_class_then_locked() {
        let mut config = Configuration::default();
        config.toggle(CharacterClass::Uppercase).unwrap();
        config.toggle(CharacterClass::Digits).unwrap();
        config.toggle(CharacterClass::Symbols).unwrap();

        assert!(config.is_locked(CharacterClass::Lowercase));
        assert!(config.toggle(CharacterClass::Lowercase).is_err());

        // Enabling another class unlocks the remaining one
        config.toggle(CharacterClass::Digits).unwrap();
        assert!(!config.is_locked(CharacterClass::Lowercase));
    }

    #[test]
    fn test_set_length_clamps() {
        let mut config = Configuration::default();
        assert_eq!(config.set_length(3), MIN_LENGTH);
        assert_eq!(config.set_length(100), MAX_LENGTH);
        assert_eq!(config.set_length(25), 25);
        assert_eq!(config.length(), 25);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        remove_env(LENGTH_ENV);
        remove_env(CLASSES_ENV);

        let config = Configuration::from_env().unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        set_env(LENGTH_ENV, "16");
        set_env(CLASSES_ENV, "lowercase, numbers");

        let config = Configuration::from_env().unwrap();
        assert_eq!(config.length(), 16);
        assert!(config.is_enabled(CharacterClass::Lowercase));
        assert!(config.is_enabled(CharacterClass::Digits));
        assert!(!config.is_enabled(CharacterClass::Uppercase));
        assert!(!config.is_enabled(CharacterClass::Symbols));

        remove_env(LENGTH_ENV);
        remove_env(CLASSES_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_length_clamped() {
        remove_env(CLASSES_ENV);
        set_env(LENGTH_ENV, "64");

        let config = Configuration::from_env().unwrap();
        assert_eq!(config.length(), MAX_LENGTH);

        remove_env(LENGTH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_length() {
        remove_env(CLASSES_ENV);
        set_env(LENGTH_ENV, "twelve");

        let result = Configuration::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidLength(_))));

        remove_env(LENGTH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_unknown_class() {
        remove_env(LENGTH_ENV);
        set_env(CLASSES_ENV, "lowercase,emoji");

        let result = Configuration::from_env();
        assert_eq!(result, Err(ConfigError::UnknownClass("emoji".to_string())));

        remove_env(CLASSES_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_empty_class_list() {
        remove_env(LENGTH_ENV);
        set_env(CLASSES_ENV, " , ");

        let result = Configuration::from_env();
        assert_eq!(result, Err(ConfigError::NoClassEnabled));

        remove_env(CLASSES_ENV);
    }
}
