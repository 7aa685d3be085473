//! Characteristic reference data for spaceplan.
//!
//! The planner only understands characteristics on an explicit allow-list;
//! codes outside it are dropped before they can influence matching. This
//! crate owns that allow-list as the [`CharacteristicCatalog`]: a built-in
//! default set, overridable from TOML or YAML without code changes.
//!
//! # Examples
//!
//! Load a catalog from a TOML string:
//!
//! ```
//! use spaceplan_config::CharacteristicCatalog;
//!
//! let catalog = CharacteristicCatalog::from_toml_str(r#"
//!     [[characteristics]]
//!     code = "single"
//!     label = "Single occupancy"
//!     weighting = 100
//!     exclusive_room = true
//!
//!     [[characteristics]]
//!     code = "stepFree"
//!     label = "Step-free access"
//!     weighting = 80
//! "#).unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.exclusive_room().code(), "single");
//! ```
//!
//! Use the built-in reference data when no file is present:
//!
//! ```
//! use spaceplan_config::CharacteristicCatalog;
//!
//! let catalog = CharacteristicCatalog::load("characteristics.toml")
//!     .unwrap_or_default();
//! assert!(catalog.resolve("wheelchair").is_some());
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use spaceplan_core::Characteristic;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// Serialized shape of one recognized characteristic.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CharacteristicConfig {
    /// Stable code the external systems use for this characteristic.
    pub code: String,

    /// Display label.
    pub label: String,

    /// Weighting for priority ordering and best-fit; must be at least 1.
    pub weighting: u32,

    /// Marks the characteristic that claims a whole room.
    #[serde(default)]
    pub exclusive_room: bool,
}

/// Serialized shape of a full catalog file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub characteristics: Vec<CharacteristicConfig>,
}

impl CatalogConfig {
    /// Adds one characteristic entry.
    pub fn with_characteristic(mut self, entry: CharacteristicConfig) -> Self {
        self.characteristics.push(entry);
        self
    }
}

/// The allow-list of characteristics the planning engine recognizes.
///
/// Resolution is by code; unknown codes resolve to nothing and are dropped
/// silently by [`CharacteristicCatalog::resolve_all`], which is how raw
/// snapshot data is kept from smuggling unrecognized traits into matching.
#[derive(Debug, Clone)]
pub struct CharacteristicCatalog {
    // Sorted by code; at most a few dozen entries, linear scans are fine.
    entries: Vec<Characteristic>,
    exclusive_index: usize,
}

impl CharacteristicCatalog {
    /// Builds a catalog from parsed configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a weighting is zero, a code is
    /// duplicated, or the catalog does not contain exactly one
    /// exclusive-room characteristic.
    pub fn from_config(config: CatalogConfig) -> Result<Self, ConfigError> {
        let mut entries: Vec<Characteristic> = Vec::with_capacity(config.characteristics.len());

        for entry in &config.characteristics {
            if entry.weighting == 0 {
                return Err(ConfigError::Invalid(format!(
                    "characteristic '{}' has weighting 0 (must be at least 1)",
                    entry.code
                )));
            }
            if entries.iter().any(|c| c.code() == entry.code) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate characteristic code '{}'",
                    entry.code
                )));
            }
            let characteristic = if entry.exclusive_room {
                Characteristic::exclusive(&entry.code, &entry.label, entry.weighting)
            } else {
                Characteristic::new(&entry.code, &entry.label, entry.weighting)
            };
            entries.push(characteristic);
        }

        entries.sort();

        let exclusive: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_exclusive_room())
            .map(|(i, _)| i)
            .collect();
        let exclusive_index = match exclusive.as_slice() {
            [index] => *index,
            [] => {
                return Err(ConfigError::Invalid(
                    "no exclusive-room characteristic defined".into(),
                ))
            }
            _ => {
                return Err(ConfigError::Invalid(
                    "more than one exclusive-room characteristic defined".into(),
                ))
            }
        };

        Ok(Self {
            entries,
            exclusive_index,
        })
    }

    /// Loads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML, or
    /// fails catalog validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads a catalog from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a catalog from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Self::from_config(toml::from_str(s)?)
    }

    /// Loads a catalog from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses a catalog from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Self::from_config(serde_yaml::from_str(s)?)
    }

    /// Looks up a recognized characteristic by code.
    pub fn resolve(&self, code: &str) -> Option<&Characteristic> {
        self.entries.iter().find(|c| c.code() == code)
    }

    /// Resolves a batch of codes, dropping any the catalog doesn't know.
    pub fn resolve_all<'a>(
        &self,
        codes: impl IntoIterator<Item = &'a str>,
    ) -> BTreeSet<Characteristic> {
        codes
            .into_iter()
            .filter_map(|code| self.resolve(code).cloned())
            .collect()
    }

    /// Returns the exclusive-room characteristic.
    pub fn exclusive_room(&self) -> &Characteristic {
        &self.entries[self.exclusive_index]
    }

    /// Iterates recognized characteristics in code order.
    pub fn iter(&self) -> impl Iterator<Item = &Characteristic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CharacteristicCatalog {
    /// The built-in reference data used when no catalog file is supplied.
    fn default() -> Self {
        let config = CatalogConfig {
            characteristics: vec![
                CharacteristicConfig {
                    code: "single".into(),
                    label: "Single occupancy".into(),
                    weighting: 100,
                    exclusive_room: true,
                },
                CharacteristicConfig {
                    code: "wheelchair".into(),
                    label: "Wheelchair accessible".into(),
                    weighting: 90,
                    exclusive_room: false,
                },
                CharacteristicConfig {
                    code: "stepFree".into(),
                    label: "Step-free access".into(),
                    weighting: 80,
                    exclusive_room: false,
                },
                CharacteristicConfig {
                    code: "enSuite".into(),
                    label: "En-suite bathroom".into(),
                    weighting: 70,
                    exclusive_room: false,
                },
                CharacteristicConfig {
                    code: "arson".into(),
                    label: "Arson suitable".into(),
                    weighting: 60,
                    exclusive_room: false,
                },
                CharacteristicConfig {
                    code: "catered".into(),
                    label: "Catered".into(),
                    weighting: 50,
                    exclusive_room: false,
                },
            ],
        };
        // Built-in data is validated like any other; it cannot fail.
        Self::from_config(config).expect("built-in catalog is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_parsing() {
        let toml = r#"
            [[characteristics]]
            code = "single"
            label = "Single occupancy"
            weighting = 100
            exclusive_room = true

            [[characteristics]]
            code = "enSuite"
            label = "En-suite bathroom"
            weighting = 70
        "#;

        let catalog = CharacteristicCatalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resolve("enSuite").unwrap().weighting(), 70);
        assert!(catalog.exclusive_room().is_exclusive_room());
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
            characteristics:
              - code: single
                label: Single occupancy
                weighting: 100
                exclusive_room: true
              - code: wheelchair
                label: Wheelchair accessible
                weighting: 90
        "#;

        let catalog = CharacteristicCatalog::from_yaml_str(yaml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resolve("wheelchair").unwrap().weighting(), 90);
    }

    #[test]
    fn test_default_catalog() {
        let catalog = CharacteristicCatalog::default();

        assert_eq!(catalog.exclusive_room().code(), "single");
        assert!(catalog.resolve("stepFree").is_some());
        assert!(catalog.resolve("nope").is_none());

        // Iteration is in code order
        let codes: Vec<_> = catalog.iter().map(|c| c.code().to_owned()).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_resolve_all_drops_unknown_codes() {
        let catalog = CharacteristicCatalog::default();

        let resolved = catalog.resolve_all(["enSuite", "notARealCode", "single"]);
        let codes: Vec<_> = resolved.iter().map(|c| c.code()).collect();
        assert_eq!(codes, ["enSuite", "single"]);
    }

    #[test]
    fn test_zero_weighting_rejected() {
        let toml = r#"
            [[characteristics]]
            code = "single"
            label = "Single occupancy"
            weighting = 0
            exclusive_room = true
        "#;

        let err = CharacteristicCatalog::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let config = CatalogConfig::default()
            .with_characteristic(CharacteristicConfig {
                code: "single".into(),
                label: "Single occupancy".into(),
                weighting: 100,
                exclusive_room: true,
            })
            .with_characteristic(CharacteristicConfig {
                code: "single".into(),
                label: "Single again".into(),
                weighting: 10,
                exclusive_room: false,
            });

        let err = CharacteristicCatalog::from_config(config).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_exactly_one_exclusive_room_required() {
        let none = CatalogConfig::default().with_characteristic(CharacteristicConfig {
            code: "enSuite".into(),
            label: "En-suite bathroom".into(),
            weighting: 70,
            exclusive_room: false,
        });
        assert!(matches!(
            CharacteristicCatalog::from_config(none),
            Err(ConfigError::Invalid(_))
        ));

        let two = CatalogConfig::default()
            .with_characteristic(CharacteristicConfig {
                code: "single".into(),
                label: "Single occupancy".into(),
                weighting: 100,
                exclusive_room: true,
            })
            .with_characteristic(CharacteristicConfig {
                code: "alsoSingle".into(),
                label: "Also single".into(),
                weighting: 90,
                exclusive_room: true,
            });
        assert!(matches!(
            CharacteristicCatalog::from_config(two),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let catalog =
            CharacteristicCatalog::load("no/such/characteristics.toml").unwrap_or_default();
        assert_eq!(catalog.exclusive_room().code(), "single");
    }
}
