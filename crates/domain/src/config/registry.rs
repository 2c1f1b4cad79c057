use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::errors::ConfigError;

/// Extra type and class mnemonics layered on top of the RFC 1035 tables.
///
/// ```toml
/// [registry.types]
/// CAA = 257
///
/// [registry.classes]
/// chaos = 3
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    #[serde(default)]
    pub types: BTreeMap<String, u16>,

    #[serde(default)]
    pub classes: BTreeMap<String, u16>,
}

impl RegistryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_table("type", &self.types)?;
        Self::validate_table("class", &self.classes)
    }

    fn validate_table(kind: &str, table: &BTreeMap<String, u16>) -> Result<(), ConfigError> {
        for (name, code) in table {
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(ConfigError::Validation(format!(
                    "Invalid {} mnemonic '{}'",
                    kind, name
                )));
            }
            // 0 is reserved in both tables
            if *code == 0 {
                return Err(ConfigError::Validation(format!(
                    "{} '{}' cannot use reserved code 0",
                    kind, name
                )));
            }
        }
        Ok(())
    }
}
