//! Symbolic type/class name → wire code lookup.
//!
//! The registry is built once and then only read. Encoders take it by
//! reference (or through an `Arc`), so the tables an encoder uses are part of
//! its inputs and tests can run against small custom tables.

use crate::config::{ConfigError, RegistryConfig};
use crate::dns_record::{RecordClass, RecordType};
use crate::errors::WireError;
use rustc_hash::FxHashMap;

/// Alias for the Internet class accepted alongside `IN`.
pub const INET_ALIAS: &str = "inet";

#[derive(Debug, Clone)]
pub struct TypeClassRegistry {
    types: FxHashMap<Box<str>, u16>,
    classes: FxHashMap<Box<str>, u16>,
}

impl TypeClassRegistry {
    /// A registry with no entries at all.
    pub fn empty() -> Self {
        Self {
            types: FxHashMap::default(),
            classes: FxHashMap::default(),
        }
    }

    /// The RFC 1035 type and class tables, plus AAAA, SRV and the `inet` alias.
    pub fn rfc1035() -> Self {
        let mut registry = Self::empty();
        for rt in RecordType::all() {
            registry.types.insert(rt.as_str().into(), rt.to_u16());
        }
        registry.types.insert("*".into(), RecordType::ANY.to_u16());

        for rc in RecordClass::all() {
            registry.classes.insert(rc.as_str().into(), rc.to_u16());
        }
        registry
            .classes
            .insert(INET_ALIAS.into(), RecordClass::IN.to_u16());
        registry.classes.insert("*".into(), RecordClass::ANY.to_u16());
        registry
    }

    /// Standard tables extended (or overridden) by the configured entries.
    ///
    /// The config is validated first, so a reserved code 0 or a malformed
    /// mnemonic never reaches the tables.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut registry = Self::rfc1035();
        for (name, code) in &config.types {
            registry.types.insert(name.as_str().into(), *code);
        }
        for (name, code) in &config.classes {
            registry.classes.insert(name.as_str().into(), *code);
        }
        Ok(registry)
    }

    pub fn with_type(mut self, name: &str, code: u16) -> Self {
        self.types.insert(name.into(), code);
        self
    }

    pub fn with_class(mut self, name: &str, code: u16) -> Self {
        self.classes.insert(name.into(), code);
        self
    }

    /// Exact, case-sensitive match on the type mnemonic.
    pub fn lookup_type(&self, name: &str) -> Result<u16, WireError> {
        self.types
            .get(name)
            .copied()
            .ok_or_else(|| WireError::UnknownQType(name.to_string()))
    }

    /// Exact, case-sensitive match on the class mnemonic.
    pub fn lookup_class(&self, name: &str) -> Result<u16, WireError> {
        self.classes
            .get(name)
            .copied()
            .ok_or_else(|| WireError::UnknownQClass(name.to_string()))
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}

impl Default for TypeClassRegistry {
    fn default() -> Self {
        Self::rfc1035()
    }
}
