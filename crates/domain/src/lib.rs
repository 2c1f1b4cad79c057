//! Ferrous Query Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod header;
pub mod question;
pub mod registry;

pub use config::{Config, ConfigError, RegistryConfig};
pub use dns_record::{RecordClass, RecordType};
pub use errors::WireError;
pub use header::{Header, Opcode, ResponseCode, NIBBLE_MAX};
pub use question::Question;
pub use registry::TypeClassRegistry;
