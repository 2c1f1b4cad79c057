pub mod errors;
pub mod registry;
pub mod root;

pub use errors::ConfigError;
pub use registry::RegistryConfig;
pub use root::Config;
