use thiserror::Error;

/// Failures raised while turning a query into wire bytes.
///
/// Every variant describes bad caller input. Nothing here is transient, so
/// retrying the same call always fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Unknown query type: {0}")]
    UnknownQType(String),

    #[error("Unknown query class: {0}")]
    UnknownQClass(String),

    #[error("Header field {field} does not fit in 4 bits: {value}")]
    FieldOverflow { field: &'static str, value: u8 },

    #[error("Label '{label}' is {length} bytes, maximum is 63")]
    LabelTooLong { label: String, length: usize },

    #[error("Empty label in domain name: {0}")]
    EmptyLabel(String),

    #[error("Label '{label}' contains invalid byte 0x{byte:02x}")]
    InvalidLabelChar { label: String, byte: u8 },

    #[error("Domain name has no labels")]
    EmptyDomainName,

    #[error("Domain name '{name}' encodes to {length} bytes, maximum is 255")]
    NameTooLong { name: String, length: usize },

    #[error("Header declares {declared} questions but {supplied} were supplied")]
    CountMismatch { declared: u16, supplied: usize },
}
