//! RFC 1035 wire encoding for outgoing queries.
//!
//! `HeaderEncoder` packs the fixed 12-byte header, `QuestionEncoder` lays out
//! one question entry and `MessageBuilder` writes both into a single buffer
//! sized up front.

pub mod header;
pub mod message_builder;
pub mod question;

pub use header::{HeaderEncoder, HEADER_LEN};
pub use message_builder::MessageBuilder;
pub use question::{QuestionEncoder, MAX_LABEL_LEN, MAX_NAME_LEN};
