pub mod wire;

pub use wire::{HeaderEncoder, MessageBuilder, QuestionEncoder};
