#![allow(dead_code)]
pub mod decoder;

#[allow(unused_imports)]
pub use decoder::{decode_header, decode_question, DecodedQuestion};
