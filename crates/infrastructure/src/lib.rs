//! Ferrous Query Infrastructure Layer
pub mod dns;
