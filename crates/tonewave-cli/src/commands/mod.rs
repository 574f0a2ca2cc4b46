//! Command implementations for the tonewave CLI.

pub mod generate;
pub mod inspect;
