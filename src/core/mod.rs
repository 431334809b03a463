//! Core infrastructure: fundamental types, constants, and error handling.
//!
//! Everything else in the crate builds on these definitions, so this module
//! depends on nothing from the dataset, config, or benchmark layers.

pub mod constants;
pub mod error;
pub mod types;
