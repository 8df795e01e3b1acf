//! CLI command implementations.

pub mod translations;
