//! Doc-IN Core - Shared types library.
//!
//! This crate provides common types used across all Doc-IN components:
//! - `site` - Localized marketing site and demo dashboard
//! - `cli` - Command-line tools for inspecting the translation catalog
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no templates.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Languages, subscription plans, emails and display API keys

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
