//! Core types for Doc-IN.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod api_key;
pub mod email;
pub mod language;
pub mod plan;

pub use api_key::ApiKey;
pub use email::{Email, EmailError};
pub use language::{Language, LanguageError, TextDirection};
pub use plan::{Plan, PlanError};
