//! Business logic services for the site.
//!
//! # Services
//!
//! - `session` - Mock login/signup/logout over a single in-memory record

pub mod session;

pub use session::{DemoCredentials, SessionStore, SessionUser};
