//! Domain models for the site.

pub mod session;

pub use session::{Flash, FlashKind, keys as session_keys};
