//! Session-related types.
//!
//! Values stored in the visitor's `tower-sessions` session.

use serde::{Deserialize, Serialize};

/// Visual style of a one-shot notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    Success,
    Error,
}

/// One-shot notification shown on the next rendered page.
///
/// Holds translation keys so it renders in whatever language is active
/// when it is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub title_key: String,
    pub message_key: String,
}

impl Flash {
    #[must_use]
    pub fn success(title_key: &str, message_key: &str) -> Self {
        Self {
            kind: FlashKind::Success,
            title_key: title_key.to_string(),
            message_key: message_key.to_string(),
        }
    }

    #[must_use]
    pub fn error(title_key: &str, message_key: &str) -> Self {
        Self {
            kind: FlashKind::Error,
            title_key: title_key.to_string(),
            message_key: message_key.to_string(),
        }
    }

    /// CSS modifier class for the toast.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self.kind {
            FlashKind::Success => "toast--success",
            FlashKind::Error => "toast--error",
        }
    }
}

/// Session keys.
pub mod keys {
    /// Key for the logged-in [`SessionUser`](crate::services::SessionUser).
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the visitor's active language tag.
    pub const LANGUAGE: &str = "language";

    /// Key for the pending [`Flash`](super::Flash).
    pub const FLASH: &str = "flash";
}
