//! One-shot notifications carried across a redirect.

use tower_sessions::Session;

use crate::models::{Flash, session_keys};

/// Queue a notification for the next rendered page.
///
/// Best effort: a session failure only loses the notification.
pub async fn set_flash(session: &Session, flash: Flash) {
    if let Err(e) = session.insert(session_keys::FLASH, flash).await {
        tracing::warn!("Failed to store flash message: {e}");
    }
}

/// Remove and return the pending notification, if any.
pub async fn take_flash(session: &Session) -> Option<Flash> {
    session
        .remove::<Flash>(session_keys::FLASH)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to read flash message: {e}");
            None
        })
}
