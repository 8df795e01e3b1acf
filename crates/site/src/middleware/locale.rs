//! Per-visitor language selection.

use tower_sessions::Session;

use docin_core::Language;

use crate::models::session_keys;

/// Read the visitor's language, defaulting to English.
///
/// An unreadable or absent value counts as the default.
pub async fn get_language(session: &Session) -> Language {
    match session.get::<Language>(session_keys::LANGUAGE).await {
        Ok(language) => language.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Failed to read language from session: {e}");
            Language::default()
        }
    }
}

/// Persist the visitor's language for later requests.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_language(
    session: &Session,
    language: Language,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::LANGUAGE, language).await
}
