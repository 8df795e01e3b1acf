//! Per-request page context shared by every template.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use docin_core::{Language, Plan};

use crate::i18n::Localizer;
use crate::middleware::auth::get_current_user;
use crate::middleware::flash::take_flash;
use crate::middleware::locale::get_language;
use crate::services::SessionUser;
use crate::state::AppState;

/// A flash message already translated into the active language.
#[derive(Debug, Clone)]
pub struct FlashView {
    pub css_class: &'static str,
    pub title: String,
    pub message: String,
}

/// Everything the navbar, footer and flash area need.
///
/// Extracting it consumes any pending flash message.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub i18n: Localizer,
    pub user: Option<SessionUser>,
    pub flash: Option<FlashView>,
    /// Request path, used to highlight the active nav link.
    pub path: String,
}

impl PageContext {
    /// A context with no session data, at the given language.
    #[must_use]
    pub fn anonymous(state: &AppState, language: Language, path: &str) -> Self {
        Self {
            i18n: state.localizer(language),
            user: None,
            flash: None,
            path: path.to_string(),
        }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_logged_in)
    }

    #[must_use]
    pub fn is_active(&self, href: &str) -> bool {
        self.path == href
    }

    #[must_use]
    pub fn user_name(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.name.as_str())
    }

    #[must_use]
    pub fn current_plan(&self) -> Option<Plan> {
        self.user.as_ref().map(|u| u.current_plan)
    }
}

impl FromRequestParts<AppState> for PageContext {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_string();

        let Some(session) = parts.extensions.get::<Session>().cloned() else {
            tracing::warn!("Session not found in request extensions - rendering anonymously");
            return Ok(Self::anonymous(state, Language::default(), &path));
        };

        let i18n = state.localizer(get_language(&session).await);
        let user = match get_current_user(&session).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Failed to read user from session: {e}");
                None
            }
        };
        let flash = take_flash(&session).await.map(|flash| FlashView {
            css_class: flash.css_class(),
            title: i18n.t(&flash.title_key).to_string(),
            message: i18n.t(&flash.message_key).to_string(),
        });

        Ok(Self {
            i18n,
            user,
            flash,
            path,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::http::Request;
    use tower_sessions::MemoryStore;

    use super::*;
    use crate::config::SiteConfig;
    use crate::models::session_keys;

    fn state() -> AppState {
        let config = SiteConfig::from_lookup(|key| {
            (key == "SITE_BASE_URL").then(|| "http://localhost:3000".to_string())
        })
        .unwrap();
        AppState::new(config)
    }

    async fn extract(session: Session, path: &str) -> PageContext {
        let (mut parts, ()) = Request::get(path).body(()).unwrap().into_parts();
        parts.extensions.insert(session);
        PageContext::from_request_parts(&mut parts, &state())
            .await
            .unwrap()
    }

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_logged_in_user_is_read_from_session() {
        let state = state();
        let mut store = state.session_store(None);
        assert!(store.login("demo@ai.dz", "demo123"));

        let session = session();
        session
            .insert(session_keys::CURRENT_USER, store.into_user().unwrap())
            .await
            .unwrap();

        let ctx = extract(session, "/pricing").await;
        assert!(ctx.is_logged_in());
        assert_eq!(ctx.current_plan(), Some(Plan::Pro));
        assert!(ctx.is_active("/pricing"));
    }

    #[tokio::test]
    async fn test_unreadable_user_renders_anonymously() {
        let session = session();
        session
            .insert(session_keys::CURRENT_USER, "not a user record")
            .await
            .unwrap();

        let ctx = extract(session, "/").await;
        assert!(ctx.user.is_none());
        assert!(!ctx.is_logged_in());
        assert_eq!(ctx.user_name(), "");
    }
}
