//! Language switch.
//!
//! The navbar button posts an empty form to toggle between English and
//! Arabic; a `lang` field selects a language explicitly.

use axum::{
    Form,
    extract::State,
    http::{HeaderMap, header::REFERER},
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use url::Url;

use docin_core::Language;

use crate::error::Result;
use crate::middleware::{get_language, set_language};
use crate::state::AppState;

/// Language form data.
#[derive(Debug, Default, Deserialize)]
pub struct LanguageForm {
    /// Target language tag; absent or empty toggles.
    pub lang: Option<String>,
}

/// Switch language and send the visitor back where they came from.
#[instrument(skip_all)]
pub async fn switch(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Form(form): Form<LanguageForm>,
) -> Result<Redirect> {
    let mut i18n = state.localizer(get_language(&session).await);

    match form.lang.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
        None => {
            i18n.toggle();
        }
        Some(tag) => match tag.parse::<Language>() {
            Ok(language) => i18n.set_language(language),
            Err(e) => tracing::warn!("Keeping current language: {e}"),
        },
    }

    set_language(&session, i18n.language()).await?;
    tracing::debug!(language = %i18n.language(), "Language switched");

    let referer = headers.get(REFERER).and_then(|v| v.to_str().ok());
    Ok(Redirect::to(&return_path(referer, &state.config().base_url)))
}

/// Path and query of a same-origin referrer, or `/`.
#[must_use]
pub fn return_path(referer: Option<&str>, base_url: &Url) -> String {
    referer
        .and_then(|r| Url::parse(r).ok())
        .filter(|url| url.origin() == base_url.origin())
        .filter(|url| !url.path().starts_with("//"))
        .map_or_else(
            || "/".to_string(),
            |url| match url.query() {
                Some(query) => format!("{}?{query}", url.path()),
                None => url.path().to_string(),
            },
        )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://docin.ai.dz").unwrap()
    }

    #[test]
    fn test_returns_to_same_origin_page() {
        assert_eq!(
            return_path(Some("https://docin.ai.dz/pricing"), &base()),
            "/pricing"
        );
        assert_eq!(
            return_path(Some("https://docin.ai.dz/login?demo=1"), &base()),
            "/login?demo=1"
        );
    }

    #[test]
    fn test_foreign_or_missing_referer_goes_home() {
        assert_eq!(return_path(None, &base()), "/");
        assert_eq!(return_path(Some("https://evil.example/pricing"), &base()), "/");
        assert_eq!(return_path(Some("http://docin.ai.dz/pricing"), &base()), "/");
        assert_eq!(return_path(Some("not a url"), &base()), "/");
    }

    #[test]
    fn test_protocol_relative_path_is_rejected() {
        assert_eq!(
            return_path(Some("https://docin.ai.dz//evil.example"), &base()),
            "/"
        );
    }
}
