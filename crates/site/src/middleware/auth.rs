//! Authentication extractors and session helpers.
//!
//! The logged-in [`SessionUser`] lives in the visitor's web session. These
//! helpers move it between the session and a
//! [`SessionStore`](crate::services::SessionStore).

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::session_keys;
use crate::services::SessionUser;

/// Extractor that requires a logged-in visitor.
///
/// Anonymous visitors are redirected to the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(RequireAuth(user): RequireAuth) -> impl IntoResponse {
///     format!("Hello, {}!", user.name)
/// }
/// ```
pub struct RequireAuth(pub SessionUser);

/// Error returned when authentication is required but nobody is logged in.
#[derive(Debug)]
pub enum AuthRejection {
    /// Redirect to login page.
    RedirectToLogin,
    /// The session layer is missing from the stack.
    MissingSession,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/login").into_response(),
            Self::MissingSession => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts.extensions.get::<Session>().ok_or_else(|| {
            tracing::error!("Session not found in request extensions");
            AuthRejection::MissingSession
        })?;

        let user = get_current_user(session)
            .await
            .ok()
            .flatten()
            .filter(|user| user.is_logged_in)
            .ok_or(AuthRejection::RedirectToLogin)?;

        Ok(Self(user))
    }
}

/// Read the logged-in visitor from the session.
///
/// # Errors
///
/// Returns an error if the session cannot be read.
pub async fn get_current_user(
    session: &Session,
) -> Result<Option<SessionUser>, tower_sessions::session::Error> {
    session.get(session_keys::CURRENT_USER).await
}

/// Write the outcome of a session store operation back to the session.
///
/// `None` removes the record (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn store_current_user(
    session: &Session,
    user: Option<&SessionUser>,
) -> Result<(), tower_sessions::session::Error> {
    match user {
        Some(user) => session.insert(session_keys::CURRENT_USER, user).await,
        None => {
            session
                .remove::<SessionUser>(session_keys::CURRENT_USER)
                .await?;
            Ok(())
        }
    }
}
