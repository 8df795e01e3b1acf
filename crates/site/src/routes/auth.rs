//! Authentication route handlers.
//!
//! Login, signup and logout run against a [`SessionStore`] rebuilt from the
//! visitor's web session; the outcome is written back before redirecting.
//!
//! [`SessionStore`]: crate::services::SessionStore

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::Redirect,
};
use secrecy::ExposeSecret;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use docin_core::Email;

use crate::error::{Result, add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{PageContext, get_current_user, set_flash, store_current_user};
use crate::models::Flash;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Signup form data.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub company: Option<String>,
}

// =============================================================================
// Query Types
// =============================================================================

/// Query parameters for the login page.
#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    /// `1` prefills the demo account.
    pub demo: Option<String>,
    pub error: Option<String>,
}

/// Query parameters for the signup page.
#[derive(Debug, Default, Deserialize)]
pub struct SignupQuery {
    pub error: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub ctx: PageContext,
    pub email: String,
    pub password: String,
    pub invalid: bool,
}

/// Signup page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/signup.html")]
pub struct SignupTemplate {
    pub ctx: PageContext,
    pub invalid: bool,
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
///
/// "Try Demo Account" links here with `?demo=1`, which fills in the demo
/// credentials without submitting them.
#[instrument(skip_all)]
pub async fn login_page(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
    ctx: PageContext,
) -> LoginTemplate {
    let (email, password) = if query.demo.as_deref() == Some("1") {
        let demo = state.demo();
        (demo.email.clone(), demo.password.expose_secret().to_string())
    } else {
        (String::new(), String::new())
    };

    LoginTemplate {
        ctx,
        email,
        password,
        invalid: query.error.is_some(),
    }
}

/// Handle login form submission.
///
/// Only the demo credentials are accepted.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect> {
    let mut store = state.session_store(get_current_user(&session).await?);

    if !store.login(&form.email, &form.password) {
        tracing::warn!("Login failed");
        set_flash(
            &session,
            Flash::error("toast.login.failed", "toast.login.failed.desc"),
        )
        .await;
        return Ok(Redirect::to("/login?error=credentials"));
    }

    session.cycle_id().await?;
    store_current_user(&session, store.current_user()).await?;

    if let Some(user) = store.current_user() {
        set_sentry_user(&user.email, &user.name);
        add_breadcrumb("auth", "Demo login", Some(&[("plan", user.current_plan.as_str())]));
    }

    set_flash(
        &session,
        Flash::success("toast.login.success", "toast.login.success.desc"),
    )
    .await;
    Ok(Redirect::to("/dashboard"))
}

// =============================================================================
// Signup Routes
// =============================================================================

/// Display the signup page.
#[instrument(skip_all)]
pub async fn signup_page(Query(query): Query<SignupQuery>, ctx: PageContext) -> SignupTemplate {
    SignupTemplate {
        ctx,
        invalid: query.error.is_some(),
    }
}

/// Handle signup form submission.
///
/// The store accepts anything; the form is checked for a name, a
/// well-formed email and a password first, as a browser would before
/// submitting.
#[instrument(skip_all)]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SignupForm>,
) -> Result<Redirect> {
    let name = form.name.trim();
    let email = match Email::parse(&form.email) {
        Ok(_) if name.is_empty() => {
            tracing::warn!("Signup rejected: empty name");
            return reject_signup(&session).await;
        }
        Ok(_) if form.password.is_empty() => {
            tracing::warn!("Signup rejected: empty password");
            return reject_signup(&session).await;
        }
        Ok(email) => email,
        Err(e) => {
            tracing::warn!("Signup rejected: {e}");
            return reject_signup(&session).await;
        }
    };

    let mut store = state.session_store(get_current_user(&session).await?);
    store.signup(
        name,
        email.as_str(),
        &form.password,
        form.company.as_deref(),
    );

    session.cycle_id().await?;
    store_current_user(&session, store.current_user()).await?;

    if let Some(user) = store.current_user() {
        set_sentry_user(&user.email, &user.name);
        add_breadcrumb("auth", "Signup", Some(&[("plan", user.current_plan.as_str())]));
    }

    set_flash(
        &session,
        Flash::success("toast.signup.success", "toast.signup.success.desc"),
    )
    .await;
    Ok(Redirect::to("/dashboard"))
}

async fn reject_signup(session: &Session) -> Result<Redirect> {
    set_flash(
        session,
        Flash::error("toast.signup.invalid", "toast.signup.invalid.desc"),
    )
    .await;
    Ok(Redirect::to("/signup?error=invalid"))
}

// =============================================================================
// Logout
// =============================================================================

/// Handle logout.
///
/// Clears the session record but keeps the language choice.
#[instrument(skip_all)]
pub async fn logout(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    let mut store = state.session_store(get_current_user(&session).await?);
    store.logout();
    store_current_user(&session, store.current_user()).await?;

    clear_sentry_user();
    set_flash(&session, Flash::success("toast.logout", "toast.logout.desc")).await;
    Ok(Redirect::to("/"))
}
