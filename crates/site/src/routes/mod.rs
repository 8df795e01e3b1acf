//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /pricing                - Plans, current plan marked, FAQ
//! GET  /api-docs               - REST API documentation
//! GET  /health                 - Health check (registered in `app`)
//!
//! # Auth
//! GET  /login                  - Login page (`?demo=1` prefills the demo account)
//! POST /login                  - Login action
//! GET  /signup                 - Signup page
//! POST /signup                 - Signup action
//! POST /logout                 - Logout action
//!
//! # Preferences
//! POST /language               - Toggle or set the language, then go back
//!
//! # Dashboard (requires auth)
//! GET  /dashboard              - Usage overview and API key
//!
//! *    fallback                - Not Found page
//! ```

pub mod api_docs;
pub mod auth;
pub mod dashboard;
pub mod home;
pub mod language;
pub mod not_found;
pub mod pricing;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/signup", get(auth::signup_page).post(auth::signup))
        .route("/logout", post(auth::logout))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/pricing", get(pricing::pricing))
        .route("/api-docs", get(api_docs::api_docs))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/language", post(language::switch))
        .merge(auth_routes())
}
