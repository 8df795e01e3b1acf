//! Fallback for unknown paths.

use askama::Template;
use askama_web::WebTemplate;
use axum::{http::StatusCode, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::middleware::PageContext;

/// Not Found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
}

/// Render the Not Found page with a 404 status.
#[instrument(skip_all, fields(path = %ctx.path))]
pub async fn not_found(ctx: PageContext) -> impl IntoResponse {
    tracing::debug!("No route matched");
    (StatusCode::NOT_FOUND, NotFoundTemplate { ctx })
}
