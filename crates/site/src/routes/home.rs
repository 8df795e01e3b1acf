//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::filters;
use crate::i18n::Localizer;
use crate::middleware::PageContext;

/// Technologies listed under "Powered by Advanced AI".
pub const TECH_STACK: &[&str] = &[
    "Machine Learning",
    "Neural Networks",
    "OCR Technology",
    "Cloud Computing",
];

/// A translated card in the features or benefits grid.
#[derive(Debug, Clone)]
pub struct Highlight {
    /// Icon class suffix, rendered as `icon--{icon}`.
    pub icon: &'static str,
    pub title: String,
    pub description: String,
}

const FEATURES: &[(&str, &str)] = &[
    ("brain", "features.accuracy"),
    ("zap", "features.speed"),
    ("shield", "features.integration"),
    ("globe", "features.support"),
];

const BENEFITS: &[(&str, &str)] = &[
    ("clock", "benefits.time"),
    ("coins", "benefits.cost"),
    ("target", "benefits.accuracy"),
];

fn highlights(i18n: &Localizer, entries: &[(&'static str, &str)]) -> Vec<Highlight> {
    entries
        .iter()
        .map(|&(icon, prefix)| Highlight {
            icon,
            title: i18n.t(&format!("{prefix}.title")).to_string(),
            description: i18n.t(&format!("{prefix}.desc")).to_string(),
        })
        .collect()
}

/// Feature cards in the active language.
#[must_use]
pub fn features(i18n: &Localizer) -> Vec<Highlight> {
    highlights(i18n, FEATURES)
}

/// Benefit cards in the active language.
#[must_use]
pub fn benefits(i18n: &Localizer) -> Vec<Highlight> {
    highlights(i18n, BENEFITS)
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub features: Vec<Highlight>,
    pub benefits: Vec<Highlight>,
    pub tech_stack: &'static [&'static str],
}

/// Display the home page.
#[instrument(skip_all)]
pub async fn home(ctx: PageContext) -> impl IntoResponse {
    HomeTemplate {
        features: features(&ctx.i18n),
        benefits: benefits(&ctx.i18n),
        tech_stack: TECH_STACK,
        ctx,
    }
}
