//! API documentation page.
//!
//! Request and response examples are built as JSON values and
//! pretty-printed at render time.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use serde_json::{Value, json};
use tracing::instrument;

use crate::filters;
use crate::i18n::Localizer;
use crate::middleware::PageContext;

/// Public base URL of the Doc-IN REST API.
pub const API_BASE_URL: &str = "https://api.docin.ai.dz";

/// Key shown in the examples.
const EXAMPLE_KEY: &str = "Bearer dokin_abc123_xyz789";

/// One documented endpoint.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    pub title: String,
    pub description: &'static str,
    pub request: String,
    pub response: String,
}

impl Endpoint {
    fn new(
        method: &'static str,
        path: &'static str,
        icon: &'static str,
        title: &str,
        description: &'static str,
        request: &Value,
        response: &Value,
    ) -> Self {
        Self {
            method,
            path,
            icon,
            title: title.to_string(),
            description,
            request: format!("{request:#}"),
            response: format!("{response:#}"),
        }
    }

    /// Badge class for the HTTP method.
    #[must_use]
    pub fn method_class(&self) -> &'static str {
        method_class(self.method)
    }
}

/// Badge class for an HTTP method.
#[must_use]
pub fn method_class(method: &str) -> &'static str {
    match method {
        "POST" => "badge badge--green",
        "GET" => "badge badge--blue",
        "PUT" => "badge badge--yellow",
        "DELETE" => "badge badge--red",
        _ => "badge badge--gray",
    }
}

/// Client library availability.
#[derive(Debug, Clone, Copy)]
pub struct Sdk {
    pub name: &'static str,
    pub available: bool,
}

pub const SDKS: &[Sdk] = &[
    Sdk {
        name: "Python",
        available: true,
    },
    Sdk {
        name: "JavaScript",
        available: true,
    },
    Sdk {
        name: "PHP",
        available: false,
    },
];

/// A rate limit figure and its unit.
#[derive(Debug, Clone, Copy)]
pub struct RateLimit {
    pub value: &'static str,
    pub unit: &'static str,
}

pub const RATE_LIMITS: &[RateLimit] = &[
    RateLimit {
        value: "60",
        unit: "requests/minute",
    },
    RateLimit {
        value: "1000",
        unit: "requests/hour",
    },
    RateLimit {
        value: "10MB",
        unit: "max file size",
    },
];

/// The documented endpoints, titles in the active language.
#[must_use]
pub fn endpoints(i18n: &Localizer) -> Vec<Endpoint> {
    vec![
        Endpoint::new(
            "POST",
            "/api/v1/upload-invoice",
            "upload",
            i18n.t("api.upload.title"),
            "Upload an invoice file for AI processing",
            &json!({
                "headers": {
                    "Authorization": EXAMPLE_KEY,
                    "Content-Type": "multipart/form-data"
                },
                "body": "Form data with \"file\" field containing the invoice"
            }),
            &json!({
                "id": "inv_12345",
                "status": "processing",
                "filename": "invoice_001.pdf",
                "created_at": "2024-01-15T10:30:00Z"
            }),
        ),
        Endpoint::new(
            "GET",
            "/api/v1/extract/{invoice_id}",
            "download",
            i18n.t("api.extract.title"),
            "Retrieve extracted data from a processed invoice",
            &json!({
                "headers": { "Authorization": EXAMPLE_KEY }
            }),
            &json!({
                "id": "inv_12345",
                "status": "completed",
                "data": {
                    "invoice_number": "INV-2024-001",
                    "date": "2024-01-15",
                    "total_amount": 1500.0,
                    "currency": "DZD",
                    "vendor": {
                        "name": "ABC Company",
                        "tax_id": "123456789"
                    },
                    "items": [
                        {
                            "description": "Service A",
                            "quantity": 1,
                            "unit_price": 1500.0,
                            "total": 1500.0
                        }
                    ]
                }
            }),
        ),
        Endpoint::new(
            "GET",
            "/api/v1/usage",
            "chart",
            i18n.t("api.usage.title"),
            "Get current usage statistics and limits",
            &json!({
                "headers": { "Authorization": EXAMPLE_KEY }
            }),
            &json!({
                "current_plan": "Pro",
                "invoices_processed": 245,
                "monthly_limit": 500,
                "reset_date": "2024-02-01T00:00:00Z",
                "remaining": 255
            }),
        ),
    ]
}

/// API docs page template.
#[derive(Template, WebTemplate)]
#[template(path = "api_docs.html")]
pub struct ApiDocsTemplate {
    pub ctx: PageContext,
    pub base_url: &'static str,
    pub endpoints: Vec<Endpoint>,
    pub sdks: &'static [Sdk],
    pub rate_limits: &'static [RateLimit],
}

/// Display the API documentation.
#[instrument(skip_all)]
pub async fn api_docs(ctx: PageContext) -> impl IntoResponse {
    ApiDocsTemplate {
        base_url: API_BASE_URL,
        endpoints: endpoints(&ctx.i18n),
        sdks: SDKS,
        rate_limits: RATE_LIMITS,
        ctx,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::i18n::Catalog;

    #[test]
    fn test_three_endpoints_with_pretty_json() {
        let i18n = Localizer::new(Arc::new(Catalog::builtin()));
        let endpoints = endpoints(&i18n);

        assert_eq!(endpoints.len(), 3);
        assert_eq!(endpoints[0].title, "Upload Invoice");
        assert_eq!(endpoints[0].method_class(), "badge badge--green");
        assert!(endpoints[1].response.contains("\n  \"id\": \"inv_12345\""));

        let usage: Value = serde_json::from_str(&endpoints[2].response).unwrap();
        assert_eq!(usage["remaining"], 255);
        assert_eq!(usage["current_plan"], "Pro");
    }

    #[test]
    fn test_method_classes() {
        assert_eq!(method_class("GET"), "badge badge--blue");
        assert_eq!(method_class("DELETE"), "badge badge--red");
        assert_eq!(method_class("PATCH"), "badge badge--gray");
    }
}
