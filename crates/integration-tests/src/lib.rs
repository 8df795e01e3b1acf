//! Integration tests for the Doc-IN site.
//!
//! Each test spawns the full router on an ephemeral port and talks to it
//! over real HTTP with a cookie-keeping client, so sessions, redirects and
//! headers behave as they do in a browser.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p docin-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc)]

use std::net::SocketAddr;

use reqwest::{Client, Response, header::REFERER, redirect::Policy};

use docin_site::config::SiteConfig;
use docin_site::state::AppState;

/// Static assets of the site crate, independent of the test's working directory.
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../site/static");

/// A running site plus a client that keeps its cookies.
pub struct TestApp {
    pub address: SocketAddr,
    pub client: Client,
}

impl TestApp {
    /// Start the site on `127.0.0.1` with a random port.
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let address = listener.local_addr().expect("Listener has no address");

        let config = test_config(&format!("http://{address}"));
        let app = docin_site::app(AppState::new(config));

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server failed");
        });

        let client = Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self { address, client }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.address)
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    pub async fn get_text(&self, path: &str) -> String {
        self.get(path)
            .await
            .text()
            .await
            .expect("Failed to read body")
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request failed")
    }

    /// Press the navbar language button while on `from_path`.
    pub async fn toggle_language(&self, from_path: &str) -> Response {
        self.client
            .post(self.url("/language"))
            .header(REFERER, self.url(from_path))
            .form(&[("lang", "")])
            .send()
            .await
            .expect("Language request failed")
    }

    pub async fn login_demo(&self) -> Response {
        self.post_form(
            "/login",
            &[("email", "demo@ai.dz"), ("password", "demo123")],
        )
        .await
    }
}

/// Site configuration for tests: no Sentry, default demo account.
#[must_use]
pub fn test_config(base_url: &str) -> SiteConfig {
    SiteConfig::from_lookup(|key| match key {
        "SITE_BASE_URL" => Some(base_url.to_string()),
        "SITE_STATIC_DIR" => Some(STATIC_DIR.to_string()),
        _ => None,
    })
    .expect("Test configuration is valid")
}

/// `Location` header of a redirect response.
#[must_use]
pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
