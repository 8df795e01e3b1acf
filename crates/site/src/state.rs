//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::i18n::{Catalog, Localizer};
use crate::services::{DemoCredentials, SessionStore, SessionUser};
use docin_core::Language;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds only immutable data; the per-visitor
/// stores are built from it on each request.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    catalog: Arc<Catalog>,
}

impl AppState {
    /// Create a new application state with the built-in translation catalog.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self::with_catalog(config, Catalog::builtin())
    }

    #[must_use]
    pub fn with_catalog(config: SiteConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Arc::new(catalog),
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.inner.catalog
    }

    #[must_use]
    pub fn demo(&self) -> &DemoCredentials {
        &self.inner.config.demo
    }

    /// Build a localizer for one visitor.
    #[must_use]
    pub fn localizer(&self, language: Language) -> Localizer {
        Localizer::with_language(Arc::clone(&self.inner.catalog), language)
    }

    /// Build a session store for one visitor from their saved record.
    #[must_use]
    pub fn session_store(&self, user: Option<SessionUser>) -> SessionStore<'_> {
        SessionStore::with_user(self.demo(), user)
    }
}
