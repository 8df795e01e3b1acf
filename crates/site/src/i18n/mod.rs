//! Localization store.
//!
//! [`Localizer`] pairs the shared, immutable [`Catalog`] with the active
//! [`Language`] of one visitor. Handlers rebuild it per request from the
//! visitor's session and hand it to templates, which call
//! `i18n.t("nav.home")`.
//!
//! # Missing keys
//!
//! A key absent from the active language renders as the key itself. The
//! miss is also logged at `WARN` so it surfaces in Sentry breadcrumbs
//! instead of only in the rendered page.

mod ar;
mod catalog;
mod en;

use std::sync::Arc;

use docin_core::{Language, TextDirection};

pub use catalog::{Catalog, CoverageReport, MissingKey};

/// Active language plus lookup into the shared catalog.
#[derive(Debug, Clone)]
pub struct Localizer {
    catalog: Arc<Catalog>,
    language: Language,
}

impl Localizer {
    /// Create a localizer at the default language.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_language(catalog, Language::default())
    }

    #[must_use]
    pub const fn with_language(catalog: Arc<Catalog>, language: Language) -> Self {
        Self { catalog, language }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Replace the active language.
    pub const fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Switch to the other language and return it.
    pub const fn toggle(&mut self) -> Language {
        self.language = self.language.toggled();
        self.language
    }

    /// Translate `key` into the active language, falling back to `key`.
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.catalog
            .lookup(self.language, key)
            .unwrap_or_else(|| {
                tracing::warn!(language = %self.language, key, "Missing translation");
                key
            })
    }

    #[must_use]
    pub const fn is_rtl(&self) -> bool {
        self.language.is_rtl()
    }

    #[must_use]
    pub const fn direction(&self) -> TextDirection {
        self.language.direction()
    }

    /// Value for `<html dir="...">`.
    #[must_use]
    pub const fn dir(&self) -> &'static str {
        self.direction().as_str()
    }

    /// Value for `<html lang="...">`.
    #[must_use]
    pub const fn lang(&self) -> &'static str {
        self.language.tag()
    }

    /// Upper-cased tag shown on the navbar language button.
    #[must_use]
    pub fn label(&self) -> String {
        self.language.tag().to_ascii_uppercase()
    }
}
