//! Translation catalog commands.
//!
//! Output goes to the given writer so the commands can be checked in tests.

use std::io::Write;
use std::sync::Arc;

use thiserror::Error;

use docin_core::Language;
use docin_site::i18n::{Catalog, Localizer};

/// Errors that can occur while running a translations command.
#[derive(Debug, Error)]
pub enum TranslationsError {
    /// One or more keys exist in only one language.
    #[error("{0} translation(s) missing")]
    Incomplete(usize),

    /// Writing the report failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Report keys missing from either language.
///
/// # Errors
///
/// Returns [`TranslationsError::Incomplete`] if any key is missing.
pub fn check(catalog: &Catalog, out: &mut impl Write) -> Result<(), TranslationsError> {
    let report = catalog.coverage();

    if report.is_complete() {
        writeln!(
            out,
            "ok: {} keys defined in {} languages",
            report.total_keys,
            Language::ALL.len()
        )?;
        return Ok(());
    }

    for missing in &report.missing {
        writeln!(out, "missing [{}] {}", missing.language, missing.key)?;
    }
    tracing::warn!(missing = report.missing.len(), "Translation catalog has gaps");
    Err(TranslationsError::Incomplete(report.missing.len()))
}

/// Print the translation of `key` in `language`.
///
/// Mirrors the site: an unknown key prints the key itself.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn get(
    catalog: Catalog,
    language: Language,
    key: &str,
    out: &mut impl Write,
) -> Result<(), TranslationsError> {
    let i18n = Localizer::with_language(Arc::new(catalog), language);
    writeln!(out, "{}", i18n.t(key))?;
    Ok(())
}

/// Print every key of `language`, sorted.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn list(
    catalog: &Catalog,
    language: Language,
    out: &mut impl Write,
) -> Result<(), TranslationsError> {
    for key in catalog.keys(language) {
        writeln!(out, "{key}")?;
    }
    Ok(())
}
