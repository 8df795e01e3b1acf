//! Static translation catalog.

use std::collections::{BTreeSet, HashMap};

use docin_core::Language;

use super::{ar, en};

/// Message table for every supported language.
///
/// Immutable after construction; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<Language, HashMap<&'static str, &'static str>>,
}

/// A key defined for some language but absent from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MissingKey {
    pub language: Language,
    pub key: &'static str,
}

/// Result of comparing the key sets of all languages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageReport {
    /// Number of distinct keys across all languages.
    pub total_keys: usize,
    /// Sorted by language then key.
    pub missing: Vec<MissingKey>,
}

impl CoverageReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

impl Catalog {
    /// The English and Arabic tables shipped with the site.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_tables([(Language::En, en::MESSAGES), (Language::Ar, ar::MESSAGES)])
    }

    /// Build a catalog from `(language, [(key, text)])` tables.
    ///
    /// A later duplicate key within one table overwrites the earlier one.
    pub fn from_tables<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = (Language, &'static [(&'static str, &'static str)])>,
    {
        let tables = tables
            .into_iter()
            .map(|(language, messages)| (language, messages.iter().copied().collect()))
            .collect();
        Self { tables }
    }

    /// Look up one message. `None` when the language or key is absent.
    #[must_use]
    pub fn lookup(&self, language: Language, key: &str) -> Option<&'static str> {
        self.tables.get(&language)?.get(key).copied()
    }

    /// All keys defined for `language`, sorted.
    #[must_use]
    pub fn keys(&self, language: Language) -> Vec<&'static str> {
        let mut keys: Vec<_> = self
            .tables
            .get(&language)
            .map(|table| table.keys().copied().collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Compare every supported language against the union of all keys.
    #[must_use]
    pub fn coverage(&self) -> CoverageReport {
        let all_keys: BTreeSet<&'static str> = self
            .tables
            .values()
            .flat_map(|table| table.keys().copied())
            .collect();

        let mut missing = Vec::new();
        for language in Language::ALL {
            let table = self.tables.get(&language);
            for &key in &all_keys {
                if !table.is_some_and(|t| t.contains_key(key)) {
                    missing.push(MissingKey { language, key });
                }
            }
        }
        missing.sort_unstable();

        CoverageReport {
            total_keys: all_keys.len(),
            missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_have_identical_keys() {
        let report = Catalog::builtin().coverage();
        assert!(report.is_complete(), "missing: {:?}", report.missing);
        assert_eq!(report.total_keys, en::MESSAGES.len());
    }

    #[test]
    fn test_builtin_tables_have_no_duplicate_keys() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.keys(Language::En).len(), en::MESSAGES.len());
        assert_eq!(catalog.keys(Language::Ar).len(), ar::MESSAGES.len());
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.lookup(Language::En, "nav.home"), Some("Home"));
        assert_eq!(catalog.lookup(Language::Ar, "nav.home"), Some("الرئيسية"));
        assert_eq!(catalog.lookup(Language::En, "nav.missing"), None);
    }

    #[test]
    fn test_coverage_reports_gaps_per_language() {
        const EN: &[(&str, &str)] = &[("a", "A"), ("b", "B")];
        const AR: &[(&str, &str)] = &[("a", "أ"), ("c", "ج")];
        let catalog = Catalog::from_tables([(Language::En, EN), (Language::Ar, AR)]);

        let report = catalog.coverage();
        assert_eq!(report.total_keys, 3);
        assert_eq!(
            report.missing,
            vec![
                MissingKey {
                    language: Language::En,
                    key: "c"
                },
                MissingKey {
                    language: Language::Ar,
                    key: "b"
                },
            ]
        );
    }

    #[test]
    fn test_coverage_flags_absent_language() {
        const EN: &[(&str, &str)] = &[("only", "Only")];
        let report = Catalog::from_tables([(Language::En, EN)]).coverage();
        assert_eq!(report.missing.len(), 1);
        assert_eq!(report.missing[0].language, Language::Ar);
    }
}
