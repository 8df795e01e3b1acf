//! Supported UI languages and their text direction.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a language tag is not one of the supported tags.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported language tag: {0}")]
pub struct LanguageError(pub String);

/// Layout direction required by a language's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left-to-right.
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A language the site is translated into.
///
/// The set is closed: English is the default and Arabic is the only
/// right-to-left language.
///
/// ```
/// use docin_core::{Language, TextDirection};
///
/// assert_eq!(Language::default(), Language::En);
/// assert!(Language::Ar.is_rtl());
/// assert_eq!(Language::En.toggled(), Language::Ar);
/// assert_eq!("ar".parse::<Language>().unwrap().direction(), TextDirection::Rtl);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    /// Every supported language, default first.
    pub const ALL: [Self; 2] = [Self::En, Self::Ar];

    /// The BCP 47 tag, also used as the HTML `lang` attribute.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Whether the language is written right-to-left.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    #[must_use]
    pub const fn direction(self) -> TextDirection {
        if self.is_rtl() {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    /// The other language, as switched to by the navbar toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ar" => Ok(Self::Ar),
            other => Err(LanguageError(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
        assert!(!Language::default().is_rtl());
    }

    #[test]
    fn test_only_arabic_is_rtl() {
        assert!(Language::Ar.is_rtl());
        assert_eq!(Language::Ar.direction(), TextDirection::Rtl);
        assert_eq!(Language::En.direction(), TextDirection::Ltr);
    }

    #[test]
    fn test_double_toggle_restores_language() {
        for lang in Language::ALL {
            assert_eq!(lang.toggled().toggled(), lang);
            assert_ne!(lang.toggled(), lang);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("AR".parse::<Language>().unwrap(), Language::Ar);
        assert_eq!(" en ".parse::<Language>().unwrap(), Language::En);
    }

    #[test]
    fn test_parse_rejects_unknown_tags() {
        let err = "fr".parse::<Language>().unwrap_err();
        assert_eq!(err, LanguageError("fr".to_string()));
        assert_eq!(err.to_string(), "unsupported language tag: fr");
    }

    #[test]
    fn test_serde_uses_tag() {
        assert_eq!(serde_json::to_string(&Language::Ar).unwrap(), "\"ar\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
    }

    #[test]
    fn test_direction_attribute_values() {
        assert_eq!(TextDirection::Rtl.to_string(), "rtl");
        assert_eq!(TextDirection::Ltr.as_str(), "ltr");
    }
}
