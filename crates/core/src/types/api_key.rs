//! Display-only API key tokens.

use core::fmt;

use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};

/// An API key shown on the dashboard.
///
/// Purely cosmetic: nothing verifies it. Generated keys still come from the
/// thread-local CSPRNG so two signups never realistically share one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Prefix carried by every key.
    pub const PREFIX: &'static str = "dokin_";

    /// Number of random characters after the prefix.
    pub const RANDOM_LENGTH: usize = 24;

    /// Generate a fresh random key.
    #[must_use]
    pub fn generate() -> Self {
        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(Self::RANDOM_LENGTH)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect();
        Self(format!("{}{suffix}", Self::PREFIX))
    }

    /// Wrap a fixed key, e.g. the demo account's.
    #[must_use]
    pub fn from_static(key: &str) -> Self {
        Self(key.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_generated_key_shape() {
        let key = ApiKey::generate();
        let suffix = key.as_str().strip_prefix(ApiKey::PREFIX);
        assert!(suffix.is_some());
        let suffix = suffix.unwrap_or_default();
        assert_eq!(suffix.len(), ApiKey::RANDOM_LENGTH);
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_generated_keys_are_distinct() {
        let keys: HashSet<ApiKey> = (0..100).map(|_| ApiKey::generate()).collect();
        assert_eq!(keys.len(), 100);
    }

    #[test]
    fn test_static_key_is_kept_verbatim() {
        let key = ApiKey::from_static("dokin_abc123_xyz789");
        assert_eq!(key.to_string(), "dokin_abc123_xyz789");
    }
}
