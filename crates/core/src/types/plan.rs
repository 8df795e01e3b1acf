//! Subscription plan tags.

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown plan name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid plan: {0}")]
pub struct PlanError(pub String);

/// Subscription plan attached to a session.
///
/// Assigned once when the session is created and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Plan {
    /// Free plan given to every new signup.
    #[default]
    Test,
    /// Paid plan held by the demo account.
    Pro,
    /// Contact-sales tier.
    Enterprise,
}

impl Plan {
    pub const ALL: [Self; 3] = [Self::Test, Self::Pro, Self::Enterprise];

    /// Display name, identical to the serialized tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Test => "Test",
            Self::Pro => "Pro",
            Self::Enterprise => "Enterprise",
        }
    }

    /// Lowercase key used to build translation keys like `pricing.pro.name`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }

    #[must_use]
    pub const fn is_free(self) -> bool {
        matches!(self, Self::Test)
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Plan {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|plan| plan.as_str().eq_ignore_ascii_case(s) || plan.key() == s)
            .ok_or_else(|| PlanError(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_tag() {
        assert_eq!(Plan::Test.to_string(), "Test");
        assert_eq!(Plan::Pro.to_string(), "Pro");
        assert_eq!(Plan::Enterprise.to_string(), "Enterprise");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Pro".parse::<Plan>().unwrap(), Plan::Pro);
        assert_eq!("enterprise".parse::<Plan>().unwrap(), Plan::Enterprise);
        assert!("Gold".parse::<Plan>().is_err());
    }

    #[test]
    fn test_only_test_plan_is_free() {
        assert!(Plan::Test.is_free());
        assert!(!Plan::Pro.is_free());
        assert!(!Plan::Enterprise.is_free());
    }

    #[test]
    fn test_serde_tag() {
        assert_eq!(serde_json::to_string(&Plan::Pro).unwrap(), "\"Pro\"");
    }
}
