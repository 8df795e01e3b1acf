//! Mock session store.
//!
//! Holds at most one [`SessionUser`]. Login accepts exactly one fixed
//! credential pair and signup always succeeds; there is no account store,
//! no hashing and no lockout.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use docin_core::{ApiKey, Language, Plan};

/// Email of the built-in demo account.
pub const DEMO_EMAIL: &str = "demo@ai.dz";

/// Password of the built-in demo account.
pub const DEMO_PASSWORD: &str = "demo123";

const DEMO_NAME: &str = "Ahmed Benaissa";
const DEMO_COMPANY: &str = "Demo Company";
const DEMO_API_KEY: &str = "dokin_abc123_xyz789";

/// The one credential pair `login` accepts.
#[derive(Clone)]
pub struct DemoCredentials {
    pub email: String,
    pub password: SecretString,
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self {
            email: DEMO_EMAIL.to_string(),
            password: SecretString::from(DEMO_PASSWORD),
        }
    }
}

impl std::fmt::Debug for DemoCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl DemoCredentials {
    fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password.expose_secret() == password
    }
}

/// The logged-in visitor.
///
/// Exists only while logged in, so `is_logged_in` is always `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
    pub is_logged_in: bool,
    pub current_plan: Plan,
    pub api_key: ApiKey,
    /// Language recorded when the record was created.
    pub language: Language,
    pub company: Option<String>,
}

impl SessionUser {
    fn demo(email: &str) -> Self {
        Self {
            name: DEMO_NAME.to_string(),
            email: email.to_string(),
            is_logged_in: true,
            current_plan: Plan::Pro,
            api_key: ApiKey::from_static(DEMO_API_KEY),
            language: Language::default(),
            company: Some(DEMO_COMPANY.to_string()),
        }
    }
}

/// Session store for one visitor.
///
/// # Example
///
/// ```rust,ignore
/// let demo = DemoCredentials::default();
/// let mut store = SessionStore::new(&demo);
/// assert!(store.login("demo@ai.dz", "demo123"));
/// store.logout();
/// assert!(store.current_user().is_none());
/// ```
#[derive(Debug)]
pub struct SessionStore<'a> {
    demo: &'a DemoCredentials,
    user: Option<SessionUser>,
}

impl<'a> SessionStore<'a> {
    /// Create an empty store (nobody logged in).
    #[must_use]
    pub const fn new(demo: &'a DemoCredentials) -> Self {
        Self { demo, user: None }
    }

    /// Restore a store from a previously saved record.
    #[must_use]
    pub const fn with_user(demo: &'a DemoCredentials, user: Option<SessionUser>) -> Self {
        Self { demo, user }
    }

    #[must_use]
    pub const fn current_user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Take the record out, e.g. to write it back to the web session.
    #[must_use]
    pub fn into_user(self) -> Option<SessionUser> {
        self.user
    }

    /// Log in with the demo credentials.
    ///
    /// Returns `false` and leaves the store untouched on any mismatch.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        if !self.demo.matches(email, password) {
            tracing::debug!("Login rejected: credentials do not match demo account");
            return false;
        }

        self.user = Some(SessionUser::demo(&self.demo.email));
        tracing::info!("Demo account logged in");
        true
    }

    /// Create a fresh Test-plan session. Always succeeds.
    ///
    /// The password is accepted and discarded. An empty company is stored
    /// as `None`.
    pub fn signup(
        &mut self,
        name: &str,
        email: &str,
        _password: &str,
        company: Option<&str>,
    ) -> bool {
        let company = company
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        self.user = Some(SessionUser {
            name: name.to_string(),
            email: email.to_string(),
            is_logged_in: true,
            current_plan: Plan::Test,
            api_key: ApiKey::generate(),
            language: Language::default(),
            company,
        });
        tracing::info!("New signup session created");
        true
    }

    /// Discard the record, logged in or not.
    pub fn logout(&mut self) {
        self.user = None;
    }
}
