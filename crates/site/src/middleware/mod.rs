//! HTTP middleware stack and request extractors.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, frame options, etc.)
//! 5. Session layer (tower-sessions with in-memory store)

pub mod auth;
pub mod flash;
pub mod locale;
pub mod page;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{RequireAuth, get_current_user, store_current_user};
pub use flash::{set_flash, take_flash};
pub use locale::{get_language, set_language};
pub use page::{FlashView, PageContext};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
