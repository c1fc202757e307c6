//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request span with a `request_id` field)
//! 3. Request ID (fill in the span field, echo the header)
//! 4. Session lock (one request at a time per session cookie)
//! 5. Session layer (tower-sessions with a bounded moka store)
//! 6. Security headers (CSP, frame options, cache control)

pub mod request_id;
pub mod security_headers;
pub mod session;

pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::{SessionLocks, create_session_layer, session_lock_middleware};
