//! Session middleware configuration.
//!
//! Browsing sessions live in a bounded in-memory tower-sessions store and
//! expire after a day without changes. Requests carrying the same session
//! cookie are serialized, so one request's load, update and save never
//! interleaves with another's.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::COOKIE},
    middleware::Next,
    response::Response,
};
use moka::future::Cache;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tower_sessions::{Expiry, SessionManagerLayer, cookie::Cookie, session::Id};
use tower_sessions_moka_store::MokaStore;

use crate::config::StorefrontConfig;
use crate::state::AppState;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "arden_session";

/// Session expiry time in seconds (1 day of inactivity).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Upper bound on stored sessions and on request locks.
const MAX_SESSIONS: u64 = 100_000;

/// Idle time after which an unused request lock is dropped.
const LOCK_IDLE: Duration = Duration::from_secs(10 * 60);

/// Create the session layer with a bounded in-memory store.
///
/// The store evicts records when they expire or when it is full.
///
/// # Arguments
///
/// * `config` - Storefront configuration (for the secure-cookie flag)
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MokaStore> {
    SessionManagerLayer::new(MokaStore::new(Some(MAX_SESSIONS)))
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

/// One async lock per session id.
///
/// Held from before the session is loaded until after the session layer has
/// saved it, which makes each request's update atomic for its visitor.
#[derive(Clone)]
pub struct SessionLocks {
    locks: Cache<Id, Arc<Mutex<()>>>,
}

impl SessionLocks {
    /// Create an empty lock table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            locks: Cache::builder()
                .max_capacity(MAX_SESSIONS)
                .time_to_idle(LOCK_IDLE)
                .build(),
        }
    }

    /// Wait for exclusive access to the session `id`.
    pub async fn acquire(&self, id: Id) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .get_with(id, async { Arc::new(Mutex::new(())) })
            .await;
        lock.lock_owned().await
    }
}

impl Default for SessionLocks {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize requests that share a session cookie.
///
/// Must run outside the session layer. Requests without a session cookie
/// get a fresh session each and pass straight through.
pub async fn session_lock_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(id) = session_id(request.headers()) else {
        return next.run(request).await;
    };

    let _guard = state.session_locks().acquire(id).await;
    next.run(request).await
}

/// The session id from the request's cookies, if present and well-formed.
fn session_id(headers: &HeaderMap) -> Option<Id> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .and_then(|cookie| cookie.value().parse().ok())
}
