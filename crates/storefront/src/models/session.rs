//! Session-related types.
//!
//! The visitor's [`BrowsingSession`] is stored under a single key and loaded
//! at the start of every request that reads or changes it.

use tower_sessions::Session;

use arden_way_core::BrowsingSession;

/// Session keys.
pub mod keys {
    /// Key for the visitor's enquiry list and view state.
    pub const BROWSING_SESSION: &str = "browsing_session";
}

/// Load the visitor's browsing session, starting fresh if none is stored.
///
/// A record that fails to deserialize (e.g. written by an older build) is
/// logged and replaced rather than failing the request.
pub async fn load_browsing_session(session: &Session) -> BrowsingSession {
    match session.get::<BrowsingSession>(keys::BROWSING_SESSION).await {
        Ok(Some(visit)) => visit,
        Ok(None) => BrowsingSession::new(),
        Err(e) => {
            tracing::warn!("Discarding unreadable browsing session: {e}");
            BrowsingSession::new()
        }
    }
}

/// Store the visitor's browsing session.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn store_browsing_session(
    session: &Session,
    visit: &BrowsingSession,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::BROWSING_SESSION, visit).await
}
