//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (hero, collection, bespoke, testimonials)
//! GET  /health                 - Health check
//! GET  /{page}                 - Collection, bespoke or about page
//! GET  /sections/{section}     - Scroll the home page to a section (redirect)
//!
//! Pages accept `?category=<filter>` and `?menu=close`.
//!
//! # Enquiry list (form posts, redirect to `return_to`)
//! POST /cart/add               - Add a piece, then open the sidebar
//! POST /cart/open              - Open the sidebar
//! POST /cart/close             - Close the sidebar
//! POST /cart/clear             - Empty the enquiry list
//!
//! # Navigation
//! POST /menu/toggle            - Toggle the mobile menu
//! ```

pub mod cart;
pub mod menu;
pub mod pages;
pub mod views;

use axum::{
    Router,
    routing::{get, post},
};
use tower_sessions::Session;

use arden_way_core::{BrowsingSession, Interaction};

use crate::error::Result;
use crate::models::{load_browsing_session, store_browsing_session};
use crate::services::dispatch;
use crate::state::AppState;

/// Create the enquiry list routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/open", post(cart::open))
        .route("/close", post(cart::close))
        .route("/clear", post(cart::clear))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/sections/{section}", get(pages::section))
        .nest("/cart", cart_routes())
        .route("/menu/toggle", post(menu::toggle))
        // Static segments above take precedence over this catch-all
        .route("/{page}", get(pages::show))
}

/// Apply one interaction to the visitor's stored session and persist it.
///
/// Nothing is written when the interaction is rejected or changes nothing.
/// Concurrent requests for one session are serialized by the session lock
/// middleware, so the load and the save here see no other writer.
pub(crate) async fn apply(
    state: &AppState,
    session: &Session,
    interaction: Interaction,
) -> Result<BrowsingSession> {
    let stored = load_browsing_session(session).await;
    let mut visit = stored.clone();
    dispatch(state.catalog(), &mut visit, [interaction])?;
    save_if_changed(session, &stored, &visit).await?;
    Ok(visit)
}

/// Persist `visit` unless it equals the `stored` session it started from.
///
/// A visitor still in the default state therefore gets no session record.
pub(crate) async fn save_if_changed(
    session: &Session,
    stored: &BrowsingSession,
    visit: &BrowsingSession,
) -> Result<()> {
    if visit != stored {
        store_browsing_session(session, visit).await?;
    }
    Ok(())
}

/// Resolve a form's `return_to` into a local path.
///
/// Only same-site absolute paths are honored; anything else (missing,
/// protocol-relative, backslashes, control characters) falls back to `/`.
#[must_use]
pub fn safe_return_path(raw: Option<&str>) -> String {
    match raw {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control) =>
        {
            path.to_string()
        }
        _ => "/".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_return_path() {
        assert_eq!(safe_return_path(Some("/collection")), "/collection");
        assert_eq!(safe_return_path(Some("/#collection")), "/#collection");
        assert_eq!(safe_return_path(Some("//evil.example")), "/");
        assert_eq!(safe_return_path(Some("https://evil.example")), "/");
        assert_eq!(safe_return_path(Some("/\\evil.example")), "/");
        assert_eq!(safe_return_path(Some("/a\r\nb")), "/");
        assert_eq!(safe_return_path(None), "/");
    }
}
