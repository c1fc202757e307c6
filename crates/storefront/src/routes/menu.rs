//! Mobile menu route handler.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use arden_way_core::Interaction;

use crate::error::Result;
use crate::routes::{apply, safe_return_path};
use crate::state::AppState;

/// Menu toggle form data.
#[derive(Debug, Default, Deserialize)]
pub struct MenuForm {
    pub return_to: Option<String>,
}

/// Toggle the mobile menu and return to the page it was toggled on.
#[instrument(skip(state, session))]
pub async fn toggle(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<MenuForm>,
) -> Result<Redirect> {
    let visit = apply(&state, &session, Interaction::ToggleMobileMenu).await?;
    tracing::debug!(open = visit.view().mobile_menu_open(), "Mobile menu toggled");
    Ok(Redirect::to(&safe_return_path(form.return_to.as_deref())))
}
