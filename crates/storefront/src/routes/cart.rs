//! Enquiry list route handlers.
//!
//! Every handler persists the visitor's browsing session and then redirects
//! back to the form's `return_to`, where the page renders the updated sidebar.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use arden_way_core::{Interaction, ProductId};

use crate::error::{Result, add_breadcrumb};
use crate::routes::{apply, safe_return_path};
use crate::state::AppState;

/// Add to enquiry form data.
#[derive(Debug, Deserialize)]
pub struct AddToEnquiryForm {
    pub product_id: String,
    pub return_to: Option<String>,
}

/// Form data for sidebar actions that carry no payload.
#[derive(Debug, Default, Deserialize)]
pub struct SidebarForm {
    pub return_to: Option<String>,
}

/// Send the visitor back to the page the form came from.
fn back_to(return_to: Option<&str>) -> Redirect {
    Redirect::to(&safe_return_path(return_to))
}

/// Add a piece to the enquiry list.
///
/// The sidebar opens as the site's reaction to the added item. Unknown
/// product ids are rejected with 404 and leave the list unchanged.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToEnquiryForm>,
) -> Result<Redirect> {
    let product_id = ProductId::new(form.product_id);
    let visit = apply(
        &state,
        &session,
        Interaction::AddToEnquiry(product_id.clone()),
    )
    .await?;

    add_breadcrumb(
        "enquiry",
        "Added piece to enquiry list",
        Some(&[("product_id", product_id.as_str())]),
    );
    tracing::info!(
        product_id = %product_id,
        item_count = visit.enquiry().item_count(),
        "Piece added to enquiry list"
    );

    Ok(back_to(form.return_to.as_deref()))
}

/// Open the enquiry sidebar.
#[instrument(skip(state, session))]
pub async fn open(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SidebarForm>,
) -> Result<Redirect> {
    apply(&state, &session, Interaction::OpenCart).await?;
    Ok(back_to(form.return_to.as_deref()))
}

/// Close the enquiry sidebar.
#[instrument(skip(state, session))]
pub async fn close(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SidebarForm>,
) -> Result<Redirect> {
    apply(&state, &session, Interaction::CloseCart).await?;
    Ok(back_to(form.return_to.as_deref()))
}

/// Empty the enquiry list.
#[instrument(skip(state, session))]
pub async fn clear(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SidebarForm>,
) -> Result<Redirect> {
    apply(&state, &session, Interaction::ClearEnquiry).await?;
    tracing::info!("Enquiry list cleared");
    Ok(back_to(form.return_to.as_deref()))
}
