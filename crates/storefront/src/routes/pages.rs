//! Page route handlers.
//!
//! Rendering a page is itself an interaction: the visit navigates to the page
//! (and optionally changes the collection filter or closes the mobile menu)
//! before the template sees the session.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use arden_way_core::{CategoryFilter, Interaction, Page, Section};

use crate::error::Result;
use crate::filters;
use crate::models::load_browsing_session;
use crate::routes::save_if_changed;
use crate::routes::views::{self, CollectionView, LayoutView, TestimonialView};
use crate::services::dispatch;
use crate::state::AppState;

/// Query parameters accepted by every page.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Collection filter token (`All`, `Dining`, `Coffee`, ...).
    pub category: Option<String>,
    /// `close` on links inside the mobile menu.
    pub menu: Option<String>,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub layout: LayoutView,
    pub collection: CollectionView,
    pub testimonials: Vec<TestimonialView>,
}

/// Collection page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/collection.html")]
pub struct CollectionTemplate {
    pub layout: LayoutView,
    pub collection: CollectionView,
}

/// Bespoke service page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/bespoke.html")]
pub struct BespokeTemplate {
    pub layout: LayoutView,
}

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub layout: LayoutView,
}

/// Display the home page.
#[instrument(skip(state, session))]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    render(&state, &session, Page::Home, &query).await
}

/// Display a named page.
///
/// Unknown names are a 404 and leave the visitor's session untouched.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(page): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    let page: Page = page.parse()?;
    render(&state, &session, page, &query).await
}

/// Scroll the home page to a section.
///
/// Scrolling changes no state; the browser follows the redirect to the
/// section's anchor.
#[instrument(skip(state, session))]
pub async fn section(
    State(state): State<AppState>,
    session: Session,
    Path(section): Path<String>,
) -> Result<Redirect> {
    let section: Section = section.parse()?;
    let mut visit = load_browsing_session(&session).await;
    dispatch(
        state.catalog(),
        &mut visit,
        [Interaction::ScrollToSection(section)],
    )?;
    Ok(Redirect::to(&views::section_path(section)))
}

async fn render(
    state: &AppState,
    session: &Session,
    page: Page,
    query: &PageQuery,
) -> Result<Response> {
    let catalog = state.catalog();
    let stored = load_browsing_session(session).await;

    let mut interactions = vec![Interaction::Navigate(page)];
    if query.menu.as_deref() == Some("close") && stored.view().mobile_menu_open() {
        interactions.push(Interaction::ToggleMobileMenu);
    }

    // Unknown tokens leave the stored filter alone and render an empty grid
    let mut unknown_category = None;
    if let Some(token) = query.category.as_deref() {
        match token.parse::<CategoryFilter>() {
            Ok(filter) => interactions.push(Interaction::SelectCategory(filter)),
            Err(_) => unknown_category = Some(token),
        }
    }

    let mut visit = stored.clone();
    dispatch(catalog, &mut visit, interactions)?;
    save_if_changed(session, &stored, &visit).await?;

    let layout = LayoutView::new(&visit);
    let collection = || match unknown_category {
        Some(token) => CollectionView::for_token(catalog, token, page),
        None => CollectionView::new(catalog, &visit, page),
    };

    let response = match page {
        Page::Home => HomeTemplate {
            layout,
            collection: collection(),
            testimonials: views::testimonials(catalog),
        }
        .into_response(),
        Page::Collection => CollectionTemplate {
            layout,
            collection: collection(),
        }
        .into_response(),
        Page::Bespoke => BespokeTemplate { layout }.into_response(),
        Page::About => AboutTemplate { layout }.into_response(),
    };

    Ok(response)
}
