//! Applying visitor interactions to a browsing session.
//!
//! [`BrowsingSession::handle`] performs exactly one operation per
//! interaction. The site's own reactions to the resulting events live here,
//! so handlers never chain state changes by hand.

use std::collections::VecDeque;

use arden_way_core::{BrowsingSession, CartEvent, Catalog, CoreError, Interaction, SessionEvent};

/// The follow-up the site performs after an event, if any.
///
/// Adding a piece to the enquiry list opens the sidebar.
#[must_use]
pub const fn reaction(event: &SessionEvent) -> Option<Interaction> {
    match event {
        SessionEvent::Cart(CartEvent::ItemAdded { .. }) => Some(Interaction::OpenCart),
        _ => None,
    }
}

/// Apply `interactions` in order, followed by any reactions they trigger.
///
/// Returns every emitted event in the order it happened.
///
/// # Errors
///
/// Stops at the first rejected interaction. Events already applied to
/// `visit` are kept in memory, so callers must not persist `visit` after an
/// error.
pub fn dispatch(
    catalog: &Catalog,
    visit: &mut BrowsingSession,
    interactions: impl IntoIterator<Item = Interaction>,
) -> Result<Vec<SessionEvent>, CoreError> {
    let mut queue: VecDeque<Interaction> = interactions.into_iter().collect();
    let mut events = Vec::with_capacity(queue.len());

    while let Some(interaction) = queue.pop_front() {
        let event = visit.handle(catalog, interaction)?;
        tracing::debug!(?event, "Session event");
        if let Some(follow_up) = reaction(&event) {
            queue.push_back(follow_up);
        }
        events.push(event);
    }

    Ok(events)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use arden_way_core::{Page, ProductId, ViewEvent};

    #[test]
    fn test_add_opens_sidebar() {
        let catalog = Catalog::studio();
        let mut visit = BrowsingSession::new();

        let events = dispatch(
            catalog,
            &mut visit,
            [Interaction::AddToEnquiry(ProductId::new("1"))],
        )
        .unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(
            events.last(),
            Some(&SessionEvent::View(ViewEvent::CartVisibilityChanged {
                open: true
            }))
        );
        assert!(visit.view().cart_open());
        assert_eq!(visit.enquiry().item_count(), 1);
    }

    #[test]
    fn test_other_events_have_no_reaction() {
        let catalog = Catalog::studio();
        let mut visit = BrowsingSession::new();

        let events = dispatch(
            catalog,
            &mut visit,
            [Interaction::Navigate(Page::About), Interaction::ClearEnquiry],
        )
        .unwrap();

        assert_eq!(events.len(), 2);
        assert!(!visit.view().cart_open());
        assert_eq!(visit.view().current_page(), Page::About);
    }

    #[test]
    fn test_rejected_interaction_stops_dispatch() {
        let catalog = Catalog::studio();
        let mut visit = BrowsingSession::new();

        let err = dispatch(
            catalog,
            &mut visit,
            [
                Interaction::AddToEnquiry(ProductId::new("99")),
                Interaction::Navigate(Page::About),
            ],
        )
        .unwrap_err();

        assert_eq!(err, CoreError::InvalidProductReference(ProductId::new("99")));
        assert_eq!(visit.view().current_page(), Page::Home);
        assert!(visit.enquiry().is_empty());
    }
}
