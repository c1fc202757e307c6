//! One visitor's browsing session: an enquiry list plus view state.
//!
//! Presentation code turns each user action into an [`Interaction`] and
//! hands it to [`BrowsingSession::handle`], which performs exactly one
//! operation and returns the event it emitted. Cross-component reactions,
//! such as opening the sidebar after an item is added, belong to the caller.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::enquiry::{CartEvent, EnquiryList};
use crate::error::Result;
use crate::types::{CategoryFilter, Page, ProductId, Section};
use crate::view::{ViewEvent, ViewState};

/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interaction {
    SelectCategory(CategoryFilter),
    AddToEnquiry(ProductId),
    ClearEnquiry,
    Navigate(Page),
    OpenCart,
    CloseCart,
    ToggleMobileMenu,
    ScrollToSection(Section),
}

/// Event emitted by [`BrowsingSession::handle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    Cart(CartEvent),
    View(ViewEvent),
}

impl From<CartEvent> for SessionEvent {
    fn from(event: CartEvent) -> Self {
        Self::Cart(event)
    }
}

impl From<ViewEvent> for SessionEvent {
    fn from(event: ViewEvent) -> Self {
        Self::View(event)
    }
}

/// State owned by one visitor for the lifetime of their visit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowsingSession {
    enquiry: EnquiryList,
    view: ViewState,
}

impl BrowsingSession {
    /// A fresh session: empty list, home page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one interaction.
    ///
    /// # Errors
    ///
    /// Propagates the operation's [`CoreError`](crate::CoreError); the
    /// session is unchanged when an error is returned.
    pub fn handle(&mut self, catalog: &Catalog, interaction: Interaction) -> Result<SessionEvent> {
        let event = match interaction {
            Interaction::SelectCategory(filter) => self.view.set_category_filter(filter).into(),
            Interaction::AddToEnquiry(id) => self.enquiry.add_by_id(catalog, &id)?.into(),
            Interaction::ClearEnquiry => self.enquiry.clear().into(),
            Interaction::Navigate(page) => self.view.navigate(page).into(),
            Interaction::OpenCart => self.view.set_cart_open(true).into(),
            Interaction::CloseCart => self.view.set_cart_open(false).into(),
            Interaction::ToggleMobileMenu => self.view.toggle_mobile_menu().into(),
            Interaction::ScrollToSection(section) => self.view.scroll_to_section(section).into(),
        };
        Ok(event)
    }

    #[must_use]
    pub const fn enquiry(&self) -> &EnquiryList {
        &self.enquiry
    }

    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::{Category, Price};

    #[test]
    fn test_add_to_enquiry_scenario() {
        let catalog = Catalog::studio();
        let mut session = BrowsingSession::new();
        assert_eq!(session.view().current_page(), Page::Home);

        let event = session
            .handle(catalog, Interaction::AddToEnquiry(ProductId::new("1")))
            .unwrap();

        assert_eq!(
            event,
            SessionEvent::Cart(CartEvent::ItemAdded {
                product_id: ProductId::new("1"),
                item_count: 1,
            })
        );
        assert_eq!(session.enquiry().item_count(), 1);
        assert_eq!(session.enquiry().total(), Price::zar(42_000));
        // opening the sidebar is the caller's reaction, not a hidden side effect
        assert!(!session.view().cart_open());
    }

    #[test]
    fn test_each_interaction_maps_to_one_event() {
        let catalog = Catalog::studio();
        let mut session = BrowsingSession::new();

        let cases = [
            (
                Interaction::SelectCategory(CategoryFilter::Only(Category::Dining)),
                SessionEvent::View(ViewEvent::CategoryFilterChanged {
                    filter: CategoryFilter::Only(Category::Dining),
                }),
            ),
            (
                Interaction::Navigate(Page::Collection),
                SessionEvent::View(ViewEvent::ScrollToTop {
                    page: Page::Collection,
                }),
            ),
            (
                Interaction::OpenCart,
                SessionEvent::View(ViewEvent::CartVisibilityChanged { open: true }),
            ),
            (
                Interaction::CloseCart,
                SessionEvent::View(ViewEvent::CartVisibilityChanged { open: false }),
            ),
            (
                Interaction::ToggleMobileMenu,
                SessionEvent::View(ViewEvent::MobileMenuToggled { open: true }),
            ),
            (
                Interaction::ScrollToSection(Section::Testimonials),
                SessionEvent::View(ViewEvent::ScrollToSection {
                    section: Section::Testimonials,
                }),
            ),
            (
                Interaction::ClearEnquiry,
                SessionEvent::Cart(CartEvent::Cleared),
            ),
        ];

        for (interaction, expected) in cases {
            assert_eq!(session.handle(catalog, interaction).unwrap(), expected);
        }
    }

    #[test]
    fn test_failed_interaction_leaves_session_unchanged() {
        let catalog = Catalog::studio();
        let mut session = BrowsingSession::new();
        session
            .handle(catalog, Interaction::AddToEnquiry(ProductId::new("5")))
            .unwrap();
        let before = session.clone();

        let result = session.handle(catalog, Interaction::AddToEnquiry(ProductId::new("x")));
        assert_eq!(
            result,
            Err(CoreError::InvalidProductReference(ProductId::new("x")))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_session_survives_serialization() {
        let catalog = Catalog::studio();
        let mut session = BrowsingSession::new();
        session
            .handle(catalog, Interaction::AddToEnquiry(ProductId::new("2")))
            .unwrap();
        session
            .handle(catalog, Interaction::Navigate(Page::About))
            .unwrap();
        session
            .handle(
                catalog,
                Interaction::SelectCategory(CategoryFilter::Only(Category::Coffee)),
            )
            .unwrap();

        let json = serde_json::to_string(&session).unwrap();
        let restored: BrowsingSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }
}
