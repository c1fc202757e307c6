//! Navigation and view state.
//!
//! Four independent fields: the current page, the enquiry sidebar flag, the
//! mobile menu flag and the collection filter. Any combination is reachable
//! from any other in one call, and nothing here is terminal.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{CategoryFilter, Page, Section};

/// Notification emitted by view-state mutations.
///
/// The renderer decides how to honor each one; the state model only
/// records what was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewEvent {
    /// The page changed; the renderer should scroll to the top.
    ScrollToTop { page: Page },
    CartVisibilityChanged { open: bool },
    MobileMenuToggled { open: bool },
    CategoryFilterChanged { filter: CategoryFilter },
    /// Smooth-scroll to an anchor on the home page.
    ScrollToSection { section: Section },
}

/// Which page is showing and which overlays are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    current_page: Page,
    cart_open: bool,
    mobile_menu_open: bool,
    category_filter: CategoryFilter,
}

impl ViewState {
    /// Home page, everything closed, no filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to `page`, leaving the other fields alone.
    pub const fn navigate(&mut self, page: Page) -> ViewEvent {
        self.current_page = page;
        ViewEvent::ScrollToTop { page }
    }

    /// Switch to the page named by `token`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPage`](crate::CoreError::InvalidPage) for
    /// unknown tokens; the current page is kept.
    pub fn navigate_to(&mut self, token: &str) -> Result<ViewEvent> {
        let page = token.parse::<Page>()?;
        Ok(self.navigate(page))
    }

    pub const fn set_cart_open(&mut self, open: bool) -> ViewEvent {
        self.cart_open = open;
        ViewEvent::CartVisibilityChanged { open }
    }

    pub const fn toggle_mobile_menu(&mut self) -> ViewEvent {
        self.mobile_menu_open = !self.mobile_menu_open;
        ViewEvent::MobileMenuToggled {
            open: self.mobile_menu_open,
        }
    }

    pub const fn set_category_filter(&mut self, filter: CategoryFilter) -> ViewEvent {
        self.category_filter = filter;
        ViewEvent::CategoryFilterChanged { filter }
    }

    /// Request a scroll to `section`. State is unchanged.
    #[must_use]
    pub const fn scroll_to_section(&self, section: Section) -> ViewEvent {
        ViewEvent::ScrollToSection { section }
    }

    #[must_use]
    pub const fn current_page(&self) -> Page {
        self.current_page
    }

    #[must_use]
    pub const fn cart_open(&self) -> bool {
        self.cart_open
    }

    #[must_use]
    pub const fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    #[must_use]
    pub const fn category_filter(&self) -> CategoryFilter {
        self.category_filter
    }
}
