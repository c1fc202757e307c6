//! Display data shared by page and fragment templates.
//!
//! Views are plain owned structs built from the catalog and the visitor's
//! browsing session; templates never touch core types directly.

use arden_way_core::{
    BrowsingSession, Catalog, CategoryFilter, Page, Product, Section, Testimonial, filter,
};

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub category: &'static str,
    pub wood: String,
    pub resin: String,
    pub price: String,
    pub dimensions: String,
    pub image: String,
    pub lead_time: &'static str,
    pub ready_to_ship: bool,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.as_str(),
            wood: product.wood.clone(),
            resin: product.resin.clone(),
            price: product.price.display(),
            dimensions: product.dimensions.clone(),
            image: product.image.clone(),
            lead_time: product.lead_time.label(),
            ready_to_ship: product.lead_time.is_ready_to_ship(),
        }
    }
}

/// Testimonial display data for templates.
#[derive(Clone)]
pub struct TestimonialView {
    pub name: String,
    pub location: String,
    pub text: String,
    pub rating: u8,
}

impl From<&Testimonial> for TestimonialView {
    fn from(testimonial: &Testimonial) -> Self {
        Self {
            name: testimonial.name.clone(),
            location: testimonial.location.clone(),
            text: testimonial.text.clone(),
            rating: testimonial.rating.value(),
        }
    }
}

/// One line of the enquiry sidebar.
#[derive(Clone)]
pub struct CartItemView {
    pub name: String,
    pub dimensions: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for CartItemView {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            dimensions: product.dimensions.clone(),
            price: product.price.display(),
            image: product.image.clone(),
        }
    }
}

/// Enquiry sidebar display data.
#[derive(Clone)]
pub struct SidebarView {
    pub open: bool,
    pub items: Vec<CartItemView>,
    pub item_count: usize,
    pub total: String,
    /// Where sidebar forms send the visitor afterwards.
    pub return_to: String,
}

impl SidebarView {
    #[must_use]
    pub fn new(visit: &BrowsingSession, return_to: &str) -> Self {
        let enquiry = visit.enquiry();
        Self {
            open: visit.view().cart_open(),
            items: enquiry.entries().iter().map(CartItemView::from).collect(),
            item_count: enquiry.item_count(),
            total: enquiry.total().display(),
            return_to: return_to.to_string(),
        }
    }
}

/// A link in the main navigation.
#[derive(Clone)]
pub struct NavLinkView {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

/// Header, sidebar and footer data every full page needs.
#[derive(Clone)]
pub struct LayoutView {
    pub title: String,
    pub nav: Vec<NavLinkView>,
    pub cart_count: usize,
    pub mobile_menu_open: bool,
    pub sidebar: SidebarView,
    /// Path of the page being rendered, for forms that come back here.
    pub current_path: String,
}

/// Pages listed in the header, in order.
const NAV_PAGES: [Page; 3] = [Page::Collection, Page::Bespoke, Page::About];

impl LayoutView {
    #[must_use]
    pub fn new(visit: &BrowsingSession) -> Self {
        let page = visit.view().current_page();
        let current_path = page.path().to_string();
        let title = match page {
            Page::Home => "Arden Way | Handcrafted Resin River Tables".to_string(),
            other => format!("{} | Arden Way", other.title()),
        };

        Self {
            title,
            nav: NAV_PAGES
                .iter()
                .map(|&p| NavLinkView {
                    label: p.title(),
                    href: p.path(),
                    active: p == page,
                })
                .collect(),
            cart_count: visit.enquiry().item_count(),
            mobile_menu_open: visit.view().mobile_menu_open(),
            sidebar: SidebarView::new(visit, &current_path),
            current_path,
        }
    }
}

/// A category tab above the product grid.
#[derive(Clone)]
pub struct CategoryTabView {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// Filter tabs plus the filtered product grid.
#[derive(Clone)]
pub struct CollectionView {
    pub tabs: Vec<CategoryTabView>,
    pub products: Vec<ProductView>,
    /// Shown above the grid when the requested category is unknown.
    pub notice: Option<String>,
    /// Where "Add to Enquiry" sends the visitor afterwards.
    pub return_to: String,
}

impl CollectionView {
    /// Grid for the visitor's current category filter, rendered on `page`.
    #[must_use]
    pub fn new(catalog: &Catalog, visit: &BrowsingSession, page: Page) -> Self {
        let selected = visit.view().category_filter();
        let products = filter::apply(catalog.products(), selected);
        Self::build(page, Some(selected), &products, None)
    }

    /// Grid for a raw category token from the query string.
    ///
    /// Unknown tokens produce an empty grid with a notice; no tab is active.
    #[must_use]
    pub fn for_token(catalog: &Catalog, token: &str, page: Page) -> Self {
        match filter::apply_token(catalog.products(), token) {
            Ok(products) => {
                let selected = token.parse::<CategoryFilter>().ok();
                Self::build(page, selected, &products, None)
            }
            Err(e) => {
                tracing::debug!(token, "Unknown category requested: {e}");
                let notice = format!("No pieces match \u{201c}{token}\u{201d}.");
                Self::build(page, None, &[], Some(notice))
            }
        }
    }

    fn build(
        page: Page,
        selected: Option<CategoryFilter>,
        products: &[&Product],
        notice: Option<String>,
    ) -> Self {
        let (base, anchor) = match page {
            Page::Home => ("/", "#collection"),
            other => (other.path(), ""),
        };

        Self {
            tabs: CategoryFilter::options()
                .into_iter()
                .map(|option| CategoryTabView {
                    label: option.as_str(),
                    href: format!("{base}?category={}{anchor}", option.as_str()),
                    active: selected == Some(option),
                })
                .collect(),
            products: products.iter().map(|&p| ProductView::from(p)).collect(),
            notice,
            return_to: format!("{base}{anchor}"),
        }
    }
}

/// Testimonials in catalog order.
#[must_use]
pub fn testimonials(catalog: &Catalog) -> Vec<TestimonialView> {
    catalog
        .testimonials()
        .iter()
        .map(TestimonialView::from)
        .collect()
}

/// Path of the home page scrolled to `section`.
#[must_use]
pub fn section_path(section: Section) -> String {
    format!("/#{}", section.anchor())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use arden_way_core::{Category, Interaction, ProductId};

    #[test]
    fn test_product_view_formats_price_and_badge() {
        let catalog = Catalog::studio();
        let view = ProductView::from(catalog.product(&ProductId::new("1")).unwrap());
        assert_eq!(view.price, "R42,000");
        assert!(view.ready_to_ship);
        assert_eq!(view.lead_time, "In Stock");

        let view = ProductView::from(catalog.product(&ProductId::new("3")).unwrap());
        assert!(!view.ready_to_ship);
    }

    #[test]
    fn test_layout_marks_active_nav_link() {
        let catalog = Catalog::studio();
        let mut visit = BrowsingSession::new();
        visit
            .handle(catalog, Interaction::Navigate(Page::Bespoke))
            .unwrap();

        let layout = LayoutView::new(&visit);
        let active: Vec<&str> = layout
            .nav
            .iter()
            .filter(|l| l.active)
            .map(|l| l.label)
            .collect();
        assert_eq!(active, ["Bespoke Service"]);
        assert_eq!(layout.current_path, "/bespoke");
        assert_eq!(layout.title, "Bespoke Service | Arden Way");
    }

    #[test]
    fn test_sidebar_totals() {
        let catalog = Catalog::studio();
        let mut visit = BrowsingSession::new();
        for id in ["2", "6"] {
            visit
                .handle(catalog, Interaction::AddToEnquiry(ProductId::new(id)))
                .unwrap();
        }

        let sidebar = SidebarView::new(&visit, "/");
        assert_eq!(sidebar.item_count, 2);
        assert_eq!(sidebar.total, "R39,500");
        assert_eq!(sidebar.items[1].name, "Karoo Round");
    }

    #[test]
    fn test_collection_view_uses_session_filter() {
        let catalog = Catalog::studio();
        let mut visit = BrowsingSession::new();
        visit
            .handle(
                catalog,
                Interaction::SelectCategory(CategoryFilter::Only(Category::Coffee)),
            )
            .unwrap();

        let view = CollectionView::new(catalog, &visit, Page::Collection);
        let names: Vec<&str> = view.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Kalahari Burl Coffee Table", "Karoo Round"]);

        let active: Vec<&str> = view.tabs.iter().filter(|t| t.active).map(|t| t.label).collect();
        assert_eq!(active, ["Coffee"]);
        assert_eq!(view.tabs[2].href, "/collection?category=Coffee");
        assert_eq!(view.return_to, "/collection");
    }

    #[test]
    fn test_home_collection_links_keep_anchor() {
        let view = CollectionView::new(Catalog::studio(), &BrowsingSession::new(), Page::Home);
        assert_eq!(view.tabs[0].href, "/?category=All#collection");
        assert_eq!(view.return_to, "/#collection");
        assert_eq!(view.products.len(), 6);
    }

    #[test]
    fn test_unknown_token_renders_empty_grid_with_notice() {
        let view = CollectionView::for_token(Catalog::studio(), "Bedroom", Page::Collection);
        assert!(view.products.is_empty());
        assert!(view.notice.as_deref().unwrap().contains("Bedroom"));
        assert!(view.tabs.iter().all(|t| !t.active));
    }

    #[test]
    fn test_helpers() {
        assert_eq!(section_path(Section::Testimonials), "/#testimonials");
        assert_eq!(testimonials(Catalog::studio())[0].rating, 5);
    }
}
