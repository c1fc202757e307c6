//! Page rendering, navigation and collection filtering.

use arden_way_core::Catalog;
use arden_way_integration_tests::{TestServer, location};
use reqwest::StatusCode;

#[tokio::test]
async fn test_home_page_renders_catalog_and_testimonials() {
    let server = TestServer::start().await;
    let body = server.page("/").await;

    assert!(body.contains("Nature, Preserved"));
    assert!(body.contains("Curated Inventory"));
    for product in Catalog::studio().products() {
        assert!(body.contains(&product.name), "missing {}", product.name);
    }
    assert!(body.contains("R42,000"));
    assert!(body.contains("Client Perspectives"));
    assert!(body.contains("Sarah van der Merwe"));
    assert!(body.contains("★★★★★"));
    // sidebar starts closed and empty
    assert!(body.contains(r#"class="cart-sidebar" aria-label="Enquiry list" hidden"#));
}

#[tokio::test]
async fn test_named_pages_render() {
    let server = TestServer::start().await;

    let collection = server.page("/collection").await;
    assert!(collection.contains("Full Collection"));
    assert!(collection.contains("<title>Collection | Arden Way</title>"));

    let bespoke = server.page("/bespoke").await;
    assert!(bespoke.contains("Ready to create something unique?"));
    assert!(bespoke.contains("<title>Bespoke Service | Arden Way</title>"));

    let about = server.page("/about").await;
    assert!(about.contains("<h1>Our Story</h1>"));
    assert!(about.contains(r#"class="site-nav__link is-active">Our Story"#));
}

#[tokio::test]
async fn test_unknown_page_is_not_found() {
    let server = TestServer::start().await;

    let response = server.get("/checkout").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.text().await.unwrap_or_default(),
        "Page not found: checkout"
    );
}

#[tokio::test]
async fn test_unknown_page_keeps_session() {
    let server = TestServer::start().await;
    server
        .post_form("/cart/add", &[("product_id", "1"), ("return_to", "/")])
        .await;

    assert_eq!(server.get("/checkout").await.status(), StatusCode::NOT_FOUND);

    let body = server.page("/").await;
    assert!(body.contains(r#"<span id="cart-count" class="cart-count">1</span>"#));
}

#[tokio::test]
async fn test_category_filter_preserves_order_and_persists() {
    let server = TestServer::start().await;

    let body = server.page("/collection?category=Coffee").await;
    let kalahari = body.find("Kalahari Burl Coffee Table");
    let karoo = body.find("Karoo Round");
    assert!(kalahari.is_some() && karoo.is_some());
    assert!(kalahari < karoo);
    assert!(!body.contains("The Umgeni Dining Table"));
    assert!(body.contains(r#"class="collection__tab is-active">Coffee"#));

    // The selection belongs to the session, not the URL
    let body = server.page("/collection").await;
    assert!(body.contains("Karoo Round"));
    assert!(!body.contains("Verde Console"));

    let body = server.page("/collection?category=All").await;
    assert!(body.contains("Verde Console"));
}

#[tokio::test]
async fn test_unknown_category_shows_empty_grid() {
    let server = TestServer::start().await;
    server.page("/collection?category=Console").await;

    let body = server.page("/collection?category=Bedroom").await;
    assert!(body.contains("No pieces match"));
    assert!(!body.contains("Verde Console</h3>"));

    // Stored filter is untouched
    let body = server.page("/collection").await;
    assert!(body.contains("Verde Console</h3>"));
    assert!(!body.contains("Karoo Round"));
}

#[tokio::test]
async fn test_section_links_redirect_to_anchor() {
    let server = TestServer::start().await;

    let response = server.get("/sections/testimonials").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/#testimonials");

    let response = server.get("/sections/collection").await;
    assert_eq!(location(&response), "/#collection");

    let response = server.get("/sections/footer").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mobile_menu_toggle_and_close_on_navigation() {
    let server = TestServer::start().await;

    let body = server.page("/about").await;
    assert!(!body.contains(r#"<nav class="mobile-menu""#));

    let response = server
        .post_form("/menu/toggle", &[("return_to", "/about")])
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/about");

    let body = server.page("/about").await;
    assert!(body.contains(r#"<nav class="mobile-menu""#));
    assert!(body.contains(r#"href="/collection?menu=close""#));

    // Following a menu link closes the menu
    let body = server.page("/collection?menu=close").await;
    assert!(!body.contains(r#"<nav class="mobile-menu""#));

    // ...and never opens a closed one
    let body = server.page("/bespoke?menu=close").await;
    assert!(!body.contains(r#"<nav class="mobile-menu""#));
}
