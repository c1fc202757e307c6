//! Integration tests for Arden Way.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p arden-way-integration-tests
//! ```
//!
//! Each test starts the full storefront router (middleware included) on an
//! ephemeral local port and talks to it over HTTP with a cookie-keeping
//! client, so every [`TestServer`] is one visitor.
//!
//! # Test Categories
//!
//! - `storefront_pages` - Page rendering, navigation, filtering
//! - `storefront_enquiry` - Enquiry list and sidebar flows
//! - `storefront_middleware` - Security headers, request ids, health

use arden_way_storefront::{app, config::StorefrontConfig, state::AppState};
use reqwest::{Client, Response, redirect::Policy};
use tokio::{net::TcpListener, task::JoinHandle};

/// A storefront running in-process, plus a client acting as one visitor.
pub struct TestServer {
    base_url: String,
    client: Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start the storefront with the studio catalog on an ephemeral port.
    pub async fn start() -> Self {
        let state = AppState::new(StorefrontConfig::local());
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app(state))
                .await
                .expect("Test server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: visitor_client(),
            handle,
        }
    }

    /// A second visitor with its own cookie jar, against the same server.
    #[must_use]
    pub fn new_visitor(&self) -> Visitor<'_> {
        Visitor {
            server: self,
            client: visitor_client(),
        }
    }

    /// Absolute URL for a site path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET a path as the default visitor.
    pub async fn get(&self, path: &str) -> Response {
        send_get(&self.client, &self.url(path)).await
    }

    /// GET a path and return the body text, asserting success.
    pub async fn page(&self, path: &str) -> String {
        page_text(self.get(path).await).await
    }

    /// POST a urlencoded form as the default visitor.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        send_form(&self.client, &self.url(path), form).await
    }

    /// The default visitor's client, for requests sent from spawned tasks.
    ///
    /// Clones share the cookie jar, so they act as the same visitor.
    #[must_use]
    pub fn client(&self) -> Client {
        self.client.clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// An additional visitor against a running [`TestServer`].
pub struct Visitor<'a> {
    server: &'a TestServer,
    client: Client,
}

impl Visitor<'_> {
    /// GET a path and return the body text, asserting success.
    pub async fn page(&self, path: &str) -> String {
        page_text(send_get(&self.client, &self.server.url(path)).await).await
    }

    /// POST a urlencoded form.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        send_form(&self.client, &self.server.url(path), form).await
    }
}

/// Redirects are not followed so tests can assert on `Location`.
fn visitor_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

async fn send_get(client: &Client, url: &str) -> Response {
    client
        .get(url)
        .send()
        .await
        .expect("Failed to send GET request")
}

async fn send_form(client: &Client, url: &str, form: &[(&str, &str)]) -> Response {
    client
        .post(url)
        .form(form)
        .send()
        .await
        .expect("Failed to send POST request")
}

async fn page_text(response: Response) -> String {
    assert!(
        response.status().is_success(),
        "unexpected status {} for {}",
        response.status(),
        response.url()
    );
    response.text().await.expect("Failed to read response body")
}

/// The `Location` header of a redirect response.
#[must_use]
pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get("location")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}
