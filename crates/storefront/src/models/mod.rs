//! Session-backed models for storefront.

pub mod session;

pub use session::{keys as session_keys, load_browsing_session, store_browsing_session};
