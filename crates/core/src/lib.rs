//! Arden Way Core - catalog and browsing-session model.
//!
//! This crate holds everything the studio site knows about its products and
//! a visitor's session, independent of how pages are rendered:
//! - `storefront` - Server-rendered public site built on this crate
//!
//! # Architecture
//!
//! The core crate contains only types and state transitions - no I/O, no
//! HTTP, no templates. Every operation is synchronous and either completes
//! or leaves state untouched.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, categories, pages and ratings
//! - [`catalog`] - The fixed product and testimonial catalog
//! - [`filter`] - Category filtering that preserves catalog order
//! - [`enquiry`] - The enquiry list (cart) and its running total
//! - [`view`] - Current page, sidebar and menu flags, collection filter
//! - [`session`] - One visitor's enquiry list and view state, driven by interactions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod enquiry;
pub mod error;
pub mod filter;
pub mod session;
pub mod types;
pub mod view;

pub use catalog::{Catalog, Product, Testimonial};
pub use enquiry::{CartEvent, EnquiryList};
pub use error::CoreError;
pub use session::{BrowsingSession, Interaction, SessionEvent};
pub use types::*;
pub use view::{ViewEvent, ViewState};
