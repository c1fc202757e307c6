//! Request-independent logic for storefront.
//!
//! # Services
//!
//! - `interactions` - Apply visitor interactions and the site's reactions to them

pub mod interactions;

pub use interactions::{dispatch, reaction};
