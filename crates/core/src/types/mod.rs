//! Core types for the studio site.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod page;
pub mod price;
pub mod status;

pub use category::{Category, CategoryFilter};
pub use id::*;
pub use page::{Page, Section};
pub use price::{CurrencyCode, CurrencyFormatter, Price, PriceError};
pub use status::{LeadTime, Rating};
