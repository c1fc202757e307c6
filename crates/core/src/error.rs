//! Errors raised by catalog, enquiry-list and navigation operations.
//!
//! Every variant is a precondition violation: operations are synchronous and
//! either complete or leave state untouched, so callers can present a
//! message and carry on.

use thiserror::Error;

use crate::types::{CurrencyCode, ProductId};

/// Errors from the core state model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A product id that is not in the catalog.
    #[error("product {0} is not in the catalog")]
    InvalidProductReference(ProductId),

    /// A page token outside home, collection, bespoke and about.
    #[error("unknown page: {0}")]
    InvalidPage(String),

    /// A category token outside All and the four categories.
    #[error("unknown category: {0}")]
    InvalidCategory(String),

    /// A section anchor that does not exist on the home page.
    #[error("unknown section: {0}")]
    InvalidSection(String),

    /// Two catalog products share an id.
    #[error("duplicate product id in catalog: {0}")]
    DuplicateProductId(ProductId),

    /// A catalog product priced in a different currency than the rest.
    #[error("product {id} is priced in {found}, catalog currency is {expected}")]
    CurrencyMismatch {
        /// The offending product.
        id: ProductId,
        /// Currency of the first product.
        expected: CurrencyCode,
        /// Currency of this product.
        found: CurrencyCode,
    },

    /// A rating above the maximum.
    #[error("rating must be between 0 and {max} (got {value})")]
    InvalidRating {
        /// The rejected value.
        value: u8,
        /// Highest allowed rating.
        max: u8,
    },
}

/// Result type alias for [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
