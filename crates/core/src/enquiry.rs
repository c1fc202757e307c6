//! The enquiry list: a visitor's ordered selection of catalog pieces.
//!
//! Adding the same piece twice stores it twice. The list knows nothing about
//! the sidebar that displays it; callers react to the returned
//! [`CartEvent`] instead.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product};
use crate::error::{CoreError, Result};
use crate::types::{Price, ProductId};

/// Notification emitted by enquiry-list mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    /// A product was appended.
    ItemAdded {
        product_id: ProductId,
        /// List length after the append.
        item_count: usize,
    },
    /// The list was emptied.
    Cleared,
}

/// Session-local list of products the visitor is enquiring about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryList {
    entries: Vec<Product>,
}

impl EnquiryList {
    /// An empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append `product` to the end of the list.
    ///
    /// The catalog's own record for the id is stored, so a stale or
    /// hand-built `product` cannot drift from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidProductReference`] if the id is not in
    /// `catalog`.
    pub fn add_item(&mut self, catalog: &Catalog, product: &Product) -> Result<CartEvent> {
        self.add_by_id(catalog, &product.id)
    }

    /// Append the catalog product with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidProductReference`] if the id is not in
    /// `catalog`.
    pub fn add_by_id(&mut self, catalog: &Catalog, id: &ProductId) -> Result<CartEvent> {
        let product = catalog
            .product(id)
            .ok_or_else(|| CoreError::InvalidProductReference(id.clone()))?;
        self.entries.push(product.clone());
        Ok(CartEvent::ItemAdded {
            product_id: id.clone(),
            item_count: self.entries.len(),
        })
    }

    /// Sum of all entry prices.
    #[must_use]
    pub fn total(&self) -> Price {
        self.entries.iter().map(|p| &p.price).sum()
    }

    /// Number of entries, duplicates included.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order they were added.
    #[must_use]
    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    /// Remove every entry.
    pub fn clear(&mut self) -> CartEvent {
        self.entries.clear();
        CartEvent::Cleared
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn product(id: &str) -> &'static Product {
        Catalog::studio().product(&ProductId::new(id)).unwrap()
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = EnquiryList::new();
        assert!(list.is_empty());
        assert_eq!(list.item_count(), 0);
        assert_eq!(list.total(), Price::zar(0));
    }

    #[test]
    fn test_add_first_item() {
        let mut list = EnquiryList::new();
        let event = list.add_item(Catalog::studio(), product("1")).unwrap();

        assert_eq!(
            event,
            CartEvent::ItemAdded {
                product_id: ProductId::new("1"),
                item_count: 1,
            }
        );
        assert_eq!(list.item_count(), 1);
        assert_eq!(list.total(), Price::zar(42_000));
    }

    #[test]
    fn test_duplicates_accumulate() {
        let catalog = Catalog::studio();
        let mut list = EnquiryList::new();
        for id in ["2", "2", "6", "2"] {
            list.add_by_id(catalog, &ProductId::new(id)).unwrap();
        }

        assert_eq!(list.item_count(), 4);
        assert_eq!(list.total(), Price::zar(18_500 * 3 + 21_000));
        let order: Vec<&str> = list.entries().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, ["2", "2", "6", "2"]);
    }

    #[test]
    fn test_total_matches_sum_of_prices() {
        let catalog = Catalog::studio();
        let mut list = EnquiryList::new();
        let mut expected = 0_u64;
        for (i, p) in catalog.products().iter().enumerate() {
            list.add_item(catalog, p).unwrap();
            expected += [42_000, 18_500, 95_000, 24_000, 58_000, 21_000][i];
        }
        assert_eq!(list.total(), Price::zar(expected));
        assert_eq!(list.total().display(), "R258,500");
    }

    #[test]
    fn test_unknown_product_is_rejected() {
        let mut list = EnquiryList::new();
        let result = list.add_by_id(Catalog::studio(), &ProductId::new("99"));

        assert_eq!(
            result,
            Err(CoreError::InvalidProductReference(ProductId::new("99")))
        );
        assert!(list.is_empty());
    }

    #[test]
    fn test_stale_record_is_replaced_by_catalog_copy() {
        let mut forged = product("4").clone();
        forged.price = Price::zar(1);

        let mut list = EnquiryList::new();
        list.add_item(Catalog::studio(), &forged).unwrap();
        assert_eq!(list.total(), Price::zar(24_000));
    }

    #[test]
    fn test_clear() {
        let mut list = EnquiryList::new();
        list.add_item(Catalog::studio(), product("3")).unwrap();

        assert_eq!(list.clear(), CartEvent::Cleared);
        assert!(list.is_empty());
        assert_eq!(list.total(), Price::zar(0));
    }
}
