//! The fixed, read-only product and testimonial catalog.
//!
//! The catalog is an ordered sequence: display order is insertion order,
//! and the filter engine preserves it.

mod studio;

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::types::{
    Category, CurrencyCode, LeadTime, Price, ProductId, Rating, TestimonialId,
};

/// A sellable piece of furniture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Price,
    /// Free-form, e.g. "2200 x 1000 mm".
    pub dimensions: String,
    pub wood: String,
    pub resin: String,
    /// External image URL; never fetched or validated here.
    pub image: String,
    pub lead_time: LeadTime,
    pub description: String,
    pub features: Vec<String>,
}

/// A client quote shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: TestimonialId,
    pub name: String,
    pub location: String,
    pub text: String,
    pub rating: Rating,
}

/// Immutable, ordered collection of products and testimonials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    testimonials: Vec<Testimonial>,
    currency: CurrencyCode,
}

static STUDIO: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    products: studio::products(),
    testimonials: studio::testimonials(),
    currency: CurrencyCode::ZAR,
});

impl Catalog {
    /// Build a catalog from products and testimonials.
    ///
    /// The catalog currency is that of the first product (ZAR when empty).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateProductId`] if two products share an id
    /// and [`CoreError::CurrencyMismatch`] if prices mix currencies.
    pub fn new(products: Vec<Product>, testimonials: Vec<Testimonial>) -> Result<Self> {
        let currency = products
            .first()
            .map_or_else(CurrencyCode::default, |p| p.price.currency_code());

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(&product.id) {
                return Err(CoreError::DuplicateProductId(product.id.clone()));
            }
            let found = product.price.currency_code();
            if found != currency {
                return Err(CoreError::CurrencyMismatch {
                    id: product.id.clone(),
                    expected: currency,
                    found,
                });
            }
        }

        Ok(Self {
            products,
            testimonials,
            currency,
        })
    }

    /// The studio's compiled-in catalog.
    #[must_use]
    pub fn studio() -> &'static Self {
        &STUDIO
    }

    /// All products in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All testimonials in display order.
    #[must_use]
    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Whether a product with this id exists.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.product(id).is_some()
    }

    /// Currency every product is priced in.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn table(id: &str, price: Price) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Table {id}"),
            category: Category::Dining,
            price,
            dimensions: "1 x 1 m".to_string(),
            wood: "Oak".to_string(),
            resin: "Clear".to_string(),
            image: "https://example.com/t.jpg".to_string(),
            lead_time: LeadTime::InStock,
            description: String::new(),
            features: Vec::new(),
        }
    }

    #[test]
    fn test_studio_catalog_shape() {
        let catalog = Catalog::studio();
        assert_eq!(catalog.products().len(), 6);
        assert_eq!(catalog.testimonials().len(), 3);
        assert_eq!(catalog.currency(), CurrencyCode::ZAR);

        let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_studio_catalog_passes_validation() {
        let studio = Catalog::studio();
        let rebuilt = Catalog::new(
            studio.products().to_vec(),
            studio.testimonials().to_vec(),
        )
        .unwrap();
        assert_eq!(&rebuilt, studio);
    }

    #[test]
    fn test_studio_first_product() {
        let umgeni = &Catalog::studio().products()[0];
        assert_eq!(umgeni.name, "The Umgeni Dining Table");
        assert_eq!(umgeni.price, Price::zar(42_000));
        assert_eq!(umgeni.lead_time, LeadTime::InStock);
        assert_eq!(umgeni.features.len(), 4);
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::studio();
        assert_eq!(
            catalog.product(&ProductId::new("3")).map(|p| p.name.as_str()),
            Some("Sentinel Conference Table")
        );
        assert!(catalog.contains(&ProductId::new("6")));
        assert!(!catalog.contains(&ProductId::new("7")));
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = Catalog::new(
            vec![table("1", Price::zar(10)), table("1", Price::zar(20))],
            Vec::new(),
        );
        assert_eq!(
            result.unwrap_err(),
            CoreError::DuplicateProductId(ProductId::new("1"))
        );
    }

    #[test]
    fn test_new_rejects_mixed_currency() {
        let usd = Price::new(rust_decimal::Decimal::from(10), CurrencyCode::USD).unwrap();
        let result = Catalog::new(
            vec![table("1", Price::zar(10)), table("2", usd)],
            Vec::new(),
        );
        assert!(matches!(
            result,
            Err(CoreError::CurrencyMismatch {
                expected: CurrencyCode::ZAR,
                found: CurrencyCode::USD,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_catalog_defaults_to_rand() {
        let catalog = Catalog::new(Vec::new(), Vec::new()).unwrap();
        assert!(catalog.products().is_empty());
        assert_eq!(catalog.currency(), CurrencyCode::ZAR);
    }
}
