//! Category filtering over the catalog.
//!
//! Filtering never reorders: the result is the subsequence of `products`
//! that passes the selector.

use crate::catalog::Product;
use crate::error::Result;
use crate::types::CategoryFilter;

/// Select the products that pass `selector`, preserving catalog order.
///
/// [`CategoryFilter::All`] returns every product. The result is always a
/// fresh `Vec`, never the input slice itself.
#[must_use]
pub fn apply(products: &[Product], selector: CategoryFilter) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| selector.matches(product.category))
        .collect()
}

/// Parse a selector token and apply it.
///
/// A known category with no products yields an empty `Vec`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidCategory`](crate::CoreError::InvalidCategory)
/// when `token` is neither `All` nor a category name.
pub fn apply_token<'a>(products: &'a [Product], token: &str) -> Result<Vec<&'a Product>> {
    let selector = token.parse::<CategoryFilter>()?;
    Ok(apply(products, selector))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::error::CoreError;
    use crate::types::Category;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let catalog = Catalog::studio();
        let result = apply(catalog.products(), CategoryFilter::All);
        assert_eq!(ids(&result), ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_coffee_returns_two_in_catalog_order() {
        let result = apply(
            Catalog::studio().products(),
            CategoryFilter::Only(Category::Coffee),
        );
        assert_eq!(ids(&result), ["2", "6"]);
    }

    #[test]
    fn test_every_selector_only_returns_matching() {
        let products = Catalog::studio().products();
        for selector in CategoryFilter::options() {
            let result = apply(products, selector);
            assert!(result.len() <= products.len());
            assert!(result.iter().all(|p| selector.matches(p.category)));

            // relative order matches the catalog
            let positions: Vec<usize> = result
                .iter()
                .map(|p| products.iter().position(|q| q.id == p.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_apply_is_idempotent() {
        let products = Catalog::studio().products();
        let selector = CategoryFilter::Only(Category::Dining);
        assert_eq!(apply(products, selector), apply(products, selector));
    }

    #[test]
    fn test_empty_category_yields_empty() {
        let coffee_only: Vec<Product> = Catalog::studio()
            .products()
            .iter()
            .filter(|p| p.category == Category::Coffee)
            .cloned()
            .collect();
        assert!(apply(&coffee_only, CategoryFilter::Only(Category::Console)).is_empty());
        assert!(apply_token(&coffee_only, "Console").unwrap().is_empty());
    }

    #[test]
    fn test_apply_token() {
        let products = Catalog::studio().products();
        assert_eq!(ids(&apply_token(products, "conference").unwrap()), ["3"]);
        assert_eq!(apply_token(products, "All").unwrap().len(), 6);
        assert_eq!(
            apply_token(products, "Bedroom"),
            Err(CoreError::InvalidCategory("Bedroom".to_string()))
        );
    }
}
