//! Predicate filtering over the product collection.
//!
//! Filters apply as one AND chain in a fixed order. Every predicate is
//! independent and commutative - reordering changes performance, never the
//! result set. Availability goes through the shared [`dukkan_core::classify`]
//! so the storefront filter and the admin badge can never disagree.

use serde::{Deserialize, Serialize};

use dukkan_core::Product;

use crate::query::CatalogQuery;
use crate::text;

/// Availability filter selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    #[default]
    All,
    InStock,
    OutOfStock,
}

impl Availability {
    /// Parse from a URL parameter value. Unknown values mean no filter.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "in-stock" | "in_stock" => Self::InStock,
            "out-of-stock" | "out_of_stock" => Self::OutOfStock,
            _ => Self::All,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::InStock => "in-stock",
            Self::OutOfStock => "out-of-stock",
        }
    }
}

/// Facet dimensions whose own predicate can be excluded when counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FacetDimension {
    Category,
    Brand,
}

/// Apply the full predicate chain to a collection.
pub fn filter_products<'a>(products: &'a [Product], query: &CatalogQuery) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| passes(product, query, None))
        .collect()
}

/// Apply every predicate except `skip`'s own dimension.
///
/// This is the standard faceted-search convention: selecting a brand must
/// not make that brand's own count disappear.
pub(crate) fn filter_except<'a>(
    products: &'a [Product],
    query: &CatalogQuery,
    skip: FacetDimension,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| passes(product, query, Some(skip)))
        .collect()
}

/// The AND chain, in canonical order.
fn passes(product: &Product, query: &CatalogQuery, skip: Option<FacetDimension>) -> bool {
    // 1. Free-text match
    if !text::matches_term(product, &query.term, query.locale) {
        return false;
    }

    // 2. Advanced per-field terms
    if !query.advanced.matches(product) {
        return false;
    }

    // 3. Category membership (empty selection means all)
    if skip != Some(FacetDimension::Category)
        && !query.categories.is_empty()
        && !query.categories.contains(&product.category_id)
    {
        return false;
    }

    // 4. Brand membership
    if skip != Some(FacetDimension::Brand) && !query.brands.is_empty() {
        let hit = product
            .brand
            .as_deref()
            .is_some_and(|brand| query.brands.contains(brand));
        if !hit {
            return false;
        }
    }

    // 5. Price range (bounds pre-normalized so min <= max)
    let (min, max) = query.price_bounds();
    if min.is_some_and(|min| product.price < min) || max.is_some_and(|max| product.price > max) {
        return false;
    }

    // 6. Availability via the shared classifier
    let available = product.stock_status().is_available();
    match query.availability {
        Availability::All => {}
        Availability::InStock if !available => return false,
        Availability::OutOfStock if available => return false,
        _ => {}
    }

    // 7. Minimum rating (0 means unset)
    if query.min_rating > 0.0 && product.rating() < query.min_rating {
        return false;
    }

    // 8. Tag intersection (OR across selected tags)
    if !query.tags.is_empty() && !product.tags.iter().any(|tag| query.tags.contains(tag)) {
        return false;
    }

    true
}
