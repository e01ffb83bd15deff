//! Facet extraction and per-dimension counts.
//!
//! Facet value sets (which brands and tags exist, the price slider bounds)
//! always come from the full unfiltered collection, so the sidebar shows
//! "what else is available" rather than "what remains". Counts follow the
//! faceted-search convention of excluding each dimension's own predicate.

use std::collections::{BTreeSet, HashMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use dukkan_core::{CategoryId, Product};

use crate::filter::{FacetDimension, filter_except};
use crate::query::CatalogQuery;

/// Price slider bounds, floored/ceiled to whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBounds {
    pub min: Decimal,
    pub max: Decimal,
}

impl Default for PriceBounds {
    /// Bounds for an empty catalog.
    fn default() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::ONE_THOUSAND,
        }
    }
}

/// Filterable dimensions derived from the full collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    /// Distinct brands, sorted. Empty brand strings are excluded.
    pub brands: BTreeSet<String>,
    /// Distinct tags, sorted. Empty tags are excluded.
    pub tags: BTreeSet<String>,
    /// Price bounds over the unfiltered collection.
    pub price_bounds: PriceBounds,
}

/// Derive the available facets from a product collection.
#[must_use]
pub fn extract_facets(products: &[Product]) -> Facets {
    let mut brands = BTreeSet::new();
    let mut tags = BTreeSet::new();
    let mut prices: Option<(Decimal, Decimal)> = None;

    for product in products {
        if let Some(brand) = &product.brand {
            if !brand.is_empty() {
                brands.insert(brand.clone());
            }
        }
        for tag in &product.tags {
            if !tag.is_empty() {
                tags.insert(tag.clone());
            }
        }
        prices = Some(match prices {
            None => (product.price, product.price),
            Some((min, max)) => (min.min(product.price), max.max(product.price)),
        });
    }

    let price_bounds = prices.map_or_else(PriceBounds::default, |(min, max)| PriceBounds {
        min: min.floor(),
        max: max.ceil(),
    });

    Facets {
        brands,
        tags,
        price_bounds,
    }
}

/// Per-dimension match counts for the filter sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCounts {
    pub categories: HashMap<CategoryId, usize>,
    pub brands: HashMap<String, usize>,
}

/// Count matches per category and per brand.
///
/// Each dimension is counted over the collection filtered by every
/// predicate except that dimension's own, so a selected brand keeps its
/// count visible.
pub(crate) fn facet_counts(products: &[Product], query: &CatalogQuery) -> FacetCounts {
    let mut counts = FacetCounts::default();

    for product in filter_except(products, query, FacetDimension::Category) {
        *counts.categories.entry(product.category_id).or_default() += 1;
    }
    for product in filter_except(products, query, FacetDimension::Brand) {
        if let Some(brand) = &product.brand {
            if !brand.is_empty() {
                *counts.brands.entry(brand.clone()).or_default() += 1;
            }
        }
    }

    counts
}
