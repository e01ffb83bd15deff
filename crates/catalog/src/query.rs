//! Query orchestration: the single read path behind search and filtering.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use dukkan_core::{CategoryId, Locale, Product};

use crate::facets::{self, FacetCounts, Facets};
use crate::filter::{self, Availability};
use crate::sort::{SortDirection, SortKey, sort_products};
use crate::text::AdvancedTerms;

/// A storefront or admin catalog query.
///
/// `Default` matches everything, sorted by name ascending. The admin
/// inventory controls use the same type with only `availability` and the
/// sort fields populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogQuery {
    /// Free-text term; blank means no text filter.
    pub term: String,
    /// Display locale for matching and name sorting.
    pub locale: Locale,
    /// Advanced per-field terms.
    pub advanced: AdvancedTerms,
    /// Selected category ids; empty means all.
    pub categories: HashSet<CategoryId>,
    /// Selected brand names; empty means all.
    pub brands: HashSet<String>,
    /// Inclusive lower price bound.
    pub price_min: Option<Decimal>,
    /// Inclusive upper price bound.
    pub price_max: Option<Decimal>,
    /// Minimum average rating; 0 means unset.
    pub min_rating: f64,
    /// Availability filter.
    pub availability: Availability,
    /// Selected tags; empty means all, otherwise any-of.
    pub tags: HashSet<String>,
    /// Sort key.
    pub sort_key: SortKey,
    /// Sort direction.
    pub sort_direction: SortDirection,
}

impl CatalogQuery {
    /// Price bounds with out-of-order limits swapped so min <= max.
    pub(crate) fn price_bounds(&self) -> (Option<Decimal>, Option<Decimal>) {
        match (self.price_min, self.price_max) {
            (Some(min), Some(max)) if min > max => (Some(max), Some(min)),
            bounds => bounds,
        }
    }
}

/// Result of one catalog query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Matching products in sorted order.
    pub items: Vec<Product>,
    /// Facet value sets over the unfiltered collection.
    pub facets: Facets,
    /// Per-category and per-brand match counts.
    pub counts: FacetCounts,
    /// Number of products that matched all predicates.
    pub total_matched: usize,
    /// Size of the unfiltered collection.
    pub total_available: usize,
}

/// Run a catalog query against a product collection.
///
/// Pure read path: facets come from the full collection, the predicate
/// chain selects the subset, the sort engine orders it, and per-dimension
/// counts are computed last. The collection is never mutated.
#[must_use]
#[instrument(skip(products, query), fields(collection = products.len()))]
pub fn run_query(products: &[Product], query: &CatalogQuery) -> QueryResult {
    let facets = facets::extract_facets(products);

    let mut matched = filter::filter_products(products, query);
    sort_products(&mut matched, query.sort_key, query.sort_direction, query.locale);

    let counts = facets::facet_counts(products, query);

    let total_matched = matched.len();
    debug!(
        matched = total_matched,
        available = products.len(),
        sort = query.sort_key.as_str(),
        "catalog query complete"
    );

    QueryResult {
        items: matched.into_iter().cloned().collect(),
        facets,
        counts,
        total_matched,
        total_available: products.len(),
    }
}
