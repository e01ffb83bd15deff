//! Dukkan Catalog - product query and stock reconciliation engine.
//!
//! This crate is the pure, in-process core behind the storefront search
//! sidebar and the admin inventory views. It exposes exactly two entry
//! points:
//!
//! - [`run_query`] - multi-criteria search/filter/facet/sort over a product
//!   collection, consumed by the storefront and by the admin list controls.
//! - [`reconcile`] - batch application of proposed stock-quantity changes,
//!   consumed by the admin single-row update and bulk-update actions.
//!
//! The surrounding application owns all I/O: it fetches the `Product`
//! collection before calling in, and persists the reconciliation report
//! afterwards. Neither entry point blocks, suspends, or retains a reference
//! to the collection across calls.
//!
//! # Modules
//!
//! - [`text`] - locale-aware free-text and per-field matching
//! - [`filter`] - the predicate chain (category, brand, price, availability,
//!   rating, tags)
//! - [`facets`] - facet value sets and per-dimension counts
//! - [`sort`] - stable ordering by the storefront sort keys
//! - [`query`] - the query orchestrator
//! - [`reconcile`] - the bulk stock reconciler

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod facets;
pub mod filter;
pub mod query;
pub mod reconcile;
pub mod sort;
pub mod text;

pub use facets::{FacetCounts, Facets, PriceBounds, extract_facets};
pub use filter::{Availability, filter_products};
pub use query::{CatalogQuery, QueryResult, run_query};
pub use reconcile::{
    AppliedChange, ReconciliationReport, RejectReason, RejectedChange, StockChangeRequest,
    reconcile,
};
pub use sort::{SortDirection, SortKey};
pub use text::AdvancedTerms;
