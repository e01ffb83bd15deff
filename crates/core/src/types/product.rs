//! Product domain model shared by the storefront and admin surfaces.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{CategoryId, ProductId};
use super::locale::LocalizedText;
use super::stock::{DEFAULT_LOW_STOCK_THRESHOLD, StockStatus, classify};

/// A catalog product.
///
/// The collection of products is owned by the caller; the engine receives a
/// snapshot per call and never retains a reference across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID (stable, immutable).
    pub id: ProductId,
    /// Display name per locale.
    pub name: LocalizedText,
    /// Optional description per locale.
    pub description: Option<LocalizedText>,
    /// Optional brand name.
    pub brand: Option<String>,
    /// Owning category (opaque to this engine).
    pub category_id: CategoryId,
    /// Optional stock-keeping identifier.
    pub sku: Option<String>,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Unit price in the store currency.
    pub price: Decimal,
    /// Units on hand. Never negative.
    pub stock_quantity: i64,
    /// Low-stock threshold; `None` means the store default of 10.
    pub low_stock_threshold: Option<i64>,
    /// Average review rating in [0, 5]; `None` means unrated.
    pub average_rating: Option<f64>,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated. Touched on every stock mutation.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// The effective low-stock threshold.
    #[must_use]
    pub fn effective_low_stock_threshold(&self) -> i64 {
        self.low_stock_threshold
            .unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    /// The current stock status, recomputed from quantity and threshold.
    #[must_use]
    pub fn stock_status(&self) -> StockStatus {
        classify(self.stock_quantity, self.effective_low_stock_threshold())
    }

    /// The effective rating; unrated products count as 0.
    #[must_use]
    pub fn rating(&self) -> f64 {
        self.average_rating.unwrap_or(0.0)
    }

    /// Inventory value: units on hand times unit price.
    #[must_use]
    pub fn inventory_value(&self) -> Decimal {
        Decimal::from(self.stock_quantity) * self.price
    }
}
