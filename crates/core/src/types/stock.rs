//! Stock status classification.
//!
//! Every surface that needs a stock status - the storefront availability
//! filter, the admin dashboard badge, the bulk reconciler - must go through
//! [`classify`]. The status is derived, never stored: it is recomputed from
//! `(quantity, threshold)` on every read.

use serde::{Deserialize, Serialize};

/// Threshold used when a product does not specify its own.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

/// Discrete stock status derived from quantity and threshold.
///
/// The engine returns the enum value; user-facing labels are the host's
/// concern (`translate(key, locale)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// The status as a translation key segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OutOfStock => "out_of_stock",
            Self::LowStock => "low_stock",
            Self::InStock => "in_stock",
        }
    }

    /// Whether the product can be sold at all.
    #[must_use]
    pub const fn is_available(self) -> bool {
        !matches!(self, Self::OutOfStock)
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a stock quantity against a low-stock threshold.
///
/// - `quantity == 0` is [`StockStatus::OutOfStock`]
/// - `0 < quantity <= threshold` is [`StockStatus::LowStock`]
/// - `quantity > threshold` is [`StockStatus::InStock`]
#[must_use]
pub const fn classify(quantity: i64, threshold: i64) -> StockStatus {
    if quantity <= 0 {
        StockStatus::OutOfStock
    } else if quantity <= threshold {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

/// Whether an in-stock quantity sits in the looser `threshold * 1.5` band.
///
/// Presentation-only refinement: some admin views color quantities within
/// 1.5x of the threshold differently. This never changes [`classify`]'s
/// answer and must not be used in business logic.
#[must_use]
pub const fn approaching_low(quantity: i64, threshold: i64) -> bool {
    quantity > threshold && quantity * 2 <= threshold * 3
}
