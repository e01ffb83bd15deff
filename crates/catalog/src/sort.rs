//! Stable ordering of filtered results.
//!
//! Every key has a natural order (`price-low` ascending, `newest` most
//! recent first, ...). The direction reverses the key comparison only; ties
//! always break by ascending product id, so repeating a sort over an
//! unchanged collection yields a byte-identical order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use dukkan_core::{Locale, Product};

/// Sort key selected by the storefront or admin list controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Name,
    PriceLow,
    PriceHigh,
    Rating,
    Newest,
    StockLow,
    StockHigh,
    Value,
}

impl SortKey {
    /// Parse from a URL parameter value. Unknown values fall back to the
    /// default name sort.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price-low" | "price_asc" => Self::PriceLow,
            "price-high" | "price_desc" => Self::PriceHigh,
            "rating" => Self::Rating,
            "newest" => Self::Newest,
            "stock-low" => Self::StockLow,
            "stock-high" => Self::StockHigh,
            "value" => Self::Value,
            _ => Self::Name,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Newest => "newest",
            Self::StockLow => "stock-low",
            Self::StockHigh => "stock-high",
            Self::Value => "value",
        }
    }
}

/// Direction applied on top of a key's natural order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Parse from a URL parameter value. Unknown values mean ascending.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "desc" | "descending" => Self::Descending,
            _ => Self::Ascending,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Sort a filtered subset in place.
///
/// The `name` key compares the display string for `locale` (English
/// fallback), lowercased. Numeric keys treat missing values as 0.
pub fn sort_products(products: &mut [&Product], key: SortKey, direction: SortDirection, locale: Locale) {
    products.sort_by(|a, b| {
        let by_key = match direction {
            SortDirection::Ascending => compare(a, b, key, locale),
            SortDirection::Descending => compare(a, b, key, locale).reverse(),
        };
        // Tie-break by id ascending regardless of direction.
        by_key.then_with(|| a.id.cmp(&b.id))
    });
}

/// Natural-order comparison for one key.
fn compare(a: &Product, b: &Product, key: SortKey, locale: Locale) -> Ordering {
    match key {
        SortKey::Name => a
            .name
            .resolve(locale)
            .to_lowercase()
            .cmp(&b.name.resolve(locale).to_lowercase()),
        SortKey::PriceLow => a.price.cmp(&b.price),
        SortKey::PriceHigh => b.price.cmp(&a.price),
        SortKey::Rating => b.rating().total_cmp(&a.rating()),
        SortKey::Newest => b.created_at.cmp(&a.created_at),
        SortKey::StockLow => a.stock_quantity.cmp(&b.stock_quantity),
        SortKey::StockHigh => b.stock_quantity.cmp(&a.stock_quantity),
        SortKey::Value => b.inventory_value().cmp(&a.inventory_value()),
    }
}
