//! Core types for Dukkan.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod locale;
pub mod product;
pub mod stock;

pub use id::*;
pub use locale::{Locale, LocalizedText};
pub use product::Product;
pub use stock::{DEFAULT_LOW_STOCK_THRESHOLD, StockStatus, approaching_low, classify};
