//! Integration tests for the Dukkan catalog engine.
//!
//! Shared fixtures live here; the files under `tests/` exercise the public
//! API end to end:
//!
//! - `catalog_query` - search, filtering, facets, and sorting
//! - `stock_reconcile` - bulk stock updates and the classifier contract

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use dukkan_core::{CategoryId, Locale, LocalizedText, Product, ProductId};

/// Fixed creation instants so `newest` sorts are reproducible.
#[must_use]
pub fn day(offset: i64) -> DateTime<Utc> {
    let base = Utc
        .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .expect("valid fixture date");
    base + Duration::days(offset)
}

/// A product with sensible defaults; fixtures override what they need.
#[must_use]
pub fn product(id: i32, name: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: LocalizedText::new(name),
        description: None,
        brand: None,
        category_id: CategoryId::new(1),
        sku: None,
        tags: vec![],
        price: Decimal::from(10),
        stock_quantity: 20,
        low_stock_threshold: None,
        average_rating: None,
        created_at: day(0),
        updated_at: day(0),
    }
}

/// A small multilingual catalog covering every filter dimension.
///
/// Categories: 1 = pantry, 2 = beverages, 3 = produce.
/// Stock spread: in stock (1, 4), low stock (2, 5), out of stock (3, 6).
#[must_use]
pub fn grocery_catalog() -> Vec<Product> {
    vec![
        Product {
            name: LocalizedText::new("Olive Oil")
                .with(Locale::Ar, "زيت الزيتون")
                .with(Locale::Fr, "Huile d'olive"),
            description: Some(LocalizedText::new("Cold-pressed extra virgin")),
            brand: Some("Atlas".to_string()),
            sku: Some("OIL-EV-500".to_string()),
            tags: vec!["pantry".to_string(), "organic".to_string()],
            price: Decimal::from(45),
            stock_quantity: 45,
            average_rating: Some(4.8),
            created_at: day(1),
            updated_at: day(1),
            ..product(1, "Olive Oil")
        },
        Product {
            name: LocalizedText::new("Green Tea")
                .with(Locale::Ar, "شاي أخضر")
                .with(Locale::Fr, "Thé vert"),
            brand: Some("Sahara".to_string()),
            category_id: CategoryId::new(2),
            sku: Some("TEA-GR-001".to_string()),
            tags: vec!["beverage".to_string(), "organic".to_string()],
            price: Decimal::new(1250, 2),
            stock_quantity: 8,
            low_stock_threshold: Some(15),
            average_rating: Some(4.2),
            created_at: day(2),
            updated_at: day(2),
            ..product(2, "Green Tea")
        },
        Product {
            name: LocalizedText::new("Couscous").with(Locale::Fr, "Couscous fin"),
            brand: Some("Atlas".to_string()),
            sku: Some("CSC-FIN-1K".to_string()),
            tags: vec!["pantry".to_string()],
            price: Decimal::new(675, 2),
            stock_quantity: 0,
            average_rating: Some(3.9),
            created_at: day(3),
            updated_at: day(3),
            ..product(3, "Couscous")
        },
        Product {
            name: LocalizedText::new("Harissa").with(Locale::Ar, "هريسة"),
            tags: vec!["pantry".to_string(), "spicy".to_string()],
            price: Decimal::new(425, 2),
            stock_quantity: 30,
            low_stock_threshold: Some(5),
            created_at: day(4),
            updated_at: day(4),
            ..product(4, "Harissa")
        },
        Product {
            name: LocalizedText::new("Mint Bunch").with(Locale::Fr, "Menthe"),
            category_id: CategoryId::new(3),
            sku: Some("PRD-MNT".to_string()),
            tags: vec!["fresh".to_string()],
            price: Decimal::new(150, 2),
            stock_quantity: 3,
            average_rating: Some(4.9),
            created_at: day(5),
            updated_at: day(5),
            ..product(5, "Mint Bunch")
        },
        Product {
            name: LocalizedText::new("Orange Juice").with(Locale::Fr, "Jus d'orange"),
            brand: Some("Sahara".to_string()),
            category_id: CategoryId::new(2),
            sku: Some("JUS-OR-1L".to_string()),
            tags: vec!["beverage".to_string(), "fresh".to_string()],
            price: Decimal::from(9),
            stock_quantity: 0,
            average_rating: Some(2.5),
            created_at: day(6),
            updated_at: day(6),
            ..product(6, "Orange Juice")
        },
    ]
}
