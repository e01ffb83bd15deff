//! Integration tests for stock reconciliation and classification.
//!
//! Covers the classifier contract shared by the storefront filter and the
//! admin views, plus batch reconciliation semantics end to end.

use dukkan_catalog::{
    Availability, CatalogQuery, RejectReason, StockChangeRequest, reconcile, run_query,
};
use dukkan_core::{ProductId, StockStatus, classify};
use dukkan_integration_tests::grocery_catalog;

fn request(id: i32, quantity: i64) -> StockChangeRequest {
    StockChangeRequest {
        product_id: ProductId::new(id),
        proposed_quantity: quantity,
        reason: Some("cycle count".to_string()),
    }
}

// =============================================================================
// Classifier contract
// =============================================================================

#[test]
fn test_classifier_boundaries() {
    for threshold in 0..=50 {
        assert_eq!(classify(0, threshold), StockStatus::OutOfStock);
        assert_eq!(classify(threshold + 1, threshold), StockStatus::InStock);
    }
    for threshold in 1..=50 {
        assert_eq!(classify(threshold, threshold), StockStatus::LowStock);
        assert_eq!(classify(1, threshold), StockStatus::LowStock);
    }
}

#[test]
fn test_filter_and_report_agree_on_status() {
    let mut products = grocery_catalog();
    let report = reconcile(&mut products, &[request(4, 2)]);
    // Product 4 has threshold 5, so 2 is LowStock - and LowStock is still
    // "in stock" to the storefront filter.
    assert_eq!(report.applied[0].new_status, StockStatus::LowStock);

    let query = CatalogQuery {
        availability: Availability::InStock,
        ..CatalogQuery::default()
    };
    let result = run_query(&products, &query);
    assert!(result.items.iter().any(|p| p.id == ProductId::new(4)));
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn test_negative_proposal_leaves_quantity_unchanged() {
    let mut products = grocery_catalog();
    let report = reconcile(&mut products, &[request(3, -5)]);

    assert!(report.applied.is_empty());
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].product_id, ProductId::new(3));
    assert_eq!(report.rejected[0].reason, RejectReason::NegativeQuantity);

    let couscous = products
        .iter()
        .find(|p| p.id == ProductId::new(3))
        .expect("fixture product");
    assert_eq!(couscous.stock_quantity, 0);
}

#[test]
fn test_duplicate_in_batch_applies_only_first() {
    let mut products = grocery_catalog();
    let report = reconcile(&mut products, &[request(1, 50), request(1, 0)]);

    assert_eq!(report.applied.len(), 1);
    assert_eq!(report.applied[0].new_quantity, 50);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].reason, RejectReason::DuplicateInBatch);

    let olive_oil = products
        .iter()
        .find(|p| p.id == ProductId::new(1))
        .expect("fixture product");
    assert_eq!(olive_oil.stock_quantity, 50);
}

#[test]
fn test_unknown_product_rejected() {
    let mut products = grocery_catalog();
    let report = reconcile(&mut products, &[request(999, 10)]);
    assert_eq!(report.rejected[0].reason, RejectReason::UnknownProduct);
}

// =============================================================================
// Batch semantics
// =============================================================================

#[test]
fn test_mixed_batch_applies_valid_rows() {
    let mut products = grocery_catalog();
    let requests = vec![
        request(2, 40),   // valid
        request(5, -1),   // negative
        request(999, 10), // unknown
        request(2, 12),   // duplicate
        request(6, 24),   // valid
    ];
    let report = reconcile(&mut products, &requests);

    let applied: Vec<i32> = report.applied.iter().map(|c| c.product_id.as_i32()).collect();
    assert_eq!(applied, vec![2, 6]);
    assert_eq!(
        report.rejected.iter().map(|r| r.reason).collect::<Vec<_>>(),
        vec![
            RejectReason::NegativeQuantity,
            RejectReason::UnknownProduct,
            RejectReason::DuplicateInBatch,
        ]
    );
    assert_eq!(report.applied.len() + report.rejected.len(), requests.len());
}

#[test]
fn test_no_sequence_of_batches_drives_stock_negative() {
    let mut products = grocery_catalog();
    let batches: Vec<Vec<StockChangeRequest>> = vec![
        vec![request(1, 0), request(2, -10)],
        vec![request(2, -1), request(2, 5)],
        vec![request(3, 1), request(3, -7), request(999, -3)],
        vec![request(5, 0), request(6, 0), request(4, -100)],
    ];
    for batch in &batches {
        let _ = reconcile(&mut products, batch);
        for product in &products {
            assert!(
                product.stock_quantity >= 0,
                "product {} went negative",
                product.id
            );
        }
    }
}

#[test]
fn test_applied_rows_touch_updated_at() {
    let mut products = grocery_catalog();
    let before = products
        .iter()
        .find(|p| p.id == ProductId::new(2))
        .expect("fixture product")
        .updated_at;
    let _ = reconcile(&mut products, &[request(2, 40)]);
    let after = products
        .iter()
        .find(|p| p.id == ProductId::new(2))
        .expect("fixture product")
        .updated_at;
    assert!(after > before);
}

#[test]
fn test_rejected_rows_do_not_touch_updated_at() {
    let mut products = grocery_catalog();
    let before = products
        .iter()
        .find(|p| p.id == ProductId::new(2))
        .expect("fixture product")
        .updated_at;
    let _ = reconcile(&mut products, &[request(2, -40)]);
    let after = products
        .iter()
        .find(|p| p.id == ProductId::new(2))
        .expect("fixture product")
        .updated_at;
    assert_eq!(after, before);
}

// =============================================================================
// Reconcile feeds the query path
// =============================================================================

#[test]
fn test_zeroed_product_disappears_from_in_stock_results() {
    let mut products = grocery_catalog();
    let _ = reconcile(&mut products, &[request(1, 0)]);

    let in_stock = run_query(
        &products,
        &CatalogQuery {
            availability: Availability::InStock,
            ..CatalogQuery::default()
        },
    );
    assert!(!in_stock.items.iter().any(|p| p.id == ProductId::new(1)));

    let out = run_query(
        &products,
        &CatalogQuery {
            availability: Availability::OutOfStock,
            ..CatalogQuery::default()
        },
    );
    assert!(out.items.iter().any(|p| p.id == ProductId::new(1)));
}

// =============================================================================
// Wire format
// =============================================================================

#[test]
fn test_report_serializes_machine_readable_reasons() {
    let mut products = grocery_catalog();
    let report = reconcile(&mut products, &[request(999, 1)]);
    let json = serde_json::to_value(&report).expect("serializable report");
    assert_eq!(json["rejected"][0]["reason"], "unknown-product");
    assert_eq!(json["applied"], serde_json::json!([]));
}
