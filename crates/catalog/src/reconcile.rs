//! Bulk stock reconciliation for the admin inventory views.
//!
//! A batch of proposed quantity changes is validated and applied strictly
//! in submission order, each request exactly once. Validation failures are
//! report entries with machine-readable reason codes, never errors: a bad
//! row must not sink its siblings. At most one change per product is
//! accepted per batch, which is what keeps same-batch overwrites
//! unreachable rather than silently last-writer-wins.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use dukkan_core::{Product, ProductId, StockStatus};

/// A proposed stock-quantity change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockChangeRequest {
    pub product_id: ProductId,
    /// Absolute quantity to set. Negative proposals are rejected.
    pub proposed_quantity: i64,
    /// Optional operator-supplied reason, recorded in logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Why a proposed change was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectReason {
    /// The product id already appeared earlier in this batch.
    #[error("duplicate-in-batch")]
    DuplicateInBatch,
    /// The proposed quantity was negative.
    #[error("negative-quantity")]
    NegativeQuantity,
    /// No product with this id exists in the collection.
    #[error("unknown-product")]
    UnknownProduct,
}

/// A change that was applied to the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedChange {
    pub product_id: ProductId,
    pub old_quantity: i64,
    pub new_quantity: i64,
    /// Status recomputed from the new quantity via the shared classifier.
    pub new_status: StockStatus,
}

/// A change that was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedChange {
    pub product_id: ProductId,
    pub reason: RejectReason,
}

/// Outcome of one reconciliation batch.
///
/// Every request lands in exactly one of the two lists, in submission
/// order within each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    pub applied: Vec<AppliedChange>,
    pub rejected: Vec<RejectedChange>,
}

impl ReconciliationReport {
    /// Whether every request in the batch applied.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Apply a batch of proposed stock changes against the collection.
///
/// Applied rows get their `stock_quantity` set, `updated_at` touched, and
/// the recomputed [`StockStatus`] recorded in the report.
#[instrument(skip(products, requests), fields(batch = requests.len()))]
pub fn reconcile(products: &mut [Product], requests: &[StockChangeRequest]) -> ReconciliationReport {
    reconcile_at(products, requests, Utc::now())
}

pub(crate) fn reconcile_at(
    products: &mut [Product],
    requests: &[StockChangeRequest],
    now: DateTime<Utc>,
) -> ReconciliationReport {
    let mut seen: HashSet<ProductId> = HashSet::with_capacity(requests.len());
    let mut report = ReconciliationReport::default();

    for request in requests {
        // The first occurrence claims the id, whether or not it applies.
        if !seen.insert(request.product_id) {
            report.rejected.push(RejectedChange {
                product_id: request.product_id,
                reason: RejectReason::DuplicateInBatch,
            });
            continue;
        }

        if request.proposed_quantity < 0 {
            report.rejected.push(RejectedChange {
                product_id: request.product_id,
                reason: RejectReason::NegativeQuantity,
            });
            continue;
        }

        let Some(product) = products
            .iter_mut()
            .find(|product| product.id == request.product_id)
        else {
            report.rejected.push(RejectedChange {
                product_id: request.product_id,
                reason: RejectReason::UnknownProduct,
            });
            continue;
        };

        let old_quantity = product.stock_quantity;
        product.stock_quantity = request.proposed_quantity;
        product.updated_at = now;
        let new_status = product.stock_status();

        debug!(
            product_id = %request.product_id,
            old_quantity,
            new_quantity = request.proposed_quantity,
            status = %new_status,
            reason = request.reason.as_deref().unwrap_or("manual adjustment"),
            "stock updated"
        );

        report.applied.push(AppliedChange {
            product_id: request.product_id,
            old_quantity,
            new_quantity: request.proposed_quantity,
            new_status,
        });
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use dukkan_core::{CategoryId, LocalizedText};
    use rust_decimal::Decimal;

    fn product(id: i32, quantity: i64) -> Product {
        let created = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).single().expect("valid date");
        Product {
            id: ProductId::new(id),
            name: LocalizedText::new(format!("Item {id}")),
            description: None,
            brand: None,
            category_id: CategoryId::new(1),
            sku: None,
            tags: vec![],
            price: Decimal::from(10),
            stock_quantity: quantity,
            low_stock_threshold: None,
            average_rating: None,
            created_at: created,
            updated_at: created,
        }
    }

    fn request(id: i32, quantity: i64) -> StockChangeRequest {
        StockChangeRequest {
            product_id: ProductId::new(id),
            proposed_quantity: quantity,
            reason: None,
        }
    }

    #[test]
    fn test_applied_change_reports_old_new_and_status() {
        let mut products = vec![product(1, 50)];
        let now = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).single().expect("valid date");
        let report = reconcile_at(&mut products, &[request(1, 3)], now);

        assert_eq!(
            report.applied,
            vec![AppliedChange {
                product_id: ProductId::new(1),
                old_quantity: 50,
                new_quantity: 3,
                new_status: StockStatus::LowStock,
            }]
        );
        assert!(report.is_clean());
        assert_eq!(products[0].stock_quantity, 3);
        assert_eq!(products[0].updated_at, now);
    }

    #[test]
    fn test_negative_quantity_is_rejected_and_state_unchanged() {
        let mut products = vec![product(3, 7)];
        let before = products[0].clone();
        let report = reconcile(&mut products, &[request(3, -5)]);

        assert!(report.applied.is_empty());
        assert_eq!(
            report.rejected,
            vec![RejectedChange {
                product_id: ProductId::new(3),
                reason: RejectReason::NegativeQuantity,
            }]
        );
        assert_eq!(products[0], before);
    }

    #[test]
    fn test_unknown_product_is_rejected() {
        let mut products = vec![product(1, 5)];
        let report = reconcile(&mut products, &[request(99, 5)]);
        assert_eq!(report.rejected[0].reason, RejectReason::UnknownProduct);
    }

    #[test]
    fn test_duplicate_in_batch_keeps_first_occurrence() {
        let mut products = vec![product(1, 10)];
        let report = reconcile(&mut products, &[request(1, 50), request(1, 0)]);

        assert_eq!(report.applied.len(), 1);
        assert_eq!(report.applied[0].new_quantity, 50);
        assert_eq!(report.rejected[0].reason, RejectReason::DuplicateInBatch);
        assert_eq!(products[0].stock_quantity, 50);
    }

    #[test]
    fn test_duplicate_claim_holds_even_when_first_occurrence_rejected() {
        let mut products = vec![product(1, 10)];
        // First occurrence is invalid; the retry in the same batch still
        // counts as a duplicate.
        let report = reconcile(&mut products, &[request(1, -1), request(1, 20)]);

        assert!(report.applied.is_empty());
        assert_eq!(report.rejected[0].reason, RejectReason::NegativeQuantity);
        assert_eq!(report.rejected[1].reason, RejectReason::DuplicateInBatch);
        assert_eq!(products[0].stock_quantity, 10);
    }

    #[test]
    fn test_per_item_atomicity() {
        let mut products = vec![product(1, 10), product(2, 10)];
        let report = reconcile(&mut products, &[request(1, -5), request(2, 30)]);

        assert_eq!(report.applied.len(), 1);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(products[0].stock_quantity, 10);
        assert_eq!(products[1].stock_quantity, 30);
    }

    #[test]
    fn test_report_partitions_batch() {
        let mut products = vec![product(1, 1), product(2, 2)];
        let requests = vec![request(1, 5), request(2, -1), request(9, 5), request(1, 7)];
        let report = reconcile(&mut products, &requests);
        assert_eq!(report.applied.len() + report.rejected.len(), requests.len());
    }

    #[test]
    fn test_zero_quantity_applies_as_out_of_stock() {
        let mut products = vec![product(1, 8)];
        let report = reconcile(&mut products, &[request(1, 0)]);
        assert_eq!(report.applied[0].new_status, StockStatus::OutOfStock);
        assert_eq!(products[0].stock_quantity, 0);
    }

    #[test]
    fn test_reject_reason_codes_serialize_kebab_case() {
        let json = serde_json::to_string(&RejectReason::DuplicateInBatch).expect("serialize");
        assert_eq!(json, "\"duplicate-in-batch\"");
        assert_eq!(RejectReason::NegativeQuantity.to_string(), "negative-quantity");
    }
}
