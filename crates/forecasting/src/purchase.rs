use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use restock_core::{DomainResult, ProductId, ValueObject};

use crate::product::PricePoint;
use crate::validate;

/// One purchase event as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PurchaseLineItem {
    pub quantity: f64,
    pub price_per_unit: f64,
}

impl PurchaseLineItem {
    pub fn new(quantity: f64, price_per_unit: f64) -> Self {
        Self {
            quantity,
            price_per_unit,
        }
    }

    pub fn total_price(&self) -> f64 {
        self.quantity * self.price_per_unit
    }

    /// Quantity must be positive, unit price non-negative.
    pub fn validate(&self) -> DomainResult<()> {
        validate::positive("quantity", self.quantity)?;
        validate::non_negative("price_per_unit", self.price_per_unit)?;
        Ok(())
    }
}

impl ValueObject for PurchaseLineItem {}

/// Purchase history row the caller persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub product_id: ProductId,
    pub quantity: f64,
    pub price_per_unit: f64,
    pub total_price: f64,
    pub purchased_at: DateTime<Utc>,
}

/// Everything a purchase writes, to be applied atomically by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseEffect {
    pub record: PurchaseRecord,
    /// New price-history entry (`price_per_unit` at purchase time).
    pub price_point: PricePoint,
    /// Amount to add to the product's stock.
    pub stock_delta: f64,
}

/// Compute the writes implied by buying `line` for `product_id` at `purchased_at`.
pub fn record_purchase(
    product_id: ProductId,
    line: PurchaseLineItem,
    purchased_at: DateTime<Utc>,
) -> DomainResult<PurchaseEffect> {
    line.validate()?;

    let total_price = line.total_price();
    tracing::debug!(
        product_id = %product_id,
        quantity = line.quantity,
        price_per_unit = line.price_per_unit,
        total_price,
        "purchase computed"
    );

    Ok(PurchaseEffect {
        record: PurchaseRecord {
            product_id,
            quantity: line.quantity,
            price_per_unit: line.price_per_unit,
            total_price,
            purchased_at,
        },
        price_point: PricePoint::new(line.price_per_unit, purchased_at),
        stock_delta: line.quantity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use restock_core::DomainError;

    #[test]
    fn total_price_is_quantity_times_unit_price() {
        assert_eq!(PurchaseLineItem::new(4.0, 2.5).total_price(), 10.0);
    }

    #[test]
    fn record_purchase_pairs_price_point_with_stock_delta() {
        let product_id = ProductId::new();
        let at = Utc::now();
        let effect = record_purchase(product_id, PurchaseLineItem::new(3.0, 1.5), at).unwrap();

        assert_eq!(effect.record.product_id, product_id);
        assert_eq!(effect.record.total_price, 4.5);
        assert_eq!(effect.record.purchased_at, at);
        assert_eq!(effect.price_point, PricePoint::new(1.5, at));
        assert_eq!(effect.stock_delta, 3.0);
    }

    #[test]
    fn free_items_are_allowed() {
        let effect =
            record_purchase(ProductId::new(), PurchaseLineItem::new(2.0, 0.0), Utc::now()).unwrap();
        assert_eq!(effect.record.total_price, 0.0);
    }

    #[test]
    fn rejects_non_positive_quantity() {
        for quantity in [0.0, -1.0] {
            let err = record_purchase(
                ProductId::new(),
                PurchaseLineItem::new(quantity, 1.0),
                Utc::now(),
            )
            .unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
    }

    #[test]
    fn rejects_negative_price() {
        let err = record_purchase(
            ProductId::new(),
            PurchaseLineItem::new(1.0, -0.01),
            Utc::now(),
        )
        .unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("price_per_unit")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
