use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use restock_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

use crate::purchase::PurchaseEffect;

/// A recorded unit price. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: f64,
    pub recorded_at: DateTime<Utc>,
}

impl PricePoint {
    pub fn new(price: f64, recorded_at: DateTime<Utc>) -> Self {
        Self { price, recorded_at }
    }
}

impl ValueObject for PricePoint {}

/// In-memory copy of a tracked product, as loaded by the caller.
///
/// `price_history` is kept in recording order (oldest first). Quantities and demand
/// are expected to be non-negative; see [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub stock_quantity: f64,
    #[serde(default)]
    pub weekly_demand: f64,
    #[serde(default)]
    pub monthly_demand: f64,
    #[serde(default)]
    pub price_history: Vec<PricePoint>,
}

impl ProductSnapshot {
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            stock_quantity: 0.0,
            weekly_demand: 0.0,
            monthly_demand: 0.0,
            price_history: Vec::new(),
        }
    }

    pub fn with_stock(mut self, stock_quantity: f64) -> Self {
        self.stock_quantity = stock_quantity;
        self
    }

    pub fn with_weekly_demand(mut self, weekly_demand: f64) -> Self {
        self.weekly_demand = weekly_demand;
        self
    }

    pub fn with_monthly_demand(mut self, monthly_demand: f64) -> Self {
        self.monthly_demand = monthly_demand;
        self
    }

    pub fn with_price(mut self, price: f64, recorded_at: DateTime<Utc>) -> Self {
        self.price_history.push(PricePoint::new(price, recorded_at));
        self
    }

    /// Apply both writes of a purchase to this snapshot in one step.
    ///
    /// Mirrors what the caller persists atomically: the stock increase and the new
    /// price point always travel together.
    pub fn apply_purchase(&mut self, effect: &PurchaseEffect) {
        self.stock_quantity += effect.stock_delta;
        self.price_history.push(effect.price_point);
    }

    /// Increase stock by a completed shopping-list line.
    pub fn restock(&mut self, quantity: f64) {
        self.stock_quantity += quantity;
    }
}

impl Entity for ProductSnapshot {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Look up a product in a loaded catalog.
///
/// Callers resolve ids through this before recording a purchase or adding a list
/// line, so unknown products surface as `NotFound` instead of dangling references.
pub fn find_product(
    catalog: &[ProductSnapshot],
    product_id: ProductId,
) -> DomainResult<&ProductSnapshot> {
    catalog
        .iter()
        .find(|p| p.id == product_id)
        .ok_or_else(DomainError::not_found)
}
