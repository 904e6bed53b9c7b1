use serde::{Deserialize, Serialize};

use std::collections::HashSet;

use restock_core::{DomainError, DomainResult, Entity, ProductId, ShoppingListId};

use crate::config::PlanningConfig;
use crate::forecast::{auto_fill_quantity, needs_purchase};
use crate::product::ProductSnapshot;
use crate::validate;

/// Shopping list lifecycle. `Completed` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStatus {
    #[default]
    Open,
    Completed,
}

/// One product line of a shopping list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub product_id: ProductId,
    pub quantity: f64,
}

impl ShoppingListItem {
    pub fn new(product_id: ProductId, quantity: f64) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Stock increase the caller applies when a list is completed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockIncrement {
    pub product_id: ProductId,
    pub quantity: f64,
}

/// In-memory copy of a shopping list.
///
/// Holds at most one item per product; adding a product again increases its
/// quantity instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListSnapshot {
    id: ShoppingListId,
    name: String,
    #[serde(default)]
    items: Vec<ShoppingListItem>,
    #[serde(default)]
    status: ListStatus,
}

impl ShoppingListSnapshot {
    /// A new, empty, open list.
    pub fn new(id: ShoppingListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            items: Vec::new(),
            status: ListStatus::Open,
        }
    }

    /// Rebuild a list from persisted parts.
    pub fn restore(
        id: ShoppingListId,
        name: impl Into<String>,
        items: Vec<ShoppingListItem>,
        status: ListStatus,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            items,
            status,
        }
    }

    /// A new open list pre-filled with everything that needs purchase.
    pub fn auto_populated(
        id: ShoppingListId,
        name: impl Into<String>,
        products: &[ProductSnapshot],
        config: &PlanningConfig,
    ) -> DomainResult<Self> {
        let mut list = Self::new(id, name);
        for item in auto_populate(products, config) {
            list.merge_item(item.product_id, item.quantity)?;
        }
        Ok(list)
    }

    pub fn id_typed(&self) -> ShoppingListId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == ListStatus::Completed
    }

    pub fn item(&self, product_id: ProductId) -> Option<&ShoppingListItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.item(product_id).is_some()
    }

    /// Products of `catalog` not yet on this list, in catalog order.
    pub fn products_not_in_list<'a>(
        &self,
        catalog: &'a [ProductSnapshot],
    ) -> Vec<&'a ProductSnapshot> {
        catalog.iter().filter(|p| !self.contains(p.id)).collect()
    }

    fn ensure_open(&self) -> DomainResult<()> {
        if self.is_completed() {
            return Err(DomainError::invariant("cannot modify a completed shopping list"));
        }
        Ok(())
    }

    /// Check a list restored from outside: every quantity positive, one line per product.
    pub fn validate(&self) -> DomainResult<()> {
        let mut seen = HashSet::new();
        for item in &self.items {
            validate::positive("quantity", item.quantity)?;
            if !seen.insert(item.product_id) {
                return Err(DomainError::conflict(format!(
                    "duplicate line for product {} in list {}",
                    item.product_id, self.id
                )));
            }
        }
        Ok(())
    }

    /// Add `quantity` of `product_id`, merging into an existing line.
    pub fn merge_item(&mut self, product_id: ProductId, quantity: f64) -> DomainResult<()> {
        self.ensure_open()?;
        validate::positive("quantity", quantity)?;

        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(existing) => existing.quantity += quantity,
            None => self.items.push(ShoppingListItem::new(product_id, quantity)),
        }
        Ok(())
    }

    /// Close the list and hand back the stock increments to apply, once.
    pub fn complete(&mut self) -> DomainResult<Vec<StockIncrement>> {
        if self.is_completed() {
            return Err(DomainError::conflict("shopping list already completed"));
        }

        let increments: Vec<StockIncrement> = self
            .items
            .iter()
            .map(|i| StockIncrement {
                product_id: i.product_id,
                quantity: i.quantity,
            })
            .collect();
        self.status = ListStatus::Completed;

        tracing::debug!(
            list_id = %self.id,
            increments = increments.len(),
            "shopping list completed"
        );
        Ok(increments)
    }
}

impl Entity for ShoppingListSnapshot {
    type Id = ShoppingListId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// See [`ShoppingListSnapshot::merge_item`].
pub fn merge_list_item(
    list: &mut ShoppingListSnapshot,
    product_id: ProductId,
    quantity: f64,
) -> DomainResult<()> {
    list.merge_item(product_id, quantity)
}

/// See [`ShoppingListSnapshot::complete`].
pub fn mark_complete(list: &mut ShoppingListSnapshot) -> DomainResult<Vec<StockIncrement>> {
    list.complete()
}

/// Lines restoring `config.target_weeks` of coverage for every product that
/// needs purchase under `config.weeks_threshold`.
///
/// Quantities that come out zero or overflow to infinity are left off.
pub fn auto_populate(
    products: &[ProductSnapshot],
    config: &PlanningConfig,
) -> Vec<ShoppingListItem> {
    let items: Vec<ShoppingListItem> = products
        .iter()
        .filter(|p| needs_purchase(p, config.weeks_threshold))
        .filter_map(|p| {
            let quantity = auto_fill_quantity(p, config.target_weeks);
            if !quantity.is_finite() {
                tracing::warn!(product_id = %p.id, "auto-fill quantity overflowed, skipping");
                return None;
            }
            (quantity > 0.0).then(|| ShoppingListItem::new(p.id, quantity))
        })
        .collect();

    tracing::debug!(
        products = products.len(),
        items = items.len(),
        "shopping list auto-populated"
    );
    items
}
