use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use restock_core::DomainError;
use restock_forecasting::{validate, ProductSnapshot, ShoppingListSnapshot};

/// Everything a report needs, exported by the application in one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    #[serde(default)]
    pub products: Vec<ProductSnapshot>,
    #[serde(default)]
    pub shopping_lists: Vec<ShoppingListSnapshot>,
}

impl InventorySnapshot {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let snapshot: Self = serde_json::from_str(raw).context("malformed inventory snapshot")?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Reject snapshots the engine is not defined for.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut names = std::collections::HashSet::new();
        for product in &self.products {
            let name = validate::product_name(&product.name)?;
            if !names.insert(name.to_lowercase()) {
                return Err(DomainError::conflict(format!(
                    "duplicate product name: {name}"
                )));
            }
            validate::non_negative("stock_quantity", product.stock_quantity)?;
            validate::non_negative("weekly_demand", product.weekly_demand)?;
            validate::non_negative("monthly_demand", product.monthly_demand)?;
            for point in &product.price_history {
                validate::non_negative("price", point.price)?;
            }
        }
        for list in &self.shopping_lists {
            list.validate()?;
        }
        Ok(())
    }
}

pub fn load_snapshot(path: &Path) -> anyhow::Result<InventorySnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let snapshot = InventorySnapshot::from_json(&raw)
        .with_context(|| format!("failed to load {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        products = snapshot.products.len(),
        shopping_lists = snapshot.shopping_lists.len(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use restock_core::{ProductId, ShoppingListId};

    #[test]
    fn empty_document_is_an_empty_snapshot() {
        assert_eq!(InventorySnapshot::from_json("{}").unwrap(), InventorySnapshot::default());
    }

    #[test]
    fn rejects_negative_stock() {
        let id = ProductId::new();
        let raw = format!(r#"{{ "products": [{{ "id": "{id}", "name": "Eggs", "stock_quantity": -1 }}] }}"#);
        let err = InventorySnapshot::from_json(&raw).unwrap_err();
        assert!(err.to_string().contains("stock_quantity cannot be negative"));
    }

    #[test]
    fn rejects_duplicate_names() {
        let snapshot = InventorySnapshot {
            products: vec![
                ProductSnapshot::new(ProductId::new(), "Eggs"),
                ProductSnapshot::new(ProductId::new(), "eggs "),
            ],
            shopping_lists: Vec::new(),
        };
        assert!(matches!(snapshot.validate(), Err(DomainError::Conflict(_))));
    }

    #[test]
    fn rejects_list_with_non_positive_lines() {
        let product = ProductId::new();
        let list = ShoppingListId::new();
        let raw = format!(
            r#"{{ "products": [{{ "id": "{product}", "name": "Tea" }}],
                 "shopping_lists": [{{ "id": "{list}", "name": "Weekly", "items": [
                     {{ "product_id": "{product}", "quantity": -5.0 }},
                     {{ "product_id": "{product}", "quantity": 0.0 }}
                 ] }}] }}"#
        );
        let err = InventorySnapshot::from_json(&raw).unwrap_err();
        assert!(err.to_string().contains("quantity must be positive"));
    }

    #[test]
    fn rejects_list_with_repeated_product() {
        let product = ProductId::new();
        let list = ShoppingListId::new();
        let raw = format!(
            r#"{{ "shopping_lists": [{{ "id": "{list}", "name": "Weekly", "items": [
                     {{ "product_id": "{product}", "quantity": 2.0 }},
                     {{ "product_id": "{product}", "quantity": 1.0 }}
                 ] }}] }}"#
        );
        let err = InventorySnapshot::from_json(&raw).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DomainError>(),
            Some(DomainError::Conflict(_))
        ));
    }

    #[test]
    fn accepts_list_with_positive_distinct_lines() {
        let tea = ProductId::new();
        let jam = ProductId::new();
        let list = ShoppingListId::new();
        let raw = format!(
            r#"{{ "shopping_lists": [{{ "id": "{list}", "name": "Weekly", "items": [
                     {{ "product_id": "{tea}", "quantity": 2.0 }},
                     {{ "product_id": "{jam}", "quantity": 0.5 }}
                 ] }}] }}"#
        );
        let snapshot = InventorySnapshot::from_json(&raw).unwrap();
        assert_eq!(snapshot.shopping_lists[0].items().len(), 2);
    }

    #[test]
    fn malformed_json_has_context() {
        let err = InventorySnapshot::from_json("{ products: ").unwrap_err();
        assert!(format!("{err:#}").starts_with("malformed inventory snapshot"));
    }
}
