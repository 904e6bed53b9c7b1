use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use restock_core::ProductId;

use crate::forecast::latest_price;
use crate::product::{find_product, ProductSnapshot};
use crate::shopping_list::ShoppingListSnapshot;

/// One product's share of the monthly budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity_needed: f64,
    pub unit_price: f64,
    pub line_total: f64,
}

/// Budget for covering one month of demand across a catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBudget {
    pub lines: Vec<BudgetLine>,
    pub total: f64,
}

/// Budget line for one product, or `None` when nothing has to be bought.
///
/// Products without monthly demand, or already stocked for the month, are omitted.
pub fn monthly_budget_line(product: &ProductSnapshot) -> Option<BudgetLine> {
    if product.monthly_demand <= 0.0 {
        return None;
    }

    let quantity_needed = (product.monthly_demand - product.stock_quantity).max(0.0);
    if quantity_needed == 0.0 {
        return None;
    }

    let unit_price = latest_price(&product.price_history);
    Some(BudgetLine {
        product_id: product.id,
        product_name: product.name.clone(),
        quantity_needed,
        unit_price,
        line_total: quantity_needed * unit_price,
    })
}

/// Sum of every included budget line, in catalog order.
pub fn monthly_budget(products: &[ProductSnapshot]) -> MonthlyBudget {
    let lines: Vec<BudgetLine> = products.iter().filter_map(monthly_budget_line).collect();
    let total: f64 = lines.iter().map(|l| l.line_total).sum();

    tracing::debug!(
        products = products.len(),
        lines = lines.len(),
        total,
        "monthly budget computed"
    );

    MonthlyBudget { lines, total }
}

/// Source of unit prices for shopping-list valuation.
///
/// `None` means the product is unknown (e.g. deleted after it was put on a list).
pub trait PriceLookup {
    fn unit_price(&self, product_id: &ProductId) -> Option<f64>;
}

impl PriceLookup for HashMap<ProductId, f64> {
    fn unit_price(&self, product_id: &ProductId) -> Option<f64> {
        self.get(product_id).copied()
    }
}

/// Catalog lookup: latest recorded price of the matching product.
impl PriceLookup for [ProductSnapshot] {
    fn unit_price(&self, product_id: &ProductId) -> Option<f64> {
        find_product(self, *product_id)
            .ok()
            .map(|p| latest_price(&p.price_history))
    }
}

impl PriceLookup for Vec<ProductSnapshot> {
    fn unit_price(&self, product_id: &ProductId) -> Option<f64> {
        self.as_slice().unit_price(product_id)
    }
}

/// Value of a shopping list at current prices.
///
/// Items whose product the lookup does not know contribute nothing.
pub fn shopping_list_budget<L>(list: &ShoppingListSnapshot, prices: &L) -> f64
where
    L: PriceLookup + ?Sized,
{
    list.items()
        .iter()
        .map(|item| match prices.unit_price(&item.product_id) {
            Some(price) => price * item.quantity,
            None => {
                tracing::trace!(
                    list_id = %list.id_typed(),
                    product_id = %item.product_id,
                    "skipping item with unknown product"
                );
                0.0
            }
        })
        .sum()
}
