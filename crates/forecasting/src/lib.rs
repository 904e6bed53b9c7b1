//! Forecasting and replenishment-planning engine.
//!
//! Pure, stateless functions over already-loaded snapshots: shortage timing,
//! purchase necessity, latest price, budgets and auto-fill quantities. Nothing in
//! this crate performs IO or holds process-wide state; callers load snapshots,
//! invoke the engine and persist whatever the results imply.

pub mod alerts;
pub mod budget;
pub mod config;
pub mod forecast;
pub mod product;
pub mod purchase;
pub mod shopping_list;
pub mod validate;

pub use alerts::{alerts, low_stock_count, product_overview, ProductOverview, ShortageAlert};
pub use budget::{
    monthly_budget, monthly_budget_line, shopping_list_budget, BudgetLine, MonthlyBudget,
    PriceLookup,
};
pub use config::{PlanningConfig, DEFAULT_TARGET_WEEKS, DEFAULT_WEEKS_THRESHOLD};
pub use forecast::{auto_fill_quantity, latest_price, needs_purchase, predict_shortage};
pub use product::{find_product, PricePoint, ProductSnapshot};
pub use purchase::{record_purchase, PurchaseEffect, PurchaseLineItem, PurchaseRecord};
pub use shopping_list::{
    auto_populate, mark_complete, merge_list_item, ListStatus, ShoppingListItem,
    ShoppingListSnapshot, StockIncrement,
};
pub use validate::{ProductInput, ValidProduct};
