use core::str::FromStr;

use serde::Serialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use restock_core::ShoppingListId;
use restock_forecasting::{
    alerts, auto_populate, low_stock_count, monthly_budget, product_overview,
    shopping_list_budget, ListStatus, PlanningConfig, ProductOverview, ShoppingListItem,
};

use crate::snapshot::InventorySnapshot;

/// Which view of the snapshot to print.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ReportKind {
    /// Every product with its forecast and latest price.
    #[default]
    Overview,
    /// Products below the alert threshold.
    Alerts,
    /// Monthly budget lines and total.
    Budget,
    /// Items an auto-populated shopping list would contain.
    Autofill,
    /// Shopping lists with their current value.
    Lists,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("unknown report '{0}' (expected overview, alerts, budget, autofill or lists)")]
    UnknownReport(String),

    #[error("failed to encode report: {0}")]
    Encode(String),
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overview" | "products" => Ok(Self::Overview),
            "alerts" => Ok(Self::Alerts),
            "budget" => Ok(Self::Budget),
            "autofill" => Ok(Self::Autofill),
            "lists" => Ok(Self::Lists),
            other => Err(ReportError::UnknownReport(other.to_string())),
        }
    }
}

#[derive(Debug, Serialize)]
struct OverviewReport {
    low_stock_count: usize,
    products: Vec<ProductOverview>,
}

#[derive(Debug, Serialize)]
struct ListReport<'a> {
    id: ShoppingListId,
    name: &'a str,
    status: ListStatus,
    items: &'a [ShoppingListItem],
    total_budget: f64,
}

/// Run one report over `snapshot`.
pub fn render(
    kind: ReportKind,
    snapshot: &InventorySnapshot,
    config: &PlanningConfig,
) -> Result<JsonValue, ReportError> {
    let products = snapshot.products.as_slice();
    tracing::debug!(?kind, products = products.len(), "rendering report");

    let value = match kind {
        ReportKind::Overview => to_json(&OverviewReport {
            low_stock_count: low_stock_count(products, config.weeks_threshold),
            products: products
                .iter()
                .map(|p| product_overview(p, config.weeks_threshold))
                .collect(),
        }),
        ReportKind::Alerts => to_json(&alerts(products, config.weeks_threshold)),
        ReportKind::Budget => to_json(&monthly_budget(products)),
        ReportKind::Autofill => to_json(&auto_populate(products, config)),
        ReportKind::Lists => {
            let lists: Vec<ListReport<'_>> = snapshot
                .shopping_lists
                .iter()
                .map(|list| ListReport {
                    id: list.id_typed(),
                    name: list.name(),
                    status: list.status(),
                    items: list.items(),
                    total_budget: shopping_list_budget(list, products),
                })
                .collect();
            to_json(&lists)
        }
    }?;

    Ok(value)
}

fn to_json<T: Serialize>(value: &T) -> Result<JsonValue, ReportError> {
    serde_json::to_value(value).map_err(|e| ReportError::Encode(e.to_string()))
}
