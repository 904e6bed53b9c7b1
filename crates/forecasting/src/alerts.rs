use serde::{Deserialize, Serialize};

use restock_core::ProductId;

use crate::forecast::{latest_price, needs_purchase, predict_shortage};
use crate::product::ProductSnapshot;

/// A product whose coverage is below the alert threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortageAlert {
    pub product_id: ProductId,
    pub name: String,
    pub stock_quantity: f64,
    pub weeks_until_shortage: f64,
}

/// Per-product summary for listings and API consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOverview {
    pub product_id: ProductId,
    pub name: String,
    pub stock_quantity: f64,
    pub weekly_demand: f64,
    pub monthly_demand: f64,
    pub weeks_until_shortage: Option<f64>,
    pub needs_purchase: bool,
    pub latest_price: f64,
}

pub fn product_overview(product: &ProductSnapshot, weeks_threshold: f64) -> ProductOverview {
    ProductOverview {
        product_id: product.id,
        name: product.name.clone(),
        stock_quantity: product.stock_quantity,
        weekly_demand: product.weekly_demand,
        monthly_demand: product.monthly_demand,
        weeks_until_shortage: predict_shortage(product),
        needs_purchase: needs_purchase(product, weeks_threshold),
        latest_price: latest_price(&product.price_history),
    }
}

/// Every product that needs purchase, in catalog order.
pub fn alerts(products: &[ProductSnapshot], weeks_threshold: f64) -> Vec<ShortageAlert> {
    let alerts: Vec<ShortageAlert> = products
        .iter()
        .filter(|p| needs_purchase(p, weeks_threshold))
        .filter_map(|p| {
            predict_shortage(p).map(|weeks| ShortageAlert {
                product_id: p.id,
                name: p.name.clone(),
                stock_quantity: p.stock_quantity,
                weeks_until_shortage: weeks,
            })
        })
        .collect();

    tracing::debug!(
        products = products.len(),
        alerts = alerts.len(),
        weeks_threshold,
        "shortage alerts computed"
    );
    alerts
}

pub fn low_stock_count(products: &[ProductSnapshot], weeks_threshold: f64) -> usize {
    products
        .iter()
        .filter(|p| needs_purchase(p, weeks_threshold))
        .count()
}
