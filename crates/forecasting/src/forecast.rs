//! Demand-average forecasting primitives.
//!
//! All functions are total over non-negative inputs. "No demand" and "no price"
//! are answered with `None` / `0.0`, never with an error.

use crate::product::{PricePoint, ProductSnapshot};

/// Weeks of stock coverage left at the current weekly demand.
///
/// `None` when `weekly_demand` is zero: without demand no shortage can be predicted.
pub fn predict_shortage(product: &ProductSnapshot) -> Option<f64> {
    if product.weekly_demand == 0.0 {
        return None;
    }
    Some(product.stock_quantity / product.weekly_demand)
}

/// Whether coverage has dropped strictly below `weeks_threshold`.
///
/// Products without demand never need purchase.
pub fn needs_purchase(product: &ProductSnapshot, weeks_threshold: f64) -> bool {
    match predict_shortage(product) {
        Some(weeks_remaining) => weeks_remaining < weeks_threshold,
        None => false,
    }
}

/// Price of the most recently recorded point, or `0.0` for an empty history.
///
/// Among points sharing the maximum `recorded_at`, the one appended last wins.
pub fn latest_price(price_history: &[PricePoint]) -> f64 {
    let mut latest: Option<&PricePoint> = None;
    for point in price_history {
        match latest {
            Some(current) if point.recorded_at < current.recorded_at => {}
            _ => latest = Some(point),
        }
    }
    latest.map(|p| p.price).unwrap_or(0.0)
}

/// Quantity needed to reach `target_weeks` of coverage, clamped at zero.
///
/// Pure arithmetic: callers decide whether the product needs purchase at all.
pub fn auto_fill_quantity(product: &ProductSnapshot, target_weeks: f64) -> f64 {
    (target_weeks * product.weekly_demand - product.stock_quantity).max(0.0)
}
