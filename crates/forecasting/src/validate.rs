//! Input checks for callers.
//!
//! The engine assumes non-negative, finite inputs and does not re-check them. The
//! application layer runs these before building snapshots or calling into the
//! engine, and turns the resulting [`DomainError::Validation`] into user feedback.

use serde::{Deserialize, Serialize};

use restock_core::{DomainError, DomainResult};

/// Trimmed, non-empty product name.
pub fn product_name(name: &str) -> DomainResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("product name cannot be empty"));
    }
    Ok(trimmed)
}

/// Finite and `>= 0` (stock, demand, prices).
pub fn non_negative(field: &str, value: f64) -> DomainResult<f64> {
    if !value.is_finite() {
        return Err(DomainError::validation(format!("{field} must be a finite number")));
    }
    if value < 0.0 {
        return Err(DomainError::validation(format!("{field} cannot be negative")));
    }
    Ok(value)
}

/// Finite and `> 0` (purchase and list quantities).
pub fn positive(field: &str, value: f64) -> DomainResult<f64> {
    if !(value.is_finite() && value > 0.0) {
        return Err(DomainError::validation(format!("{field} must be positive")));
    }
    Ok(value)
}

/// Parse a user-supplied number. Blank input means zero.
pub fn parse_quantity(field: &str, raw: &str) -> DomainResult<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse::<f64>()
        .map_err(|e| DomainError::validation(format!("{field}: {e}")))
}

/// Raw product form input, before it becomes a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub stock_quantity: String,
    #[serde(default)]
    pub weekly_demand: String,
    #[serde(default)]
    pub monthly_demand: String,
    /// Optional initial price; blank means no price history yet.
    #[serde(default)]
    pub price: String,
}

/// Product fields after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidProduct {
    pub name: String,
    pub stock_quantity: f64,
    pub weekly_demand: f64,
    pub monthly_demand: f64,
    pub initial_price: Option<f64>,
}

impl ProductInput {
    pub fn validate(&self) -> DomainResult<ValidProduct> {
        let name = product_name(&self.name)?.to_string();
        let stock_quantity = non_negative(
            "stock_quantity",
            parse_quantity("stock_quantity", &self.stock_quantity)?,
        )?;
        let weekly_demand = non_negative(
            "weekly_demand",
            parse_quantity("weekly_demand", &self.weekly_demand)?,
        )?;
        let monthly_demand = non_negative(
            "monthly_demand",
            parse_quantity("monthly_demand", &self.monthly_demand)?,
        )?;

        let initial_price = if self.price.trim().is_empty() {
            None
        } else {
            Some(non_negative("price", parse_quantity("price", &self.price)?)?)
        };

        Ok(ValidProduct {
            name,
            stock_quantity,
            weekly_demand,
            monthly_demand,
            initial_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(stock: &str, weekly: &str, monthly: &str, price: &str) -> ProductInput {
        ProductInput {
            name: "  Beans ".to_string(),
            stock_quantity: stock.to_string(),
            weekly_demand: weekly.to_string(),
            monthly_demand: monthly.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn product_name_is_trimmed() {
        assert_eq!(product_name("  Milk  ").unwrap(), "Milk");
    }

    #[test]
    fn product_name_rejects_blank() {
        assert!(matches!(product_name("   "), Err(DomainError::Validation(_))));
    }

    #[test]
    fn non_negative_accepts_zero_and_rejects_negative() {
        assert_eq!(non_negative("stock_quantity", 0.0).unwrap(), 0.0);
        assert!(non_negative("stock_quantity", -0.5).is_err());
        assert!(non_negative("stock_quantity", f64::INFINITY).is_err());
    }

    #[test]
    fn positive_rejects_zero() {
        assert!(positive("quantity", 0.0).is_err());
        assert!(positive("quantity", f64::NAN).is_err());
        assert_eq!(positive("quantity", 0.25).unwrap(), 0.25);
    }

    #[test]
    fn parse_quantity_treats_blank_as_zero() {
        assert_eq!(parse_quantity("weekly_demand", "  ").unwrap(), 0.0);
    }

    #[test]
    fn parse_quantity_rejects_garbage() {
        match parse_quantity("weekly_demand", "ten").unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.starts_with("weekly_demand")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn product_input_validates_all_fields() {
        let valid = input("12", "3.5", "14", "").validate().unwrap();
        assert_eq!(
            valid,
            ValidProduct {
                name: "Beans".to_string(),
                stock_quantity: 12.0,
                weekly_demand: 3.5,
                monthly_demand: 14.0,
                initial_price: None,
            }
        );
    }

    #[test]
    fn product_input_keeps_initial_price() {
        let valid = input("0", "0", "0", "2.75").validate().unwrap();
        assert_eq!(valid.initial_price, Some(2.75));
    }

    #[test]
    fn product_input_rejects_negative_demand() {
        let err = input("1", "-2", "0", "").validate().unwrap_err();
        assert_eq!(err, DomainError::validation("weekly_demand cannot be negative"));
    }

    #[test]
    fn product_input_rejects_negative_price() {
        assert!(input("1", "1", "1", "-3").validate().is_err());
    }
}
