//! Input checks shared by the mutating operations.
//!
//! Text-taking parsers turn raw user input into numbers and report
//! "must be a valid number"; the `check_*` functions enforce ranges.

use crate::error::{InventoryError, Result};
use crate::models::round2;

/// Trim `value`, failing with `empty_msg` if nothing is left.
pub fn require_text(value: &str, empty_msg: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InventoryError::validation(empty_msg));
    }
    Ok(trimmed.to_string())
}

pub fn parse_id(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| InventoryError::validation("Product ID must be a valid number"))
}

pub fn parse_quantity(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| InventoryError::validation("Quantity must be a valid number"))
}

pub fn parse_amount(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| InventoryError::validation("Amount must be a valid number"))
}

pub fn parse_price(raw: &str) -> Result<f64> {
    raw.trim()
        .parse()
        .map_err(|_| InventoryError::validation("Price must be a valid number"))
}

pub fn check_quantity(quantity: i64) -> Result<u64> {
    u64::try_from(quantity).map_err(|_| InventoryError::validation("Quantity cannot be negative"))
}

/// Validate a price and round it to cents.
pub fn check_price(price: f64) -> Result<f64> {
    if !price.is_finite() {
        return Err(InventoryError::validation("Price must be a valid number"));
    }
    if price < 0.0 {
        return Err(InventoryError::validation("Price cannot be negative"));
    }
    Ok(round2(price))
}

/// Validate a stock adjustment; `verb` is "increase" or "decrease".
pub fn check_amount(amount: i64, verb: &str) -> Result<u64> {
    if amount <= 0 {
        return Err(InventoryError::validation(format!(
            "Amount to {verb} must be positive"
        )));
    }
    Ok(amount as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg<T: std::fmt::Debug>(r: Result<T>) -> String {
        r.unwrap_err().to_string()
    }

    #[test]
    fn require_text_trims() {
        assert_eq!(require_text("  Widget ", "x").unwrap(), "Widget");
        assert_eq!(msg(require_text(" \t", "Category cannot be empty")), "Category cannot be empty");
    }

    #[test]
    fn parsers_reject_non_numeric() {
        assert_eq!(msg(parse_quantity("ten")), "Quantity must be a valid number");
        assert_eq!(msg(parse_quantity("2.5")), "Quantity must be a valid number");
        assert_eq!(msg(parse_price("abc")), "Price must be a valid number");
        assert_eq!(msg(parse_id("-1")), "Product ID must be a valid number");
        assert_eq!(msg(parse_amount("")), "Amount must be a valid number");
        assert_eq!(parse_quantity(" 7 ").unwrap(), 7);
        assert_eq!(parse_quantity("-3").unwrap(), -3);
    }

    #[test]
    fn negative_values_rejected() {
        assert_eq!(msg(check_quantity(-1)), "Quantity cannot be negative");
        assert_eq!(msg(check_price(-0.01)), "Price cannot be negative");
        assert_eq!(check_quantity(0).unwrap(), 0);
    }

    #[test]
    fn non_finite_price_rejected() {
        assert_eq!(msg(check_price(f64::NAN)), "Price must be a valid number");
        assert_eq!(msg(check_price(f64::INFINITY)), "Price must be a valid number");
        assert_eq!(msg(parse_price("inf").and_then(check_price)), "Price must be a valid number");
    }

    #[test]
    fn price_rounded_to_cents() {
        assert!((check_price(9.999).unwrap() - 10.0).abs() < 1e-9);
        assert!((check_price(2.345_1).unwrap() - 2.35).abs() < 1e-9);
    }

    #[test]
    fn amount_must_be_positive() {
        assert_eq!(msg(check_amount(0, "increase")), "Amount to increase must be positive");
        assert_eq!(msg(check_amount(-4, "decrease")), "Amount to decrease must be positive");
        assert_eq!(check_amount(3, "increase").unwrap(), 3);
    }
}
