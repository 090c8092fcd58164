//! Money calculation utilities using rust_decimal for precision
//!
//! Prices are stored as `f64` (the persisted JSON shape) and converted to
//! `Decimal` for every sum and product, so totals and formatting are exact.

use rust_decimal::prelude::*;

/// Maximum allowed unit price (R$ 1.000.000)
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Finite, non-negative and within [`MAX_PRICE`]
#[inline]
pub fn is_valid_price(value: f64) -> bool {
    value.is_finite() && (0.0..=MAX_PRICE).contains(&value)
}

/// Convert a stored price to `Decimal` (non-finite or out-of-range → 0)
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::warn!(value, "Price not representable as Decimal, counted as zero");
        Decimal::ZERO
    })
}

/// price × quantity, saturating at `Decimal::MAX`
pub fn line_total(price: f64, quantity: u32) -> Decimal {
    to_decimal(price)
        .checked_mul(Decimal::from(quantity))
        .unwrap_or(Decimal::MAX)
}

/// Saturating sum of decimal amounts
pub fn sum<I: IntoIterator<Item = Decimal>>(amounts: I) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, |acc, amount| {
        acc.checked_add(amount).unwrap_or(Decimal::MAX)
    })
}
