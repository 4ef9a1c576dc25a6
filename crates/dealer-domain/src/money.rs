//! Money type for prices and deal values.
//!
//! Amounts are stored in the smallest unit of the currency (won for KRW,
//! cents for USD) to avoid floating-point precision issues.

use crate::error::DealerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// South Korean won. The mock dealership prices in won.
    #[default]
    KRW,
    USD,
    EUR,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "KRW").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::KRW => "KRW",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "₩").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::KRW => "\u{20a9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::KRW | Currency::JPY => 0,
            Currency::USD | Currency::EUR => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "KRW" => Some(Currency::KRW),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "JPY" => Some(Currency::JPY),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// The amount is the smallest currency unit as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a won amount, the default currency of the mock data.
    pub fn krw(amount: i64) -> Self {
        Self::new(amount, Currency::KRW)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Try to add another Money value.
    ///
    /// Errors with `CurrencyMismatch` or `Overflow`.
    pub fn try_add(&self, other: &Money) -> Result<Money, DealerError> {
        self.check_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(DealerError::Overflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Result<Money, DealerError> {
        self.check_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(DealerError::Overflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// Try to multiply by a scalar.
    pub fn try_multiply(&self, factor: i64) -> Result<Money, DealerError> {
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or(DealerError::Overflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// Try to sum an iterator of Money values.
    ///
    /// Errors with `CurrencyMismatch` or `Overflow`.
    pub fn try_sum<'a>(
        iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Result<Money, DealerError> {
        let mut total = Money::zero(currency);
        for m in iter {
            total = total.try_add(m)?;
        }
        Ok(total)
    }

    fn check_currency(&self, other: &Money) -> Result<(), DealerError> {
        if self.currency != other.currency {
            return Err(DealerError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            });
        }
        Ok(())
    }

    /// Format as a display string with thousands grouping (e.g., "₩59,450,000").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format the amount without symbol (e.g., "59,450,000").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_i64.pow(places);
        let whole = self.amount / divisor;
        let fraction = (self.amount % divisor).abs();

        let grouped = group_thousands(whole);
        if places == 0 {
            grouped
        } else {
            format!("{}.{:0width$}", grouped, fraction, width = places as usize)
        }
    }
}

/// Insert comma separators into an integer (e.g., 59450000 -> "59,450,000").
fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    let first_group = digits.len() % 3;
    if first_group > 0 {
        out.push_str(&digits[..first_group]);
        if digits.len() > first_group {
            out.push(',');
        }
    }
    for (i, chunk) in digits[first_group..].as_bytes().chunks(3).enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(std::str::from_utf8(chunk).unwrap_or(""));
    }
    out
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics on currency mismatch or overflow. Use `try_add` for fallible addition.
    fn add(self, other: Money) -> Money {
        self.try_add(&other).expect("Currency mismatch in addition")
    }
}

impl Sub for Money {
    type Output = Money;

    /// # Panics
    /// Panics on currency mismatch or overflow.
    fn sub(self, other: Money) -> Money {
        self.try_subtract(&other)
            .expect("Currency mismatch in subtraction")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::krw(50_000_000);
        assert_eq!(m.amount, 50_000_000);
        assert_eq!(m.currency, Currency::KRW);
    }

    #[test]
    fn test_money_display_grouping() {
        assert_eq!(Money::krw(59_450_000).display(), "\u{20a9}59,450,000");
        assert_eq!(Money::krw(800_000).display(), "\u{20a9}800,000");
        assert_eq!(Money::krw(0).display(), "\u{20a9}0");
        assert_eq!(Money::krw(999).display(), "\u{20a9}999");
        assert_eq!(Money::krw(1_000).display(), "\u{20a9}1,000");
    }

    #[test]
    fn test_money_display_decimal_currency() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");

        let m = Money::new(1_234_500, Currency::USD);
        assert_eq!(m.display(), "$12,345.00");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::krw(50_000_000);
        let b = Money::krw(8_000_000);
        assert_eq!((a + b).amount, 58_000_000);
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::krw(1_000_000);
        let b = Money::krw(300_000);
        assert_eq!((a - b).amount, 700_000);
    }

    #[test]
    fn test_try_add_currency_mismatch() {
        let krw = Money::krw(1000);
        let usd = Money::new(1000, Currency::USD);
        assert!(matches!(
            krw.try_add(&usd),
            Err(DealerError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_try_add_overflow() {
        let a = Money::krw(i64::MAX);
        let b = Money::krw(1);
        assert!(matches!(a.try_add(&b), Err(DealerError::Overflow)));
    }

    #[test]
    fn test_try_subtract_currency_mismatch() {
        let krw = Money::krw(1000);
        let usd = Money::new(1000, Currency::USD);
        assert!(matches!(
            krw.try_subtract(&usd),
            Err(DealerError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_try_multiply() {
        let monthly = Money::krw(1_200_000);
        assert_eq!(monthly.try_multiply(12).unwrap().amount, 14_400_000);
    }

    #[test]
    fn test_try_multiply_overflow() {
        let m = Money::krw(i64::MAX / 2);
        assert!(matches!(m.try_multiply(3), Err(DealerError::Overflow)));
    }

    #[test]
    fn test_try_sum() {
        let values = vec![Money::krw(250_000), Money::krw(400_000)];
        let total = Money::try_sum(values.iter(), Currency::KRW).unwrap();
        assert_eq!(total.amount, 650_000);
    }

    #[test]
    fn test_try_sum_empty() {
        let values: Vec<Money> = vec![];
        let total = Money::try_sum(values.iter(), Currency::KRW).unwrap();
        assert!(total.is_zero());
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_add_panics_on_mismatch() {
        let _ = Money::krw(1000) + Money::new(1000, Currency::USD);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("KRW"), Some(Currency::KRW));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
