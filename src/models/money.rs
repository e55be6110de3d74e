//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that the allocator never
//! accumulates floating-point error. Decimal values are converted once, on
//! entry, using two-decimal half-away-from-zero rounding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::error::{WaterfallError, WaterfallResult};

/// Nudge applied before rounding so exact halves stored slightly low in
/// binary (e.g. 1.005) still round up.
const ROUNDING_EPSILON: f64 = 1e-12;

/// Largest magnitude, in whole currency units, accepted from decimal input
///
/// Ten trillion keeps every amount, and the sum of many thousands of them,
/// well inside `i64` cents.
pub const MAX_DECIMAL: f64 = 1e13;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
///
/// Serializes as a decimal number (`12.34`) so plan files and allocation
/// output read naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use paycheck_waterfall::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from dollars and cents
    pub const fn from_dollars_cents(dollars: i64, cents: i64) -> Self {
        Self(dollars * 100 + cents)
    }

    /// Create a Money amount from a decimal value, rounded to the nearest cent
    ///
    /// Halves round away from zero after a `1e-12` nudge, so `0.125`
    /// becomes `0.13` and `1.005` becomes `1.01`.
    ///
    /// Meant for literals and already-checked values: non-finite input
    /// becomes zero and out-of-range input saturates. Use
    /// [`Money::try_from_decimal`] for anything read from a user.
    ///
    /// # Examples
    /// ```
    /// use paycheck_waterfall::models::Money;
    /// assert_eq!(Money::from_decimal(0.125).cents(), 13);
    /// ```
    pub fn from_decimal(value: f64) -> Self {
        Self(((value + ROUNDING_EPSILON) * 100.0).round() as i64)
    }

    /// Create a Money amount from a decimal value, rejecting NaN, infinities,
    /// and magnitudes above [`MAX_DECIMAL`]
    pub fn try_from_decimal(value: f64) -> WaterfallResult<Self> {
        if !value.is_finite() {
            return Err(WaterfallError::Parse(format!(
                "Amount must be a finite number, got {}",
                value
            )));
        }

        if value.abs() > MAX_DECIMAL {
            return Err(WaterfallError::Parse(format!(
                "Amount {} is out of range (limit is {})",
                value, MAX_DECIMAL
            )));
        }

        Ok(Self::from_decimal(value))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a decimal value
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add, returning `None` on overflow
    pub fn checked_add(self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract, returning `None` on overflow
    pub fn checked_sub(self, other: Money) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Take `percent` percent of this amount, rounded to the nearest cent
    ///
    /// Fails when the percentage is not finite or the result is out of range.
    pub fn percent(&self, percent: f64) -> WaterfallResult<Self> {
        Self::try_from_decimal((percent / 100.0) * self.as_decimal())
    }

    /// Scale this amount by `numerator / denominator`, rounding half away
    /// from zero to the nearest cent
    ///
    /// Returns zero when `denominator` is zero.
    pub fn scale(&self, numerator: Money, denominator: Money) -> Self {
        if denominator.is_zero() {
            return Self::zero();
        }

        let product = self.0 as i128 * numerator.0 as i128;
        let divisor = denominator.0 as i128;
        let quotient = product / divisor;
        let remainder = product % divisor;

        // Round the truncated quotient away from zero when the remainder is
        // at least half the divisor.
        let quotient = if 2 * remainder.abs() >= divisor.abs() {
            if (product < 0) == (divisor < 0) {
                quotient + 1
            } else {
                quotient - 1
            }
        } else {
            quotient
        };

        Self(quotient as i64)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "1,250.00".
    /// More than two decimal places are rounded, not truncated.
    pub fn parse(s: &str) -> WaterfallResult<Self> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        let rest = rest.strip_prefix('$').unwrap_or(rest).replace(',', "");

        let value: f64 = rest
            .parse()
            .map_err(|_| WaterfallError::Parse(format!("Invalid money format: {}", s)))?;

        Self::try_from_decimal(if negative { -value } else { value })
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl TryFrom<f64> for Money {
    type Error = WaterfallError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_from_decimal(value)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> Self {
        money.as_decimal()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
