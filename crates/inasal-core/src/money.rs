//! # Money Module
//!
//! Provides the `Money` type for handling peso amounts exactly.
//!
//! ## Why Integer Centavos?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A cart total is a long chain of additions:                             │
//! │    base + variation + Σ(add-on × qty), then × line quantity, then Σ    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    ₱99.50 = 9950 centavos. Every step above is exact.                  │
//! │    Two-decimal formatting happens only when displayed.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use inasal_core::money::Money;
//!
//! let price = Money::from_cents(9950); // ₱99.50
//! let doubled = price * 2;             // ₱199.00
//! assert_eq!(doubled.cents(), 19900);
//! assert_eq!(doubled.to_string(), "₱199.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (centavos).
///
/// ## Design Decisions
/// - **i64 (signed)**: Savings and differences can be negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money Flows
/// ```text
/// MenuItem.effective_price ──┐
/// Variation.price ───────────┼──► unit price (frozen on the cart line)
/// AddOn.price × qty ─────────┘          │
///                                       ▼
///                         line total = unit × quantity ──► cart total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    ///
    /// ## Example
    /// ```rust
    /// use inasal_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // ₱10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole pesos.
    ///
    /// ## Example
    /// ```rust
    /// use inasal_core::money::Money;
    ///
    /// assert_eq!(Money::from_pesos(150).cents(), 15000);
    /// ```
    #[inline]
    pub const fn from_pesos(pesos: i64) -> Self {
        Money(pesos * 100)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole peso portion (truncated toward zero).
    ///
    /// ## Example
    /// ```rust
    /// use inasal_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).pesos(), 10);
    /// assert_eq!(Money::from_cents(-550).pesos(), -5);
    /// ```
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavo portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// Cart and pricing code goes through [`Money::checked_multiply_quantity`]
    /// so that an overflow is reported rather than clamped.
    ///
    /// ## Example
    /// ```rust
    /// use inasal_core::money::Money;
    ///
    /// let add_on = Money::from_pesos(15); // Extra Rice
    /// assert_eq!(add_on.multiply_quantity(2).cents(), 3000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Multiplies money by a quantity. `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use inasal_core::money::Money;
    ///
    /// assert_eq!(Money::from_pesos(15).checked_multiply_quantity(2), Some(Money::from_pesos(30)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_multiply_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts. `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Returns `part` as a whole percentage of `self`, rounded half up.
    ///
    /// Used for "20% OFF" badges. Returns `None` when `self` is not positive.
    ///
    /// ## Example
    /// ```rust
    /// use inasal_core::money::Money;
    ///
    /// let base = Money::from_pesos(120);
    /// assert_eq!(base.percent_of(Money::from_pesos(20)), Some(17)); // 16.67%
    /// ```
    pub fn percent_of(&self, part: Money) -> Option<i64> {
        if self.0 <= 0 {
            return None;
        }
        let scaled = part.0 as i128 * 100;
        let whole = self.0 as i128;
        Some(((scaled * 2 + whole) / (whole * 2)) as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Displays pesos with two decimals, e.g. `₱150.00`.
///
/// The storefront config can render other symbols; this is the brand default.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₱{}.{:02}", sign, self.pesos().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations). Saturates like
/// [`Money::multiply_quantity`].
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Saturating sum.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| Money(acc.0.saturating_add(m.0)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.pesos(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "₱10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "₱5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-₱5.50");
        assert_eq!(format!("{}", Money::zero()), "₱0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_pesos(10);
        let b = Money::from_pesos(5);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let mut c = a;
        c += b;
        c -= Money::from_cents(1);
        assert_eq!(c.cents(), 1499);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 50].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 400);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_checked_arithmetic() {
        let big = Money::from_cents(i64::MAX / 2 + 1);

        assert_eq!(big.checked_multiply_quantity(2), None);
        assert_eq!(big.checked_add(big), None);
        assert_eq!(
            Money::from_pesos(15).checked_add(Money::from_pesos(5)),
            Some(Money::from_pesos(20))
        );

        // the unchecked forms clamp instead of wrapping
        assert_eq!(big.multiply_quantity(2).cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MIN) * 2).cents(), i64::MIN);
        let total: Money = [big, big].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_percent_of() {
        let base = Money::from_pesos(100);
        assert_eq!(base.percent_of(Money::from_pesos(20)), Some(20));
        assert_eq!(base.percent_of(Money::from_cents(1250)), Some(13)); // 12.5 rounds up
        assert_eq!(Money::zero().percent_of(Money::from_pesos(1)), None);
    }

    /// 0.1 + 0.2 in centavos is exactly 0.3
    #[test]
    fn test_no_float_drift() {
        let total = Money::from_cents(10) + Money::from_cents(20);
        assert_eq!(total, Money::from_cents(30));
    }
}
