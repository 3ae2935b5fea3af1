//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floating point prices:                                            │
//! │    0.65 × 5 = 3.2500000000000004                                        │
//! │    3.25 + 0.55 = 3.8000000000000003                                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    65 × 5 = 325 cents, 325 + 55 = 380 cents → "3.80"                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use panaderia_core::money::Money;
//!
//! let chapata = Money::from_cents(65);
//! let subtotal = chapata * 5;
//! assert_eq!(subtotal.to_string(), "3.25");
//! assert_eq!(subtotal.with_symbol("€"), "3.25 €");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic stays closed under subtraction even though
///   prices on the counter are never negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Transparent serde**: serializes as a bare integer of cents
///
/// ## Where Money is Used
/// ```text
/// Product.unit_price ──► TicketLine.subtotal ──► Ticket.total_amount
///                                                      │
///                                                      ▼
///                                           "TOTAL: 3.80 €" on receipt
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use panaderia_core::money::Money;
    ///
    /// let price = Money::from_cents(120); // 1.20
    /// assert_eq!(price.cents(), 120);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion, always 0-99.
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

    /// Multiplies by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use panaderia_core::money::Money;
    ///
    /// let baguette = Money::from_cents(55);
    /// assert_eq!(baguette.checked_mul_quantity(3), Some(Money::from_cents(165)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_mul_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplies by a quantity, clamping at the bounds of i64.
    #[inline]
    pub const fn saturating_mul_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Renders the amount to two decimals followed by a currency symbol.
    ///
    /// ```rust
    /// use panaderia_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(380).with_symbol("€"), "3.80 €");
    /// ```
    pub fn with_symbol(&self, symbol: &str) -> String {
        format!("{} {}", self, symbol)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Two-decimal rendering without a currency symbol: `3.80`, `-5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.cents_part())
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

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
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
        assert_eq!(money.major(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(380).to_string(), "3.80");
        assert_eq!(Money::from_cents(55).to_string(), "0.55");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_with_symbol() {
        assert_eq!(Money::from_cents(55).with_symbol("€"), "0.55 €");
        assert_eq!(Money::from_cents(1000).with_symbol("$"), "10.00 $");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(325);
        let b = Money::from_cents(55);

        assert_eq!((a + b).cents(), 380);
        assert_eq!((b * 3).cents(), 165);

        let mut c = a;
        c += b;
        assert_eq!(c, Money::from_cents(380));
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_cents(130), Money::from_cents(55)];
        let by_ref: Money = amounts.iter().sum();
        let by_value: Money = amounts.into_iter().sum();
        assert_eq!(by_ref, Money::from_cents(185));
        assert_eq!(by_value, by_ref);

        let empty: Vec<Money> = Vec::new();
        assert!(empty.into_iter().sum::<Money>().is_zero());
    }

    /// 0.65 × 5 and 3.25 + 0.55 are exact in cents, unlike f64.
    #[test]
    fn test_no_float_drift() {
        let subtotal = Money::from_cents(65) * 5;
        assert_eq!(subtotal.to_string(), "3.25");
        assert_eq!((subtotal + Money::from_cents(55)).to_string(), "3.80");
    }

    #[test]
    fn test_checked_overflow() {
        assert!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)).is_none());
        assert!(Money::from_cents(i64::MAX / 2).checked_mul_quantity(3).is_none());
        assert_eq!(
            Money::from_cents(i64::MAX / 2).saturating_mul_quantity(3),
            Money::from_cents(i64::MAX)
        );
        assert_eq!(
            Money::from_cents(65).checked_mul_quantity(2),
            Some(Money::from_cents(130))
        );
    }

    #[test]
    fn test_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(65)).unwrap();
        assert_eq!(json, "65");
        let back: Money = serde_json::from_str("120").unwrap();
        assert_eq!(back, Money::from_cents(120));
    }
}
