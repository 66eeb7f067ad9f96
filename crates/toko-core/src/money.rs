//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A 20% discount on Rp2.000.000 must be exactly Rp400.000,               │
//! │  never Rp399.999,99999 that "rounds itself" somewhere downstream.       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Rupiah                                           │
//! │    All amounts are whole rupiah in an i64.                              │
//! │    Percentage math uses integer division, so fractional rupiah          │
//! │    are dropped (floored) explicitly and deterministically.              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use toko_core::money::Money;
//!
//! // Create from whole rupiah (the smallest practical unit for IDR)
//! let price = Money::from_rupiah(150_000);
//!
//! // Arithmetic operations
//! let doubled = price * 2;
//! let total = price + Money::from_rupiah(50_000);
//!
//! // Percentage math floors, never rounds up
//! assert_eq!(Money::from_rupiah(999).percentage(10).rupiah(), 99);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole rupiah.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and discounts
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support, serialized as a bare integer on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupiah.
    ///
    /// ## Example
    /// ```rust
    /// use toko_core::money::Money;
    ///
    /// let price = Money::from_rupiah(150_000);
    /// assert_eq!(price.rupiah(), 150_000);
    /// ```
    #[inline]
    pub const fn from_rupiah(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the value in whole rupiah.
    #[inline]
    pub const fn rupiah(&self) -> i64 {
        self.0
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Returns the smaller of two amounts.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

    /// Computes a percentage of this amount, flooring fractional rupiah.
    ///
    /// ## Why Floor?
    /// Discounts must never exceed the advertised rate. `floor(s × d / 100)`
    /// guarantees a 20% voucher on Rp1.001 gives Rp200, not Rp200,2 rounded
    /// to Rp201.
    ///
    /// ## Example
    /// ```rust
    /// use toko_core::money::Money;
    ///
    /// let subtotal = Money::from_rupiah(2_000_000);
    /// assert_eq!(subtotal.percentage(20).rupiah(), 400_000);
    ///
    /// // Fractional rupiah are dropped
    /// assert_eq!(Money::from_rupiah(999).percentage(10).rupiah(), 99);
    /// ```
    pub fn percentage(&self, percent: i64) -> Money {
        // i128 prevents overflow on large amounts; integer division floors
        // for the non-negative amounts this is used with
        let amount = (self.0 as i128 * percent as i128) / 100;
        Money(amount as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use toko_core::money::Money;
    ///
    /// let unit_price = Money::from_rupiah(25_000);
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.rupiah(), 75_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in Indonesian format: `Rp150.000`.
///
/// This is the canonical currency rendering used in user-facing messages
/// (e.g. the minimum-purchase voucher rejection).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}Rp{}", sign, group_thousands(self.0.abs()))
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Groups digits in threes with `.` separators: `1500000` → `"1.500.000"`.
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(*b as char);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
