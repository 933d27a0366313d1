//! # Money Module
//!
//! Provides the `Money` type and the rounding helpers every billing path uses.
//!
//! ## Why Round Twice?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  120 cm on a 0.1 m step at 600/m:                                      │
//! │    ceil(1.2 / 0.1) * 0.1 = 1.2000000000000002                          │
//! │    1.2000000000000002 * 600 = 720.0000000000001                        │
//! │    ceil(720.0000000000001) = 721  ❌ customer over-billed by 1         │
//! │                                                                         │
//! │  OUR SOLUTION: clamp to 2 decimals, THEN take the ceiling              │
//! │    fixed2(720.0000000000001) = 720.00                                  │
//! │    ceil(720.00) = 720  ✓                                               │
//! │                                                                         │
//! │  The clamp formats the exact binary value to 2 decimals. Scaling by    │
//! │  100 first is NOT equivalent: 551.005 is stored as 551.00499...,       │
//! │  but 551.005 * 100 == 55100.5 exactly, which rounds up to 551.01.      │
//! │                                                                         │
//! │  A genuine fraction still rounds up in the seller's favour:            │
//! │    fixed2(720.37) = 720.37 → ceil = 721                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use drape_core::money::Money;
//!
//! let total = Money::ceil_from_amount(1.2000000000000002 * 600.0);
//! assert_eq!(total.units(), 720);
//!
//! let total = Money::ceil_from_amount(2.2 * 455.0); // float noise above 1001
//! assert_eq!(total.units(), 1001);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Decimal places kept before the final ceiling on a currency amount.
pub const CURRENCY_PLACES: usize = 2;

/// Decimal places an accumulated area is clamped to before pricing.
pub const AREA_PLACES: i32 = 4;

/// Decimal places a `value / step` quotient is clamped to before its ceiling.
///
/// `2.1 / 0.3` evaluates to `7.000000000000001`; without the clamp a width
/// sitting exactly on a step boundary would be billed one step higher.
pub const STEP_QUOTIENT_PLACES: i32 = 9;

// =============================================================================
// Money Type
// =============================================================================

/// A billed amount in whole currency units (baht).
///
/// The storefront's currency has no fractional sub-unit, so totals are
/// integers. Any fractional intermediate is rounded UP through
/// [`Money::ceil_from_amount`].
///
/// Serializes as a bare integer so `{ "total": 720 }` stays the wire shape the
/// storefront already consumes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
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

    /// Converts a raw floating-point amount into a billable total.
    ///
    /// Two-stage rounding: clamp to [`CURRENCY_PLACES`] decimals to absorb
    /// binary representation noise, then round UP to a whole unit.
    /// Negative, NaN and infinite amounts bill as zero.
    ///
    /// ## Example
    /// ```rust
    /// use drape_core::money::Money;
    ///
    /// assert_eq!(Money::ceil_from_amount(719.9999999999999).units(), 720);
    /// assert_eq!(Money::ceil_from_amount(1100.01).units(), 1101);
    /// assert_eq!(Money::ceil_from_amount(551.005).units(), 551);
    /// assert_eq!(Money::ceil_from_amount(-5.0).units(), 0);
    /// ```
    pub fn ceil_from_amount(amount: f64) -> Money {
        if !amount.is_finite() || amount <= 0.0 {
            return Money::zero();
        }

        let clamped = round_to_fixed(amount, CURRENCY_PLACES);
        Money(clamped.ceil() as i64)
    }
}

/// Display implementation for logs and the CLI.
///
/// ## Note
/// Storefront display formatting (separators, locale) is not done here.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "฿{}", self.0)
    }
}

// =============================================================================
// Rounding Helpers
// =============================================================================

/// Rounds the exact binary `value` to `places` decimals, as fixed-point
/// formatting does.
///
/// `value * 10^places` is never formed, so a product that lands on a half
/// after scaling cannot tip the result.
///
/// ## Example
/// ```rust
/// use drape_core::money::round_to_fixed;
///
/// assert_eq!(round_to_fixed(720.0000000000001, 2), 720.0);
/// assert_eq!(round_to_fixed(551.005, 2), 551.0);
/// assert_eq!(round_to_fixed(720.006, 2), 720.01);
/// ```
pub fn round_to_fixed(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// Rounds `value` to `places` decimals, halves away from zero.
///
/// Used for area clamping. Currency goes through [`round_to_fixed`].
///
/// ## Example
/// ```rust
/// use drape_core::money::round_to_places;
///
/// assert_eq!(round_to_places(1.2000000000000002, 4), 1.2);
/// assert_eq!(round_to_places(2.345, 1), 2.3);
/// ```
#[inline]
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Rounds `value` UP to the nearest multiple of `step`.
///
/// A non-positive or non-finite step leaves the value unchanged, matching how
/// an unset `width_step`/`height_step`/`area_rounding` behaves.
///
/// ## Example
/// ```rust
/// use drape_core::money::ceil_to_step;
///
/// assert!((ceil_to_step(2.1, 0.2) - 2.2).abs() < 1e-9);
/// assert!((ceil_to_step(2.1, 0.3) - 2.1).abs() < 1e-9); // on the boundary
/// assert_eq!(ceil_to_step(1.37, 0.0), 1.37);
/// ```
pub fn ceil_to_step(value: f64, step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return value;
    }

    let steps = round_to_places(value / step, STEP_QUOTIENT_PLACES).ceil();
    steps * step
}

// =============================================================================
// Unit Tests
// =============================================================================
