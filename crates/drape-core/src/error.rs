//! # Error Types
//!
//! Domain-specific error types for drape-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  drape-core errors (this file)                                         │
//! │  ├── PricingIssue     - Soft failures carried INSIDE a PriceResult     │
//! │  └── ValidationError  - Config/input validation failures (Result::Err) │
//! │                                                                         │
//! │  drape-catalog errors (separate crate)                                 │
//! │  └── CatalogError     - File, parse and lookup failures                │
//! │                                                                         │
//! │  Flow: ValidationError → CatalogError → quote binary / storefront      │
//! │        PricingIssue    → PriceResult.issue + breakdown text            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Kinds of Failure
//! The evaluator never returns `Err`. A price that cannot be computed is still
//! a valid [`PriceResult`](crate::types::PriceResult) with a zero total, and the
//! reason travels as a [`PricingIssue`]. `ValidationError` is only produced by
//! the [`validation`](crate::validation) helpers, which callers run before a
//! record reaches the evaluator.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Pricing Issue
// =============================================================================

/// Why an evaluation produced a zero total.
///
/// The `Display` text is the English breakdown shown to the customer; Thai
/// text is rendered by [`PricingIssue::describe`](crate::breakdown).
///
/// ## Categories
/// ```text
/// ConstraintViolation   WidthAboveMax, WidthBelowMin, HeightAboveMax
/// MissingConfiguration  NoPriceSteps
/// NoMatchingBand        WidthOutOfRange, SizeOutOfRange
/// UnimplementedMethod   NotImplemented
/// UnknownMethod         InvalidMethod
/// Input                 InvalidDimensions
/// ```
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingIssue {
    /// Width or height is negative, NaN or infinite.
    #[error("invalid dimensions ({width_cm} x {height_cm} cm)")]
    InvalidDimensions { width_cm: f64, height_cm: f64 },

    /// Width is above the product's `max_width`.
    #[error("width exceeds max_width ({max} m)")]
    WidthAboveMax { width: f64, max: f64 },

    /// Width is below the product's `min_width`.
    #[error("width below min_width ({min} m)")]
    WidthBelowMin { width: f64, min: f64 },

    /// Height is above the product's `max_height`.
    #[error("height exceeds max_height ({max} m)")]
    HeightAboveMax { height: f64, max: f64 },

    /// A range method was selected but `price_data` is empty or absent.
    #[error("no price steps found")]
    NoPriceSteps,

    /// No width band contains the requested width.
    #[error("width not in configured range ({width} m)")]
    WidthOutOfRange { width: f64 },

    /// No width × height band contains the requested size.
    #[error("size not in configured range ({width} x {height} m)")]
    SizeOutOfRange { width: f64, height: f64 },

    /// `box` pricing is a placeholder.
    #[error("not implemented")]
    NotImplemented,

    /// The configured `calculation_method` is not recognised.
    #[error("invalid calculation method")]
    InvalidMethod,
}

impl PricingIssue {
    /// Returns true for the constraint checks run before method dispatch.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            PricingIssue::WidthAboveMax { .. }
                | PricingIssue::WidthBelowMin { .. }
                | PricingIssue::HeightAboveMax { .. }
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Configuration and input validation errors.
///
/// These errors occur when a pricing record or a customer-entered size doesn't
/// meet requirements. Used for early validation before the evaluator runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// A `[min, max]` pair has min above max.
    #[error("{field} range is inverted: min {min} > max {max}")]
    InvertedRange { field: String, min: f64, max: f64 },

    /// A range method has no bands to look up.
    #[error("{method} pricing requires at least one price step")]
    MissingPriceSteps { method: String },

    /// Two bands can both match the same size.
    #[error("price steps {first} and {second} overlap")]
    OverlappingBands { first: usize, second: usize },

    /// `calculation_method` did not match any known method.
    #[error("calculation_method '{value}' is not recognised")]
    UnknownMethod { value: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_issue_messages() {
        let issue = PricingIssue::WidthAboveMax {
            width: 2.5,
            max: 2.0,
        };
        assert_eq!(issue.to_string(), "width exceeds max_width (2 m)");

        let issue = PricingIssue::WidthOutOfRange { width: 3.25 };
        assert_eq!(issue.to_string(), "width not in configured range (3.25 m)");

        assert_eq!(PricingIssue::NoPriceSteps.to_string(), "no price steps found");
        assert_eq!(PricingIssue::NotImplemented.to_string(), "not implemented");
        assert_eq!(
            PricingIssue::InvalidMethod.to_string(),
            "invalid calculation method"
        );
    }

    #[test]
    fn test_constraint_classification() {
        assert!(PricingIssue::HeightAboveMax {
            height: 3.0,
            max: 2.8
        }
        .is_constraint_violation());
        assert!(!PricingIssue::NoPriceSteps.is_constraint_violation());
    }

    #[test]
    fn test_issue_serializes_with_kind_tag() {
        let json = serde_json::to_value(PricingIssue::WidthBelowMin {
            width: 0.3,
            min: 0.5,
        })
        .unwrap();
        assert_eq!(json["kind"], "width_below_min");
        assert_eq!(json["min"], 0.5);
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::InvertedRange {
            field: "price_data[1].width".to_string(),
            min: 2.0,
            max: 1.5,
        };
        assert_eq!(
            err.to_string(),
            "price_data[1].width range is inverted: min 2 > max 1.5"
        );

        let err = ValidationError::MissingPriceSteps {
            method: "width_range".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "width_range pricing requires at least one price step"
        );
    }
}
