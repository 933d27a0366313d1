//! # Validation Module
//!
//! Input and configuration validation for pricing records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront form (TypeScript)                                 │
//! │  ├── Width/height typed, positive                                      │
//! │  └── validate_dimensions_cm mirrors this for Rust callers              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Catalog load (drape-catalog)                                 │
//! │  ├── validate_product_id                                               │
//! │  ├── validate_pricing_config                                           │
//! │  └── find_band_overlaps (warn or reject)                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Evaluator                                                    │
//! │  └── Permissive: never errors, soft-fails with total 0                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use drape_core::validation::{validate_dimensions_cm, validate_pricing_config};
//! use drape_core::{CalculationMethod, ProductPricingConfig};
//!
//! validate_dimensions_cm(120.0, 250.0).unwrap();
//!
//! let config = ProductPricingConfig::new(CalculationMethod::Area, 500.0);
//! validate_pricing_config(&config).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::{CalculationMethod, PriceStep, ProductPricingConfig};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

fn require_finite(field: &str, value: f64) -> ValidationResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite {
            field: field.to_string(),
        })
    }
}

fn require_non_negative(field: &str, value: Option<f64>) -> ValidationResult<()> {
    let Some(value) = value else {
        return Ok(());
    };

    require_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

fn require_positive(field: &str, value: Option<f64>) -> ValidationResult<()> {
    let Some(value) = value else {
        return Ok(());
    };

    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

fn require_ordered(field: &str, (min, max): (f64, f64)) -> ValidationResult<()> {
    if min > max {
        return Err(ValidationError::InvertedRange {
            field: field.to_string(),
            min,
            max,
        });
    }

    Ok(())
}

/// Validates a customer-entered size in centimetres.
///
/// ## Rules
/// - Both values finite
/// - Both values ≥ 0 (zero is a valid size for fixed-price items)
///
/// ## Example
/// ```rust
/// use drape_core::validation::validate_dimensions_cm;
///
/// assert!(validate_dimensions_cm(0.0, 0.0).is_ok());
/// assert!(validate_dimensions_cm(-10.0, 100.0).is_err());
/// assert!(validate_dimensions_cm(100.0, f64::NAN).is_err());
/// ```
pub fn validate_dimensions_cm(width_cm: f64, height_cm: f64) -> ValidationResult<()> {
    require_non_negative("width_cm", Some(width_cm))?;
    require_non_negative("height_cm", Some(height_cm))?;
    Ok(())
}

// =============================================================================
// Config Validators
// =============================================================================

/// Validates a pricing record before it is offered to customers.
///
/// ## Rules
/// - `calculation_method` is a known method
/// - Prices, bounds, floors, factors and minimums are finite and ≥ 0
/// - Steps and area rounding, when set, are > 0
/// - `min_width ≤ max_width`
/// - Range methods have at least one band; every band has `min ≤ max` and a
///   non-negative price
///
/// Band overlaps are NOT rejected here; see [`find_band_overlaps`].
pub fn validate_pricing_config(config: &ProductPricingConfig) -> ValidationResult<()> {
    if config.calculation_method == CalculationMethod::Unknown {
        return Err(ValidationError::UnknownMethod {
            value: config.calculation_method.to_string(),
        });
    }

    require_non_negative("price_per_unit", config.price_per_unit)?;
    require_non_negative("max_width", config.max_width)?;
    require_non_negative("min_width", config.min_width)?;
    require_non_negative("max_height", config.max_height)?;
    require_non_negative("min_billable_width", config.min_billable_width)?;
    require_non_negative("min_billable_height", config.min_billable_height)?;
    require_non_negative("area_factor", config.area_factor)?;
    require_non_negative("min_area", config.min_area)?;
    require_positive("width_step", config.width_step)?;
    require_positive("height_step", config.height_step)?;
    require_positive("area_rounding", config.area_rounding)?;

    if let (Some(min), Some(max)) = (config.min_width, config.max_width) {
        require_ordered("width", (min, max))?;
    }

    if config.calculation_method.uses_price_steps() && config.price_data.is_empty() {
        return Err(ValidationError::MissingPriceSteps {
            method: config.calculation_method.to_string(),
        });
    }

    for (index, step) in config.price_data.iter().enumerate() {
        validate_price_step(index, step)?;
    }

    Ok(())
}

fn validate_price_step(index: usize, step: &PriceStep) -> ValidationResult<()> {
    let field = |name: &str| format!("price_data[{}].{}", index, name);

    require_non_negative(&field("price"), Some(step.price))?;
    require_non_negative(&field("price_platform"), step.price_platform)?;
    require_non_negative(&field("min_width"), step.min_width)?;
    require_non_negative(&field("max_width"), step.max_width)?;
    require_non_negative(&field("min_height"), step.min_height)?;
    require_non_negative(&field("max_height"), step.max_height)?;
    require_ordered(&field("width"), step.width_bounds())?;
    require_ordered(&field("height"), step.height_bounds())?;

    Ok(())
}

/// Finds pairs of bands that can both match the same size.
///
/// Bounds are inclusive, so two bands sharing an edge (`[0, 1]` and `[1, 2]`)
/// overlap at exactly that edge. The evaluator resolves overlaps by taking the
/// first band in order.
///
/// ## Example
/// ```rust
/// use drape_core::validation::find_band_overlaps;
/// use drape_core::PriceStep;
///
/// let steps = vec![
///     PriceStep::width_band(0.0, 1.0, 800.0),
///     PriceStep::width_band(1.01, 2.0, 1200.0),
///     PriceStep::width_band(1.5, 3.0, 1800.0),
/// ];
/// assert_eq!(find_band_overlaps(&steps, false), vec![(1, 2)]);
/// ```
pub fn find_band_overlaps(steps: &[PriceStep], two_dimensional: bool) -> Vec<(usize, usize)> {
    let intersects = |a: (f64, f64), b: (f64, f64)| a.0 <= b.1 && b.0 <= a.1;

    let mut overlaps = Vec::new();
    for (i, first) in steps.iter().enumerate() {
        for (j, second) in steps.iter().enumerate().skip(i + 1) {
            let width = intersects(first.width_bounds(), second.width_bounds());
            let height = !two_dimensional
                || intersects(first.height_bounds(), second.height_bounds());
            if width && height {
                overlaps.push((i, j));
            }
        }
    }

    overlaps
}

/// Rejects a band table with any overlapping pair.
pub fn validate_no_band_overlaps(config: &ProductPricingConfig) -> ValidationResult<()> {
    let two_dimensional = config.calculation_method == CalculationMethod::WidthHeightRange;
    match find_band_overlaps(&config.price_data, two_dimensional).first() {
        Some(&(first, second)) => Err(ValidationError::OverlappingBands { first, second }),
        None => Ok(()),
    }
}

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates a product ID (a Supabase row UUID).
///
/// ## Example
/// ```rust
/// use drape_core::validation::validate_product_id;
///
/// assert!(validate_product_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_product_id("curtain-1").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
