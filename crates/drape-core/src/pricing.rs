//! # Pricing Module
//!
//! The pricing evaluator: product config + customer size → total + breakdown.
//!
//! ## Evaluation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      evaluate_price(config, request)                    │
//! │                                                                         │
//! │  1. Dimensions sane? (finite, ≥ 0) ─────────── no ──► InvalidDimensions │
//! │  2. cm → m, price = override ?? price_per_unit ?? 0                     │
//! │  3. max_width / min_width / max_height ─────── hit ─► ConstraintViolation│
//! │  4. match calculation_method                                            │
//! │       width_range ........ first width band        (flat band price)   │
//! │       width_height_range . first width×height band (flat band price)   │
//! │       rail_width ......... floor, step, × price    (fixed2 → ceil)     │
//! │       area / sq_yard ..... floors, height step, factor, min, rounding  │
//! │                            round4(area) × price    (fixed2 → ceil)     │
//! │       box ................ NotImplemented                              │
//! │       fixed .............. price                                       │
//! │       unknown ............ InvalidMethod                               │
//! │  5. Render breakdown in the requested locale                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Never Fails
//! Every path returns a [`PriceResult`]. Soft failures carry `total = 0`, an
//! explanatory breakdown and `issue = Some(..)`.
//!
//! ## Example
//! ```rust
//! use drape_core::{evaluate_price, CalculationMethod, PriceRequest, ProductPricingConfig};
//!
//! let mut rail = ProductPricingConfig::new(CalculationMethod::RailWidth, 600.0);
//! rail.width_step = Some(0.1);
//!
//! let result = evaluate_price(&rail, &PriceRequest::new(120.0, 0.0));
//! assert_eq!(result.total.units(), 720);
//! assert_eq!(result.breakdown, "width 1.20 m x 600 per m");
//! ```

use tracing::{debug, trace};

use crate::breakdown::Billing;
use crate::error::PricingIssue;
use crate::money::{ceil_to_step, round_to_places, Money, AREA_PLACES};
use crate::types::{CalculationMethod, PriceRequest, PriceResult, ProductPricingConfig};
use crate::CM_PER_METER;

/// Evaluates the price of one item.
///
/// Pure and deterministic: the same inputs always give the same result.
pub fn evaluate_price(config: &ProductPricingConfig, request: &PriceRequest) -> PriceResult {
    match evaluate(config, request) {
        Ok((total, billing)) => {
            debug!(
                method = %config.calculation_method,
                total = total.units(),
                "Price evaluated"
            );
            PriceResult::priced(total, billing.render(request.locale))
        }
        Err(issue) => {
            debug!(
                method = %config.calculation_method,
                %issue,
                "Price evaluation returned zero"
            );
            let breakdown = issue.describe(request.locale);
            PriceResult::failed(issue, breakdown)
        }
    }
}

/// Evaluates with the standard price and English breakdown.
///
/// ## Example
/// ```rust
/// use drape_core::{calculate_price, CalculationMethod, ProductPricingConfig};
///
/// let config = ProductPricingConfig::new(CalculationMethod::Area, 500.0);
/// assert_eq!(calculate_price(&config, 200.0, 250.0).total.units(), 2500);
/// ```
pub fn calculate_price(
    config: &ProductPricingConfig,
    width_cm: f64,
    height_cm: f64,
) -> PriceResult {
    evaluate_price(config, &PriceRequest::new(width_cm, height_cm))
}

fn evaluate(
    config: &ProductPricingConfig,
    request: &PriceRequest,
) -> Result<(Money, Billing), PricingIssue> {
    check_dimensions(request)?;

    let width_m = request.width_cm / CM_PER_METER;
    let height_m = request.height_cm / CM_PER_METER;
    let price = config.unit_price(request.price_override);

    check_constraints(config, width_m, height_m)?;

    match config.calculation_method {
        CalculationMethod::WidthRange => price_width_band(config, width_m, request.is_platform),
        CalculationMethod::WidthHeightRange => {
            price_size_band(config, width_m, height_m, request.is_platform)
        }
        CalculationMethod::RailWidth => Ok(price_rail(config, width_m, price)),
        CalculationMethod::Area | CalculationMethod::AreaSqYard => {
            Ok(price_area(config, width_m, height_m, price))
        }
        CalculationMethod::Box => Err(PricingIssue::NotImplemented),
        CalculationMethod::Fixed => Ok((Money::ceil_from_amount(price), Billing::Fixed { price })),
        CalculationMethod::Unknown => Err(PricingIssue::InvalidMethod),
    }
}

// =============================================================================
// Preamble Checks
// =============================================================================

/// Rejects sizes no billing rule can make sense of.
///
/// Zero is allowed: fixed-price items are quoted at 0 × 0 and billable floors
/// lift small sizes anyway.
fn check_dimensions(request: &PriceRequest) -> Result<(), PricingIssue> {
    let sane = |v: f64| v.is_finite() && v >= 0.0;

    if sane(request.width_cm) && sane(request.height_cm) {
        Ok(())
    } else {
        Err(PricingIssue::InvalidDimensions {
            width_cm: request.width_cm,
            height_cm: request.height_cm,
        })
    }
}

/// Hard bounds, checked before dispatch regardless of method.
///
/// There is deliberately no `min_height` bound.
fn check_constraints(
    config: &ProductPricingConfig,
    width_m: f64,
    height_m: f64,
) -> Result<(), PricingIssue> {
    if let Some(max) = config.max_width {
        if width_m > max {
            return Err(PricingIssue::WidthAboveMax {
                width: width_m,
                max,
            });
        }
    }

    if let Some(min) = config.min_width {
        if width_m < min {
            return Err(PricingIssue::WidthBelowMin {
                width: width_m,
                min,
            });
        }
    }

    if let Some(max) = config.max_height {
        if height_m > max {
            return Err(PricingIssue::HeightAboveMax {
                height: height_m,
                max,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Stepped Bands
// =============================================================================

/// First band whose width range contains `width_m` wins.
fn price_width_band(
    config: &ProductPricingConfig,
    width_m: f64,
    is_platform: bool,
) -> Result<(Money, Billing), PricingIssue> {
    if config.price_data.is_empty() {
        return Err(PricingIssue::NoPriceSteps);
    }

    let step = config
        .price_data
        .iter()
        .find(|step| step.contains_width(width_m))
        .ok_or(PricingIssue::WidthOutOfRange { width: width_m })?;

    let (price, tier) = step.resolve_price(is_platform);
    let billing = Billing::Band {
        width: step.width_bounds(),
        height: None,
        tier,
        price,
    };

    Ok((Money::ceil_from_amount(price), billing))
}

/// First band whose width AND height ranges contain the size wins.
fn price_size_band(
    config: &ProductPricingConfig,
    width_m: f64,
    height_m: f64,
    is_platform: bool,
) -> Result<(Money, Billing), PricingIssue> {
    if config.price_data.is_empty() {
        return Err(PricingIssue::NoPriceSteps);
    }

    let step = config
        .price_data
        .iter()
        .find(|step| step.contains_size(width_m, height_m))
        .ok_or(PricingIssue::SizeOutOfRange {
            width: width_m,
            height: height_m,
        })?;

    let (price, tier) = step.resolve_price(is_platform);
    let billing = Billing::Band {
        width: step.width_bounds(),
        height: Some(step.height_bounds()),
        tier,
        price,
    };

    Ok((Money::ceil_from_amount(price), billing))
}

// =============================================================================
// Linear & Area Billing
// =============================================================================

/// Rails and tracks: billed per metre of width.
fn price_rail(config: &ProductPricingConfig, width_m: f64, price: f64) -> (Money, Billing) {
    let floored = width_m.max(config.min_billable_width.unwrap_or(0.0));
    let width = config
        .width_step
        .map_or(floored, |step| ceil_to_step(floored, step));

    trace!(width_m, billable_width = width, price, "Rail billing");

    let total = Money::ceil_from_amount(width * price);
    (
        total,
        Billing::Rail {
            width,
            unit_price: price,
        },
    )
}

/// Curtains and wallpaper: billed per square metre (or square yard).
///
/// Only the height is quantized by `height_step`; width has no step here.
fn price_area(
    config: &ProductPricingConfig,
    width_m: f64,
    height_m: f64,
    price: f64,
) -> (Money, Billing) {
    let width = width_m.max(config.min_billable_width.unwrap_or(0.0));
    let floored_height = height_m.max(config.min_billable_height.unwrap_or(0.0));
    let height = config
        .height_step
        .map_or(floored_height, |step| ceil_to_step(floored_height, step));

    let factor = config.area_factor.filter(|f| *f > 0.0).unwrap_or(1.0);
    let mut area = width * height * factor;

    if let Some(min_area) = config.min_area {
        if area < min_area {
            area = min_area;
        }
    }

    if let Some(step) = config.area_rounding {
        area = ceil_to_step(area, step);
    }

    let area = round_to_places(area, AREA_PLACES);

    trace!(width, height, factor, area, price, "Area billing");

    let total = Money::ceil_from_amount(area * price);
    (
        total,
        Billing::Area {
            width,
            height,
            factor,
            area,
            sq_yard: config.is_sq_yard(),
            unit_price: price,
        },
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakdown::Locale;
    use crate::types::PriceStep;

    fn area(price: f64) -> ProductPricingConfig {
        ProductPricingConfig::new(CalculationMethod::Area, price)
    }

    fn rail(price: f64, step: Option<f64>, min_billable: Option<f64>) -> ProductPricingConfig {
        ProductPricingConfig {
            width_step: step,
            min_billable_width: min_billable,
            ..ProductPricingConfig::new(CalculationMethod::RailWidth, price)
        }
    }

    fn width_bands() -> ProductPricingConfig {
        ProductPricingConfig {
            price_data: vec![
                PriceStep::width_band(0.0, 1.0, 800.0),
                PriceStep::width_band(1.0, 1.5, 1200.0).with_platform_price(1390.0),
                PriceStep::width_band(1.5, 3.0, 1800.0).with_platform_price(0.0),
            ],
            ..ProductPricingConfig::new(CalculationMethod::WidthRange, 0.0)
        }
    }

    // -------------------------------------------------------------------------
    // Concrete scenarios
    // -------------------------------------------------------------------------

    #[test]
    fn test_rail_width_step_scenario() {
        let config = rail(600.0, Some(0.1), Some(0.0));
        let result = calculate_price(&config, 120.0, 0.0);

        assert_eq!(result.total.units(), 720);
        assert_eq!(result.breakdown, "width 1.20 m x 600 per m");
        assert!(result.is_priced());
    }

    #[test]
    fn test_plain_area_scenario() {
        let result = calculate_price(&area(500.0), 200.0, 250.0);

        assert_eq!(result.total.units(), 2500);
        assert_eq!(
            result.breakdown,
            "2.00 m x 2.50 m x factor 1 = 5.00 sq m x 500"
        );
    }

    #[test]
    fn test_area_height_step_scenario() {
        let config = ProductPricingConfig {
            height_step: Some(0.2),
            ..area(455.0)
        };
        let result = calculate_price(&config, 100.0, 210.0);

        // 1.0 × 2.2 = 2.2 m², 2.2 × 455 carries float noise above 1001.
        assert_eq!(result.total.units(), 1001);
        assert!(result.breakdown.starts_with("1.00 m x 2.20 m"));
    }

    #[test]
    fn test_fixed_scenario() {
        let config = ProductPricingConfig::new(CalculationMethod::Fixed, 3000.0);

        for (w, h) in [(0.0, 0.0), (120.0, 250.0), (999.0, 1.0)] {
            let result = calculate_price(&config, w, h);
            assert_eq!(result.total.units(), 3000);
            assert_eq!(result.breakdown, "flat price 3000");
        }
    }

    #[test]
    fn test_width_range_without_steps_scenario() {
        let config = ProductPricingConfig::new(CalculationMethod::WidthRange, 0.0);
        let result = calculate_price(&config, 120.0, 200.0);

        assert!(result.total.is_zero());
        assert_eq!(result.breakdown, "no price steps found");
        assert_eq!(result.issue, Some(PricingIssue::NoPriceSteps));
    }

    #[test]
    fn test_max_width_violation_for_every_method() {
        let methods = [
            CalculationMethod::Area,
            CalculationMethod::AreaSqYard,
            CalculationMethod::RailWidth,
            CalculationMethod::WidthRange,
            CalculationMethod::WidthHeightRange,
            CalculationMethod::Box,
            CalculationMethod::Fixed,
            CalculationMethod::Unknown,
        ];

        for method in methods {
            let config = ProductPricingConfig {
                max_width: Some(2.0),
                ..ProductPricingConfig::new(method, 1000.0)
            };
            let result = calculate_price(&config, 250.0, 100.0);

            assert!(result.total.is_zero(), "{method} should reject");
            assert!(result.breakdown.contains("max_width"));
            assert_eq!(
                result.issue,
                Some(PricingIssue::WidthAboveMax {
                    width: 2.5,
                    max: 2.0
                })
            );
        }
    }

    // -------------------------------------------------------------------------
    // Constraints
    // -------------------------------------------------------------------------

    #[test]
    fn test_min_width_and_max_height() {
        let config = ProductPricingConfig {
            min_width: Some(0.5),
            max_height: Some(2.8),
            ..area(500.0)
        };

        let result = calculate_price(&config, 40.0, 100.0);
        assert_eq!(result.breakdown, "width below min_width (0.5 m)");

        let result = calculate_price(&config, 100.0, 300.0);
        assert_eq!(result.breakdown, "height exceeds max_height (2.8 m)");

        // Bounds themselves are allowed.
        assert!(calculate_price(&config, 50.0, 280.0).is_priced());
    }

    #[test]
    fn test_constraints_checked_in_order() {
        let config = ProductPricingConfig {
            max_width: Some(2.0),
            max_height: Some(2.0),
            ..area(500.0)
        };
        let result = calculate_price(&config, 300.0, 300.0);
        assert!(matches!(
            result.issue,
            Some(PricingIssue::WidthAboveMax { .. })
        ));
    }

    #[test]
    fn test_no_min_height_constraint() {
        let config = ProductPricingConfig {
            min_billable_height: Some(1.0),
            ..area(500.0)
        };
        let result = calculate_price(&config, 100.0, 1.0);
        assert_eq!(result.total.units(), 500);
    }

    #[test]
    fn test_invalid_dimensions() {
        let config = ProductPricingConfig::new(CalculationMethod::Fixed, 3000.0);

        for (w, h) in [(-1.0, 100.0), (100.0, -0.5), (f64::NAN, 1.0), (1.0, f64::INFINITY)] {
            let result = calculate_price(&config, w, h);
            assert!(result.total.is_zero());
            assert!(matches!(
                result.issue,
                Some(PricingIssue::InvalidDimensions { .. })
            ));
        }
    }

    // -------------------------------------------------------------------------
    // Stepped bands
    // -------------------------------------------------------------------------

    #[test]
    fn test_width_range_matches_band() {
        let result = calculate_price(&width_bands(), 80.0, 0.0);
        assert_eq!(result.total.units(), 800);
        assert_eq!(result.breakdown, "width band 0-1 m, standard price 800");
    }

    #[test]
    fn test_width_range_boundaries_are_inclusive() {
        let config = width_bands();

        // 1.0 m is the max of band 0 and the min of band 1: first match wins.
        assert_eq!(calculate_price(&config, 100.0, 0.0).total.units(), 800);
        // 1.5 m is the inclusive max of band 1.
        assert_eq!(calculate_price(&config, 150.0, 0.0).total.units(), 1200);
        // 3.0 m is the inclusive max of the last band.
        assert_eq!(calculate_price(&config, 300.0, 0.0).total.units(), 1800);
    }

    #[test]
    fn test_width_range_out_of_range() {
        let result = calculate_price(&width_bands(), 325.0, 0.0);
        assert!(result.total.is_zero());
        assert_eq!(result.breakdown, "width not in configured range (3.25 m)");
    }

    #[test]
    fn test_width_range_platform_price() {
        let config = width_bands();

        let request = PriceRequest::new(120.0, 0.0).platform();
        let result = evaluate_price(&config, &request);
        assert_eq!(result.total.units(), 1390);
        assert_eq!(result.breakdown, "width band 1-1.5 m, platform price 1390");

        // Platform price of 0 falls back to the standard price.
        let request = PriceRequest::new(200.0, 0.0).platform();
        assert_eq!(evaluate_price(&config, &request).total.units(), 1800);

        // No platform price configured at all.
        let request = PriceRequest::new(50.0, 0.0).platform();
        assert_eq!(evaluate_price(&config, &request).total.units(), 800);
    }

    #[test]
    fn test_band_ignores_price_override() {
        let request = PriceRequest::new(80.0, 0.0).with_price_override(5.0);
        assert_eq!(evaluate_price(&width_bands(), &request).total.units(), 800);
    }

    #[test]
    fn test_width_height_range() {
        let config = ProductPricingConfig {
            price_data: vec![
                PriceStep::size_band((0.0, 1.0), (0.0, 1.5), 900.0),
                PriceStep::size_band((0.0, 1.0), (1.5, 2.5), 1300.0).with_platform_price(1500.0),
                PriceStep::size_band((1.0, 2.0), (0.0, 2.5), 2100.0),
            ],
            ..ProductPricingConfig::new(CalculationMethod::WidthHeightRange, 0.0)
        };

        assert_eq!(calculate_price(&config, 80.0, 120.0).total.units(), 900);
        assert_eq!(calculate_price(&config, 80.0, 200.0).total.units(), 1300);
        assert_eq!(calculate_price(&config, 150.0, 200.0).total.units(), 2100);

        let platform = evaluate_price(&config, &PriceRequest::new(80.0, 200.0).platform());
        assert_eq!(platform.total.units(), 1500);
        assert_eq!(
            platform.breakdown,
            "band 0-1 m x 1.5-2.5 m, platform price 1500"
        );

        let result = calculate_price(&config, 80.0, 300.0);
        assert!(result.total.is_zero());
        assert_eq!(result.breakdown, "size not in configured range (0.8 x 3 m)");
    }

    #[test]
    fn test_width_height_range_without_steps() {
        let config = ProductPricingConfig::new(CalculationMethod::WidthHeightRange, 0.0);
        assert_eq!(
            calculate_price(&config, 100.0, 100.0).issue,
            Some(PricingIssue::NoPriceSteps)
        );
    }

    #[test]
    fn test_open_band_defaults() {
        let config = ProductPricingConfig {
            price_data: vec![PriceStep {
                price: 450.0,
                ..Default::default()
            }],
            ..ProductPricingConfig::new(CalculationMethod::WidthHeightRange, 0.0)
        };
        assert_eq!(calculate_price(&config, 5000.0, 0.0).total.units(), 450);
    }

    // -------------------------------------------------------------------------
    // Rail
    // -------------------------------------------------------------------------

    #[test]
    fn test_rail_exact_widths_never_drift() {
        let config = rail(600.0, None, None);
        for w in 1..=500 {
            let result = calculate_price(&config, w as f64, 0.0);
            assert_eq!(result.total.units(), 6 * w, "width {w} cm");
        }
    }

    #[test]
    fn test_rail_step_rounds_up_to_next_boundary() {
        let config = rail(600.0, Some(0.1), None);
        for w in 1..=500i64 {
            let expected = (w + 9) / 10 * 60;
            let result = calculate_price(&config, w as f64, 0.0);
            assert_eq!(result.total.units(), expected, "width {w} cm");
        }
    }

    #[test]
    fn test_rail_step_quantization_below_min_billable() {
        let config = rail(600.0, Some(0.1), Some(0.05));
        for w in 1..=10 {
            let result = calculate_price(&config, w as f64, 0.0);
            assert_eq!(result.total.units(), 60, "width {w} cm");
            assert_eq!(result.breakdown, "width 0.10 m x 600 per m");
        }
    }

    #[test]
    fn test_rail_min_billable_width() {
        let config = rail(450.0, None, Some(1.0));
        let result = calculate_price(&config, 60.0, 0.0);
        assert_eq!(result.total.units(), 450);
        assert_eq!(result.breakdown, "width 1.00 m x 450 per m");
    }

    #[test]
    fn test_rail_price_override() {
        let config = rail(600.0, None, None);
        let request = PriceRequest::new(150.0, 0.0).with_price_override(700.0);
        let result = evaluate_price(&config, &request);
        assert_eq!(result.total.units(), 1050);
        assert_eq!(result.breakdown, "width 1.50 m x 700 per m");
    }

    // -------------------------------------------------------------------------
    // Area
    // -------------------------------------------------------------------------

    #[test]
    fn test_area_width_has_no_step() {
        let config = ProductPricingConfig {
            width_step: Some(0.5),
            height_step: Some(0.5),
            ..area(100.0)
        };
        // 1.2 × ceil(1.2 → 1.5) = 1.8 m², width stays 1.2.
        let result = calculate_price(&config, 120.0, 120.0);
        assert_eq!(result.total.units(), 180);
        assert!(result.breakdown.starts_with("1.20 m x 1.50 m"));
    }

    #[test]
    fn test_area_billable_floors() {
        let config = ProductPricingConfig {
            min_billable_width: Some(1.0),
            min_billable_height: Some(1.5),
            ..area(400.0)
        };
        let result = calculate_price(&config, 50.0, 80.0);
        assert_eq!(result.total.units(), 600);
    }

    #[test]
    fn test_area_factor() {
        let config = ProductPricingConfig {
            area_factor: Some(2.5),
            ..area(300.0)
        };
        let result = calculate_price(&config, 200.0, 250.0);
        assert_eq!(result.total.units(), 3750);
        assert_eq!(
            result.breakdown,
            "2.00 m x 2.50 m x factor 2.5 = 12.50 sq m x 300"
        );
    }

    #[test]
    fn test_area_factor_zero_is_ignored() {
        let config = ProductPricingConfig {
            area_factor: Some(0.0),
            ..area(500.0)
        };
        assert_eq!(calculate_price(&config, 200.0, 250.0).total.units(), 2500);
    }

    #[test]
    fn test_min_area_floor() {
        let config = ProductPricingConfig {
            min_area: Some(2.0),
            ..area(350.0)
        };
        let result = calculate_price(&config, 100.0, 100.0);
        assert_eq!(result.total.units(), 700);
        assert!(result.is_priced());
    }

    #[test]
    fn test_area_rounding() {
        let config = ProductPricingConfig {
            area_rounding: Some(0.5),
            ..area(200.0)
        };
        // 1.1 × 1.3 = 1.43 → 1.5
        let result = calculate_price(&config, 110.0, 130.0);
        assert_eq!(result.total.units(), 300);
        assert!(result.breakdown.contains("= 1.50 sq m"));
    }

    #[test]
    fn test_area_total_clamped_from_exact_binary_amount() {
        let config = ProductPricingConfig {
            area_factor: Some(2.5),
            ..area(455.0)
        };
        // 3.46 × 0.14 × 2.5 = 1.211 m², and 1.211 × 455 is stored as 551.00499...
        let result = calculate_price(&config, 346.0, 14.0);
        assert_eq!(result.total.units(), 551);
        assert!(result.breakdown.contains("= 1.21 sq m x 455"));
    }

    #[test]
    fn test_height_step_keeps_exact_boundary() {
        let config = ProductPricingConfig {
            height_step: Some(0.15),
            ..area(400.0)
        };
        // 1.05 / 0.15 evaluates to 7.000000000000001; the drop stays at 7 steps.
        let result = calculate_price(&config, 100.0, 105.0);
        assert_eq!(result.total.units(), 420);
        assert!(result.breakdown.starts_with("1.00 m x 1.05 m"));
    }

    #[test]
    fn test_area_pipeline_order() {
        // floor → height step → factor → min area → rounding
        let config = ProductPricingConfig {
            min_billable_width: Some(1.0),
            height_step: Some(0.25),
            area_factor: Some(2.0),
            min_area: Some(1.0),
            area_rounding: Some(1.0),
            ..area(100.0)
        };
        // width 0.8 → 1.0; height 1.1 → 1.25; 1.25 × 2 = 2.5 → 3.0
        let result = calculate_price(&config, 80.0, 110.0);
        assert_eq!(result.total.units(), 300);
        assert_eq!(
            result.breakdown,
            "1.00 m x 1.25 m x factor 2 = 3.00 sq m x 100"
        );
    }

    #[test]
    fn test_sq_yard_labels() {
        let config = ProductPricingConfig {
            area_factor: Some(1.196),
            ..ProductPricingConfig::new(CalculationMethod::AreaSqYard, 250.0)
        };
        let result = calculate_price(&config, 100.0, 100.0);
        // 1.196 × 250 = 299
        assert_eq!(result.total.units(), 299);
        assert!(result.breakdown.contains("sq yd"));

        let by_unit = ProductPricingConfig {
            unit: Some("sq_yard".to_string()),
            ..area(250.0)
        };
        let request = PriceRequest::new(100.0, 100.0).with_locale(Locale::Th);
        assert!(evaluate_price(&by_unit, &request).breakdown.contains("ตร.หลา"));

        let request = PriceRequest::new(100.0, 100.0).with_locale(Locale::Th);
        assert!(evaluate_price(&area(250.0), &request).breakdown.contains("ตร.ม."));
    }

    #[test]
    fn test_area_without_price_bills_zero() {
        let config = ProductPricingConfig {
            calculation_method: CalculationMethod::Area,
            ..Default::default()
        };
        let result = calculate_price(&config, 200.0, 200.0);
        assert!(result.total.is_zero());
        // Zero price is not a soft failure.
        assert!(result.is_priced());
    }

    // -------------------------------------------------------------------------
    // Placeholder & unknown methods
    // -------------------------------------------------------------------------

    #[test]
    fn test_box_is_not_implemented() {
        let config = ProductPricingConfig::new(CalculationMethod::Box, 999.0);
        let result = calculate_price(&config, 30.0, 30.0);
        assert!(result.total.is_zero());
        assert_eq!(result.breakdown, "not implemented");
        assert_eq!(result.issue, Some(PricingIssue::NotImplemented));
    }

    #[test]
    fn test_unknown_method() {
        let config: ProductPricingConfig =
            serde_json::from_str(r#"{"calculation_method":"per_roll","price_per_unit":900}"#)
                .unwrap();
        let result = calculate_price(&config, 100.0, 100.0);
        assert!(result.total.is_zero());
        assert_eq!(result.breakdown, "invalid calculation method");
    }

    #[test]
    fn test_thai_failure_breakdown() {
        let config = ProductPricingConfig::new(CalculationMethod::WidthRange, 0.0);
        let request = PriceRequest::new(100.0, 100.0).with_locale(Locale::Th);
        assert_eq!(evaluate_price(&config, &request).breakdown, "ไม่พบข้อมูลช่วงราคา");
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    #[test]
    fn test_idempotent() {
        let config = ProductPricingConfig {
            height_step: Some(0.2),
            area_factor: Some(2.5),
            ..area(389.0)
        };
        let request = PriceRequest::new(173.0, 241.0);
        assert_eq!(
            evaluate_price(&config, &request),
            evaluate_price(&config, &request)
        );
    }

    #[test]
    fn test_area_rounds_up_never_down() {
        let config = area(537.0);
        for w in (1..=400).step_by(7) {
            for h in (1..=300).step_by(11) {
                // Exact price = w·h·537 / 10000, computed in integers.
                let scaled = (w * h * 537) as i64;
                let floor = scaled / 10_000;
                let total = calculate_price(&config, w as f64, h as f64).total.units();
                assert!(
                    total >= floor && total <= floor + 1,
                    "{w}x{h}: total {total}, exact floor {floor}"
                );
                if scaled % 10_000 >= 100 {
                    assert_eq!(total, floor + 1, "{w}x{h} must round up");
                }
            }
        }
    }

    #[test]
    fn test_area_is_monotonic() {
        let config = ProductPricingConfig {
            min_billable_width: Some(0.6),
            height_step: Some(0.2),
            area_factor: Some(2.5),
            min_area: Some(1.5),
            area_rounding: Some(0.5),
            ..area(333.0)
        };

        for h in (10..=300).step_by(29) {
            let mut previous = 0;
            for w in (5..=400).step_by(3) {
                let total = calculate_price(&config, w as f64, h as f64).total.units();
                assert!(total >= previous, "width {w} cm at height {h} cm");
                previous = total;
            }
        }

        for w in (10..=400).step_by(37) {
            let mut previous = 0;
            for h in (5..=300).step_by(3) {
                let total = calculate_price(&config, w as f64, h as f64).total.units();
                assert!(total >= previous, "height {h} cm at width {w} cm");
                previous = total;
            }
        }
    }
}
