//! # Domain Types
//!
//! Core domain types the pricing evaluator reads and produces.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐   ┌─────────────────┐   ┌─────────────────┐  │
//! │  │ ProductPricingConfig │   │  PriceRequest   │   │   PriceResult   │  │
//! │  │  ──────────────────  │   │  ─────────────  │   │  ─────────────  │  │
//! │  │  calculation_method  │   │  width_cm       │   │  total (Money)  │  │
//! │  │  price_per_unit      │   │  height_cm      │   │  breakdown      │  │
//! │  │  constraints/steps   │   │  price_override │   │  issue?         │  │
//! │  │  price_data ─────┐   │   │  is_platform    │   └─────────────────┘  │
//! │  └──────────────────┼───┘   └─────────────────┘                        │
//! │                     ▼                                                   │
//! │  ┌──────────────────────┐   ┌──────────────────────┐                   │
//! │  │      PriceStep       │   │  CalculationMethod   │                   │
//! │  │  width/height band   │   │  area, rail_width,   │                   │
//! │  │  price, platform     │   │  width_range, ...    │                   │
//! │  └──────────────────────┘   └──────────────────────┘                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Units
//! Customers type centimetres; every bound, floor and step in the config is in
//! metres. The evaluator converts once, at the top.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::breakdown::Locale;
use crate::error::{PricingIssue, ValidationError};
use crate::money::Money;
use crate::{DEFAULT_BAND_MAX, DEFAULT_BAND_MIN};

// =============================================================================
// Calculation Method
// =============================================================================

/// The billing algorithm a product uses.
///
/// ## Method Overview
/// ```text
/// ┌──────────────────────┬──────────────────────────────────────────────────┐
/// │ area                 │ billable width × height × factor, per m²         │
/// │ area_sq_yard         │ same algorithm, labelled per square yard         │
/// │ rail_width           │ billable width × price, per metre (rails)        │
/// │ width_range          │ flat price of the first matching width band      │
/// │ width_height_range   │ flat price of the first matching 2D band         │
/// │ box                  │ placeholder, always zero                         │
/// │ fixed                │ flat price, dimensions ignored                   │
/// │ (anything else)      │ Unknown → "invalid calculation method"           │
/// └──────────────────────┴──────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethod {
    /// Area billing per square metre.
    #[default]
    Area,
    /// Area billing labelled per square yard.
    AreaSqYard,
    /// Linear billing per metre of width.
    RailWidth,
    /// Stepped lookup on width only.
    WidthRange,
    /// Stepped lookup on width and height.
    WidthHeightRange,
    /// Reserved, not priced yet.
    Box,
    /// Flat price.
    Fixed,
    /// Any value the storefront sends that this crate doesn't know.
    #[serde(other)]
    Unknown,
}

impl CalculationMethod {
    /// The wire name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationMethod::Area => "area",
            CalculationMethod::AreaSqYard => "area_sq_yard",
            CalculationMethod::RailWidth => "rail_width",
            CalculationMethod::WidthRange => "width_range",
            CalculationMethod::WidthHeightRange => "width_height_range",
            CalculationMethod::Box => "box",
            CalculationMethod::Fixed => "fixed",
            CalculationMethod::Unknown => "unknown",
        }
    }

    /// Returns true for the stepped-lookup methods that read `price_data`.
    pub fn uses_price_steps(&self) -> bool {
        matches!(
            self,
            CalculationMethod::WidthRange | CalculationMethod::WidthHeightRange
        )
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculationMethod {
    type Err = ValidationError;

    /// Strict parse. Unlike deserialization, unknown names are an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "area" => Ok(CalculationMethod::Area),
            "area_sq_yard" => Ok(CalculationMethod::AreaSqYard),
            "rail_width" => Ok(CalculationMethod::RailWidth),
            "width_range" => Ok(CalculationMethod::WidthRange),
            "width_height_range" => Ok(CalculationMethod::WidthHeightRange),
            "box" => Ok(CalculationMethod::Box),
            "fixed" => Ok(CalculationMethod::Fixed),
            other => Err(ValidationError::UnknownMethod {
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Price Step
// =============================================================================

/// Which band price was charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    /// The shop's own price.
    Standard,
    /// The third-party sales channel price.
    Platform,
}

/// One band of a stepped price table.
///
/// Unset bounds default to `[0, 9999]` metres. Both ends are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub min_width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub max_width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub min_height: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub max_height: Option<f64>,

    /// Flat price for anything inside the band.
    pub price: f64,

    /// Platform-channel price; used only when set and > 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub price_platform: Option<f64>,
}

impl PriceStep {
    /// Creates a width band.
    pub fn width_band(min_width: f64, max_width: f64, price: f64) -> Self {
        PriceStep {
            min_width: Some(min_width),
            max_width: Some(max_width),
            price,
            ..Default::default()
        }
    }

    /// Creates a width × height band.
    pub fn size_band(
        (min_width, max_width): (f64, f64),
        (min_height, max_height): (f64, f64),
        price: f64,
    ) -> Self {
        PriceStep {
            min_width: Some(min_width),
            max_width: Some(max_width),
            min_height: Some(min_height),
            max_height: Some(max_height),
            price,
            price_platform: None,
        }
    }

    /// Sets the platform price.
    pub fn with_platform_price(mut self, price_platform: f64) -> Self {
        self.price_platform = Some(price_platform);
        self
    }

    /// Width bounds with defaults applied.
    pub fn width_bounds(&self) -> (f64, f64) {
        (
            self.min_width.unwrap_or(DEFAULT_BAND_MIN),
            self.max_width.unwrap_or(DEFAULT_BAND_MAX),
        )
    }

    /// Height bounds with defaults applied.
    pub fn height_bounds(&self) -> (f64, f64) {
        (
            self.min_height.unwrap_or(DEFAULT_BAND_MIN),
            self.max_height.unwrap_or(DEFAULT_BAND_MAX),
        )
    }

    /// Returns true if `width_m` falls inside the width band.
    pub fn contains_width(&self, width_m: f64) -> bool {
        let (min, max) = self.width_bounds();
        width_m >= min && width_m <= max
    }

    /// Returns true if both dimensions fall inside the band.
    pub fn contains_size(&self, width_m: f64, height_m: f64) -> bool {
        let (min, max) = self.height_bounds();
        self.contains_width(width_m) && height_m >= min && height_m <= max
    }

    /// Resolves the band price for the requested channel.
    ///
    /// The platform price wins only when asked for AND configured above zero;
    /// otherwise the standard price applies.
    pub fn resolve_price(&self, is_platform: bool) -> (f64, PriceTier) {
        match self.price_platform {
            Some(platform) if is_platform && platform > 0.0 => (platform, PriceTier::Platform),
            _ => (self.price, PriceTier::Standard),
        }
    }
}

// =============================================================================
// Product Pricing Config
// =============================================================================

/// The pricing record a catalog row carries.
///
/// Read-only to the evaluator. Field names match the storefront's database
/// columns so rows deserialize directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductPricingConfig {
    pub calculation_method: CalculationMethod,

    /// Price per billing unit (m², metre, or flat).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub price_per_unit: Option<f64>,

    /// Unit label, e.g. `sq_yard`, `yard`, `m`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub unit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub max_width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub min_width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub max_height: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub min_billable_width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub min_billable_height: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub width_step: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub height_step: Option<f64>,

    /// Fullness or unit-conversion multiplier on the raw area.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub area_factor: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub min_area: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub area_rounding: Option<f64>,

    /// Bands for `width_range` / `width_height_range`. Absent means empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub price_data: Vec<PriceStep>,
}

impl ProductPricingConfig {
    /// Creates a config with only a method and a unit price.
    pub fn new(calculation_method: CalculationMethod, price_per_unit: f64) -> Self {
        ProductPricingConfig {
            calculation_method,
            price_per_unit: Some(price_per_unit),
            ..Default::default()
        }
    }

    /// Effective unit price: the override, else `price_per_unit`, else 0.
    pub fn unit_price(&self, price_override: Option<f64>) -> f64 {
        price_override.or(self.price_per_unit).unwrap_or(0.0)
    }

    /// Returns true when area billing should be labelled in square yards.
    ///
    /// The `unit` column is honoured even if the method is plain `area`.
    pub fn is_sq_yard(&self) -> bool {
        self.calculation_method == CalculationMethod::AreaSqYard
            || matches!(self.unit.as_deref(), Some("sq_yard") | Some("yard"))
    }
}

// =============================================================================
// Price Request
// =============================================================================

/// One evaluation request: the customer's size plus channel options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceRequest {
    pub width_cm: f64,
    pub height_cm: f64,

    /// Replaces `price_per_unit` when present (alternate pricing tier).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub price_override: Option<f64>,

    /// Selects platform band prices where the method has bands.
    #[serde(default)]
    pub is_platform: bool,

    /// Language of the breakdown text.
    #[serde(default)]
    pub locale: Locale,
}

impl PriceRequest {
    /// Creates a request for a width × height in centimetres.
    pub fn new(width_cm: f64, height_cm: f64) -> Self {
        PriceRequest {
            width_cm,
            height_cm,
            ..Default::default()
        }
    }

    /// Sets the unit price override.
    pub fn with_price_override(mut self, price: f64) -> Self {
        self.price_override = Some(price);
        self
    }

    /// Bills through the platform channel.
    pub fn platform(mut self) -> Self {
        self.is_platform = true;
        self
    }

    /// Sets the breakdown language.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

// =============================================================================
// Price Result
// =============================================================================

/// The evaluator's output.
///
/// ## Zero Is Not Free
/// `total == 0` with `issue == Some(..)` means the size could not be priced;
/// the breakdown explains why. Callers should disable "add to quote" instead of
/// treating the item as free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceResult {
    pub total: Money,
    pub breakdown: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub issue: Option<PricingIssue>,
}

impl PriceResult {
    /// A successful price.
    pub fn priced(total: Money, breakdown: String) -> Self {
        PriceResult {
            total,
            breakdown,
            issue: None,
        }
    }

    /// A soft failure: zero total plus the reason.
    pub fn failed(issue: PricingIssue, breakdown: String) -> Self {
        PriceResult {
            total: Money::zero(),
            breakdown,
            issue: Some(issue),
        }
    }

    /// Returns true if the result carries no issue.
    pub fn is_priced(&self) -> bool {
        self.issue.is_none()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
