//! # drape-core: Pure Pricing Logic for the Drape Storefront
//!
//! This crate is the **heart** of Drape pricing. It turns a product's pricing
//! configuration and a customer-entered size into a billable total and a
//! human-readable breakdown, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Drape Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront (Next.js + Supabase)                 │   │
//! │  │    Product page ──► Size form ──► Quote draft ──► Admin         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ProductPricingConfig + width/height    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               drape-catalog (files, settings, quote CLI)        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ drape-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  pricing  │  │   money   │  │ breakdown │  │ validation│  │   │
//! │  │   │ evaluator │  │  rounding │  │  en / th  │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Pricing config, request and result types
//! - [`pricing`] - The evaluator
//! - [`money`] - Whole-unit `Money` and the two-stage rounding helpers
//! - [`breakdown`] - Breakdown text in English and Thai
//! - [`error`] - Pricing issues and validation errors
//! - [`validation`] - Config and input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, no hidden state
//! 2. **Never Throws**: the evaluator returns a value for every input
//! 3. **Round Up, Once Cleanly**: clamp float noise, then ceil in the seller's favour
//! 4. **Config Is Data**: prices come from the catalog, never from constants
//!
//! ## Example Usage
//!
//! ```rust
//! use drape_core::{evaluate_price, CalculationMethod, PriceRequest, ProductPricingConfig};
//!
//! let mut curtain = ProductPricingConfig::new(CalculationMethod::Area, 500.0);
//! curtain.height_step = Some(0.2);
//!
//! let result = evaluate_price(&curtain, &PriceRequest::new(100.0, 210.0));
//!
//! // 1.00 m × 2.20 m = 2.2 m² × 500 = 1100
//! assert_eq!(result.total.units(), 1100);
//! assert!(result.is_priced());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod breakdown;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use breakdown::{Billing, Locale};
pub use error::{PricingIssue, ValidationError};
pub use money::Money;
pub use pricing::{calculate_price, evaluate_price};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Centimetres per metre. Customers enter cm, configs are in m.
pub const CM_PER_METER: f64 = 100.0;

/// Lower bound of a band edge left unset.
pub const DEFAULT_BAND_MIN: f64 = 0.0;

/// Upper bound of a band edge left unset.
pub const DEFAULT_BAND_MAX: f64 = 9999.0;
