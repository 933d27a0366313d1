//! # drape-catalog: Pricing Catalog and Settings
//!
//! Feeds product pricing records to [`drape_core`] as data, and ships the
//! `quote` command-line tool.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Quote Flow                                    │
//! │                                                                         │
//! │   pricing.toml + DRAPE_* env                                            │
//! │          │                                                              │
//! │          ▼                                                              │
//! │   PricingSettings ──► catalog.path ──► Catalog::load ──► validate       │
//! │                                              │                          │
//! │                                              ▼                          │
//! │   PriceRequest (cm, platform, locale) ──► Catalog::quote(id)            │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                                drape_core::evaluate_price               │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                                   PriceResult { total, breakdown }      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Catalog files, validation and lookup
//! - [`config`] - Settings file and environment overrides
//! - [`error`] - Catalog error types

pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::{Catalog, CatalogProduct};
pub use config::{CatalogSettings, PricingSettings, QuoteSettings};
pub use error::{CatalogError, CatalogResult};

use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,drape=debug";

/// Initializes the tracing subscriber for command-line tools.
///
/// `RUST_LOG` overrides [`DEFAULT_LOG_FILTER`]. Logs go to stderr so quote
/// output on stdout stays machine-readable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
