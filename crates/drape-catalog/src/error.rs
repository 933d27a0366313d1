//! # Catalog Error Types
//!
//! Error types for catalog loading, settings and lookups.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │     Source      │  │     Records     │  │       Lookup            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  LoadFailed     │  │  InvalidProduct │  │  ProductNotFound        │ │
//! │  │  ParseFailed    │  │  Duplicate      │  │                         │ │
//! │  │  SaveFailed     │  │  InvalidSettings│  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing soft failures are NOT catalog errors; they stay inside
//! [`PriceResult`](drape_core::PriceResult).

use drape_core::ValidationError;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog error type.
#[derive(Debug, Error)]
pub enum CatalogError {
    // =========================================================================
    // Source Errors
    // =========================================================================
    /// Failed to read a catalog or settings file.
    #[error("Failed to load {path}: {reason}")]
    LoadFailed { path: String, reason: String },

    /// File contents could not be parsed.
    #[error("Failed to parse catalog: {0}")]
    ParseFailed(String),

    /// Failed to write a settings file.
    #[error("Failed to save settings: {0}")]
    SaveFailed(String),

    // =========================================================================
    // Record Errors
    // =========================================================================
    /// A product's pricing record failed validation.
    #[error("Invalid pricing for product {id}: {source}")]
    InvalidProduct {
        id: String,
        #[source]
        source: ValidationError,
    },

    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Settings are unusable.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    // =========================================================================
    // Lookup Errors
    // =========================================================================
    /// No product with this id in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::ParseFailed(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::ParseFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for CatalogError {
    fn from(err: toml::ser::Error) -> Self {
        CatalogError::SaveFailed(err.to_string())
    }
}

impl CatalogError {
    /// Wraps an I/O error with the path it happened on.
    pub fn load_failed(path: &std::path::Path, err: std::io::Error) -> Self {
        CatalogError::LoadFailed {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Returns true if the problem is in the catalog data itself.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            CatalogError::ParseFailed(_)
                | CatalogError::InvalidProduct { .. }
                | CatalogError::DuplicateProduct(_)
        )
    }
}
