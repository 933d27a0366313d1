//! # Catalog
//!
//! The set of products the storefront can quote, each carrying its pricing
//! record as data.
//!
//! ## File Formats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Sources                                  │
//! │                                                                         │
//! │  catalog.toml                      catalog.json                         │
//! │  ┌──────────────────────────┐      ┌──────────────────────────────┐    │
//! │  │ [[products]]             │      │ { "products": [ {...} ] }    │    │
//! │  │ id = "..."               │      │        or                    │    │
//! │  │ calculation_method = ... │      │ [ {...}, {...} ]             │    │
//! │  │ [[products.price_data]]  │      │ (rows exported from the DB)  │    │
//! │  └────────────┬─────────────┘      └──────────────┬───────────────┘    │
//! │               └──────────────┬─────────────────────┘                    │
//! │                              ▼                                          │
//! │              validate id + pricing record + band overlaps               │
//! │                              ▼                                          │
//! │                   Catalog (immutable, indexed by id)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any `.json` extension is read as JSON; everything else is read as TOML.

use std::collections::HashMap;
use std::path::Path;

use drape_core::validation::{find_band_overlaps, validate_pricing_config, validate_product_id};
use drape_core::{
    evaluate_price, CalculationMethod, PriceRequest, PriceResult, ProductPricingConfig,
    ValidationError,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{CatalogError, CatalogResult};

// =============================================================================
// Catalog Product
// =============================================================================

/// One sellable product and its pricing record.
///
/// The pricing fields sit next to `id` and `name` in the file, the same shape
/// as a product row in the storefront database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(flatten)]
    pub pricing: ProductPricingConfig,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<CatalogProduct>,
}

// =============================================================================
// Catalog
// =============================================================================

/// Validated, read-only product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<CatalogProduct>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, validating every product.
    ///
    /// Overlapping bands are logged, or rejected when `strict_bands` is set.
    pub fn from_products(products: Vec<CatalogProduct>, strict_bands: bool) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            check_product(product, strict_bands)?;

            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
        }

        debug!(count = products.len(), "Catalog built");
        Ok(Catalog { products, index })
    }

    /// Parses a TOML catalog (`[[products]]` tables).
    pub fn from_toml_str(contents: &str, strict_bands: bool) -> CatalogResult<Self> {
        let file: CatalogFile = toml::from_str(contents)?;
        Self::from_products(file.products, strict_bands)
    }

    /// Parses a JSON catalog: a bare array of products or `{ "products": [...] }`.
    pub fn from_json_str(contents: &str, strict_bands: bool) -> CatalogResult<Self> {
        let value: serde_json::Value = serde_json::from_str(contents)?;

        let products: Vec<CatalogProduct> = if value.is_array() {
            serde_json::from_value(value)?
        } else {
            serde_json::from_value::<CatalogFile>(value)?.products
        };

        Self::from_products(products, strict_bands)
    }

    /// Loads a catalog file, choosing the format by extension.
    pub fn load(path: impl AsRef<Path>, strict_bands: bool) -> CatalogResult<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| CatalogError::load_failed(path, e))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::from_json_str(&contents, strict_bands)?
        } else {
            Self::from_toml_str(&contents, strict_bands)?
        };

        info!(?path, products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&CatalogProduct> {
        self.index.get(id).map(|&position| &self.products[position])
    }

    /// All products, in file order.
    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Prices a request against a catalog product.
    ///
    /// An unknown id is an error. Pricing failures (size out of range, missing
    /// bands, ...) are not: they come back inside the [`PriceResult`].
    pub fn quote(&self, id: &str, request: &PriceRequest) -> CatalogResult<PriceResult> {
        let product = self
            .get(id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))?;

        let result = evaluate_price(&product.pricing, request);
        if let Some(issue) = &result.issue {
            warn!(product = %product.id, %issue, "Quote not priced");
        }

        Ok(result)
    }
}

fn check_product(product: &CatalogProduct, strict_bands: bool) -> CatalogResult<()> {
    let invalid = |source: ValidationError| CatalogError::InvalidProduct {
        id: product.id.clone(),
        source,
    };

    validate_product_id(&product.id).map_err(invalid)?;
    validate_pricing_config(&product.pricing).map_err(invalid)?;

    let two_dimensional =
        product.pricing.calculation_method == CalculationMethod::WidthHeightRange;
    let overlaps = find_band_overlaps(&product.pricing.price_data, two_dimensional);

    if let Some(&(first, second)) = overlaps.first() {
        if strict_bands {
            return Err(invalid(ValidationError::OverlappingBands { first, second }));
        }
        for (first, second) in &overlaps {
            warn!(
                product = %product.id,
                first,
                second,
                "Overlapping price bands, the first listed wins"
            );
        }
    }

    Ok(())
}
