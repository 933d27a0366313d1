//! # Pricing Settings
//!
//! Settings for where the catalog lives and how quotes are rendered.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     DRAPE_CATALOG_PATH=/srv/drape/catalog.json                         │
//! │     DRAPE_LOCALE=th                                                    │
//! │     DRAPE_STRICT_BANDS=true                                            │
//! │                                                                         │
//! │  2. TOML Settings File                                                 │
//! │     ~/.config/drape-pricing/pricing.toml (Linux)                       │
//! │     ~/Library/Application Support/com.drape.pricing/pricing.toml       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     ./catalog.toml, English breakdowns, overlaps warned               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Settings File Format
//! ```toml
//! # pricing.toml
//! [catalog]
//! path = "/srv/drape/catalog.toml"
//! strict_bands = false
//!
//! [quote]
//! locale = "th"
//! platform = false
//! ```

use drape_core::Locale;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{CatalogError, CatalogResult};

// =============================================================================
// Catalog Settings
// =============================================================================

/// Where the catalog file lives and how strictly it is checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Path to the catalog file (`.toml` or `.json`).
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,

    /// Reject catalogs whose bands overlap instead of warning.
    #[serde(default)]
    pub strict_bands: bool,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("catalog.toml")
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            path: default_catalog_path(),
            strict_bands: false,
        }
    }
}

// =============================================================================
// Quote Settings
// =============================================================================

/// Defaults applied to quote requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteSettings {
    /// Breakdown language.
    #[serde(default)]
    pub locale: Locale,

    /// Quote platform-channel prices by default.
    #[serde(default)]
    pub platform: bool,
}

// =============================================================================
// Main Settings
// =============================================================================

/// Complete pricing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingSettings {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub quote: QuoteSettings,
}

impl PricingSettings {
    /// Loads settings from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Settings file (pricing.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CatalogResult<Self> {
        let mut settings = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading pricing settings from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| CatalogError::load_failed(&path, e))?;
                settings = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Settings file not found, using defaults");
            }
        }

        settings.apply_env_overrides();
        settings.validate()?;

        Ok(settings)
    }

    /// Loads settings or returns defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load pricing settings: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves settings to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> CatalogResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| CatalogError::SaveFailed("No settings path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CatalogError::SaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| CatalogError::SaveFailed(e.to_string()))?;

        info!(?path, "Pricing settings saved");
        Ok(())
    }

    /// Validates the settings.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.catalog.path.as_os_str().is_empty() {
            return Err(CatalogError::InvalidSettings(
                "catalog.path must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the environment in production).
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("DRAPE_CATALOG_PATH") {
            debug!(path = %path, "Overriding catalog path from environment");
            self.catalog.path = PathBuf::from(path);
        }

        if let Some(locale) = lookup("DRAPE_LOCALE") {
            match locale.parse() {
                Ok(parsed) => self.quote.locale = parsed,
                Err(_) => warn!(locale = %locale, "Unknown locale in environment"),
            }
        }

        if let Some(strict) = lookup("DRAPE_STRICT_BANDS") {
            match strict.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.catalog.strict_bands = true,
                "0" | "false" | "no" => self.catalog.strict_bands = false,
                _ => warn!(value = %strict, "Unknown DRAPE_STRICT_BANDS value"),
            }
        }
    }

    /// Returns the default settings file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "drape", "pricing")
            .map(|dirs| dirs.config_dir().join("pricing.toml"))
    }
}
