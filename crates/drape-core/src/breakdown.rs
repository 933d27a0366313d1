//! # Breakdown Module
//!
//! Turns what the evaluator billed into the human-readable `breakdown` string.
//!
//! The breakdown is explanatory only; nothing downstream parses it for
//! amounts. It must still name the billed quantities precisely, since it is
//! what the customer sees next to the total.
//!
//! ## Formatting Rules
//! - Billed lengths and areas: two decimals (`1.20 m`, `2.20 sq m`)
//! - Configured bounds and prices: shortest form (`2`, `1.5`, `600`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{PricingIssue, ValidationError};
use crate::types::PriceTier;

// =============================================================================
// Locale
// =============================================================================

/// Language of the breakdown text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Thai, as shown on the storefront.
    Th,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Th => write!(f, "th"),
        }
    }
}

impl FromStr for Locale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "th" | "thai" => Ok(Locale::Th),
            other => Err(ValidationError::InvalidFormat {
                field: "locale".to_string(),
                reason: format!("unknown locale '{}', expected en or th", other),
            }),
        }
    }
}

// =============================================================================
// Billing
// =============================================================================

/// What a successful evaluation charged for.
#[derive(Debug, Clone, PartialEq)]
pub enum Billing {
    /// A stepped band matched. `height` is set for 2D bands.
    Band {
        width: (f64, f64),
        height: Option<(f64, f64)>,
        tier: PriceTier,
        price: f64,
    },
    /// Linear billing on width.
    Rail { width: f64, unit_price: f64 },
    /// Area billing.
    Area {
        width: f64,
        height: f64,
        factor: f64,
        area: f64,
        sq_yard: bool,
        unit_price: f64,
    },
    /// Flat price.
    Fixed { price: f64 },
}

impl Billing {
    /// Renders the breakdown text.
    pub fn render(&self, locale: Locale) -> String {
        match locale {
            Locale::En => self.render_en(),
            Locale::Th => self.render_th(),
        }
    }

    fn render_en(&self) -> String {
        match self {
            Billing::Band {
                width,
                height,
                tier,
                price,
            } => {
                let tier = match tier {
                    PriceTier::Standard => "standard",
                    PriceTier::Platform => "platform",
                };
                match height {
                    Some(height) => format!(
                        "band {}-{} m x {}-{} m, {} price {}",
                        width.0, width.1, height.0, height.1, tier, price
                    ),
                    None => format!(
                        "width band {}-{} m, {} price {}",
                        width.0, width.1, tier, price
                    ),
                }
            }
            Billing::Rail { width, unit_price } => {
                format!("width {:.2} m x {} per m", width, unit_price)
            }
            Billing::Area {
                width,
                height,
                factor,
                area,
                sq_yard,
                unit_price,
            } => {
                let unit = if *sq_yard { "sq yd" } else { "sq m" };
                format!(
                    "{:.2} m x {:.2} m x factor {} = {:.2} {} x {}",
                    width, height, factor, area, unit, unit_price
                )
            }
            Billing::Fixed { price } => format!("flat price {}", price),
        }
    }

    fn render_th(&self) -> String {
        match self {
            Billing::Band {
                width,
                height,
                tier,
                price,
            } => {
                let tier = match tier {
                    PriceTier::Standard => "ราคาปกติ",
                    PriceTier::Platform => "ราคาแพลตฟอร์ม",
                };
                match height {
                    Some(height) => format!(
                        "ช่วงกว้าง {}-{} ม. x สูง {}-{} ม. ({} {} บาท)",
                        width.0, width.1, height.0, height.1, tier, price
                    ),
                    None => format!(
                        "ช่วงกว้าง {}-{} ม. ({} {} บาท)",
                        width.0, width.1, tier, price
                    ),
                }
            }
            Billing::Rail { width, unit_price } => {
                format!("กว้าง {:.2} ม. x {} บาท/ม.", width, unit_price)
            }
            Billing::Area {
                width,
                height,
                factor,
                area,
                sq_yard,
                unit_price,
            } => {
                let unit = if *sq_yard { "ตร.หลา" } else { "ตร.ม." };
                format!(
                    "กว้าง {:.2} ม. x สูง {:.2} ม. x {} = {:.2} {} x {} บาท",
                    width, height, factor, area, unit, unit_price
                )
            }
            Billing::Fixed { price } => format!("ราคาเหมา {} บาท", price),
        }
    }
}

// =============================================================================
// Issue Text
// =============================================================================

impl PricingIssue {
    /// Renders the failure text for the breakdown.
    ///
    /// English is the `Display` text.
    pub fn describe(&self, locale: Locale) -> String {
        match locale {
            Locale::En => self.to_string(),
            Locale::Th => self.describe_th(),
        }
    }

    fn describe_th(&self) -> String {
        match self {
            PricingIssue::InvalidDimensions {
                width_cm,
                height_cm,
            } => format!("ขนาดไม่ถูกต้อง ({} x {} ซม.)", width_cm, height_cm),
            PricingIssue::WidthAboveMax { max, .. } => {
                format!("ความกว้างเกินกำหนด (สูงสุด {} ม.)", max)
            }
            PricingIssue::WidthBelowMin { min, .. } => {
                format!("ความกว้างน้อยกว่ากำหนด (ต่ำสุด {} ม.)", min)
            }
            PricingIssue::HeightAboveMax { max, .. } => {
                format!("ความสูงเกินกำหนด (สูงสุด {} ม.)", max)
            }
            PricingIssue::NoPriceSteps => "ไม่พบข้อมูลช่วงราคา".to_string(),
            PricingIssue::WidthOutOfRange { width } => {
                format!("ความกว้างไม่อยู่ในช่วงที่กำหนด ({} ม.)", width)
            }
            PricingIssue::SizeOutOfRange { width, height } => {
                format!("ขนาดไม่อยู่ในช่วงที่กำหนด ({} x {} ม.)", width, height)
            }
            PricingIssue::NotImplemented => "ยังไม่รองรับการคำนวณแบบนี้".to_string(),
            PricingIssue::InvalidMethod => "วิธีการคำนวณไม่ถูกต้อง".to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
