//! # Quote Tool
//!
//! Prices a catalog product from the command line.
//!
//! ## Usage
//! ```bash
//! # List the products in the configured catalog
//! cargo run -p drape-catalog --bin quote -- --list
//!
//! # Quote a 120 × 250 cm curtain
//! cargo run -p drape-catalog --bin quote -- --product <ID> --width 120 --height 250
//!
//! # Platform price, Thai breakdown, JSON output
//! cargo run -p drape-catalog --bin quote -- -p <ID> -w 120 --platform --locale th --json
//! ```
//!
//! The catalog path comes from `--catalog`, else the settings file and
//! `DRAPE_CATALOG_PATH`. Exits with status 2 when the size cannot be priced.

use std::env;
use std::path::PathBuf;

use drape_catalog::{init_tracing, Catalog, PricingSettings};
use drape_core::{Locale, PriceRequest};

fn print_usage() {
    println!("Drape Quote Tool");
    println!();
    println!("Usage: quote [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -p, --product <ID>     Product id to quote");
    println!("  -w, --width <CM>       Width in centimetres (default: 0)");
    println!("  -H, --height <CM>      Height in centimetres (default: 0)");
    println!("  -c, --catalog <PATH>   Catalog file (.toml or .json)");
    println!("      --config <PATH>    Settings file (default: platform config dir)");
    println!("      --price <N>        Override the unit price");
    println!("      --platform         Use platform band prices");
    println!("      --locale <en|th>   Breakdown language");
    println!("      --json             Print the result as JSON");
    println!("  -l, --list             List catalog products");
    println!("  -h, --help             Show this help message");
}

fn parse_number(flag: &str, value: &str) -> Result<f64, String> {
    value
        .parse()
        .map_err(|_| format!("invalid value for {}: '{}'", flag, value))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut product_id: Option<String> = None;
    let mut width_cm = 0.0;
    let mut height_cm = 0.0;
    let mut catalog_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut price_override: Option<f64> = None;
    let mut platform = false;
    let mut locale: Option<Locale> = None;
    let mut json = false;
    let mut list = false;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args.get(i + 1).map(String::as_str);

        match (flag, value) {
            ("--product" | "-p", Some(v)) => {
                product_id = Some(v.to_string());
                i += 1;
            }
            ("--width" | "-w", Some(v)) => {
                width_cm = parse_number(flag, v)?;
                i += 1;
            }
            ("--height" | "-H", Some(v)) => {
                height_cm = parse_number(flag, v)?;
                i += 1;
            }
            ("--catalog" | "-c", Some(v)) => {
                catalog_path = Some(PathBuf::from(v));
                i += 1;
            }
            ("--config", Some(v)) => {
                config_path = Some(PathBuf::from(v));
                i += 1;
            }
            ("--price", Some(v)) => {
                price_override = Some(parse_number(flag, v)?);
                i += 1;
            }
            ("--locale", Some(v)) => {
                locale = Some(v.parse()?);
                i += 1;
            }
            ("--platform", _) => platform = true,
            ("--json", _) => json = true,
            ("--list" | "-l", _) => list = true,
            ("--help" | "-h", _) => {
                print_usage();
                return Ok(());
            }
            _ => {
                return Err(
                    format!("unexpected or incomplete argument '{}' (try --help)", flag).into(),
                )
            }
        }
        i += 1;
    }

    init_tracing();

    let settings = PricingSettings::load(config_path)?;
    let catalog_path = catalog_path.unwrap_or_else(|| settings.catalog.path.clone());
    let catalog = Catalog::load(&catalog_path, settings.catalog.strict_bands)?;

    if list {
        for product in catalog.products() {
            println!(
                "{}  {:<20}  {}",
                product.id,
                product.pricing.calculation_method.as_str(),
                product.name
            );
        }
        return Ok(());
    }

    let product_id = product_id.ok_or("missing --product (try --help)")?;

    let mut request = PriceRequest::new(width_cm, height_cm)
        .with_locale(locale.unwrap_or(settings.quote.locale));
    if platform || settings.quote.platform {
        request = request.platform();
    }
    if let Some(price) = price_override {
        request = request.with_price_override(price);
    }

    let result = catalog.quote(&product_id, &request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Total:     {}", result.total);
        println!("Breakdown: {}", result.breakdown);
    }

    if !result.is_priced() {
        std::process::exit(2);
    }

    Ok(())
}
