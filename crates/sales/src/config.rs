//! Configuration loaded from environment variables.

use domain::{DefaultTaxPolicy, ProductType, TaxRates};

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

/// Sales configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT`: `plain` or `json` (default: `plain`)
/// - `TAX_RATE_STANDARD`, `TAX_RATE_DRUG`, `TAX_RATE_FOOD`, `TAX_RATE_DVD`:
///   tax rate in basis points for that product type (defaults: 2300, 500,
///   700, unset)
///
/// Values that fail to parse are ignored in favour of the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesConfig {
    pub log_level: String,
    pub log_format: LogFormat,
    pub tax_rates: TaxRates,
}

impl SalesConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup("RUST_LOG") {
            config.log_level = level;
        }

        if let Some(format) = lookup("LOG_FORMAT") {
            match format.to_ascii_lowercase().as_str() {
                "json" => config.log_format = LogFormat::Json,
                "plain" => config.log_format = LogFormat::Plain,
                _ => {}
            }
        }

        for product_type in ProductType::ALL {
            let key = format!("TAX_RATE_{}", product_type.as_str());
            if let Some(bps) = lookup(&key).and_then(|v| v.trim().parse::<u32>().ok()) {
                config.tax_rates.set_rate(product_type, bps);
            }
        }

        config
    }

    /// Builds the tax policy described by this configuration.
    pub fn tax_policy(&self) -> DefaultTaxPolicy {
        DefaultTaxPolicy::new(self.tax_rates.clone())
    }
}

impl Default for SalesConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Plain,
            tax_rates: TaxRates::standard(),
        }
    }
}
