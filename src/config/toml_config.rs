use crate::core::CatalogSource;
use crate::domain::catalog::Catalog;
use crate::domain::model::{BundleDiscount, CallToAction, ServiceOffering};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_service_id, validate_url, Validate,
};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Catalog file layout: optional `[widget]` and `[pricing]` tables plus one
/// `[[services]]` entry per offering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub widget: Option<WidgetConfig>,
    pub pricing: Option<PricingConfig>,
    #[serde(default)]
    pub services: Vec<ServiceOffering>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub cta_note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingConfig {
    pub bundle_discount_percent: Option<Decimal>,
}

impl CatalogConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("env pattern failed to compile: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        self.build_catalog().map(|_| ())
    }

    /// Runs every check and returns the frozen catalog. Price bounds and
    /// duplicate ids are checked by `Catalog::new`; this adds the file-level
    /// rules and makes sure the list total can be divided back through the
    /// configured discount.
    fn build_catalog(&self) -> Result<Catalog> {
        if self.services.is_empty() {
            return Err(CalcError::MissingConfigError {
                field: "services".to_string(),
            });
        }

        for (i, service) in self.services.iter().enumerate() {
            validate_service_id(&format!("services[{}].id", i), &service.id)?;
            validate_non_empty_string(&format!("services[{}].name", i), &service.name)?;
        }

        if let Some(url) = self.widget.as_ref().and_then(|w| w.cta_url.as_deref()) {
            validate_url("widget.cta_url", url)?;
        }

        let discount = self.bundle_discount_from_config()?;
        let catalog = Catalog::new(self.services.clone())?;

        let list_total = catalog.list_total();
        list_total
            .checked_div(discount.multiplier())
            .and_then(|original| original.checked_add(Decimal::ONE))
            .ok_or_else(|| CalcError::InvalidConfigValueError {
                field: "pricing.bundle_discount_percent".to_string(),
                value: discount.percent().to_string(),
                reason: format!(
                    "List total {} cannot be recovered through this discount",
                    list_total
                ),
            })?;

        Ok(catalog)
    }

    fn bundle_discount_from_config(&self) -> Result<BundleDiscount> {
        match self.pricing.as_ref().and_then(|p| p.bundle_discount_percent) {
            Some(percent) => BundleDiscount::from_percent(percent),
            None => Ok(BundleDiscount::default()),
        }
    }
}

impl CatalogSource for CatalogConfig {
    fn load_catalog(&self) -> Result<Catalog> {
        self.build_catalog()
    }

    fn bundle_discount(&self) -> Result<BundleDiscount> {
        self.bundle_discount_from_config()
    }

    fn call_to_action(&self) -> CallToAction {
        let defaults = CallToAction::default();
        let widget = self.widget.clone().unwrap_or_default();
        CallToAction {
            label: widget.cta_label.unwrap_or(defaults.label),
            url: widget.cta_url.unwrap_or(defaults.url),
            note: widget.cta_note.unwrap_or(defaults.note),
        }
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::BillingPeriod;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[widget]
cta_label = "Book a call"

[[services]]
id = "kickoff"
name = "30 Day Kick Off"
tagline = "Get the engine built"
description = "Complete foundation setup"
price = 1000
period = "one-off"
features = ["Phases 1-3 included"]

[[services]]
id = "video"
name = "Video & Visuals"
tagline = "Ongoing story fuel"
description = "Professional content creation"
price = 950
period = "monthly"
"#;

    #[test]
    fn test_parse_basic_catalog() {
        let config = CatalogConfig::from_toml_str(BASIC).unwrap();
        assert!(config.validate().is_ok());

        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        let video = catalog.get("video").unwrap();
        assert_eq!(video.price, dec!(950));
        assert_eq!(video.period, BillingPeriod::Monthly);
        assert!(video.features.is_empty());

        assert_eq!(config.bundle_discount().unwrap(), BundleDiscount::default());

        let cta = config.call_to_action();
        assert_eq!(cta.label, "Book a call");
        assert_eq!(cta.url, CallToAction::default().url);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PRICING_CALC_TEST_CTA", "https://example.com/book");

        let toml_content = r#"
[widget]
cta_url = "${PRICING_CALC_TEST_CTA}"

[[services]]
id = "ads"
name = "Ads Booster"
tagline = ""
description = ""
price = 650
period = "monthly"
"#;

        let config = CatalogConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.call_to_action().url, "https://example.com/book");

        std::env::remove_var("PRICING_CALC_TEST_CTA");
    }

    #[test]
    fn test_duplicate_ids_fail_validation() {
        let toml_content = r#"
[[services]]
id = "ads"
name = "Ads Booster"
tagline = ""
description = ""
price = 650
period = "monthly"

[[services]]
id = "ads"
name = "Ads Booster Plus"
tagline = ""
description = ""
price = 900
period = "monthly"
"#;
        let config = CatalogConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(CalcError::DuplicateServiceId { .. })
        ));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let negative = BASIC.replace("price = 950", "price = -950");
        let config = CatalogConfig::from_toml_str(&negative).unwrap();
        assert!(config.validate().is_err());

        let bad_url = BASIC.replace(
            "cta_label = \"Book a call\"",
            "cta_url = \"mailto:sales@example.com\"",
        );
        let config = CatalogConfig::from_toml_str(&bad_url).unwrap();
        assert!(config.validate().is_err());

        let full_discount = format!("[pricing]\nbundle_discount_percent = 100\n{}", BASIC);
        let config = CatalogConfig::from_toml_str(&full_discount).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overflowing_prices_rejected_at_load() {
        let toml_content = r#"
[[services]]
id = "video"
name = "Video"
tagline = ""
description = ""
price = 5e28
period = "monthly"

[[services]]
id = "ads"
name = "Ads"
tagline = ""
description = ""
price = 5e28
period = "monthly"
"#;
        let config = CatalogConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.load_catalog(),
            Err(CalcError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_fractional_price_rejected() {
        let half = BASIC.replace("price = 950", "price = 0.5");
        let config = CatalogConfig::from_toml_str(&half).unwrap();
        assert!(matches!(
            config.validate(),
            Err(CalcError::InvalidConfigValueError { field, .. }) if field == "services[1].price"
        ));
    }

    #[test]
    fn test_discount_with_too_many_decimals_rejected() {
        let precise = format!("[pricing]\nbundle_discount_percent = 99.999\n{}", BASIC);
        let config = CatalogConfig::from_toml_str(&precise).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_catalog_is_missing_services() {
        let config = CatalogConfig::from_toml_str("[widget]\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(CalcError::MissingConfigError { field }) if field == "services"
        ));
    }

    #[test]
    fn test_unknown_period_is_a_parse_error() {
        let yearly = BASIC.replace("period = \"monthly\"", "period = \"yearly\"");
        assert!(matches!(
            CatalogConfig::from_toml_str(&yearly),
            Err(CalcError::TomlError(_))
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = CatalogConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.services[0].id, "kickoff");
    }
}
