use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which total a service contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BillingPeriod {
    OneOff,
    Monthly,
}

impl BillingPeriod {
    /// Short label used next to a price on a service card.
    pub fn card_label(&self) -> &'static str {
        match self {
            BillingPeriod::OneOff => "one-off",
            BillingPeriod::Monthly => "/month",
        }
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillingPeriod::OneOff => write!(f, "one-off"),
            BillingPeriod::Monthly => write!(f, "monthly"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub period: BillingPeriod,
    #[serde(default)]
    pub features: Vec<String>,
}

/// One selected service as shown in the summary panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub period: BillingPeriod,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub list_price: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PricingSummary {
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub monthly_total: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub one_off_total: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub combined_total: Decimal,
    pub has_discount: bool,
    pub line_items: Vec<LineItem>,
}

/// The scheduling link shown under the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub url: String,
    pub note: String,
}

impl Default for CallToAction {
    fn default() -> Self {
        Self {
            label: "Get Started".to_string(),
            url: "https://calendly.com/elliot-greyflow/audit".to_string(),
            note: "Ready to accelerate your machine shop's LinkedIn presence? \
                   Get in touch to discuss your requirements."
                .to_string(),
        }
    }
}

/// Percentage taken off both period totals when more than one service is
/// selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BundleDiscount {
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    percent: Decimal,
}

impl BundleDiscount {
    pub const DEFAULT_PERCENT: Decimal = rust_decimal_macros::dec!(15);

    /// `percent` must lie in `[0, 100)` with at most two decimal places, so
    /// the multiplier is at least `0.0001` and a discounted amount can always
    /// be divided back to its list price.
    pub fn from_percent(percent: Decimal) -> crate::utils::error::Result<Self> {
        const FIELD: &str = "pricing.bundle_discount_percent";
        crate::utils::validation::validate_half_open_range(
            FIELD,
            percent,
            Decimal::ZERO,
            Decimal::ONE_HUNDRED,
        )?;
        crate::utils::validation::validate_max_decimal_places(FIELD, percent, 2)?;
        Ok(Self { percent })
    }

    pub fn percent(&self) -> Decimal {
        self.percent
    }

    /// Factor applied to a discounted total, `0.85` for the default 15%.
    pub fn multiplier(&self) -> Decimal {
        Decimal::ONE - self.percent / Decimal::ONE_HUNDRED
    }

    pub fn apply(&self, amount: Decimal) -> Decimal {
        amount * self.multiplier()
    }

    /// Recovers the list amount from a discounted one.
    pub fn reverse(&self, amount: Decimal) -> Decimal {
        amount / self.multiplier()
    }
}

impl Default for BundleDiscount {
    fn default() -> Self {
        Self {
            percent: Self::DEFAULT_PERCENT,
        }
    }
}
