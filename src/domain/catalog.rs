use crate::domain::model::{BillingPeriod, ServiceOffering};
use crate::domain::selection::SelectionState;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::validate_price;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashSet;

/// Ordered, read-only table of service offerings.
///
/// Ids are unique. Once built the table is never mutated; every accessor
/// hands out shared references.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    services: Vec<ServiceOffering>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and prices that are not
    /// whole, bounded amounts. The sum of every price must also leave room
    /// for display rounding, so no selection can overflow when priced.
    /// Order is preserved.
    pub fn new(services: Vec<ServiceOffering>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(services.len());
        let mut total = Decimal::ZERO;
        for (i, service) in services.iter().enumerate() {
            if !seen.insert(service.id.as_str()) {
                return Err(CalcError::DuplicateServiceId {
                    id: service.id.clone(),
                });
            }
            validate_price(&format!("services[{}].price", i), service.price)?;
            total = total
                .checked_add(service.price)
                .and_then(|t| t.checked_add(dec!(0.5)).map(|_| t))
                .ok_or_else(|| CalcError::InvalidConfigValueError {
                    field: "services".to_string(),
                    value: service.price.to_string(),
                    reason: "Catalog prices add up beyond the representable range".to_string(),
                })?;
        }
        Ok(Self { services })
    }

    /// Sum of every list price; an upper bound for any selection's total.
    pub fn list_total(&self) -> Decimal {
        self.services.iter().map(|s| s.price).sum()
    }

    /// The default three-service table.
    pub fn builtin() -> Self {
        Self {
            services: vec![
                ServiceOffering {
                    id: "kickoff".to_string(),
                    name: "30 Day Kick Off".to_string(),
                    tagline: "Get the engine built".to_string(),
                    description: "Complete foundation setup for your LinkedIn presence".to_string(),
                    price: dec!(1000),
                    period: BillingPeriod::OneOff,
                    features: vec![
                        "Phases 1-3 included".to_string(),
                        "Complete profile optimization".to_string(),
                        "Strategy development".to_string(),
                    ],
                },
                ServiceOffering {
                    id: "video".to_string(),
                    name: "Video & Visuals".to_string(),
                    tagline: "Ongoing story fuel".to_string(),
                    description: "Professional content creation to keep your audience engaged"
                        .to_string(),
                    price: dec!(950),
                    period: BillingPeriod::Monthly,
                    features: vec![
                        "1 shoot per quarter".to_string(),
                        "6-8 video clips".to_string(),
                        "4 carousel graphics monthly".to_string(),
                    ],
                },
                ServiceOffering {
                    id: "ads".to_string(),
                    name: "Ads Booster".to_string(),
                    tagline: "Need reach fast".to_string(),
                    description: "Managed advertising campaigns with professional creative"
                        .to_string(),
                    price: dec!(650),
                    period: BillingPeriod::Monthly,
                    features: vec![
                        "Managed £1k-£5k ad spend".to_string(),
                        "Creative development".to_string(),
                        "Performance reporting".to_string(),
                    ],
                },
            ],
        }
    }

    pub fn all(&self) -> &[ServiceOffering] {
        &self.services
    }

    pub fn get(&self, id: &str) -> Option<&ServiceOffering> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Entries whose id is selected, in catalog order. Selected ids with no
    /// catalog entry are skipped.
    pub fn filter_selected<'a>(
        &'a self,
        selection: &'a SelectionState,
    ) -> impl Iterator<Item = &'a ServiceOffering> + 'a {
        self.services
            .iter()
            .filter(move |s| selection.contains(&s.id))
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
