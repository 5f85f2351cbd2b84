pub mod engine;
pub mod pricing;

pub use crate::domain::catalog::Catalog;
pub use crate::domain::model::{BillingPeriod, BundleDiscount, PricingSummary, ServiceOffering};
pub use crate::domain::ports::{CatalogSource, PricingView, SummaryRenderer};
pub use crate::domain::selection::SelectionState;
pub use crate::utils::error::Result;
