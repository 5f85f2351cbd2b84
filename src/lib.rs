pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::renderers::{JsonRenderer, TextRenderer};
pub use app::session::InteractiveSession;
pub use config::{toml_config::CatalogConfig, BuiltinCatalog};
pub use crate::core::engine::PricingEngine;
pub use crate::core::pricing::{compute_summary, compute_summary_with};
pub use domain::catalog::Catalog;
pub use domain::model::{BillingPeriod, BundleDiscount, CallToAction, PricingSummary, ServiceOffering};
pub use domain::selection::SelectionState;
pub use utils::currency::format_price;
pub use utils::error::{CalcError, Result};
