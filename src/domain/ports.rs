use crate::domain::catalog::Catalog;
use crate::domain::model::{BundleDiscount, CallToAction, PricingSummary};
use crate::domain::selection::SelectionState;
use crate::utils::error::Result;

/// Where a catalog and its surrounding widget settings come from.
pub trait CatalogSource {
    fn load_catalog(&self) -> Result<Catalog>;
    fn bundle_discount(&self) -> Result<BundleDiscount>;
    fn call_to_action(&self) -> CallToAction;
}

/// Everything a front-end needs to draw the calculator once.
#[derive(Debug, Clone, Copy)]
pub struct PricingView<'a> {
    pub catalog: &'a Catalog,
    pub selection: &'a SelectionState,
    pub summary: &'a PricingSummary,
    pub discount: BundleDiscount,
    pub call_to_action: &'a CallToAction,
}

pub trait SummaryRenderer {
    fn render(&self, view: &PricingView<'_>) -> Result<String>;
    fn render_catalog(&self, catalog: &Catalog) -> Result<String>;
}

impl<T: SummaryRenderer + ?Sized> SummaryRenderer for Box<T> {
    fn render(&self, view: &PricingView<'_>) -> Result<String> {
        (**self).render(view)
    }

    fn render_catalog(&self, catalog: &Catalog) -> Result<String> {
        (**self).render_catalog(catalog)
    }
}
