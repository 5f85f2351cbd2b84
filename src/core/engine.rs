use crate::core::pricing::compute_summary_with;
use crate::domain::catalog::Catalog;
use crate::domain::model::{BundleDiscount, CallToAction, PricingSummary};
use crate::domain::ports::PricingView;
use crate::domain::selection::SelectionState;

/// Owns the selection and keeps the summary in step with it.
///
/// `toggle` is the only mutator and recomputes the summary before returning,
/// so `summary()` always reflects `selection()`.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    catalog: Catalog,
    discount: BundleDiscount,
    selection: SelectionState,
    summary: PricingSummary,
}

impl PricingEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_discount(catalog, BundleDiscount::default())
    }

    pub fn with_discount(catalog: Catalog, discount: BundleDiscount) -> Self {
        let selection = SelectionState::new();
        let summary = compute_summary_with(&catalog, &selection, discount);
        Self {
            catalog,
            discount,
            selection,
            summary,
        }
    }

    /// Flips `id` in the selection and recomputes. Ids missing from the
    /// catalog are accepted but never priced. Returns whether `id` is now
    /// selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        let selected = self.selection.toggle(id);
        if !self.catalog.contains(id) {
            tracing::debug!("Toggled '{}' which is not in the catalog; it will not be priced", id);
        }

        self.summary = compute_summary_with(&self.catalog, &self.selection, self.discount);
        tracing::debug!(
            id,
            selected,
            count = self.selection.len(),
            has_discount = self.summary.has_discount,
            monthly_total = %self.summary.monthly_total,
            one_off_total = %self.summary.one_off_total,
            "Selection changed"
        );
        selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn summary(&self) -> &PricingSummary {
        &self.summary
    }

    pub fn discount(&self) -> BundleDiscount {
        self.discount
    }

    pub fn view<'a>(&'a self, call_to_action: &'a CallToAction) -> PricingView<'a> {
        PricingView {
            catalog: &self.catalog,
            selection: &self.selection,
            summary: &self.summary,
            discount: self.discount,
            call_to_action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_starts_empty() {
        let engine = PricingEngine::new(Catalog::builtin());
        assert!(!engine.has_selection());
        assert_eq!(engine.summary(), &PricingSummary::default());
    }

    #[test]
    fn test_toggle_recomputes_immediately() {
        let mut engine = PricingEngine::new(Catalog::builtin());
        assert!(engine.toggle("video"));
        assert_eq!(engine.summary().monthly_total, dec!(950));

        assert!(engine.toggle("ads"));
        assert_eq!(engine.summary().monthly_total, dec!(1360));
        assert!(engine.summary().has_discount);

        assert!(!engine.toggle("video"));
        assert_eq!(engine.summary().monthly_total, dec!(650));
        assert!(!engine.summary().has_discount);
    }

    #[test]
    fn test_unknown_id_flips_membership_only() {
        let mut engine = PricingEngine::new(Catalog::builtin());
        assert!(engine.toggle("does-not-exist"));
        assert!(engine.is_selected("does-not-exist"));
        assert!(engine.has_selection());
        assert_eq!(engine.summary().combined_total, dec!(0));
        assert!(!engine.toggle("does-not-exist"));
        assert!(!engine.has_selection());
    }
}
