use crate::core::{Catalog, PricingView, Result, SummaryRenderer};
use crate::utils::currency::{format_period_price, format_price, CURRENCY_CODE, LOCALE};
use crate::domain::model::BillingPeriod;
use serde_json::json;

/// Machine-readable rendering: raw totals as numbers alongside the same
/// display strings the text renderer uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl SummaryRenderer for JsonRenderer {
    fn render(&self, view: &PricingView<'_>) -> Result<String> {
        let summary = view.summary;
        let display = if view.selection.is_empty() {
            serde_json::Value::Null
        } else {
            json!({
                "one_off_total": format_price(summary.one_off_total),
                "monthly_total": format_period_price(summary.monthly_total, BillingPeriod::Monthly),
                "total": summary.total_display(),
                "original_total": summary.original_total_display(view.discount),
            })
        };

        let document = json!({
            "locale": LOCALE,
            "currency": CURRENCY_CODE,
            "selected": view.selection,
            "bundle_discount": view.discount,
            "summary": summary,
            "display": display,
            "call_to_action": view.call_to_action,
        });

        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn render_catalog(&self, catalog: &Catalog) -> Result<String> {
        Ok(serde_json::to_string_pretty(catalog.all())?)
    }
}
