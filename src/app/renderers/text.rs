use crate::core::{Catalog, PricingView, Result, ServiceOffering, SummaryRenderer};
use crate::domain::model::{BillingPeriod, LineItem};
use crate::utils::currency::{format_period_price, format_price};
use rust_decimal::Decimal;

/// Plain-text rendering of the calculator: service cards, the selected
/// services panel and the call to action.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// Marker wrapped around struck-through list prices.
    strike: &'static str,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self { strike: "~~" }
    }

    fn struck(&self, text: &str) -> String {
        format!("{}{}{}", self.strike, text, self.strike)
    }

    fn card(&self, service: &ServiceOffering, selected: bool, lines: &mut Vec<String>) {
        let marker = if selected { "[x]" } else { "[ ]" };
        lines.push(format!("{} {} ({})", marker, service.name, service.id));
        lines.push(format!("    {}", service.tagline));
        lines.push(format!("    {}", service.description));
        for feature in &service.features {
            lines.push(format!("      ✓ {}", feature));
        }
        lines.push(format!(
            "    {} {}",
            format_price(service.price),
            service.period.card_label()
        ));
    }

    fn line_item(&self, item: &LineItem, has_discount: bool, lines: &mut Vec<String>) {
        let mut line = format!(
            "  {} ({}): {}",
            item.name,
            item.period,
            format_price(item.price)
        );
        if has_discount {
            line.push_str(&format!(" {}", self.struck(&format_price(item.list_price))));
        }
        lines.push(line);
    }

    fn summary_panel(&self, view: &PricingView<'_>, lines: &mut Vec<String>) {
        let summary = view.summary;

        lines.push("Your Selected Services".to_string());
        for item in &summary.line_items {
            self.line_item(item, summary.has_discount, lines);
        }

        if summary.has_discount {
            lines.push(String::new());
            lines.push(format!(
                "  Bundle and save {}%",
                view.discount.percent().normalize()
            ));
        }

        lines.push(String::new());
        if summary.one_off_total > Decimal::ZERO {
            lines.push(format!("  One-off total: {}", format_price(summary.one_off_total)));
        }
        if summary.monthly_total > Decimal::ZERO {
            lines.push(format!(
                "  Monthly total: {}",
                format_period_price(summary.monthly_total, BillingPeriod::Monthly)
            ));
        }
        lines.push(format!("  Total investment: {}", summary.total_display()));
        if let Some(original) = summary.original_total_display(view.discount) {
            lines.push(format!("                    {}", self.struck(&original)));
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryRenderer for TextRenderer {
    fn render(&self, view: &PricingView<'_>) -> Result<String> {
        let mut lines = Vec::new();

        for service in view.catalog.all() {
            self.card(service, view.selection.contains(&service.id), &mut lines);
            lines.push(String::new());
        }

        if !view.selection.is_empty() {
            self.summary_panel(view, &mut lines);
            lines.push(String::new());
        }

        lines.push(format!(
            "{}: {}",
            view.call_to_action.label, view.call_to_action.url
        ));
        lines.push(view.call_to_action.note.clone());

        Ok(lines.join("\n"))
    }

    fn render_catalog(&self, catalog: &Catalog) -> Result<String> {
        let mut lines = Vec::new();
        for service in catalog.all() {
            self.card(service, false, &mut lines);
            lines.push(String::new());
        }
        Ok(lines.join("\n").trim_end().to_string())
    }
}
