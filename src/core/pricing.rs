use crate::domain::catalog::Catalog;
use crate::domain::model::{BillingPeriod, BundleDiscount, LineItem, PricingSummary};
use crate::domain::selection::SelectionState;
use crate::utils::currency::{format_period_price, format_price};
use rust_decimal::Decimal;

/// Totals for `selection` under the default 15% bundle discount.
pub fn compute_summary(catalog: &Catalog, selection: &SelectionState) -> PricingSummary {
    compute_summary_with(catalog, selection, BundleDiscount::default())
}

/// Sums selected prices per billing period and, when more than one catalog
/// service is selected, applies `discount` to each period sum. Ids without a
/// catalog entry contribute nothing and do not count towards the bundle.
///
/// Sums stay at full precision; rounding happens only when formatting.
pub fn compute_summary_with(
    catalog: &Catalog,
    selection: &SelectionState,
    discount: BundleDiscount,
) -> PricingSummary {
    let selected: Vec<_> = catalog.filter_selected(selection).collect();
    let has_discount = selected.len() > 1;

    let mut monthly = Decimal::ZERO;
    let mut one_off = Decimal::ZERO;
    for service in &selected {
        match service.period {
            BillingPeriod::Monthly => monthly += service.price,
            BillingPeriod::OneOff => one_off += service.price,
        }
    }

    if has_discount {
        monthly = discount.apply(monthly);
        one_off = discount.apply(one_off);
    }

    let line_items = selected
        .iter()
        .map(|service| LineItem {
            id: service.id.clone(),
            name: service.name.clone(),
            period: service.period,
            list_price: service.price,
            price: if has_discount {
                discount.apply(service.price)
            } else {
                service.price
            },
        })
        .collect();

    PricingSummary {
        monthly_total: monthly,
        one_off_total: one_off,
        combined_total: monthly + one_off,
        has_discount,
        line_items,
    }
}

impl PricingSummary {
    /// Monthly total before the bundle discount.
    pub fn original_monthly_total(&self, discount: BundleDiscount) -> Decimal {
        self.undiscounted(self.monthly_total, discount)
    }

    /// One-off total before the bundle discount.
    pub fn original_one_off_total(&self, discount: BundleDiscount) -> Decimal {
        self.undiscounted(self.one_off_total, discount)
    }

    fn undiscounted(&self, amount: Decimal, discount: BundleDiscount) -> Decimal {
        if self.has_discount {
            discount.reverse(amount)
        } else {
            amount
        }
    }

    /// The "total investment" line, e.g. `£850 + £1,360/month`.
    pub fn total_display(&self) -> String {
        combined_display(self.one_off_total, self.monthly_total)
    }

    /// The same line over undiscounted totals, shown struck through when the
    /// bundle discount is active.
    pub fn original_total_display(&self, discount: BundleDiscount) -> Option<String> {
        if !self.has_discount {
            return None;
        }
        Some(combined_display(
            self.original_one_off_total(discount),
            self.original_monthly_total(discount),
        ))
    }
}

fn combined_display(one_off: Decimal, monthly: Decimal) -> String {
    if one_off > Decimal::ZERO && monthly > Decimal::ZERO {
        format!(
            "{} + {}",
            format_price(one_off),
            format_period_price(monthly, BillingPeriod::Monthly)
        )
    } else if one_off > Decimal::ZERO {
        format_price(one_off)
    } else {
        format_period_price(monthly, BillingPeriod::Monthly)
    }
}
