use pricing_calc::{compute_summary, format_price, BillingPeriod, BundleDiscount, Catalog, PricingEngine, SelectionState};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Every subset of the built-in catalog, as id lists in catalog order.
fn all_subsets(catalog: &Catalog) -> Vec<Vec<String>> {
    let ids: Vec<String> = catalog.all().iter().map(|s| s.id.clone()).collect();
    (0..(1u32 << ids.len()))
        .map(|mask| {
            ids.iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, id)| id.clone())
                .collect()
        })
        .collect()
}

fn selection_of(ids: &[String]) -> SelectionState {
    let mut selection = SelectionState::new();
    for id in ids {
        selection.toggle(id);
    }
    selection
}

fn raw_sums(catalog: &Catalog, ids: &[String]) -> (Decimal, Decimal) {
    let mut monthly = Decimal::ZERO;
    let mut one_off = Decimal::ZERO;
    for id in ids {
        let service = catalog.get(id).expect("subset ids come from the catalog");
        match service.period {
            BillingPeriod::Monthly => monthly += service.price,
            BillingPeriod::OneOff => one_off += service.price,
        }
    }
    (monthly, one_off)
}

#[test]
fn test_small_selections_are_never_discounted() {
    let catalog = Catalog::builtin();
    for subset in all_subsets(&catalog).iter().filter(|s| s.len() <= 1) {
        let summary = compute_summary(&catalog, &selection_of(subset));
        let (monthly, one_off) = raw_sums(&catalog, subset);

        assert!(!summary.has_discount, "subset {:?}", subset);
        assert_eq!(summary.monthly_total, monthly);
        assert_eq!(summary.one_off_total, one_off);
        assert_eq!(summary.combined_total, monthly + one_off);
    }
}

#[test]
fn test_bundles_take_fifteen_percent_off_each_period() {
    let catalog = Catalog::builtin();
    for subset in all_subsets(&catalog).iter().filter(|s| s.len() >= 2) {
        let summary = compute_summary(&catalog, &selection_of(subset));
        let (monthly, one_off) = raw_sums(&catalog, subset);

        assert!(summary.has_discount, "subset {:?}", subset);
        assert_eq!(summary.monthly_total, monthly * dec!(0.85));
        assert_eq!(summary.one_off_total, one_off * dec!(0.85));
    }
}

#[test]
fn test_double_toggle_restores_state() {
    let catalog = Catalog::builtin();
    for subset in all_subsets(&catalog) {
        for id in ["kickoff", "video", "ads", "not-in-catalog"] {
            let mut engine = PricingEngine::new(catalog.clone());
            for selected in &subset {
                engine.toggle(selected);
            }
            let selection_before = engine.selection().clone();
            let summary_before = engine.summary().clone();

            engine.toggle(id);
            engine.toggle(id);

            assert_eq!(engine.selection(), &selection_before);
            assert_eq!(engine.summary(), &summary_before);
        }
    }
}

#[test]
fn test_toggles_commute() {
    let catalog = Catalog::builtin();
    let ids = ["kickoff", "video", "ads"];
    for subset in all_subsets(&catalog) {
        for a in ids {
            for b in ids {
                let mut ab = PricingEngine::new(catalog.clone());
                let mut ba = PricingEngine::new(catalog.clone());
                for selected in &subset {
                    ab.toggle(selected);
                    ba.toggle(selected);
                }
                ab.toggle(a);
                ab.toggle(b);
                ba.toggle(b);
                ba.toggle(a);

                assert_eq!(ab.selection(), ba.selection());
                assert_eq!(ab.summary().combined_total, ba.summary().combined_total);
                assert_eq!(ab.summary().has_discount, ba.summary().has_discount);
            }
        }
    }
}

#[test]
fn test_original_price_round_trips_through_display() {
    let catalog = Catalog::builtin();
    let discount = BundleDiscount::default();
    for subset in all_subsets(&catalog).iter().filter(|s| s.len() >= 2) {
        let summary = compute_summary(&catalog, &selection_of(subset));
        let (monthly, one_off) = raw_sums(&catalog, subset);

        assert_eq!(
            format_price(summary.monthly_total / dec!(0.85)),
            format_price(monthly)
        );
        assert_eq!(
            format_price(summary.original_one_off_total(discount)),
            format_price(one_off)
        );
    }
}
