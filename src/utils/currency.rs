//! en-GB pound sterling formatting with whole-unit precision.
//!
//! Amounts are kept at full precision everywhere else in the crate and only
//! rounded here, at the moment they are turned into display strings.

use crate::domain::model::BillingPeriod;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const CURRENCY_CODE: &str = "GBP";
pub const CURRENCY_SYMBOL: &str = "£";
pub const LOCALE: &str = "en-GB";

/// Rounds to the nearest whole unit, halves going up (`807.5` -> `808`,
/// `-2.5` -> `-2`).
pub fn round_to_whole(amount: Decimal) -> Decimal {
    (amount + dec!(0.5)).floor()
}

pub fn format_price(amount: Decimal) -> String {
    let rounded = round_to_whole(amount);
    let digits = rounded.abs().trunc().normalize().to_string();
    let grouped = group_thousands(&digits);

    if rounded < Decimal::ZERO {
        format!("-{}{}", CURRENCY_SYMBOL, grouped)
    } else {
        format!("{}{}", CURRENCY_SYMBOL, grouped)
    }
}

/// Appends `/month` to recurring amounts.
pub fn format_period_price(amount: Decimal, period: BillingPeriod) -> String {
    match period {
        BillingPeriod::Monthly => format!("{}/month", format_price(amount)),
        BillingPeriod::OneOff => format_price(amount),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
