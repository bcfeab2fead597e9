//! Display helpers for amounts and dates.

use chrono::{Datelike, NaiveDate};

use crate::types::Trip;

const CURRENCY_SYMBOL: &str = "$";

/// Format an amount as whole US dollars, e.g. `$2,500`.
///
/// NaN and infinities render as `$0`.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let rounded = amount.round();
    let body = group_digits(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-{}{}", CURRENCY_SYMBOL, body)
    } else {
        format!("{}{}", CURRENCY_SYMBOL, body)
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// US short date, e.g. `9/5/2025`.
pub fn format_trip_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// The two legend labels under a trip's progress bar.
pub fn progress_legend(trip: &Trip) -> (String, String) {
    (
        format!("Spent {}", format_currency(f64::from(trip.spent))),
        format!("of {}", format_currency(f64::from(trip.total_budget))),
    )
}
