//! Row decisions and price formatting for the search page.
//!
//! # Design
//! - Rows branch only on the record's current flags; nothing is cached.
//! - Prices are rounded up for display; stored prices stay unrounded.

use stackport_profile::is_subdomain_suffix;

use crate::core::availability::AvailabilityRecord;

/// Decimal places shown for prices.
pub const PRICE_DECIMALS: usize = 6;

/// What a search result row shows for one name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowView {
    /// No answer yet.
    Checking,
    /// The name is registered.
    Taken,
    /// The check failed.
    Failed(String),
    /// A subdomain that can be claimed right away.
    AvailableSubdomain,
    /// A top-level name whose price is loading.
    CheckingPrice,
    /// A top-level name with a display price.
    Priced(String),
}

/// Decide how the row for `suffix` renders given its record.
#[must_use]
pub fn row_view(record: Option<&AvailabilityRecord>, suffix: &str) -> RowView {
    let Some(record) = record else {
        return RowView::Checking;
    };
    if let Some(message) = &record.error {
        return RowView::Failed(message.clone());
    }
    if record.checking_availability {
        return RowView::Checking;
    }
    if !record.available {
        return RowView::Taken;
    }
    if is_subdomain_suffix(suffix) {
        return RowView::AvailableSubdomain;
    }
    if record.checking_price {
        return RowView::CheckingPrice;
    }
    RowView::Priced(round_up_price(record.price, PRICE_DECIMALS))
}

/// Link to the name selection step for `owner`.
#[must_use]
pub fn select_href(owner: &str, name: &str) -> String {
    format!("/profiles/i/add-username/{owner}/select/{name}")
}

/// Round `value` up to `decimals` places and render it without trailing zeros.
///
/// Works on the shortest decimal rendering of `value` so binary noise never
/// bumps an exact price to the next step.
#[must_use]
pub fn round_up_price(value: f64, decimals: usize) -> String {
    let rendered = value.to_string();
    if !value.is_finite() || value <= 0.0 {
        return rendered;
    }
    let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    if fraction.len() <= decimals {
        return rendered;
    }
    let (kept, dropped) = fraction.split_at(decimals);
    let Ok(mut scaled) = format!("{whole}{kept}").parse::<u128>() else {
        return rendered;
    };
    if dropped.bytes().any(|digit| digit != b'0') {
        scaled += 1;
    }
    let Some(unit) = u32::try_from(decimals).ok().and_then(|exp| 10_u128.checked_pow(exp)) else {
        return rendered;
    };
    let fraction = format!("{:0width$}", scaled % unit, width = decimals);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        (scaled / unit).to_string()
    } else {
        format!("{}.{fraction}", scaled / unit)
    }
}
