//! Advisory aggregation over a day's items: total hours and total estimated
//! cost. Durations and costs are free text, so both parsers take the
//! leading integer and fall back to a fixed default.

use shared::ItineraryItem;

/// Hours encoded by a free-text duration like "2 ore" or "Mezza giornata".
/// Anything without a leading integer counts as one hour.
pub fn duration_hours(duration: &str) -> u32 {
    duration
        .split_whitespace()
        .next()
        .and_then(leading_int)
        .unwrap_or(1)
}

/// Euros encoded by a free-text cost like "€15" or "Gratis". "Gratis" and
/// anything without a leading integer after stripping the currency symbol
/// count as zero. Decimals are ignored by design.
pub fn cost_euros(estimated_cost: Option<&str>) -> u32 {
    let cost = match estimated_cost {
        Some(cost) => cost,
        None => return 0,
    };
    if cost == "Gratis" {
        return 0;
    }
    leading_int(cost.replacen('€', "", 1).trim()).unwrap_or(0)
}

/// Sum of advisory hours across a day's items
pub fn total_hours(items: &[ItineraryItem]) -> u32 {
    items.iter().map(|item| duration_hours(&item.duration)).sum()
}

/// Sum of estimated euros across a day's items
pub fn total_cost(items: &[ItineraryItem]) -> u32 {
    items
        .iter()
        .map(|item| cost_euros(item.estimated_cost.as_deref()))
        .sum()
}

fn leading_int(s: &str) -> Option<u32> {
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
