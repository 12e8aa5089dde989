//! Regex entity extraction: budget, trip duration, group size.
//!
//! The three passes are independent and order-independent between each
//! other. Within one entity, patterns are tried in a fixed order and only
//! the first match anywhere in the utterance is used; further numeric
//! mentions are not disambiguated.

use once_cell::sync::Lazy;
use regex::Regex;
use wander_core::Entities;

/// Budget patterns, tried in order. The multiplier normalizes the
/// captured amount into whole rupees.
static BUDGET_PATTERNS: Lazy<Vec<(Regex, u32)>> = Lazy::new(|| {
    vec![
        // "1 lakh", "2lakh"
        (Regex::new(r"(?i)(\d+)\s*lakh").expect("budget lakh pattern"), 100_000),
        // "15k", "20 thousand"
        (
            Regex::new(r"(?i)(\d+)\s*(?:k\b|thousand)").expect("budget thousand pattern"),
            1_000,
        ),
        // "20,000" with thousands separators
        (
            Regex::new(r"(\d{1,3}(?:,\d{3})+)").expect("budget separator pattern"),
            1,
        ),
        // currency-marked: "rs 9000", "inr 9000", "₹9000"
        (
            Regex::new(r"(?i)(?:₹|rs\.?|inr)\s*(\d+)").expect("budget currency pattern"),
            1,
        ),
        // bare amounts need at least four digits so trip-length or
        // group-size numerals never read as money
        (Regex::new(r"\b(\d{4,})\b").expect("budget bare pattern"), 1),
    ]
});

static DURATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*-?\s*(day|week|month)").expect("duration pattern"));

static GROUP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s*-?\s*(people|person|friends|members)").expect("group pattern")
});

/// Extract whatever entities the utterance mentions.
///
/// Absent matches simply leave the field empty; there is no failure mode.
pub fn extract(utterance: &str) -> Entities {
    Entities {
        budget: extract_budget(utterance),
        duration_days: extract_duration(utterance),
        group_size: extract_group_size(utterance),
    }
}

fn extract_budget(utterance: &str) -> Option<u32> {
    for (pattern, multiplier) in BUDGET_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(utterance) {
            let digits = captures.get(1)?.as_str().replace(',', "");
            if let Ok(amount) = digits.parse::<u32>() {
                return amount.checked_mul(*multiplier);
            }
        }
    }
    None
}

fn extract_duration(utterance: &str) -> Option<u32> {
    let captures = DURATION_PATTERN.captures(utterance)?;
    let count: u32 = captures.get(1)?.as_str().parse().ok()?;
    // Months convert linearly to 30 days even though no catalog tour runs
    // that long; the mismatch is inherited behavior, kept on purpose.
    let days_per_unit = match captures.get(2)?.as_str().to_lowercase().as_str() {
        "week" => 7,
        "month" => 30,
        _ => 1,
    };
    count.checked_mul(days_per_unit)
}

fn extract_group_size(utterance: &str) -> Option<u32> {
    let captures = GROUP_PATTERN.captures(utterance)?;
    captures.get(1)?.as_str().parse().ok()
}
