//! Priority-ordered intent classification.
//!
//! The rule table below IS the priority order: rules are evaluated top to
//! bottom and the first rule with any matching keyword wins. An utterance
//! containing both "budget" and "beach" classifies as `BudgetInquiry`
//! because the budget rule is listed first. No scoring, no ties, no
//! confidence values.

use wander_core::Intent;

/// One classification rule: keyword substring set and the intent it maps to
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub intent: Intent,
}

/// The classification rules in priority order.
///
/// Matching is case-insensitive substring containment against the
/// lower-cased utterance.
pub static RULES: &[Rule] = &[
    Rule {
        keywords: &["budget", "cost", "price", "cheap", "expensive", "afford"],
        intent: Intent::BudgetInquiry,
    },
    Rule {
        keywords: &[
            "beach", "island", "coastal", "mountain", "hill", "himalaya", "heritage",
            "historical", "fort", "palace", "city",
        ],
        intent: Intent::DestinationPreference,
    },
    Rule {
        keywords: &["group", "people", "friends", "family", "team", "members"],
        intent: Intent::GroupPlanning,
    },
    Rule {
        keywords: &["day", "week", "month", "weekend", "night"],
        intent: Intent::DurationSpecific,
    },
    Rule {
        keywords: &["adventure", "relax", "culture", "trek", "spa", "yoga", "rafting", "scuba"],
        intent: Intent::ActivityPreference,
    },
    Rule {
        keywords: &["compare", "versus", "difference", "better"],
        intent: Intent::ComparisonRequest,
    },
    Rule {
        keywords: &["book", "reserve", "payment", "pay", "confirm"],
        intent: Intent::BookingAssistance,
    },
];

/// Classify one utterance into exactly one intent.
///
/// Total function: empty or unrecognized input returns
/// [`Intent::GeneralInquiry`].
pub fn classify(utterance: &str) -> Intent {
    let query = utterance.to_lowercase();
    for rule in RULES {
        if rule.keywords.iter().any(|keyword| query.contains(keyword)) {
            return rule.intent;
        }
    }
    Intent::GeneralInquiry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_outranks_category() {
        // Both "budget" and "beach" present: the budget rule runs first.
        assert_eq!(
            classify("Show me budget-friendly beach destinations"),
            Intent::BudgetInquiry
        );
        assert_eq!(classify("cheap mountain trips"), Intent::BudgetInquiry);
    }

    #[test]
    fn test_category_outranks_group_and_activity() {
        // "mountain" is checked before "people" and before "adventure".
        assert_eq!(
            classify("Plan a 7-day mountain adventure for 4 people"),
            Intent::DestinationPreference
        );
    }

    #[test]
    fn test_group_planning() {
        assert_eq!(classify("trip for 6 friends"), Intent::GroupPlanning);
    }

    #[test]
    fn test_duration_specific() {
        assert_eq!(classify("what can we do over a weekend"), Intent::DurationSpecific);
    }

    #[test]
    fn test_activity_preference() {
        assert_eq!(classify("somewhere to relax"), Intent::ActivityPreference);
    }

    #[test]
    fn test_comparison_request() {
        assert_eq!(classify("compare goa and andaman"), Intent::ComparisonRequest);
    }

    #[test]
    fn test_booking_assistance() {
        assert_eq!(classify("how do I reserve a slot"), Intent::BookingAssistance);
    }

    #[test]
    fn test_default_general_inquiry() {
        assert_eq!(classify(""), Intent::GeneralInquiry);
        assert_eq!(classify("hello there"), Intent::GeneralInquiry);
        assert_eq!(classify("qwzx"), Intent::GeneralInquiry);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("BUDGET options?"), Intent::BudgetInquiry);
    }

    #[test]
    fn test_rule_order_is_the_contract() {
        // The table itself is the priority order; pin the first and last
        // rules so a reordering cannot slip through silently.
        assert_eq!(RULES.first().map(|r| r.intent), Some(Intent::BudgetInquiry));
        assert_eq!(RULES.last().map(|r| r.intent), Some(Intent::BookingAssistance));
        assert_eq!(RULES.len(), 7);
    }
}
