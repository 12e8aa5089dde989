use serde::{Deserialize, Serialize};

/// Conversational goal of a single user turn.
///
/// Closed set; classification is independent per turn and no intent
/// carries over between messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    BudgetInquiry,
    DestinationPreference,
    GroupPlanning,
    DurationSpecific,
    ActivityPreference,
    ComparisonRequest,
    BookingAssistance,
    GeneralInquiry,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::BudgetInquiry => write!(f, "budget_inquiry"),
            Intent::DestinationPreference => write!(f, "destination_preference"),
            Intent::GroupPlanning => write!(f, "group_planning"),
            Intent::DurationSpecific => write!(f, "duration_specific"),
            Intent::ActivityPreference => write!(f, "activity_preference"),
            Intent::ComparisonRequest => write!(f, "comparison_request"),
            Intent::BookingAssistance => write!(f, "booking_assistance"),
            Intent::GeneralInquiry => write!(f, "general_inquiry"),
        }
    }
}

/// Structured values pulled out of one utterance.
///
/// Derived fresh per query and discarded after one synthesis call; any
/// field may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    /// Budget in whole rupees
    pub budget: Option<u32>,
    /// Trip length in days
    pub duration_days: Option<u32>,
    /// Number of travelers
    pub group_size: Option<u32>,
}

impl Entities {
    /// True when no entity was extracted
    pub fn is_empty(&self) -> bool {
        self.budget.is_none() && self.duration_days.is_none() && self.group_size.is_none()
    }
}
