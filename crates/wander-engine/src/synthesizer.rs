//! Deterministic response synthesis: one handler per intent.
//!
//! Every handler follows the same shape: default any missing entity,
//! filter the catalog by the intent's predicate, truncate, and fall back
//! to featured tours when the filter comes back empty. Filter results
//! preserve catalog declaration order; nothing sorts by rating or price.

use std::sync::Arc;

use tracing::debug;
use wander_catalog::{CatalogRepository, Category, TourPackage};
use wander_core::{AdvisorReply, Entities, Intent, MessageMetadata};

/// Defaults and limits for the synthesizer
#[derive(Debug, Clone)]
pub struct SynthesizerConfig {
    /// Budget assumed when none was extracted
    pub default_budget: u32,
    /// Budget assumed when the query contains the literal "cheap"
    pub frugal_budget: u32,
    /// Group size assumed when none was extracted
    pub default_group_size: u32,
    /// Trip length assumed when none was extracted
    pub default_duration_days: u32,
    /// Trip length assumed when the query mentions a weekend
    pub weekend_duration_days: u32,
    /// How far a tour duration may deviate from the request, in days
    pub duration_tolerance_days: u32,
    /// Cap on filtered recommendation lists
    pub max_recommendations: usize,
    /// Cap on the featured fallback list
    pub featured_fallback_count: usize,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            default_budget: 50_000,
            frugal_budget: 20_000,
            default_group_size: 8,
            default_duration_days: 7,
            weekend_duration_days: 3,
            duration_tolerance_days: 2,
            max_recommendations: 4,
            featured_fallback_count: 3,
        }
    }
}

/// Category cues the destination handler looks for, in check order.
const CATEGORY_CUES: &[(&[&str], Category)] = &[
    (&["beach", "island", "coastal", "backwater"], Category::Beach),
    (&["mountain", "hill", "himalaya", "trek"], Category::Mountain),
    (&["heritage", "historical", "fort", "palace", "temple"], Category::Heritage),
    (&["city", "urban", "metro", "nightlife"], Category::City),
];

/// Activity cues: query keywords, matching title terms, matching category.
const ACTIVITY_CUES: &[(&[&str], &[&str], Category)] = &[
    (
        &["adventure", "trek", "rafting", "scuba"],
        &["adventure", "trek", "expedition", "rafting"],
        Category::Mountain,
    ),
    (
        &["relax", "spa", "yoga", "unwind", "peaceful"],
        &["retreat", "wellness", "bliss", "cruise"],
        Category::Beach,
    ),
    (
        &["culture", "cultural", "history", "museum"],
        &["heritage", "temple", "palace"],
        Category::Heritage,
    ),
];

/// Turns (intent, entities, raw query) into a reply with recommendations.
pub struct Synthesizer {
    catalog: Arc<dyn CatalogRepository>,
    config: SynthesizerConfig,
}

impl Synthesizer {
    /// Create a synthesizer over the given catalog
    pub fn new(catalog: Arc<dyn CatalogRepository>, config: SynthesizerConfig) -> Self {
        Self { catalog, config }
    }

    /// Synthesize a reply. Total: always returns a message, and whenever a
    /// filter comes back empty the featured tours stand in.
    pub fn synthesize(&self, intent: Intent, entities: &Entities, query: &str) -> AdvisorReply {
        let query = query.to_lowercase();
        debug!(%intent, ?entities, "synthesizing local reply");

        let reply = match intent {
            Intent::BudgetInquiry => self.budget_inquiry(entities, &query),
            Intent::DestinationPreference => self.destination_preference(&query),
            Intent::GroupPlanning => self.group_planning(entities),
            Intent::DurationSpecific => self.duration_specific(entities, &query),
            Intent::ActivityPreference => self.activity_preference(&query),
            Intent::ComparisonRequest => self.comparison_request(),
            Intent::BookingAssistance => self.booking_assistance(),
            Intent::GeneralInquiry => self.general_inquiry(),
        };

        reply.with_metadata(MessageMetadata::from_classification(intent, entities))
    }

    fn budget_inquiry(&self, entities: &Entities, query: &str) -> AdvisorReply {
        // Only the literal "cheap" lowers the default; "budget-friendly"
        // and "affordable" still get the standard default.
        let budget = entities.budget.unwrap_or(if query.contains("cheap") {
            self.config.frugal_budget
        } else {
            self.config.default_budget
        });

        let matches = self.filter(|t| t.within_budget(budget));
        if matches.is_empty() {
            return self.featured_fallback(format!(
                "I couldn't find a package under \u{20b9}{budget}, but these traveller favourites are worth a look:"
            ));
        }
        AdvisorReply::text(format!(
            "Here are trips that fit a \u{20b9}{budget} budget:"
        ))
        .with_recommendations(matches)
    }

    fn destination_preference(&self, query: &str) -> AdvisorReply {
        let category = CATEGORY_CUES
            .iter()
            .find(|(cues, _)| cues.iter().any(|cue| query.contains(cue)))
            .map(|(_, category)| *category);

        let Some(category) = category else {
            return self.featured_fallback(
                "Plenty of places to choose from! These are our most loved trips:".to_string(),
            );
        };

        let matches = self.filter(|t| t.category == category);
        if matches.is_empty() {
            return self.featured_fallback(format!(
                "No {category} packages right now, but these favourites travel well:"
            ));
        }
        AdvisorReply::text(format!("Great choice! Our best {category} trips:"))
            .with_recommendations(matches)
    }

    fn group_planning(&self, entities: &Entities) -> AdvisorReply {
        let size = entities.group_size.unwrap_or(self.config.default_group_size);

        let matches = self.filter(|t| t.fits_group(size));
        if matches.is_empty() {
            return self.featured_fallback(format!(
                "Nothing sized for a group of {size} right now, but these favourites may work:"
            ));
        }
        AdvisorReply::text(format!("These trips work well for a group of {size}:"))
            .with_recommendations(matches)
    }

    fn duration_specific(&self, entities: &Entities, query: &str) -> AdvisorReply {
        let requested = entities
            .duration_days
            .unwrap_or(if query.contains("weekend") {
                self.config.weekend_duration_days
            } else {
                self.config.default_duration_days
            });

        let tolerance = self.config.duration_tolerance_days;
        let matches = self.filter(|t| t.near_duration(requested, tolerance));
        if matches.is_empty() {
            return self.featured_fallback(format!(
                "No packages around {requested} days, but these favourites are flexible:"
            ));
        }
        AdvisorReply::text(format!("Trips close to {requested} days:"))
            .with_recommendations(matches)
    }

    fn activity_preference(&self, query: &str) -> AdvisorReply {
        let cue = ACTIVITY_CUES
            .iter()
            .find(|(cues, _, _)| cues.iter().any(|cue| query.contains(cue)));

        let Some((_, terms, category)) = cue else {
            return self.featured_fallback(
                "Tell me more about what you enjoy! Meanwhile, these are popular:".to_string(),
            );
        };

        let matches = self.filter(|t| {
            let title = t.title.to_lowercase();
            t.category == *category || terms.iter().any(|term| title.contains(term))
        });
        if matches.is_empty() {
            return self.featured_fallback(
                "Nothing matches that activity right now, but these favourites might:".to_string(),
            );
        }
        AdvisorReply::text("These should be right up your alley:").with_recommendations(matches)
    }

    fn comparison_request(&self) -> AdvisorReply {
        let picks: Vec<TourPackage> = self
            .catalog
            .featured_tours(self.config.max_recommendations)
            .into_iter()
            .cloned()
            .collect();
        AdvisorReply::text(
            "Here are our most popular packages side by side; compare prices, durations and ratings:",
        )
        .with_recommendations(picks)
    }

    fn booking_assistance(&self) -> AdvisorReply {
        AdvisorReply::text(
            "Happy to help you book! Open any package page and pick your dates and group size, \
             or start a group-funding page to split the cost with friends. A travel expert \
             confirms every booking within 24 hours.",
        )
    }

    fn general_inquiry(&self) -> AdvisorReply {
        let featured: Vec<TourPackage> = self
            .catalog
            .featured_tours(self.config.featured_fallback_count)
            .into_iter()
            .cloned()
            .collect();
        AdvisorReply::text(
            "Hi! I can help you find the right trip. Tell me a budget, a destination type, \
             how long you have, or how many of you are travelling. Some favourites to start:",
        )
        .with_recommendations(featured)
        .with_quick_actions(vec![
            "Show me beach destinations".to_string(),
            "Trips under \u{20b9}20,000".to_string(),
            "Weekend getaways".to_string(),
            "Adventure trips for groups".to_string(),
        ])
    }

    /// Filter tours in catalog declaration order, truncated to the cap
    fn filter<F>(&self, predicate: F) -> Vec<TourPackage>
    where
        F: Fn(&TourPackage) -> bool,
    {
        self.catalog
            .tours()
            .iter()
            .filter(|t| predicate(t))
            .take(self.config.max_recommendations)
            .cloned()
            .collect()
    }

    /// Featured-tour fallback: recommendations are never left empty while
    /// any featured tour exists.
    fn featured_fallback(&self, message: String) -> AdvisorReply {
        let featured: Vec<TourPackage> = self
            .catalog
            .featured_tours(self.config.featured_fallback_count)
            .into_iter()
            .cloned()
            .collect();
        AdvisorReply::text(message).with_recommendations(featured)
    }
}
