//! System prompt assembly for the remote assistant.
//!
//! The whole catalog is serialized into one system message so the model
//! can only recommend real packages, plus a fixed instruction block. The
//! reply post-processor depends on the model echoing exact tour titles or
//! destination names, which the instructions ask for.

use std::fmt::Write;

use wander_catalog::CatalogRepository;

const INSTRUCTIONS: &str = "\
You are the travel assistant for the wander booking site. Help travellers \
pick from the catalog above and answer questions about destinations, \
budgets, durations and group sizes.\n\
Rules:\n\
- Recommend only packages from the catalog, and mention their titles exactly as written.\n\
- Quote prices in rupees as listed; never invent prices or discounts.\n\
- Keep answers short and friendly, at most a few sentences.\n\
- If nothing fits, suggest the closest featured package instead of declining.";

/// Build the catalog-bearing system prompt
pub fn build_system_prompt(catalog: &dyn CatalogRepository) -> String {
    let mut prompt = String::from("TRAVEL CATALOG\n\nDestinations:\n");

    for destination in catalog.destinations() {
        let _ = writeln!(
            prompt,
            "- {} ({}, {}): {}",
            destination.name, destination.region, destination.category, destination.description
        );
    }

    prompt.push_str("\nTour packages:\n");
    for tour in catalog.tours() {
        let destination_name = catalog
            .destination_of(tour)
            .map(|d| d.name.as_str())
            .unwrap_or(tour.destination_id.as_str());
        let _ = writeln!(
            prompt,
            "- {} | {} | \u{20b9}{} | {} days | {}-{} travellers | rated {} ({} reviews){} | includes: {}",
            tour.title,
            destination_name,
            tour.price,
            tour.duration_days,
            tour.group_min,
            tour.group_max,
            tour.rating,
            tour.review_count,
            if tour.featured { " | featured" } else { "" },
            tour.inclusions.join(", "),
        );
    }

    prompt.push('\n');
    prompt.push_str(INSTRUCTIONS);
    prompt
}
