//! Seed fixture data for the in-memory catalog.
//!
//! Declaration order matters: filter results preserve it, so the arrays
//! below define the presentation order of every recommendation list.

use crate::types::{Category, Destination, TourPackage};

fn destination(
    id: &str,
    name: &str,
    region: &str,
    category: Category,
    description: &str,
    image_url: &str,
) -> Destination {
    Destination {
        id: id.to_string(),
        name: name.to_string(),
        region: region.to_string(),
        category,
        description: description.to_string(),
        image_url: image_url.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn tour(
    id: &str,
    title: &str,
    description: &str,
    price: u32,
    destination_id: &str,
    duration_days: u32,
    group: (u32, u32),
    rating: f32,
    review_count: u32,
    featured: bool,
    category: Category,
    image_url: &str,
    inclusions: &[&str],
) -> TourPackage {
    TourPackage {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        price,
        destination_id: destination_id.to_string(),
        duration_days,
        group_min: group.0,
        group_max: group.1,
        rating,
        review_count,
        featured,
        category,
        image_url: image_url.to_string(),
        inclusions: inclusions.iter().map(|s| s.to_string()).collect(),
    }
}

/// Seed destinations
pub fn seed_destinations() -> Vec<Destination> {
    vec![
        destination(
            "goa",
            "Goa",
            "West India",
            Category::Beach,
            "Sun-drenched beaches, Portuguese-era forts and a laid-back shack culture.",
            "https://images.wander.example/destinations/goa.jpg",
        ),
        destination(
            "andaman",
            "Andaman Islands",
            "Bay of Bengal",
            Category::Beach,
            "Clear turquoise water, coral reefs and quiet white-sand islands.",
            "https://images.wander.example/destinations/andaman.jpg",
        ),
        destination(
            "alleppey",
            "Alleppey",
            "Kerala",
            Category::Beach,
            "Backwater canals, houseboats and palm-lined village waterways.",
            "https://images.wander.example/destinations/alleppey.jpg",
        ),
        destination(
            "manali",
            "Manali",
            "Himachal Pradesh",
            Category::Mountain,
            "Snow peaks, pine valleys and the gateway to high-altitude treks.",
            "https://images.wander.example/destinations/manali.jpg",
        ),
        destination(
            "ladakh",
            "Ladakh",
            "Jammu & Kashmir",
            Category::Mountain,
            "High mountain passes, monasteries and stark lunar landscapes.",
            "https://images.wander.example/destinations/ladakh.jpg",
        ),
        destination(
            "jaipur",
            "Jaipur",
            "Rajasthan",
            Category::Heritage,
            "The Pink City: palaces, forts and centuries of Rajput history.",
            "https://images.wander.example/destinations/jaipur.jpg",
        ),
        destination(
            "hampi",
            "Hampi",
            "Karnataka",
            Category::Heritage,
            "Boulder-strewn ruins of the Vijayanagara empire along the Tungabhadra.",
            "https://images.wander.example/destinations/hampi.jpg",
        ),
        destination(
            "mumbai",
            "Mumbai",
            "Maharashtra",
            Category::City,
            "Colonial architecture, street food and the sea promenade that never sleeps.",
            "https://images.wander.example/destinations/mumbai.jpg",
        ),
        destination(
            "delhi",
            "New Delhi",
            "National Capital Region",
            Category::City,
            "Mughal monuments, bustling bazaars and the start of the Golden Triangle.",
            "https://images.wander.example/destinations/delhi.jpg",
        ),
    ]
}

/// Seed tour packages
pub fn seed_tours() -> Vec<TourPackage> {
    vec![
        tour(
            "goa-beach-bliss",
            "Goa Beach Bliss",
            "Four relaxed days across Baga, Anjuna and Palolem with water sports on day two.",
            12_999,
            "goa",
            4,
            (2, 12),
            4.6,
            812,
            true,
            Category::Beach,
            "https://images.wander.example/tours/goa-beach-bliss.jpg",
            &["3-star beach resort", "Daily breakfast", "Water sports session", "Airport transfers"],
        ),
        tour(
            "andaman-island-escape",
            "Andaman Island Escape",
            "Six days across Port Blair, Havelock and Neil Island with a guided scuba dive.",
            24_999,
            "andaman",
            6,
            (2, 10),
            4.8,
            409,
            true,
            Category::Beach,
            "https://images.wander.example/tours/andaman-island-escape.jpg",
            &["Island ferries", "Scuba dive with instructor", "Beachfront cottage", "All breakfasts"],
        ),
        tour(
            "kerala-backwater-cruise",
            "Kerala Backwater Houseboat Cruise",
            "Three slow days on a traditional houseboat through the Alleppey canals.",
            18_499,
            "alleppey",
            3,
            (2, 8),
            4.7,
            731,
            false,
            Category::Beach,
            "https://images.wander.example/tours/kerala-backwater-cruise.jpg",
            &["Private houseboat", "All meals on board", "Village walk", "Ayurvedic massage"],
        ),
        tour(
            "manali-adventure-trek",
            "Manali Adventure Trek",
            "Five days of trekking, riverside camping and white-water rafting out of Manali.",
            9_999,
            "manali",
            5,
            (4, 15),
            4.5,
            623,
            false,
            Category::Mountain,
            "https://images.wander.example/tours/manali-adventure-trek.jpg",
            &["Certified trek leader", "Camping equipment", "Rafting run", "All camp meals"],
        ),
        tour(
            "ladakh-high-passes",
            "Ladakh High Passes Expedition",
            "Eight days over Khardung La and Chang La with Pangong lake camping.",
            32_999,
            "ladakh",
            8,
            (4, 12),
            4.9,
            287,
            true,
            Category::Mountain,
            "https://images.wander.example/tours/ladakh-high-passes.jpg",
            &["Inner line permits", "Oxygen support vehicle", "Lakeside camp", "Monastery visits"],
        ),
        tour(
            "jaipur-royal-heritage",
            "Jaipur Royal Heritage Tour",
            "Three days of palaces and forts: Amber, Hawa Mahal, City Palace and Jantar Mantar.",
            8_499,
            "jaipur",
            3,
            (2, 20),
            4.4,
            1054,
            false,
            Category::Heritage,
            "https://images.wander.example/tours/jaipur-royal-heritage.jpg",
            &["Heritage walk guide", "Monument entry fees", "Elephant-free Amber ascent", "Hotel with breakfast"],
        ),
        tour(
            "hampi-temple-trail",
            "Hampi Temple Trail",
            "A two-day cycle through the Vijayanagara ruins with a sunset at Matanga hill.",
            7_999,
            "hampi",
            2,
            (2, 16),
            4.3,
            356,
            false,
            Category::Heritage,
            "https://images.wander.example/tours/hampi-temple-trail.jpg",
            &["Bicycle hire", "Archaeologist-led walk", "Coracle ride", "Guesthouse stay"],
        ),
        tour(
            "mumbai-city-lights",
            "Mumbai City Lights",
            "A two-day sweep of South Mumbai: Gateway, Marine Drive, markets and street food.",
            6_999,
            "mumbai",
            2,
            (1, 8),
            4.2,
            544,
            false,
            Category::City,
            "https://images.wander.example/tours/mumbai-city-lights.jpg",
            &["Local guide", "Street food crawl", "Ferry to Elephanta", "Hotel with breakfast"],
        ),
        tour(
            "golden-triangle-getaway",
            "Golden Triangle Getaway",
            "Five days across Delhi, Agra and Jaipur including sunrise at the Taj Mahal.",
            15_999,
            "delhi",
            5,
            (2, 18),
            4.7,
            978,
            true,
            Category::City,
            "https://images.wander.example/tours/golden-triangle-getaway.jpg",
            &["Air-conditioned coach", "Taj Mahal sunrise entry", "All monument fees", "4-star hotels"],
        ),
        tour(
            "goa-wellness-retreat",
            "Goa Luxury Wellness Retreat",
            "Seven unhurried days of yoga, spa therapy and quiet south-Goa beaches.",
            45_999,
            "goa",
            7,
            (2, 6),
            4.8,
            198,
            false,
            Category::Beach,
            "https://images.wander.example/tours/goa-wellness-retreat.jpg",
            &["5-star resort", "Daily yoga and spa", "Full board dining", "Private beach access"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_tours_reference_seed_destinations() {
        let destinations = seed_destinations();
        for tour in seed_tours() {
            assert!(
                destinations.iter().any(|d| d.id == tour.destination_id),
                "tour {} references missing destination {}",
                tour.id,
                tour.destination_id
            );
        }
    }

    #[test]
    fn test_seed_has_featured_tours() {
        assert!(seed_tours().iter().any(|t| t.featured));
    }

    #[test]
    fn test_seed_durations_stay_short() {
        // Every catalog duration is well under 30 days, which is why the
        // month-to-days normalization never produces a match.
        assert!(seed_tours().iter().all(|t| t.duration_days <= 10));
    }
}
