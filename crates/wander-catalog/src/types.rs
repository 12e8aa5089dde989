use serde::{Deserialize, Serialize};

/// Destination category used for preference filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Beach,
    Mountain,
    Heritage,
    City,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Beach => write!(f, "beach"),
            Category::Mountain => write!(f, "mountain"),
            Category::Heritage => write!(f, "heritage"),
            Category::City => write!(f, "city"),
        }
    }
}

/// A travel destination in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub region: String,
    pub category: Category,
    pub description: String,
    pub image_url: String,
}

/// A bookable tour package
///
/// Prices are whole rupees. `group_min`/`group_max` bound the supported
/// group size inclusively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourPackage {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: u32,
    pub destination_id: String,
    pub duration_days: u32,
    pub group_min: u32,
    pub group_max: u32,
    pub rating: f32,
    pub review_count: u32,
    pub featured: bool,
    pub category: Category,
    pub image_url: String,
    pub inclusions: Vec<String>,
}

impl TourPackage {
    /// Whether the package fits within the given budget
    pub fn within_budget(&self, budget: u32) -> bool {
        self.price <= budget
    }

    /// Whether the package supports a group of the given size
    pub fn fits_group(&self, size: u32) -> bool {
        self.group_min <= size && size <= self.group_max
    }

    /// Whether the package duration is within `tolerance` days of the request
    pub fn near_duration(&self, requested: u32, tolerance: u32) -> bool {
        self.duration_days.abs_diff(requested) <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tour() -> TourPackage {
        TourPackage {
            id: "t1".to_string(),
            title: "Sample".to_string(),
            description: String::new(),
            price: 10_000,
            destination_id: "d1".to_string(),
            duration_days: 5,
            group_min: 2,
            group_max: 10,
            rating: 4.5,
            review_count: 100,
            featured: false,
            category: Category::Beach,
            image_url: String::new(),
            inclusions: vec![],
        }
    }

    #[test]
    fn test_within_budget() {
        let tour = sample_tour();
        assert!(tour.within_budget(10_000));
        assert!(tour.within_budget(20_000));
        assert!(!tour.within_budget(9_999));
    }

    #[test]
    fn test_fits_group() {
        let tour = sample_tour();
        assert!(tour.fits_group(2));
        assert!(tour.fits_group(10));
        assert!(!tour.fits_group(1));
        assert!(!tour.fits_group(11));
    }

    #[test]
    fn test_near_duration() {
        let tour = sample_tour();
        assert!(tour.near_duration(7, 2));
        assert!(tour.near_duration(3, 2));
        assert!(!tour.near_duration(8, 2));
        // A month normalized to 30 days never lands near any real tour
        assert!(!tour.near_duration(30, 2));
    }
}
