//! Catalog repository trait and the in-memory implementation.

use crate::data::{seed_destinations, seed_tours};
use crate::error::{CatalogError, CatalogResult};
use crate::types::{Category, Destination, TourPackage};

/// Read-only access to the travel catalog.
///
/// Lookups and filters always preserve declaration order; nothing here
/// sorts or mutates.
pub trait CatalogRepository: Send + Sync {
    /// All destinations in declaration order
    fn destinations(&self) -> &[Destination];

    /// All tour packages in declaration order
    fn tours(&self) -> &[TourPackage];

    /// Find a destination by id
    fn destination(&self, id: &str) -> Option<&Destination> {
        self.destinations().iter().find(|d| d.id == id)
    }

    /// Find a tour by id
    fn tour(&self, id: &str) -> Option<&TourPackage> {
        self.tours().iter().find(|t| t.id == id)
    }

    /// Resolve the destination a tour belongs to
    fn destination_of(&self, tour: &TourPackage) -> Option<&Destination> {
        self.destination(&tour.destination_id)
    }

    /// Featured tours, up to `limit`, in declaration order
    fn featured_tours(&self, limit: usize) -> Vec<&TourPackage> {
        self.tours().iter().filter(|t| t.featured).take(limit).collect()
    }

    /// Tours in a destination category, in declaration order
    fn tours_in_category(&self, category: Category) -> Vec<&TourPackage> {
        self.tours().iter().filter(|t| t.category == category).collect()
    }
}

/// In-memory catalog backed by fixed arrays.
///
/// Construction validates referential integrity: every tour must point at
/// a destination present in the same catalog.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    destinations: Vec<Destination>,
    tours: Vec<TourPackage>,
}

impl InMemoryCatalog {
    /// Build a catalog from parts, validating tour -> destination references
    pub fn new(destinations: Vec<Destination>, tours: Vec<TourPackage>) -> CatalogResult<Self> {
        for tour in &tours {
            if !destinations.iter().any(|d| d.id == tour.destination_id) {
                return Err(CatalogError::UnknownDestination {
                    tour_id: tour.id.clone(),
                    destination_id: tour.destination_id.clone(),
                });
            }
        }
        Ok(Self { destinations, tours })
    }

    /// Build the catalog from the bundled seed data
    pub fn seeded() -> CatalogResult<Self> {
        Self::new(seed_destinations(), seed_tours())
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    fn tours(&self) -> &[TourPackage] {
        &self.tours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog_is_valid() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        assert!(!catalog.destinations().is_empty());
        assert!(!catalog.tours().is_empty());
    }

    #[test]
    fn test_new_rejects_dangling_destination() {
        let mut tours = seed_tours();
        tours[0].destination_id = "atlantis".to_string();

        let err = InMemoryCatalog::new(seed_destinations(), tours).unwrap_err();
        match err {
            CatalogError::UnknownDestination { destination_id, .. } => {
                assert_eq!(destination_id, "atlantis");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lookup_helpers() {
        let catalog = InMemoryCatalog::seeded().unwrap();

        let tour = catalog.tour("goa-beach-bliss").unwrap();
        let destination = catalog.destination_of(tour).unwrap();
        assert_eq!(destination.id, "goa");

        assert!(catalog.tour("nope").is_none());
        assert!(catalog.destination("nope").is_none());
    }

    #[test]
    fn test_featured_tours_respects_limit_and_order() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let featured = catalog.featured_tours(2);
        assert_eq!(featured.len(), 2);
        // Declaration order: goa-beach-bliss comes before andaman-island-escape
        assert_eq!(featured[0].id, "goa-beach-bliss");
        assert_eq!(featured[1].id, "andaman-island-escape");
    }

    #[test]
    fn test_tours_in_category() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let mountain = catalog.tours_in_category(Category::Mountain);
        assert!(mountain.iter().all(|t| t.category == Category::Mountain));
        assert!(!mountain.is_empty());
    }
}
