use thiserror::Error;

/// Catalog error type
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A tour references a destination id that is not in the catalog
    #[error("tour '{tour_id}' references unknown destination '{destination_id}'")]
    UnknownDestination {
        tour_id: String,
        destination_id: String,
    },

    /// Lookup by id failed
    #[error("tour not found: {0}")]
    TourNotFound(String),

    /// Lookup by id failed
    #[error("destination not found: {0}")]
    DestinationNotFound(String),
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
