use thiserror::Error;

/// Local draft rejection; never reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    MissingTitle,
    #[error("director must not be empty")]
    MissingDirector,
    #[error("year must not be empty")]
    MissingYear,
    #[error("year must be a whole number")]
    InvalidYear,
}

/// A remote call that failed, tagged with the operation that was in flight.
/// Local state is exactly as it was before the failed call.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to load the movie list: {0}")]
    Load(String),
    #[error("failed to save the movie: {0}")]
    Save(String),
    #[error("failed to delete the movie: {0}")]
    Delete(String),
}
