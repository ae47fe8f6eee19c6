/// Movie catalog abstraction
///
/// The recommendation flow only needs one operation from the catalog: a
/// discover query returning a page of movies. Keeping it behind a trait lets
/// tests run the full flow against fixture catalogs without touching the
/// network.
use crate::{error::AppResult, models::Movie, services::discovery::DiscoverQuery};

pub mod tmdb;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Runs a discover query and returns the raw result list.
    ///
    /// A response with no results is an empty list, not an error; errors are
    /// reserved for transport and upstream failures.
    async fn discover(&self, query: &DiscoverQuery) -> AppResult<Vec<Movie>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
