//! ReviewService trait abstraction for client implementations

use crate::error::ClientResult;
use async_trait::async_trait;
use reviewer::{CatalogEntry, Configuration, ReviewDocument};

/// Access to review documents.
/// Implemented by both real ReviewClient and MockReviewService
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// Load the configuration document that points at the catalog
    async fn load_configuration(&self) -> ClientResult<Configuration>;

    /// Fetch the whole catalog
    async fn fetch_catalog(&self, configuration: &Configuration)
        -> ClientResult<Vec<CatalogEntry>>;

    /// Fetch the per-move review of one game
    async fn fetch_review(&self, entry: &CatalogEntry) -> ClientResult<ReviewDocument>;

    /// Ask the backend to regenerate the catalog
    async fn refresh(&self) -> ClientResult<()>;
}
