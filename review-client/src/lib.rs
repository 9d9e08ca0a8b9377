//! Review document client
//!
//! Fetches the configuration document, the review catalog and per-game review
//! documents from either a local directory or an HTTP origin, and issues the
//! catalog refresh signal.
//!
//! # Example
//!
//! ```no_run
//! use review_client::{ReviewClient, ReviewService, Source};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ReviewClient::new(Source::parse("http://localhost:8000"), Duration::from_secs(10))?;
//!     let configuration = client.load_configuration().await?;
//!     let catalog = client.fetch_catalog(&configuration).await?;
//!     println!("{} reviewed games", catalog.len());
//!     Ok(())
//! }
//! ```

mod client;
mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod traits;

pub use client::{ReviewClient, Source, CONFIGURATION_PATH};
pub use error::{ClientError, ClientResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockCall, MockReviewService};
pub use traits::ReviewService;

// Re-export document types for convenience
pub use reviewer::{CatalogEntry, Configuration, ReviewDocument};
