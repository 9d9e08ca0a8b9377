//! Mock ReviewService implementation for testing

use crate::error::{ClientError, ClientResult};
use crate::traits::ReviewService;
use async_trait::async_trait;
use reviewer::{CatalogEntry, Configuration, ReviewDocument, ReviewPaths};
use std::sync::{Arc, Mutex};

type Response<T> = Option<Box<dyn Fn() -> ClientResult<T> + Send>>;
type ReviewResponse = Option<Box<dyn Fn(&CatalogEntry) -> ClientResult<ReviewDocument> + Send>>;

/// Mock service for testing - only compiled in test mode or with mock feature
#[derive(Clone)]
pub struct MockReviewService {
    responses: Arc<Mutex<MockResponses>>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

#[derive(Default)]
struct MockResponses {
    load_configuration: Response<Configuration>,
    fetch_catalog: Response<Vec<CatalogEntry>>,
    fetch_review: ReviewResponse,
    refresh: Response<()>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    LoadConfiguration,
    FetchCatalog { gathered_reviews: String },
    FetchReview { hash: String },
    Refresh,
}

impl Default for MockReviewService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockReviewService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(MockResponses::default())),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_configuration_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<Configuration> + Send + 'static,
    {
        self.responses.lock().unwrap().load_configuration = Some(Box::new(f));
        self
    }

    pub fn with_catalog_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<Vec<CatalogEntry>> + Send + 'static,
    {
        self.responses.lock().unwrap().fetch_catalog = Some(Box::new(f));
        self
    }

    /// Configure fetch_review; the closure sees the requested entry.
    pub fn with_review_response<F>(self, f: F) -> Self
    where
        F: Fn(&CatalogEntry) -> ClientResult<ReviewDocument> + Send + 'static,
    {
        self.responses.lock().unwrap().fetch_review = Some(Box::new(f));
        self
    }

    pub fn with_refresh_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<()> + Send + 'static,
    {
        self.responses.lock().unwrap().refresh = Some(Box::new(f));
        self
    }

    /// Serve a fixed catalog with a default configuration and a no-op refresh.
    pub fn with_catalog(self, catalog: Vec<CatalogEntry>) -> Self {
        self.with_configuration_response(|| {
            Ok(Configuration {
                paths: ReviewPaths {
                    gathered_reviews: "reviews/gathered.json".to_string(),
                },
            })
        })
        .with_refresh_response(|| Ok(()))
        .with_catalog_response(move || Ok(catalog.clone()))
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.call_log.lock().unwrap().clear();
    }

    fn record(&self, call: MockCall) {
        self.call_log.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ReviewService for MockReviewService {
    async fn load_configuration(&self) -> ClientResult<Configuration> {
        self.record(MockCall::LoadConfiguration);
        let responses = self.responses.lock().unwrap();
        match &responses.load_configuration {
            Some(f) => f(),
            None => Err(ClientError::NotConfigured("load_configuration".into())),
        }
    }

    async fn fetch_catalog(
        &self,
        configuration: &Configuration,
    ) -> ClientResult<Vec<CatalogEntry>> {
        self.record(MockCall::FetchCatalog {
            gathered_reviews: configuration.paths.gathered_reviews.clone(),
        });
        let responses = self.responses.lock().unwrap();
        match &responses.fetch_catalog {
            Some(f) => f(),
            None => Err(ClientError::NotConfigured("fetch_catalog".into())),
        }
    }

    async fn fetch_review(&self, entry: &CatalogEntry) -> ClientResult<ReviewDocument> {
        self.record(MockCall::FetchReview {
            hash: entry.hash.clone(),
        });
        let responses = self.responses.lock().unwrap();
        match &responses.fetch_review {
            Some(f) => f(entry),
            None => Err(ClientError::NotConfigured("fetch_review".into())),
        }
    }

    async fn refresh(&self) -> ClientResult<()> {
        self.record(MockCall::Refresh);
        let responses = self.responses.lock().unwrap();
        match &responses.refresh {
            Some(f) => f(),
            None => Err(ClientError::NotConfigured("refresh".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(hash: &str) -> CatalogEntry {
        serde_json::from_value(serde_json::json!({ "hash": hash })).unwrap()
    }

    #[tokio::test]
    async fn unconfigured_calls_fail_and_are_logged() {
        let mock = MockReviewService::new();
        assert!(matches!(
            mock.refresh().await,
            Err(ClientError::NotConfigured(_))
        ));
        assert_eq!(mock.calls(), vec![MockCall::Refresh]);
    }

    #[tokio::test]
    async fn with_catalog_serves_startup_sequence() {
        let mock = MockReviewService::new().with_catalog(vec![entry("a"), entry("b")]);
        let configuration = mock.load_configuration().await.unwrap();
        mock.refresh().await.unwrap();
        let catalog = mock.fetch_catalog(&configuration).await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            mock.calls(),
            vec![
                MockCall::LoadConfiguration,
                MockCall::Refresh,
                MockCall::FetchCatalog {
                    gathered_reviews: "reviews/gathered.json".into()
                },
            ]
        );
    }

    #[tokio::test]
    async fn review_response_sees_entry() {
        let mock = MockReviewService::new().with_review_response(|entry| {
            if entry.hash == "missing" {
                Err(ClientError::RefreshFailed("gone".into()))
            } else {
                Ok(ReviewDocument::default())
            }
        });
        assert!(mock.fetch_review(&entry("ok")).await.is_ok());
        assert!(mock.fetch_review(&entry("missing")).await.is_err());
        mock.clear_calls();
        assert!(mock.calls().is_empty());
    }
}
