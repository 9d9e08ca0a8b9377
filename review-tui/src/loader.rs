//! Background fetches. Results come back to the UI task as [`LoadEvent`]s.

use review_client::{
    CatalogEntry, ClientResult, Configuration, ReviewDocument, ReviewService,
};
use reviewer::LoadTicket;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Outcome of a background fetch.
#[derive(Debug)]
pub enum LoadEvent {
    /// Configuration document read at startup.
    Configuration(Configuration),
    Catalog(ClientResult<Vec<CatalogEntry>>),
    Review {
        ticket: LoadTicket,
        entry: CatalogEntry,
        result: ClientResult<ReviewDocument>,
    },
}

/// Send the refresh signal, then fetch the regenerated catalog. A failed
/// refresh aborts before the catalog is fetched.
pub async fn refresh_catalog(
    service: &dyn ReviewService,
    configuration: &Configuration,
) -> ClientResult<Vec<CatalogEntry>> {
    service.refresh().await?;
    let entries = service.fetch_catalog(configuration).await?;
    tracing::info!(entries = entries.len(), "Catalog loaded");
    Ok(entries)
}

/// Spawns fetches on the runtime and forwards their results.
#[derive(Clone)]
pub struct Loader {
    service: Arc<dyn ReviewService>,
    events: mpsc::UnboundedSender<LoadEvent>,
}

impl Loader {
    pub fn new(service: Arc<dyn ReviewService>) -> (Self, mpsc::UnboundedReceiver<LoadEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        (Self { service, events }, rx)
    }

    /// Refresh and reload the catalog. Without a configuration the
    /// configuration document is loaded first.
    pub fn spawn_catalog(&self, configuration: Option<Configuration>) {
        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        tokio::spawn(async move {
            let configuration = match configuration {
                Some(configuration) => configuration,
                None => match service.load_configuration().await {
                    Ok(configuration) => {
                        tracing::info!(
                            catalog = %configuration.paths.gathered_reviews,
                            "Configuration loaded"
                        );
                        if events
                            .send(LoadEvent::Configuration(configuration.clone()))
                            .is_err()
                        {
                            return;
                        }
                        configuration
                    }
                    Err(e) => {
                        if events.send(LoadEvent::Catalog(Err(e))).is_err() {
                            tracing::debug!("UI gone, dropping configuration error");
                        }
                        return;
                    }
                },
            };

            let result = refresh_catalog(service.as_ref(), &configuration).await;
            if events.send(LoadEvent::Catalog(result)).is_err() {
                tracing::debug!("UI gone, dropping catalog");
            }
        });
    }

    pub fn spawn_review(&self, ticket: LoadTicket, entry: CatalogEntry) {
        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        tokio::spawn(async move {
            tracing::debug!(hash = %entry.hash, path = %entry.path, "Fetching review");
            let result = service.fetch_review(&entry).await;
            if events
                .send(LoadEvent::Review {
                    ticket,
                    entry,
                    result,
                })
                .is_err()
            {
                tracing::debug!("UI gone, dropping review");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use review_client::{ClientError, MockCall, MockReviewService};

    fn entry(hash: &str) -> CatalogEntry {
        CatalogEntry {
            hash: hash.to_string(),
            path: format!("reviews/{hash}.json"),
            white: String::new(),
            black: String::new(),
            date: String::new(),
            actual_result: String::new(),
            moves: Vec::new(),
            pgn: String::new(),
        }
    }

    #[tokio::test]
    async fn startup_order_is_configuration_refresh_catalog() {
        let mock = MockReviewService::new().with_catalog(vec![entry("a")]);
        let (loader, mut rx) = Loader::new(Arc::new(mock.clone()));
        loader.spawn_catalog(None);

        assert!(matches!(rx.recv().await, Some(LoadEvent::Configuration(_))));
        match rx.recv().await {
            Some(LoadEvent::Catalog(Ok(entries))) => assert_eq!(entries.len(), 1),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(matches!(
            mock.calls().as_slice(),
            [
                MockCall::LoadConfiguration,
                MockCall::Refresh,
                MockCall::FetchCatalog { .. }
            ]
        ));
    }

    #[tokio::test]
    async fn known_configuration_is_not_reloaded() {
        let mock = MockReviewService::new().with_catalog(vec![]);
        let (loader, mut rx) = Loader::new(Arc::new(mock.clone()));
        let configuration = mock.load_configuration().await.unwrap();
        mock.clear_calls();

        loader.spawn_catalog(Some(configuration));
        assert!(matches!(rx.recv().await, Some(LoadEvent::Catalog(Ok(_)))));
        assert!(!mock.calls().contains(&MockCall::LoadConfiguration));
    }

    #[tokio::test]
    async fn failed_refresh_skips_catalog_fetch() {
        let mock = MockReviewService::new()
            .with_catalog(vec![entry("a")])
            .with_refresh_response(|| Err(ClientError::RefreshFailed("offline".into())));
        let configuration = mock.load_configuration().await.unwrap();
        mock.clear_calls();

        let result = refresh_catalog(&mock, &configuration).await;
        assert!(matches!(result, Err(ClientError::RefreshFailed(_))));
        assert_eq!(mock.calls(), vec![MockCall::Refresh]);
    }

    #[tokio::test]
    async fn configuration_failure_is_reported_as_catalog_error() {
        let (loader, mut rx) = Loader::new(Arc::new(MockReviewService::new()));
        loader.spawn_catalog(None);
        assert!(matches!(
            rx.recv().await,
            Some(LoadEvent::Catalog(Err(ClientError::NotConfigured(_))))
        ));
    }

    #[tokio::test]
    async fn configuration_failure_after_ui_closed_stops_quietly() {
        let mock = MockReviewService::new();
        let (loader, rx) = Loader::new(Arc::new(mock.clone()));
        drop(rx);
        loader.spawn_catalog(None);

        tokio::time::timeout(std::time::Duration::from_secs(1), async {
            while mock.calls().is_empty() {
                tokio::task::yield_now().await;
            }
        })
        .await
        .unwrap();
        tokio::task::yield_now().await;
        assert_eq!(mock.calls(), vec![MockCall::LoadConfiguration]);
    }

    #[tokio::test]
    async fn loader_forwards_review_results() {
        let mock = MockReviewService::new().with_review_response(|_| Ok(ReviewDocument::default()));
        let (loader, mut rx) = Loader::new(Arc::new(mock));
        let mut navigation = reviewer::NavigationController::new(reviewer::PgnOracle);
        let ticket = navigation.begin_load();
        loader.spawn_review(ticket, entry("a"));

        match rx.recv().await {
            Some(LoadEvent::Review {
                ticket: got,
                entry,
                result,
            }) => {
                assert_eq!(got, ticket);
                assert_eq!(entry.hash, "a");
                assert!(result.is_ok());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
