//! Review client implementation

use crate::error::{ClientError, ClientResult};
use crate::traits::ReviewService;
use async_trait::async_trait;
use reviewer::{CatalogEntry, Configuration, ReviewDocument};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Location of the configuration document relative to the source root.
pub const CONFIGURATION_PATH: &str = "configuration.json";

/// Where review documents come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Local directory; document paths resolve relative to it.
    Directory(PathBuf),
    /// HTTP origin without trailing slash, e.g. `http://localhost:8000`.
    Http(String),
}

impl Source {
    /// `http://` and `https://` locations are origins, anything else a directory.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Http(location.trim_end_matches('/').to_string())
        } else {
            Self::Directory(PathBuf::from(location))
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directory(dir) => write!(f, "{}", dir.display()),
            Self::Http(origin) => write!(f, "{origin}"),
        }
    }
}

/// Client for a review document source
pub struct ReviewClient {
    source: Source,
    http: reqwest::Client,
    refresh_command: Option<String>,
}

impl ReviewClient {
    /// Create a client; `timeout` applies to every HTTP request.
    pub fn new(source: Source, timeout: Duration) -> ClientResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            source,
            http,
            refresh_command: None,
        })
    }

    /// Shell command run by [`ReviewService::refresh`] for directory sources.
    pub fn with_refresh_command(mut self, command: Option<String>) -> Self {
        self.refresh_command = command.filter(|c| !c.trim().is_empty());
        self
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    fn resolve(dir: &Path, path: &str) -> PathBuf {
        dir.join(path.trim_start_matches('/'))
    }

    fn url(origin: &str, path: &str) -> String {
        format!("{}/{}", origin, path.trim_start_matches('/'))
    }

    async fn fetch_text(&self, path: &str, no_cache: bool) -> ClientResult<String> {
        match &self.source {
            Source::Directory(dir) => {
                let file = Self::resolve(dir, path);
                tracing::debug!(path = %file.display(), "Reading document");
                tokio::fs::read_to_string(&file)
                    .await
                    .map_err(|source| ClientError::Io { path: file, source })
            }
            Source::Http(origin) => {
                let url = Self::url(origin, path);
                tracing::debug!(%url, "Fetching document");
                let mut request = self.http.get(&url);
                if no_cache {
                    request = request.header(reqwest::header::CACHE_CONTROL, "no-cache");
                }
                let response = request.send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(ClientError::Status {
                        url,
                        status: status.as_u16(),
                    });
                }
                Ok(response.text().await?)
            }
        }
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        what: &'static str,
        no_cache: bool,
    ) -> ClientResult<T> {
        let text = self.fetch_text(path, no_cache).await?;
        serde_json::from_str(&text).map_err(|source| ClientError::Malformed { what, source })
    }

    async fn run_refresh_command(command: &str) -> ClientResult<()> {
        tracing::info!(%command, "Running refresh command");
        let output = tokio::process::Command::new("sh")
            .arg("-c")
            .arg(command)
            .output()
            .await
            .map_err(|e| ClientError::RefreshFailed(format!("{command}: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ClientError::RefreshFailed(format!(
                "{command} exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ReviewService for ReviewClient {
    async fn load_configuration(&self) -> ClientResult<Configuration> {
        self.fetch_json(CONFIGURATION_PATH, "configuration", true)
            .await
    }

    async fn fetch_catalog(
        &self,
        configuration: &Configuration,
    ) -> ClientResult<Vec<CatalogEntry>> {
        let catalog: Vec<CatalogEntry> = self
            .fetch_json(&configuration.paths.gathered_reviews, "catalog", true)
            .await?;
        tracing::info!(entries = catalog.len(), "Catalog fetched");
        Ok(catalog)
    }

    async fn fetch_review(&self, entry: &CatalogEntry) -> ClientResult<ReviewDocument> {
        self.fetch_json(&entry.path, "review", false).await
    }

    async fn refresh(&self) -> ClientResult<()> {
        match &self.source {
            Source::Directory(_) => match &self.refresh_command {
                Some(command) => Self::run_refresh_command(command).await,
                None => Ok(()),
            },
            Source::Http(origin) => {
                let url = Self::url(origin, "refresh");
                let response = self.http.get(&url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(ClientError::Status {
                        url,
                        status: status.as_u16(),
                    });
                }
                Ok(())
            }
        }
    }
}
