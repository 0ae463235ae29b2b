use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::ContentError;

/// Where the raw content document comes from.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Human-readable location, used in log records.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<String, ContentError>;
}

/// Resolve a configured location into a source.
///
/// `http://` and `https://` URLs are fetched over the network; anything else
/// is treated as a file path relative to the working directory.
#[must_use]
pub fn source_for_location(location: &str) -> Arc<dyn ContentSource> {
    match Url::parse(location) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Arc::new(HttpSource::new(url)),
        _ => Arc::new(FileSource::new(location)),
    }
}

/// Reads content from the local filesystem.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String, ContentError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ContentError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

/// Fetches content with a single GET request.
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self::with_client(Client::new(), url)
    }

    #[must_use]
    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<String, ContentError> {
        let response = self.client.get(self.url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(ContentError::HttpStatus(response.status()));
        }
        Ok(response.text().await?)
    }
}

/// Serves a fixed body, or a fixed failure. Useful for tests and previews.
#[derive(Clone, Debug)]
pub struct InMemorySource {
    body: Result<String, String>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Ok(body.into()),
        }
    }

    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            body: Err(reason.into()),
        }
    }
}

#[async_trait]
impl ContentSource for InMemorySource {
    fn describe(&self) -> String {
        "in-memory".to_string()
    }

    async fn fetch(&self) -> Result<String, ContentError> {
        self.body.clone().map_err(ContentError::Unavailable)
    }
}
