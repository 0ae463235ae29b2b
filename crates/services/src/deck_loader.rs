use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, warn};

use slides_core::Deck;

use crate::content_source::{ContentSource, source_for_location};
use crate::error::DeckLoadError;

/// The two ways a load can fail, as far as the viewer is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadFailure {
    /// The document was read but has no usable slide list.
    Malformed,
    /// The document could not be read or parsed.
    Unavailable,
}

impl DeckLoadError {
    #[must_use]
    pub fn failure(&self) -> LoadFailure {
        match self {
            Self::Malformed(_) => LoadFailure::Malformed,
            Self::Content(_) | Self::Json(_) => LoadFailure::Unavailable,
        }
    }
}

/// Loads the deck once at startup from a fixed source.
#[derive(Clone)]
pub struct DeckLoader {
    source: Arc<dyn ContentSource>,
}

impl DeckLoader {
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn for_location(location: &str) -> Self {
        Self::new(source_for_location(location))
    }

    #[must_use]
    pub fn describe_source(&self) -> String {
        self.source.describe()
    }

    /// Fetch, parse and shape-check the content document.
    ///
    /// # Errors
    ///
    /// Returns `DeckLoadError::Content` if the source cannot be read,
    /// `DeckLoadError::Json` if the body is not JSON, and
    /// `DeckLoadError::Malformed` if it has no `slides` array.
    pub async fn load(&self) -> Result<Deck, DeckLoadError> {
        let result = self.fetch_deck().await;
        let source = self.source.describe();
        match &result {
            Ok(deck) => info!(%source, slides = deck.len(), "deck loaded"),
            Err(err @ DeckLoadError::Malformed(_)) => {
                warn!(%source, error = %err, "deck content is malformed");
            }
            Err(err) => error!(%source, error = %err, "failed to load deck"),
        }
        result
    }

    async fn fetch_deck(&self) -> Result<Deck, DeckLoadError> {
        let body = self.source.fetch().await?;
        let document: Value = serde_json::from_str(&body)?;
        Ok(Deck::from_json(&document)?)
    }
}
