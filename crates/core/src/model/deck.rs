use serde_json::Value;
use thiserror::Error;

use crate::model::slide::Slide;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Shape problems in a loaded content document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("content has no `slides` field")]
    MissingSlides,

    #[error("`slides` must be an array")]
    SlidesNotAnArray,
}

//
// ─── DECK ──────────────────────────────────────────────────────────────────────
//

/// The ordered slides of one presentation.
///
/// Built once from the content document and never edited afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    #[must_use]
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    /// Builds a deck from a parsed content document.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::MissingSlides` if the document is not an object
    /// with a `slides` field, and `DeckError::SlidesNotAnArray` if that field
    /// is not an array.
    pub fn from_json(document: &Value) -> Result<Self, DeckError> {
        let slides = document.get("slides").ok_or(DeckError::MissingSlides)?;
        let items = slides.as_array().ok_or(DeckError::SlidesNotAnArray)?;
        Ok(Self::new(items.iter().map(Slide::from_value).collect()))
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
