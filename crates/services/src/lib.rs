#![forbid(unsafe_code)]

pub mod content_source;
pub mod deck_loader;
pub mod error;

pub use content_source::{
    ContentSource, FileSource, HttpSource, InMemorySource, source_for_location,
};
pub use deck_loader::{DeckLoader, LoadFailure};
pub use error::{ContentError, DeckLoadError};
