#![forbid(unsafe_code)]

pub mod model;

pub use model::{Deck, DeckError, NavigationState, Slide};
