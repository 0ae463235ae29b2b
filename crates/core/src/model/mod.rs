mod deck;
mod navigation;
mod slide;

pub use deck::{Deck, DeckError};
pub use navigation::NavigationState;
pub use slide::Slide;
