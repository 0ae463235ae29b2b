mod deck;
mod node;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use deck::DeckView;
pub use node::NodeView;
pub use state::{ViewError, ViewState, view_state_from_resource};
