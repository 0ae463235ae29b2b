mod deck_vm;
mod element;
mod input;
mod slide_vm;

pub use deck_vm::{DeckFrame, DeckVm, progress_percent, progress_text};
pub use element::{Child, Children, Node, el};
pub use input::{DeckIntent, InputBinder, InputEvent, SWIPE_THRESHOLD, intent_for_key};
pub use slide_vm::{render_load_failure, render_loading, render_slide};
