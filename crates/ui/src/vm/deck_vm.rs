use slides_core::{Deck, NavigationState};
use tracing::debug;

use super::element::Node;
use super::input::{DeckIntent, InputBinder, InputEvent};
use super::slide_vm::render_slide;

/// Everything the deck view shows for one navigation state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckFrame {
    pub slides: Vec<Node>,
    pub active_index: usize,
    pub progress_text: String,
    pub progress_percent: u32,
    pub speaker_text: String,
    pub speaker_visible: bool,
}

/// Owns a loaded deck together with its navigation and panel state.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckVm {
    deck: Deck,
    slides: Vec<Node>,
    navigation: NavigationState,
    speaker_visible: bool,
    input: InputBinder,
}

impl DeckVm {
    /// Render every slide once and set up navigation at the first slide.
    #[must_use]
    pub fn build(deck: Deck) -> Self {
        let navigation = NavigationState::new(deck.len());
        let slides = deck
            .slides()
            .iter()
            .enumerate()
            .map(|(position, slide)| render_slide(slide, position, navigation.index()))
            .collect();
        Self {
            deck,
            slides,
            navigation,
            speaker_visible: true,
            input: InputBinder::new(),
        }
    }

    #[must_use]
    pub fn navigation(&self) -> NavigationState {
        self.navigation
    }

    /// Route a raw input event through the binding table and apply it.
    pub fn handle_input(&mut self, event: &InputEvent) {
        if let Some(intent) = self.input.handle(event) {
            self.apply(intent);
        }
    }

    pub fn apply(&mut self, intent: DeckIntent) {
        let before = self.navigation.index();
        match intent {
            DeckIntent::Move(offset) => {
                self.navigation.move_by(offset);
            }
            DeckIntent::First => {
                self.navigation.jump_first();
            }
            DeckIntent::Last => {
                self.navigation.jump_last();
            }
            DeckIntent::ToggleSpeaker => self.speaker_visible = !self.speaker_visible,
        }
        let after = self.navigation.index();
        if before != after {
            debug!(from = before, to = after, total = self.navigation.total(), "slide changed");
        }
    }

    /// Re-synchronize everything visible with the current index.
    #[must_use]
    pub fn frame(&self) -> DeckFrame {
        let index = self.navigation.index();
        let total = self.navigation.total();

        let mut slides = self.slides.clone();
        for (position, slide) in slides.iter_mut().enumerate() {
            slide.toggle_class("active", position == index);
        }

        let speaker_text = self
            .deck
            .get(index)
            .and_then(|slide| slide.speaker_line())
            .unwrap_or_default()
            .to_string();

        DeckFrame {
            slides,
            active_index: index,
            progress_text: progress_text(index, total),
            progress_percent: progress_percent(index, total),
            speaker_text,
            speaker_visible: self.speaker_visible,
        }
    }
}

/// `"{index+1} / {total}"`; an empty deck reads `"0 / 0"`.
#[must_use]
pub fn progress_text(index: usize, total: usize) -> String {
    if total == 0 {
        return "0 / 0".to_string();
    }
    format!("{} / {total}", index + 1)
}

/// `round((index+1) / total * 100)`, halves rounding up.
#[must_use]
pub fn progress_percent(index: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let percent = (200 * (index + 1) + total) / (2 * total);
    u32::try_from(percent).unwrap_or(u32::MAX)
}
