//! Input events and the table that maps them onto deck intents.

/// Minimum horizontal travel, in CSS pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Navigation and panel actions the deck understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckIntent {
    Move(isize),
    First,
    Last,
    ToggleSpeaker,
}

/// Raw user input, as delivered by the view.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PrevClicked,
    NextClicked,
    SpeakerClicked,
    Key(String),
    TouchStart(f64),
    TouchEnd(f64),
}

const KEY_BINDINGS: &[(&str, DeckIntent)] = &[
    ("ArrowRight", DeckIntent::Move(1)),
    ("ArrowLeft", DeckIntent::Move(-1)),
    ("Home", DeckIntent::First),
    ("End", DeckIntent::Last),
];

/// Intent bound to a key name (`KeyboardEvent.key` values), if any.
#[must_use]
pub fn intent_for_key(key: &str) -> Option<DeckIntent> {
    KEY_BINDINGS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, intent)| *intent)
}

/// Turns input events into intents.
///
/// The only state is the start coordinate of an in-progress touch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputBinder {
    touch_start_x: Option<f64>,
}

impl InputBinder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: &InputEvent) -> Option<DeckIntent> {
        match event {
            InputEvent::PrevClicked => Some(DeckIntent::Move(-1)),
            InputEvent::NextClicked => Some(DeckIntent::Move(1)),
            InputEvent::SpeakerClicked => Some(DeckIntent::ToggleSpeaker),
            InputEvent::Key(key) => intent_for_key(key),
            InputEvent::TouchStart(x) => {
                self.touch_start_x = Some(*x);
                None
            }
            InputEvent::TouchEnd(x) => {
                let start = self.touch_start_x.take()?;
                swipe_intent(x - start)
            }
        }
    }

    #[must_use]
    pub fn touch_in_progress(&self) -> bool {
        self.touch_start_x.is_some()
    }
}

// A rightward swipe reveals the previous slide.
fn swipe_intent(dx: f64) -> Option<DeckIntent> {
    if dx > SWIPE_THRESHOLD {
        Some(DeckIntent::Move(-1))
    } else if dx < -SWIPE_THRESHOLD {
        Some(DeckIntent::Move(1))
    } else {
        None
    }
}
