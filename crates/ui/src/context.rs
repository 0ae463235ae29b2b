use std::sync::Arc;

use services::DeckLoader;

pub trait UiApp: Send + Sync {
    fn window_title(&self) -> String;
    fn deck_loader(&self) -> Arc<DeckLoader>;
}

#[derive(Clone)]
pub struct AppContext {
    window_title: String,
    deck_loader: Arc<DeckLoader>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            window_title: app.window_title(),
            deck_loader: app.deck_loader(),
        }
    }

    #[must_use]
    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    #[must_use]
    pub fn deck_loader(&self) -> Arc<DeckLoader> {
        Arc::clone(&self.deck_loader)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
