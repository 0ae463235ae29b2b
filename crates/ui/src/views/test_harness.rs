use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{ContentSource, DeckLoader, InMemorySource};

use crate::context::{UiApp, build_app_context};
use crate::views::DeckView;
use crate::views::deck::DeckTestHandles;

struct TestApp {
    loader: Arc<DeckLoader>,
}

impl UiApp for TestApp {
    fn window_title(&self) -> String {
        "Test deck".to_string()
    }

    fn deck_loader(&self) -> Arc<DeckLoader> {
        Arc::clone(&self.loader)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: DeckTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn DeckHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { DeckView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: DeckTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Build, then let the load resource finish and re-render.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    /// Send an input event through the view's dispatcher and re-render.
    pub fn send(&mut self, event: crate::vm::InputEvent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(event));
        drive_dom(&mut self.dom);
    }

    /// Index of the active slide, if a deck loaded.
    pub fn active_index(&self) -> Option<usize> {
        let vm = self.handles.vm();
        self.dom
            .in_runtime(|| vm.peek().as_ref().map(|deck| deck.navigation().index()))
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(content: &str) -> ViewHarness {
    setup_view_harness_with_source(Arc::new(InMemorySource::new(content)))
}

pub fn setup_view_harness_with_source(source: Arc<dyn ContentSource>) -> ViewHarness {
    let handles = DeckTestHandles::default();
    let app = Arc::new(TestApp {
        loader: Arc::new(DeckLoader::new(source)),
    });
    let dom = VirtualDom::new_with_props(
        DeckHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}
