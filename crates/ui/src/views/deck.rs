use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{NodeView, ViewError, ViewState, view_state_from_resource};
use crate::vm::{DeckVm, InputEvent, Node, intent_for_key, render_load_failure, render_loading};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const FOCUS_ROOT_SCRIPT: &str = r#"document.getElementById("deck-root")?.focus();"#;

fn changed_touch_x(evt: &TouchEvent) -> Option<f64> {
    evt.data
        .touches_changed()
        .first()
        .map(|touch| touch.client_coordinates().x)
}

#[component]
pub fn DeckView() -> Element {
    let ctx = use_context::<AppContext>();
    let loader = ctx.deck_loader();
    let vm = use_signal(|| None::<DeckVm>);

    let resource = use_resource(move || {
        let loader = loader.clone();
        let mut vm = vm;
        async move {
            let deck = loader
                .load()
                .await
                .map_err(|err| ViewError::Load(err.failure()))?;
            vm.set(Some(DeckVm::build(deck)));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    // Input only reaches a deck that loaded; failures leave nothing to navigate.
    let dispatch = use_callback(move |event: InputEvent| {
        let mut vm = vm;
        let mut guard = vm.write();
        if let Some(deck) = guard.as_mut() {
            deck.handle_input(&event);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DeckTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    use_effect(move || {
        let _ = document::eval(FOCUS_ROOT_SCRIPT);
    });

    let on_key = move |evt: KeyboardEvent| {
        let key = evt.data.key().to_string();
        if intent_for_key(&key).is_some() {
            evt.prevent_default();
            dispatch.call(InputEvent::Key(key));
        }
    };

    let frame = vm.read().as_ref().map(DeckVm::frame);
    let deck_nodes: Vec<Node> = match (&state, frame.as_ref()) {
        (ViewState::Ready(()), Some(frame)) => frame.slides.clone(),
        (ViewState::Error(err), _) => vec![render_load_failure(err.failure())],
        _ => vec![render_loading()],
    };
    let progress_text = frame
        .as_ref()
        .map(|frame| frame.progress_text.clone())
        .unwrap_or_default();
    let speaker_text = frame
        .as_ref()
        .map(|frame| frame.speaker_text.clone())
        .unwrap_or_default();
    let speaker_style = if frame.as_ref().is_none_or(|frame| frame.speaker_visible) {
        "display: block"
    } else {
        "display: none"
    };
    let progress_percent = frame.as_ref().map(|frame| frame.progress_percent);

    rsx! {
        div { class: "viewer", id: "deck-root", tabindex: "0", onkeydown: on_key,
            header { class: "topbar",
                div { class: "progress", id: "progress", "{progress_text}" }
                div { class: "controls",
                    button {
                        class: "btn",
                        id: "prevBtn",
                        r#type: "button",
                        onclick: move |_| dispatch.call(InputEvent::PrevClicked),
                        "Prev"
                    }
                    button {
                        class: "btn",
                        id: "nextBtn",
                        r#type: "button",
                        onclick: move |_| dispatch.call(InputEvent::NextClicked),
                        "Next"
                    }
                }
            }
            div {
                class: "deck",
                id: "deck",
                ontouchstart: move |evt: TouchEvent| {
                    if let Some(x) = changed_touch_x(&evt) {
                        dispatch.call(InputEvent::TouchStart(x));
                    }
                },
                ontouchend: move |evt: TouchEvent| {
                    if let Some(x) = changed_touch_x(&evt) {
                        dispatch.call(InputEvent::TouchEnd(x));
                    }
                },
                for (position, node) in deck_nodes.into_iter().enumerate() {
                    NodeView { key: "{position}", node }
                }
            }
            div {
                class: "speaker",
                id: "speaker",
                style: speaker_style,
                onclick: move |_| dispatch.call(InputEvent::SpeakerClicked),
                "{speaker_text}"
            }
            footer { class: "footer",
                if let Some(percent) = progress_percent {
                    div { class: "progressbar",
                        i { style: "width: {percent}%" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DeckTestHandles {
    dispatch: Rc<RefCell<Option<Callback<InputEvent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<DeckVm>>>>>,
}

#[cfg(test)]
impl DeckTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<InputEvent>, vm: Signal<Option<DeckVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<InputEvent> {
        (*self.dispatch.borrow()).expect("deck dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<DeckVm>> {
        (*self.vm.borrow()).expect("deck vm registered")
    }
}
