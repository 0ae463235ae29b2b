use services::LoadFailure;
use slides_core::Slide;

use super::element::{Child, Node, el};

/// Render one slide as `section.slide[data-idx]`.
///
/// The section is marked `active` when `position == active_index`.
#[must_use]
pub fn render_slide(slide: &Slide, position: usize, active_index: usize) -> Node {
    let idx = position.to_string();
    let mut section = el("section", &[("class", "slide"), ("data-idx", idx.as_str())], ());
    if position == active_index {
        section.add_class("active");
    }

    let mut heading = el("div", &[("class", "heading")], ());
    heading.append(el("div", &[], el("h1", &[], slide.title().unwrap_or(""))));
    if let Some(subtitle) = slide.subtitle() {
        heading.append(el("div", &[("class", "cover-sub")], subtitle));
    }
    section.append(heading);

    if !slide.bullets().is_empty() {
        let paragraphs: Vec<Child> = slide
            .bullets()
            .iter()
            .map(|bullet| el("p", &[], bullet).into())
            .collect();
        section.append(el("div", &[("class", "bullets")], paragraphs));
    }

    if let Some(timing) = slide.timing() {
        section.append(el("div", &[("class", "small")], timing));
    }

    if let Some(note) = slide.note() {
        section.append(el("div", &[("class", "small")], note));
    }

    section
}

/// Static message shown in place of the deck when loading fails.
#[must_use]
pub fn render_load_failure(failure: LoadFailure) -> Node {
    let (title, detail) = match failure {
        LoadFailure::Malformed => ("Error", "content.json not found or invalid."),
        LoadFailure::Unavailable => ("Error loading deck", "Check that content.json is present."),
    };
    el(
        "div",
        &[("class", "slide active")],
        [el("h1", &[], title), el("p", &[("class", "small")], detail)],
    )
}

/// Placeholder shown while the content is being fetched.
#[must_use]
pub fn render_loading() -> Node {
    el("p", &[("class", "small")], "Loading...")
}
