use dioxus::prelude::*;

use crate::vm::{Child, Node};

fn node_attributes(node: &Node) -> Vec<Attribute> {
    let mut attributes = Vec::new();
    if let Some(classes) = node.class_list() {
        attributes.push(Attribute::new("class", classes, None, false));
    }
    for (name, value) in node.attributes() {
        attributes.push(Attribute::new(name, value.to_string(), None, false));
    }
    if let Some(html) = node.inner_html() {
        attributes.push(Attribute::new(
            "dangerous_inner_html",
            html.to_string(),
            None,
            false,
        ));
    }
    attributes
}

/// Renders a node tree from the element builder as real elements.
///
/// Tags outside the set the viewer builds render as `div`.
#[component]
pub fn NodeView(node: Node) -> Element {
    let attributes = node_attributes(&node);
    let children = node.children().iter().map(|child| match child {
        Child::Text(text) => rsx! { "{text}" },
        Child::Node(child) => rsx! { NodeView { node: child.clone() } },
    });

    match node.tag() {
        "section" => rsx! { section { ..attributes, {children} } },
        "h1" => rsx! { h1 { ..attributes, {children} } },
        "h2" => rsx! { h2 { ..attributes, {children} } },
        "p" => rsx! { p { ..attributes, {children} } },
        "span" => rsx! { span { ..attributes, {children} } },
        "i" => rsx! { i { ..attributes, {children} } },
        _ => rsx! { div { ..attributes, {children} } },
    }
}
