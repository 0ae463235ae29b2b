//! A small owned node tree for markup the viewer builds itself.
//!
//! Nodes are built with [`el`] and adjusted in place (class toggles). The
//! views render them as real elements, so text is never parsed as markup.

/// One child of a [`Node`]: plain text or a nested node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Child {
    Text(String),
    Node(Node),
}

impl Child {
    fn is_falsy(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

impl From<&str> for Child {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<&String> for Child {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<String> for Child {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Node> for Child {
    fn from(value: Node) -> Self {
        Self::Node(value)
    }
}

/// The child argument of [`el`]: nothing, one value, or an ordered sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Children(Vec<Option<Child>>);

impl From<()> for Children {
    fn from((): ()) -> Self {
        Self::default()
    }
}

impl From<&str> for Children {
    fn from(value: &str) -> Self {
        Self(vec![Some(value.into())])
    }
}

impl From<&String> for Children {
    fn from(value: &String) -> Self {
        Self(vec![Some(value.into())])
    }
}

impl From<String> for Children {
    fn from(value: String) -> Self {
        Self(vec![Some(value.into())])
    }
}

impl From<Node> for Children {
    fn from(value: Node) -> Self {
        Self(vec![Some(value.into())])
    }
}

impl<T: Into<Child>> From<Option<T>> for Children {
    fn from(value: Option<T>) -> Self {
        Self(vec![value.map(Into::into)])
    }
}

impl<T: Into<Child>> From<Vec<T>> for Children {
    fn from(value: Vec<T>) -> Self {
        Self(value.into_iter().map(|child| Some(child.into())).collect())
    }
}

impl<T: Into<Child>, const N: usize> From<[T; N]> for Children {
    fn from(value: [T; N]) -> Self {
        Self(value.into_iter().map(|child| Some(child.into())).collect())
    }
}

/// An element with a tag, classes, raw inner markup, attributes and children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    tag: String,
    classes: Vec<String>,
    inner_html: Option<String>,
    attributes: Vec<(&'static str, String)>,
    children: Vec<Child>,
}

/// Build a node.
///
/// Attribute keys: `class` sets the class list, `html` sets inner markup
/// (sanitized), anything else becomes a plain attribute taken verbatim.
/// Absent children and empty text children are skipped.
#[must_use]
pub fn el(
    tag: &str,
    attributes: &[(&'static str, &str)],
    children: impl Into<Children>,
) -> Node {
    let mut node = Node {
        tag: tag.to_owned(),
        classes: Vec::new(),
        inner_html: None,
        attributes: Vec::new(),
        children: Vec::new(),
    };
    for (key, value) in attributes {
        match *key {
            "class" => {
                node.classes = value.split_whitespace().map(str::to_owned).collect();
            }
            "html" => node.inner_html = Some(sanitize_markup(value)),
            _ => node.set_attribute(*key, value),
        }
    }
    for child in children.into().0.into_iter().flatten() {
        node.append(child);
    }
    node
}

impl Node {
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Space-separated class list, or `None` when there are no classes.
    #[must_use]
    pub fn class_list(&self) -> Option<String> {
        (!self.classes.is_empty()).then(|| self.classes.join(" "))
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Plain attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.attributes
            .iter()
            .map(|(key, value)| (*key, value.as_str()))
    }

    /// Sanitized inner markup set through the `html` key.
    #[must_use]
    pub fn inner_html(&self) -> Option<&str> {
        self.inner_html.as_deref()
    }

    pub fn set_attribute(&mut self, name: &'static str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value.to_owned(),
            None => self.attributes.push((name, value.to_owned())),
        }
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Adds `class` when `on` is true, removes it otherwise.
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.classes.retain(|c| c != class);
        }
    }

    pub fn append(&mut self, child: impl Into<Child>) {
        let child = child.into();
        if !child.is_falsy() {
            self.children.push(child);
        }
    }

    /// Child nodes with the given tag, in order. Text children are skipped.
    pub fn child_nodes<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children.iter().filter_map(move |child| match child {
            Child::Node(node) if node.tag == tag => Some(node),
            _ => None,
        })
    }

    /// Concatenated text of all descendants. Raw inner markup is not included.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Child::Text(text) => out.push_str(text),
                Child::Node(node) => node.collect_text(out),
            }
        }
    }
}

fn sanitize_markup(html: &str) -> String {
    ammonia::clean(html)
}
