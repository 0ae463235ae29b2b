use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One content unit of a deck.
///
/// Every field is optional. Content files are hand-written, so scalar values
/// of the wrong type (numbers, booleans) are accepted as text and values that
/// cannot be shown (objects, nulls, `false`, `0`, `""`) count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Slide {
    #[serde(default, deserialize_with = "lenient_text")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    subtitle: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    bullets: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    timing: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    note: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    speaker_line: Option<String>,
}

impl Slide {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a slide out of one element of the `slides` array.
    ///
    /// Elements that are not objects become empty slides.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        // serde would otherwise fill fields from an array by position.
        if !value.is_object() {
            return Self::new();
        }
        Self::deserialize(value).unwrap_or_default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = non_empty(title.into());
        self
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = non_empty(subtitle.into());
        self
    }

    #[must_use]
    pub fn with_bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets = bullets.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_timing(mut self, timing: impl Into<String>) -> Self {
        self.timing = non_empty(timing.into());
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = non_empty(note.into());
        self
    }

    #[must_use]
    pub fn with_speaker_line(mut self, line: impl Into<String>) -> Self {
        self.speaker_line = non_empty(line.into());
        self
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    #[must_use]
    pub fn bullets(&self) -> &[String] {
        &self.bullets
    }

    #[must_use]
    pub fn timing(&self) -> Option<&str> {
        self.timing.as_deref()
    }

    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    #[must_use]
    pub fn speaker_line(&self) -> Option<&str> {
        self.speaker_line.as_deref()
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        _ => false,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if is_falsy(&value) {
        return Ok(None);
    }
    Ok(scalar_text(&value))
}

// Every array element is a bullet. Falsy or non-scalar elements become empty
// strings, which still render as an (empty) paragraph.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .iter()
        .map(|item| {
            if is_falsy(item) {
                String::new()
            } else {
                scalar_text(item).unwrap_or_default()
            }
        })
        .collect())
}
