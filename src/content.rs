use serde::{Deserialize, Serialize};

/// Title and description of one piece of content, as shown by
/// [`ContentCard`](crate::components::ContentCard).
///
/// Missing fields deserialize to an empty string and unknown ones are
/// ignored, so a partial record still renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentItem {
    pub title: String,
    pub description: String,
}

impl ContentItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Both title and description are empty.
    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }
}

impl From<&ContentItem> for ContentItem {
    fn from(item: &ContentItem) -> Self {
        item.clone()
    }
}
