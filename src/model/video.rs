use crate::engine::EngineError;
use serde::Deserialize;

/// A single video in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Video {
    /// Unique identifier for this video
    pub id: String,

    /// Display title
    pub title: String,

    /// Tags, each starting with `#` (ordered as loaded)
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Video {
    /// Create a video, rejecting an empty id or tags that do not start with `#`
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        tags: Vec<String>,
    ) -> Result<Self, EngineError> {
        let id = id.into();
        if id.is_empty() {
            return Err(EngineError::EmptyId);
        }
        if let Some(tag) = tags.iter().find(|t| !t.starts_with('#')) {
            return Err(EngineError::InvalidTag { tag: tag.clone() });
        }

        Ok(Self {
            id,
            title: title.into(),
            tags,
        })
    }

    /// Case-insensitive exact match against one of this video's tags
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }

    /// Case-insensitive substring match against the title
    pub fn title_contains(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }
}
