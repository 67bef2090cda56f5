use std::fmt;

use serde::{Deserialize, Serialize};

const UNTITLED: &str = "(no description)";

/// Stable identity of a photo in the rendered sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotoId(String);

impl PhotoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single photo listing as received from the feed.
///
/// Records are never mutated after they arrive; the gallery only appends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: PhotoId,
    pub thumbnail_url: String,
    pub author_name: String,
    pub alt_text: Option<String>,
    pub likes: u64,
    /// Dominant colour as a `#rrggbb` hex string
    pub color: Option<String>,
}

impl PhotoRecord {
    pub fn new(
        id: impl Into<String>,
        thumbnail_url: impl Into<String>,
        author_name: impl Into<String>,
    ) -> Self {
        Self {
            id: PhotoId::new(id),
            thumbnail_url: thumbnail_url.into(),
            author_name: author_name.into(),
            alt_text: None,
            likes: 0,
            color: None,
        }
    }

    pub fn alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    pub fn likes(mut self, likes: u64) -> Self {
        self.likes = likes;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Alt text, or a placeholder when the photo has none
    pub fn description(&self) -> &str {
        match self.alt_text.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => UNTITLED,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_photo_record_builder() {
        let photo = PhotoRecord::new("abc", "https://images.example/abc", "Ansel")
            .alt_text("a mountain")
            .likes(42)
            .color("#336699");

        assert_eq!(photo.id, PhotoId::new("abc"));
        assert_eq!(photo.thumbnail_url, "https://images.example/abc");
        assert_eq!(photo.author_name, "Ansel");
        assert_eq!(photo.alt_text.as_deref(), Some("a mountain"));
        assert_eq!(photo.likes, 42);
        assert_eq!(photo.color.as_deref(), Some("#336699"));
    }

    #[test]
    fn test_description_falls_back_when_missing() {
        let photo = PhotoRecord::new("abc", "url", "Ansel");
        assert_eq!(photo.description(), "(no description)");

        let blank = PhotoRecord::new("abc", "url", "Ansel").alt_text("   ");
        assert_eq!(blank.description(), "(no description)");

        let described = PhotoRecord::new("abc", "url", "Ansel").alt_text("a lake");
        assert_eq!(described.description(), "a lake");
    }

    #[test]
    fn test_photo_id_display() {
        assert_eq!(PhotoId::new("xyz").to_string(), "xyz");
        assert_eq!(PhotoId::new("xyz").as_str(), "xyz");
    }
}
