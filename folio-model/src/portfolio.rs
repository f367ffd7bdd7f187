use crate::ids::PortfolioItemId;

/// Kind of media a card displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// A single showcase entry rendered as a carousel card.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioItem {
    pub id: PortfolioItemId,
    /// Image or video URL.
    pub media: String,
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub kind: MediaKind,
    pub title: String,
    pub category: String,
    /// Still frame shown before a video starts playing.
    #[cfg_attr(feature = "serde", serde(default))]
    pub poster: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub website_url: Option<String>,
}

impl PortfolioItem {
    /// Image card with no optional metadata.
    pub fn image(
        id: impl Into<PortfolioItemId>,
        media: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            media: media.into(),
            kind: MediaKind::Image,
            title: title.into(),
            category: category.into(),
            poster: None,
            description: None,
            website_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_website(mut self, url: impl Into<String>) -> Self {
        self.website_url = Some(url.into());
        self
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn deserializes_type_field_and_missing_optionals() {
        let raw = r#"{
            "id": "gym",
            "media": "/assets/portfolio-gym.mp4",
            "type": "video",
            "title": "Iron Peak Fitness",
            "category": "Gym Website"
        }"#;
        let item: PortfolioItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.id.as_str(), "gym");
        assert!(item.is_video());
        assert!(item.poster.is_none());
        assert!(item.website_url.is_none());
    }
}
