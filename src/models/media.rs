use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MediaImage;

/// Media library tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Amenity,
    Property,
    Unit,
    Legal,
}

impl MediaCategory {
    pub const ALL: [MediaCategory; 4] = [
        MediaCategory::Amenity,
        MediaCategory::Property,
        MediaCategory::Unit,
        MediaCategory::Legal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MediaCategory::Amenity => "amenity",
            MediaCategory::Property => "property",
            MediaCategory::Unit => "unit",
            MediaCategory::Legal => "legal",
        }
    }
}

impl std::str::FromStr for MediaCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown media category '{}'", s))
    }
}

/// File type of a library asset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Document,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Document => "document",
        }
    }
}

/// An asset in the media library
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    #[serde(flatten)]
    pub image: MediaImage,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub category: MediaCategory,
    /// Property the asset belongs to, if any
    #[serde(default)]
    pub property_id: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    pub size_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_item_type_field() {
        let json = r#"{
            "id": "m2",
            "url": "https://cdn.example.com/lobby.mp4",
            "title": "Lobby Virtual Tour",
            "type": "video",
            "category": "property",
            "uploadedAt": "2025-01-14T09:00:00Z",
            "sizeBytes": 45000000
        }"#;
        let item: MediaItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, MediaKind::Video);
        assert_eq!(item.kind.as_str(), "video");

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["type"], "video");
    }

    #[test]
    fn test_unknown_media_type_rejected() {
        let json = r#"{
            "id": "m3",
            "url": "https://cdn.example.com/x.bin",
            "type": "archive",
            "category": "legal",
            "uploadedAt": "2025-01-14T09:00:00Z",
            "sizeBytes": 10
        }"#;
        assert!(serde_json::from_str::<MediaItem>(json).is_err());
    }
}
