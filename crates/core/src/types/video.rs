//! Video catalog item type.

use serde::{Deserialize, Serialize};

use crate::VideoId;

/// An immutable catalog video.
///
/// The catalog is partitioned into free and premium subsets; `is_free`
/// carries that partition on the item itself so access checks don't need
/// to know which list an item came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub is_free: bool,
    /// Display duration label (e.g. "3:18"), when known.
    pub duration: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Video {
        Video {
            id: VideoId::new("1"),
            title: "Because I Got High".to_owned(),
            description: "Official Music Video".to_owned(),
            thumbnail_url: "https://example.com/thumb.jpg".to_owned(),
            video_url: "https://example.com/video".to_owned(),
            is_free: true,
            duration: Some("3:18".to_owned()),
        }
    }

    #[test]
    fn test_video_serde_round_trip() {
        let video = sample();
        let json = serde_json::to_string(&video).unwrap();
        let back: Video = serde_json::from_str(&json).unwrap();
        assert_eq!(back, video);
    }

    #[test]
    fn test_duration_optional() {
        let json = r#"{
            "id": "9",
            "title": "Untitled",
            "description": "",
            "thumbnail_url": "",
            "video_url": "",
            "is_free": false
        }"#;
        let video: Video = serde_json::from_str(json).unwrap();
        assert!(video.duration.is_none());
        assert!(!video.is_free);
    }
}
