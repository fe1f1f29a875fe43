//! # Domain Types
//!
//! Entities owned by the repository and serialized by the API.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      User       │   │      Media      │   │   TopDownload   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (serial)    │   │  id (serial)    │   │  id (serial)    │       │
//! │  │  username       │   │  title, artist  │   │  media_id (FK) ─┼──►    │
//! │  │  password       │   │  type, category │   │  rank           │ Media │
//! │  └─────────────────┘   │  downloads      │   │  downloads      │       │
//! │                        │  featured       │   │  (snapshot)     │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Insert Shapes
//! Every entity has a `New*` counterpart without the `id` field. Ids are
//! generated by the repository and never supplied by callers.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// User
// =============================================================================

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Stored exactly as given.
    pub password: String,
}

/// Registration payload for a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl NewUser {
    /// Attaches a generated id.
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
        }
    }
}

// =============================================================================
// Media
// =============================================================================

/// A downloadable music track or video.
///
/// ## JSON Shape
/// ```json
/// {
///   "id": 1, "title": "Trending Hits 2024", "artist": "Various Artists",
///   "type": "music", "category": "Pop", "duration": "3:45",
///   "downloads": 1200000, "featured": true,
///   "imageUrl": "https://...", "fileUrl": "/downloads/trending-hits-2024.mp3"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Media {
    pub id: i32,
    pub title: String,
    pub artist: String,

    /// "music" or "video" by convention; not enforced.
    #[serde(rename = "type")]
    pub media_type: String,

    pub category: String,

    /// Free text, e.g. "3:45".
    pub duration: String,

    /// Live download counter. Only ever increases.
    #[ts(type = "number")]
    pub downloads: u64,

    pub featured: bool,
    pub image_url: String,
    pub file_url: String,
}

impl Media {
    /// Case-insensitive substring match on title, artist and category.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.artist.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}

/// Insert shape for [`Media`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewMedia {
    pub title: String,
    pub artist: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub category: String,
    pub duration: String,
    #[serde(default)]
    #[ts(type = "number")]
    pub downloads: u64,
    #[serde(default)]
    pub featured: bool,
    pub image_url: String,
    pub file_url: String,
}

impl NewMedia {
    /// Attaches a generated id.
    pub fn into_media(self, id: i32) -> Media {
        Media {
            id,
            title: self.title,
            artist: self.artist,
            media_type: self.media_type,
            category: self.category,
            duration: self.duration,
            downloads: self.downloads,
            featured: self.featured,
            image_url: self.image_url,
            file_url: self.file_url,
        }
    }
}

// =============================================================================
// Top Download
// =============================================================================

/// A ranking entry pointing at a media record.
///
/// `downloads` is a snapshot taken when the entry was created. It does not
/// follow the live [`Media::downloads`] counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TopDownload {
    pub id: i32,
    pub media_id: i32,
    pub rank: i32,
    #[ts(type = "number")]
    pub downloads: u64,
}

/// Insert shape for [`TopDownload`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewTopDownload {
    pub media_id: i32,
    pub rank: i32,
    #[ts(type = "number")]
    pub downloads: u64,
}

impl NewTopDownload {
    /// Attaches a generated id.
    pub fn into_top_download(self, id: i32) -> TopDownload {
        TopDownload {
            id,
            media_id: self.media_id,
            rank: self.rank,
            downloads: self.downloads,
        }
    }
}

/// A ranking entry joined with the media it points at.
///
/// Serializes flat: `{id, mediaId, rank, downloads, media: {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TopDownloadWithMedia {
    #[serde(flatten)]
    pub entry: TopDownload,
    pub media: Media,
}

// =============================================================================
// Conversion
// =============================================================================

/// Body of a format conversion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ConvertRequest {
    pub from_format: String,
    pub to_format: String,
    #[serde(default)]
    pub file_url: Option<String>,
}

impl ConvertRequest {
    /// Path the converted file would be served from.
    ///
    /// `to_format` is echoed verbatim, unescaped. Nothing is served from this
    /// path; it must not be joined onto a filesystem path as-is.
    pub fn converted_url(&self) -> String {
        format!("/downloads/converted-file.{}", self.to_format)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_media() -> Media {
        NewMedia {
            title: "Electronic Beats".to_string(),
            artist: "DJ Master".to_string(),
            media_type: "music".to_string(),
            category: "Electronic".to_string(),
            duration: "4:20".to_string(),
            downloads: 890_000,
            featured: true,
            image_url: "https://example.com/beats.jpg".to_string(),
            file_url: "/downloads/electronic-beats.mp3".to_string(),
        }
        .into_media(2)
    }

    #[test]
    fn test_media_json_shape() {
        let value = serde_json::to_value(sample_media()).unwrap();
        assert_eq!(value["id"], 2);
        assert_eq!(value["type"], "music");
        assert_eq!(value["imageUrl"], "https://example.com/beats.jpg");
        assert_eq!(value["fileUrl"], "/downloads/electronic-beats.mp3");
        assert_eq!(value["downloads"], 890_000);
        assert!(value.get("mediaType").is_none());
    }

    #[test]
    fn test_matches_lowercase() {
        let media = sample_media();
        assert!(media.matches_lowercase("electronic"));
        assert!(media.matches_lowercase("dj"));
        assert!(media.matches_lowercase("beats"));
        assert!(!media.matches_lowercase("concert"));
    }

    #[test]
    fn test_top_download_flattens() {
        let joined = TopDownloadWithMedia {
            entry: NewTopDownload {
                media_id: 2,
                rank: 1,
                downloads: 890_000,
            }
            .into_top_download(7),
            media: sample_media(),
        };

        let value = serde_json::to_value(&joined).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["mediaId"], 2);
        assert_eq!(value["rank"], 1);
        assert_eq!(value["media"]["title"], "Electronic Beats");
        assert!(value.get("entry").is_none());
    }

    #[test]
    fn test_new_media_defaults() {
        let new: NewMedia = serde_json::from_value(json!({
            "title": "Clip",
            "artist": "Someone",
            "type": "video",
            "category": "Short",
            "duration": "0:30",
            "imageUrl": "/img.png",
            "fileUrl": "/clip.mp4"
        }))
        .unwrap();

        assert_eq!(new.downloads, 0);
        assert!(!new.featured);
    }

    #[test]
    fn test_converted_url() {
        let req = ConvertRequest {
            from_format: "mp4".to_string(),
            to_format: "mp3".to_string(),
            file_url: None,
        };
        assert_eq!(req.converted_url(), "/downloads/converted-file.mp3");

        let req = ConvertRequest {
            to_format: "mp3/../x y".to_string(),
            ..req
        };
        assert_eq!(req.converted_url(), "/downloads/converted-file.mp3/../x y");
    }
}
