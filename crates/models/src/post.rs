//! Board post types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire;

/// Kind of board post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostType {
    /// Free-form board entry.
    General,
    /// Transcription (필사) entry made from a practice sheet.
    Transcription,
}

impl PostType {
    /// Wire value used in query strings and form fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "GENERAL",
            Self::Transcription => "TRANSCRIPTION",
        }
    }
}

/// A user-submitted board entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post identifier.
    pub post_id: i64,

    /// Post body text.
    #[serde(default)]
    pub content: String,

    /// Attached image URL, when one was uploaded.
    #[serde(default, deserialize_with = "wire::opt_url")]
    pub image_url: Option<String>,

    /// Author nickname.
    #[serde(default)]
    pub nickname: Option<String>,

    /// Author profile image URL.
    #[serde(default, deserialize_with = "wire::opt_url")]
    pub profile_image: Option<String>,

    /// Post kind; defaults to general when the backend omits it.
    #[serde(default = "default_post_type")]
    pub post_type: PostType,

    /// Number of likes.
    #[serde(default)]
    pub like_count: i64,

    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

const fn default_post_type() -> PostType {
    PostType::General
}

/// Payload for creating a post; encoded as multipart form-data because an
/// image may ride along.
#[derive(Clone, Debug)]
pub struct NewPost {
    /// Post body text.
    pub content: String,
    /// Post kind.
    pub post_type: PostType,
    /// Optional attached image: filename, MIME type, raw bytes.
    pub image: Option<(String, String, Vec<u8>)>,
}
