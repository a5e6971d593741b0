//! Font entity and font-creation types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire;

/// A synthesized typeface derived from a handwriting sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Font {
    /// Unique font identifier.
    pub font_id: i64,

    /// Display name. The backend serves this as `name` on the list endpoint
    /// and `fontName` elsewhere.
    #[serde(alias = "name")]
    pub font_name: String,

    /// Account id of the creator. Served as `userId` on list/detail payloads.
    #[serde(default, alias = "userId")]
    pub creator_id: Option<String>,

    /// Creator's profile image URL.
    #[serde(default, deserialize_with = "wire::opt_url")]
    pub creator_profile_image: Option<String>,

    /// Creator-supplied description shown on the detail page.
    #[serde(default)]
    pub description: Option<String>,

    /// Number of likes.
    #[serde(default)]
    pub like_count: i64,

    /// Number of downloads.
    #[serde(default)]
    pub download_count: i64,

    /// Whether the current user has liked this font.
    #[serde(default)]
    pub liked: bool,

    /// TTF download URL.
    #[serde(default, deserialize_with = "wire::opt_url")]
    pub ttf_url: Option<String>,

    /// OTF download URL.
    #[serde(default, deserialize_with = "wire::opt_url")]
    pub otf_url: Option<String>,

    /// Original handwriting sample, relative to `/handwriting/` on the server.
    #[serde(default, deserialize_with = "wire::opt_url")]
    pub original_image_url: Option<String>,

    /// Whether the font has been published to the shared catalog.
    #[serde(default)]
    pub is_public: bool,

    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Font {
    /// Flip the like state locally, keeping `like_count` consistent.
    ///
    /// A like/unlike pair returns the count to its original value, matching
    /// the server's at-most-one-like-per-user rule. The server-supplied
    /// `liked` field is the source of truth at load time; this is the only
    /// local mutation.
    pub fn toggle_like(&mut self) {
        if self.liked {
            self.liked = false;
            self.like_count = self.like_count.saturating_sub(1);
        } else {
            self.liked = true;
            self.like_count += 1;
        }
    }
}

/// Response of the font-creation upload.
///
/// Returned after the server vectorizes the handwriting sample and builds
/// the font files.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontCreated {
    /// Identifier of the new font.
    pub font_id: i64,
    /// Name the font was created under.
    pub font_name: String,
    /// TTF download URL.
    #[serde(default, deserialize_with = "wire::opt_url")]
    pub ttf_url: Option<String>,
    /// OTF download URL.
    #[serde(default, deserialize_with = "wire::opt_url")]
    pub otf_url: Option<String>,
    /// Similarity score between the sample and the generated vectors.
    #[serde(default)]
    pub vector_similarity: Option<f64>,
    /// Server path of the per-character cell images.
    #[serde(default)]
    pub cell_images_path: Option<String>,
}

/// Publish payload for a generated font.
#[derive(Clone, Debug, Serialize)]
pub struct PublishFont {
    /// Catalog description.
    pub description: String,
}
