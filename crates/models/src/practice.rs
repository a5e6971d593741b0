//! Practice sheet ("연습장") and background catalog types.

use serde::{Deserialize, Serialize};
use url::Url;

/// A catalog background for practice sheets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    /// Unique background identifier.
    pub background_id: i64,
    /// Image URL, relative to the API base endpoint.
    pub image_url: String,
}

impl Background {
    /// Resolve the relative image URL against the API base endpoint.
    pub fn resolve_image_url(&self, base: &Url) -> Result<Url, url::ParseError> {
        base.join(&self.image_url)
    }
}

/// Request payload for generating a practice sheet.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPracticeSheet {
    /// Owner of the sheet.
    pub user_id: String,
    /// Font to render the phrase with.
    pub font_id: i64,
    /// Background to compose onto.
    pub background_id: i64,
    /// Phrase to practice.
    pub phrase: String,
}

/// A generated practice sheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSheet {
    /// Unique sheet identifier.
    #[serde(default)]
    pub sheet_id: Option<i64>,
    /// Font used.
    #[serde(default)]
    pub font_id: Option<i64>,
    /// Background used.
    #[serde(default)]
    pub background_id: Option<i64>,
    /// The practiced phrase.
    #[serde(default)]
    pub phrase: Option<String>,
    /// Rendered sheet image, relative to the API base endpoint.
    pub image_url: String,
}

impl PracticeSheet {
    /// Resolve the relative sheet image URL against the API base endpoint.
    pub fn resolve_image_url(&self, base: &Url) -> Result<Url, url::ParseError> {
        base.join(&self.image_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_url_resolution() {
        let base = Url::parse("http://ceprj.gachon.ac.kr:60023").unwrap();
        let background = Background {
            background_id: 2,
            image_url: "/backgrounds/2.png".to_string(),
        };
        let resolved = background.resolve_image_url(&base).unwrap();
        assert_eq!(
            resolved.as_str(),
            "http://ceprj.gachon.ac.kr:60023/backgrounds/2.png"
        );
    }

    #[test]
    fn test_sheet_decodes_minimal_response() {
        // The creation endpoint only guarantees imageUrl.
        let sheet: PracticeSheet =
            serde_json::from_value(serde_json::json!({"imageUrl": "/sheets/10.png"})).unwrap();
        assert!(sheet.sheet_id.is_none());
        assert_eq!(sheet.image_url, "/sheets/10.png");
    }
}
