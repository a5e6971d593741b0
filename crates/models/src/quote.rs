//! Daily quote type.

use serde::{Deserialize, Serialize};

/// The quote of the day, shown on the home feed and used as a transcription
/// phrase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Quote text.
    pub content: String,
    /// Attributed author, when known.
    #[serde(default)]
    pub author: Option<String>,
}
