//! Practice-sheet and background-catalog endpoints.

use fontory_common::ClientResult;
use fontory_models::{Background, NewPracticeSheet, PracticeSheet};
use url::Url;

use crate::http::{ApiClient, RequestSpec};

/// Backgrounds and practice-sheet generation.
pub struct PracticeApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PracticeApi<'a> {
    /// Wrap the shared client.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /backgrounds` — the read-only background catalog.
    pub async fn backgrounds(&self) -> ClientResult<Vec<Background>> {
        self.client.send(RequestSpec::get("/backgrounds")).await
    }

    /// `POST /practice-sheets` — compose a font, a background and a phrase
    /// into a practice sheet.
    pub async fn create_sheet(&self, request: &NewPracticeSheet) -> ClientResult<PracticeSheet> {
        let spec = RequestSpec::post("/practice-sheets").json(request)?;
        self.client.send(spec).await
    }

    /// Absolute URL of a sheet's rendered image (the backend serves a
    /// base-relative path).
    pub fn sheet_image_url(&self, sheet: &PracticeSheet) -> ClientResult<Url> {
        self.client.resolve(&sheet.image_url)
    }
}
