//! Own-profile and own-content endpoints.
//!
//! These are the endpoints that answer with the `{status, data, message}`
//! envelope; the unwrap happens in the shared decode path, so nothing here
//! looks at raw `status` fields.

use fontory_common::ClientResult;
use fontory_models::{Font, Profile, ProfileUpdate};

use crate::http::{ApiClient, RequestSpec};

/// My page: profile and my fonts.
pub struct MypageApi<'a> {
    client: &'a ApiClient,
}

impl<'a> MypageApi<'a> {
    /// Wrap the shared client.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/mypage/profile` — own profile.
    pub async fn profile(&self) -> ClientResult<Profile> {
        let spec = RequestSpec::get("/api/mypage/profile").credentials();
        self.client.send(spec).await
    }

    /// `PUT /api/mypage/profile` — update own profile.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<()> {
        let spec = RequestSpec::put("/api/mypage/profile")
            .json(update)?
            .credentials();
        self.client.send_unit(spec).await
    }

    /// `GET /api/mypage/fonts/my` — fonts the logged-in user generated,
    /// published or not.
    pub async fn my_fonts(&self) -> ClientResult<Vec<Font>> {
        let spec = RequestSpec::get("/api/mypage/fonts/my").credentials();
        self.client.send(spec).await
    }
}
