//! Account and login endpoints.

use fontory_common::{ClientError, ClientResult};
use fontory_models::{LoginRequest, LoginResponse, ProfileImageUploaded, SignupRequest, User};
use tracing::info;
use validator::Validate;

use crate::http::{ApiClient, FormPart, RequestSpec};
use crate::session::Session;

/// Login, signup and logout.
pub struct UsersApi<'a> {
    client: &'a ApiClient,
    session: &'a Session,
}

impl<'a> UsersApi<'a> {
    /// Wrap the shared client and session.
    #[must_use]
    pub const fn new(client: &'a ApiClient, session: &'a Session) -> Self {
        Self { client, session }
    }

    /// `POST /users/login` — authenticate and persist the session record.
    ///
    /// The backend sets a session cookie on this call, so it always goes
    /// through the credentials client.
    pub async fn login(&self, user_id: &str, password: &str) -> ClientResult<User> {
        let payload = LoginRequest {
            user_id: user_id.to_string(),
            password: password.to_string(),
        };

        let spec = RequestSpec::post("/users/login")
            .json(&payload)?
            .credentials();
        let response: LoginResponse = self.client.send(spec).await?;

        self.session.store_user(&response.user).await?;
        info!(user_id = %response.user.user_id, "Logged in");
        Ok(response.user)
    }

    /// `POST /users/signup` — register an account.
    ///
    /// The payload is validated locally first; a broken payload never costs
    /// a round trip.
    pub async fn signup(&self, request: &SignupRequest) -> ClientResult<()> {
        request
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        let spec = RequestSpec::post("/users/signup").json(request)?;
        self.client.send_unit(spec).await
    }

    /// `POST /users/profile-image/signup` — upload a profile image before
    /// signup; returns the stored image URL.
    ///
    /// The backend answers either JSON `{profileImageUrl}` or the bare URL as
    /// plain text; both are accepted.
    pub async fn upload_profile_image(
        &self,
        filename: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<String> {
        let spec = RequestSpec::post("/users/profile-image/signup")
            .part(FormPart::file("image", filename, mime, bytes));

        let body = self.client.send_raw(spec).await?;
        match serde_json::from_str::<ProfileImageUploaded>(&body) {
            Ok(uploaded) => Ok(uploaded.profile_image_url),
            Err(_) => {
                let url = body.trim();
                if url.is_empty() {
                    Err(ClientError::Decode(
                        "profile-image upload returned no URL".to_string(),
                    ))
                } else {
                    Ok(url.to_string())
                }
            }
        }
    }

    /// Read the persisted session user; `None` when nobody is logged in.
    pub async fn current_user(&self) -> ClientResult<Option<User>> {
        self.session.current_user().await
    }

    /// Clear the persisted session.
    pub async fn logout(&self) -> ClientResult<()> {
        self.session.logout().await
    }
}
