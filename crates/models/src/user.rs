//! User and session account types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::wire;

/// The logged-in user record.
///
/// Returned by the login endpoint and persisted locally as the session; every
/// identity-consuming operation reads it back from the session store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Account identifier chosen at signup.
    pub user_id: String,

    /// Display nickname.
    #[serde(default)]
    pub nickname: Option<String>,

    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,

    /// Profile image URL.
    #[serde(default, deserialize_with = "wire::opt_url")]
    pub profile_image: Option<String>,
}

/// Login request payload.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account identifier.
    pub user_id: String,
    /// Plain-text password (the backend hashes it).
    pub password: String,
}

/// Body of a successful login response.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    /// The authenticated user.
    pub user: User,
    /// Optional server message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Signup request payload.
///
/// Validated client-side before the network call so obviously broken input
/// never costs a round trip.
#[derive(Clone, Debug, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Desired account identifier.
    #[validate(length(min = 1, message = "userId must not be empty"))]
    pub user_id: String,

    /// Password.
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,

    /// Password confirmation; must match `password`.
    #[validate(must_match(other = "password", message = "passwords do not match"))]
    pub password_confirm: String,

    /// Real name.
    pub name: String,

    /// Phone number.
    pub phone: String,

    /// Contact email.
    #[validate(email)]
    pub email: String,

    /// Display nickname.
    #[validate(length(min = 1, message = "nickname must not be empty"))]
    pub nickname: String,

    /// Profile image URL from a prior upload, or empty when none was chosen.
    #[serde(default)]
    pub profile_image: String,
}

/// Response of the pre-signup profile-image upload.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileImageUploaded {
    /// URL of the stored image.
    pub profile_image_url: String,
}

/// Own profile as served by the mypage endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Display nickname.
    pub nickname: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Profile image URL.
    #[serde(default, deserialize_with = "wire::opt_url")]
    pub profile_image: Option<String>,
}

/// Profile update payload.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// New nickname, when changing it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// New email, when changing it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New profile image URL, when changing it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}
