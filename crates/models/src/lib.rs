//! Client-side contracts for the Fontory API.
//!
//! These types mirror what the backend actually serves, quirks included:
//! camelCase field names, a couple of endpoints that rename fields
//! (`name` vs `fontName`), and the literal `"string"` placeholder that stands
//! in for unset URLs. Normalization happens here, at deserialization time, so
//! consumers never inspect raw payload shapes.

pub mod font;
pub mod post;
pub mod practice;
pub mod quote;
pub mod user;
pub mod wire;

pub use font::{Font, FontCreated, PublishFont};
pub use post::{NewPost, Post, PostType};
pub use practice::{Background, NewPracticeSheet, PracticeSheet};
pub use quote::Quote;
pub use user::{
    LoginRequest, LoginResponse, Profile, ProfileImageUploaded, ProfileUpdate, SignupRequest, User,
};
