//! Client SDK for the Fontory handwriting-font service.
//!
//! The original mobile app reimplemented request/response handling inline on
//! every screen; this crate centralizes that into one client:
//!
//! - **HTTP**: [`ApiClient`] — base endpoint, JSON and multipart bodies,
//!   session cookies, one round trip per call
//! - **Normalization**: the backend's heterogeneous response envelopes fold
//!   into a single `Result` shape ([`envelope`])
//! - **Session**: the persisted logged-in user record ([`Session`])
//! - **Cancellation**: screen-lifetime request scopes ([`RequestScope`])
//! - **Endpoints**: typed wrappers per resource ([`api`])
//!
//! # Example
//!
//! ```no_run
//! use fontory_client::{api::FontsApi, ApiClient};
//! use fontory_common::Config;
//!
//! # async fn example() -> fontory_common::ClientResult<()> {
//! let config = Config::load()?;
//! let client = ApiClient::new(&config.api)?;
//!
//! let mut fonts = FontsApi::new(&client).list().await?;
//! if let Some(font) = fonts.first_mut() {
//!     FontsApi::new(&client).like(font.font_id).await?;
//!     font.toggle_like();
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod envelope;
pub mod http;
pub mod scope;
pub mod session;

pub use http::{ApiClient, FormPart, RequestSpec};
pub use scope::RequestScope;
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
