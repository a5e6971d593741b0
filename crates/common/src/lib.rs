//! Common types for the Fontory client SDK.
//!
//! This crate provides the pieces shared by every other fontory crate:
//!
//! - **Configuration**: base endpoint and timeouts via [`Config`]
//! - **Error handling**: the unified failure taxonomy via [`ClientError`] and
//!   [`ClientResult`]
//!
//! # Example
//!
//! ```no_run
//! use fontory_common::{ClientResult, Config};
//!
//! fn example() -> ClientResult<()> {
//!     let config = Config::load()?;
//!     println!("API endpoint: {}", config.api.base_url);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;

pub use config::{ApiConfig, Config, SessionConfig};
pub use error::{ClientError, ClientResult};
