//! Typed endpoint wrappers, one module per backend resource.
//!
//! Every function here is a thin `RequestSpec` over [`ApiClient::send`];
//! none of them retry, cache, or touch state outside the session store.
//!
//! [`ApiClient::send`]: crate::ApiClient::send

pub mod fonts;
pub mod mypage;
pub mod posts;
pub mod practice;
pub mod quotes;
pub mod users;

pub use fonts::FontsApi;
pub use mypage::MypageApi;
pub use posts::PostsApi;
pub use practice::PracticeApi;
pub use quotes::QuotesApi;
pub use users::UsersApi;
