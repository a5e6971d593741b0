//! Daily quote endpoint.

use fontory_common::ClientResult;
use fontory_models::Quote;

use crate::http::{ApiClient, RequestSpec};

/// Quote of the day.
pub struct QuotesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> QuotesApi<'a> {
    /// Wrap the shared client.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /quotes/today`.
    pub async fn today(&self) -> ClientResult<Quote> {
        self.client.send(RequestSpec::get("/quotes/today")).await
    }
}
