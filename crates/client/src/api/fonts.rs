//! Font catalog and font-creation endpoints.

use fontory_common::ClientResult;
use fontory_models::{Font, FontCreated, PublishFont};
use url::Url;

use crate::http::{ApiClient, FormPart, RequestSpec};

/// Font browsing, creation, publishing and likes.
pub struct FontsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> FontsApi<'a> {
    /// Wrap the shared client.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /fonts` — the public font catalog.
    pub async fn list(&self) -> ClientResult<Vec<Font>> {
        self.client.send(RequestSpec::get("/fonts")).await
    }

    /// `GET /fonts/api/{fontId}` — one font's detail.
    pub async fn detail(&self, font_id: i64) -> ClientResult<Font> {
        self.client
            .send(RequestSpec::get(format!("/fonts/api/{font_id}")))
            .await
    }

    /// `POST /fonts/create` — upload a handwriting sample and synthesize a
    /// font from it. Multipart: `fontName` + `image`.
    pub async fn create(
        &self,
        font_name: &str,
        filename: &str,
        mime: &str,
        image: Vec<u8>,
    ) -> ClientResult<FontCreated> {
        let spec = RequestSpec::post("/fonts/create")
            .part(FormPart::text("fontName", font_name))
            .part(FormPart::file("image", filename, mime, image));
        self.client.send(spec).await
    }

    /// `PUT /fonts/{fontId}/publish` — publish a generated font to the
    /// shared catalog with a description.
    pub async fn publish(&self, font_id: i64, description: &str) -> ClientResult<()> {
        let payload = PublishFont {
            description: description.to_string(),
        };
        let spec = RequestSpec::put(format!("/fonts/{font_id}/publish"))
            .json(&payload)?
            .credentials();
        self.client.send_unit(spec).await
    }

    /// `POST /fonts/{fontId}/like` — like a font.
    pub async fn like(&self, font_id: i64) -> ClientResult<()> {
        let spec = RequestSpec::post(format!("/fonts/{font_id}/like")).credentials();
        self.client.send_unit(spec).await
    }

    /// `DELETE /fonts/{fontId}/like` — withdraw a like.
    pub async fn unlike(&self, font_id: i64) -> ClientResult<()> {
        let spec = RequestSpec::delete(format!("/fonts/{font_id}/like")).credentials();
        self.client.send_unit(spec).await
    }

    /// URL of the server-rendered preview of `text` in this font.
    ///
    /// The client only builds the (percent-encoded) URL; fetching the image
    /// is left to the view layer.
    pub fn render_url(&self, font_id: i64, text: &str) -> ClientResult<Url> {
        let mut url = self.client.resolve(&format!("/fonts/{font_id}/render"))?;
        url.query_pairs_mut().append_pair("text", text);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_url_is_percent_encoded() {
        let client = ApiClient::from_base_url("http://ceprj.gachon.ac.kr:60023").unwrap();
        let fonts = FontsApi::new(&client);

        let url = fonts.render_url(3, "안녕 hello").unwrap();
        assert!(url.as_str().starts_with("http://ceprj.gachon.ac.kr:60023/fonts/3/render?text="));
        assert!(!url.as_str().contains(' '), "query must be percent-encoded");
        assert_eq!(
            url.query_pairs().next().map(|(_, v)| v.into_owned()),
            Some("안녕 hello".to_string())
        );
    }
}
