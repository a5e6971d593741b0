//! Board post endpoints.

use fontory_common::ClientResult;
use fontory_models::{NewPost, Post, PostType};

use crate::http::{ApiClient, FormPart, RequestSpec};

/// Board listing, creation and likes.
pub struct PostsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PostsApi<'a> {
    /// Wrap the shared client.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/posts` — list posts, optionally filtered by type.
    pub async fn list(&self, post_type: Option<PostType>) -> ClientResult<Vec<Post>> {
        let mut spec = RequestSpec::get("/api/posts");
        if let Some(post_type) = post_type {
            spec = spec.query("type", post_type.as_str());
        }
        self.client.send(spec).await
    }

    /// `POST /api/posts` — create a post; multipart because an image may be
    /// attached.
    pub async fn create(&self, new_post: NewPost) -> ClientResult<()> {
        let mut spec = RequestSpec::post("/api/posts")
            .part(FormPart::text("content", new_post.content))
            .part(FormPart::text("postType", new_post.post_type.as_str()))
            .credentials();

        if let Some((filename, mime, bytes)) = new_post.image {
            spec = spec.part(FormPart::file("image", filename, mime, bytes));
        }

        self.client.send_unit(spec).await
    }

    /// `POST /api/posts/{postId}/like` — like a post.
    pub async fn like(&self, post_id: i64) -> ClientResult<()> {
        let spec = RequestSpec::post(format!("/api/posts/{post_id}/like")).credentials();
        self.client.send_unit(spec).await
    }
}
