use async_trait::async_trait;
use gloo_net::http::Request;
use posts_core::{Post, PostSource, PostSourceError, PostSourceResult, decode_posts};

/// Источник постов поверх `fetch` браузера.
#[derive(Debug, Clone)]
pub(crate) struct GlooPostSource {
    url: String,
}

impl GlooPostSource {
    pub(crate) fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl PostSource for GlooPostSource {
    async fn fetch_posts(&self) -> PostSourceResult<Vec<Post>> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|err| PostSourceError::Network(err.to_string()))?;

        if !response.ok() {
            return Err(PostSourceError::Status {
                status: response.status(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| PostSourceError::Network(err.to_string()))?;
        decode_posts(&body)
    }
}
