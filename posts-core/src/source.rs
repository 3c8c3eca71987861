use async_trait::async_trait;

use crate::error::PostSourceResult;
use crate::models::Post;

/// Внешний источник коллекции постов.
///
/// `?Send`, потому что браузерные фьючи (gloo-net) не `Send`.
#[async_trait(?Send)]
pub trait PostSource {
    /// Загружает всю коллекцию постов одним запросом.
    async fn fetch_posts(&self) -> PostSourceResult<Vec<Post>>;
}
