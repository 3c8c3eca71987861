use serde::{Deserialize, Serialize};

use crate::error::{PostSourceError, PostSourceResult};

/// Идентификатор поста, назначенный источником.
pub type PostId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Пост в том виде, в каком его отдаёт источник.
pub struct Post {
    /// Идентификатор поста.
    pub id: PostId,
    /// Заголовок поста.
    pub title: String,
    /// Текст поста.
    pub body: String,
}

/// Разбирает тело ответа источника в коллекцию постов.
///
/// Порядок элементов сохраняется, лишние поля (например `userId`) игнорируются.
pub fn decode_posts(raw: &str) -> PostSourceResult<Vec<Post>> {
    serde_json::from_str::<Vec<Post>>(raw).map_err(|err| PostSourceError::Decode(err.to_string()))
}
