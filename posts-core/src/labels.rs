use crate::browser::LoadStatus;

/// Подпись счётчика страниц: `Page X of Y`.
pub fn page_label(current_page: usize, total_pages: usize) -> String {
    format!("Page {current_page} of {total_pages}")
}

/// Подпись общего счётчика лайков.
pub fn likes_label(total_likes: usize) -> String {
    format!("Total likes: {total_likes}")
}

/// Подпись кнопки лайка для текущего состояния поста.
pub fn like_label(liked: bool) -> &'static str {
    if liked { "Unlike" } else { "Like" }
}

/// Строка статуса загрузки; для `Idle` и `Loaded` ничего не показывается.
pub fn status_message(status: &LoadStatus) -> Option<String> {
    match status {
        LoadStatus::Idle | LoadStatus::Loaded => None,
        LoadStatus::Loading => Some("Loading posts...".to_string()),
        LoadStatus::Failed(message) => Some(format!("Failed to load posts: {message}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_is_shown_only_while_loading_or_failed() {
        assert_eq!(status_message(&LoadStatus::Idle), None);
        assert_eq!(status_message(&LoadStatus::Loaded), None);
        assert_eq!(
            status_message(&LoadStatus::Loading).as_deref(),
            Some("Loading posts...")
        );
        assert_eq!(
            status_message(&LoadStatus::Failed("http error 404".to_string())).as_deref(),
            Some("Failed to load posts: http error 404")
        );
    }

    #[test]
    fn page_label_renders_empty_collection() {
        assert_eq!(page_label(1, 0), "Page 1 of 0");
    }

    #[test]
    fn like_label_has_two_distinct_states() {
        assert_eq!(like_label(false), "Like");
        assert_eq!(like_label(true), "Unlike");
    }

    #[test]
    fn likes_label_shows_count() {
        assert_eq!(likes_label(3), "Total likes: 3");
    }
}
