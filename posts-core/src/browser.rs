use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::error::PostSourceResult;
use crate::labels;
use crate::models::{Post, PostId};
use crate::source::PostSource;

/// Количество постов на одной странице.
pub const PAGE_SIZE: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Состояние однократной загрузки коллекции.
pub enum LoadStatus {
    /// Загрузка ещё не начиналась.
    #[default]
    Idle,
    /// Запрос к источнику в процессе.
    Loading,
    /// Коллекция получена.
    Loaded,
    /// Запрос завершился ошибкой, коллекция осталась прежней.
    Failed(String),
}

/// Окно страницы `page` (нумерация с 1) размером `page_size`.
///
/// Срез полуоткрытый и обрезается по длине коллекции: за концом получается
/// более короткое или пустое окно, а не ошибка.
pub fn page_window(posts: &[Post], page: usize, page_size: usize) -> &[Post] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(posts.len());
    let end = page.saturating_mul(page_size).min(posts.len());
    &posts[start..end]
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Состояние просмотрщика: коллекция, лайки и текущая страница.
pub struct PostBrowser {
    posts: Vec<Post>,
    liked: HashSet<PostId>,
    current_page: usize,
    status: LoadStatus,
}

impl Default for PostBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl PostBrowser {
    /// Пустое состояние: нет постов, нет лайков, первая страница.
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            liked: HashSet::new(),
            current_page: 1,
            status: LoadStatus::Idle,
        }
    }

    /// Вся загруженная коллекция в порядке источника.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Текущее состояние загрузки.
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Отмечает начало запроса к источнику.
    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Заменяет коллекцию целиком. Лайки и текущая страница не меняются.
    ///
    /// Страница не подрезается: после замены на более короткую коллекцию
    /// возможно `current_page > max(1, total_pages)` (например `Page 3 of 0`),
    /// окно тогда пустое и доступен только переход назад.
    pub fn replace_posts(&mut self, posts: Vec<Post>) {
        info!(count = posts.len(), "posts loaded");
        self.posts = posts;
        self.status = LoadStatus::Loaded;
    }

    /// Применяет результат запроса к источнику.
    ///
    /// При ошибке коллекция остаётся прежней (изначально пустой), а ошибка
    /// сохраняется в [`LoadStatus::Failed`]. Повторов нет.
    pub fn apply_fetch(&mut self, result: PostSourceResult<Vec<Post>>) {
        match result {
            Ok(posts) => self.replace_posts(posts),
            Err(err) => {
                warn!(error = %err, "failed to load posts");
                self.status = LoadStatus::Failed(err.to_string());
            }
        }
    }

    /// Загружает коллекцию из источника одним запросом.
    pub async fn initialize<S>(&mut self, source: &S)
    where
        S: PostSource + ?Sized,
    {
        self.begin_load();
        let result = source.fetch_posts().await;
        self.apply_fetch(result);
    }

    /// Переключает лайк поста и возвращает новое состояние.
    ///
    /// Наличие `id` в коллекции не проверяется.
    pub fn toggle_like(&mut self, id: PostId) -> bool {
        let liked = if self.liked.remove(&id) {
            false
        } else {
            self.liked.insert(id);
            true
        };
        debug!(post_id = id, liked, total = self.liked.len(), "like toggled");
        liked
    }

    /// Отмечен ли пост лайком.
    pub fn is_liked(&self, id: PostId) -> bool {
        self.liked.contains(&id)
    }

    /// Общее количество лайков.
    pub fn total_likes(&self) -> usize {
        self.liked.len()
    }

    /// Текущая страница (с 1).
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Количество страниц; неполная последняя страница тоже считается.
    pub fn total_pages(&self) -> usize {
        self.posts.len().div_ceil(PAGE_SIZE)
    }

    /// Доступен ли переход вперёд.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Доступен ли переход назад.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Переходит на следующую страницу; на последней ничего не делает.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_page += 1;
        debug!(page = self.current_page, "next page");
        true
    }

    /// Переходит на предыдущую страницу; на первой ничего не делает.
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current_page -= 1;
        debug!(page = self.current_page, "previous page");
        true
    }

    /// Посты текущей страницы.
    pub fn page_window(&self) -> &[Post] {
        page_window(&self.posts, self.current_page, PAGE_SIZE)
    }

    /// `Page X of Y` для текущего состояния.
    pub fn page_label(&self) -> String {
        labels::page_label(self.current_page, self.total_pages())
    }

    /// `Total likes: N` для текущего состояния.
    pub fn likes_label(&self) -> String {
        labels::likes_label(self.total_likes())
    }
}
