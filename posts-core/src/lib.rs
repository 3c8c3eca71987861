//! Ядро просмотрщика постов: модель, источник данных и состояние страницы.
//!
//! Коллекция постов загружается один раз через [`PostSource`], дальше вся
//! работа (пагинация, лайки) идёт над состоянием [`PostBrowser`] в памяти:
//! - [`PostBrowser::page_window`] отдаёт окно текущей страницы;
//! - [`PostBrowser::toggle_like`] переключает лайк поста.
#![warn(missing_docs)]

mod browser;
mod error;
#[cfg(not(target_arch = "wasm32"))]
mod http_source;
mod labels;
mod models;
mod settings;
mod source;

pub use browser::{LoadStatus, PAGE_SIZE, PostBrowser, page_window};
pub use error::{PostSourceError, PostSourceResult};
#[cfg(not(target_arch = "wasm32"))]
pub use http_source::HttpPostSource;
pub use labels::{like_label, likes_label, page_label, status_message};
pub use models::{Post, PostId, decode_posts};
pub use settings::{DEFAULT_LOG_LEVEL, DEFAULT_SOURCE_URL, Settings};
pub use source::PostSource;
