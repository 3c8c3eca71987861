use anyhow::{Result, anyhow};

/// Источник постов по умолчанию.
pub const DEFAULT_SOURCE_URL: &str = "https://jsonplaceholder.typicode.com/posts";
/// Уровень логирования по умолчанию.
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Настройки просмотрщика, фиксируемые на этапе сборки.
pub struct Settings {
    /// URL, с которого загружается коллекция постов.
    pub source_url: String,
    /// Фильтр уровня логирования (синтаксис `EnvFilter`).
    pub log_level: String,
}

impl Settings {
    /// Читает `POSTS_SOURCE_URL` и `POSTS_LOG_LEVEL`, заданные при сборке.
    ///
    /// В браузере нет переменных окружения, поэтому значения вшиваются
    /// через `option_env!`.
    pub fn from_build_env() -> Result<Self> {
        Self::from_values(
            option_env!("POSTS_SOURCE_URL"),
            option_env!("POSTS_LOG_LEVEL"),
        )
    }

    fn from_values(source_url: Option<&str>, log_level: Option<&str>) -> Result<Self> {
        let source_url = source_url
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_SOURCE_URL);
        if !(source_url.starts_with("http://") || source_url.starts_with("https://")) {
            return Err(anyhow!(
                "POSTS_SOURCE_URL must be an http(s) URL, got {source_url:?}"
            ));
        }

        let log_level = log_level
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Ok(Self {
            source_url: source_url.to_string(),
            log_level: log_level.to_string(),
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
