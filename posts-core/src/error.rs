use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Ошибки загрузки коллекции постов из источника.
pub enum PostSourceError {
    /// Запрос не дошёл до сервера или ответ не удалось прочитать.
    #[error("network error: {0}")]
    Network(String),

    /// Сервер ответил неуспешным HTTP-статусом.
    #[error("http error {status}")]
    Status {
        /// HTTP-статус ответа.
        status: u16,
    },

    /// Тело ответа не является JSON-массивом постов.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Результат операций источника постов.
pub type PostSourceResult<T> = Result<T, PostSourceError>;

impl PostSourceError {
    pub(crate) fn from_status(status: u16) -> Self {
        Self::Status { status }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for PostSourceError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_status(status.as_u16());
        }
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        Self::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::PostSourceError;

    #[test]
    fn display_includes_status_code() {
        let err = PostSourceError::from_status(503);
        assert_eq!(err.to_string(), "http error 503");
    }

    #[test]
    fn display_prefixes_decode_errors() {
        let err = PostSourceError::Decode("expected array".to_string());
        assert_eq!(err.to_string(), "decode error: expected array");
    }
}
