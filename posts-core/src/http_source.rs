use async_trait::async_trait;
use reqwest::{Client, Method};
use tracing::debug;

use crate::error::{PostSourceError, PostSourceResult};
use crate::models::{Post, decode_posts};
use crate::source::PostSource;

#[derive(Debug, Clone)]
/// HTTP-источник постов поверх `reqwest` для нативных сборок.
pub struct HttpPostSource {
    url: String,
    client: Client,
}

impl HttpPostSource {
    /// Создаёт источник, который читает коллекцию по фиксированному URL.
    ///
    /// URL используется как есть, так же как в браузерной сборке.
    pub fn new(url: impl Into<String>) -> PostSourceResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|err| PostSourceError::Network(err.to_string()))?;

        Ok(Self::with_client(url, client))
    }

    /// Создаёт источник с заранее настроенным `reqwest::Client`.
    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    /// URL, по которому выполняется запрос.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl PostSource for HttpPostSource {
    async fn fetch_posts(&self) -> PostSourceResult<Vec<Post>> {
        debug!(url = %self.url, "fetching posts");

        let response = self
            .client
            .request(Method::GET, &self.url)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(PostSourceError::from_status(response.status().as_u16()));
        }

        let body = response.text().await?;
        decode_posts(&body)
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;
    use crate::browser::{LoadStatus, PostBrowser};

    /// Отвечает один раз заданным статусом и телом, возвращает URL сервера.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener addr");

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept connection");
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket
                .write_all(response.as_bytes())
                .await
                .expect("write response");
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/posts")
    }

    fn local_source(url: String) -> HttpPostSource {
        let client = Client::builder()
            .no_proxy()
            .build()
            .expect("client must build");
        HttpPostSource::with_client(url, client)
    }

    #[test]
    fn new_keeps_url_verbatim() {
        let source = HttpPostSource::new("https://example.com/posts/").expect("client must build");
        assert_eq!(source.url(), "https://example.com/posts/");
    }

    #[tokio::test]
    async fn fetch_posts_decodes_array_in_source_order() {
        let url = serve_once(
            "200 OK",
            r#"[{"id": 2, "title": "b", "body": "y"}, {"id": 1, "title": "a", "body": "x"}]"#,
        )
        .await;

        let posts = local_source(url).fetch_posts().await.expect("fetch must succeed");
        let ids: Vec<i64> = posts.iter().map(|post| post.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn fetch_posts_maps_server_error_to_status() {
        let url = serve_once("500 Internal Server Error", "").await;

        let result = local_source(url).fetch_posts().await;
        assert_eq!(result, Err(PostSourceError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn fetch_posts_maps_object_body_to_decode_error() {
        let url = serve_once("200 OK", r#"{"x":1}"#).await;

        let result = local_source(url).fetch_posts().await;
        assert!(matches!(result, Err(PostSourceError::Decode(_))));
    }

    #[tokio::test]
    async fn fetch_posts_maps_refused_connection_to_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener addr");
        drop(listener);

        let result = local_source(format!("http://{addr}/posts")).fetch_posts().await;
        assert!(matches!(result, Err(PostSourceError::Network(_))));
    }

    #[tokio::test]
    async fn initialize_records_failure_from_http_source() {
        let url = serve_once("503 Service Unavailable", "").await;
        let source = local_source(url);

        let mut browser = PostBrowser::new();
        browser.initialize(&source).await;

        assert!(browser.posts().is_empty());
        assert_eq!(browser.page_label(), "Page 1 of 0");
        assert_eq!(
            browser.status(),
            &LoadStatus::Failed("http error 503".to_string())
        );
    }
}
