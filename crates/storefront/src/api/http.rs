//! `reqwest` implementation of [`CatalogApi`].

use super::{error_message, ApiError, CatalogApi};
use crate::model::{FilterState, Product, ResultSet};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

/// Catalog client for a backend at `base` (scheme, host and optional prefix).
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base: Url,
}

impl HttpCatalog {
    pub fn new(base: Url) -> Self {
        Self::with_client(reqwest::Client::new(), base)
    }

    pub fn with_client(client: reqwest::Client, base: Url) -> Self {
        Self { client, base }
    }

    /// `{base}/api/products/{segments..}`, each segment percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(["api", "products"])
                .extend(segments);
        }
        url
    }

    pub fn search_url(&self, filters: &FilterState) -> Url {
        let mut url = self.endpoint(&["search"]);
        url.query_pairs_mut().extend_pairs(search_params(filters));
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(status.as_u16(), &body);
            warn!(status = status.as_u16(), %message, "Request rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Query parameters of the search endpoint, in the order the backend
/// documents them.
pub fn search_params(filters: &FilterState) -> [(&'static str, String); 6] {
    [
        ("page", filters.page.to_string()),
        ("query", filters.query.clone()),
        ("category", filters.category.clone()),
        ("price", filters.price.clone()),
        ("rating", filters.rating.clone()),
        ("order", filters.order.clone()),
    ]
}

#[async_trait]
impl CatalogApi for HttpCatalog {
    #[instrument(skip(self))]
    async fn search(&self, filters: &FilterState) -> Result<ResultSet, ApiError> {
        self.get_json(self.search_url(filters)).await
    }

    #[instrument(skip(self))]
    async fn categories(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(self.endpoint(&["categories"])).await
    }

    #[instrument(skip(self))]
    async fn product_by_slug(&self, slug: &str) -> Result<Product, ApiError> {
        self.get_json(self.endpoint(&["slug", slug])).await
    }

    #[instrument(skip(self))]
    async fn product_by_id(&self, id: &str) -> Result<Product, ApiError> {
        self.get_json(self.endpoint(&[id])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn catalog(base: &str) -> HttpCatalog {
        HttpCatalog::new(Url::parse(base).unwrap())
    }

    #[test]
    fn test_endpoints_under_base() {
        let api = catalog("http://localhost:5000");
        assert_eq!(
            api.endpoint(&["categories"]).as_str(),
            "http://localhost:5000/api/products/categories"
        );

        let prefixed = catalog("https://shop.example.com/v1/");
        assert_eq!(
            prefixed.endpoint(&["slug", "slim shirt"]).as_str(),
            "https://shop.example.com/v1/api/products/slug/slim%20shirt"
        );
    }

    #[test]
    fn test_search_url_carries_all_params() {
        let api = catalog("http://localhost:5000");
        let filters = FilterState {
            category: "Shirts".into(),
            query: "blue & white".into(),
            ..FilterState::default()
        };
        assert_eq!(
            api.search_url(&filters).as_str(),
            "http://localhost:5000/api/products/search?page=1&query=blue+%26+white&category=Shirts&price=all&rating=all&order=newest"
        );
    }

    /// Answers a single HTTP request with `status`, `content_type` and `body`.
    async fn serve_once(status: &'static str, content_type: &'static str, body: &'static str) -> HttpCatalog {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        catalog(&format!("http://{addr}"))
    }

    #[tokio::test]
    async fn test_success_body_is_decoded() {
        let api = serve_once("200 OK", "application/json", r#"["Pants","Shirts"]"#).await;
        assert_eq!(api.categories().await.unwrap(), ["Pants", "Shirts"]);
    }

    #[tokio::test]
    async fn test_not_found_uses_body_message() {
        let api = serve_once(
            "404 Not Found",
            "application/json",
            r#"{"message":"Product Not Found"}"#,
        )
        .await;
        let err = api.product_by_slug("ghost").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 404,
                message: "Product Not Found".into()
            }
        );
        assert_eq!(err.to_string(), "Product Not Found");
    }

    #[tokio::test]
    async fn test_server_error_without_message_names_status() {
        let api = serve_once(
            "500 Internal Server Error",
            "text/html",
            "<html><body>Internal Server Error</body></html>",
        )
        .await;
        let err = api.search(&FilterState::default()).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: "Request failed with status code 500".into()
            }
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let api = serve_once("200 OK", "application/json", r#"{"products":"nope"}"#).await;
        let err = api.search(&FilterState::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_closed_port_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = catalog(&format!("http://{addr}"));
        let err = api.categories().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
    }
}
