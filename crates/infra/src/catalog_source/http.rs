use std::time::Duration;

use prodfilter_products::CatalogDocument;

use super::r#trait::{parse_catalog, CatalogSource, CatalogSourceError};

const USER_AGENT: &str = concat!("prodfilter/", env!("CARGO_PKG_VERSION"));

/// Catalog source backed by a single upstream URL.
///
/// The wrapped `reqwest::Client` pools connections and is built once; clone
/// the source (or share it behind an `Arc`) instead of building new ones.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    /// Build a source with its own client using the given request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogSourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CatalogSourceError::Retrieval(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client, url))
    }

    /// Build a source around an existing client.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

fn transport_error(err: reqwest::Error) -> CatalogSourceError {
    if err.is_timeout() {
        CatalogSourceError::Timeout(err.to_string())
    } else {
        CatalogSourceError::Retrieval(err.to_string())
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<CatalogDocument, CatalogSourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(transport_error)?
            .error_for_status()
            .map_err(transport_error)?;

        let body = response.bytes().await.map_err(transport_error)?;
        let document = parse_catalog(&body)?;

        if document.is_empty() {
            tracing::info!(url = %self.url, "no data received");
        } else {
            tracing::info!(url = %self.url, count = document.products.len(), "data received");
        }

        Ok(document)
    }

    fn location(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn source_for(server: &MockServer) -> HttpCatalogSource {
        HttpCatalogSource::new(format!("{}/catalog", server.uri()), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn fetches_and_decodes_catalog() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/catalog"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "products": [
                    {"title": "A Red Trouser", "price": 10, "sizes": ["small"], "description": "red"},
                    {"title": "A Blue Shirt", "price": 20.5, "sizes": [], "description": "blue"}
                ],
                "APIkey": {"primary": "p", "secondary": "s"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let doc = source_for(&server).await.fetch().await.unwrap();
        assert_eq!(doc.products.len(), 2);
        assert_eq!(doc.products[1].price, "20.5".parse().unwrap());
        assert!(doc.api_key.is_some());
    }

    #[tokio::test]
    async fn each_fetch_hits_the_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"products": []})))
            .expect(2)
            .mount(&server)
            .await;

        let source = source_for(&server).await;
        assert!(source.fetch().await.unwrap().is_empty());
        assert!(source.fetch().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_products_is_empty_not_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let doc = source_for(&server).await.fetch().await.unwrap();
        assert!(doc.is_empty());
    }

    #[tokio::test]
    async fn upstream_error_status_is_retrieval_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = source_for(&server).await.fetch().await.unwrap_err();
        assert!(matches!(err, CatalogSourceError::Retrieval(_)), "{err:?}");
    }

    #[tokio::test]
    async fn malformed_body_is_deserialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = source_for(&server).await.fetch().await.unwrap_err();
        assert!(matches!(err, CatalogSourceError::Deserialization(_)), "{err:?}");
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"products": []}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let source =
            HttpCatalogSource::new(format!("{}/catalog", server.uri()), Duration::from_millis(100)).unwrap();
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, CatalogSourceError::Timeout(_)), "{err:?}");
    }

    #[tokio::test]
    async fn unreachable_upstream_is_retrieval_error() {
        // Port 9 (discard) on localhost is not served in test environments.
        let source = HttpCatalogSource::new("http://127.0.0.1:9/catalog", Duration::from_secs(2)).unwrap();
        let err = source.fetch().await.unwrap_err();
        assert!(
            matches!(err, CatalogSourceError::Retrieval(_) | CatalogSourceError::Timeout(_)),
            "{err:?}"
        );
    }
}
