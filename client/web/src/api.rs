// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Backend access for the display component.

use std::future::Future;

use greeting_shared::GreetResponse;
use reqwest::Client;
use tracing::debug;

use crate::config::WebConfig;
use crate::errors::{FetchError, StartupError};

/// Where the display component gets the backend greeting from
pub trait GreetingSource: Send + Sync + 'static {
    fn fetch_greeting(&self) -> impl Future<Output = Result<GreetResponse, FetchError>> + Send;
}

/// Fetches the greeting from the backend over HTTP
#[derive(Debug, Clone)]
pub struct HttpGreetingSource {
    client: Client,
    url: String,
}

impl HttpGreetingSource {
    pub fn new(config: &WebConfig) -> Result<Self, StartupError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            url: config.hello_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl GreetingSource for HttpGreetingSource {
    async fn fetch_greeting(&self) -> Result<GreetResponse, FetchError> {
        debug!(url = %self.url, "Fetching backend greeting");
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status,
            });
        }

        Ok(response.json::<GreetResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use tokio::net::TcpListener;

    /// Serve `router` on an ephemeral port and return its base URL
    async fn spawn_stub(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://127.0.0.1:{port}/api/v1")
    }

    fn source_for(api_url: String) -> HttpGreetingSource {
        let config = WebConfig {
            api_url: Some(api_url),
            ..WebConfig::default()
        };
        HttpGreetingSource::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetches_message() {
        let router = Router::new().route(
            "/api/v1/hello",
            get(|| async { Json(serde_json::json!({ "message": "Hello from Rails!" })) }),
        );
        let source = source_for(spawn_stub(router).await);

        assert!(source.url().ends_with("/api/v1/hello"));
        let res = source.fetch_greeting().await.unwrap();
        assert_eq!(res.message, "Hello from Rails!");
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let router = Router::new().route(
            "/api/v1/hello",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let source = source_for(spawn_stub(router).await);

        let err = source.fetch_greeting().await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Status { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_transport_error() {
        let router = Router::new().route("/api/v1/hello", get(|| async { "not json" }));
        let source = source_for(spawn_stub(router).await);

        let err = source.fetch_greeting().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
