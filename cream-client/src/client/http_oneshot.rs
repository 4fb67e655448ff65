// cream-client/src/client/http_oneshot.rs
// Oneshot HTTP client - in-memory calls (in-process mode)
//
// Requires the "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use super::http::{HttpClient, decode_response};
use crate::{ClientError, ClientResult};

/// Oneshot HTTP client
///
/// Calls an axum `Router` directly through tower's `oneshot`, with no
/// network in between. Useful for embedding the API in the same process
/// and for driving the panel against a mock API in tests.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use cream_client::OneshotHttpClient;
///
/// let router: Router = mock_api().with_state(state);
/// let client = OneshotHttpClient::new(router);
/// let flavors: Vec<Flavor> = client.get("/sabores").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
}

impl OneshotHttpClient {
    /// `router` must already have its state attached
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    fn build_request(&self, method: Method, path: &str, body: Body) -> ClientResult<Request<Body>> {
        let uri = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        Request::builder()
            .method(method)
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        decode_response(status, &body)
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, Body::empty())?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned + Send, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        let request = self.build_request(Method::POST, path, Body::from(bytes))?;
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::routing::get;
    use http::StatusCode;

    #[tokio::test]
    async fn test_oneshot_roundtrip() {
        let router = Router::new().route(
            "/ping",
            get(|| async { Json(serde_json::json!({"pong": true})) }),
        );
        let client = OneshotHttpClient::new(router);
        let value: serde_json::Value = client.get("ping").await.unwrap();
        assert_eq!(value["pong"], true);
    }

    #[tokio::test]
    async fn test_oneshot_error_status() {
        let router = Router::new().route(
            "/broken",
            get(|| async { (StatusCode::NOT_FOUND, Json(serde_json::json!({"detail": "Pedido no encontrado."}))) }),
        );
        let client = OneshotHttpClient::new(router);
        let err = client.get::<serde_json::Value>("/broken").await.unwrap_err();
        assert_eq!(err.user_message("fallback"), "Pedido no encontrado.");
    }
}
