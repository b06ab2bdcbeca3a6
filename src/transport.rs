use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

use crate::{
    config::ClientConfig,
    error::{ErrorBody, TransportError},
};

// 1. Transport Contract
/// Transport
///
/// Defines the abstract contract for one HTTP exchange with the storefront
/// service. This trait is the seam between the typed operations and the
/// wire: the real client (HttpTransport) speaks HTTP in production, while
/// the scripted mock (MockTransport) stands in during testing without a
/// network connection.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one exchange against the service.
    ///
    /// * Success responses come back as raw JSON; an empty success body is
    ///   reported as `Value::Null` so bodiless endpoints stay uniform.
    /// * Non-success statuses surface as [`TransportError::Status`] with
    ///   whatever error body could be read.
    ///
    /// # Arguments
    /// * `path`: The path relative to the configured base URL, e.g. `/orders`.
    /// * `body`: An optional JSON request body.
    /// * `query`: Query pairs, already under their wire names.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        query: &[(String, String)],
    ) -> Result<Value, TransportError>;
}

// 2. The Real Implementation (reqwest)
/// HttpTransport
///
/// The concrete implementation over a shared `reqwest::Client`. Every
/// request carries a fresh `x-request-id` so a failure seen by a caller can
/// be correlated with the service's own logs, and the configured bearer
/// token when one is present.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
    timeout: Duration,
}

impl HttpTransport {
    /// new
    ///
    /// Constructs the HTTP transport from the client configuration. The
    /// timeout applies to each exchange as a whole, connect time included.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let timeout = Duration::from_secs(config.http_timeout_secs);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self {
            client,
            // Paths always start with '/', so the base must not end with one.
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            bearer_token: config.api_token.clone(),
            timeout,
        })
    }

    /// Collapses reqwest's send-side failures into transport terms. The
    /// timeout and connect cases get stable wording because callers may
    /// surface them directly.
    fn map_send_error(&self, error: reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Network(format!(
                "request timed out after {} seconds",
                self.timeout.as_secs()
            ))
        } else if error.is_connect() {
            TransportError::Network("unable to connect to the storefront api".to_string())
        } else {
            TransportError::Network(error.to_string())
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        query: &[(String, String)],
    ) -> Result<Value, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        let request_id = Uuid::new_v4();

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("x-request-id", request_id.to_string());

        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        tracing::debug!(%method, path, %request_id, "storefront api request");

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !status.is_success() {
            // An unreadable or absent error body still normalizes; the
            // operation layer falls back to its canned message.
            let body = serde_json::from_slice::<ErrorBody>(&bytes).unwrap_or_default();
            tracing::debug!(%status, path, %request_id, "storefront api rejected the request");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

// 3. The Mock Implementation (For Unit Tests)
/// RecordedRequest
///
/// What the mock saw for a single exchange, kept for assertions.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
}

/// MockTransport
///
/// A scripted implementation of `Transport` used exclusively for testing.
/// Outcomes are consumed front-to-back, one per exchange, and every request
/// is recorded. When the script runs dry the mock answers `Value::Null`,
/// which reads as a bodiless success.
pub struct MockTransport {
    outcomes: Mutex<VecDeque<Result<Value, TransportError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Scripts a successful exchange answering with the given JSON.
    pub fn enqueue_ok(&self, value: Value) {
        self.outcomes.lock().unwrap().push_back(Ok(value));
    }

    /// Scripts a failed exchange.
    pub fn enqueue_err(&self, error: TransportError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    /// Everything the mock has been asked to send, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        query: &[(String, String)],
    ) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
            query: query.to_vec(),
        });

        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }
}

/// TransportState
///
/// The concrete type used to share one transport across the operation layer.
pub type TransportState = Arc<dyn Transport>;
