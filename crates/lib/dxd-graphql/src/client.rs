//! GraphQL-over-HTTP transport for the content service.
//!
//! Every execution is one-shot: a single POST, a single outcome. The caller
//! never distinguishes the failure kinds here; the content tools collapse
//! them all into one "request failed" signal.

use std::error::Error;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::auth::TokenProvider;
use crate::queries::QueryTemplate;

/// TCP connection timeout for outbound requests.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
pub enum TransportError {
    Auth(String),
    Network(String),
    Status(u16),
    GraphQl(String),
    Decode(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auth(message) => write!(f, "authentication failed: {message}"),
            Self::Network(message) => write!(f, "request failed: {message}"),
            Self::Status(status) => write!(f, "service returned status {status}"),
            Self::GraphQl(message) => write!(f, "query returned errors: {message}"),
            Self::Decode(message) => write!(f, "invalid response payload: {message}"),
        }
    }
}

impl Error for TransportError {}

/// One-shot execution of a query template against the content service.
///
/// Implementations resolve only the template's result path of the response
/// into the requested shape; a missing or null subtree is `Ok(None)`.
pub trait GraphQlTransport: Send + Sync + 'static {
    fn execute<T: DeserializeOwned>(
        &self,
        template: &QueryTemplate,
        variables: Value,
    ) -> impl Future<Output = Result<Option<T>, TransportError>> + Send;
}

/// HTTP implementation of [`GraphQlTransport`] over reqwest.
#[derive(Clone)]
pub struct HttpGraphQlClient {
    http: reqwest::Client,
    endpoint: String,
    auth: Option<Arc<TokenProvider>>,
}

impl HttpGraphQlClient {
    /// Creates a client for the given GraphQL endpoint.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        endpoint: impl Into<String>,
        request_timeout: Duration,
    ) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(request_timeout)
            .build()
            .map_err(|err| TransportError::Network(err.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            auth: None,
        })
    }

    /// Attaches a token provider; without one, requests go out anonymous.
    #[must_use]
    pub fn with_token_provider(mut self, auth: Arc<TokenProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// The HTTP client, for collaborators that share the connection pool.
    #[must_use]
    pub fn http(&self) -> reqwest::Client {
        self.http.clone()
    }
}

impl GraphQlTransport for HttpGraphQlClient {
    async fn execute<T: DeserializeOwned>(
        &self,
        template: &QueryTemplate,
        variables: Value,
    ) -> Result<Option<T>, TransportError> {
        debug!(operation = template.name, "executing query");

        let mut request = self.http.post(&self.endpoint).json(&serde_json::json!({
            "query": template.document,
            "variables": variables,
        }));

        if let Some(auth) = &self.auth {
            let token = auth
                .bearer_token()
                .await
                .map_err(|err| TransportError::Auth(err.to_string()))?;
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let envelope: GraphQlResponse = response
            .json()
            .await
            .map_err(|err| TransportError::Decode(err.to_string()))?;

        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                let messages = errors
                    .into_iter()
                    .map(|err| err.message)
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(TransportError::GraphQl(messages));
            }
        }

        let Some(data) = envelope.data else {
            return Ok(None);
        };
        let Some(subtree) = resolve_path(&data, template.result_path) else {
            return Ok(None);
        };

        serde_json::from_value(subtree.clone())
            .map(Some)
            .map_err(|err| TransportError::Decode(err.to_string()))
    }
}

#[derive(Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Deserialize)]
struct GraphQlErrorEntry {
    #[serde(default)]
    message: String,
}

/// Walks a dot-separated path under `data`. Null terminals count as absent.
fn resolve_path<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = data;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    if current.is_null() { None } else { Some(current) }
}
