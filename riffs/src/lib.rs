use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::broadcast;
use tracing::{debug, error, instrument, trace};
use url::Url;

pub use reqwest::Method;

pub mod auth;
pub mod collection;
pub mod marketplace;
pub mod models;
pub mod params;
pub mod riff;
pub mod user;

/// Base url used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";
pub const WALLET_ADDRESS_HEADER: &str = "x-wallet-address";

const JSON_CONTENT_TYPE: &str = "application/json";
const FALLBACK_MESSAGE: &str = "Something went wrong";
const FAILURE_CHANNEL_CAPACITY: usize = 32;

/// Every variant displays as the message shown to the user.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("invalid endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("invalid {name} header: {reason}")]
    Header { name: &'static str, reason: String },
    #[error("{0}")]
    Body(String),
    #[error("{message}")]
    Status { status: StatusCode, message: String },
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
}

impl Error {
    /// The response status, if the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    fn transport(err: reqwest::Error) -> Self {
        Error::Transport(non_empty(err.to_string()))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Published once for every request that fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub method: Method,
    pub endpoint: String,
    pub message: String,
}

/// Per-call settings for [`Client::request`].
#[derive(Debug, Clone)]
pub struct RequestOptions<B = Value> {
    method: Method,
    headers: HeaderMap,
    wallet_address: Option<String>,
    body: Option<B>,
}

impl RequestOptions {
    /// A `GET` without headers or body.
    #[must_use]
    pub fn new() -> Self {
        RequestOptions {
            method: Method::GET,
            headers: HeaderMap::new(),
            wallet_address: None,
            body: None,
        }
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> RequestOptions<B> {
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Adds a caller header. `Content-Type` is always replaced by JSON at dispatch.
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    #[must_use]
    pub fn wallet_address<S: Into<String>>(mut self, wallet_address: S) -> Self {
        self.wallet_address = Some(wallet_address.into());
        self
    }

    #[must_use]
    pub fn body<C>(self, body: C) -> RequestOptions<C> {
        RequestOptions {
            method: self.method,
            headers: self.headers,
            wallet_address: self.wallet_address,
            body: Some(body),
        }
    }
}

/// Handle to the backend api.
///
/// Cloning is cheap and every clone reports failures on the same channel.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    reqwest: reqwest::Client,
    wallet_header: bool,
    failures: broadcast::Sender<Failure>,
}

impl Client {
    #[must_use]
    pub fn new(base_url: Url, reqwest: reqwest::Client) -> Self {
        let (failures, _) = broadcast::channel(FAILURE_CHANNEL_CAPACITY);
        Client {
            base_url,
            reqwest,
            wallet_header: false,
            failures,
        }
    }

    /// Sends the wallet address of a call as the [`WALLET_ADDRESS_HEADER`] header.
    /// Off unless enabled here.
    #[must_use]
    pub fn with_wallet_header(mut self, enabled: bool) -> Self {
        self.wallet_header = enabled;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Receives a [`Failure`] for every failed request made after subscribing.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Failure> {
        self.failures.subscribe()
    }

    /// Appends `endpoint` to the base url. The endpoint has to start with `/`.
    ///
    /// # Errors
    /// [`Error::InvalidEndpoint`]: If the endpoint is not an absolute path or the result is not a url.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        if !endpoint.starts_with('/') {
            return Err(Error::InvalidEndpoint {
                endpoint: endpoint.to_owned(),
                reason: "path must start with '/'".to_owned(),
            });
        }
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{endpoint}")).map_err(|e| Error::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })
    }

    /// Sends a request to `endpoint` and decodes the response body.
    ///
    /// An empty response body decodes from `null`, a body that is not json from a string.
    /// Failures are logged and published to [`Client::subscribe`] before they are returned.
    ///
    /// # Errors
    /// [`Error::Status`]: If the backend answered with a non-success status.
    /// [`Error::Transport`]: If no response was received.
    /// [`Error::Decode`]: If the body does not match `T`.
    #[instrument(skip(self, options), fields(method = %options.method))]
    pub async fn request<T, B>(&self, endpoint: &str, options: RequestOptions<B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let method = options.method.clone();
        match self.dispatch(endpoint, options).await {
            Ok(body) => Ok(body),
            Err(err) => Err(self.report(method, endpoint, err)),
        }
    }

    async fn dispatch<T, B>(&self, endpoint: &str, options: RequestOptions<B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = self.endpoint_url(endpoint)?;
        let headers = self.headers(&options)?;
        debug!("{} {}", options.method, url);
        let mut request = self.reqwest.request(options.method, url).headers(headers);
        if let Some(body) = &options.body {
            let body = serde_json::to_vec(body).map_err(|e| Error::Body(non_empty(e.to_string())))?;
            request = request.body(body);
        }
        let response = request.send().await.map_err(Error::transport)?;
        handle_response(response).await
    }

    fn headers<B>(&self, options: &RequestOptions<B>) -> Result<HeaderMap> {
        let mut headers = options.headers.clone();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        if let (true, Some(wallet_address)) = (self.wallet_header, &options.wallet_address) {
            let value = HeaderValue::from_str(wallet_address).map_err(|e| Error::Header {
                name: WALLET_ADDRESS_HEADER,
                reason: e.to_string(),
            })?;
            headers.insert(HeaderName::from_static(WALLET_ADDRESS_HEADER), value);
        }
        Ok(headers)
    }

    fn report(&self, method: Method, endpoint: &str, err: Error) -> Error {
        error!(%method, endpoint, error = ?err, "api request failed");
        let _ = self.failures.send(Failure {
            method,
            endpoint: endpoint.to_owned(),
            message: err.to_string(),
        });
        err
    }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.bytes().await.map_err(Error::transport)?;
    if !status.is_success() {
        return Err(Error::Status {
            status,
            message: status_message(status, &body),
        });
    }
    serde_json::from_value(parse_body(&body)).map_err(|e| Error::Decode(non_empty(e.to_string())))
}

fn parse_body(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Null;
    }
    match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            let text = String::from_utf8_lossy(body).into_owned();
            trace!(body = text, "response is not json: {}", e);
            Value::String(text)
        }
    }
}

fn status_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(server_message))
        .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()))
}

/// Validation errors arrive as a list of messages.
fn server_message(message: &Value) -> Option<String> {
    let message = match message {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(","),
        _ => return None,
    };
    (!message.is_empty()).then_some(message)
}

fn non_empty(message: String) -> String {
    if message.trim().is_empty() {
        FALLBACK_MESSAGE.to_owned()
    } else {
        message
    }
}
