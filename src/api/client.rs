use std::sync::Arc;

use bytes::Bytes;
use http::{header::CONTENT_TYPE, Method, Request};
use serde::Serialize;
use url::Url;

use crate::{
    api::Error,
    common::{
        data::{Expectation, ExpectationId, Request as RequestMatcher, Verify, VerifySequence},
        http::{DefaultHttpClient, Error as HttpClientError, HttpClient},
        runtime,
        util::{read_env, Join},
    },
};

const DEFAULT_BASE_URL: &str = "http://localhost:1080";

/// Which part of the mock server state a clear request removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearType {
    All,
    Log,
    Expectations,
}

impl ClearType {
    fn as_str(&self) -> &'static str {
        match self {
            ClearType::All => "all",
            ClearType::Log => "log",
            ClearType::Expectations => "expectations",
        }
    }
}

/// A client for the control API of a remote MockServer instance.
///
/// Each operation sends exactly one request and waits for the answer. Every operation is
/// available as a blocking method and as an `_async` variant. A status code outside of
/// `200..=299` is reported as [`Error::UnexpectedStatus`], carrying the status line and the
/// body the server answered with.
///
/// Clients are independent of each other, so tests can talk to several mock servers at once.
///
/// ```no_run
/// use mockserver_client::prelude::*;
/// use serde_json::json;
///
/// let client = MockServerClient::new("http://localhost:1080").unwrap();
///
/// client
///     .register_expectation(
///         &Expectation::new(Request::new().method("GET").path("/hello"))
///             .respond(Response::json(json!({ "message": "hi" }))),
///     )
///     .unwrap();
///
/// // ... exercise the code under test ...
///
/// client
///     .verify(&Verify::request(Request::new().path("/hello")).times(VerifyTimes::exactly(1)))
///     .unwrap();
/// ```
pub struct MockServerClient {
    base_url: String,
    http_client: Arc<dyn HttpClient + Send + Sync + 'static>,
}

impl MockServerClient {
    /// Creates a client for the mock server at `base_url` (e.g. `http://localhost:1080`).
    ///
    /// Fails if the URL cannot be parsed, does not use the http(s) scheme, or carries a query
    /// string or fragment. No request is sent to the server.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let base_url = parse_base_url(base_url)?;

        let runtime = runtime::new(1, 1)
            .map_err(|e| Error::TransportError(HttpClientError::SetupError(e.to_string())))?;
        let http_client = DefaultHttpClient::new(Some(Arc::new(runtime)))?;

        Ok(Self {
            base_url,
            http_client: Arc::new(http_client),
        })
    }

    /// Creates a client that uses a custom transport.
    pub fn with_http_client(
        base_url: &str,
        http_client: Arc<dyn HttpClient + Send + Sync + 'static>,
    ) -> Result<Self, Error> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            http_client,
        })
    }

    /// Creates a client for the mock server given by the `MOCKSERVER_URL` environment
    /// variable, defaulting to `http://localhost:1080`.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(&read_env("MOCKSERVER_URL", DEFAULT_BASE_URL))
    }

    /// The normalized base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Registers an expectation.
    pub fn register_expectation(&self, expectation: &Expectation) -> Result<(), Error> {
        self.register_expectation_async(expectation).join()
    }

    pub async fn register_expectation_async(
        &self,
        expectation: &Expectation,
    ) -> Result<(), Error> {
        self.send_json(Method::PUT, "/mockserver/expectation", expectation)
            .await
    }

    /// Registers several expectations with a single request.
    pub fn register_expectations(&self, expectations: &[Expectation]) -> Result<(), Error> {
        self.register_expectations_async(expectations).join()
    }

    pub async fn register_expectations_async(
        &self,
        expectations: &[Expectation],
    ) -> Result<(), Error> {
        self.send_json(Method::PUT, "/mockserver/expectation", expectations)
            .await
    }

    /// Verifies that a request was received the given number of times.
    ///
    /// If the verification fails, the returned [`Error::UnexpectedStatus`] contains the
    /// mock server's failure report.
    pub fn verify(&self, verify: &Verify) -> Result<(), Error> {
        self.verify_async(verify).join()
    }

    pub async fn verify_async(&self, verify: &Verify) -> Result<(), Error> {
        self.send_json(Method::PUT, "/mockserver/verify", verify)
            .await
    }

    /// Verifies that requests were received in the given order.
    pub fn verify_sequence(&self, sequence: &VerifySequence) -> Result<(), Error> {
        self.verify_sequence_async(sequence).join()
    }

    pub async fn verify_sequence_async(&self, sequence: &VerifySequence) -> Result<(), Error> {
        self.send_json(Method::PUT, "/mockserver/verifySequence", sequence)
            .await
    }

    /// Removes all expectations and the recorded request log.
    pub fn clear_all(&self) -> Result<(), Error> {
        self.clear_all_async().join()
    }

    pub async fn clear_all_async(&self) -> Result<(), Error> {
        self.clear_by_type_async(ClearType::All).await
    }

    /// Removes either expectations, the request log, or both.
    pub fn clear_by_type(&self, clear_type: ClearType) -> Result<(), Error> {
        self.clear_by_type_async(clear_type).join()
    }

    pub async fn clear_by_type_async(&self, clear_type: ClearType) -> Result<(), Error> {
        self.send(Method::PUT, &clear_path(clear_type), None).await
    }

    /// Removes the expectation with the given identifier.
    pub fn clear_by_id(&self, expectation_id: &str) -> Result<(), Error> {
        self.clear_by_id_async(expectation_id).join()
    }

    pub async fn clear_by_id_async(&self, expectation_id: &str) -> Result<(), Error> {
        let id = ExpectationId::new(expectation_id);
        self.send_json(Method::PUT, &clear_path(ClearType::All), &id)
            .await
    }

    /// Removes all expectations and recorded requests matching the given request.
    pub fn clear(&self, request: &RequestMatcher) -> Result<(), Error> {
        self.clear_async(request).join()
    }

    pub async fn clear_async(&self, request: &RequestMatcher) -> Result<(), Error> {
        self.send_json(Method::PUT, &clear_path(ClearType::All), request)
            .await
    }

    /// Resets the mock server to its initial state.
    pub fn reset(&self) -> Result<(), Error> {
        self.reset_async().join()
    }

    pub async fn reset_async(&self) -> Result<(), Error> {
        self.send(Method::PUT, "/mockserver/reset", None).await
    }

    async fn send_json<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        value: &T,
    ) -> Result<(), Error> {
        let json = serde_json::to_vec(value)?;
        self.send(method, path, Some(Bytes::from(json))).await
    }

    async fn send(&self, method: Method, path: &str, body: Option<Bytes>) -> Result<(), Error> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!("Sending {} request to {}", method, url);
        if let Some(body) = &body {
            tracing::trace!("Request body: {}", String::from_utf8_lossy(body));
        }

        let request = Request::builder()
            .method(method)
            .uri(url.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(body.unwrap_or_default())?;

        let response = self.http_client.send(request).await?;

        let status = response.status();
        if status.is_success() {
            tracing::trace!("Mock server answered {} with status {}", url, status);
            return Ok(());
        }

        let body = String::from_utf8_lossy(response.body()).into_owned();
        tracing::warn!(
            "Mock server rejected request to {} with status {} (response body = '{}')",
            url,
            status,
            body
        );

        Err(Error::UnexpectedStatus { status, body })
    }
}

fn clear_path(clear_type: ClearType) -> String {
    format!("/mockserver/clear?type={}", clear_type.as_str())
}

fn parse_base_url(base_url: &str) -> Result<String, Error> {
    let url = Url::parse(base_url)?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::UnsupportedScheme(url.scheme().to_string()));
    }

    // Control paths are appended to the base URL verbatim.
    if url.query().is_some() || url.fragment().is_some() {
        return Err(Error::BaseUrlWithQueryOrFragment(url.to_string()));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
