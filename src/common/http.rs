use async_trait::async_trait;
use bytes::Bytes;
use http::{Request, Response};
use http_body_util::{BodyExt, Full};
#[cfg(feature = "https")]
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Runtime;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot send request: {0}")]
    HyperUtilError(#[from] hyper_util::client::legacy::Error),
    #[error("runtime error: {0}")]
    RuntimeError(#[from] tokio::task::JoinError),
    #[error("cannot set up HTTP client: {0}")]
    SetupError(String),
}

/// The transport used to talk to the mock server.
///
/// Implementations must return the complete response body, so that the underlying connection
/// can be reused once `send` returns.
#[async_trait]
pub trait HttpClient {
    async fn send(&self, req: Request<Bytes>) -> Result<Response<Bytes>, Error>;
}

/// Default [`HttpClient`] built on the hyper connection pool.
///
/// If a runtime is provided, every request is spawned onto it. This allows driving requests
/// from threads that have no tokio context, which is what the blocking client API does.
pub struct DefaultHttpClient {
    runtime: Option<Arc<Runtime>>,
    #[cfg(feature = "https")]
    client: Arc<Client<HttpsConnector<HttpConnector>, Full<Bytes>>>,
    #[cfg(not(feature = "https"))]
    client: Arc<Client<HttpConnector, Full<Bytes>>>,
}

impl DefaultHttpClient {
    #[cfg(feature = "https")]
    pub fn new(runtime: Option<Arc<Runtime>>) -> Result<Self, Error> {
        // see https://github.com/rustls/rustls/issues/1938
        if rustls::crypto::CryptoProvider::get_default().is_none() {
            // Another thread may have won the race, which is fine.
            let _ = rustls::crypto::ring::default_provider().install_default();
        }

        let https_connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .map_err(|e| Error::SetupError(e.to_string()))?
            .https_or_http()
            .enable_http1()
            .build();

        Ok(Self {
            runtime,
            client: Arc::new(Client::builder(TokioExecutor::new()).build(https_connector)),
        })
    }

    #[cfg(not(feature = "https"))]
    pub fn new(runtime: Option<Arc<Runtime>>) -> Result<Self, Error> {
        Ok(Self {
            runtime,
            client: Arc::new(Client::builder(TokioExecutor::new()).build(HttpConnector::new())),
        })
    }
}

impl Drop for DefaultHttpClient {
    fn drop(&mut self) {
        // Dropping a runtime blocks, which panics inside async contexts.
        if let Some(runtime) = self.runtime.take().and_then(|rt| Arc::try_unwrap(rt).ok()) {
            runtime.shutdown_background();
        }
    }
}

#[async_trait]
impl HttpClient for DefaultHttpClient {
    async fn send(&self, req: Request<Bytes>) -> Result<Response<Bytes>, Error> {
        let (req_parts, req_body) = req.into_parts();
        let hyper_req = Request::from_parts(req_parts, Full::new(req_body));

        let client = self.client.clone();
        let exchange = async move {
            let res = client.request(hyper_req).await?;
            let (res_parts, res_body) = res.into_parts();
            // The body is only diagnostic output, an unreadable one must not hide the status.
            let body = match res_body.collect().await {
                Ok(collected) => collected.to_bytes(),
                Err(err) => {
                    tracing::debug!("cannot read response body: {}", err);
                    Bytes::new()
                }
            };
            Ok::<_, Error>(Response::from_parts(res_parts, body))
        };

        match self.runtime.clone() {
            Some(rt) => rt.spawn(exchange).await?,
            None => exchange.await,
        }
    }
}
