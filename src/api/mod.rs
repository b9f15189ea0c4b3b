use http::StatusCode;
use thiserror::Error;

pub use client::{ClearType, MockServerClient};

mod client;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid mock server base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("unsupported mock server URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),
    #[error("mock server base URL must not contain a query or fragment: {0}")]
    BaseUrlWithQueryOrFragment(String),
    #[error("cannot serialize JSON: {0}")]
    JsonSerializationError(#[from] serde_json::Error),
    #[error("cannot build request: {0}")]
    RequestBuildError(#[from] http::Error),
    #[error("transport error: {0}")]
    TransportError(#[from] crate::common::http::Error),
    #[error("bad response status: {status} with message: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
}
