//! `mockserver-client` configures and verifies a remotely running
//! [MockServer](https://www.mock-server.com) instance from your tests.
//!
//! The crate contains two parts:
//!
//! * a **data model** ([Expectation], [Request], [Response], [Verify], [VerifySequence], ...)
//!   that serializes to the JSON documents understood by the mock server's control API, and
//! * a **client** ([MockServerClient]) that sends these documents to the server.
//!
//! All request matching and response generation happens inside the mock server. This crate
//! only shapes and transmits its configuration.
//!
//! # Getting Started
//! ```no_run
//! use mockserver_client::prelude::*;
//! use serde_json::json;
//!
//! let client = MockServerClient::new("http://localhost:1080").unwrap();
//!
//! // Answer GET /users/1 once with a JSON document.
//! client
//!     .register_expectation(
//!         &Expectation::new(Request::new().method("GET").path("/users/1"))
//!             .respond(Response::json(json!({ "name": "Fred" })).status_code(200))
//!             .times(Times::once()),
//!     )
//!     .unwrap();
//!
//! // ... run the code under test against the mock server ...
//!
//! // Fail the test if the request never arrived.
//! client
//!     .verify(&Verify::request(Request::new().path("/users/1")).times(VerifyTimes::exactly(1)))
//!     .unwrap();
//!
//! client.clear_all().unwrap();
//! ```
//!
//! # Errors
//! Every operation returns a [Result]. Any status code outside of `200..=299` is reported as
//! [Error::UnexpectedStatus], including the body the mock server answered with. For failed
//! verifications this body is the mock server's report of the requests it actually received.
//!
//! # Debugging
//! `mockserver-client` logs against the `tracing` crate (which also forwards to the `log` crate).
//! Set `RUST_LOG=mockserver_client=trace` with a logging backend such as `env_logger` to see
//! every request and payload sent to the mock server.
//!
//! # Configuration
//! [MockServerClient::from_env] reads the base URL from the `MOCKSERVER_URL` environment
//! variable and defaults to `http://localhost:1080`. Enable the `https` feature to talk to
//! mock servers over TLS.

pub use api::{ClearType, Error, MockServerClient};
pub use common::data::{
    with_query_parameter, Action, Body, BodyType, ClassCallback, ConnectionOptions, Cookie,
    Delay, Expectation, ExpectationId, Forward, Header, HttpError, Modifications,
    ObjectCallback, OverrideForwardedRequest, Parameter, PathModifier, Protocol, Request,
    RequestModifier, Response, ResponseModifier, Scheme, SocketAddress, Template, TemplateType,
    TimeToLive, TimeUnit, Times, Verify, VerifySequence, VerifyTimes,
};
pub use common::http::{DefaultHttpClient, Error as HttpClientError, HttpClient};

mod api;
mod common;

pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        with_query_parameter, Body, BodyType, ClearType, Cookie, Delay, Expectation, Forward,
        Header, MockServerClient, Parameter, Request, Response, Scheme, TimeToLive, TimeUnit,
        Times, Verify, VerifySequence, VerifyTimes,
    };
}
