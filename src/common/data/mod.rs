//! Records sent to the mock server's control API.
//!
//! Every record serializes to the mock server's JSON format. Fields that are not set are left
//! out of the JSON document entirely, so the server falls back to its own defaults for them.
//! Values that were set explicitly are always sent, even if they are `0` or `false`.

pub mod body;
pub mod expectation;
pub mod modifier;
pub mod request;
pub mod response;
pub mod time;
pub mod verification;

pub use body::{Body, BodyType};
pub use expectation::{
    Action, ClassCallback, Expectation, Forward, HttpError, ObjectCallback,
    OverrideForwardedRequest, Template, TemplateType,
};
pub use modifier::{Modifications, PathModifier, RequestModifier, ResponseModifier};
pub use request::{
    with_query_parameter, Cookie, Header, Parameter, Protocol, Request, Scheme, SocketAddress,
};
pub use response::{ConnectionOptions, Response};
pub use time::{Delay, TimeToLive, TimeUnit, Times};
pub use verification::{ExpectationId, Verify, VerifySequence, VerifyTimes};
