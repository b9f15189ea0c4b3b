use crate::common::data::{
    modifier::{RequestModifier, ResponseModifier},
    request::{Request, Scheme},
    response::Response,
    time::{Delay, TimeToLive, Times},
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TemplateType {
    Javascript,
    Velocity,
    Mustache,
}

/// A response or forwarded request rendered by the mock server from a template.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<Delay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_type: Option<TemplateType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl Template {
    pub fn new<S: Into<String>>(template_type: TemplateType, template: S) -> Self {
        Self {
            delay: None,
            template_type: Some(template_type),
            template: Some(template.into()),
        }
    }
}

/// A callback class loaded into the mock server's classpath.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassCallback {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<Delay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_class: Option<String>,
}

impl ClassCallback {
    pub fn new<S: Into<String>>(callback_class: S) -> Self {
        Self {
            delay: None,
            callback_class: Some(callback_class.into()),
        }
    }
}

/// A callback handled by a client connected to the mock server over a web socket.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectCallback {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<Delay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_callback: Option<bool>,
}

/// Forwards the matched request to another host.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Forward {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<Delay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<Scheme>,
}

impl Forward {
    pub fn new<H: Into<String>>(host: H, port: u16, scheme: Scheme) -> Self {
        Self {
            delay: None,
            host: Some(host.into()),
            port: Some(port),
            scheme: Some(scheme),
        }
    }
}

/// Forwards the matched request after overriding and modifying it, and optionally overrides
/// or modifies the upstream response.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverrideForwardedRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<Delay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_override: Option<Request>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_modifier: Option<RequestModifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_override: Option<Response>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modifier: Option<ResponseModifier>,
}

/// Error injection: drop the connection and/or write raw bytes to the socket.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HttpError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<Delay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_connection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_bytes: Option<String>,
}

/// What the mock server does with a matched request. An expectation carries at most one action.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    HttpResponse(Response),
    HttpResponseTemplate(Template),
    HttpResponseClassCallback(ClassCallback),
    HttpResponseObjectCallback(ObjectCallback),
    HttpForward(Forward),
    HttpForwardTemplate(Template),
    HttpForwardClassCallback(ClassCallback),
    HttpForwardObjectCallback(ObjectCallback),
    HttpOverrideForwardedRequest(OverrideForwardedRequest),
    HttpError(HttpError),
}

impl From<Response> for Action {
    fn from(response: Response) -> Self {
        Action::HttpResponse(response)
    }
}

impl From<Forward> for Action {
    fn from(forward: Forward) -> Self {
        Action::HttpForward(forward)
    }
}

impl From<OverrideForwardedRequest> for Action {
    fn from(value: OverrideForwardedRequest) -> Self {
        Action::HttpOverrideForwardedRequest(value)
    }
}

impl From<HttpError> for Action {
    fn from(error: HttpError) -> Self {
        Action::HttpError(error)
    }
}

/// A rule telling the mock server which requests to match and how to answer them.
///
/// ```
/// use mockserver_client::prelude::*;
/// use serde_json::json;
///
/// let expectation = Expectation::new(Request::new().method("GET").path("/hello"))
///     .respond(Response::json(json!({ "greeting": "hi" })))
///     .times(Times::once());
///
/// let value = serde_json::to_value(&expectation).unwrap();
/// assert_eq!(value["httpRequest"]["path"], "/hello");
/// assert_eq!(value["httpResponse"]["body"]["type"], "JSON");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expectation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(rename = "httpRequest", skip_serializing_if = "Option::is_none")]
    pub request: Option<Request>,
    #[serde(flatten)]
    pub action: Option<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<Times>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_live: Option<TimeToLive>,
}

impl Expectation {
    pub fn new(request: Request) -> Self {
        Self {
            request: Some(request),
            ..Self::default()
        }
    }

    pub fn id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the action, replacing any previously set one.
    pub fn action<A: Into<Action>>(mut self, action: A) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn respond(self, response: Response) -> Self {
        self.action(Action::HttpResponse(response))
    }

    pub fn respond_with_template(self, template: Template) -> Self {
        self.action(Action::HttpResponseTemplate(template))
    }

    pub fn forward(self, forward: Forward) -> Self {
        self.action(Action::HttpForward(forward))
    }

    pub fn forward_with_template(self, template: Template) -> Self {
        self.action(Action::HttpForwardTemplate(template))
    }

    pub fn error(self, error: HttpError) -> Self {
        self.action(Action::HttpError(error))
    }

    pub fn times(mut self, times: Times) -> Self {
        self.times = Some(times);
        self
    }

    pub fn time_to_live(mut self, time_to_live: TimeToLive) -> Self {
        self.time_to_live = Some(time_to_live);
        self
    }
}
