use crate::common::data::body::Body;
use serde::{Deserialize, Serialize};

/// A path or query string parameter with the set of values it may take.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Parameter {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl Parameter {
    pub fn new<N, I, V>(name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Builds a single element query parameter list, e.g. for
/// [`Request::query_string_parameters`].
///
/// ```
/// use mockserver_client::prelude::*;
///
/// let params = with_query_parameter("q", ["a", "b"]);
/// assert_eq!(params, vec![Parameter::new("q", ["a", "b"])]);
/// ```
pub fn with_query_parameter<N, I, V>(name: N, values: I) -> Vec<Parameter>
where
    N: Into<String>,
    I: IntoIterator<Item = V>,
    V: Into<String>,
{
    vec![Parameter::new(name, values)]
}

/// An HTTP header with all of its values.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Header {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl Header {
    pub fn new<N, I, V>(name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Cookie {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

impl Cookie {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Scheme {
    Http,
    Https,
}

/// Network address a request was received on, or should be forwarded to.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SocketAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<Scheme>,
}

impl SocketAddress {
    pub fn new<H: Into<String>>(host: H, port: u16, scheme: Scheme) -> Self {
        Self {
            host: Some(host.into()),
            port: Some(port),
            scheme: Some(scheme),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    #[serde(rename = "HTTP_1_1")]
    Http11,
    #[serde(rename = "HTTP_2")]
    Http2,
}

/// An HTTP request pattern. Used as the matcher of an [`Expectation`](crate::Expectation),
/// in verifications and when clearing expectations.
///
/// Every field is optional; fields that are not set are not sent to the mock server and
/// therefore match anything.
///
/// ```
/// use mockserver_client::prelude::*;
///
/// let request = Request::new()
///     .method("GET")
///     .path("/search")
///     .query_param("q", ["metallica"])
///     .header("Accept", ["application/json"]);
/// assert_eq!(request.path.as_deref(), Some("/search"));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path_parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query_string_parameters: Vec<Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cookies: Vec<Cookie>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket_address: Option<SocketAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method<S: Into<String>>(mut self, method: S) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn path<S: Into<String>>(mut self, path: S) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn path_param<N, I, V>(mut self, name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.path_parameters.push(Parameter::new(name, values));
        self
    }

    pub fn query_param<N, I, V>(mut self, name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.query_string_parameters
            .push(Parameter::new(name, values));
        self
    }

    /// Replaces all query string parameters.
    pub fn query_string_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.query_string_parameters = parameters;
        self
    }

    pub fn header<N, I, V>(mut self, name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.headers.push(Header::new(name, values));
        self
    }

    pub fn cookie<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.cookies.push(Cookie::new(name, value));
        self
    }

    pub fn body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }

    pub fn keep_alive(mut self, keep_alive: bool) -> Self {
        self.keep_alive = Some(keep_alive);
        self
    }

    pub fn socket_address(mut self, socket_address: SocketAddress) -> Self {
        self.socket_address = Some(socket_address);
        self
    }

    pub fn protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = Some(protocol);
        self
    }
}
