use crate::common::data::{
    body::Body,
    request::{Cookie, Header},
    time::Delay,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Overrides of the connection behaviour of the mock server for a single response.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_content_length_header: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_length_header_override: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_connection_header: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive_override: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_socket: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_socket_delay: Option<Delay>,
}

/// A static HTTP response returned by the mock server.
///
/// If no status code is set, the mock server uses its own default (usually 200).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<Delay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cookies: Vec<Cookie>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_options: Option<ConnectionOptions>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_phrase: Option<String>,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    /// A response carrying a JSON body. See [`Body::json`].
    pub fn json<V: Into<Value>>(value: V) -> Self {
        Self::new().body(Body::json(value))
    }

    /// A response carrying a plain text body. See [`Body::string`].
    pub fn string<S: Into<String>>(value: S) -> Self {
        Self::new().body(Body::string(value))
    }

    pub fn status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn reason_phrase<S: Into<String>>(mut self, reason_phrase: S) -> Self {
        self.reason_phrase = Some(reason_phrase.into());
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

    pub fn delay<D: Into<Delay>>(mut self, delay: D) -> Self {
        self.delay = Some(delay.into());
        self
    }

    pub fn connection_options(mut self, options: ConnectionOptions) -> Self {
        self.connection_options = Some(options);
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::common::data::time::TimeUnit;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn json_response_has_no_status_code() {
        let value = serde_json::to_value(Response::json(json!(["x"]))).unwrap();
        assert_eq!(
            value,
            json!({
                "body": {
                    "type": "JSON",
                    "contentType": "application/json",
                    "base64Bytes": "[\"x\"]"
                }
            })
        );
    }

    #[test]
    fn string_response_has_no_status_code() {
        let response = Response::string("ok");
        assert_eq!(response.status_code, None);
        assert_eq!(response.body, Some(Body::string("ok")));
    }

    #[test]
    fn full_response_shape() {
        let response = Response::new()
            .status_code(418)
            .reason_phrase("I'm a teapot")
            .header("Content-Type", ["text/plain"])
            .cookie("id", "7")
            .delay(Duration::from_millis(250))
            .connection_options(ConnectionOptions {
                close_socket: Some(true),
                close_socket_delay: Some(Delay::of(1, TimeUnit::Seconds)),
                chunk_size: Some(16),
                ..ConnectionOptions::default()
            });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "delay": { "timeUnit": "MILLISECONDS", "value": 250 },
                "cookies": [{ "name": "id", "value": "7" }],
                "connectionOptions": {
                    "chunkSize": 16,
                    "closeSocket": true,
                    "closeSocketDelay": { "timeUnit": "SECONDS", "value": 1 }
                },
                "headers": [{ "name": "Content-Type", "values": ["text/plain"] }],
                "statusCode": 418,
                "reasonPhrase": "I'm a teapot"
            })
        );
    }

    #[test]
    fn explicit_false_connection_option_is_sent() {
        let options = ConnectionOptions {
            close_socket: Some(false),
            ..ConnectionOptions::default()
        };
        assert_eq!(
            serde_json::to_value(options).unwrap(),
            json!({ "closeSocket": false })
        );
    }
}
