use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The kind of body the mock server should match or return.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BodyType {
    Binary,
    Json,
    JsonSchema,
    JsonPath,
    Parameters,
    Regex,
    String,
    Xml,
    XmlSchema,
    #[serde(rename = "XPATH")]
    XPath,
    LogEvent,
}

/// A request or response body.
///
/// The payload travels in `base64Bytes` regardless of the body type. Only [`BodyType::Binary`]
/// bodies are actually base64 encoded, see [`Body::binary`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub body_type: Option<BodyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64_bytes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<bool>,
}

impl Body {
    /// Creates a body of an arbitrary type with the payload taken verbatim.
    pub fn of<S: Into<String>>(body_type: BodyType, payload: S) -> Self {
        Self {
            body_type: Some(body_type),
            content_type: None,
            base64_bytes: Some(payload.into()),
            not: None,
        }
    }

    /// A JSON body with content type `application/json`.
    ///
    /// ```
    /// use mockserver_client::prelude::*;
    /// use serde_json::json;
    ///
    /// let body = Body::json(json!({ "name": "Fred" }));
    /// assert_eq!(body.base64_bytes.as_deref(), Some(r#"{"name":"Fred"}"#));
    /// ```
    pub fn json<V: Into<Value>>(value: V) -> Self {
        Self::of(BodyType::Json, value.into().to_string()).content_type("application/json")
    }

    /// Like [`Body::json`] but accepts any serializable value.
    pub fn json_obj<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::json(serde_json::to_value(value)?))
    }

    /// A plain text body with content type `text/plain`.
    pub fn string<S: Into<String>>(value: S) -> Self {
        Self::of(BodyType::String, value).content_type("text/plain")
    }

    /// A binary body. The bytes are base64 encoded.
    pub fn binary<B: AsRef<[u8]>>(bytes: B) -> Self {
        Self::of(BodyType::Binary, BASE64.encode(bytes.as_ref()))
            .content_type("application/octet-stream")
    }

    pub fn content_type<S: Into<String>>(mut self, content_type: S) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Inverts the match: the request must NOT carry this body.
    pub fn negated(mut self) -> Self {
        self.not = Some(true);
        self
    }
}
