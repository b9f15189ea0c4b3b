use crate::common::data::request::{Cookie, Header, Parameter};
use serde::{Deserialize, Serialize};

/// Rewrites the request path using a regular expression and a substitution.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PathModifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitution: Option<String>,
}

impl PathModifier {
    pub fn new<R: Into<String>, S: Into<String>>(regex: R, substitution: S) -> Self {
        Self {
            regex: Some(regex.into()),
            substitution: Some(substitution.into()),
        }
    }
}

/// Entries to add, replace or remove (by name) from a collection of the forwarded
/// request or its response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Modifications<T> {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add: Vec<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replace: Vec<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove: Vec<String>,
}

impl<T> Default for Modifications<T> {
    fn default() -> Self {
        Self {
            add: Vec::new(),
            replace: Vec::new(),
            remove: Vec::new(),
        }
    }
}

impl<T> Modifications<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, entry: T) -> Self {
        self.add.push(entry);
        self
    }

    pub fn replace(mut self, entry: T) -> Self {
        self.replace.push(entry);
        self
    }

    pub fn remove<S: Into<String>>(mut self, name: S) -> Self {
        self.remove.push(name.into());
        self
    }
}

/// Modifications applied to a request before it is forwarded.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestModifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathModifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_string_parameters: Option<Modifications<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Modifications<Header>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Modifications<Cookie>>,
}

/// Modifications applied to the upstream response before it is returned.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ResponseModifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Modifications<Header>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Modifications<Cookie>>,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_modifier_shape() {
        let modifier = RequestModifier {
            path: Some(PathModifier::new("^/api/(.*)$", "/v2/$1")),
            query_string_parameters: Some(
                Modifications::new().add(Parameter::new("debug", ["true"])),
            ),
            headers: Some(Modifications::new().remove("Authorization")),
            cookies: None,
        };

        assert_eq!(
            serde_json::to_value(&modifier).unwrap(),
            json!({
                "path": { "regex": "^/api/(.*)$", "substitution": "/v2/$1" },
                "queryStringParameters": { "add": [{ "name": "debug", "values": ["true"] }] },
                "headers": { "remove": ["Authorization"] }
            })
        );
    }

    #[test]
    fn response_modifier_shape() {
        let modifier = ResponseModifier {
            headers: Some(Modifications::new().replace(Header::new("Cache-Control", ["no-cache"]))),
            cookies: Some(Modifications::new().add(Cookie::new("a", "b"))),
        };

        assert_eq!(
            serde_json::to_value(&modifier).unwrap(),
            json!({
                "headers": { "replace": [{ "name": "Cache-Control", "values": ["no-cache"] }] },
                "cookies": { "add": [{ "name": "a", "value": "b" }] }
            })
        );
    }
}
