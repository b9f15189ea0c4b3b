use crate::common::data::request::Request;
use serde::{Deserialize, Serialize};

/// Reference to an expectation by its identifier.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectationId {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

impl ExpectationId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self { id: id.into() }
    }
}

impl From<&str> for ExpectationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ExpectationId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// Bounds on how often a request must have been received.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyTimes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at_least: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at_most: Option<u32>,
}

impl VerifyTimes {
    /// The request must never have been received.
    pub fn never_called() -> Self {
        Self::exactly(0)
    }

    pub fn exactly(count: u32) -> Self {
        Self::between(count, count)
    }

    pub fn between(at_least: u32, at_most: u32) -> Self {
        Self {
            at_least: Some(at_least),
            at_most: Some(at_most),
        }
    }

    pub fn at_least(count: u32) -> Self {
        Self {
            at_least: Some(count),
            at_most: None,
        }
    }

    pub fn at_most(count: u32) -> Self {
        Self {
            at_least: None,
            at_most: Some(count),
        }
    }
}

/// Asks the mock server whether a request pattern (or the requests of an expectation) was
/// received a given number of times.
///
/// `times` is only sent when set. Without it the mock server checks that the request was
/// received at least once. Use [`VerifyTimes::never_called`] to assert that a request never
/// arrived.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Verify {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expectation_id: Option<ExpectationId>,
    #[serde(rename = "httpRequest", skip_serializing_if = "Option::is_none")]
    pub request: Option<Request>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<VerifyTimes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_number_of_request_to_return_in_verification_failure: Option<u32>,
}

impl Verify {
    pub fn request(request: Request) -> Self {
        Self {
            request: Some(request),
            ..Self::default()
        }
    }

    pub fn expectation<I: Into<ExpectationId>>(id: I) -> Self {
        Self {
            expectation_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn times(mut self, times: VerifyTimes) -> Self {
        self.times = Some(times);
        self
    }

    /// Caps how many non-matching requests the server echoes back in a failure report.
    pub fn max_requests_in_failure(mut self, max: u32) -> Self {
        self.maximum_number_of_request_to_return_in_verification_failure = Some(max);
        self
    }
}

/// Asks the mock server whether requests were received in a given order.
///
/// The order of `expectation_ids` and `requests` is the expected call order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerifySequence {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expectation_ids: Vec<ExpectationId>,
    #[serde(rename = "httpRequests", default, skip_serializing_if = "Vec::is_empty")]
    pub requests: Vec<Request>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_number_of_request_to_return_in_verification_failure: Option<u32>,
}

impl VerifySequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the expected sequence of expectation identifiers, keeping the given order.
    pub fn with_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expectation_ids = ids.into_iter().map(ExpectationId::new).collect();
        self
    }

    pub fn request(mut self, request: Request) -> Self {
        self.requests.push(request);
        self
    }

    pub fn max_requests_in_failure(mut self, max: u32) -> Self {
        self.maximum_number_of_request_to_return_in_verification_failure = Some(max);
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_expectation_id_serializes_to_empty_object() {
        assert_eq!(serde_json::to_value(ExpectationId::default()).unwrap(), json!({}));
    }

    #[test]
    fn verify_without_times_omits_times() {
        let verify = Verify::request(Request::new().path("/x"));
        assert_eq!(
            serde_json::to_value(&verify).unwrap(),
            json!({ "httpRequest": { "path": "/x" } })
        );
    }

    #[test]
    fn never_called_sends_both_bounds() {
        assert_eq!(
            serde_json::to_value(VerifyTimes::never_called()).unwrap(),
            json!({ "atLeast": 0, "atMost": 0 })
        );
    }

    #[test]
    fn verify_request_shape() {
        let verify = Verify::request(Request::new().path("/hello"))
            .times(VerifyTimes::at_least(2))
            .max_requests_in_failure(5);

        assert_eq!(
            serde_json::to_value(&verify).unwrap(),
            json!({
                "httpRequest": { "path": "/hello" },
                "times": { "atLeast": 2 },
                "maximumNumberOfRequestToReturnInVerificationFailure": 5
            })
        );
    }

    #[test]
    fn verify_expectation_shape() {
        let verify = Verify::expectation("abc").times(VerifyTimes::exactly(1));
        assert_eq!(
            serde_json::to_value(&verify).unwrap(),
            json!({
                "expectationId": { "id": "abc" },
                "times": { "atLeast": 1, "atMost": 1 }
            })
        );
    }

    #[test]
    fn sequence_keeps_id_order() {
        let sequence = VerifySequence::new().with_ids(["x", "y", "z"]);
        assert_eq!(
            sequence.expectation_ids,
            vec![
                ExpectationId::new("x"),
                ExpectationId::new("y"),
                ExpectationId::new("z")
            ]
        );
        assert_eq!(
            serde_json::to_value(&sequence).unwrap(),
            json!({ "expectationIds": [{ "id": "x" }, { "id": "y" }, { "id": "z" }] })
        );
    }

    #[test]
    fn sequence_of_requests() {
        let sequence = VerifySequence::new()
            .request(Request::new().path("/first"))
            .request(Request::new().path("/second"));
        assert_eq!(
            serde_json::to_value(&sequence).unwrap(),
            json!({ "httpRequests": [{ "path": "/first" }, { "path": "/second" }] })
        );
    }
}
