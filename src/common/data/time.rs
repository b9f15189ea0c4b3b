use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Time units understood by the mock server.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

/// A delay, used for responses, forwards, errors and delayed socket closing.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Delay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<TimeUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
}

impl Delay {
    pub fn of(value: u64, time_unit: TimeUnit) -> Self {
        Self {
            time_unit: Some(time_unit),
            value: Some(value),
        }
    }

    pub fn milliseconds(value: u64) -> Self {
        Self::of(value, TimeUnit::Milliseconds)
    }

    pub fn seconds(value: u64) -> Self {
        Self::of(value, TimeUnit::Seconds)
    }
}

impl From<Duration> for Delay {
    /// Sub-millisecond precision is lost; the mock server delays in whole milliseconds.
    fn from(duration: Duration) -> Self {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        Self::milliseconds(millis)
    }
}

/// How many times an expectation may still be matched before it is removed.
///
/// An expectation without `times` is matched an unlimited number of times.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Times {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_times: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlimited: Option<bool>,
}

impl Times {
    /// The expectation is matched exactly once.
    pub fn once() -> Self {
        Self::exactly(1)
    }

    pub fn exactly(count: u32) -> Self {
        Self {
            remaining_times: Some(count),
            unlimited: None,
        }
    }

    pub fn unlimited() -> Self {
        Self {
            remaining_times: None,
            unlimited: Some(true),
        }
    }
}

/// Lifetime of an expectation on the mock server.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeToLive {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<TimeUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_live: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlimited: Option<bool>,
}

impl TimeToLive {
    pub fn of(time_to_live: u64, time_unit: TimeUnit) -> Self {
        Self {
            time_unit: Some(time_unit),
            time_to_live: Some(time_to_live),
            unlimited: Some(false),
        }
    }

    pub fn unlimited() -> Self {
        Self {
            time_unit: None,
            time_to_live: None,
            unlimited: Some(true),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn once_sets_remaining_times_only() {
        let value = serde_json::to_value(Times::once()).unwrap();
        assert_eq!(value, json!({ "remainingTimes": 1 }));
        assert_eq!(Times::once().unlimited, None);
    }

    #[test]
    fn explicit_zero_is_kept() {
        let value = serde_json::to_value(Times::exactly(0)).unwrap();
        assert_eq!(value, json!({ "remainingTimes": 0 }));
    }

    #[test]
    fn time_to_live_uses_screaming_units() {
        let value = serde_json::to_value(TimeToLive::of(30, TimeUnit::Seconds)).unwrap();
        assert_eq!(
            value,
            json!({ "timeUnit": "SECONDS", "timeToLive": 30, "unlimited": false })
        );
    }

    #[test]
    fn delay_from_duration_is_in_milliseconds() {
        let delay = Delay::from(Duration::from_secs(2));
        assert_eq!(delay, Delay::of(2000, TimeUnit::Milliseconds));
        assert_eq!(
            serde_json::to_value(delay).unwrap(),
            json!({ "timeUnit": "MILLISECONDS", "value": 2000 })
        );
    }
}
