
use crate::error::FeeHistoryError;
use candid::CandidType;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub trait MetricValue {
    fn metric_value(&self) -> f64;
}

impl MetricValue for u32 {
    fn metric_value(&self) -> f64 {
        *self as f64
    }
}

impl MetricValue for u64 {
    fn metric_value(&self) -> f64 {
        *self as f64
    }
}

pub trait MetricLabels {
    fn metric_labels(&self) -> Vec<(&str, &str)>;
}

impl<A: MetricLabels, B: MetricLabels> MetricLabels for (A, B) {
    fn metric_labels(&self) -> Vec<(&str, &str)> {
        [self.0.metric_labels(), self.1.metric_labels()].concat()
    }
}

/// JSON-RPC error code of a failed request, e.g. `-32602`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, CandidType, Deserialize)]
pub struct MetricErrorCode(pub String);

impl MetricLabels for MetricErrorCode {
    fn metric_labels(&self) -> Vec<(&str, &str)> {
        vec![("code", &self.0)]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, CandidType, Deserialize)]
pub struct MetricErrorKind(pub String);

impl MetricLabels for MetricErrorKind {
    fn metric_labels(&self) -> Vec<(&str, &str)> {
        vec![("kind", &self.0)]
    }
}

impl<'a> From<&'a FeeHistoryError> for (MetricErrorCode, MetricErrorKind) {
    fn from(error: &'a FeeHistoryError) -> Self {
        (
            MetricErrorCode(error.code().to_string()),
            MetricErrorKind(error.kind().to_string()),
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, CandidType, Deserialize)]
pub struct Metrics {
    pub requests: u64,
    #[serde(rename = "blocksServed")]
    pub blocks_served: u64,
    pub errors: HashMap<(MetricErrorCode, MetricErrorKind), u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogFilter {
    #[default]
    ShowAll,
    HideAll,
    ShowPattern(RegexString),
    HidePattern(RegexString),
}

impl From<fee_history_types::LogFilter> for LogFilter {
    fn from(value: fee_history_types::LogFilter) -> Self {
        match value {
            fee_history_types::LogFilter::ShowAll => LogFilter::ShowAll,
            fee_history_types::LogFilter::HideAll => LogFilter::HideAll,
            fee_history_types::LogFilter::ShowPattern(regex) => {
                LogFilter::ShowPattern(regex.into())
            }
            fee_history_types::LogFilter::HidePattern(regex) => {
                LogFilter::HidePattern(regex.into())
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RegexString(String);

impl From<fee_history_types::RegexString> for RegexString {
    fn from(value: fee_history_types::RegexString) -> Self {
        RegexString(value.0)
    }
}

impl From<&str> for RegexString {
    fn from(value: &str) -> Self {
        RegexString(value.to_string())
    }
}

impl RegexString {
    pub fn try_is_valid(&self, value: &str) -> Result<bool, regex::Error> {
        Ok(Regex::new(&self.0)?.is_match(value))
    }

    pub fn validate(&self) -> Result<(), regex::Error> {
        Regex::new(&self.0).map(|_| ())
    }
}

impl LogFilter {
    /// Whether a log line is displayed. Lines are never shown through an invalid pattern.
    pub fn is_match(&self, message: &str) -> bool {
        match self {
            Self::ShowAll => true,
            Self::HideAll => false,
            Self::ShowPattern(regex) => regex.try_is_valid(message).unwrap_or(false),
            Self::HidePattern(regex) => !regex.try_is_valid(message).unwrap_or(true),
        }
    }

    pub fn validate(&self) -> Result<(), regex::Error> {
        match self {
            Self::ShowAll | Self::HideAll => Ok(()),
            Self::ShowPattern(regex) | Self::HidePattern(regex) => regex.validate(),
        }
    }
}
