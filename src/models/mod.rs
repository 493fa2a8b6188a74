//! Shared data models for search, extremum, and dataset reports.
//!
//! These types form the stable JSON API surface produced by
//! `--format=json` and consumed by any presentation layer.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Schema version for report JSON payloads.
///
/// This version follows semver semantics (MAJOR.MINOR.PATCH):
/// - MAJOR: Breaking changes to required fields or field semantics.
/// - MINOR: Backward-compatible additions (new optional fields).
/// - PATCH: Documentation or internal changes only.
pub const REPORT_VERSION: &str = "1.0.0";

/// Wall-clock time measured around a single strategy invocation.
///
/// JSON carries the value as fractional milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "f64", from = "f64")]
pub struct Elapsed(Duration);

impl Elapsed {
    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub fn as_millis_f64(&self) -> f64 {
        self.0.as_secs_f64() * 1000.0
    }
}

impl From<Duration> for Elapsed {
    fn from(duration: Duration) -> Self {
        Elapsed(duration)
    }
}

impl From<Elapsed> for f64 {
    fn from(elapsed: Elapsed) -> Self {
        elapsed.as_millis_f64()
    }
}

impl From<f64> for Elapsed {
    fn from(millis: f64) -> Self {
        if millis.is_finite() && millis > 0.0 {
            Elapsed(Duration::from_secs_f64(millis / 1000.0))
        } else {
            Elapsed(Duration::ZERO)
        }
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} ms", self.as_millis_f64())
    }
}

/// Search strategy that produced a `SearchResult`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    Linear,
    Binary,
}

impl SearchStrategy {
    pub fn label(self) -> &'static str {
        match self {
            SearchStrategy::Linear => "linear",
            SearchStrategy::Binary => "binary",
        }
    }
}

/// Extremum strategy that produced an `ExtremumResult`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtremumStrategy {
    Iterative,
    DivideAndConquer,
}

impl ExtremumStrategy {
    pub fn label(self) -> &'static str {
        match self {
            ExtremumStrategy::Iterative => "iterative",
            ExtremumStrategy::DivideAndConquer => "divide_and_conquer",
        }
    }
}

/// A single record in a binary search trace.
///
/// Probe records are emitted in probe order; at most one terminal
/// `Found` or `NotFound` record closes the trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum TraceStep<T> {
    /// One comparison against the sorted working copy.
    Probe {
        low: usize,
        high: usize,
        mid: usize,
        value: T,
    },
    /// The key was located at `index` in the sorted working copy.
    Found { key: T, index: usize },
    /// The bounds crossed without a match.
    NotFound { key: T },
}

impl<T: fmt::Display> fmt::Display for TraceStep<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceStep::Probe {
                low,
                high,
                mid,
                value,
            } => write!(f, "Low: {low}, High: {high}, Mid: {mid} (Value: {value})"),
            TraceStep::Found { key, index } => write!(f, "Found {key} at index {index}."),
            TraceStep::NotFound { key } => write!(f, "{key} not found in the list."),
        }
    }
}

/// Result of one timed search strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<T> {
    pub strategy: SearchStrategy,
    /// Index of the match, or `-1` in JSON when absent.
    ///
    /// For binary search this indexes the sorted working copy, not the
    /// caller's original ordering.
    #[serde(with = "sentinel_index")]
    pub index: Option<usize>,
    /// Ordered step records. Linear search leaves this empty.
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<TraceStep<T>>,
    pub elapsed: Elapsed,
}

impl<T> SearchResult<T> {
    pub fn found(&self) -> bool {
        self.index.is_some()
    }

    /// Index using the `-1` convention for absent matches.
    pub fn index_or_sentinel(&self) -> i64 {
        self.index.map(|i| i as i64).unwrap_or(-1)
    }
}

/// Result of one timed extremum strategy.
///
/// `maximum` and `minimum` are absent only for an empty dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtremumResult<T> {
    pub strategy: ExtremumStrategy,
    pub maximum: Option<T>,
    pub minimum: Option<T>,
    /// Element comparisons performed by the strategy.
    pub comparisons: u64,
    pub elapsed: Elapsed,
}

/// Top-level payload for `fastfinder search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchComparison<T> {
    pub version: String,
    pub key: T,
    pub dataset_len: usize,
    pub linear: SearchResult<T>,
    pub binary: SearchResult<T>,
}

/// Top-level payload for `fastfinder extremum`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtremumComparison<T> {
    pub version: String,
    pub dataset_len: usize,
    pub iterative: ExtremumResult<T>,
    pub divide_and_conquer: ExtremumResult<T>,
}

/// One equal-width histogram bucket.
///
/// Buckets are half-open `[lower, upper)` except the last, which also
/// includes `upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Top-level payload for `fastfinder overview`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetOverview {
    pub version: String,
    pub count: usize,
    pub maximum: Option<f64>,
    pub minimum: Option<f64>,
    pub average: Option<f64>,
    #[serde(default)]
    pub histogram: Vec<HistogramBin>,
}

/// Serialize `Option<usize>` as a signed index with `-1` for `None`.
mod sentinel_index {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(index: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match index {
            Some(i) => serializer.serialize_i64(*i as i64),
            None => serializer.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Ok(usize::try_from(raw).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_steps_render_human_readable_records() {
        let probe = TraceStep::Probe {
            low: 0,
            high: 5,
            mid: 2,
            value: 3,
        };
        assert_eq!(probe.to_string(), "Low: 0, High: 5, Mid: 2 (Value: 3)");
        assert_eq!(
            TraceStep::Found { key: 8, index: 4 }.to_string(),
            "Found 8 at index 4."
        );
        assert_eq!(
            TraceStep::NotFound { key: 100 }.to_string(),
            "100 not found in the list."
        );
    }

    #[test]
    fn absent_index_serializes_as_minus_one() {
        let result: SearchResult<i64> = SearchResult {
            strategy: SearchStrategy::Linear,
            index: None,
            trace: Vec::new(),
            elapsed: Elapsed::default(),
        };

        let value = serde_json::to_value(&result).expect("serialize");
        assert_eq!(value["index"], -1);
        assert_eq!(value["strategy"], "linear");
        assert!(value.get("trace").is_none());

        let back: SearchResult<i64> = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back.index, None);
        assert_eq!(back.index_or_sentinel(), -1);
    }

    #[test]
    fn search_comparison_deserializes_without_linear_trace() {
        let json = r#"{
            "version": "1.0.0",
            "key": 8.0,
            "dataset_len": 6,
            "linear": {"strategy": "linear", "index": 2, "elapsed": 0.01},
            "binary": {
                "strategy": "binary",
                "index": 4,
                "trace": [
                    {"step": "probe", "low": 0, "high": 5, "mid": 2, "value": 3.0},
                    {"step": "probe", "low": 3, "high": 5, "mid": 4, "value": 8.0},
                    {"step": "found", "key": 8.0, "index": 4}
                ],
                "elapsed": 0.02
            }
        }"#;

        let comparison: SearchComparison<f64> = serde_json::from_str(json).expect("deserialize");
        assert_eq!(comparison.linear.index, Some(2));
        assert!(comparison.linear.trace.is_empty());
        assert_eq!(comparison.binary.index, Some(4));
        assert_eq!(
            comparison.binary.trace.last(),
            Some(&TraceStep::Found { key: 8.0, index: 4 })
        );
    }

    #[test]
    fn trace_steps_are_tagged_in_json() {
        let step = TraceStep::Found { key: 8, index: 4 };
        let value = serde_json::to_value(step).expect("serialize");
        assert_eq!(value["step"], "found");
        assert_eq!(value["key"], 8);
        assert_eq!(value["index"], 4);
    }

    #[test]
    fn elapsed_round_trips_through_milliseconds() {
        let elapsed = Elapsed::from(Duration::from_micros(1500));
        assert!((elapsed.as_millis_f64() - 1.5).abs() < 1e-9);
        assert_eq!(elapsed.to_string(), "1.5000 ms");
        assert_eq!(Elapsed::from(-3.0), Elapsed::default());
    }
}
