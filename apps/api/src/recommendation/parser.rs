//! Match Response Parser: recovers the model's JSON array from free-form text.
//!
//! The prompt asks for a bare JSON array, but models regularly wrap it in a
//! markdown fence or surround it with prose. Each strategy below is a pure
//! function tried in order; the first one that yields a JSON array wins.
//!
//! No schema enforcement happens here. Fields are copied as found and range
//! checks are left to the assembler.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// First ``` fenced block, optionally tagged `json`.
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").expect("fenced block pattern compiles")
});

/// Widest `[ { ... } ]` span starting at the first array-of-objects opener.
static OBJECT_ARRAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\s*\{[\s\S]*\}\s*\]").expect("object array pattern compiles")
});

type Strategy = fn(&str) -> Option<Vec<Value>>;

const STRATEGIES: [(&str, Strategy); 3] = [
    ("direct", parse_direct),
    ("fenced", parse_fenced),
    ("bracket_scan", parse_bracket_scan),
];

/// One ranked entry as the model wrote it. Ephemeral: lives for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCandidate {
    /// 1-based position in the job list the prompt was built from.
    pub job_index: Option<i64>,
    pub match_score: Option<i64>,
    pub match_reason: Option<String>,
}

impl MatchCandidate {
    fn from_value(value: &Value) -> Self {
        Self {
            job_index: value.get("jobIndex").and_then(integral),
            match_score: value.get("matchScore").and_then(rounded),
            match_reason: value
                .get("matchReason")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// No strategy found a JSON array. `raw` is for server-side logs only.
#[derive(Debug, Clone, Error)]
#[error("could not extract a JSON array from the model response ({} bytes)", .raw.len())]
pub struct RecommendationParseError {
    pub raw: String,
}

/// Runs the strategies in order and returns the entries of the first JSON array found.
pub fn parse_matches(raw: &str) -> Result<Vec<MatchCandidate>, RecommendationParseError> {
    for (name, strategy) in STRATEGIES {
        if let Some(entries) = strategy(raw) {
            debug!(
                "Model response parsed via '{name}' strategy ({} entries)",
                entries.len()
            );
            return Ok(entries.iter().map(MatchCandidate::from_value).collect());
        }
    }

    Err(RecommendationParseError {
        raw: raw.to_string(),
    })
}

/// The whole response is the array.
pub fn parse_direct(text: &str) -> Option<Vec<Value>> {
    parse_array(text)
}

/// The array sits inside a ``` or ```json fence.
pub fn parse_fenced(text: &str) -> Option<Vec<Value>> {
    let captures = FENCED_BLOCK.captures(text)?;
    parse_array(captures.get(1)?.as_str())
}

/// The array is embedded somewhere in prose.
pub fn parse_bracket_scan(text: &str) -> Option<Vec<Value>> {
    let found = OBJECT_ARRAY.find(text)?;
    parse_array(found.as_str())
}

fn parse_array(text: &str) -> Option<Vec<Value>> {
    serde_json::from_str::<Vec<Value>>(text.trim()).ok()
}

/// Accepts `2`, `2.0` and `"2"`; anything fractional or non-numeric is absent.
fn integral(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Scores may come back as `87.5`; they are rounded to the nearest integer.
fn rounded(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f.round() as i64),
        _ => None,
    }
}
