//! Reps / Duration Parser
//!
//! Template authors write prescriptions as free text: "10", "30s", "2 min",
//! "10-12", "8 each side", "AMRAP". This module normalizes that text into a
//! numeric value plus unit, renders it back, and scales it by a multiplier.
//!
//! Anything we can't parse (AMRAP, "to failure", ...) passes through `scale`
//! untouched.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static PER_SIDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d+)(\s*(?:each|per)(?:\s+(?:side|leg|arm))?)$").expect("valid regex")
});
static MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d+(?:\.\d+)?)\s*(?:min|mins|minute|minutes)$").expect("valid regex")
});
static SECONDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d+(?:\.\d+)?)\s*(?:s|sec|secs|second|seconds)$").expect("valid regex")
});
static RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*-\s*(\d+)$").expect("valid regex"));
static PLAIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)$").expect("valid regex"));

const SECONDS_STEP: f64 = 5.0;

// ---------------------------------------------------------------------------
/// Parsed Value
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepsUnit {
    Reps,
    Seconds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedReps {
    pub value: f64,
    pub unit: RepsUnit,
    /// Literal text after the number ("each side"), kept for display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl ParsedReps {
    fn reps(value: f64) -> Self {
        Self {
            value,
            unit: RepsUnit::Reps,
            suffix: None,
        }
    }

    fn seconds(value: f64) -> Self {
        Self {
            value,
            unit: RepsUnit::Seconds,
            suffix: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Parse / Format / Scale
// ---------------------------------------------------------------------------

/// Parse a prescription string. Returns `None` for anything unrecognized,
/// including "AMRAP".
pub fn parse(text: &str) -> Option<ParsedReps> {
    let text = text.trim();

    if let Some(caps) = PER_SIDE.captures(text) {
        let value: f64 = caps[1].parse().ok()?;
        return Some(ParsedReps {
            value,
            unit: RepsUnit::Reps,
            suffix: Some(caps[2].to_string()),
        });
    }

    if let Some(caps) = MINUTES.captures(text) {
        let minutes: f64 = caps[1].parse().ok()?;
        return Some(ParsedReps::seconds(minutes * 60.0));
    }

    if let Some(caps) = SECONDS.captures(text) {
        let seconds: f64 = caps[1].parse().ok()?;
        return Some(ParsedReps::seconds(seconds));
    }

    if let Some(caps) = RANGE.captures(text) {
        let low: f64 = caps[1].parse().ok()?;
        let high: f64 = caps[2].parse().ok()?;
        return Some(ParsedReps::reps(((low + high) / 2.0).round()));
    }

    if let Some(caps) = PLAIN.captures(text) {
        let value: f64 = caps[1].parse().ok()?;
        return Some(ParsedReps::reps(value));
    }

    None
}

/// Render a value back to prescription text.
///
/// Reps round to the nearest whole rep (at least 1). Seconds round to the
/// nearest 5 (at least 5) and whole minutes render as "N min".
pub fn format(value: f64, unit: RepsUnit, suffix: Option<&str>) -> String {
    match unit {
        RepsUnit::Reps => {
            let reps = (value.round() as i64).max(1);
            format!("{}{}", reps, suffix.unwrap_or(""))
        }
        RepsUnit::Seconds => {
            let seconds = (((value / SECONDS_STEP).round() * SECONDS_STEP) as i64).max(5);
            if seconds % 60 == 0 {
                format!("{} min", seconds / 60)
            } else {
                format!("{}s", seconds)
            }
        }
    }
}

/// Scale prescription text by `multiplier`. Unparseable text comes back unchanged.
pub fn scale(text: &str, multiplier: f64) -> String {
    match parse(text) {
        Some(parsed) => format(parsed.value * multiplier, parsed.unit, parsed.suffix.as_deref()),
        None => text.to_string(),
    }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_reps() {
        assert_eq!(parse("10"), Some(ParsedReps::reps(10.0)));
        assert_eq!(parse("  8  "), Some(ParsedReps::reps(8.0)));
    }

    #[test]
    fn test_parse_range_uses_midpoint() {
        let parsed = parse("10-12").unwrap();
        assert_eq!(parsed.value, 11.0);
        assert_eq!(parsed.unit, RepsUnit::Reps);

        // 8-11 midpoint is 9.5, rounds up
        assert_eq!(parse("8 - 11").unwrap().value, 10.0);
    }

    #[test]
    fn test_parse_seconds_variants() {
        for text in ["30s", "30 s", "30 sec", "30 seconds", "30SEC"] {
            assert_eq!(parse(text), Some(ParsedReps::seconds(30.0)), "{}", text);
        }
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse("2 min"), Some(ParsedReps::seconds(120.0)));
        assert_eq!(parse("1 minute"), Some(ParsedReps::seconds(60.0)));
        assert_eq!(parse("1.5 minutes"), Some(ParsedReps::seconds(90.0)));
    }

    #[test]
    fn test_parse_per_side_keeps_suffix() {
        let parsed = parse("8 each side").unwrap();
        assert_eq!(parsed.value, 8.0);
        assert_eq!(parsed.unit, RepsUnit::Reps);
        assert_eq!(parsed.suffix.as_deref(), Some(" each side"));

        let parsed = parse("10 per leg").unwrap();
        assert_eq!(parsed.suffix.as_deref(), Some(" per leg"));
    }

    #[test]
    fn test_parse_amrap_and_garbage() {
        assert_eq!(parse("AMRAP"), None);
        assert_eq!(parse("amrap"), None);
        assert_eq!(parse("to failure"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn test_format_reps_floor() {
        assert_eq!(format(0.2, RepsUnit::Reps, None), "1");
        assert_eq!(format(6.6, RepsUnit::Reps, None), "7");
        assert_eq!(format(5.4, RepsUnit::Reps, Some(" each arm")), "5 each arm");
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format(39.9, RepsUnit::Seconds, None), "40s");
        assert_eq!(format(1.0, RepsUnit::Seconds, None), "5s");
        assert_eq!(format(60.0, RepsUnit::Seconds, None), "1 min");
        assert_eq!(format(119.0, RepsUnit::Seconds, None), "2 min");
        assert_eq!(format(90.0, RepsUnit::Seconds, None), "90s");
    }

    #[test]
    fn test_scale_range() {
        assert_eq!(scale("10-12", 1.33), "15");
    }

    #[test]
    fn test_scale_amrap_passes_through() {
        assert_eq!(scale("AMRAP", 0.67), "AMRAP");
        assert_eq!(scale("AMRAP", 1.33), "AMRAP");
    }

    #[test]
    fn test_scale_duration() {
        assert_eq!(scale("30s", 1.33), "40s");
        assert_eq!(scale("30s", 0.67), "20s");
        assert_eq!(scale("1 min", 1.0), "1 min");
    }

    #[test]
    fn test_scale_identity_multiplier() {
        for text in ["10", "45s", "2 min", "8 each side"] {
            assert_eq!(scale(text, 1.0), text);
        }
    }
}
