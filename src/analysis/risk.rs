// Misinformation-risk scoring — a deterministic rule evaluator.
//
// Counts which of a fixed list of absolute/superlative claim markers appear
// in the text (case-insensitive substrings, each marker at most once) and
// maps the count to a three-tier band. Confidence means confidence that the
// LABEL is correct, so it runs opposite to the tier: zero markers is the
// easy call (0.8), many markers still only weakly support "high" (0.3).
// The inversion is a load-bearing convention — callers and tests rely on it.

use serde::{Deserialize, Serialize};

/// Claim markers that correlate with misinformation.
pub const SUSPICIOUS_PHRASES: &[&str] =
    &["100%", "guaranteed", "miracle", "secret", "never", "always"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLabel {
    Low,
    Moderate,
    High,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Low => "low",
            RiskLabel::Moderate => "moderate",
            RiskLabel::High => "high",
        }
    }

    /// Human-readable result line, as shown to callers.
    pub fn description(&self) -> &'static str {
        match self {
            RiskLabel::Low => "Low risk of misinformation",
            RiskLabel::Moderate => "Moderate risk of misinformation",
            RiskLabel::High => "High risk of misinformation",
        }
    }

    /// Parse a stored label. Unrecognized values map to Low so old rows
    /// stay readable.
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "high" => RiskLabel::High,
            "moderate" => RiskLabel::Moderate,
            _ => RiskLabel::Low,
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How many listed phrases appear in the text.
///
/// Presence, not occurrences: a marker repeated ten times counts once.
pub fn suspicious_count(text: &str) -> usize {
    let lower = text.to_lowercase();
    SUSPICIOUS_PHRASES
        .iter()
        .filter(|phrase| lower.contains(*phrase))
        .count()
}

/// Assess misinformation risk: `(band, confidence the band is correct)`.
///
/// count > 2 → High/0.3; 0 < count <= 2 → Moderate/0.6; count == 0 → Low/0.8.
pub fn assess(text: &str) -> (RiskLabel, f64) {
    match suspicious_count(text) {
        0 => (RiskLabel::Low, 0.8),
        1 | 2 => (RiskLabel::Moderate, 0.6),
        _ => (RiskLabel::High, 0.3),
    }
}
