// Unit tests for the sentiment and misinformation-risk scorers.
//
// The risk scorer's confidence set {0.3, 0.6, 0.8} and its inverse relation
// to the tier are load-bearing contract, tested exhaustively here.

use lantern::analysis::risk::{self, RiskLabel, SUSPICIOUS_PHRASES};
use lantern::analysis::sentiment;

// ============================================================
// Risk bands — thresholds and the fixed confidence set
// ============================================================

#[test]
fn risk_confidence_is_always_one_of_three_values() {
    let inputs = [
        "",
        "plain text with no markers",
        "guaranteed",
        "guaranteed miracle",
        "guaranteed miracle secret",
        "100% guaranteed miracle secret never always",
        "NEVER say never",
    ];
    for text in inputs {
        let (_, confidence) = risk::assess(text);
        assert!(
            [0.3, 0.6, 0.8].contains(&confidence),
            "{text:?} produced confidence {confidence}"
        );
    }
}

#[test]
fn zero_markers_is_low_with_confidence_08() {
    let (label, confidence) = risk::assess("Our staff can answer questions about services.");
    assert_eq!(label, RiskLabel::Low);
    assert_eq!(confidence, 0.8);
}

#[test]
fn boundary_two_markers_is_moderate() {
    let (label, confidence) = risk::assess("a guaranteed and secret method");
    assert_eq!(label, RiskLabel::Moderate);
    assert_eq!(confidence, 0.6);
}

#[test]
fn boundary_three_markers_is_high() {
    let (label, confidence) = risk::assess("guaranteed secret miracle");
    assert_eq!(label, RiskLabel::High);
    assert_eq!(confidence, 0.3);
}

#[test]
fn confidence_inverts_risk_tier() {
    // The deliberate inversion: the higher the apparent risk, the lower the
    // confidence in the label.
    let (_, low) = risk::assess("nothing odd here");
    let (_, moderate) = risk::assess("guaranteed results");
    let (_, high) = risk::assess("100% guaranteed miracle secret cure");
    assert!(low > moderate && moderate > high);
}

#[test]
fn spec_scenario_high_risk_phrase() {
    let (label, confidence) = risk::assess("100% guaranteed miracle secret cure");
    assert_eq!(label, RiskLabel::High);
    assert_eq!(confidence, 0.3);
}

#[test]
fn marker_matching_ignores_case_and_position() {
    let (label, _) = risk::assess("AlWaYs TRUST this SECRET MiRaClE");
    assert_eq!(label, RiskLabel::High);
}

#[test]
fn markers_match_as_substrings() {
    // "never" inside "nevertheless" still counts — substring semantics
    let (label, confidence) = risk::assess("nevertheless, a fine day");
    assert_eq!(label, RiskLabel::Moderate);
    assert_eq!(confidence, 0.6);
}

#[test]
fn repeated_marker_counts_once() {
    let (label, confidence) = risk::assess("miracle miracle miracle miracle");
    assert_eq!(label, RiskLabel::Moderate);
    assert_eq!(confidence, 0.6);
}

#[test]
fn every_marker_alone_is_moderate() {
    for phrase in SUSPICIOUS_PHRASES {
        let (label, confidence) = risk::assess(phrase);
        assert_eq!(label, RiskLabel::Moderate, "marker {phrase:?}");
        assert_eq!(confidence, 0.6);
    }
}

#[test]
fn risk_label_descriptions() {
    assert_eq!(RiskLabel::Low.description(), "Low risk of misinformation");
    assert_eq!(
        RiskLabel::Moderate.description(),
        "Moderate risk of misinformation"
    );
    assert_eq!(RiskLabel::High.description(), "High risk of misinformation");
}

// ============================================================
// Sentiment — range, zero policy, display buckets
// ============================================================

#[test]
fn sentiment_of_empty_text_is_exactly_zero() {
    assert_eq!(sentiment::score(""), 0.0);
}

#[test]
fn sentiment_stays_in_range_for_varied_input() {
    let inputs = [
        "wonderful caring helpful staff",
        "awful manipulative deceptive place",
        "the building is on the corner",
        "very very very good good good",
        "not good not bad",
        "100% guaranteed miracle secret cure",
    ];
    for text in inputs {
        let score = sentiment::score(text);
        assert!(
            (-1.0..=1.0).contains(&score),
            "{text:?} scored {score}"
        );
    }
}

#[test]
fn sentiment_sign_matches_tone() {
    assert!(sentiment::score("kind, supportive, and honest") > 0.0);
    assert!(sentiment::score("deceptive and harmful lies") < 0.0);
}

#[test]
fn sentiment_is_deterministic() {
    let text = "very helpful but somewhat misleading";
    assert_eq!(sentiment::score(text), sentiment::score(text));
}

#[test]
fn exact_zero_is_its_own_display_bucket() {
    assert_eq!(sentiment::label(0.0), "Neutral");
    assert_eq!(sentiment::label(f64::MIN_POSITIVE), "Positive");
    assert_eq!(sentiment::label(-f64::MIN_POSITIVE), "Negative");
}
