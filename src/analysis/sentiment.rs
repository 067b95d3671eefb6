// Sentiment scoring — lexicon polarity, stateless.
//
// Each matched lexicon word contributes ±1, scaled by a preceding
// intensifier and flipped by a preceding negator (two-token window). The
// score is the mean contribution clamped to [-1, 1]. Text with no lexicon
// hits scores exactly 0.0, and display treats exact zero as its own
// Neutral bucket rather than folding it into either side.

use super::features::tokenize;

const POSITIVE: &[&str] = &[
    "accurate",
    "amazing",
    "awesome",
    "best",
    "calm",
    "caring",
    "clean",
    "comfortable",
    "compassionate",
    "confident",
    "empowering",
    "encouraging",
    "excellent",
    "fantastic",
    "friendly",
    "gentle",
    "good",
    "grateful",
    "great",
    "happy",
    "helpful",
    "honest",
    "hopeful",
    "informative",
    "kind",
    "love",
    "loved",
    "professional",
    "reassuring",
    "reliable",
    "respectful",
    "safe",
    "supportive",
    "thankful",
    "thorough",
    "trusted",
    "trustworthy",
    "welcoming",
    "wonderful",
];

const NEGATIVE: &[&str] = &[
    "abusive",
    "afraid",
    "angry",
    "anxious",
    "awful",
    "bad",
    "coercive",
    "cruel",
    "dangerous",
    "deceptive",
    "dirty",
    "disappointed",
    "dishonest",
    "fear",
    "false",
    "guilt",
    "harmful",
    "hate",
    "horrible",
    "hostile",
    "hurt",
    "judgmental",
    "lies",
    "lying",
    "manipulative",
    "misleading",
    "painful",
    "poor",
    "pressured",
    "rude",
    "sad",
    "scary",
    "shame",
    "terrible",
    "toxic",
    "unsafe",
    "untrustworthy",
    "worst",
    "wrong",
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "nothing", "cannot", "can't", "don't", "doesn't",
    "isn't", "wasn't", "won't", "without", "hardly",
];

const INTENSIFIERS: &[&str] = &[
    "very",
    "really",
    "extremely",
    "absolutely",
    "completely",
    "totally",
    "incredibly",
    "so",
];

/// Score text polarity in [-1, 1]. Pure function of the input; empty or
/// lexicon-free text scores exactly 0.0.
pub fn score(text: &str) -> f64 {
    let tokens = tokenize(text);

    let mut total = 0.0f64;
    let mut hits = 0u32;
    for (i, token) in tokens.iter().enumerate() {
        let token = token.as_str();
        let polarity = if POSITIVE.contains(&token) {
            1.0
        } else if NEGATIVE.contains(&token) {
            -1.0
        } else {
            continue;
        };

        let window = &tokens[i.saturating_sub(2)..i];
        let negated = window.iter().any(|t| NEGATORS.contains(&t.as_str()));
        let intensified = window.iter().any(|t| INTENSIFIERS.contains(&t.as_str()));

        let mut value = polarity;
        if intensified {
            value *= 1.5;
        }
        if negated {
            value = -value;
        }
        total += value;
        hits += 1;
    }

    if hits == 0 {
        0.0
    } else {
        (total / f64::from(hits)).clamp(-1.0, 1.0)
    }
}

/// Display mapping. Exact zero is Neutral — its own bucket.
pub fn label(score: f64) -> &'static str {
    if score > 0.0 {
        "Positive"
    } else if score < 0.0 {
        "Negative"
    } else {
        "Neutral"
    }
}
