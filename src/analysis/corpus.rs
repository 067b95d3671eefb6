// Topic labels and the training corpus.
//
// The corpus is process-wide state initialized once at startup: training
// receives an immutable slice of examples and the model is rebuilt wholesale
// from it. Keeping the corpus an injected Vec (rather than a literal inside
// the classifier) means a better corpus can be swapped in without touching
// pipeline logic.

use serde::{Deserialize, Serialize};

/// Closed set of content topics.
///
/// Extended only by adding training examples — never mutated at runtime.
/// `Unknown` is the sentinel for text the classifier cannot place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    MedicalServices,
    Information,
    Counseling,
    Misinformation,
    AccurateInfo,
    Manipulation,
    Unknown,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::MedicalServices => "medical_services",
            Topic::Information => "information",
            Topic::Counseling => "counseling",
            Topic::Misinformation => "misinformation",
            Topic::AccurateInfo => "accurate_info",
            Topic::Manipulation => "manipulation",
            Topic::Unknown => "unknown",
        }
    }

    /// Parse a stored label back into a Topic. Unrecognized labels map to
    /// `Unknown` so old rows survive label-set changes.
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "medical_services" => Topic::MedicalServices,
            "information" => Topic::Information,
            "counseling" => Topic::Counseling,
            "misinformation" => Topic::Misinformation,
            "accurate_info" => Topic::AccurateInfo,
            "manipulation" => Topic::Manipulation,
            _ => Topic::Unknown,
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One labeled sentence of the training corpus.
#[derive(Debug, Clone)]
pub struct TrainingExample {
    pub text: String,
    pub label: Topic,
}

impl TrainingExample {
    pub fn new(text: impl Into<String>, label: Topic) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// The built-in training corpus: thirty hand-labeled sentences, five per
/// topic, grouped by class so the stride holdout draws one from each group.
///
/// Hand-curated and intentionally small. Corpus quality improvements happen
/// here; the classifier never needs to change for them.
pub fn default_corpus() -> Vec<TrainingExample> {
    use Topic::*;

    let examples: &[(&str, Topic)] = &[
        // medical_services
        ("Free pregnancy tests and ultrasounds", MedicalServices),
        (
            "Walk in pregnancy testing with same day ultrasound appointments",
            MedicalServices,
        ),
        ("Clinic offers STI screening and prenatal vitamins", MedicalServices),
        ("Nurses provide limited obstetric ultrasound exams", MedicalServices),
        ("Pregnancy confirmation visits and medical referrals", MedicalServices),
        // information
        ("Abortion alternatives and adoption information", Information),
        (
            "Information about parenting adoption and abortion procedures",
            Information,
        ),
        ("Brochures explaining every pregnancy option available", Information),
        (
            "Referral lists for adoption agencies and social services",
            Information,
        ),
        ("Educational pamphlets on fetal development stages", Information),
        // counseling
        ("Crisis pregnancy support and counseling", Counseling),
        ("Free peer counseling for unplanned pregnancy decisions", Counseling),
        ("Emotional support groups after pregnancy loss", Counseling),
        ("Trained advocates offer decision counseling sessions", Counseling),
        ("Confidential counseling for expectant parents", Counseling),
        // misinformation
        ("Medical misinformation about abortion", Misinformation),
        ("False claims linking abortion to breast cancer", Misinformation),
        (
            "Misleading statistics about contraception failure rates",
            Misinformation,
        ),
        ("Debunked myths about abortion causing infertility", Misinformation),
        ("Inaccurate claims about mental health risks", Misinformation),
        // accurate_info
        ("Accurate medical information", AccurateInfo),
        ("Evidence based facts reviewed by licensed physicians", AccurateInfo),
        (
            "Peer reviewed research on reproductive health outcomes",
            AccurateInfo,
        ),
        ("Medically accurate information with cited sources", AccurateInfo),
        ("Factual answers grounded in clinical guidelines", AccurateInfo),
        // manipulation
        ("Emotional manipulation tactics", Manipulation),
        ("Fear based messaging designed to delay decisions", Manipulation),
        (
            "Guilt and shame used to pressure vulnerable clients",
            Manipulation,
        ),
        ("Deceptive advertising that hides the clinic agenda", Manipulation),
        ("High pressure scripts exploiting emotional distress", Manipulation),
    ];

    examples
        .iter()
        .map(|(text, label)| TrainingExample::new(*text, *label))
        .collect()
}
