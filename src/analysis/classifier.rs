// Topic classification — multinomial Naive Bayes over TF-IDF features.
//
// The model is trained exactly once at process start from the injected
// corpus and is read-only afterwards, so it can be shared across concurrent
// requests without locking. Training is all-or-nothing: any failure aborts
// startup rather than leaving a partially-trained model behind.

use anyhow::Result;
use tracing::info;

use super::corpus::{Topic, TrainingExample};
use super::features::{tokenize, FeatureVector, Vocabulary};

/// Training knobs. Defaults match the production configuration.
#[derive(Debug, Clone)]
pub struct TrainingSettings {
    /// Vocabulary cap: keep the top-K tokens by corpus frequency.
    pub max_features: usize,
    /// Fraction of examples withheld for the diagnostic holdout accuracy.
    /// Values <= 0 disable the holdout entirely.
    pub holdout_fraction: f64,
    /// Seed for the deterministic train/holdout split.
    pub seed: u64,
    /// Laplace smoothing strength.
    pub alpha: f64,
}

impl Default for TrainingSettings {
    fn default() -> Self {
        Self {
            max_features: 1000,
            holdout_fraction: 0.2,
            seed: 42,
            alpha: 1.0,
        }
    }
}

/// Per-class parameters produced by training.
#[derive(Debug, Clone)]
struct ClassProfile {
    topic: Topic,
    log_prior: f64,
    /// ln P(token | class) for every vocabulary index.
    log_likelihood: Vec<f64>,
}

/// A trained topic model: the frozen vocabulary plus per-class priors and
/// likelihoods. Rebuilt wholesale by `train`, never patched incrementally.
pub struct TopicModel {
    vocabulary: Vocabulary,
    /// Sorted by label. Classification scans in order and only a strictly
    /// greater posterior displaces the incumbent, so posterior ties resolve
    /// to the lexicographically smaller label.
    classes: Vec<ClassProfile>,
    /// Diagnostic only. Logged after training; nothing gates on it.
    holdout_accuracy: Option<f64>,
    trained_on: usize,
}

impl TopicModel {
    /// Train a model from labeled examples.
    ///
    /// The train/holdout split is a seeded stride (see `split_examples`), so
    /// two runs over the same corpus and seed produce identical vocabulary,
    /// priors, and predictions.
    pub fn train(examples: &[TrainingExample], settings: &TrainingSettings) -> Result<Self> {
        if examples.is_empty() {
            anyhow::bail!("Cannot train on an empty corpus");
        }

        let (train, holdout) = split_examples(examples, settings);
        if train.is_empty() {
            anyhow::bail!(
                "Training partition is empty (holdout_fraction = {})",
                settings.holdout_fraction
            );
        }

        let documents: Vec<Vec<String>> = train.iter().map(|e| tokenize(&e.text)).collect();
        let vocabulary = Vocabulary::build(&documents, settings.max_features);
        if vocabulary.is_empty() {
            anyhow::bail!("Vocabulary is empty — the corpus reduces to stop words");
        }

        let mut labels: Vec<Topic> = train.iter().map(|e| e.label).collect();
        labels.sort_by_key(|t| t.as_str());
        labels.dedup();

        let vocab_size = vocabulary.len();
        let n_train = train.len() as f64;
        let mut classes = Vec::with_capacity(labels.len());

        for topic in labels {
            let mut weight_sums = vec![0.0f64; vocab_size];
            let mut doc_count = 0usize;
            for example in train.iter().filter(|e| e.label == topic) {
                doc_count += 1;
                for (i, weight) in vocabulary.extract(&example.text) {
                    weight_sums[i] += weight;
                }
            }

            let total: f64 = weight_sums.iter().sum();
            let denom = total + settings.alpha * vocab_size as f64;
            let log_likelihood = weight_sums
                .iter()
                .map(|w| ((w + settings.alpha) / denom).ln())
                .collect();

            classes.push(ClassProfile {
                topic,
                log_prior: (doc_count as f64 / n_train).ln(),
                log_likelihood,
            });
        }

        let mut model = Self {
            vocabulary,
            classes,
            holdout_accuracy: None,
            trained_on: train.len(),
        };

        if !holdout.is_empty() {
            let correct = holdout
                .iter()
                .filter(|e| model.classify(&e.text).0 == e.label)
                .count();
            let accuracy = correct as f64 / holdout.len() as f64;
            model.holdout_accuracy = Some(accuracy);
            info!(
                holdout = holdout.len(),
                accuracy, "Holdout accuracy (diagnostic only)"
            );
        }

        info!(
            classes = model.classes.len(),
            vocabulary = vocab_size,
            examples = model.trained_on,
            "Trained topic model"
        );

        Ok(model)
    }

    /// Classify a text: `(topic, max posterior probability)`.
    ///
    /// Degenerate input — empty text, or text with no vocabulary tokens —
    /// returns `(Topic::Unknown, 0.0)`. Classification never fails.
    pub fn classify(&self, text: &str) -> (Topic, f64) {
        let features = self.vocabulary.extract(text);
        if features.is_empty() {
            return (Topic::Unknown, 0.0);
        }
        self.classify_vector(&features)
    }

    fn classify_vector(&self, features: &FeatureVector) -> (Topic, f64) {
        let log_scores: Vec<f64> = self
            .classes
            .iter()
            .map(|class| {
                class.log_prior
                    + features
                        .iter()
                        .map(|(&i, &w)| w * class.log_likelihood[i])
                        .sum::<f64>()
            })
            .collect();

        // Softmax over log scores for a max-posterior confidence.
        let max = log_scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let exp_scores: Vec<f64> = log_scores.iter().map(|s| (s - max).exp()).collect();
        let total: f64 = exp_scores.iter().sum();

        // Strictly-greater keeps the earlier (lexicographically smaller)
        // label on posterior ties.
        let mut best = 0;
        for (i, score) in exp_scores.iter().enumerate().skip(1) {
            if *score > exp_scores[best] {
                best = i;
            }
        }

        (self.classes[best].topic, exp_scores[best] / total)
    }

    /// Vocabulary tokens in index order (for diagnostics and tests).
    pub fn vocabulary_tokens(&self) -> Vec<String> {
        self.vocabulary.tokens()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Class priors as probabilities, in label order.
    pub fn class_priors(&self) -> Vec<(Topic, f64)> {
        self.classes
            .iter()
            .map(|c| (c.topic, c.log_prior.exp()))
            .collect()
    }

    pub fn holdout_accuracy(&self) -> Option<f64> {
        self.holdout_accuracy
    }

    pub fn trained_on(&self) -> usize {
        self.trained_on
    }
}

/// Deterministic seeded split: with holdout fraction `f` and seed `s`,
/// stride = round(1/f) and example index `i` is held out iff
/// `i % stride == s % stride`. Reproducible, and balanced across a corpus
/// that groups examples by class.
fn split_examples<'a>(
    examples: &'a [TrainingExample],
    settings: &TrainingSettings,
) -> (Vec<&'a TrainingExample>, Vec<&'a TrainingExample>) {
    if settings.holdout_fraction <= 0.0 {
        return (examples.iter().collect(), Vec::new());
    }

    let stride = (1.0 / settings.holdout_fraction).round().max(1.0) as usize;
    let offset = (settings.seed as usize) % stride;

    let mut train = Vec::new();
    let mut holdout = Vec::new();
    for (i, example) in examples.iter().enumerate() {
        if i % stride == offset {
            holdout.push(example);
        } else {
            train.push(example);
        }
    }
    (train, holdout)
}
