// Lexical feature extraction — TF-IDF over a vocabulary frozen at training.
//
// Each training example is a separate document for IDF computation, so
// tokens shared across the whole corpus get downweighted while tokens
// distinctive to a few examples get boosted. The vector space is fixed once
// training completes: tokens unseen at training time contribute nothing at
// inference.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

/// Sparse feature vector: vocabulary index -> TF-IDF weight.
/// BTreeMap keeps iteration deterministic.
pub type FeatureVector = BTreeMap<usize, f64>;

/// Split text into lowercase word tokens. Stop words are NOT removed here —
/// vocabulary construction filters them, and at inference they simply miss
/// the frozen vocabulary.
pub fn tokenize(text: &str) -> Vec<String> {
    static WORD: OnceLock<Regex> = OnceLock::new();
    let word = WORD.get_or_init(|| Regex::new(r"[a-z0-9']+").expect("literal word pattern"));

    word.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().trim_matches('\'').to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Vocabulary frozen at training time: token -> index, plus per-index
/// inverse document frequency. Immutable after `build`.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl Vocabulary {
    /// Build the vocabulary from tokenized training documents.
    ///
    /// Stop words (the English list from the stop-words crate) are excluded,
    /// the vocabulary is capped at the `max_features` most frequent tokens
    /// (alphabetical tie-break so the cap is deterministic), and indices are
    /// assigned in sorted token order.
    pub fn build(documents: &[Vec<String>], max_features: usize) -> Self {
        let stops: HashSet<String> = get(LANGUAGE::English).into_iter().collect();

        let mut corpus_freq: HashMap<&str, u64> = HashMap::new();
        let mut doc_freq: HashMap<&str, u64> = HashMap::new();
        for doc in documents {
            let mut seen: HashSet<&str> = HashSet::new();
            for token in doc {
                let token = token.as_str();
                if stops.contains(token) {
                    continue;
                }
                *corpus_freq.entry(token).or_insert(0) += 1;
                if seen.insert(token) {
                    *doc_freq.entry(token).or_insert(0) += 1;
                }
            }
        }

        // Cap at the top max_features by corpus frequency. Ties break
        // alphabetically so two runs always keep the same tokens.
        let mut ranked: Vec<(&str, u64)> = corpus_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(max_features);

        let mut tokens: Vec<&str> = ranked.into_iter().map(|(t, _)| t).collect();
        tokens.sort_unstable();

        let n_docs = documents.len() as f64;
        let mut index = HashMap::with_capacity(tokens.len());
        let mut idf = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let df = doc_freq.get(token).copied().unwrap_or(0) as f64;
            // Smoothed IDF: pretends one extra document contains every token,
            // so no weight is ever zero or infinite.
            idf.push(((1.0 + n_docs) / (1.0 + df)).ln() + 1.0);
            index.insert((*token).to_string(), i);
        }

        Self { index, idf }
    }

    pub fn len(&self) -> usize {
        self.idf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }

    /// The vocabulary tokens in index order.
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = vec![String::new(); self.idf.len()];
        for (token, &i) in &self.index {
            tokens[i] = token.clone();
        }
        tokens
    }

    /// Extract the L2-normalized TF-IDF vector for a text.
    ///
    /// Tokens outside the frozen vocabulary are dropped. Malformed or empty
    /// text yields the empty (zero) vector — never an error.
    pub fn extract(&self, text: &str) -> FeatureVector {
        let mut vector: FeatureVector = BTreeMap::new();
        for token in tokenize(text) {
            if let Some(&i) = self.index.get(&token) {
                *vector.entry(i).or_insert(0.0) += 1.0;
            }
        }

        for (i, weight) in vector.iter_mut() {
            *weight *= self.idf[*i];
        }

        let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in vector.values_mut() {
                *weight /= norm;
            }
        }

        vector
    }
}
