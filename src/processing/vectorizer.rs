//! TF-IDF vector construction and cosine similarity

use crate::processing::stop_words::english_stop_words;
use log::debug;
use std::collections::{HashMap, HashSet};

/// Shared vocabulary and per-document weight vectors for one scoring call.
///
/// Positional index is shared: `vectors[d][i]` is the weight of
/// `vocabulary[i]` in document `d`. Nothing here outlives the call that
/// produced it; vocabularies are never merged across calls.
#[derive(Debug, Clone)]
pub struct DocumentVectors {
    /// Distinct non-stop-word tokens in first-seen order across the corpus.
    pub vocabulary: Vec<String>,
    /// One L2-normalized TF-IDF vector per input document.
    pub vectors: Vec<Vec<f64>>,
}

/// Builds TF-IDF weight vectors over a small document corpus.
pub struct TfIdfVectorizer {
    stop_words: HashSet<String>,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfIdfVectorizer {
    /// Vectorizer with the crate's fixed English stop-word list.
    pub fn new() -> Self {
        Self {
            stop_words: english_stop_words(),
        }
    }

    /// Vectorizer with a caller-supplied stop-word set.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        Self { stop_words }
    }

    /// Build the shared vocabulary and one weight vector per document.
    ///
    /// Documents are expected in normalized form (see
    /// [`TextNormalizer`](crate::processing::normalizer::TextNormalizer));
    /// tokenization is a plain whitespace split. Term frequency is the raw
    /// token count and IDF uses the smoothed formulation
    /// `ln((1 + n) / (1 + df)) + 1`, which keeps every vocabulary term at
    /// a positive weight even when it occurs in all documents. Each vector
    /// is scaled to unit length after weighting, so cosine similarity
    /// between two of them reduces to a dot product.
    pub fn build_vectors(&self, documents: &[&str]) -> DocumentVectors {
        let tokenized: Vec<Vec<&str>> = documents
            .iter()
            .map(|document| document.split_whitespace().collect())
            .collect();

        // Vocabulary in first-seen order so every list derived from it is
        // deterministic across runs.
        let mut vocabulary: Vec<String> = Vec::new();
        let mut term_index: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            for &token in tokens {
                if self.stop_words.contains(token) || term_index.contains_key(token) {
                    continue;
                }
                term_index.insert(token, vocabulary.len());
                vocabulary.push(token.to_string());
            }
        }

        let mut document_frequency = vec![0usize; vocabulary.len()];
        let mut vectors = vec![vec![0.0f64; vocabulary.len()]; documents.len()];
        for (doc_idx, tokens) in tokenized.iter().enumerate() {
            for &token in tokens {
                if let Some(&term_idx) = term_index.get(token) {
                    if vectors[doc_idx][term_idx] == 0.0 {
                        document_frequency[term_idx] += 1;
                    }
                    vectors[doc_idx][term_idx] += 1.0;
                }
            }
        }

        let total_docs = documents.len() as f64;
        for vector in &mut vectors {
            let mut norm = 0.0;
            for (term_idx, weight) in vector.iter_mut().enumerate() {
                let idf = ((1.0 + total_docs)
                    / (1.0 + document_frequency[term_idx] as f64))
                    .ln()
                    + 1.0;
                *weight *= idf;
                norm += *weight * *weight;
            }
            let norm = norm.sqrt();
            if norm > 0.0 {
                for weight in vector.iter_mut() {
                    *weight /= norm;
                }
            }
        }

        debug!(
            "Built {} vectors over a vocabulary of {} terms",
            vectors.len(),
            vocabulary.len()
        );

        DocumentVectors { vocabulary, vectors }
    }
}

/// Cosine similarity of two equal-length vectors.
///
/// Returns 0.0 when either vector has zero magnitude (a document that
/// contributed no vocabulary terms) rather than dividing by zero.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let mut dot_product = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (weight_a, weight_b) in a.iter().zip(b.iter()) {
        dot_product += weight_a * weight_b;
        norm_a += weight_a * weight_a;
        norm_b += weight_b * weight_b;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a.sqrt() * norm_b.sqrt())
}

/// Report a similarity in [0, 1] as a percentage rounded to 2 decimals.
pub fn to_percentage(similarity: f64) -> f64 {
    (similarity * 100.0 * 100.0).round() / 100.0
}
