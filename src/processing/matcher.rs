//! Resume / job-description match scoring

use crate::processing::vectorizer::{cosine_similarity, to_percentage, TfIdfVectorizer};
use serde::{Deserialize, Serialize};

/// Outcome of scoring one resume against one job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    /// Cosine similarity as a percentage, rounded to 2 decimal places.
    pub percentage: f64,
    /// Job-description terms that also appear in the resume, in vocabulary order.
    pub matched: Vec<String>,
    /// Job-description terms absent from the resume, in vocabulary order.
    pub missing: Vec<String>,
}

/// Scores a candidate resume against a reference job description.
pub struct MatchScorer {
    vectorizer: TfIdfVectorizer,
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchScorer {
    pub fn new() -> Self {
        Self {
            vectorizer: TfIdfVectorizer::new(),
        }
    }

    pub fn with_vectorizer(vectorizer: TfIdfVectorizer) -> Self {
        Self { vectorizer }
    }

    /// Score a candidate resume against a reference job description.
    ///
    /// Both inputs must already be in normalized form. The vocabulary is
    /// built fresh from exactly these two documents; every job-description
    /// term lands in exactly one of `matched` or `missing`. Terms that
    /// occur only in the resume are reported in neither list, since they
    /// indicate neither alignment nor a gap relative to the job
    /// description. Degenerate inputs (empty or stop-word-only text) score
    /// 0.0 with empty lists.
    pub fn score_match(&self, candidate_text: &str, reference_text: &str) -> MatchScore {
        let document_vectors = self
            .vectorizer
            .build_vectors(&[candidate_text, reference_text]);
        let candidate_vector = &document_vectors.vectors[0];
        let reference_vector = &document_vectors.vectors[1];

        let similarity = cosine_similarity(candidate_vector, reference_vector);

        let mut matched = Vec::new();
        let mut missing = Vec::new();
        for (term_idx, term) in document_vectors.vocabulary.iter().enumerate() {
            if reference_vector[term_idx] > 0.0 {
                if candidate_vector[term_idx] > 0.0 {
                    matched.push(term.clone());
                } else {
                    missing.push(term.clone());
                }
            }
        }

        MatchScore {
            percentage: to_percentage(similarity),
            matched,
            missing,
        }
    }
}
