//! Best-fit role recommendation against a profile table

use crate::config::RoleProfile;
use crate::error::{Result, ResumeAnalyzerError};
use crate::processing::vectorizer::{cosine_similarity, to_percentage, TfIdfVectorizer};
use serde::{Deserialize, Serialize};

/// The closest-matching role profile for a resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRecommendation {
    pub label: String,
    /// Similarity to the winning profile as a percentage, rounded to 2
    /// decimal places.
    pub confidence: f64,
}

impl RoleRecommendation {
    /// Caller-side presentation policy: a low confidence is not an error,
    /// but scores under the threshold should be shown as "no strong fit"
    /// rather than as a recommendation.
    pub fn is_strong_fit(&self, threshold: f64) -> bool {
        self.confidence >= threshold
    }
}

/// Ranks a resume against a set of labeled role profiles.
pub struct RoleRecommender {
    vectorizer: TfIdfVectorizer,
}

impl Default for RoleRecommender {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleRecommender {
    pub fn new() -> Self {
        Self {
            vectorizer: TfIdfVectorizer::new(),
        }
    }

    /// Rank the candidate against every profile and return the best label.
    ///
    /// One vocabulary is built from the candidate plus all profile keyword
    /// texts in their given order; the candidate's vector is compared
    /// against each profile's. A strictly-greater comparison keeps the
    /// earliest profile on exact ties. Always returns a label, even at
    /// confidence 0; an empty profile slice is the only error case.
    pub fn recommend(
        &self,
        candidate_text: &str,
        profiles: &[RoleProfile],
    ) -> Result<RoleRecommendation> {
        if profiles.is_empty() {
            return Err(ResumeAnalyzerError::InvalidInput(
                "role recommendation requires at least one profile".to_string(),
            ));
        }

        let mut documents = Vec::with_capacity(profiles.len() + 1);
        documents.push(candidate_text);
        documents.extend(profiles.iter().map(|profile| profile.keywords.as_str()));

        let document_vectors = self.vectorizer.build_vectors(&documents);
        let candidate_vector = &document_vectors.vectors[0];

        let mut best_index = 0;
        let mut best_similarity = -1.0f64;
        for (profile_idx, profile_vector) in document_vectors.vectors[1..].iter().enumerate() {
            let similarity = cosine_similarity(candidate_vector, profile_vector);
            if similarity > best_similarity {
                best_similarity = similarity;
                best_index = profile_idx;
            }
        }

        Ok(RoleRecommendation {
            label: profiles[best_index].label.clone(),
            confidence: to_percentage(best_similarity),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(label: &str, keywords: &str) -> RoleProfile {
        RoleProfile::new(label, keywords)
    }

    #[test]
    fn test_recommends_closest_profile() {
        let recommender = RoleRecommender::new();
        let profiles = vec![
            profile(
                "Data Analyst",
                "python sql data analysis pandas numpy",
            ),
            profile("Web Developer", "html css javascript"),
        ];

        let recommendation = recommender
            .recommend("python sql data analysis pandas", &profiles)
            .unwrap();

        assert_eq!(recommendation.label, "Data Analyst");
        assert!(recommendation.confidence > 50.0);
    }

    #[test]
    fn test_no_shared_vocabulary_gives_zero_confidence() {
        let recommender = RoleRecommender::new();
        let profiles = vec![profile("Web Developer", "html css javascript")];

        let recommendation = recommender
            .recommend("python sql data analysis pandas", &profiles)
            .unwrap();

        assert_eq!(recommendation.label, "Web Developer");
        assert_eq!(recommendation.confidence, 0.0);
    }

    #[test]
    fn test_tie_break_keeps_first_profile() {
        let recommender = RoleRecommender::new();
        let profiles = vec![
            profile("First", "python sql reporting"),
            profile("Second", "python sql reporting"),
        ];

        let recommendation = recommender
            .recommend("python sql dashboards", &profiles)
            .unwrap();

        assert_eq!(recommendation.label, "First");
    }

    #[test]
    fn test_empty_profile_table_is_rejected() {
        let recommender = RoleRecommender::new();

        let result = recommender.recommend("python sql", &[]);

        assert!(matches!(
            result,
            Err(ResumeAnalyzerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_candidate_still_returns_a_label() {
        let recommender = RoleRecommender::new();
        let profiles = vec![
            profile("Data Analyst", "python sql"),
            profile("Web Developer", "html css"),
        ];

        let recommendation = recommender.recommend("", &profiles).unwrap();

        assert_eq!(recommendation.label, "Data Analyst");
        assert_eq!(recommendation.confidence, 0.0);
    }
}
