//! Analysis report structures

use crate::config::ScoringConfig;
use crate::processing::matcher::MatchScore;
use crate::processing::recommender::RoleRecommendation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

/// Owned result of one analysis run.
///
/// The report carries everything a caller needs to present the outcome;
/// the engine that produced it keeps no state between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub match_score: MatchScore,
    pub alignment: Alignment,
    pub role_recommendation: Option<RoleRecommendation>,
    pub resume_stats: DocumentStats,
    pub job_stats: DocumentStats,
    pub processing_time_ms: u64,
    pub generated_at: DateTime<Utc>,
}

/// Interpretation band for a match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Strong,
    Moderate,
    Low,
}

impl Alignment {
    pub fn from_percentage(percentage: f64, scoring: &ScoringConfig) -> Self {
        if percentage >= scoring.strong_alignment_threshold {
            Alignment::Strong
        } else if percentage >= scoring.moderate_alignment_threshold {
            Alignment::Moderate
        } else {
            Alignment::Low
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Alignment::Strong => "Strong alignment. Resume is well suited for this role.",
            Alignment::Moderate => "Moderate alignment. Resume can be improved.",
            Alignment::Low => {
                "Low alignment. Consider upskilling or tailoring your resume."
            }
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Strong => write!(f, "Strong"),
            Alignment::Moderate => write!(f, "Moderate"),
            Alignment::Low => write!(f, "Low"),
        }
    }
}

/// Size statistics of a raw input document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub word_count: usize,
    pub character_count: usize,
}

impl DocumentStats {
    pub fn from_text(text: &str) -> Self {
        Self {
            word_count: text.unicode_words().count(),
            character_count: text.chars().count(),
        }
    }
}
