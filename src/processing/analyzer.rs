//! Analysis engine coordinating normalization, match scoring and role
//! recommendation

use crate::config::Config;
use crate::error::Result;
use crate::output::report::{Alignment, AnalysisReport, DocumentStats};
use crate::processing::matcher::MatchScorer;
use crate::processing::normalizer::TextNormalizer;
use crate::processing::recommender::RoleRecommender;
use chrono::Utc;
use log::{debug, info};
use std::time::Instant;

/// Coordinates the scoring components over raw input text.
///
/// Stateless between runs: every `analyze` call builds its own
/// vocabularies and returns an owned [`AnalysisReport`].
pub struct AnalysisEngine {
    normalizer: TextNormalizer,
    scorer: MatchScorer,
    recommender: RoleRecommender,
    config: Config,
}

impl AnalysisEngine {
    pub fn new(config: Config) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            scorer: MatchScorer::new(),
            recommender: RoleRecommender::new(),
            config,
        }
    }

    /// Run the full analysis over raw resume and job-description text.
    ///
    /// Both documents are normalized exactly once here; the scoring
    /// components consume the canonical form as-is. The role
    /// recommendation, when requested, runs against the resume only --
    /// never the job description -- and uses a vocabulary independent of
    /// the pairwise match.
    pub fn analyze(
        &self,
        resume_text: &str,
        job_text: &str,
        include_role: bool,
    ) -> Result<AnalysisReport> {
        let started = Instant::now();

        let resume_normalized = self.normalizer.normalize(resume_text);
        let job_normalized = self.normalizer.normalize(job_text);
        debug!(
            "Normalized resume to {} chars, job description to {} chars",
            resume_normalized.len(),
            job_normalized.len()
        );

        let match_score = self.scorer.score_match(&resume_normalized, &job_normalized);
        let alignment = Alignment::from_percentage(match_score.percentage, &self.config.scoring);

        let role_recommendation = if include_role {
            Some(
                self.recommender
                    .recommend(&resume_normalized, &self.config.profiles)?,
            )
        } else {
            None
        };

        let report = AnalysisReport {
            match_score,
            alignment,
            role_recommendation,
            resume_stats: DocumentStats::from_text(resume_text),
            job_stats: DocumentStats::from_text(job_text),
            processing_time_ms: started.elapsed().as_millis() as u64,
            generated_at: Utc::now(),
        };

        info!(
            "Analysis complete: {:.2}% match, {} matched / {} missing terms",
            report.match_score.percentage,
            report.match_score.matched.len(),
            report.match_score.missing.len()
        );

        Ok(report)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
