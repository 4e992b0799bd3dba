//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
    /// Role-profile table the recommender ranks resumes against.
    /// Read-only at runtime; edit the config file or construct a custom
    /// `Config` to substitute a different table.
    pub profiles: Vec<RoleProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Match percentage at or above which alignment is reported as strong.
    pub strong_alignment_threshold: f64,
    /// Match percentage at or above which alignment is reported as moderate.
    pub moderate_alignment_threshold: f64,
    /// Role confidence below which the recommendation is presented as
    /// "no strong fit".
    pub low_confidence_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    /// Maximum matched/missing terms shown per list on the console.
    pub max_terms_shown: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

/// One labeled bag of representative keywords.
///
/// Keyword text is stored in normalized form (lowercase alphabetic words
/// separated by single spaces) so it enters the vectorizer directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub label: String,
    pub keywords: String,
}

impl RoleProfile {
    pub fn new(label: &str, keywords: &str) -> Self {
        Self {
            label: label.to_string(),
            keywords: keywords.to_string(),
        }
    }
}

/// The reference role-profile table.
pub fn default_profiles() -> Vec<RoleProfile> {
    vec![
        RoleProfile::new(
            "Data Analyst",
            "python sql data analysis pandas numpy matplotlib statistics \
             machine learning data preprocessing exploratory data analysis \
             research reporting visualization",
        ),
        RoleProfile::new(
            "Business Analyst",
            "business analysis stakeholder requirements documentation \
             reporting communication decision making",
        ),
        RoleProfile::new(
            "HR / Talent Acquisition",
            "recruitment hiring onboarding hr operations communication",
        ),
        RoleProfile::new(
            "Web Developer",
            "html css javascript react django flask web development",
        ),
        RoleProfile::new(
            "Operations / Coordinator",
            "operations coordination scheduling reporting process management",
        ),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                strong_alignment_threshold: 70.0,
                moderate_alignment_threshold: 40.0,
                low_confidence_threshold: 20.0,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
                max_terms_shown: 30,
            },
            profiles: default_profiles(),
        }
    }
}

impl Config {
    /// Load from the platform config path, writing defaults there on first
    /// run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load from an explicit file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            ResumeAnalyzerError::Configuration(format!("Failed to parse config: {}", e))
        })?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }
}
