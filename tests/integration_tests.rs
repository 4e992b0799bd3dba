//! Integration tests for the resume analyzer

use resume_analyzer::config::{Config, RoleProfile};
use resume_analyzer::error::ResumeAnalyzerError;
use resume_analyzer::input::manager::InputManager;
use resume_analyzer::output::report::Alignment;
use resume_analyzer::processing::analyzer::AnalysisEngine;
use resume_analyzer::processing::matcher::MatchScorer;
use resume_analyzer::processing::normalizer::TextNormalizer;
use resume_analyzer::processing::recommender::RoleRecommender;
use std::collections::HashSet;
use std::path::Path;

#[test]
fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path);
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Jane Rivera"));
    assert!(text.contains("Data Analyst"));
    assert!(text.contains("Python"));
    assert!(text.contains("pandas"));
}

#[test]
fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path);
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Jane Rivera"));
    assert!(text.contains("Python"));
    assert!(text.contains("SQL"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[test]
fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    // First extraction
    let text1 = manager.extract_text(path).unwrap();
    assert_eq!(manager.cache_size(), 1);

    // Second extraction should use cache
    let text2 = manager.extract_text(path).unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[test]
fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path);
    assert!(matches!(
        result,
        Err(ResumeAnalyzerError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_pdf_input_is_rejected() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/legacy_resume.pdf");

    let result = manager.extract_text(path);
    assert!(matches!(
        result,
        Err(ResumeAnalyzerError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path);
    assert!(result.is_err());
}

#[test]
fn test_score_match_is_deterministic() {
    let scorer = MatchScorer::new();
    let candidate = "python sql data analysis pandas reporting";
    let reference = "python sql dashboards statistics reporting";

    let first = scorer.score_match(candidate, reference);
    let second = scorer.score_match(candidate, reference);

    assert_eq!(first, second);
}

#[test]
fn test_score_percentage_symmetric_partitions_asymmetric() {
    let scorer = MatchScorer::new();
    let a = "python sql data analysis pandas";
    let b = "python java backend sql development";

    let forward = scorer.score_match(a, b);
    let backward = scorer.score_match(b, a);

    assert_eq!(forward.percentage, backward.percentage);
    assert_ne!(forward.missing, backward.missing);
    assert!(forward.missing.contains(&"java".to_string()));
    assert!(backward.missing.contains(&"pandas".to_string()));
}

#[test]
fn test_self_similarity_is_full_score() {
    let scorer = MatchScorer::new();
    let text = "python sql data analysis pandas numpy statistics";

    let score = scorer.score_match(text, text);

    assert_eq!(score.percentage, 100.0);
    assert!(score.missing.is_empty());
}

#[test]
fn test_disjoint_vocabularies_yield_zero() {
    let scorer = MatchScorer::new();

    let score = scorer.score_match("excellent team player", "python java backend development");

    assert_eq!(score.percentage, 0.0);
    assert!(score.matched.is_empty());
    assert_eq!(
        score.missing,
        vec!["python", "java", "backend", "development"]
    );
}

#[test]
fn test_empty_input_degradation() {
    let scorer = MatchScorer::new();

    let score = scorer.score_match("", "");

    assert_eq!(score.percentage, 0.0);
    assert!(score.matched.is_empty());
    assert!(score.missing.is_empty());
}

#[test]
fn test_matched_missing_partition_is_complete() {
    let normalizer = TextNormalizer::new();
    let scorer = MatchScorer::new();
    let candidate = normalizer.normalize("Python developer with SQL and cloud experience.");
    let reference =
        normalizer.normalize("Looking for Python, SQL, Kubernetes and cloud deployment skills.");

    let score = scorer.score_match(&candidate, &reference);

    // Every non-stop-word reference term lands in exactly one list.
    let matched: HashSet<&String> = score.matched.iter().collect();
    let missing: HashSet<&String> = score.missing.iter().collect();
    assert!(matched.is_disjoint(&missing));

    let stop_words = resume_analyzer::processing::stop_words::english_stop_words();
    for term in reference.split_whitespace() {
        if stop_words.contains(term) {
            continue;
        }
        let term = term.to_string();
        assert!(
            matched.contains(&term) ^ missing.contains(&term),
            "term {} not in exactly one list",
            term
        );
    }
}

#[test]
fn test_role_tie_break_is_deterministic() {
    let recommender = RoleRecommender::new();
    let profiles = vec![
        RoleProfile::new("Alpha", "python sql reporting"),
        RoleProfile::new("Beta", "python sql reporting"),
    ];

    for _ in 0..10 {
        let recommendation = recommender.recommend("python reporting", &profiles).unwrap();
        assert_eq!(recommendation.label, "Alpha");
    }
}

#[test]
fn test_role_recommendation_concrete_scenario() {
    let recommender = RoleRecommender::new();
    let candidate = "python sql data analysis pandas";
    let profiles = vec![
        RoleProfile::new("Data Analyst", "python sql data analysis pandas numpy"),
        RoleProfile::new("Web Developer", "html css javascript"),
    ];

    let recommendation = recommender.recommend(candidate, &profiles).unwrap();
    assert_eq!(recommendation.label, "Data Analyst");
    assert!(recommendation.confidence > 50.0);

    // Against the web profile alone there is no shared vocabulary.
    let web_only = vec![RoleProfile::new("Web Developer", "html css javascript")];
    let recommendation = recommender.recommend(candidate, &web_only).unwrap();
    assert_eq!(recommendation.confidence, 0.0);
}

#[test]
fn test_end_to_end_analysis_from_fixtures() {
    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .unwrap();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .unwrap();

    let engine = AnalysisEngine::new(Config::default());
    let report = engine.analyze(&resume_text, &job_text, true).unwrap();

    assert!(report.match_score.percentage > 0.0);
    assert!(report.match_score.matched.contains(&"python".to_string()));
    assert!(report.match_score.matched.contains(&"pandas".to_string()));
    assert!(report.match_score.missing.contains(&"tableau".to_string()));

    let recommendation = report.role_recommendation.as_ref().unwrap();
    assert_eq!(recommendation.label, "Data Analyst");
    assert!(recommendation.confidence > 0.0);

    assert!(report.resume_stats.word_count > 0);
    assert!(report.job_stats.word_count > 0);
}

#[test]
fn test_low_confidence_policy() {
    let config = Config::default();
    let normalizer = TextNormalizer::new();
    let recommender = RoleRecommender::new();

    let candidate = normalizer.normalize("Gardening, pottery and birdwatching enthusiast.");
    let recommendation = recommender.recommend(&candidate, &config.profiles).unwrap();

    // A weak score is still a valid recommendation; the presentation
    // policy decides whether to show it.
    assert!(!recommendation.is_strong_fit(config.scoring.low_confidence_threshold));
    assert!(!recommendation.label.is_empty());
}

#[test]
fn test_alignment_band_matches_score() {
    let engine = AnalysisEngine::new(Config::default());
    let text = "python sql data analysis pandas";

    let report = engine.analyze(text, text, false).unwrap();

    assert_eq!(report.match_score.percentage, 100.0);
    assert_eq!(report.alignment, Alignment::Strong);
}

#[test]
fn test_custom_profile_table_substitution() {
    let mut config = Config::default();
    config.profiles = vec![RoleProfile::new("Rust Engineer", "rust cargo tokio systems")];

    let engine = AnalysisEngine::new(config);
    let report = engine
        .analyze("rust systems programming", "rust backend role", true)
        .unwrap();

    let recommendation = report.role_recommendation.unwrap();
    assert_eq!(recommendation.label, "Rust Engineer");
    assert!(recommendation.confidence > 0.0);
}
