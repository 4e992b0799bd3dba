//! Resume analyzer: resume and job description match scoring tool

use clap::Parser;
use log::{error, info};
use resume_analyzer::cli::{self, Cli, Commands, ConfigAction};
use resume_analyzer::config::Config;
use resume_analyzer::error::{Result, ResumeAnalyzerError};
use resume_analyzer::input::manager::InputManager;
use resume_analyzer::output::formatter::ReportGenerator;
use resume_analyzer::processing::analyzer::AnalysisEngine;
use resume_analyzer::processing::normalizer::TextNormalizer;
use resume_analyzer::processing::recommender::RoleRecommender;
use std::process;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            roles,
            detailed,
            output,
            save,
        } => {
            info!("Starting resume analysis");

            // Validate input files
            cli::validate_file_extension(&resume, &["txt", "md"])
                .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;

            cli::validate_file_extension(&job, &["txt", "md"]).map_err(|e| {
                ResumeAnalyzerError::InvalidInput(format!("Job description file: {}", e))
            })?;

            // Parse output format
            let output_format =
                cli::parse_output_format(&output).map_err(ResumeAnalyzerError::InvalidInput)?;

            println!("📄 Resume: {}", resume.display());
            println!("💼 Job Description: {}", job.display());

            // Extract text from both documents
            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume)?;
            let job_text = input_manager.extract_text(&job)?;

            info!(
                "Extracted {} characters of resume text, {} of job description",
                resume_text.len(),
                job_text.len()
            );

            // Run the analysis
            let engine = AnalysisEngine::new(config.clone());
            let report = engine.analyze(&resume_text, &job_text, roles)?;

            // Render the report
            let generator = ReportGenerator::new(&config, detailed);
            let rendered = generator.generate(&report, &output_format)?;

            match save {
                Some(path) => {
                    std::fs::write(&path, &rendered)?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => {
                    println!("\n{}", rendered);
                }
            }
        }

        Commands::Recommend { resume } => {
            info!("Starting role recommendation");

            cli::validate_file_extension(&resume, &["txt", "md"])
                .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume)?;

            let normalizer = TextNormalizer::new();
            let normalized = normalizer.normalize(&resume_text);

            let recommender = RoleRecommender::new();
            let recommendation = recommender.recommend(&normalized, &config.profiles)?;

            if recommendation.is_strong_fit(config.scoring.low_confidence_threshold) {
                println!("🎯 Best-Fit Job Role: {}", recommendation.label);
                println!(
                    "   Role alignment confidence: {}%",
                    recommendation.confidence
                );
            } else {
                println!(
                    "⚠️  No strong role fit detected based on keyword similarity. \
                     Human review may still identify suitable roles."
                );
                println!(
                    "   (Closest profile: {} at {}%)",
                    recommendation.label, recommendation.confidence
                );
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Config file: {}", Config::config_path().display());
                println!("\nScoring Thresholds:");
                println!(
                    "  Strong alignment: {:.1}%",
                    config.scoring.strong_alignment_threshold
                );
                println!(
                    "  Moderate alignment: {:.1}%",
                    config.scoring.moderate_alignment_threshold
                );
                println!(
                    "  Low role confidence: {:.1}%",
                    config.scoring.low_confidence_threshold
                );
                println!("\nRole Profiles:");
                for profile in &config.profiles {
                    println!("  • {}", profile.label);
                }
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }
        },
    }

    Ok(())
}
