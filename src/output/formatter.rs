//! Output formatters for analysis reports

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::report::{Alignment, AnalysisReport};
use colored::{Color, Colorize};

/// Trait for rendering an analysis report into one output format.
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and truncated term lists.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
    max_terms_shown: usize,
    low_confidence_threshold: f64,
}

/// JSON formatter for scripting and downstream tooling.
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for reports saved to file.
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Dispatches a report to the formatter matching the requested format.
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(config: &Config, detailed: bool) -> Self {
        Self {
            use_colors: config.output.color_output,
            detailed,
            max_terms_shown: config.output.max_terms_shown,
            low_confidence_threshold: config.scoring.low_confidence_threshold,
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn alignment_color(alignment: Alignment) -> Color {
        match alignment {
            Alignment::Strong => Color::Green,
            Alignment::Moderate => Color::Yellow,
            Alignment::Low => Color::Red,
        }
    }

    fn term_list(&self, terms: &[String], empty_message: &str) -> String {
        if terms.is_empty() {
            return empty_message.to_string();
        }
        let shown: Vec<&str> = terms
            .iter()
            .take(self.max_terms_shown)
            .map(|t| t.as_str())
            .collect();
        let mut line = shown.join(", ");
        if terms.len() > self.max_terms_shown {
            line.push_str(&format!(" (+{} more)", terms.len() - self.max_terms_shown));
        }
        line
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        let score_line = format!("{:.2}%", report.match_score.percentage);
        out.push_str("Resume-Job Match Score\n");
        out.push_str(&format!(
            "  {}  [{}]\n",
            self.paint(&score_line, Self::alignment_color(report.alignment)),
            report.alignment
        ));

        out.push_str("\nMatching Keywords\n");
        out.push_str(&format!(
            "  {}\n",
            self.term_list(&report.match_score.matched, "No strong matches found.")
        ));

        out.push_str("\nMissing Keywords\n");
        out.push_str(&format!(
            "  {}\n",
            self.term_list(&report.match_score.missing, "No major gaps detected.")
        ));

        out.push_str("\nInterpretation\n");
        out.push_str(&format!("  {}\n", report.alignment.summary()));

        if let Some(recommendation) = &report.role_recommendation {
            out.push_str("\nBest-Fit Job Role\n");
            if recommendation.is_strong_fit(self.low_confidence_threshold) {
                out.push_str(&format!(
                    "  {} ({}% confidence)\n",
                    self.paint(&recommendation.label, Color::Cyan),
                    recommendation.confidence
                ));
            } else {
                out.push_str(
                    "  No strong role fit detected based on keyword similarity. \
                     Human review may still identify suitable roles.\n",
                );
            }
        }

        if self.detailed {
            out.push_str("\nDetails\n");
            out.push_str(&format!(
                "  Resume: {} words, {} characters\n",
                report.resume_stats.word_count, report.resume_stats.character_count
            ));
            out.push_str(&format!(
                "  Job description: {} words, {} characters\n",
                report.job_stats.word_count, report.job_stats.character_count
            ));
            out.push_str(&format!(
                "  Processing time: {}ms\n",
                report.processing_time_ms
            ));
            out.push_str(&format!("  Generated: {}\n", report.generated_at));
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn term_section(terms: &[String], empty_message: &str) -> String {
        if terms.is_empty() {
            format!("_{}_\n", empty_message)
        } else {
            terms
                .iter()
                .map(|term| format!("- {}\n", term))
                .collect::<String>()
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Resume Analysis Report\n\n");
        out.push_str(&format!(
            "**Match score:** {:.2}% ({} alignment)\n\n",
            report.match_score.percentage, report.alignment
        ));
        out.push_str(&format!("> {}\n\n", report.alignment.summary()));

        out.push_str("## Matching Keywords\n\n");
        out.push_str(&Self::term_section(
            &report.match_score.matched,
            "No strong matches found.",
        ));

        out.push_str("\n## Missing Keywords\n\n");
        out.push_str(&Self::term_section(
            &report.match_score.missing,
            "No major gaps detected.",
        ));

        if let Some(recommendation) = &report.role_recommendation {
            out.push_str("\n## Best-Fit Job Role\n\n");
            out.push_str(&format!(
                "**{}** ({}% confidence)\n",
                recommendation.label, recommendation.confidence
            ));
        }

        if self.include_metadata {
            out.push_str("\n---\n\n");
            out.push_str(&format!(
                "Generated {} in {}ms. Resume: {} words. Job description: {} words.\n",
                report.generated_at,
                report.processing_time_ms,
                report.resume_stats.word_count,
                report.job_stats.word_count
            ));
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new(config: &Config, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(config, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(detailed),
        }
    }

    pub fn generate(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}
