// Terminal rendering for analysis results.

use colored::Colorize;

use crate::analysis::risk::RiskLabel;
use crate::analysis::sentiment;
use crate::db::models::{AnalysisResult, ErrorKind};
use crate::output::truncate_chars;

/// Print one analysis result to the terminal.
pub fn display_analysis(result: &AnalysisResult) {
    println!("\n{}", format!("=== Analysis: {} ===", result.mode).bold());
    println!("  Content: {}", truncate_chars(&result.content, 100).dimmed());

    if let (Some(topic), Some(confidence)) = (result.topic, result.topic_confidence) {
        println!("  Topic: {} ({:.1}% confidence)", topic, confidence * 100.0);
    }

    if let Some(score) = result.sentiment {
        let label = sentiment::label(score);
        let colored_label = match label {
            "Positive" => label.green().to_string(),
            "Negative" => label.red().to_string(),
            _ => label.dimmed().to_string(),
        };
        println!("  Sentiment: {colored_label} ({score:.3})");
    }

    if let (Some(label), Some(confidence)) = (result.risk_label, result.risk_confidence) {
        let colored_desc = match label {
            RiskLabel::High => label.description().red().bold().to_string(),
            RiskLabel::Moderate => label.description().yellow().to_string(),
            RiskLabel::Low => label.description().green().to_string(),
        };
        println!("  Fact check: {colored_desc} ({:.0}% confidence)", confidence * 100.0);
    }

    if let Some(text) = &result.generated_text {
        println!("  Generated response:\n");
        for line in text.lines() {
            println!("    {line}");
        }
    }

    if let Some(error) = &result.error {
        let message = match error {
            ErrorKind::InvalidRequest => "Invalid request: content is required".to_string(),
            ErrorKind::ExtractionDegenerate => "Content produced no usable features".to_string(),
            ErrorKind::GenerationUnavailable { reason } => {
                format!("Generation unavailable: {reason}")
            }
            ErrorKind::PersistenceFailed => "Failed to store the result".to_string(),
        };
        println!("  {}", message.red());
    }
}
