use crate::prelude::{println, *};
use colored::Colorize;
use xword_core::analysis::{analyze_theme, AnalysisReport};
use xword_core::guidelines::PuzzleSize;

use super::{resolve_profile, ProfileOverrides};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct AnalyzeOptions {
    /// Theme entries to analyze (quote multi-word entries)
    #[arg(value_name = "ENTRY", required = true, num_args = 1..)]
    pub entries: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[clap(flatten)]
    pub overrides: ProfileOverrides,
}

pub fn run(options: AnalyzeOptions, size: PuzzleSize, global: crate::Global) -> Result<()> {
    let profile = resolve_profile(size, &options.overrides)?;

    if global.verbose {
        println!(
            "Analyzing {} entries against {} guidelines",
            options.entries.len(),
            profile.size.grid()
        );
    }

    let report = analyze_theme(&options.entries, &profile);

    if options.json {
        println!("{}", format_report_json(&report)?);
    } else {
        print!("{}", format_report_text(&report));
    }

    Ok(())
}

fn format_report_json(report: &AnalysisReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn format_report_text(report: &AnalysisReport) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(60).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!(
            "THEME ANALYSIS ({} {})",
            report.profile.size.grid(),
            report.profile.size.label().to_uppercase()
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(60).bright_cyan()));

    result.push_str(&format!(
        "\n{}: {}\n",
        "Theme Entry Count".green(),
        report.entry_count.to_string().bright_white().bold()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Total Theme Length".green(),
        format!("{} letters", report.total_length)
            .bright_white()
            .bold()
    ));

    result.push_str(&format!(
        "\n{}:\n",
        "Individual Entries".bright_white().bold()
    ));
    result.push_str(&format!("{}\n", "-".repeat(60)));
    for (idx, entry) in report.entries.iter().enumerate() {
        result.push_str(&format!(
            "{} {} ({})\n",
            format!("{}.", idx + 1).yellow().bold(),
            entry.text,
            entry.display.bright_black()
        ));
        let message = if entry.valid {
            entry.message.green()
        } else {
            entry.message.red()
        };
        result.push_str(&format!("   {message}\n"));
    }

    if !report.warnings.is_empty() {
        result.push_str(&format!("\n{}:\n", "WARNINGS".bright_yellow().bold()));
        result.push_str(&format!("{}\n", "-".repeat(60)));
        for warning in &report.warnings {
            result.push_str(&format!("  • {}\n", warning.yellow()));
        }
    }

    if !report.suggestions.is_empty() {
        result.push_str(&format!("\n{}:\n", "SUGGESTIONS".bright_green().bold()));
        result.push_str(&format!("{}\n", "-".repeat(60)));
        for suggestion in &report.suggestions {
            result.push_str(&format!("  • {suggestion}\n"));
        }
    }

    result.push_str(&format!("\n{}\n\n", "=".repeat(60).bright_cyan()));
    result
}
