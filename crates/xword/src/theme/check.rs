use crate::prelude::{println, *};
use colored::Colorize;
use xword_core::guidelines::PuzzleSize;
use xword_core::validation::{validate_entry_length, LengthVerdict};

use super::{resolve_profile, ProfileOverrides};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct CheckOptions {
    /// Entry to check (quote multi-word entries)
    #[arg(value_name = "ENTRY")]
    pub entry: String,

    /// Check against 5x5 mini guidelines instead of 15x15
    #[arg(long)]
    pub mini: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[clap(flatten)]
    pub overrides: ProfileOverrides,
}

pub fn run(options: CheckOptions, _global: crate::Global) -> Result<()> {
    let size = if options.mini {
        PuzzleSize::Mini
    } else {
        PuzzleSize::Standard
    };
    let profile = resolve_profile(size, &options.overrides)?;
    let verdict = validate_entry_length(&options.entry, &profile);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        print!("{}", format_verdict_text(&options.entry, &verdict));
    }

    Ok(())
}

fn format_verdict_text(entry: &str, verdict: &LengthVerdict) -> String {
    let message = if verdict.valid {
        format!("✓ {}", verdict.message).green()
    } else {
        verdict.message.red()
    };

    format!(
        "\n{}: {}\n{}\n\n",
        "Entry".green(),
        entry.bright_white().bold(),
        message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use xword_core::guidelines::GuidelineProfile;

    #[test]
    fn test_format_verdict_valid() {
        let verdict = validate_entry_length("CROSSWORD PUZZLE", &GuidelineProfile::STANDARD);

        let formatted = format_verdict_text("CROSSWORD PUZZLE", &verdict);

        assert!(formatted.contains("CROSSWORD PUZZLE"));
        assert!(formatted.contains("✓ Good length (15 letters)"));
    }

    #[test]
    fn test_format_verdict_invalid() {
        let verdict = validate_entry_length("CROSSWORD", &GuidelineProfile::MINI);

        let formatted = format_verdict_text("CROSSWORD", &verdict);

        assert!(formatted.contains("Entry too long (9 letters)"));
        assert!(!formatted.contains("✓"));
    }
}
