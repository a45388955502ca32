use crate::prelude::*;
use colored::Colorize;
use xword_core::suggestions::wordplay_suggestions;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct WordplayOptions {
    /// Phrase to riff on
    #[arg(value_name = "PHRASE", required = true, num_args = 1..)]
    pub phrase: Vec<String>,
}

pub fn run(options: WordplayOptions, _global: crate::Global) -> Result<()> {
    let phrase = options.phrase.join(" ");
    let suggestions = wordplay_suggestions(&phrase);
    print!("{}", format_wordplay_text(&phrase, &suggestions));
    Ok(())
}

fn format_wordplay_text(phrase: &str, suggestions: &[String]) -> String {
    let mut result = format!(
        "\n{} {}\n{}\n",
        "Wordplay suggestions for:".bright_white().bold(),
        phrase.bright_cyan(),
        "-".repeat(60)
    );
    for (idx, suggestion) in suggestions.iter().enumerate() {
        result.push_str(&format!("{}. {suggestion}\n", idx + 1));
    }
    result.push('\n');
    result
}
