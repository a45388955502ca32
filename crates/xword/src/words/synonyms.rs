use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use xword_core::suggestions::{SuggestionResult, SYNONYM_QUERY_MAX};

use super::{DatamuseClient, LookupMode, WordLookup};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SynonymOptions {
    /// Phrase to look up (multiple words are joined with spaces)
    #[arg(value_name = "PHRASE", required = true, num_args = 1..)]
    pub phrase: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: SynonymOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Word service: {} ({}s)", global.api_base, global.timeout);
    }

    let client = DatamuseClient::from_global(&global)?;
    let phrase = options.phrase.join(" ");
    let result = suggest_words(&client, &phrase).await;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if let Some(error) = &result.error {
        eprintln!("{}", format_lookup_error(error));
        return Ok(());
    }

    print!("{}", format_suggestions_text(&result));
    Ok(())
}

/// Look up similar-meaning and related words for a phrase
///
/// Lookups run one after the other. Any failure is captured in the result's
/// `error` field with both lists left empty.
pub async fn suggest_words<L>(lookup: &L, phrase: &str) -> SuggestionResult
where
    L: WordLookup + ?Sized,
{
    let synonyms = match lookup
        .lookup(phrase, LookupMode::SimilarMeaning, SYNONYM_QUERY_MAX)
        .await
    {
        Ok(words) => words,
        Err(e) => {
            log::warn!("Synonym lookup for {phrase:?} failed: {e}");
            return SuggestionResult::failed(phrase, e.to_string());
        }
    };

    let related = match lookup
        .lookup(phrase, LookupMode::Triggered, SYNONYM_QUERY_MAX)
        .await
    {
        Ok(words) => words,
        Err(e) => {
            log::warn!("Related-word lookup for {phrase:?} failed: {e}");
            return SuggestionResult::failed(phrase, e.to_string());
        }
    };

    SuggestionResult::found(phrase, synonyms, related)
}

/// Error message plus retry hint shown when a lookup fails
pub fn format_lookup_error(error: &str) -> String {
    format!(
        "{} {}\n{}",
        "Error:".red().bold(),
        error.red(),
        "Check your internet connection and try again.".bright_black()
    )
}

fn format_word_list(title: &str, words: &[String]) -> String {
    let mut result = format!("\n{}:\n", title.bright_white().bold());
    if words.is_empty() {
        result.push_str(&format!("  {}\n", "(none found)".yellow()));
    } else {
        for word in words {
            result.push_str(&format!("  • {}\n", word.to_uppercase()));
        }
    }
    result
}

fn format_suggestions_text(result: &SuggestionResult) -> String {
    let mut text = String::new();

    text.push_str(&format!("\n{}\n", "=".repeat(60).bright_cyan()));
    text.push_str(&format!(
        "{}\n",
        format!("WORD SUGGESTIONS: {}", result.phrase.to_uppercase())
            .bright_cyan()
            .bold()
    ));
    text.push_str(&format!("{}\n", "=".repeat(60).bright_cyan()));

    text.push_str(&format_word_list("Synonyms", &result.synonyms));
    text.push_str(&format_word_list("Related words", &result.related));

    text.push('\n');
    text
}
