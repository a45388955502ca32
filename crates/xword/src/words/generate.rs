use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use xword_core::suggestions::{
    merge_candidates, select_theme_entries, GeneratedEntries, DEFAULT_GENERATE_CAP,
    GENERATE_QUERY_MAX,
};

use super::synonyms::format_lookup_error;
use super::{DatamuseClient, LookupMode, WordLookup};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct GenerateOptions {
    /// Base phrase (multiple words are joined with spaces)
    #[arg(value_name = "PHRASE", required = true, num_args = 1..)]
    pub phrase: Vec<String>,

    /// Maximum number of candidates to return
    #[arg(short, long, env = "XWORD_GENERATE_LIMIT", default_value_t = DEFAULT_GENERATE_CAP)]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: GenerateOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Word service: {} ({}s)", global.api_base, global.timeout);
    }

    let client = DatamuseClient::from_global(&global)?;
    let phrase = options.phrase.join(" ");
    let result = generate_theme_entries(&client, &phrase, options.limit).await;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if let Some(error) = &result.error {
        eprintln!("{}", format_lookup_error(error));
        return Ok(());
    }

    print!("{}", format_generated_text(&result));
    Ok(())
}

/// Generate theme entry candidates matching the base phrase's length
pub async fn generate_theme_entries<L>(
    lookup: &L,
    base_phrase: &str,
    cap: usize,
) -> GeneratedEntries
where
    L: WordLookup + ?Sized,
{
    match gather_candidates(lookup, base_phrase).await {
        Ok(lists) => select_theme_entries(base_phrase, merge_candidates(lists), cap),
        Err(e) => {
            log::warn!("Theme entry generation for {base_phrase:?} failed: {e}");
            GeneratedEntries::failed(base_phrase, e.to_string())
        }
    }
}

/// Candidate lists in discovery order: each word's similar and triggered
/// words, then words similar to the whole phrase.
async fn gather_candidates<L>(lookup: &L, base_phrase: &str) -> Result<Vec<Vec<String>>, Error>
where
    L: WordLookup + ?Sized,
{
    let mut lists = Vec::new();

    for word in base_phrase.split_whitespace() {
        lists.push(
            lookup
                .lookup(word, LookupMode::SimilarMeaning, GENERATE_QUERY_MAX)
                .await?,
        );
        lists.push(
            lookup
                .lookup(word, LookupMode::Triggered, GENERATE_QUERY_MAX)
                .await?,
        );
    }

    lists.push(
        lookup
            .lookup(base_phrase, LookupMode::SimilarMeaning, GENERATE_QUERY_MAX)
            .await?,
    );

    Ok(lists)
}

fn format_generated_text(result: &GeneratedEntries) -> String {
    let mut text = String::new();

    text.push_str(&format!("\n{}\n", "=".repeat(60).bright_cyan()));
    text.push_str(&format!(
        "{}\n",
        format!("THEME ENTRY IDEAS: {}", result.base_phrase.to_uppercase())
            .bright_cyan()
            .bold()
    ));
    text.push_str(&format!("{}\n", "=".repeat(60).bright_cyan()));
    text.push_str(&format!(
        "\n{}: {}\n",
        "Target length".green(),
        format!("{} letters", result.target_length)
            .bright_white()
            .bold()
    ));

    if result.candidates.is_empty() {
        text.push_str(&format!(
            "\n{}\n",
            "No same-length candidates found. Try a different phrase.".yellow()
        ));
    } else {
        text.push('\n');
        for (idx, candidate) in result.candidates.iter().enumerate() {
            text.push_str(&format!(
                "{} {}\n",
                format!("{}.", idx + 1).yellow().bold(),
                candidate.to_uppercase()
            ));
        }
    }

    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::fake::FakeLookup;

    fn sample_lookup() -> FakeLookup {
        FakeLookup::new()
            .with(
                "word",
                LookupMode::SimilarMeaning,
                &["term", "news", "password"],
            )
            .with(
                "word",
                LookupMode::Triggered,
                &["crossword", "Password", "wordsmith"],
            )
            .with(
                "play",
                LookupMode::SimilarMeaning,
                &["game", "frolicky", "gambol"],
            )
            .with("play", LookupMode::Triggered, &["role play", "playtime"])
            .with(
                "word play",
                LookupMode::SimilarMeaning,
                &["pun", "punning", "word game", "wordplay"],
            )
    }

    #[tokio::test]
    async fn test_generate_filters_to_target_length() {
        let lookup = sample_lookup();

        let result = generate_theme_entries(&lookup, "word play", DEFAULT_GENERATE_CAP).await;

        assert_eq!(result.target_length, 8);
        assert_eq!(
            result.candidates,
            vec![
                "password",
                "frolicky",
                "role play",
                "playtime",
                "word game",
                "wordplay"
            ]
        );
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_generate_dedupes_case_insensitively() {
        let lookup = sample_lookup();

        let result = generate_theme_entries(&lookup, "word play", DEFAULT_GENERATE_CAP).await;

        let lowered: Vec<String> = result.candidates.iter().map(|c| c.to_lowercase()).collect();
        assert_eq!(lowered.iter().filter(|c| *c == "password").count(), 1);
        assert!(result.candidates.contains(&"password".to_string()));
        assert!(!result.candidates.contains(&"Password".to_string()));
    }

    #[tokio::test]
    async fn test_generate_respects_cap() {
        let lookup = sample_lookup();

        let result = generate_theme_entries(&lookup, "word play", 2).await;

        assert_eq!(result.candidates, vec!["password", "frolicky"]);
    }

    #[tokio::test]
    async fn test_generate_lookup_order() {
        let lookup = FakeLookup::new();

        generate_theme_entries(&lookup, "word play", DEFAULT_GENERATE_CAP).await;

        let calls: Vec<(String, LookupMode)> = lookup
            .calls()
            .into_iter()
            .map(|(query, mode, max)| {
                assert_eq!(max, GENERATE_QUERY_MAX);
                (query, mode)
            })
            .collect();
        assert_eq!(
            calls,
            vec![
                ("word".to_string(), LookupMode::SimilarMeaning),
                ("word".to_string(), LookupMode::Triggered),
                ("play".to_string(), LookupMode::SimilarMeaning),
                ("play".to_string(), LookupMode::Triggered),
                ("word play".to_string(), LookupMode::SimilarMeaning),
            ]
        );
    }

    #[tokio::test]
    async fn test_generate_failure_is_captured() {
        let lookup = FakeLookup::failing(Error::Timeout(5));

        let result = generate_theme_entries(&lookup, "word play", DEFAULT_GENERATE_CAP).await;

        assert_eq!(result.target_length, 8);
        assert!(result.candidates.is_empty());
        assert_eq!(
            result.error.as_deref(),
            Some("Request timed out after 5 seconds")
        );
    }

    #[tokio::test]
    async fn test_generate_full_phrase_failure_drops_candidates() {
        let lookup = sample_lookup().failing_on(
            "word play",
            LookupMode::SimilarMeaning,
            Error::Network("connection reset".to_string()),
        );

        let result = generate_theme_entries(&lookup, "word play", DEFAULT_GENERATE_CAP).await;

        assert_eq!(lookup.calls().len(), 5);
        assert!(result.candidates.is_empty());
        assert_eq!(
            result.error.as_deref(),
            Some("Network error: connection reset")
        );
    }

    #[test]
    fn test_format_generated_text() {
        let result = select_theme_entries("word play", vec!["password".to_string()], 10);

        let formatted = format_generated_text(&result);

        assert!(formatted.contains("THEME ENTRY IDEAS: WORD PLAY"));
        assert!(formatted.contains("8 letters"));
        assert!(formatted.contains("PASSWORD"));
    }

    #[test]
    fn test_format_generated_text_empty() {
        let result = select_theme_entries("word play", Vec::new(), 10);

        let formatted = format_generated_text(&result);

        assert!(formatted.contains("No same-length candidates found"));
    }
}
