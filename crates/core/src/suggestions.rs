use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::validation::cleaned_length;

/// Maximum number of words shown per suggestion list
pub const DISPLAY_LIMIT: usize = 10;

/// Candidates requested per lookup for synonym suggestions
pub const SYNONYM_QUERY_MAX: usize = 15;

/// Candidates requested per lookup when generating theme entries
pub const GENERATE_QUERY_MAX: usize = 30;

/// Default number of generated theme entries returned
pub const DEFAULT_GENERATE_CAP: usize = 10;

/// Word entry from the word-association service
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceWord {
    pub word: Option<String>,
    pub score: Option<u64>,
}

/// Synonym and related-word suggestions for a phrase
///
/// When `error` is set both lists are empty.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SuggestionResult {
    pub phrase: String,
    pub synonyms: Vec<String>,
    pub related: Vec<String>,
    pub error: Option<String>,
}

impl SuggestionResult {
    pub fn found(phrase: &str, synonyms: Vec<String>, related: Vec<String>) -> Self {
        Self {
            phrase: phrase.to_string(),
            synonyms: truncate_words(synonyms, DISPLAY_LIMIT),
            related: truncate_words(related, DISPLAY_LIMIT),
            error: None,
        }
    }

    pub fn failed(phrase: &str, error: impl Into<String>) -> Self {
        Self {
            phrase: phrase.to_string(),
            synonyms: Vec::new(),
            related: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty() && self.related.is_empty()
    }
}

/// Same-length theme entry candidates for a base phrase
///
/// When `error` is set `candidates` is empty.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct GeneratedEntries {
    pub base_phrase: String,
    pub target_length: usize,
    pub candidates: Vec<String>,
    pub error: Option<String>,
}

impl GeneratedEntries {
    pub fn failed(base_phrase: &str, error: impl Into<String>) -> Self {
        Self {
            base_phrase: base_phrase.to_string(),
            target_length: cleaned_length(base_phrase),
            candidates: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// Extract usable words from a service response, dropping blank entries
pub fn collect_words(response: Vec<ServiceWord>) -> Vec<String> {
    response
        .into_iter()
        .filter_map(|w| w.word)
        .filter(|w| !w.trim().is_empty())
        .collect()
}

fn truncate_words(mut words: Vec<String>, limit: usize) -> Vec<String> {
    words.truncate(limit);
    words
}

/// Merge candidate lists, keeping the first spelling of each word
///
/// Comparison is case-insensitive; order of first appearance is kept.
pub fn merge_candidates<I>(lists: I) -> Vec<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for candidate in lists.into_iter().flatten() {
        if seen.insert(candidate.to_lowercase()) {
            merged.push(candidate);
        }
    }

    merged
}

/// Build the generation result from merged candidates
///
/// Keeps candidates whose cleaned length matches the base phrase, in
/// discovery order, up to `cap`.
pub fn select_theme_entries(
    base_phrase: &str,
    candidates: Vec<String>,
    cap: usize,
) -> GeneratedEntries {
    let target_length = cleaned_length(base_phrase);

    let candidates = candidates
        .into_iter()
        .filter(|c| cleaned_length(c) == target_length)
        .take(cap)
        .collect();

    GeneratedEntries {
        base_phrase: base_phrase.to_string(),
        target_length,
        candidates,
        error: None,
    }
}

/// Common wordplay transformations to try on a phrase
pub fn wordplay_suggestions(base_phrase: &str) -> Vec<String> {
    vec![
        format!("Add a pun prefix/suffix (e.g., 'NOT {base_phrase}' or '{base_phrase} TOO')"),
        "Replace words with homophones".to_string(),
        "Replace words with rhyming words".to_string(),
        "Add/remove a letter for a twist".to_string(),
        "Combine with another phrase for double meaning".to_string(),
    ]
}
