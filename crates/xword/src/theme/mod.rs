use crate::prelude::*;
use xword_core::guidelines::{GuidelineProfile, PuzzleSize};

pub mod analyze;
pub mod check;
pub mod wordplay;

/// Optional overrides applied on top of a puzzle size's default guidelines
#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone, Default)]
pub struct ProfileOverrides {
    /// Minimum number of theme entries
    #[arg(long, env = "XWORD_MIN_ENTRIES")]
    pub min_entries: Option<usize>,

    /// Maximum number of theme entries
    #[arg(long, env = "XWORD_MAX_ENTRIES")]
    pub max_entries: Option<usize>,

    /// Minimum letters per theme entry
    #[arg(long, env = "XWORD_MIN_LENGTH")]
    pub min_length: Option<usize>,

    /// Maximum letters per theme entry
    #[arg(long, env = "XWORD_MAX_LENGTH")]
    pub max_length: Option<usize>,
}

/// Resolve the guideline profile for a size, applying any overrides
pub fn resolve_profile(size: PuzzleSize, overrides: &ProfileOverrides) -> Result<GuidelineProfile> {
    size.profile()
        .with_overrides(
            overrides.min_entries,
            overrides.max_entries,
            overrides.min_length,
            overrides.max_length,
        )
        .map_err(|e| eyre!("Invalid guideline overrides: {}", e))
}
