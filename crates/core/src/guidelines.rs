use serde::{Deserialize, Serialize};

/// Puzzle size a guideline profile applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PuzzleSize {
    /// 15x15 daily puzzle
    Standard,
    /// 5x5 mini puzzle
    Mini,
}

impl PuzzleSize {
    /// Grid dimensions as displayed to users (e.g. "15x15")
    pub fn grid(&self) -> &'static str {
        match self {
            PuzzleSize::Standard => "15x15",
            PuzzleSize::Mini => "5x5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PuzzleSize::Standard => "Daily",
            PuzzleSize::Mini => "Mini",
        }
    }

    /// Default guideline profile for this size
    pub fn profile(&self) -> GuidelineProfile {
        match self {
            PuzzleSize::Standard => GuidelineProfile::STANDARD,
            PuzzleSize::Mini => GuidelineProfile::MINI,
        }
    }
}

/// How a profile judges the symmetry of a theme set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum SymmetryPolicy {
    /// Entries must share one length or come in equal-length pairs
    PairedLengths,
    /// Combined length should fall inside an ideal band
    TotalLengthBand { ideal_min: usize, ideal_max: usize },
}

/// Errors raised when building a custom profile
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("Minimum entries ({min}) is greater than maximum entries ({max})")]
    InvertedEntryRange { min: usize, max: usize },

    #[error("Minimum entry length ({min}) is greater than maximum entry length ({max})")]
    InvertedLengthRange { min: usize, max: usize },

    #[error("Minimum entry length must be at least 1")]
    ZeroLength,

    #[error("Ideal total length band {min}-{max} is inverted")]
    InvertedBand { min: usize, max: usize },
}

/// Constant guideline set for one puzzle size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineProfile {
    pub size: PuzzleSize,
    pub min_entries: usize,
    pub max_entries: usize,
    pub min_entry_length: usize,
    pub max_entry_length: usize,
    pub symmetry: SymmetryPolicy,
}

impl GuidelineProfile {
    /// 15x15 daily puzzle guidelines
    pub const STANDARD: GuidelineProfile = GuidelineProfile {
        size: PuzzleSize::Standard,
        min_entries: 3,
        max_entries: 5,
        min_entry_length: 8,
        max_entry_length: 15,
        symmetry: SymmetryPolicy::PairedLengths,
    };

    /// 5x5 mini puzzle guidelines
    pub const MINI: GuidelineProfile = GuidelineProfile {
        size: PuzzleSize::Mini,
        min_entries: 2,
        max_entries: 3,
        min_entry_length: 4,
        max_entry_length: 5,
        symmetry: SymmetryPolicy::TotalLengthBand {
            ideal_min: 8,
            ideal_max: 15,
        },
    };

    /// Build a custom profile, rejecting inverted ranges
    pub fn new(
        size: PuzzleSize,
        min_entries: usize,
        max_entries: usize,
        min_entry_length: usize,
        max_entry_length: usize,
        symmetry: SymmetryPolicy,
    ) -> Result<Self, ProfileError> {
        if min_entries > max_entries {
            return Err(ProfileError::InvertedEntryRange {
                min: min_entries,
                max: max_entries,
            });
        }
        if min_entry_length == 0 {
            return Err(ProfileError::ZeroLength);
        }
        if min_entry_length > max_entry_length {
            return Err(ProfileError::InvertedLengthRange {
                min: min_entry_length,
                max: max_entry_length,
            });
        }
        if let SymmetryPolicy::TotalLengthBand {
            ideal_min,
            ideal_max,
        } = symmetry
        {
            if ideal_min > ideal_max {
                return Err(ProfileError::InvertedBand {
                    min: ideal_min,
                    max: ideal_max,
                });
            }
        }

        Ok(Self {
            size,
            min_entries,
            max_entries,
            min_entry_length,
            max_entry_length,
            symmetry,
        })
    }

    /// Copy of this profile with some limits replaced
    ///
    /// `None` keeps the current value. The result goes through the same
    /// checks as [`GuidelineProfile::new`].
    pub fn with_overrides(
        &self,
        min_entries: Option<usize>,
        max_entries: Option<usize>,
        min_entry_length: Option<usize>,
        max_entry_length: Option<usize>,
    ) -> Result<Self, ProfileError> {
        Self::new(
            self.size,
            min_entries.unwrap_or(self.min_entries),
            max_entries.unwrap_or(self.max_entries),
            min_entry_length.unwrap_or(self.min_entry_length),
            max_entry_length.unwrap_or(self.max_entry_length),
            self.symmetry,
        )
    }

    /// "8-15" style rendering of the entry length range
    pub fn length_range(&self) -> String {
        format!("{}-{}", self.min_entry_length, self.max_entry_length)
    }

    /// "3-5" style rendering of the entry count range
    pub fn entry_range(&self) -> String {
        format!("{}-{}", self.min_entries, self.max_entries)
    }
}

/// General construction notes shown alongside the profiles
pub fn construction_notes() -> &'static [&'static str] {
    &[
        "All entries should follow the same theme logic",
        "Entries should be symmetrically placed",
        "Prefer equal-length entries, or pairs of equal length",
        "15x15 themes usually total 40-45 letters combined",
        "Minimum 3 letters per word",
        "Maximum 78 words for themed 15x15 puzzles",
        "All white squares must be 'checked' (crossed)",
        "21x21 Sunday grids allow more theme entries with similar proportions",
    ]
}
