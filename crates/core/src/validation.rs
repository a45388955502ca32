use serde::{Deserialize, Serialize};

use crate::guidelines::GuidelineProfile;

/// Result of checking one entry against a profile's length range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthVerdict {
    pub valid: bool,
    pub length: usize,
    pub message: String,
}

/// Remove space characters from an entry
pub fn strip_spaces(entry: &str) -> String {
    entry.chars().filter(|c| *c != ' ').collect()
}

/// Letter count of an entry, ignoring spaces
///
/// Counts characters rather than bytes so accented entries measure correctly.
pub fn cleaned_length(entry: &str) -> usize {
    entry.chars().filter(|c| *c != ' ').count()
}

/// Space-stripped, upper-cased form used for display
pub fn normalize_entry(entry: &str) -> String {
    strip_spaces(entry).to_uppercase()
}

/// Check an entry's cleaned length against the profile's range
pub fn validate_entry_length(entry: &str, profile: &GuidelineProfile) -> LengthVerdict {
    let length = cleaned_length(entry);
    let guideline = format!(
        "{} theme entries are typically {} letters.",
        profile.size.grid(),
        profile.length_range()
    );

    if length < profile.min_entry_length {
        return LengthVerdict {
            valid: false,
            length,
            message: format!("Entry too short ({length} letters). {guideline}"),
        };
    }

    if length > profile.max_entry_length {
        return LengthVerdict {
            valid: false,
            length,
            message: format!("Entry too long ({length} letters). {guideline}"),
        };
    }

    LengthVerdict {
        valid: true,
        length,
        message: format!("Good length ({length} letters)"),
    }
}
