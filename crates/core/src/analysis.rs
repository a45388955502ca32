use std::collections::BTreeMap;

use serde::Serialize;

use crate::guidelines::{GuidelineProfile, SymmetryPolicy};
use crate::validation::{normalize_entry, validate_entry_length};

/// Per-entry analysis result
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct EntryResult {
    /// Entry as supplied by the user
    pub text: String,
    /// Space-stripped, upper-cased form
    pub display: String,
    pub length: usize,
    pub valid: bool,
    pub message: String,
}

/// Complete analysis of a theme set against one profile
#[derive(Debug, Serialize, Clone)]
pub struct AnalysisReport {
    pub profile: GuidelineProfile,
    pub entries: Vec<EntryResult>,
    pub total_length: usize,
    pub entry_count: usize,
    /// Lengths that occur an odd number of times, ascending
    pub unpaired_lengths: Vec<usize>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Analyze a set of theme entries against a guideline profile
///
/// Entry results keep input order. The entry-count check runs before the
/// symmetry check, so its warning always comes first. Empty input is allowed
/// and produces a "needs more entries" warning with no symmetry findings.
pub fn analyze_theme<S: AsRef<str>>(entries: &[S], profile: &GuidelineProfile) -> AnalysisReport {
    let entry_results: Vec<EntryResult> = entries
        .iter()
        .map(|entry| {
            let text = entry.as_ref();
            let verdict = validate_entry_length(text, profile);
            EntryResult {
                text: text.to_string(),
                display: normalize_entry(text),
                length: verdict.length,
                valid: verdict.valid,
                message: verdict.message,
            }
        })
        .collect();

    let total_length = entry_results.iter().map(|e| e.length).sum();
    let entry_count = entry_results.len();

    let mut report = AnalysisReport {
        profile: *profile,
        entries: entry_results,
        total_length,
        entry_count,
        unpaired_lengths: Vec::new(),
        warnings: Vec::new(),
        suggestions: Vec::new(),
    };

    if let Some(warning) = check_entry_count(entry_count, profile) {
        report.warnings.push(warning);
    }

    if entry_count > 0 {
        let lengths: Vec<usize> = report.entries.iter().map(|e| e.length).collect();
        match profile.symmetry {
            SymmetryPolicy::PairedLengths => check_pairing(&lengths, &mut report),
            SymmetryPolicy::TotalLengthBand {
                ideal_min,
                ideal_max,
            } => check_total_band(&lengths, ideal_min, ideal_max, &mut report),
        }
    }

    report
}

/// Analyze entries against the 15x15 daily guidelines
pub fn analyze_standard<S: AsRef<str>>(entries: &[S]) -> AnalysisReport {
    analyze_theme(entries, &GuidelineProfile::STANDARD)
}

/// Analyze entries against the 5x5 mini guidelines
pub fn analyze_mini<S: AsRef<str>>(entries: &[S]) -> AnalysisReport {
    analyze_theme(entries, &GuidelineProfile::MINI)
}

fn check_entry_count(count: usize, profile: &GuidelineProfile) -> Option<String> {
    let guideline = format!(
        "{} puzzles typically have {} theme entries.",
        profile.size.grid(),
        profile.entry_range()
    );

    if count < profile.min_entries {
        let shortfall = profile.min_entries - count;
        Some(format!(
            "Consider adding more theme entries ({count} given, {shortfall} short). {guideline}"
        ))
    } else if count > profile.max_entries {
        let excess = count - profile.max_entries;
        Some(format!(
            "You have many theme entries ({count} given, {excess} over). {guideline}"
        ))
    } else {
        None
    }
}

/// Count occurrences of each length, ordered by length
pub fn length_groups(lengths: &[usize]) -> BTreeMap<usize, usize> {
    let mut groups = BTreeMap::new();
    for length in lengths {
        *groups.entry(*length).or_insert(0) += 1;
    }
    groups
}

/// Lengths that occur an odd number of times, ascending
pub fn unpaired_lengths(lengths: &[usize]) -> Vec<usize> {
    length_groups(lengths)
        .into_iter()
        .filter(|(_, count)| count % 2 == 1)
        .map(|(length, _)| length)
        .collect()
}

fn check_pairing(lengths: &[usize], report: &mut AnalysisReport) {
    let groups = length_groups(lengths);

    if groups.len() == 1 {
        if let Some(length) = groups.keys().next() {
            report.suggestions.push(format!(
                "All theme entries have the same length ({length} letters) - excellent for symmetry!"
            ));
        }
        return;
    }

    let unpaired = unpaired_lengths(lengths);
    if unpaired.is_empty() {
        report.suggestions.push(
            "Every entry length appears in pairs - good for symmetric placement.".to_string(),
        );
    } else {
        let listed = unpaired
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        report.warnings.push(format!(
            "Unpaired entry lengths: {listed}. Symmetric grids need entries of unequal length to come in equal-length pairs."
        ));
        report.unpaired_lengths = unpaired;
    }
}

fn check_total_band(
    lengths: &[usize],
    ideal_min: usize,
    ideal_max: usize,
    report: &mut AnalysisReport,
) {
    let total = report.total_length;
    let grid = report.profile.size.grid();

    if total < ideal_min {
        report.suggestions.push(format!(
            "Total theme length is {total} letters. Consider aiming for {ideal_min}-{ideal_max} letters for a {grid} grid."
        ));
    } else if total > ideal_max {
        report.suggestions.push(format!(
            "Total theme length is {total} letters. This might be too long for a {grid} grid (ideal: {ideal_min}-{ideal_max} letters)."
        ));
    } else {
        report.suggestions.push(format!(
            "Total theme length ({total} letters) is in the ideal range!"
        ));
    }

    if length_groups(lengths).len() == 1 {
        report
            .suggestions
            .push("All theme entries have the same length - excellent for symmetry!".to_string());
    } else {
        report.suggestions.push(
            "Note: Theme entries have different lengths. Consider matching lengths for easier symmetric placement."
                .to_string(),
        );
    }
}
