use crate::prelude::{println, *};
use colored::Colorize;
use xword_core::guidelines::{construction_notes, GuidelineProfile, SymmetryPolicy};

pub fn run(global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Word service: {}", global.api_base);
    }

    let profiles = [GuidelineProfile::STANDARD, GuidelineProfile::MINI];
    print!("{}", format_guidelines_text(&profiles));

    Ok(())
}

fn describe_symmetry(policy: &SymmetryPolicy) -> String {
    match policy {
        SymmetryPolicy::PairedLengths => "Equal-length pairs".to_string(),
        SymmetryPolicy::TotalLengthBand {
            ideal_min,
            ideal_max,
        } => format!("{ideal_min}-{ideal_max} letters combined"),
    }
}

fn format_guidelines_text(profiles: &[GuidelineProfile]) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(60).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        "CROSSWORD CONSTRUCTION GUIDELINES".bright_cyan().bold()
    ));
    result.push_str(&format!("{}\n\n", "=".repeat(60).bright_cyan()));

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Puzzle",
        "Grid",
        "Theme entries",
        "Entry length",
        "Symmetry"
    ]);
    for profile in profiles {
        table.add_row(prettytable::row![
            profile.size.label(),
            profile.size.grid(),
            profile.entry_range(),
            format!("{} letters", profile.length_range()),
            describe_symmetry(&profile.symmetry)
        ]);
    }
    result.push_str(&table.to_string());

    result.push_str(&format!("\n{}:\n", "General notes".bright_white().bold()));
    for note in construction_notes() {
        result.push_str(&format!("  • {note}\n"));
    }

    result.push_str(&format!("{}\n\n", "=".repeat(60).bright_cyan()));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_guidelines_lists_profiles() {
        let formatted =
            format_guidelines_text(&[GuidelineProfile::STANDARD, GuidelineProfile::MINI]);

        assert!(formatted.contains("CROSSWORD CONSTRUCTION GUIDELINES"));
        assert!(formatted.contains("15x15"));
        assert!(formatted.contains("5x5"));
        assert!(formatted.contains("3-5"));
        assert!(formatted.contains("8-15 letters"));
        assert!(formatted.contains("4-5 letters"));
    }

    #[test]
    fn test_format_guidelines_describes_symmetry() {
        let formatted =
            format_guidelines_text(&[GuidelineProfile::STANDARD, GuidelineProfile::MINI]);

        assert!(formatted.contains("Equal-length pairs"));
        assert!(formatted.contains("8-15 letters combined"));
    }

    #[test]
    fn test_format_guidelines_includes_notes() {
        let formatted = format_guidelines_text(&[GuidelineProfile::STANDARD]);

        assert!(formatted.contains("General notes"));
        for note in construction_notes() {
            assert!(formatted.contains(note));
        }
    }

    #[test]
    fn test_format_guidelines_shows_standard_total_length() {
        let formatted = format_guidelines_text(&[GuidelineProfile::STANDARD]);

        assert!(formatted.contains("15x15 themes usually total 40-45 letters combined"));
    }
}
