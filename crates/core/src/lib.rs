//! Core library for xword
//!
//! This crate implements the **Functional Core** of the xword application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! - **`xword_core`** (this crate): pure theme analysis with zero I/O
//! - **`xword`**: the CLI, console rendering, and the word-association client
//!
//! Every function here is deterministic: the same entries and the same
//! [`guidelines::GuidelineProfile`] always produce the same report. Guideline
//! profiles are plain `Copy` values passed at the call site, so tests can use
//! custom profiles without touching any global state.
//!
//! # Module Organization
//!
//! - [`guidelines`]: Guideline profiles for each puzzle size
//! - [`validation`]: Cleaned length and the per-entry length check
//! - [`analysis`]: Theme analysis (entry counts and symmetry)
//! - [`suggestions`]: Suggestion result models and candidate filtering
//!
//! # Example Usage
//!
//! ```rust
//! use xword_core::analysis::analyze_theme;
//! use xword_core::guidelines::GuidelineProfile;
//!
//! let report = analyze_theme(
//!     &["PLAY ON WORDS", "WORD PLAY", "PLAYS WELL"],
//!     &GuidelineProfile::STANDARD,
//! );
//!
//! assert_eq!(report.entry_count, 3);
//! assert_eq!(report.total_length, 11 + 8 + 9);
//! ```

pub mod analysis;
pub mod guidelines;
pub mod suggestions;
pub mod validation;
