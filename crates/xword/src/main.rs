use crate::prelude::*;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use xword_core::guidelines::PuzzleSize;

mod error;
mod guidelines;
mod prelude;
mod theme;
mod words;

const DEFAULT_API_BASE: &str = "https://api.datamuse.com";

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Crossword construction helper: check theme entries against puzzle guidelines and find word suggestions"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Option<SubCommands>,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the word-association service
    #[clap(long, env = "XWORD_API_BASE", global = true, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Timeout in seconds for each word lookup
    #[clap(long, env = "XWORD_TIMEOUT", global = true, default_value = "5")]
    timeout: u64,

    /// Whether to display additional information.
    #[clap(long, env = "XWORD_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Display crossword construction guidelines
    Guidelines,

    /// Analyze theme entries against 15x15 daily guidelines
    Analyze(crate::theme::analyze::AnalyzeOptions),

    /// Analyze theme entries against 5x5 mini guidelines
    Mini(crate::theme::analyze::AnalyzeOptions),

    /// Check whether a single entry has an appropriate length
    Check(crate::theme::check::CheckOptions),

    /// Get wordplay ideas for a phrase
    Wordplay(crate::theme::wordplay::WordplayOptions),

    /// Look up synonyms and related words for a phrase
    Synonyms(crate::words::synonyms::SynonymOptions),

    /// Generate same-length theme entry candidates from a phrase
    Generate(crate::words::generate::GenerateOptions),
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    let Some(command) = app.command else {
        App::command().print_help()?;
        return Ok(ExitCode::FAILURE);
    };

    match command {
        SubCommands::Guidelines => crate::guidelines::run(app.global),
        SubCommands::Analyze(options) => {
            crate::theme::analyze::run(options, PuzzleSize::Standard, app.global)
        }
        SubCommands::Mini(options) => {
            crate::theme::analyze::run(options, PuzzleSize::Mini, app.global)
        }
        SubCommands::Check(options) => crate::theme::check::run(options, app.global),
        SubCommands::Wordplay(options) => crate::theme::wordplay::run(options, app.global),
        SubCommands::Synonyms(options) => crate::words::synonyms::run(options, app.global).await,
        SubCommands::Generate(options) => crate::words::generate::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))?;

    Ok(ExitCode::SUCCESS)
}
