// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::io::{self, Write};
use std::path::PathBuf;
use anyhow::{Context, Result};
use application::{WordGenerator, WordSampler};
use cli::args::{Args, Command, OutputFormat};
use domain::{DomainError, Level, VocabEntry};
use infrastructure::{AiSettings, Config, JsonWordListRepository, OpenAiClient, PageRenderer};
use ports::{HtmlPresenter, JsonPresenter, TextPresenter};
use tracing::{debug, info};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting vocabdrill with arguments");

    match &args.command {
        Command::Sample { level, output } => {
            let (_, repository) = load_context(&args)?;
            info!(%level, "Sampling local words");
            let sampler = WordSampler::new(repository);
            let heading = format!("Level: {} words", level);
            present_to_console(sampler.sample_words(*level), &heading, output.format())
        }
        Command::Generate { output } => {
            let (config, _) = load_context(&args)?;
            let settings = AiSettings::from_env(&config.ai);
            debug!(?settings, "Resolved AI settings");
            present_to_console(generate_words(settings), "AI words (A1/A2)", output.format())
        }
        Command::Levels => {
            let (_, repository) = load_context(&args)?;
            debug!(data_dir = ?repository.data_dir(), "Counting words per level");
            let sampler = WordSampler::new(repository);
            print!("{}", describe_levels(&sampler));
            Ok(())
        }
        Command::InitConfig { path } => init_config(path.clone()),
    }
}

fn load_context(args: &Args) -> Result<(Config, JsonWordListRepository)> {
    let config = Config::load_or_default(args.config.as_deref())?;
    debug!(?config, "Loaded configuration");

    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(|| config.words.data_dir.clone());
    Ok((config, JsonWordListRepository::new(data_dir)))
}

/// Generate words with the language model.
///
/// The credential is checked before the HTTP client is even built.
pub fn generate_words(settings: AiSettings) -> Result<Vec<VocabEntry>, DomainError> {
    if !settings.has_credential() {
        return Err(DomainError::MissingCredential(constants::API_KEY_ENV));
    }
    let client = OpenAiClient::new(settings)?;
    WordGenerator::new(client).generate()
}

/// Word count per level, or the reason its list could not be loaded
pub fn describe_levels<R: application::WordListRepository>(sampler: &WordSampler<R>) -> String {
    Level::ALL
        .iter()
        .map(|&level| match sampler.count_words(level) {
            Ok(count) => format!("{}: {} words\n", level, count),
            Err(e) => format!("{}: unavailable ({})\n", level, e),
        })
        .collect()
}

/// Render words to `out`, or the domain failure as a user-facing message.
///
/// Domain failures end here: as `{"error": ...}` on `out` for JSON, otherwise
/// as `Error: ...` on `err`. Only faults of the tool itself (serialization,
/// writing, browser launch) are returned as errors.
pub fn present<W: Write, E: Write>(
    outcome: Result<Vec<VocabEntry>, DomainError>,
    heading: &str,
    format: OutputFormat,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    match (outcome, format) {
        (Ok(words), OutputFormat::Text) => {
            write!(out, "{}", TextPresenter::new().render(heading, &words))?;
        }
        (Ok(words), OutputFormat::Json) => {
            writeln!(out, "{}", JsonPresenter::new().render(&words)?)?;
        }
        (Ok(words), OutputFormat::Html) => {
            let html = HtmlPresenter::new().render(heading, &words);
            let mut renderer = PageRenderer::new();
            let path = renderer.create_temp_file(&html)?;
            renderer.open_in_browser(&path)?;
            if let Some(dir) = renderer.keep() {
                debug!(?dir, "Kept page directory for the browser");
            }
        }
        (Err(e), OutputFormat::Json) => {
            writeln!(out, "{}", JsonPresenter::new().render_failure(&e.to_string())?)?;
        }
        (Err(e), _) => {
            writeln!(err, "Error: {}", e)?;
        }
    }
    Ok(())
}

fn present_to_console(
    outcome: Result<Vec<VocabEntry>, DomainError>,
    heading: &str,
    format: OutputFormat,
) -> Result<()> {
    present(
        outcome,
        heading,
        format,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

fn init_config(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::default_path().context("Could not determine config directory")?,
    };
    Config::create_default(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
