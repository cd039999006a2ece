// src/util/testing.rs

use anyhow::Result;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{CompletionClient, WordListRepository};
use crate::domain::{DomainError, Level, VocabEntry};

const SAMPLE_WORDS: &[(&str, &str, Option<&str>, &str, &str)] = &[
    ("gehen", "verb", None, "to go", "Ich gehe nach Hause."),
    ("Haus", "noun", Some("das"), "house", "Das Haus ist alt."),
    ("schnell", "adjective", None, "fast", "Der Zug ist schnell."),
    ("Katze", "noun", Some("die"), "cat", "Die Katze schläft."),
    ("essen", "verb", None, "to eat", "Wir essen um sechs."),
    ("Tisch", "noun", Some("der"), "table", "Der Tisch ist rund."),
    ("heute", "adverb", None, "today", "Heute regnet es."),
    ("Buch", "noun", Some("das"), "book", "Das Buch ist spannend."),
];

/// Build `count` distinct entries for tests.
///
/// The first eight are real words; beyond that the words get a numeric suffix.
pub fn sample_entries(count: usize) -> Vec<VocabEntry> {
    (0..count)
        .map(|i| {
            let (word, kind, gender, meaning, example) = SAMPLE_WORDS[i % SAMPLE_WORDS.len()];
            let word = if i < SAMPLE_WORDS.len() {
                word.to_string()
            } else {
                format!("{}{}", word, i)
            };
            VocabEntry {
                word,
                part_of_speech: Some(kind.to_string()),
                gender: gender.map(str::to_string),
                meaning: meaning.to_string(),
                example: example.to_string(),
            }
        })
        .collect()
}

enum LoadBehavior {
    Words(Vec<VocabEntry>),
    Unavailable(String),
}

/// Shared mock repository for testing use cases that depend on WordListRepository
///
/// Levels without configured behavior fail to load, like a missing file.
///
/// # Examples
///
/// ```
/// use vocabdrill::domain::Level;
/// use vocabdrill::util::testing::{sample_entries, MockWordListRepository};
///
/// let mock = MockWordListRepository::builder()
///     .with_words(Level::A1, sample_entries(6))
///     .with_load_failure(Level::B1, "invalid JSON")
///     .build();
/// ```
pub struct MockWordListRepository {
    levels: HashMap<Level, LoadBehavior>,
}

impl MockWordListRepository {
    pub fn builder() -> MockWordListRepositoryBuilder {
        MockWordListRepositoryBuilder::new()
    }
}

impl WordListRepository for MockWordListRepository {
    fn load_words(&self, level: Level) -> Result<Vec<VocabEntry>, DomainError> {
        match self.levels.get(&level) {
            Some(LoadBehavior::Words(words)) => Ok(words.clone()),
            Some(LoadBehavior::Unavailable(reason)) => Err(DomainError::WordListUnavailable {
                path: mock_path(level),
                reason: reason.clone(),
            }),
            None => Err(DomainError::WordListUnavailable {
                path: mock_path(level),
                reason: "no words configured".to_string(),
            }),
        }
    }
}

fn mock_path(level: Level) -> PathBuf {
    PathBuf::from(format!("mock/{}.json", level.file_stem()))
}

/// Builder for MockWordListRepository
pub struct MockWordListRepositoryBuilder {
    levels: HashMap<Level, LoadBehavior>,
}

impl MockWordListRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            levels: HashMap::new(),
        }
    }

    /// Words returned by load_words for `level`
    pub fn with_words(mut self, level: Level, words: Vec<VocabEntry>) -> Self {
        self.levels.insert(level, LoadBehavior::Words(words));
        self
    }

    /// Make load_words fail for `level` with WordListUnavailable
    pub fn with_load_failure(mut self, level: Level, reason: &str) -> Self {
        self.levels
            .insert(level, LoadBehavior::Unavailable(reason.to_string()));
        self
    }

    pub fn build(self) -> MockWordListRepository {
        MockWordListRepository {
            levels: self.levels,
        }
    }
}

impl Default for MockWordListRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

enum CompletionBehavior {
    Reply(String),
    Failure(String),
}

/// Mock completion client recording how often it was asked to complete
///
/// # Examples
///
/// ```
/// use vocabdrill::application::CompletionClient;
/// use vocabdrill::util::testing::MockCompletionClient;
///
/// let mock = MockCompletionClient::builder().with_reply("[]").build();
/// assert_eq!(mock.complete("prompt").unwrap(), "[]");
/// assert_eq!(mock.calls(), 1);
/// ```
pub struct MockCompletionClient {
    configured: bool,
    behavior: CompletionBehavior,
    calls: Cell<usize>,
    last_prompt: RefCell<Option<String>>,
}

impl MockCompletionClient {
    pub fn builder() -> MockCompletionClientBuilder {
        MockCompletionClientBuilder::new()
    }

    /// Number of complete() calls so far
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.borrow().clone()
    }
}

impl CompletionClient for MockCompletionClient {
    fn is_configured(&self) -> bool {
        self.configured
    }

    fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_prompt.borrow_mut() = Some(prompt.to_string());
        match &self.behavior {
            CompletionBehavior::Reply(content) => Ok(content.clone()),
            CompletionBehavior::Failure(msg) => Err(DomainError::GenerationFailed(msg.clone())),
        }
    }
}

/// Builder for MockCompletionClient
pub struct MockCompletionClientBuilder {
    configured: bool,
    behavior: CompletionBehavior,
}

impl MockCompletionClientBuilder {
    pub fn new() -> Self {
        Self {
            configured: true,
            behavior: CompletionBehavior::Reply("[]".to_string()),
        }
    }

    /// Completion text returned by complete()
    pub fn with_reply(mut self, content: impl Into<String>) -> Self {
        self.behavior = CompletionBehavior::Reply(content.into());
        self
    }

    /// Make complete() fail with GenerationFailed(msg)
    pub fn with_failure(mut self, msg: &str) -> Self {
        self.behavior = CompletionBehavior::Failure(msg.to_string());
        self
    }

    /// Simulate a missing credential
    pub fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    pub fn build(self) -> MockCompletionClient {
        MockCompletionClient {
            configured: self.configured,
            behavior: self.behavior,
            calls: Cell::new(0),
            last_prompt: RefCell::new(None),
        }
    }
}

impl Default for MockCompletionClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "rustls", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
