// src/application/word_generator.rs
use crate::constants::{API_KEY_ENV, WORDS_PER_DRILL};
use crate::domain::{DomainError, VocabEntry};
use tracing::{debug, info, instrument};

/// Instruction sent to the model. The reply shape it asks for is what
/// [`parse_entries`] accepts.
pub const WORD_PROMPT: &str = r#"Generate exactly 5 German vocabulary words for learners at CEFR level A1 or A2. Do not use words above level A2.
Return a JSON array of 5 objects. Each object must have exactly these keys:
"word": the German word, with its article for nouns (for example "der Hund"),
"type": the part of speech, for example "noun", "verb" or "adjective",
"gender": "der", "die" or "das" for nouns, and null for every other type,
"meaning": the English meaning,
"example": a short German example sentence using the word.
Output only the JSON array. Do not add any other text, explanation or formatting."#;

pub trait CompletionClient {
    /// Whether a credential is available. Checked before any request is made.
    fn is_configured(&self) -> bool;

    /// Send `prompt` as a single user message and return the first completion's text.
    fn complete(&self, prompt: &str) -> Result<String, DomainError>;
}

pub struct WordGenerator<C: CompletionClient> {
    client: C,
}

impl<C: CompletionClient> WordGenerator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Ask the model for a drill's worth of words.
    ///
    /// Without a credential this returns `MissingCredential` and the client is
    /// never asked to complete. Every other failure is a `GenerationFailed`.
    #[instrument(level = "debug", skip(self))]
    pub fn generate(&self) -> Result<Vec<VocabEntry>, DomainError> {
        if !self.client.is_configured() {
            return Err(DomainError::MissingCredential(API_KEY_ENV));
        }

        info!("Requesting words from language model");
        let content = self.client.complete(WORD_PROMPT)?;
        debug!(%content, "Received completion");

        parse_entries(&content)
    }
}

/// Parse the model's reply into exactly [`WORDS_PER_DRILL`] entries.
///
/// Either every record parses and the count matches, or the whole reply is
/// rejected; partial lists are never returned.
pub fn parse_entries(content: &str) -> Result<Vec<VocabEntry>, DomainError> {
    let entries: Vec<VocabEntry> = serde_json::from_str(content.trim()).map_err(|e| {
        DomainError::GenerationFailed(format!("model reply is not a valid word list: {}", e))
    })?;

    if entries.len() != WORDS_PER_DRILL {
        return Err(DomainError::GenerationFailed(format!(
            "expected {} words, model returned {}",
            WORDS_PER_DRILL,
            entries.len()
        )));
    }

    Ok(entries)
}
