// src/application/word_sampler.rs
use crate::constants::WORDS_PER_DRILL;
use crate::domain::{DomainError, Level, VocabEntry};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, instrument, warn};

pub trait WordListRepository {
    /// Load every record of the word list for `level`.
    ///
    /// A missing or unparsable list is an error, distinct from an empty list.
    fn load_words(&self, level: Level) -> Result<Vec<VocabEntry>, DomainError>;
}

pub struct WordSampler<R: WordListRepository> {
    repository: R,
}

impl<R: WordListRepository> WordSampler<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Pick a drill's worth of distinct words for `level` using the thread RNG.
    pub fn sample_words(&self, level: Level) -> Result<Vec<VocabEntry>, DomainError> {
        self.sample_words_with(level, &mut rand::rng())
    }

    /// Pick [`WORDS_PER_DRILL`] distinct words uniformly without replacement.
    ///
    /// A list that failed to load counts as empty: the caller gets
    /// `NotEnoughWords` rather than a short or padded list.
    #[instrument(level = "debug", skip(self, rng))]
    pub fn sample_words_with<G: Rng + ?Sized>(
        &self,
        level: Level,
        rng: &mut G,
    ) -> Result<Vec<VocabEntry>, DomainError> {
        let words = match self.repository.load_words(level) {
            Ok(words) => words,
            Err(e) => {
                warn!(%level, error = %e, "Word list failed to load, treating as empty");
                Vec::new()
            }
        };

        if words.len() < WORDS_PER_DRILL {
            return Err(DomainError::NotEnoughWords {
                level,
                available: words.len(),
                required: WORDS_PER_DRILL,
            });
        }

        let selected: Vec<VocabEntry> = words
            .choose_multiple(rng, WORDS_PER_DRILL)
            .cloned()
            .collect();
        debug!(%level, pool = words.len(), "Sampled words");
        Ok(selected)
    }

    /// Number of records available for `level`, or the reason the list failed to load
    pub fn count_words(&self, level: Level) -> Result<usize, DomainError> {
        self.repository.load_words(level).map(|words| words.len())
    }
}
