// src/domain/entry.rs
use serde::{Deserialize, Serialize};

/// One vocabulary record, as stored in the level files or returned by the model.
///
/// `part_of_speech` is serialized under the key `type`. The basic word list
/// variant omits it, so it is optional here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocabEntry {
    pub word: String,
    #[serde(rename = "type", default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    pub meaning: String,
    pub example: String,
}

impl VocabEntry {
    /// Word with its article, unless the word already starts with it.
    ///
    /// ```
    /// use vocabdrill::domain::VocabEntry;
    ///
    /// let entry = VocabEntry {
    ///     word: "Hund".to_string(),
    ///     part_of_speech: Some("noun".to_string()),
    ///     gender: Some("der".to_string()),
    ///     meaning: "dog".to_string(),
    ///     example: "Der Hund bellt.".to_string(),
    /// };
    /// assert_eq!(entry.display_word(), "der Hund");
    /// ```
    pub fn display_word(&self) -> String {
        match self.article() {
            Some(article) if !starts_with_article(&self.word, article) => {
                format!("{} {}", article, self.word)
            }
            _ => self.word.clone(),
        }
    }

    /// Gender article, if any. Only `der`, `die` and `das` (any case) count;
    /// anything else, such as `"none"` or `"masculine"`, is treated as absent.
    pub fn article(&self) -> Option<&'static str> {
        let gender = self.gender.as_deref()?.trim();
        ARTICLES
            .iter()
            .copied()
            .find(|article| gender.eq_ignore_ascii_case(article))
    }
}

const ARTICLES: [&str; 3] = ["der", "die", "das"];

fn starts_with_article(word: &str, article: &str) -> bool {
    word.split_whitespace()
        .next()
        .is_some_and(|first| first.eq_ignore_ascii_case(article))
}
