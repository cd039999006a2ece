// src/ports/text.rs
use crate::domain::VocabEntry;

/// Plain terminal rendering of a word list.
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, heading: &str, entries: &[VocabEntry]) -> String {
        let mut out = format!("{}\n\n", heading);
        for entry in entries {
            out.push_str(&self.render_entry(entry));
            out.push_str("---\n");
        }
        out
    }

    fn render_entry(&self, entry: &VocabEntry) -> String {
        let mut out = entry.display_word();
        if let Some(kind) = entry.part_of_speech.as_deref().filter(|k| !k.is_empty()) {
            out.push_str(&format!(" ({})", kind));
        }
        out.push('\n');
        out.push_str(&format!("  meaning: {}\n", entry.meaning));
        out.push_str(&format!("  example: {}\n", entry.example));
        out
    }
}
