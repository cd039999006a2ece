// src/ports/json.rs
use crate::domain::VocabEntry;
use anyhow::{Context, Result};
use serde::Serialize;

/// Single-key failure object: `{"error": "..."}`
#[derive(Debug, Serialize)]
struct FailureReport<'a> {
    error: &'a str,
}

#[derive(Debug, Default)]
pub struct JsonPresenter;

impl JsonPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, entries: &[VocabEntry]) -> Result<String> {
        serde_json::to_string_pretty(entries).context("Failed to serialize words to JSON")
    }

    pub fn render_failure(&self, message: &str) -> Result<String> {
        serde_json::to_string_pretty(&FailureReport { error: message })
            .context("Failed to serialize error to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::sample_entries;
    use serde_json::Value;

    #[test]
    fn given_entries_when_rendering_then_produces_array_with_type_key() -> Result<()> {
        let json = JsonPresenter::new().render(&sample_entries(2))?;

        let value: Value = serde_json::from_str(&json)?;
        let array = value.as_array().expect("array");
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["type"], "verb");
        assert_eq!(array[0]["gender"], Value::Null);
        assert_eq!(array[1]["gender"], "das");
        Ok(())
    }

    #[test]
    fn given_failure_when_rendering_then_produces_single_error_key() -> Result<()> {
        let json = JsonPresenter::new().render_failure("AI generation failed: timeout")?;

        let value: Value = serde_json::from_str(&json)?;
        let object = value.as_object().expect("object");
        assert_eq!(object.len(), 1);
        assert_eq!(object["error"], "AI generation failed: timeout");
        Ok(())
    }
}
