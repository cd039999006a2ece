// src/domain/error.rs
use crate::domain::Level;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No API key configured. Set {0} to use AI word generation.")]
    MissingCredential(&'static str),
    #[error("Not enough words for level {level}: found {available}, need {required}")]
    NotEnoughWords {
        level: Level,
        available: usize,
        required: usize,
    },
    #[error("Word list unavailable at {}: {reason}", path.display())]
    WordListUnavailable { path: PathBuf, reason: String },
    #[error("AI generation failed: {0}")]
    GenerationFailed(String),
    #[error("Unknown level '{0}' (expected A1, A2 or B1)")]
    UnknownLevel(String),
}
