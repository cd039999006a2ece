// src/application/mod.rs
pub mod word_generator;
pub mod word_sampler;

pub use word_generator::{parse_entries, CompletionClient, WordGenerator, WORD_PROMPT};
pub use word_sampler::{WordListRepository, WordSampler};
