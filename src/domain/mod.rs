// src/domain/mod.rs
pub mod entry;
pub mod error;
pub mod level;

pub use entry::VocabEntry;
pub use error::DomainError;
pub use level::Level;
