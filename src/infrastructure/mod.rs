// src/infrastructure/mod.rs
pub mod config;
pub mod openai;
pub mod renderer;
pub mod word_files;

pub use config::{AiSettings, Config};
pub use openai::OpenAiClient;
pub use renderer::PageRenderer;
pub use word_files::JsonWordListRepository;
