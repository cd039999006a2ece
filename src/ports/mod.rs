// src/ports/mod.rs
pub mod html;
pub mod json;
pub mod text;

pub use html::HtmlPresenter;
pub use json::JsonPresenter;
pub use text::TextPresenter;
