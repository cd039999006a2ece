// src/infrastructure/renderer.rs
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempDir};
use tracing::instrument;

/// Writes rendered pages to a temporary directory and opens them in the browser.
///
/// The directory is removed when the renderer drops unless [`PageRenderer::keep`]
/// is called.
#[derive(Debug, Default)]
pub struct PageRenderer {
    temp_dir: Option<TempDir>,
}

impl PageRenderer {
    pub fn new() -> Self {
        Self { temp_dir: None }
    }

    pub fn create_temp_file(&mut self, content: &str) -> Result<PathBuf> {
        let temp_dir = Builder::new()
            .prefix("vocabdrill-")
            .rand_bytes(5)
            .tempdir()
            .context("Failed to create temporary directory")?;

        let file_path = temp_dir.path().join("words.html");

        File::create(&file_path)
            .with_context(|| format!("Failed to create temp file at {}", file_path.display()))?
            .write_all(content.as_bytes())
            .context("Failed to write content to temporary file")?;

        self.temp_dir = Some(temp_dir);

        Ok(file_path)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn open_in_browser(&self, path: &Path) -> Result<()> {
        let path_str = path.to_str().context("Failed to convert path to string")?;

        #[cfg(target_os = "macos")]
        {
            std::process::Command::new("open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "windows")]
        {
            std::process::Command::new("cmd")
                .args(["/C", "start", path_str])
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "linux")]
        {
            std::process::Command::new("xdg-open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }

        Ok(())
    }

    /// Detach the last page's directory so it outlives the process.
    ///
    /// The browser opens the page asynchronously and may start after we exit.
    pub fn keep(&mut self) -> Option<PathBuf> {
        self.temp_dir.take().map(TempDir::keep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_content_when_creating_temp_file_then_writes_html_page() {
        let mut renderer = PageRenderer::new();

        let path = renderer.create_temp_file("<html>hallo</html>").unwrap();

        assert!(path.ends_with("words.html"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html>hallo</html>");
    }

    #[test]
    fn given_second_page_when_creating_temp_file_then_previous_directory_is_removed() {
        let mut renderer = PageRenderer::new();

        let first = renderer.create_temp_file("one").unwrap();
        let second = renderer.create_temp_file("two").unwrap();

        assert!(!first.exists());
        assert!(second.exists());
    }

    #[test]
    fn given_kept_page_when_renderer_drops_then_file_remains() {
        let mut renderer = PageRenderer::new();
        let path = renderer.create_temp_file("<html>bleibt</html>").unwrap();

        let dir = renderer.keep().expect("a page was created");
        drop(renderer);

        assert!(path.exists());
        assert!(path.starts_with(&dir));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn given_no_page_when_keeping_then_returns_none() {
        assert_eq!(PageRenderer::new().keep(), None);
    }
}
