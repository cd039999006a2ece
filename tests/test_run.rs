mod helpers;

use anyhow::Result;
use clap::Parser;
use helpers::TestDataDir;
use vocabdrill::cli::args::Args;
use vocabdrill::domain::Level;
use vocabdrill::infrastructure::Config;

#[test]
fn given_init_config_command_when_running_then_writes_default_config() -> Result<()> {
    // Arrange
    let data = TestDataDir::new()?;
    let config_path = data.path.join("nested").join("config.toml");
    let args = Args::try_parse_from(vec![
        "vocabdrill".to_string(),
        "init-config".to_string(),
        config_path.to_string_lossy().to_string(),
    ])?;

    // Act
    vocabdrill::run(args)?;

    // Assert
    let config = Config::load(&config_path)?;
    assert_eq!(config, Config::default());
    Ok(())
}

#[test]
fn given_too_few_words_when_running_sample_then_returns_ok() -> Result<()> {
    // Arrange
    let data = TestDataDir::new()?;
    data.write_level(Level::A1, "[]")?;
    let args = Args::try_parse_from(vec![
        "vocabdrill".to_string(),
        "--data-dir".to_string(),
        data.path.to_string_lossy().to_string(),
        "sample".to_string(),
        "A1".to_string(),
        "--json".to_string(),
    ])?;

    // Act & Assert
    vocabdrill::run(args)?;
    Ok(())
}

#[test]
fn given_missing_explicit_config_when_running_then_returns_error() -> Result<()> {
    let args = Args::try_parse_from(vec![
        "vocabdrill",
        "--config",
        "/nonexistent/vocabdrill.toml",
        "levels",
    ])?;

    let result = vocabdrill::run(args);

    assert!(result.is_err());
    Ok(())
}
