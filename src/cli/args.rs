// src/cli/args.rs
use crate::domain::Level;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Directory containing a1.json, a2.json and b1.json (optional)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (sample, generate, levels, or init-config)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Pick 5 random words from the local word list of a level
    Sample {
        /// CEFR level: A1, A2 or B1
        #[arg(value_name = "LEVEL")]
        level: Level,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Ask the language model for 5 new A1/A2 words
    Generate {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show how many local words each level has
    Levels,

    /// Write a default config file
    InitConfig {
        /// Where to write it (defaults to the user config directory)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputArgs {
    /// Output words as JSON
    #[arg(long, conflicts_with = "html")]
    pub json: bool,

    /// Show words as an HTML page in the browser
    #[arg(long)]
    pub html: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

impl OutputArgs {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.html {
            OutputFormat::Html
        } else {
            OutputFormat::Text
        }
    }
}
