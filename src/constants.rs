// src/constants.rs
//
// Application-wide constants shared by the sampler, the generator and the CLI.

/// Number of words shown per drill, for both the local and the AI path.
pub const WORDS_PER_DRILL: usize = 5;

/// Environment variable holding the API credential for AI generation.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the configured model identifier.
pub const MODEL_ENV: &str = "OPENAI_MODEL";

/// Model used when neither the config file nor the environment names one.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Chat-completions endpoint the generator posts to by default.
pub const DEFAULT_COMPLETIONS_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Upper bound for one completion request, in seconds.
///
/// The call blocks the command and cannot be cancelled otherwise.
pub const REQUEST_TIMEOUT_SECS: u64 = 20;

/// Directory holding `a1.json`, `a2.json` and `b1.json` when nothing else is configured.
pub const DEFAULT_DATA_DIR: &str = "data";
