//! Session configuration

use std::path::PathBuf;

/// Configuration for an interactive session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Catalog file (`.json` or pipe-delimited text)
    pub catalog_path: PathBuf,

    /// Seed for PLAY_RANDOM (None = seeded from entropy)
    pub seed: Option<u64>,

    /// Print the welcome banner and a prompt
    pub interactive: bool,
}

impl SessionConfig {
    /// Create a new session configuration
    pub fn new(catalog_path: PathBuf) -> Self {
        Self {
            catalog_path,
            seed: None,
            interactive: true,
        }
    }

    /// Make random selection reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Disable banner and prompt (for piped input)
    pub fn quiet(mut self) -> Self {
        self.interactive = false;
        self
    }
}
