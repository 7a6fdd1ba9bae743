//! Configuration loading.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Settings for the terminal front end, read from an optional TOML file.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct TermConfig {
    /// ANSI colors on the board.
    #[serde(default = "default_true")]
    pub color: bool,
    /// Clear the screen between turns.
    #[serde(default = "default_true")]
    pub clear_screen: bool,
    /// Layout loaded at startup.
    #[serde(default = "default_layout")]
    pub layout: String,
}

fn default_true() -> bool {
    true
}

fn default_layout() -> String {
    "start".to_string()
}

impl Default for TermConfig {
    fn default() -> Self {
        TermConfig {
            color: true,
            clear_screen: true,
            layout: default_layout(),
        }
    }
}

impl TermConfig {
    /// Loads the file at `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(TermConfig::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }
}
