//! Configuration for the listing line mode.
//!
//! Handles loading and deserializing settings from `linemode.toml`.
//! The only setting owned by this crate is the name of the active linemode;
//! everything else about the listing (colors, borders, layout) belongs to
//! the embedding browser's own configuration.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings read from `linemode.toml`.
///
/// An unknown `linemode` value is not rejected here; it surfaces as an
/// [UnknownModeError](crate::core::UnknownModeError) when the embedder
/// resolves it against the registry.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    linemode: String,
}

impl Config {
    /// The name of the linemode to render listings with.
    #[inline]
    pub fn linemode(&self) -> &str {
        &self.linemode
    }

    /// Load configuration from the given path.
    /// If the file does not exist or fails to parse, returns the default
    /// configuration and prints a notice to stderr.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    eprintln!("Error parsing {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Determine the default configuration file path.
    /// Checks the LINEMODE_CONFIG environment variable first,
    /// checks XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/linemode/linemode.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("LINEMODE_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("linemode/linemode.toml");
        }

        if let Some(home) = dirs::home_dir() {
            return home.join(".config/linemode/linemode.toml");
        }
        PathBuf::from("linemode.toml")
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            linemode: crate::core::DEFAULT_LINEMODE.to_owned(),
        }
    }
}
