//! Configuration loading and parsing.
//!
//! Reads `textview.toml` (or an override path supplied by the embedder) with
//! two sections:
//!
//! ```toml
//! [editor]
//! tab_width = 4
//! read_only = false
//! overwrite = false
//!
//! [search]
//! match_case = false
//! match_whole_word = false
//! ```
//!
//! Missing sections and fields take their defaults and unknown fields are
//! ignored. A missing or unparsable file yields the default configuration;
//! loading never fails on file content.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

/// Largest tab width honored; wider values are clamped.
pub const MAX_TAB_WIDTH: usize = 32;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorSection {
    #[serde(default = "EditorSection::default_tab_width")]
    pub tab_width: usize,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub overwrite: bool,
}

impl Default for EditorSection {
    fn default() -> Self {
        Self {
            tab_width: Self::default_tab_width(),
            read_only: false,
            overwrite: false,
        }
    }
}

impl EditorSection {
    const fn default_tab_width() -> usize {
        4
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct SearchSection {
    #[serde(default)]
    pub match_case: bool,
    #[serde(default)]
    pub match_whole_word: bool,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorSection,
    #[serde(default)]
    pub search: SearchSection,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
}

/// Config path: `textview.toml` in the working directory when present, else
/// the platform config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from("textview.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("textview").join("textview.toml");
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        info!(target: "config", path = %path.display(), "config_not_found_using_defaults");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                raw: Some(content),
                file,
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Tab width clamped to `1..=MAX_TAB_WIDTH`.
    pub fn tab_width(&self) -> usize {
        let raw = self.file.editor.tab_width;
        let clamped = raw.clamp(1, MAX_TAB_WIDTH);
        if clamped != raw {
            info!(target: "config", raw, clamped, max = MAX_TAB_WIDTH, "tab_width_clamped");
        }
        clamped
    }

    pub fn read_only(&self) -> bool {
        self.file.editor.read_only
    }

    pub fn overwrite(&self) -> bool {
        self.file.editor.overwrite
    }

    pub fn search(&self) -> &SearchSection {
        &self.file.search
    }
}
