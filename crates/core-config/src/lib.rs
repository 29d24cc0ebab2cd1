//! Configuration loading and parsing.
//!
//! Reads `paginate.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [pagination]
//! count = 1000
//! per_page = 10
//! render_pages = 10
//! jump_buttons = 1
//! prev_button = true
//!
//! [labels]
//! spacer = " ... "
//! ```
//!
//! Every key is optional. A missing file, an unreadable file or a parse
//! failure yields the defaults; only the parse failure is logged. Values are
//! not validated here: the `[pagination]` table is handed to
//! `PaginationOptions::validate` by whoever builds the controller, after CLI
//! overrides are applied. Unknown fields are ignored.

use anyhow::Result;
use core_model::{
    DEFAULT_NEXT_LABEL, DEFAULT_PREV_LABEL, DEFAULT_SPACER_LABEL, PaginationOptions,
};
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{debug, warn};

pub const FILE_NAME: &str = "paginate.toml";

/// Display text for the prev/next controls and the jump spacer.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LabelsConfig {
    pub prev: String,
    pub next: String,
    pub spacer: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            prev: DEFAULT_PREV_LABEL.to_string(),
            next: DEFAULT_NEXT_LABEL.to_string(),
            spacer: DEFAULT_SPACER_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub pagination: PaginationOptions,
    #[serde(default)]
    pub labels: LabelsConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub path: Option<PathBuf>, // file the values came from, if any
    pub file: ConfigFile,
}

impl Config {
    pub fn pagination(&self) -> &PaginationOptions {
        &self.file.pagination
    }

    pub fn labels(&self) -> &LabelsConfig {
        &self.file.labels
    }
}

/// Best-effort config path: `paginate.toml` in the working directory, then the
/// platform config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("paginate").join(FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        debug!(target: "config", path = %path.display(), "config_not_found");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            debug!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                path: Some(path),
                file,
            })
        }
        Err(e) => {
            warn!(
                target: "config",
                path = %path.display(),
                error = %e,
                "config_parse_failed"
            );
            Ok(Config::default())
        }
    }
}
