// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime configuration.
//!
//! Defaults, then an optional YAML file, then `INSECTAID_*` environment
//! variables. Command-line flags are applied on top by the binary.

use crate::i18n::Lang;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "insectaid.yaml";

pub const DATA_DIR_ENV: &str = "INSECTAID_DATA_DIR";
pub const LANG_ENV: &str = "INSECTAID_LANG";
pub const LOG_ENV: &str = "INSECTAID_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory backing the file store.
    pub data_dir: PathBuf,
    /// Forces the display language for this process without persisting it.
    pub lang: Option<Lang>,
    /// `tracing-subscriber` filter directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".insectaid"),
            lang: None,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load from `path`, or from [`DEFAULT_CONFIG_FILE`] if it exists, then
    /// apply environment overrides.
    ///
    /// Also returns the [`LANG_ENV`] value when it named no supported
    /// language. Logging is not set up yet at this point, so the caller
    /// reports it.
    pub fn load(path: Option<&Path>) -> Result<(Self, Option<String>)> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        let rejected_lang = config.apply_overrides(|name| std::env::var(name).ok());
        Ok((config, rejected_lang))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply `INSECTAID_*` values returned by `lookup`.
    ///
    /// An unrecognised language code leaves `lang` untouched and is returned.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        let mut rejected_lang = None;
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|dir| !dir.trim().is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(code) = lookup(LANG_ENV) {
            match Lang::from_code(code.trim()) {
                Some(lang) => self.lang = Some(lang),
                None => rejected_lang = Some(code),
            }
        }
        if let Some(filter) = lookup(LOG_ENV).filter(|filter| !filter.trim().is_empty()) {
            self.log_filter = filter;
        }
        rejected_lang
    }
}
