// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings for pt-rs, merged from several layers.
//!
//! ```text
//! lowest   built-in defaults
//!          <repo>/.pt.toml              skipped when absent
//!          --config FILE                must exist
//!          PT_<SECTION>__<KEY>          e.g. PT_TOOLS__GIT=/usr/bin/git
//! highest  -l / --file-log-level / --log-file
//! ```
//!
//! Which remote holds the patchsets is git's business (`patchsets.remote`),
//! not part of this file.

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::logging::LogConfig;

use loader::ConfigLoader;
use types::{GlobalConfig, ToolsConfig};

/// File name of the per-repository configuration.
pub const REPO_CONFIG_FILE: &str = ".pt.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "PT";

/// Everything `pt` reads before touching git.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    pub tools: ToolsConfig,
}

impl Config {
    /// Starts a layered load.
    ///
    /// ```no_run
    /// use pt_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional(".pt.toml")
    ///     .with_env_prefix("PT")
    ///     .set("global.output_log_level", 4)
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Reads a single TOML file.
    ///
    /// # Errors
    ///
    /// Fails when the file is missing or does not describe a valid `Config`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Reads TOML text.
    ///
    /// # Errors
    ///
    /// Fails when `content` does not describe a valid `Config`.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Logging setup for `init_logging`.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        let global = &self.global;
        LogConfig::builder()
            .with_console_level(global.output_log_level)
            .with_file_level(global.file_log_level)
            .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
            .build()
    }
}
