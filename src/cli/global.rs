// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options accepted by every subcommand.
//!
//! ```text
//! -C DIR            ← Repository to operate on (default: .)
//! --config FILE     ← Extra TOML config (must exist)
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (falls back to --log-level)
//! --log-file FILE   ← Enables file logging
//!
//! Precedence: CLI flags > PT_* env > --config > <repo>/.pt.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// `-C`, `--config` and the logging flags.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Run as if pt was started in DIR instead of the current directory.
    #[arg(short = 'C', value_name = "DIR", global = true)]
    pub directory: Option<PathBuf>,

    /// Path to an additional TOML configuration file.
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Console log level (0=off, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// Log file level; defaults to --log-level when that is given.
    #[arg(long = "file-log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Append diagnostics to FILE.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Working tree the command operates on.
    #[must_use]
    pub fn repo_dir(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Converts command-line options to `(key, value)` configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, config::Value)> {
        let mut overrides = Vec::new();

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level", i64::from(level).into()));
        }

        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level", i64::from(level).into()));
        }

        if let Some(path) = &self.log_file {
            overrides.push(("global.log_file", path.display().to_string().into()));
        }

        overrides
    }
}
