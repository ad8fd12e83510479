// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sections of the configuration file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// `[global]`: diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Verbosity of stderr diagnostics.
    pub output_log_level: LogLevel,
    /// Verbosity of `log_file`.
    pub file_log_level: LogLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        let log = crate::logging::LogConfig::default();
        Self {
            output_log_level: log.console_level(),
            file_log_level: log.file_level(),
            log_file: None,
        }
    }
}

/// `[tools]`: external programs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// Bare name searched in PATH, or a path used as is.
    pub git: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self { git: "git".into() }
    }
}
