// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Diagnostics for pt-rs, built on `tracing`.
//!
//! ```text
//! stdout   pt messages + echoed git output     (say!, never filtered)
//! stderr   console layer, [global] output_log_level (default 2 = warn)
//! file     optional, appended, [global] file_log_level (default 5 = trace)
//!
//! level    0 off   1 error   2 warn   3 info   4 debug   5 trace
//! ```
//!
//! At `debug` every git invocation is logged with its working directory;
//! at `trace` every captured output line follows.

use std::fmt;
use std::fs::OpenOptions;
use std::path::Path;

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::error::{ConfigError, Result};

const DIRECTIVES: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Verbosity on the 0-5 scale used by the config file and `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LogLevel(u8);

impl LogLevel {
    pub const OFF: Self = Self(0);
    pub const ERROR: Self = Self(1);
    pub const WARN: Self = Self(2);
    pub const INFO: Self = Self(3);
    pub const DEBUG: Self = Self(4);
    pub const TRACE: Self = Self(5);

    /// Validates a numeric level.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidValue` for anything above 5.
    pub fn new(level: u8) -> std::result::Result<Self, ConfigError> {
        if usize::from(level) < DIRECTIVES.len() {
            Ok(Self(level))
        } else {
            Err(ConfigError::InvalidValue {
                section: "global".to_string(),
                key: "log_level".to_string(),
                message: format!("log level must be 0-5, got {level}"),
            })
        }
    }

    /// `EnvFilter` directive for this level.
    #[must_use]
    pub fn directive(self) -> &'static str {
        DIRECTIVES[usize::from(self.0)]
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::WARN
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.directive())
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(level: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

/// Where diagnostics go and how much of them.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::WARN)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::TRACE)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file))]
    log_file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }
}

/// Keeps the file writer alive; pending lines are flushed on drop.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

fn console_layer(level: LogLevel) -> BoxedLayer {
    tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(EnvFilter::new(level.directive()))
        .boxed()
}

fn file_layer(path: &Path, level: LogLevel) -> Result<(BoxedLayer, WorkerGuard)> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_filter(EnvFilter::new(level.directive()))
        .boxed();
    Ok((layer, guard))
}

/// Installs the global subscriber described by `config`.
///
/// Keep the returned guard until the process exits.
///
/// # Errors
///
/// Fails if the log file cannot be opened or a subscriber is already set.
///
/// # Example
///
/// ```no_run
/// use pt_rs::logging::{LogConfig, LogLevel, init_logging};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::DEBUG)
///     .with_log_file("pt.log".to_string())
///     .build();
/// let _guard = init_logging(&config)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let mut layers = vec![console_layer(config.console_level())];
    let mut file_guard = None;
    if let Some(path) = config.log_file() {
        let (layer, guard) = file_layer(Path::new(path), config.file_level())?;
        layers.push(layer);
        file_guard = Some(guard);
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .context("failed to install the global log subscriber")?;

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

#[cfg(test)]
mod tests;
