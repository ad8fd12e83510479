// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered loading of [`Config`].
//!
//! Sources are recorded in the order they are added and only touched by
//! [`ConfigLoader::build`]; later layers win key by key.
//!
//! ```text
//! TOML layers      files and strings, in call order
//! environment      <PREFIX>_<SECTION>__<KEY>, numbers parsed,
//!                  other <PREFIX>_* variables ignored
//! overrides        set(key, value), always last
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use config::{Environment, File, FileFormat, Map, Value};
use tracing::debug;

use super::Config;
use crate::error::{ConfigError, PtError, Result};

/// Top-level tables of [`Config`]; the only keys the environment may set.
const SECTIONS: [&str; 2] = ["global", "tools"];

#[derive(Debug)]
enum Layer {
    File { path: PathBuf, required: bool },
    Text(String),
}

/// Collects configuration sources, then merges them into a [`Config`].
#[derive(Debug, Default)]
pub struct ConfigLoader {
    layers: Vec<Layer>,
    env_prefix: Option<String>,
    overrides: Vec<(String, Value)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a TOML file; `build` fails when it is missing.
    #[must_use]
    pub fn add_toml_file(mut self, path: impl AsRef<Path>) -> Self {
        self.layers.push(Layer::File {
            path: path.as_ref().to_owned(),
            required: true,
        });
        self
    }

    /// Adds a TOML file that is ignored when missing.
    #[must_use]
    pub fn add_toml_file_optional(mut self, path: impl AsRef<Path>) -> Self {
        self.layers.push(Layer::File {
            path: path.as_ref().to_owned(),
            required: false,
        });
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.layers.push(Layer::Text(content.to_owned()));
        self
    }

    /// Reads `<prefix>_<SECTION>__<KEY>` variables on top of the TOML layers.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_owned());
        self
    }

    /// Forces `key` (dotted, e.g. `global.log_file`) to `value`.
    #[must_use]
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.overrides.push((key.to_owned(), value.into()));
        self
    }

    /// Files that exist and will take part in `build`, in load order.
    #[must_use]
    pub fn loaded_files(&self) -> Vec<&Path> {
        self.layers
            .iter()
            .filter_map(|layer| match layer {
                Layer::File { path, required } if *required || path.exists() => {
                    Some(path.as_path())
                }
                _ => None,
            })
            .collect()
    }

    /// Merges every source into a [`Config`].
    ///
    /// # Errors
    ///
    /// `ConfigError::ParseError` for a missing required file, malformed TOML,
    /// an unknown section or key, or a value of the wrong type or range.
    pub fn build(self) -> Result<Config> {
        debug!(files = ?self.loaded_files(), "loading configuration");

        let mut builder = config::Config::builder();
        for layer in self.layers {
            builder = match layer {
                Layer::File { path, required } => builder.add_source(
                    File::from(path)
                        .format(FileFormat::Toml)
                        .required(required),
                ),
                Layer::Text(text) => builder.add_source(File::from_str(&text, FileFormat::Toml)),
            };
        }
        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(section_vars(prefix, std::env::vars_os()))),
            );
        }
        for (key, value) in self.overrides {
            builder = builder.set_override(key, value).map_err(load_error)?;
        }

        builder
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|err| load_error(err).into())
    }
}

/// Keeps only `<prefix>_<SECTION>__*` variables naming a known section, so
/// unrelated variables sharing the prefix (`PT_HOME`) are ignored.
pub(super) fn section_vars<I>(prefix: &str, vars: I) -> Map<String, String>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let heads: Vec<String> = SECTIONS
        .iter()
        .map(|section| format!("{prefix}_{section}__").to_lowercase())
        .collect();
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .filter(|(key, _)| {
            let key = key.to_lowercase();
            heads.iter().any(|head| key.starts_with(head.as_str()))
        })
        .collect()
}

fn load_error(err: config::ConfigError) -> PtError {
    ConfigError::ParseError {
        message: err.to_string(),
    }
    .into()
}
