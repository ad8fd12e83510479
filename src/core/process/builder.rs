// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Describing a child process before it runs.

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, PoisonError};

use bitflags::bitflags;

use crate::error::ProcessError;

/// PATH lookups already made by this process, keyed by program name.
static RESOLVED: LazyLock<Mutex<HashMap<String, PathBuf>>> = LazyLock::new(Mutex::default);

bitflags! {
    /// How a child's output and exit status are treated.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProcessFlags: u8 {
        /// Print captured lines to stdout as they arrive
        const ECHO = 1;
        /// Capture stderr into the same line stream as stdout
        const MERGE_STDERR = 1 << 1;
        /// Report a non-zero exit in the output instead of failing
        const ALLOW_FAILURE = 1 << 2;
    }
}

/// Exit status and captured lines of a finished child.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    code: i32,
    lines: Vec<String>,
}

impl ProcessOutput {
    pub(super) const fn new(code: i32, lines: Vec<String>) -> Self {
        Self { code, lines }
    }

    /// Exit code; `-1` when the child was killed by a signal.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.code
    }

    /// Trimmed lines read before the first blank one.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.code == 0
    }
}

/// A program, its arguments and the flags it runs with.
///
/// Nothing is spawned until [`ProcessBuilder::run`] is awaited.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    pub(super) program: PathBuf,
    pub(super) args: Vec<OsString>,
    pub(super) cwd: Option<PathBuf>,
    pub(super) flags: ProcessFlags,
    label: Option<String>,
}

impl ProcessBuilder {
    /// Starts a description for `program`.
    ///
    /// A bare name is left for the OS to find in PATH at spawn time.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_owned(),
            args: Vec::new(),
            cwd: None,
            flags: ProcessFlags::empty(),
            label: None,
        }
    }

    /// Like [`ProcessBuilder::new`], with `program` resolved through PATH first.
    ///
    /// # Errors
    ///
    /// `ProcessError::ExecutableNotFound` when no such executable is on PATH.
    pub fn which(program: &str) -> std::result::Result<Self, ProcessError> {
        match Self::resolve(program) {
            Some(path) => Ok(Self::new(path)),
            None => Err(ProcessError::ExecutableNotFound {
                name: program.to_owned(),
            }),
        }
    }

    /// Full path of `program` on PATH, remembered for later calls.
    #[must_use]
    pub fn resolve(program: &str) -> Option<PathBuf> {
        let mut resolved = RESOLVED.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(path) = resolved.get(program) {
            return Some(path.clone());
        }
        let path = which::which(program).ok()?;
        resolved.insert(program.to_owned(), path.clone());
        Some(path)
    }

    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_owned()));
        self
    }

    /// Directory the child starts in; the caller's when unset.
    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_owned());
        self
    }

    /// Replaces all flags.
    #[must_use]
    pub const fn flags(mut self, flags: ProcessFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Adds `flag` to the current set.
    #[must_use]
    pub fn flag(mut self, flag: ProcessFlags) -> Self {
        self.flags.insert(flag);
        self
    }

    /// Name shown in logs and errors instead of the program's file stem.
    #[must_use]
    pub fn name(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    pub(super) fn label(&self) -> String {
        match (&self.label, self.program.file_stem()) {
            (Some(label), _) => label.clone(),
            (None, Some(stem)) => stem.to_string_lossy().into_owned(),
            (None, None) => "process".to_owned(),
        }
    }

    /// Label plus arguments, quoting any argument with a space.
    pub(super) fn command_line(&self) -> String {
        let mut line = self.label();
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            line.push(' ');
            if arg.contains(' ') {
                line.push('"');
                line.push_str(&arg);
                line.push('"');
            } else {
                line.push_str(&arg);
            }
        }
        line
    }
}
