// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Handle on the git executable for one working tree.
//!
//! ```text
//! Git { program, workdir }
//!   .command(args)  --> ProcessBuilder (cwd = workdir, name = "git")
//!   .run(args)      capture, fail on non-zero
//!   .echo(args)     capture + print each line
//!   .try_run(args)  capture, non-zero returned in ProcessOutput
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::core::process::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::error::{ProcessError, Result};

/// Git executable bound to the repository every command runs in.
#[derive(Debug, Clone)]
pub struct Git {
    program: PathBuf,
    workdir: PathBuf,
}

impl Git {
    /// Creates a handle running `program` inside `workdir`.
    ///
    /// A bare program name is looked up in PATH; anything containing a path
    /// separator is used as given.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if a bare name is not in PATH.
    pub fn new(program: &str, workdir: impl AsRef<Path>) -> std::result::Result<Self, ProcessError> {
        let program = if Path::new(program).components().count() > 1 {
            PathBuf::from(program)
        } else {
            ProcessBuilder::which(program)?.program().to_path_buf()
        };
        Ok(Self {
            program,
            workdir: workdir.as_ref().to_path_buf(),
        })
    }

    /// Directory git runs in.
    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Returns a process builder for `git <args>` in the working tree.
    pub fn command<I, S>(&self, args: I) -> ProcessBuilder
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        ProcessBuilder::new(&self.program)
            .name("git")
            .cwd(&self.workdir)
            .args(args)
    }

    /// Runs git and returns the captured lines.
    ///
    /// # Errors
    ///
    /// Fails if git cannot be spawned or exits non-zero.
    pub async fn run<I, S>(&self, args: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Ok(self.command(args).run().await?.into_lines())
    }

    /// Runs git, printing each captured line as it arrives.
    ///
    /// # Errors
    ///
    /// Fails if git cannot be spawned or exits non-zero.
    pub async fn echo<I, S>(&self, args: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Ok(self
            .command(args)
            .flag(ProcessFlags::ECHO)
            .run()
            .await?
            .into_lines())
    }

    /// Runs git without failing on a non-zero exit.
    ///
    /// # Errors
    ///
    /// Fails only if git cannot be spawned.
    pub async fn try_run<I, S>(&self, args: I) -> Result<ProcessOutput>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.command(args)
            .flag(ProcessFlags::ALLOW_FAILURE)
            .run()
            .await
    }
}
