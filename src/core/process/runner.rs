// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Spawning and awaiting a described process.
//!
//! ```text
//! stdin    inherited (credential prompts)
//! stdout   piped, captured
//! stderr   piped with MERGE_STDERR, inherited otherwise
//!
//! exit != 0 and no ALLOW_FAILURE  ->  ProcessError::NonZeroExit
//! ```

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, trace};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::error::{ProcessError, PtError, Result};

impl ProcessBuilder {
    /// Runs the process to completion.
    ///
    /// # Errors
    ///
    /// Fails when the program cannot be spawned, or when it exits non-zero
    /// without `ALLOW_FAILURE`.
    pub async fn run(self) -> Result<ProcessOutput> {
        let label = self.label();
        let command_line = self.command_line();
        match &self.cwd {
            Some(cwd) => debug!(cwd = %cwd.display(), command = %command_line, "running"),
            None => debug!(command = %command_line, "running"),
        }

        let mut child = match self.to_command().spawn() {
            Ok(child) => child,
            Err(source) => {
                return Err(PtError::from(ProcessError::SpawnFailed {
                    command: command_line,
                    source,
                })
                .into());
            }
        };
        trace!(process = %label, pid = ?child.id(), "spawned");

        let output = self.run_child(&label, &mut child).await?;
        trace!(process = %label, code = output.exit_code(), "exited");

        if output.success() || self.flags.contains(ProcessFlags::ALLOW_FAILURE) {
            Ok(output)
        } else {
            Err(PtError::from(ProcessError::NonZeroExit {
                command: command_line,
                code: output.exit_code(),
            })
            .into())
        }
    }

    fn to_command(&self) -> Command {
        let stderr = if self.flags.contains(ProcessFlags::MERGE_STDERR) {
            Stdio::piped()
        } else {
            Stdio::inherit()
        };

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(stderr)
            .kill_on_drop(true);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        command
    }
}
