// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! I/O streaming and output capture for processes.
//!
//! ```text
//! run_child()
//!   stdout reader task ----+
//!   stderr reader task ----+--> mpsc channel (arrival order)
//!   (MERGE_STDERR only)         |
//!                               v
//!                         LineCapture
//!            raw bytes per line, lossy UTF-8, trim, echo,
//!            stop at first blank line (pipes are drained regardless)
//!   wait
//!   --> ProcessOutput { exit_code, lines }
//! ```

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::error::Result;
use crate::say;

/// Accumulates trimmed output lines until the first blank one.
#[derive(Debug, Default)]
pub(super) struct LineCapture {
    lines: Vec<String>,
    closed: bool,
    echo: bool,
}

impl LineCapture {
    pub(super) fn new(echo: bool) -> Self {
        Self {
            echo,
            ..Self::default()
        }
    }

    /// Feeds one raw line. Returns false once capture has ended.
    pub(super) fn push(&mut self, raw: &str) -> bool {
        if self.closed {
            return false;
        }
        let line = raw.trim();
        if line.is_empty() {
            self.closed = true;
            return false;
        }
        if self.echo {
            say!("{line}");
        }
        self.lines.push(line.to_string());
        true
    }

    pub(super) fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Decodes one raw line; invalid UTF-8 sequences become U+FFFD.
pub(super) fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

/// Spawns a task forwarding every line of `reader` into `tx`.
fn spawn_reader<R>(
    reader: R,
    process_name: String,
    stream_name: &'static str,
    tx: mpsc::Sender<String>,
) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {
                    let line = decode_line(&buf);
                    trace!(process = %process_name, stream = stream_name, line = %line, "output");
                    // Receiver gone means the caller stopped listening; keep draining.
                    let _ = tx.send(line).await;
                }
                Err(e) => {
                    warn!(
                        process = %process_name,
                        stream = stream_name,
                        error = %e,
                        "error reading stream"
                    );
                    break;
                }
            }
        }
    })
}

impl ProcessBuilder {
    /// Runs the child process, capturing output and waiting for completion.
    pub(super) async fn run_child(&self, name: &str, child: &mut Child) -> Result<ProcessOutput> {
        let (tx, mut rx) = mpsc::channel::<String>(100);
        let mut readers = Vec::with_capacity(2);

        if let Some(stdout) = child.stdout.take() {
            readers.push(spawn_reader(stdout, name.to_string(), "stdout", tx.clone()));
        }
        if self.flags.contains(ProcessFlags::MERGE_STDERR)
            && let Some(stderr) = child.stderr.take()
        {
            readers.push(spawn_reader(stderr, name.to_string(), "stderr", tx.clone()));
        }
        drop(tx);

        let mut capture = LineCapture::new(self.flags.contains(ProcessFlags::ECHO));
        while let Some(line) = rx.recv().await {
            capture.push(&line);
        }

        for reader in readers {
            let _ = reader.await;
        }

        let status = child
            .wait()
            .await
            .with_context(|| format!("failed waiting for process {name} to exit"))?;

        Ok(ProcessOutput::new(
            status.code().unwrap_or(-1),
            capture.into_lines(),
        ))
    }
}
