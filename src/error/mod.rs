// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              PtError (~16 bytes)
//!                     |
//!           +---------+---------+
//!           |         |         |
//!           v         v         v
//!          Git     Process    Config
//!          Box       Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Git      NoRemotes, RemoteNotConfigured, RemoteNotFound,
//!            NoPatchsets, PatchsetNotFound, UncommittedChanges,
//!            BranchCollision, Diverged, TicketUnresolved,
//!            PatchsetExists, CleanupNotForced
//!   Process  ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Config   ParseError, InvalidValue
//!
//! Exit status:
//!   Git      -> 22 (EINVAL)
//!   Process  -> NonZeroExit carries the child's own code
//!   other    -> 1
//! ```

use std::fmt::Write as _;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`PtError`].
pub type PtResult<T> = std::result::Result<T, PtError>;

/// Exit status for locally detected failures (`EINVAL`).
pub const EXIT_INVALID_ARGUMENT: u8 = 22;

/// Exit status for failures that carry no status of their own.
pub const EXIT_FAILURE: u8 = 1;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum PtError {
    /// Precondition, resolution or divergence failure detected locally.
    #[error(transparent)]
    Git(#[from] Box<GitError>),

    /// External process failure.
    #[error(transparent)]
    Process(#[from] Box<ProcessError>),

    /// Configuration error.
    #[error(transparent)]
    Config(#[from] Box<ConfigError>),
}

impl PtError {
    /// Process exit status this error terminates the tool with.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Git(_) => EXIT_INVALID_ARGUMENT,
            Self::Process(err) => err.exit_code(),
            Self::Config(_) => EXIT_FAILURE,
        }
    }
}

/// Exit status for any error produced by a command handler.
///
/// Sub-errors raised without being wrapped in a [`PtError`] are recognised
/// too; anything else maps to [`EXIT_FAILURE`].
#[must_use]
pub fn exit_code_of(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| {
            if let Some(pt) = cause.downcast_ref::<PtError>() {
                Some(pt.exit_code())
            } else if cause.is::<GitError>() {
                Some(EXIT_INVALID_ARGUMENT)
            } else {
                cause.downcast_ref::<ProcessError>().map(ProcessError::exit_code)
            }
        })
        .unwrap_or(EXIT_FAILURE)
}

/// Whether `err` is a child process that exited non-zero.
///
/// The child has already written its own diagnostics to stderr by then.
#[must_use]
pub fn is_child_failure(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        let process = match cause.downcast_ref::<PtError>() {
            Some(PtError::Process(p)) => Some(&**p),
            Some(_) => None,
            None => cause.downcast_ref::<ProcessError>(),
        };
        matches!(process, Some(ProcessError::NonZeroExit { .. }))
    })
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for PtError {
                fn from(err: $error) -> Self {
                    PtError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ProcessError => Process,
    ConfigError => Config,
}

// --- Git Errors ---

/// Which flag lifts the uncommitted-changes guard for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Override {
    /// `--force`: local changes are discarded by a hard reset.
    Force,
    /// `--ignore`: local changes are left alone and not pushed.
    Ignore,
}

impl Override {
    /// Command-line spelling of the override flag.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Force => "--force",
            Self::Ignore => "--ignore",
        }
    }
}

/// Failures detected locally before or instead of running git.
///
/// Every message carries the remediation the user needs.
#[derive(Debug, Error)]
pub enum GitError {
    /// The repository has no remotes.
    #[error("Please define a Git remote")]
    NoRemotes,

    /// Several remotes exist and `patchsets.remote` is unset.
    #[error(
        "You have multiple remote repositories and you have not configured 'patchsets.remote'.\n\n\
         Available remotes:\n{list}\n\
         Please set the remote to use for patchsets.\n  \
         git config --local patchsets.remote <remote>",
        list = bullet_list(.remotes)
    )]
    RemoteNotConfigured { remotes: Vec<String> },

    /// `patchsets.remote` names something that is not a remote.
    #[error(
        "The '{remote}' repository specified in 'patchsets.remote' is not a valid Git remote!\n\n\
         Available remotes:\n{list}\n\
         Please set the remote repository to use for patchsets.\n  \
         git config --local patchsets.remote <remote>",
        list = bullet_list(.remotes)
    )]
    RemoteNotFound { remote: String, remotes: Vec<String> },

    /// The ticket has no patchsets on the remote (or does not exist).
    #[error("There are no patchsets for ticket {ticket} in the '{remote}' repository")]
    NoPatchsets { ticket: u64, remote: String },

    /// The requested patchset is not on the remote.
    #[error("Patchset {patchset} for ticket {ticket} can not be found in the '{remote}' repository")]
    PatchsetNotFound {
        ticket: u64,
        patchset: u64,
        remote: String,
    },

    /// Tracked files are modified and the override flag is absent.
    #[error("{}", uncommitted_message(.command, .paths, .flag))]
    UncommittedChanges {
        command: String,
        paths: Vec<String>,
        flag: Override,
    },

    /// Existing local branches prevent creating the target branch.
    #[error(
        "Sorry, can not complete the {action}.\n\
         The following branches are blocking '{branch}' branch creation:\n{list}",
        list = bullet_list(.blockers).trim_end()
    )]
    BranchCollision {
        action: String,
        branch: String,
        blockers: Vec<String>,
    },

    /// The local patchset branch cannot fast-forward to the fetched patchset.
    #[error(
        "Your '{branch}' branch has diverged from patchset {patchset} on the '{remote}' repository.\n\n\
         To discard your local changes, repeat the checkout with '--force'.\n\
         NOTE: forcing a checkout will HARD RESET your working directory!"
    )]
    Diverged {
        branch: String,
        patchset: u64,
        remote: String,
    },

    /// `push` without an id on a branch that does not name a ticket.
    #[error("Please specify a ticket id for the push command.")]
    TicketUnresolved,

    /// `propose` targeted a ticket that already has a patchset.
    #[error("{}", patchset_exists_message(.ticket, .branch.as_deref()))]
    PatchsetExists { ticket: u64, branch: Option<String> },

    /// `cleanup` found branches but `--force` was not given.
    #[error("To discard these local branches, repeat this command with '--force'.")]
    CleanupNotForced,
}

fn bullet_list(items: &[String]) -> String {
    items.iter().fold(String::new(), |mut out, item| {
        let _ = writeln!(out, "  {item}");
        out
    })
}

fn uncommitted_message(command: &str, paths: &[String], flag: &Override) -> String {
    let mut msg = format!(
        "Your local changes to the following files would be overwritten by {command}:\n\n"
    );
    msg.push_str(&bullet_list(paths));
    msg.push('\n');
    match flag {
        Override::Force => {
            let _ = write!(
                msg,
                "To discard your local changes, repeat the {command} with '--force'.\n\
                 NOTE: forcing a {command} will HARD RESET your working directory!"
            );
        }
        Override::Ignore => {
            let _ = write!(
                msg,
                "To {command} anyway and leave these changes uncommitted, repeat the {command} with '--ignore'."
            );
        }
    }
    msg
}

fn patchset_exists_message(ticket: &u64, branch: Option<&str>) -> String {
    let mut msg =
        format!("You can not propose a patchset for ticket {ticket} because it already has one.");
    if let Some(branch) = branch {
        let _ = write!(
            msg,
            "\nYou are on the '{branch}' branch, perhaps you meant to push instead?"
        );
    }
    msg
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}

impl ProcessError {
    /// The child's own exit code for `NonZeroExit`, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            // Codes outside 1..=255 (signals) collapse to a generic failure.
            Self::NonZeroExit { code, .. } => {
                u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(EXIT_FAILURE)
            }
            _ => EXIT_FAILURE,
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse or merge configuration sources.
    #[error("{message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
