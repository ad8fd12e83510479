// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Git --> Command Dispatch
//!   Fetch | Checkout | Pull | Push | Propose | Start | Cleanup
//! ```

use std::process::ExitCode;

use pt_rs::cli::global::GlobalOptions;
use pt_rs::cli::{self, Command};
use pt_rs::cmd::run_command;
use pt_rs::config::loader::ConfigLoader;
use pt_rs::config::{Config, ENV_PREFIX, REPO_CONFIG_FILE};
use pt_rs::error::{PtError, exit_code_of, is_child_failure};
use pt_rs::git::shell::Git;
use pt_rs::logging::init_logging;
use tracing::debug;

/// Exit status clap uses for usage errors.
const EXIT_USAGE: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();
    let Some(command) = &cli.command else {
        eprintln!("No command specified. Use --help for usage information.");
        return ExitCode::from(EXIT_USAGE);
    };

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::from(exit_code_of(&e));
        }
    };

    let _log_guard = match init_logging(&config.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch_command(command, &cli.global, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::from(exit_code_of(&e))
        }
    }
}

async fn dispatch_command(
    command: &Command,
    global: &GlobalOptions,
    config: &Config,
) -> pt_rs::error::Result<()> {
    let git = Git::new(&config.tools.git, global.repo_dir()).map_err(PtError::from)?;
    debug!(git = %config.tools.git, workdir = %git.workdir().display(), "dispatching");

    run_command(command, &git).await
}

/// Prints the failure unless git already reported it on its own stderr.
fn report_error(err: &anyhow::Error) {
    if is_child_failure(err) {
        debug!("{err:#}");
    } else {
        eprintln!("{err:#}");
    }
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader =
        ConfigLoader::new().add_toml_file_optional(global.repo_dir().join(REPO_CONFIG_FILE));
    if let Some(path) = &global.config {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value);
    }
    loader
}

fn load_config(global: &GlobalOptions) -> pt_rs::error::Result<Config> {
    build_config_loader(global).build()
}
