//! Command dispatch and handler modules.

mod inspect;
mod manifest;
mod tree;

use std::path::PathBuf;

use miette::Result;

use ivyscan_core::config::{ScanConfig, CONFIG_FILE};
use ivyscan_util::errors::ScanError;
use ivyscan_util::fs::find_ancestor_with;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Manifest {
            report,
            out,
            runtime_conf,
        } => manifest::exec(&report, out, runtime_conf),
        Command::Tree {
            report,
            depth,
            why,
            runtime_conf,
        } => tree::exec(&report, depth, why, runtime_conf),
        Command::Inspect { file } => inspect::exec(&file),
    }
}

/// Project directory and its configuration.
///
/// The project directory is the nearest ancestor holding `ivyscan.toml`,
/// or the working directory when there is none.
pub(crate) fn load_config() -> Result<(PathBuf, ScanConfig)> {
    let cwd = std::env::current_dir().map_err(ScanError::Io)?;
    let project_root = find_ancestor_with(&cwd, CONFIG_FILE).unwrap_or(cwd);
    let config = ScanConfig::load(&project_root)?;
    Ok((project_root, config))
}

/// Flag values win over the configured ones.
pub(crate) fn runtime_confs(flags: Vec<String>, config: &ScanConfig) -> Vec<String> {
    if flags.is_empty() {
        config.classify.runtime_confs.clone()
    } else {
        flags
    }
}
