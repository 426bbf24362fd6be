//! CLI argument definitions for ivyscan.
//!
//! Each command corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ivyscan",
    version,
    about = "Register Ivy-resolved dependencies for component detection",
    long_about = "ivyscan reads the dependency graph produced by an Ivy resolve and writes \
                  RegisterUsage.json: every third-party module reachable from the root, \
                  with its parent, resolution state and dev/runtime classification."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write RegisterUsage.json from a resolve report
    Manifest {
        /// Resolve report (JSON) to read
        #[arg(short, long)]
        report: PathBuf,
        /// Output file [default: target/RegisterUsage.json]
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Configuration whose members are runtime dependencies (repeatable)
        #[arg(long = "runtime-conf", value_name = "NAME")]
        runtime_conf: Vec<String>,
    },

    /// Display the flattened dependency tree
    Tree {
        /// Resolve report (JSON) to read
        #[arg(short, long)]
        report: PathBuf,
        /// Maximum depth to display
        #[arg(short, long)]
        depth: Option<usize>,
        /// Show why a dependency is included (group:name[:rev] or name)
        #[arg(long)]
        why: Option<String>,
        /// Configuration whose members are runtime dependencies (repeatable)
        #[arg(long = "runtime-conf", value_name = "NAME")]
        runtime_conf: Vec<String>,
    },

    /// Read a RegisterUsage.json back and print what it registers
    Inspect {
        /// Usage document to read
        file: PathBuf,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
