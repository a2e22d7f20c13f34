//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "silo")]
#[command(
    author,
    version,
    about = "Drive named stacks and queues with a tiny command language",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Run a command script file
    Run {
        /// Path to the script file (prompted for when omitted)
        file: Option<PathBuf>,

        /// Write the trace to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Treat validation warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Execute a single command
    Exec {
        /// The command to execute (e.g. "create i1 stack")
        command: String,
    },

    /// Validate and explain a script without executing it
    Check {
        /// Path to the script file
        file: PathBuf,
    },

    /// Start interactive REPL mode
    Repl,
}
