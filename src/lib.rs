//! Silo - a tiny command language over named stacks and queues
//!
//! Silo interprets whitespace-delimited commands (`create`, `push`, `pop`)
//! that build and drain named LIFO and FIFO containers. Containers are
//! partitioned by element type (integer, float, text) and a trace of every
//! processed command is written to an output sink.
//!
//! # Example
//!
//! ```no_run
//! use silo::{execute_command, format_output, parse_line, ExecutionContext, OutputFormat};
//!
//! let cmd = parse_line("create i1 stack").unwrap();
//! let ctx = ExecutionContext::default();
//! let result = execute_command(&cmd, &ctx).unwrap();
//! println!("{}", format_output(&result, &OutputFormat::Human));
//! ```

pub mod cli;
pub mod container;
pub mod engine;
pub mod error;
pub mod output;
pub mod parser;
pub mod script;

#[cfg(feature = "repl")]
pub mod repl;

pub use container::{Chain, Container, ContainerSummary, Registry, RegistrySet};
pub use engine::{
    execute_command, execute_command_with_registries, ExecutionContext, ExecutionResult, Value,
};
pub use error::{CommandError, Result, SiloError};
pub use output::{format_output, OutputFormat};
pub use parser::{parse_line, parse_script, Command, ContainerKind, ElementType, Script};
pub use script::{validate_script, ScriptResult, ScriptRunner};
