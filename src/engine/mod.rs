//! Execution engine for silo commands

pub mod executor;

pub use executor::{
    execute_command, execute_command_with_registries, ExecutionContext, ExecutionResult,
    ResultData, Value,
};
