//! Error types for Silo

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiloError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Execution error: {0}")]
    ExecutionError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SiloError>;

/// Per-command failures. These are outcomes, not fatal errors: the processor
/// reports them as a single trace line and moves on to the next command.
/// The `Display` text is the exact line written to the trace.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum CommandError {
    #[error("ERROR: This name already exists!")]
    DuplicateName { name: String },

    #[error("ERROR: This name does not exist!")]
    NameNotFound { name: String },

    #[error("ERROR: This list is empty!")]
    EmptyContainer { name: String },

    #[error("ERROR: This value does not match the container type!")]
    InvalidValue { name: String, literal: String },
}
