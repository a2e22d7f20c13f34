//! Command executor
//!
//! Interprets one parsed command against the type-partitioned registries.
//! The partition is picked from the container name before any registry call;
//! every per-command failure becomes a `Rejected` outcome rather than an
//! `Err`, so one bad command never stops the ones after it.

use serde::{Deserialize, Serialize};

use crate::container::{Registry, RegistrySet};
use crate::error::{CommandError, Result};
use crate::output::OutputFormat;
use crate::parser::{Command, ContainerKind, ElementType};

/// Execution context containing runtime configuration
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Human,
            verbose: false,
        }
    }
}

/// Result of command execution
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub data: ResultData,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ResultData {
    Created(CreatedInfo),
    Pushed(PushedInfo),
    Popped(PoppedInfo),
    /// A non-fatal per-command error (duplicate name, missing name, empty
    /// container, bad literal).
    Rejected(CommandError),
}

/// Outcome of a successful create
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedInfo {
    pub name: String,
    pub kind: String,
    pub element_type: String,
}

/// Outcome of a successful push
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushedInfo {
    pub name: String,
    pub element_type: String,
}

/// Outcome of a successful pop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoppedInfo {
    pub name: String,
    pub value: Value,
}

/// A type-erased element value popped out of a container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
        }
    }
}

/// Execute a parsed command (stateless - for single commands)
pub fn execute_command(cmd: &Command, ctx: &ExecutionContext) -> Result<ExecutionResult> {
    let mut registries = RegistrySet::new();
    execute_command_with_registries(cmd, ctx, &mut registries)
}

/// Execute a parsed command against stateful registries
pub fn execute_command_with_registries(
    cmd: &Command,
    _ctx: &ExecutionContext,
    registries: &mut RegistrySet,
) -> Result<ExecutionResult> {
    let outcome = match cmd {
        Command::Create { name, kind } => execute_create(name, *kind, registries),
        Command::Push { name, literal } => execute_push(name, literal, registries),
        Command::Pop { name } => execute_pop(name, registries),
    };

    Ok(match outcome {
        Ok(result) => result,
        Err(err) => ExecutionResult {
            data: ResultData::Rejected(err),
            message: None,
        },
    })
}

fn execute_create(
    name: &str,
    kind: ContainerKind,
    registries: &mut RegistrySet,
) -> std::result::Result<ExecutionResult, CommandError> {
    let ty = ElementType::from_name(name);
    match ty {
        ElementType::Integer => {
            registries.ints_mut().create(name, kind)?;
        }
        ElementType::Float => {
            registries.floats_mut().create(name, kind)?;
        }
        ElementType::Text => {
            registries.texts_mut().create(name, kind)?;
        }
    }

    Ok(ExecutionResult {
        data: ResultData::Created(CreatedInfo {
            name: name.to_string(),
            kind: kind.to_string(),
            element_type: ty.to_string(),
        }),
        message: Some(format!(
            "Created {} '{}' in the {} partition",
            kind, name, ty
        )),
    })
}

fn execute_push(
    name: &str,
    literal: &str,
    registries: &mut RegistrySet,
) -> std::result::Result<ExecutionResult, CommandError> {
    let ty = ElementType::from_name(name);
    match ty {
        ElementType::Integer => push_converted(registries.ints_mut(), name, || {
            literal.parse::<i64>().map_err(|_| invalid(name, literal))
        })?,
        ElementType::Float => push_converted(registries.floats_mut(), name, || {
            literal.parse::<f64>().map_err(|_| invalid(name, literal))
        })?,
        ElementType::Text => {
            push_converted(registries.texts_mut(), name, || Ok(literal.to_string()))?
        }
    }

    Ok(ExecutionResult {
        data: ResultData::Pushed(PushedInfo {
            name: name.to_string(),
            element_type: ty.to_string(),
        }),
        message: Some(format!("Pushed '{}' onto '{}'", literal, name)),
    })
}

fn execute_pop(
    name: &str,
    registries: &mut RegistrySet,
) -> std::result::Result<ExecutionResult, CommandError> {
    let value = match ElementType::from_name(name) {
        ElementType::Integer => Value::Int(pop_front(registries.ints_mut(), name)?),
        ElementType::Float => Value::Float(pop_front(registries.floats_mut(), name)?),
        ElementType::Text => Value::Text(pop_front(registries.texts_mut(), name)?),
    };

    Ok(ExecutionResult {
        data: ResultData::Popped(PoppedInfo {
            name: name.to_string(),
            value,
        }),
        message: None,
    })
}

/// Name lookup happens before literal conversion, so a missing name wins
/// over a bad value.
fn push_converted<T, F>(
    registry: &mut Registry<T>,
    name: &str,
    convert: F,
) -> std::result::Result<(), CommandError>
where
    F: FnOnce() -> std::result::Result<T, CommandError>,
{
    let container = registry
        .get_mut(name)
        .ok_or_else(|| CommandError::NameNotFound {
            name: name.to_string(),
        })?;
    let value = convert()?;
    container.push(value);
    Ok(())
}

fn pop_front<T>(
    registry: &mut Registry<T>,
    name: &str,
) -> std::result::Result<T, CommandError> {
    let container = registry
        .get_mut(name)
        .ok_or_else(|| CommandError::NameNotFound {
            name: name.to_string(),
        })?;
    container.pop().ok_or_else(|| CommandError::EmptyContainer {
        name: name.to_string(),
    })
}

fn invalid(name: &str, literal: &str) -> CommandError {
    CommandError::InvalidValue {
        name: name.to_string(),
        literal: literal.to_string(),
    }
}
