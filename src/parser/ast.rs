//! Abstract Syntax Tree definitions for the silo command language

use serde::{Deserialize, Serialize};

/// One parsed command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Create a named stack or queue.
    Create { name: String, kind: ContainerKind },
    /// Push a literal onto a named container. The literal stays untyped here;
    /// conversion happens once the partition is known.
    Push { name: String, literal: String },
    /// Pop the front value off a named container.
    Pop { name: String },
}

impl Command {
    /// The container name the command targets.
    pub fn target(&self) -> &str {
        match self {
            Command::Create { name, .. } => name,
            Command::Push { name, .. } => name,
            Command::Pop { name } => name,
        }
    }
}

/// A parsed command paired with the original line text. The trace echoes the
/// raw text verbatim before reporting the outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandLine {
    pub raw: String,
    /// 1-based line number in the input.
    pub line: usize,
    pub command: Command,
}

/// A script is a sequence of command lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub lines: Vec<CommandLine>,
}

/// Access discipline of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerKind {
    Stack,
    Queue,
}

impl std::fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerKind::Stack => write!(f, "stack"),
            ContainerKind::Queue => write!(f, "queue"),
        }
    }
}

/// Element type of a container, and thus the registry partition it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    Integer,
    Float,
    Text,
}

impl ElementType {
    /// Partition selection convention: the leading character of the container
    /// name picks the element type. `i` is integer, `d` or `f` is float, and
    /// everything else falls back to text so that every name is addressable.
    pub fn from_name(name: &str) -> ElementType {
        match name.chars().next() {
            Some('i') => ElementType::Integer,
            Some('d') | Some('f') => ElementType::Float,
            _ => ElementType::Text,
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementType::Integer => write!(f, "integer"),
            ElementType::Float => write!(f, "float"),
            ElementType::Text => write!(f, "text"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_type_from_name() {
        assert_eq!(ElementType::from_name("i1"), ElementType::Integer);
        assert_eq!(ElementType::from_name("d1"), ElementType::Float);
        assert_eq!(ElementType::from_name("f2"), ElementType::Float);
        assert_eq!(ElementType::from_name("s1"), ElementType::Text);
        assert_eq!(ElementType::from_name("missing1"), ElementType::Text);
        assert_eq!(ElementType::from_name(""), ElementType::Text);
    }

    #[test]
    fn test_command_target() {
        let cmd = Command::Push {
            name: "q1".to_string(),
            literal: "5".to_string(),
        };
        assert_eq!(cmd.target(), "q1");
    }

    #[test]
    fn test_display() {
        assert_eq!(ContainerKind::Stack.to_string(), "stack");
        assert_eq!(ContainerKind::Queue.to_string(), "queue");
        assert_eq!(ElementType::Integer.to_string(), "integer");
    }
}
