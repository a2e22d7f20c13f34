//! Script validation
//!
//! Lints a parsed script before execution. Everything here is advisory: the
//! runner itself handles every rejected command at runtime, but a script
//! author usually wants to hear about a doomed push before the run.

use std::collections::HashSet;

use crate::parser::{Command, ElementType, Script};

/// Issues found while validating a script
#[derive(Debug, Clone)]
pub struct ScriptValidationError {
    pub line: Option<usize>,
    pub message: String,
    pub severity: ValidationSeverity,
}

/// Severity level for validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

impl std::fmt::Display for ScriptValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            ValidationSeverity::Error => "ERROR",
            ValidationSeverity::Warning => "WARNING",
        };
        if let Some(line) = self.line {
            write!(f, "{} (line {}): {}", prefix, line, self.message)
        } else {
            write!(f, "{}: {}", prefix, self.message)
        }
    }
}

/// Validation options
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    /// Treat warnings as errors
    pub strict: bool,
    /// Maximum number of commands in one script
    pub max_commands: usize,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            strict: false,
            max_commands: 10_000,
        }
    }
}

/// Validate a script without executing it
pub fn validate_script(script: &Script, options: &ValidationOptions) -> Vec<ScriptValidationError> {
    let mut errors = Vec::new();

    if script.lines.len() > options.max_commands {
        errors.push(ScriptValidationError {
            line: None,
            message: format!(
                "Script has {} commands, more than the limit of {}",
                script.lines.len(),
                options.max_commands
            ),
            severity: ValidationSeverity::Error,
        });
        return errors;
    }

    // Names created earlier in the script, per partition
    let mut created: HashSet<(ElementType, &str)> = HashSet::new();

    for line in &script.lines {
        match &line.command {
            Command::Create { name, .. } => {
                let ty = ElementType::from_name(name);
                if !created.insert((ty, name.as_str())) {
                    errors.push(ScriptValidationError {
                        line: Some(line.line),
                        message: format!(
                            "'{}' is created twice; the second create will be rejected",
                            name
                        ),
                        severity: ValidationSeverity::Warning,
                    });
                }
            }
            Command::Push { name, literal } => {
                let ty = ElementType::from_name(name);
                if !created.contains(&(ty, name.as_str())) {
                    errors.push(ScriptValidationError {
                        line: Some(line.line),
                        message: format!("'{}' is pushed to before any create", name),
                        severity: ValidationSeverity::Warning,
                    });
                }
                // Conversion is statically checkable from the name alone
                let convertible = match ty {
                    ElementType::Integer => literal.parse::<i64>().is_ok(),
                    ElementType::Float => literal.parse::<f64>().is_ok(),
                    ElementType::Text => true,
                };
                if !convertible {
                    errors.push(ScriptValidationError {
                        line: Some(line.line),
                        message: format!(
                            "'{}' is not a valid {} value for '{}'",
                            literal, ty, name
                        ),
                        severity: ValidationSeverity::Error,
                    });
                }
            }
            Command::Pop { name } => {
                let ty = ElementType::from_name(name);
                if !created.contains(&(ty, name.as_str())) {
                    errors.push(ScriptValidationError {
                        line: Some(line.line),
                        message: format!("'{}' is popped before any create", name),
                        severity: ValidationSeverity::Warning,
                    });
                }
            }
        }
    }

    if options.strict {
        for error in &mut errors {
            error.severity = ValidationSeverity::Error;
        }
    }

    errors
}

/// Check if a script has any validation errors (not just warnings)
pub fn has_errors(errors: &[ScriptValidationError]) -> bool {
    errors
        .iter()
        .any(|e| e.severity == ValidationSeverity::Error)
}

/// Check if a script has any validation warnings
pub fn has_warnings(errors: &[ScriptValidationError]) -> bool {
    errors
        .iter()
        .any(|e| e.severity == ValidationSeverity::Warning)
}
