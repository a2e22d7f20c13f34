//! Script runner for executing command files
//!
//! Runs every command line in order against one set of registries, writing
//! the trace to a caller-supplied sink: an echo line per command, then the
//! outcome line when there is one.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::container::RegistrySet;
use crate::engine::{
    execute_command_with_registries, ExecutionContext, ExecutionResult, ResultData,
};
use crate::error::{Result, SiloError};
use crate::output::format_output;
use crate::parser::{parse_script, Command, ElementType, Script};

/// Result of script execution
#[derive(Debug)]
pub struct ScriptResult {
    /// All results from executed commands
    pub results: Vec<ExecutionResult>,
    /// Total commands executed
    pub statements_executed: usize,
    /// How many commands were rejected (non-fatal errors in the trace)
    pub errors_reported: usize,
    /// Whether the script completed successfully
    pub success: bool,
    /// Error message if script failed
    pub error: Option<String>,
}

/// Script runner that manages script execution
pub struct ScriptRunner {
    /// Execution context (output format, verbosity)
    exec_ctx: ExecutionContext,
    /// The containers, kept across all commands of the run
    registries: RegistrySet,
}

impl ScriptRunner {
    /// Create a new script runner with empty registries
    pub fn new(exec_ctx: ExecutionContext) -> Self {
        Self {
            exec_ctx,
            registries: RegistrySet::new(),
        }
    }

    /// The registries accumulated so far
    pub fn registries(&self) -> &RegistrySet {
        &self.registries
    }

    /// Load, parse and run a script file, tracing to `out`
    pub fn run_file(&mut self, path: &Path, out: &mut impl Write) -> Result<ScriptResult> {
        let content = fs::read_to_string(path).map_err(SiloError::IoError)?;
        let script = parse_script(&content)?;
        self.run_script(&script, out)
    }

    /// Run a parsed script, tracing to `out`
    pub fn run_script(&mut self, script: &Script, out: &mut impl Write) -> Result<ScriptResult> {
        let mut results = Vec::new();
        let mut statements_executed = 0;
        let mut errors_reported = 0;

        for line in &script.lines {
            // Echo first; the outcome line depends on this ordering
            writeln!(out, "PROCESSING COMMAND: {}", line.raw)?;

            match execute_command_with_registries(&line.command, &self.exec_ctx, &mut self.registries)
            {
                Ok(result) => {
                    statements_executed += 1;
                    if matches!(result.data, ResultData::Rejected(_)) {
                        errors_reported += 1;
                    }

                    let rendered = format_output(&result, &self.exec_ctx.output_format);
                    if !rendered.is_empty() {
                        writeln!(out, "{}", rendered)?;
                    } else if self.exec_ctx.verbose {
                        if let Some(msg) = &result.message {
                            writeln!(out, "{}", msg)?;
                        }
                    }

                    results.push(result);
                }
                Err(e) => {
                    return Ok(ScriptResult {
                        results,
                        statements_executed,
                        errors_reported,
                        success: false,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        Ok(ScriptResult {
            results,
            statements_executed,
            errors_reported,
            success: true,
            error: None,
        })
    }
}

/// Explain a script without executing
pub fn explain_script(script: &Script) -> Vec<String> {
    script
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, explain_command(&line.command)))
        .collect()
}

fn explain_command(cmd: &Command) -> String {
    match cmd {
        Command::Create { name, kind } => {
            format!(
                "CREATE {} '{}' ({} partition)",
                kind,
                name,
                ElementType::from_name(name)
            )
        }
        Command::Push { name, literal } => {
            format!(
                "PUSH '{}' onto '{}' ({} partition)",
                literal,
                name,
                ElementType::from_name(name)
            )
        }
        Command::Pop { name } => {
            format!("POP from '{}' ({} partition)", name, ElementType::from_name(name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    fn run_to_string(input: &str) -> (ScriptResult, String) {
        let script = parse_script(input).unwrap();
        let mut runner = ScriptRunner::new(ExecutionContext::default());
        let mut out = Vec::new();
        let result = runner.run_script(&script, &mut out).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_stack_trace_end_to_end() {
        let (result, trace) = run_to_string("create s1 stack\npush s1 5\npush s1 7\npop s1\n");
        assert!(result.success);
        assert_eq!(result.statements_executed, 4);
        assert_eq!(result.errors_reported, 0);
        assert_eq!(
            trace,
            "PROCESSING COMMAND: create s1 stack\n\
             PROCESSING COMMAND: push s1 5\n\
             PROCESSING COMMAND: push s1 7\n\
             PROCESSING COMMAND: pop s1\n\
             Value popped: 7\n"
        );
    }

    #[test]
    fn test_queue_trace_end_to_end() {
        let (_, trace) =
            run_to_string("create q1 queue\npush q1 5\npush q1 7\npop q1\npop q1\n");
        assert_eq!(
            trace,
            "PROCESSING COMMAND: create q1 queue\n\
             PROCESSING COMMAND: push q1 5\n\
             PROCESSING COMMAND: push q1 7\n\
             PROCESSING COMMAND: pop q1\n\
             Value popped: 5\n\
             PROCESSING COMMAND: pop q1\n\
             Value popped: 7\n"
        );
    }

    #[test]
    fn test_missing_name_trace() {
        let (result, trace) = run_to_string("pop missing1\n");
        assert!(result.success);
        assert_eq!(result.errors_reported, 1);
        assert_eq!(
            trace,
            "PROCESSING COMMAND: pop missing1\nERROR: This name does not exist!\n"
        );
    }

    #[test]
    fn test_duplicate_create_trace() {
        let (result, trace) = run_to_string("create s1 stack\ncreate s1 stack\n");
        assert_eq!(result.errors_reported, 1);
        assert_eq!(
            trace,
            "PROCESSING COMMAND: create s1 stack\n\
             PROCESSING COMMAND: create s1 stack\n\
             ERROR: This name already exists!\n"
        );
    }

    #[test]
    fn test_empty_pop_trace() {
        let (_, trace) = run_to_string("create i1 queue\npop i1\n");
        assert_eq!(
            trace,
            "PROCESSING COMMAND: create i1 queue\n\
             PROCESSING COMMAND: pop i1\n\
             ERROR: This list is empty!\n"
        );
    }

    #[test]
    fn test_errors_do_not_stop_the_run() {
        let (result, trace) =
            run_to_string("pop i1\ncreate i1 stack\npush i1 3\npop i1\n");
        assert!(result.success);
        assert_eq!(result.statements_executed, 4);
        assert!(trace.ends_with("Value popped: 3\n"));
    }

    #[test]
    fn test_verbose_adds_messages() {
        let script = parse_script("create i1 stack\n").unwrap();
        let ctx = ExecutionContext {
            output_format: OutputFormat::Human,
            verbose: true,
        };
        let mut runner = ScriptRunner::new(ctx);
        let mut out = Vec::new();
        runner.run_script(&script, &mut out).unwrap();
        let trace = String::from_utf8(out).unwrap();
        assert!(trace.contains("Created stack 'i1' in the integer partition"));
    }

    #[test]
    fn test_registries_persist_across_run() {
        let script = parse_script("create i1 stack\npush i1 9\n").unwrap();
        let mut runner = ScriptRunner::new(ExecutionContext::default());
        let mut out = Vec::new();
        runner.run_script(&script, &mut out).unwrap();
        assert_eq!(runner.registries().ints().get("i1").unwrap().len(), 1);
    }

    #[test]
    fn test_explain_script() {
        let script = parse_script("create i1 stack\npush i1 5\npop i1\n").unwrap();
        let explanations = explain_script(&script);
        assert_eq!(explanations.len(), 3);
        assert_eq!(explanations[0], "1. CREATE stack 'i1' (integer partition)");
        assert_eq!(explanations[1], "2. PUSH '5' onto 'i1' (integer partition)");
        assert_eq!(explanations[2], "3. POP from 'i1' (integer partition)");
    }
}
