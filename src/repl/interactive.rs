//! Interactive REPL implementation

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::container::RegistrySet;
use crate::engine::executor::execute_command_with_registries;
use crate::error::Result;
use crate::{format_output, parse_line, ExecutionContext, OutputFormat};

pub fn run_repl() -> Result<()> {
    let mut rl = DefaultEditor::new()
        .map_err(|e| crate::error::SiloError::ExecutionError(e.to_string()))?;

    println!("Silo v{} - Interactive Mode", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for commands, 'exit' to quit\n");

    let exec_ctx = ExecutionContext {
        output_format: OutputFormat::Human,
        verbose: false,
    };

    // Containers live for the whole session
    let mut registries = RegistrySet::new();

    loop {
        let readline = rl.readline("silo> ");
        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                // Built-in REPL commands
                match line.to_lowercase().as_str() {
                    "exit" | "quit" | "q" => {
                        println!("Goodbye!");
                        break;
                    }
                    "help" | "?" => {
                        print_help();
                        continue;
                    }
                    "clear" | "cls" => {
                        print!("\x1B[2J\x1B[1;1H");
                        continue;
                    }
                    "containers" | "ls" => {
                        print_containers(&registries);
                        continue;
                    }
                    _ => {}
                }

                let _ = rl.add_history_entry(line);

                let line_to_process = expand_shortcuts(line);

                match parse_line(&line_to_process) {
                    Ok(cmd) => {
                        match execute_command_with_registries(&cmd, &exec_ctx, &mut registries) {
                            Ok(result) => {
                                let output = format_output(&result, &exec_ctx.output_format);
                                if !output.is_empty() {
                                    println!("{}\n", output);
                                } else if let Some(msg) = &result.message {
                                    println!("{}\n", msg);
                                }
                            }
                            Err(e) => {
                                eprintln!("Error: {}\n", e);
                            }
                        }
                    }
                    Err(e) => {
                        eprintln!("Parse error: {}\n", e);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

fn print_containers(registries: &RegistrySet) {
    let summary = registries.summary();
    if summary.is_empty() {
        println!("No containers yet\n");
        return;
    }

    println!(
        "{:<16} {:>6} {:>8} {:>6}  {}",
        "NAME", "KIND", "TYPE", "LEN", "CREATED"
    );
    println!("{}", "-".repeat(60));
    for entry in summary {
        println!(
            "{:<16} {:>6} {:>8} {:>6}  {}",
            entry.name, entry.kind, entry.element_type, entry.len, entry.created_at
        );
    }
    println!();
}

/// Expand common shortcuts to full commands
fn expand_shortcuts(input: &str) -> String {
    if let Some(rest) = input.strip_prefix("+ ") {
        return format!("push {}", rest);
    }
    if let Some(rest) = input.strip_prefix("- ") {
        return format!("pop {}", rest);
    }
    input.to_string()
}

fn print_help() {
    println!(
        r#"
Silo Commands
=============

COMMANDS:
  create <name> <kind>    - Create a container; kind is "stack" or "queue"
  push <name> <value>     - Push a value onto a container
  pop <name>              - Pop the front value off a container

The first character of the name picks the element type:
  i...                    - integer container
  d... or f...            - float container
  anything else           - text container

SHORTCUTS:
  + <name> <value>        - Same as push <name> <value>
  - <name>                - Same as pop <name>

REPL Commands:
  containers, ls          - List all containers
  help, ?                 - Show this help
  clear, cls              - Clear screen
  exit, quit, q           - Exit REPL
"#
    );
}
