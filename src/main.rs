//! Silo CLI - drive named stacks and queues with a tiny command language

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

use silo::cli::{Args, SubCommand};
use silo::script::{
    explain_script, has_errors, validate_script, ScriptRunner, ValidationOptions,
    ValidationSeverity,
};
use silo::{
    execute_command, format_output, parse_line, parse_script, ExecutionContext, OutputFormat,
};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let ctx = ExecutionContext {
        output_format: if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        },
        verbose: args.verbose,
    };

    match args.command {
        SubCommand::Run {
            file,
            output,
            strict,
        } => {
            let path = match file {
                Some(path) => path,
                None => prompt_for_path()?,
            };
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read script {}", path.display()))?;
            let script = parse_script(&content)?;

            let options = ValidationOptions {
                strict,
                ..Default::default()
            };
            let issues = validate_script(&script, &options);
            for issue in issues
                .iter()
                .filter(|e| e.severity == ValidationSeverity::Warning)
            {
                eprintln!("Warning: {}", issue);
            }
            if has_errors(&issues) {
                for issue in issues
                    .iter()
                    .filter(|e| e.severity == ValidationSeverity::Error)
                {
                    eprintln!("Error: {}", issue);
                }
                anyhow::bail!("script validation failed");
            }

            let mut runner = ScriptRunner::new(ctx);
            let result = match output {
                Some(out_path) => {
                    let file = std::fs::File::create(&out_path).with_context(|| {
                        format!("failed to create output file {}", out_path.display())
                    })?;
                    let mut out = BufWriter::new(file);
                    let result = runner.run_script(&script, &mut out)?;
                    out.flush()?;
                    result
                }
                None => {
                    let stdout = io::stdout();
                    let mut out = stdout.lock();
                    runner.run_script(&script, &mut out)?
                }
            };

            if !result.success {
                if let Some(err) = result.error {
                    anyhow::bail!(err);
                }
            }

            if args.verbose {
                println!(
                    "\n--- Script completed: {} commands, {} errors reported ---",
                    result.statements_executed, result.errors_reported
                );
            }

            Ok(())
        }

        SubCommand::Exec { command } => {
            let cmd = parse_line(&command)?;
            let result = execute_command(&cmd, &ctx)?;
            let rendered = format_output(&result, &ctx.output_format);
            if !rendered.is_empty() {
                println!("{}", rendered);
            } else if let Some(msg) = &result.message {
                if args.verbose {
                    println!("{}", msg);
                }
            }
            Ok(())
        }

        SubCommand::Check { file } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read script {}", file.display()))?;
            let script = parse_script(&content)?;

            println!("Script: {}", file.display());
            println!("Commands: {}\n", script.lines.len());

            for explanation in explain_script(&script) {
                println!("{}", explanation);
            }

            let issues = validate_script(&script, &ValidationOptions::default());
            if !issues.is_empty() {
                println!("\nValidation Notes:");
                for issue in &issues {
                    println!("  - {}", issue);
                }
            }

            Ok(())
        }

        #[cfg(feature = "repl")]
        SubCommand::Repl => Ok(silo::repl::run_repl()?),

        #[cfg(not(feature = "repl"))]
        SubCommand::Repl => {
            eprintln!("REPL support not enabled. Rebuild with --features repl");
            std::process::exit(1);
        }
    }
}

/// The original interface: ask for the input file name on stdout.
fn prompt_for_path() -> anyhow::Result<PathBuf> {
    print!("Enter name of input file: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read file name")?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        anyhow::bail!("no input file given");
    }
    Ok(PathBuf::from(trimmed))
}
