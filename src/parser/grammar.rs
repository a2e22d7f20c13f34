//! Pest grammar parser for the silo command language

use pest::Parser;
use pest_derive::Parser;

use crate::error::{Result, SiloError};
use crate::parser::ast::*;

#[derive(Parser)]
#[grammar = "../grammar/silo.pest"]
pub struct SiloParser;

/// Parse one command line into an AST node.
pub fn parse_line(input: &str) -> Result<Command> {
    let pairs = SiloParser::parse(Rule::command, input)
        .map_err(|e| SiloError::ParseError(e.to_string()))?;

    let pair = pairs
        .into_iter()
        .next()
        .ok_or_else(|| SiloError::ParseError("Empty input".to_string()))?;

    parse_command_inner(pair)
}

/// Parse a whole script, one command per line. Blank lines are skipped; a
/// line that does not parse fails the whole script with its line number.
pub fn parse_script(input: &str) -> Result<Script> {
    let mut lines = Vec::new();

    for (i, raw) in input.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        let command = parse_line(raw.trim()).map_err(|e| match e {
            SiloError::ParseError(msg) => {
                SiloError::ParseError(format!("line {}: {}", i + 1, msg))
            }
            other => other,
        })?;
        lines.push(CommandLine {
            raw: raw.to_string(),
            line: i + 1,
            command,
        });
    }

    Ok(Script { lines })
}

fn parse_command_inner(pair: pest::iterators::Pair<Rule>) -> Result<Command> {
    // command -> create_cmd | push_cmd | pop_cmd
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| SiloError::ParseError("Expected command".to_string()))?;

    match inner.as_rule() {
        Rule::create_cmd => parse_create_cmd(inner),
        Rule::push_cmd => parse_push_cmd(inner),
        Rule::pop_cmd => parse_pop_cmd(inner),
        _ => Err(SiloError::ParseError(format!(
            "Unexpected rule in command: {:?}",
            inner.as_rule()
        ))),
    }
}

fn parse_create_cmd(pair: pest::iterators::Pair<Rule>) -> Result<Command> {
    let mut inner = pair.into_inner();

    let name = inner
        .next()
        .ok_or_else(|| SiloError::ParseError("Expected name in create".to_string()))?
        .as_str()
        .to_string();

    let kind_pair = inner
        .next()
        .ok_or_else(|| SiloError::ParseError("Expected kind in create".to_string()))?;
    // the kind rule only matches these two literals
    let kind = match kind_pair.as_str() {
        "stack" => ContainerKind::Stack,
        "queue" => ContainerKind::Queue,
        other => unreachable!("kind rule matched {:?}", other),
    };

    Ok(Command::Create { name, kind })
}

fn parse_push_cmd(pair: pest::iterators::Pair<Rule>) -> Result<Command> {
    let mut inner = pair.into_inner();

    let name = inner
        .next()
        .ok_or_else(|| SiloError::ParseError("Expected name in push".to_string()))?
        .as_str()
        .to_string();

    let literal = inner
        .next()
        .ok_or_else(|| SiloError::ParseError("Expected value in push".to_string()))?
        .as_str()
        .to_string();

    Ok(Command::Push { name, literal })
}

fn parse_pop_cmd(pair: pest::iterators::Pair<Rule>) -> Result<Command> {
    let name = pair
        .into_inner()
        .next()
        .ok_or_else(|| SiloError::ParseError("Expected name in pop".to_string()))?
        .as_str()
        .to_string();

    Ok(Command::Pop { name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create_stack() {
        let cmd = parse_line("create i1 stack").unwrap();
        assert_eq!(
            cmd,
            Command::Create {
                name: "i1".to_string(),
                kind: ContainerKind::Stack,
            }
        );
    }

    #[test]
    fn test_parse_create_queue() {
        let cmd = parse_line("create sQ queue").unwrap();
        assert_eq!(
            cmd,
            Command::Create {
                name: "sQ".to_string(),
                kind: ContainerKind::Queue,
            }
        );
    }

    #[test]
    fn test_parse_push() {
        let cmd = parse_line("push d1 3.14").unwrap();
        assert_eq!(
            cmd,
            Command::Push {
                name: "d1".to_string(),
                literal: "3.14".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_pop() {
        let cmd = parse_line("pop s1").unwrap();
        assert_eq!(
            cmd,
            Command::Pop {
                name: "s1".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_extra_whitespace() {
        let cmd = parse_line("push   i1    42").unwrap();
        assert_eq!(
            cmd,
            Command::Push {
                name: "i1".to_string(),
                literal: "42".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        assert!(parse_line("create i1 deque").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_command() {
        assert!(parse_line("peek i1").is_err());
        assert!(parse_line("").is_err());
    }

    #[test]
    fn test_parse_rejects_trailing_tokens() {
        assert!(parse_line("pop i1 extra").is_err());
    }

    #[test]
    fn test_parse_script_skips_blank_lines() {
        let script = parse_script("create i1 stack\n\npush i1 5\n").unwrap();
        assert_eq!(script.lines.len(), 2);
        assert_eq!(script.lines[0].line, 1);
        assert_eq!(script.lines[1].line, 3);
    }

    #[test]
    fn test_parse_script_preserves_raw_text() {
        let script = parse_script("push i1   7").unwrap();
        assert_eq!(script.lines[0].raw, "push i1   7");
    }

    #[test]
    fn test_parse_script_reports_line_number() {
        let err = parse_script("create i1 stack\nbogus line here\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
