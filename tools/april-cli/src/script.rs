//! Cart script parser.
//!
//! One command per line, `#` starts a comment:
//!
//! ```text
//! add 1 M          # product id, optional size
//! quick-add 2      # collection id
//! update 1 +2 M    # signed delta
//! remove 1 M
//! featured S
//! wait 1500
//! show
//! ```

use std::time::Duration;

use april_commerce::{LineKey, ProductId};
use thiserror::Error;

/// Script parse errors, tagged with the 1-based line number.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}")]
    WrongArguments {
        line: usize,
        command: String,
        expected: &'static str,
    },

    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },
}

/// One cart action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Add { product: ProductId, size: Option<String> },
    QuickAdd { collection: u32 },
    Remove { key: LineKey },
    Update { key: LineKey, delta: i64 },
    Clear,
    Open,
    Close,
    Toggle,
    Featured { size: Option<String> },
    Wait(Duration),
    Show,
}

/// A parsed step and the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub number: usize,
    pub step: Step,
}

/// Parse a whole script. Stops at the first bad line.
pub fn parse(source: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut lines = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let number = index + 1;
        let text = raw.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }

        let words: Vec<&str> = text.split_whitespace().collect();
        let step = parse_step(number, words[0], &words[1..])?;
        lines.push(ScriptLine { number, step });
    }

    Ok(lines)
}

fn parse_step(line: usize, command: &str, args: &[&str]) -> Result<Step, ScriptError> {
    let wrong = |expected: &'static str| ScriptError::WrongArguments {
        line,
        command: command.to_string(),
        expected,
    };

    let step = match (command, args) {
        ("add", [product]) => Step::Add {
            product: ProductId::new(*product),
            size: None,
        },
        ("add", [product, size]) => Step::Add {
            product: ProductId::new(*product),
            size: Some(size.to_string()),
        },
        ("add", _) => return Err(wrong("<product> [size]")),

        ("quick-add", [collection]) => Step::QuickAdd {
            collection: number(line, collection)?,
        },
        ("quick-add", _) => return Err(wrong("<collection>")),

        ("remove", [product]) => Step::Remove {
            key: LineKey::new(ProductId::new(*product)),
        },
        ("remove", [product, size]) => Step::Remove {
            key: LineKey::sized(ProductId::new(*product), *size),
        },
        ("remove", _) => return Err(wrong("<product> [size]")),

        ("update", [product, delta]) => Step::Update {
            key: LineKey::new(ProductId::new(*product)),
            delta: number(line, delta)?,
        },
        ("update", [product, delta, size]) => Step::Update {
            key: LineKey::sized(ProductId::new(*product), *size),
            delta: number(line, delta)?,
        },
        ("update", _) => return Err(wrong("<product> <delta> [size]")),

        ("featured", []) => Step::Featured { size: None },
        ("featured", [size]) => Step::Featured {
            size: Some(size.to_string()),
        },
        ("featured", _) => return Err(wrong("[size]")),

        ("wait", [ms]) => Step::Wait(Duration::from_millis(number(line, ms)?)),
        ("wait", _) => return Err(wrong("<milliseconds>")),

        ("clear", []) => Step::Clear,
        ("open", []) => Step::Open,
        ("close", []) => Step::Close,
        ("toggle", []) => Step::Toggle,
        ("show", []) => Step::Show,
        ("clear" | "open" | "close" | "toggle" | "show", _) => return Err(wrong("no arguments")),

        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: command.to_string(),
            })
        }
    };

    Ok(step)
}

fn number<T: std::str::FromStr>(line: usize, value: &str) -> Result<T, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = "\
# morning session
add 1 M
add 3
quick-add 2   # Shadow Pearl

update 1 +2 M
remove 3
featured
wait 1500
show
";
        let lines = parse(script).unwrap();
        let numbers: Vec<usize> = lines.iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![2, 3, 4, 6, 7, 8, 9, 10]);

        assert_eq!(
            lines[0].step,
            Step::Add {
                product: ProductId::new("1"),
                size: Some("M".to_string()),
            }
        );
        assert_eq!(lines[2].step, Step::QuickAdd { collection: 2 });
        assert_eq!(
            lines[3].step,
            Step::Update {
                key: LineKey::sized(ProductId::new("1"), "M"),
                delta: 2,
            }
        );
        assert_eq!(
            lines[4].step,
            Step::Remove {
                key: LineKey::new(ProductId::new("3")),
            }
        );
        assert_eq!(lines[6].step, Step::Wait(Duration::from_millis(1500)));
    }

    #[test]
    fn test_negative_delta() {
        let lines = parse("update 7 -3").unwrap();
        assert_eq!(
            lines[0].step,
            Step::Update {
                key: LineKey::new(ProductId::new("7")),
                delta: -3,
            }
        );
    }

    #[test]
    fn test_unknown_command_reports_line() {
        let err = parse("add 1\n\ncheckout\n").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownCommand {
                line: 3,
                command: "checkout".to_string(),
            }
        );
        assert_eq!(err.to_string(), "line 3: unknown command 'checkout'");
    }

    #[test]
    fn test_bad_arguments_report_line() {
        assert!(matches!(
            parse("open\nadd").unwrap_err(),
            ScriptError::WrongArguments { line: 2, .. }
        ));
        assert!(matches!(
            parse("clear now").unwrap_err(),
            ScriptError::WrongArguments { line: 1, .. }
        ));
        assert_eq!(
            parse("wait soon").unwrap_err(),
            ScriptError::InvalidNumber {
                line: 1,
                value: "soon".to_string(),
            }
        );
        assert!(parse("quick-add -1").is_err());
    }

    #[test]
    fn test_empty_script() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("# nothing\n   \n").unwrap().is_empty());
    }
}
