use std::path::Path;

use thiserror::Error;

use crate::input::{InputError, next_line, open_maybe_gz};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub name: String,
    pub scores: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineParseError {
    #[error("score token {position} ({token:?}) is not an integer")]
    InvalidScore { token: String, position: usize },
}

/// Splits a submission record on single spaces, trimming each piece and
/// skipping empty ones. The first token is the student name, the rest are
/// scores. Length and sign are left to the acceptance gate.
pub fn parse_line(line: &str) -> Result<ParsedLine, LineParseError> {
    let mut tokens = line
        .trim()
        .split(' ')
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let name = tokens.next().unwrap_or_default().to_string();
    let mut scores = Vec::new();
    for (position, token) in tokens.enumerate() {
        let value = token
            .parse::<i32>()
            .map_err(|_| LineParseError::InvalidScore {
                token: token.to_string(),
                position: position + 1,
            })?;
        scores.push(value);
    }

    Ok(ParsedLine { name, scores })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineCheck {
    pub lines: usize,
    pub failures: Vec<(usize, LineParseError)>,
}

/// Parses every line of a submission file without touching any roster.
pub fn check_file(path: &Path) -> Result<LineCheck, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut raw = Vec::new();
    let mut buf = String::new();
    let mut out = LineCheck::default();

    while next_line(&mut reader, &mut raw, &mut buf)? {
        out.lines += 1;
        if let Err(err) = parse_line(&buf) {
            out.failures.push((out.lines, err));
        }
    }

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/line.rs"]
mod tests;
