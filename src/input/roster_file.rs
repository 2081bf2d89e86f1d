use std::path::Path;

use crate::input::{InputError, next_line, open_maybe_gz};

/// One student name per line; blank lines are skipped.
pub fn parse_roster_names(path: &Path) -> Result<Vec<String>, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut raw = Vec::new();
    let mut buf = String::new();
    let mut names = Vec::new();

    while next_line(&mut reader, &mut raw, &mut buf)? {
        let name = buf.trim();
        if name.is_empty() {
            continue;
        }
        names.push(name.to_string());
    }

    Ok(names)
}
