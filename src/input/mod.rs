use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use thiserror::Error;

pub mod line;
pub mod roster_file;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Opens a line source, gunzipping on the fly when the name ends in `.gz`.
pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead + Send>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Reads one line into `buf` without the trailing newline. Returns `false`
/// at end of input. Invalid UTF-8 is replaced rather than treated as fatal.
pub fn next_line<R: BufRead + ?Sized>(
    reader: &mut R,
    raw: &mut Vec<u8>,
    buf: &mut String,
) -> Result<bool, InputError> {
    raw.clear();
    buf.clear();
    let read = reader.read_until(b'\n', raw)?;
    if read == 0 {
        return Ok(false);
    }
    if raw.last() == Some(&b'\n') {
        raw.pop();
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
    }
    buf.push_str(&String::from_utf8_lossy(raw));
    Ok(true)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
