//! Stream setup: resolves the input source and output sink.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::DemoError;

/// Opens `path` for reading, or locks standard input when `path` is `None`.
///
/// # Errors
///
/// Returns [`DemoError::OpenInput`] if the file cannot be opened.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, DemoError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| DemoError::OpenInput {
                path: path.to_path_buf(),
                source,
            })?;
            log::debug!("reading from {}", path.display());
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            log::debug!("reading from stdin");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}

/// Creates (or truncates) `path` for writing, or locks standard output when
/// `path` is `None`. Either way the sink is buffered; callers must flush.
///
/// # Errors
///
/// Returns [`DemoError::OpenOutput`] if the file cannot be created.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, DemoError> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| DemoError::OpenOutput {
                path: path.to_path_buf(),
                source,
            })?;
            log::debug!("writing to {}", path.display());
            Ok(Box::new(BufWriter::new(file)))
        }
        None => {
            log::debug!("writing to stdout");
            Ok(Box::new(BufWriter::new(io::stdout().lock())))
        }
    }
}
