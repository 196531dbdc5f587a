//! Error types shared by the option resolvers, stream setup, and the driver.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Every failure the tool can hit. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// Unknown flag, missing value, malformed number, or a stray positional
    /// argument. Holds the parser's fully rendered message.
    #[error("{0}")]
    Usage(String),

    /// The positional input path could not be opened for reading.
    #[error("error opening input file '{}': {source}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The `--out` path could not be created or truncated.
    #[error("error opening output file '{}': {source}", path.display())]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a line from the input failed (including invalid UTF-8).
    #[error("error reading input: {0}")]
    Read(#[source] io::Error),

    /// Writing or flushing the output failed.
    #[error("error writing output: {0}")]
    Write(#[source] io::Error),
}

impl DemoError {
    /// Process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        1
    }

    /// Returns true for argument-syntax errors.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

impl From<&DemoError> for ExitCode {
    fn from(err: &DemoError) -> Self {
        ExitCode::from(err.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_message_is_passed_through() {
        let err = DemoError::Usage("error: unexpected argument '-x' found".to_string());
        assert_eq!(err.to_string(), "error: unexpected argument '-x' found");
        assert!(err.is_usage());
    }

    #[test]
    fn open_errors_mention_the_path() {
        let err = DemoError::OpenInput {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let msg = err.to_string();
        assert!(msg.contains("input file 'missing.txt'"));
        assert!(msg.contains("No such file or directory"));
        assert!(!err.is_usage());

        let err = DemoError::OpenOutput {
            path: PathBuf::from("/no/such/dir/out.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert!(err.to_string().contains("output file '/no/such/dir/out.txt'"));
    }

    #[test]
    fn every_error_exits_with_one() {
        let errors = [
            DemoError::Usage(String::new()),
            DemoError::Read(io::Error::other("boom")),
            DemoError::Write(io::Error::other("boom")),
        ];
        for err in &errors {
            assert_eq!(err.exit_code(), 1);
        }
    }
}
