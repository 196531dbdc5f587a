//! Line iteration and the per-line processing hook.

use std::io::{self, BufRead, Write};

use crate::error::DemoError;

/// Per-line processing hook.
///
/// This is the extension point of the tool: implement it (or pass a closure)
/// to do the actual work. Anything written to `out` ends up in the output
/// stream.
pub trait LineHandler {
    /// Handles one input line, already stripped of trailing whitespace.
    ///
    /// # Errors
    ///
    /// Returns any error raised while writing to `out`.
    fn handle(&mut self, line: &str, out: &mut dyn Write) -> io::Result<()>;
}

impl<F> LineHandler for F
where
    F: FnMut(&str, &mut dyn Write) -> io::Result<()>,
{
    fn handle(&mut self, line: &str, out: &mut dyn Write) -> io::Result<()> {
        self(line, out)
    }
}

/// Hook that does nothing with the lines it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct Placeholder;

impl LineHandler for Placeholder {
    fn handle(&mut self, _line: &str, _out: &mut dyn Write) -> io::Result<()> {
        // process your input here
        Ok(())
    }
}

/// Lazy iterator over the lines of a reader, with trailing whitespace removed.
///
/// Stops after the first read error.
#[derive(Debug)]
pub struct Lines<R> {
    reader: R,
    buf: String,
    done: bool,
}

impl<R: BufRead> Lines<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = Result<String, DemoError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.buf.clear();
        match self.reader.read_line(&mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => Some(Ok(self.buf.trim_end().to_string())),
            Err(err) => {
                self.done = true;
                Some(Err(DemoError::Read(err)))
            }
        }
    }
}

/// Feeds every line of `input` to `handler`, in order, writing to `output`.
///
/// Returns the number of lines read. Does not flush `output`.
///
/// # Errors
///
/// Returns [`DemoError::Read`] if reading fails and [`DemoError::Write`] if
/// the handler fails to write.
pub fn process_lines<R, H>(
    input: R,
    output: &mut dyn Write,
    handler: &mut H,
) -> Result<usize, DemoError>
where
    R: BufRead,
    H: LineHandler + ?Sized,
{
    let mut count = 0;
    for line in Lines::new(input) {
        let line = line?;
        handler.handle(&line, output).map_err(DemoError::Write)?;
        count += 1;
    }
    Ok(count)
}
