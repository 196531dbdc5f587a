//! Driver shared by every binary: resolve options, open streams, iterate.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use crate::cli::{OptionResolver, Options, Parsed};
use crate::core::{LineHandler, process_lines};
use crate::error::DemoError;
use crate::fs::{open_input, open_output};

/// Environment variable holding the log filter (env_logger syntax).
pub const LOG_ENV: &str = "LINEDEMO_LOG";

/// How a successful invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Help or version was requested; holds the text to print.
    Exit(String),
    /// All input was processed.
    Completed { lines: usize },
}

/// Initialises the logger from [`LOG_ENV`], defaulting to `warn`.
///
/// Safe to call more than once; only the first call takes effect.
pub fn init_logging() {
    let env = env_logger::Env::default().filter_or(LOG_ENV, "warn");
    // Fails only when a logger is already installed, which is fine.
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init()
        .ok();
}

/// Runs the full pipeline without touching the process exit status.
///
/// `make_handler` receives the resolved options so the hook can read the
/// filter, strand, and weight settings. The output is opened before the
/// input, and is flushed once every line has been handled.
///
/// # Errors
///
/// Returns the first [`DemoError`] hit while resolving, opening, reading, or
/// writing. Nothing is opened if resolution fails or help is requested.
pub fn execute<H, F>(
    resolver: &dyn OptionResolver,
    args: Vec<OsString>,
    make_handler: F,
) -> Result<Outcome, DemoError>
where
    H: LineHandler,
    F: FnOnce(&Options) -> H,
{
    let options = match resolver.resolve(args)? {
        Parsed::Run(options) => options,
        Parsed::Exit(text) => return Ok(Outcome::Exit(text)),
    };
    log::debug!("{} resolver produced {options:?}", resolver.name());
    log::debug!("strand direction: {:?}", options.strand_direction());

    let mut output = open_output(options.out_path.as_deref())?;
    let input = open_input(options.in_path.as_deref())?;
    let mut handler = make_handler(&options);

    let lines = process_lines(input, &mut *output, &mut handler)?;
    output.flush().map_err(DemoError::Write)?;
    log::info!("processed {lines} lines");

    Ok(Outcome::Completed { lines })
}

/// Entry point for the binaries: runs [`execute`] on the process arguments,
/// prints help or diagnostics, and maps the result to an exit code.
pub fn run<H, F>(resolver: &dyn OptionResolver, make_handler: F) -> ExitCode
where
    H: LineHandler,
    F: FnOnce(&Options) -> H,
{
    init_logging();

    match execute(resolver, std::env::args_os().collect(), make_handler) {
        Ok(Outcome::Exit(text)) => {
            println!("{}", text.trim_end());
            ExitCode::SUCCESS
        }
        Ok(Outcome::Completed { .. }) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.to_string().trim_end());
            ExitCode::from(&err)
        }
    }
}
