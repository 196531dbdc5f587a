//! getopt_long style parsing using `getopts`.
//!
//! The option table is declared by hand, including `-h/--help`, and values
//! are converted after scanning. Mirrors how a C `getopt_long` loop would be
//! written, minus the globals.

use std::ffi::OsString;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use getopts::Matches;

use super::{
    DEFAULT_STRAND, DEFAULT_WEIGHT, FILTER_HELP, INPUT_HELP, OUT_HELP, OptionResolver, Options,
    Parsed, STRAND_HELP, WEIGHT_HELP,
};
use crate::error::DemoError;

const PROGRAM: &str = "linedemo-getopt";

/// Builds the option table.
#[must_use]
pub fn option_table() -> getopts::Options {
    let mut opts = getopts::Options::new();
    opts.optflagmulti("f", "filter", FILTER_HELP);
    opts.optflagmulti("h", "help", "print this help message and exit");
    opts.optmulti("o", "out", OUT_HELP, "FILE");
    opts.optmulti("s", "strand", STRAND_HELP, "INT");
    opts.optmulti("w", "weight", WEIGHT_HELP, "REAL");
    opts
}

/// Full usage text, as printed for `--help`.
#[must_use]
pub fn usage(program: &str) -> String {
    let brief = format!("Usage: {program} [options] [FILE]\n\n  FILE    {INPUT_HELP}");
    option_table().usage(&brief)
}

fn program_name(args: &[OsString]) -> String {
    args.first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map_or_else(|| PROGRAM.to_string(), |name| name.to_string_lossy().into_owned())
}

fn usage_error(program: &str, message: impl Display) -> DemoError {
    let short = option_table().short_usage(program);
    DemoError::Usage(format!(
        "error: {message}\n\n{short}\n\nFor more information, try '--help'."
    ))
}

/// Last value given for option `name`; a repeated option overrides earlier ones.
fn last_value(matches: &Matches, name: &str) -> Option<String> {
    matches.opt_strs(name).pop()
}

/// Converts the value of option `name`, falling back to `default` when absent.
fn parse_value<T>(
    matches: &Matches,
    program: &str,
    name: &str,
    hint: &str,
    default: T,
) -> Result<T, DemoError>
where
    T: FromStr,
    T::Err: Display,
{
    match last_value(matches, name) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|err| {
            usage_error(
                program,
                format_args!("invalid value '{raw}' for '--{name} <{hint}>': {err}"),
            )
        }),
    }
}

/// Resolver backed by [`option_table`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GetoptResolver;

impl OptionResolver for GetoptResolver {
    fn name(&self) -> &'static str {
        "getopt"
    }

    fn resolve(&self, args: Vec<OsString>) -> Result<Parsed, DemoError> {
        let program = program_name(&args);
        let matches = option_table()
            .parse(args.iter().skip(1))
            .map_err(|fail| usage_error(&program, fail))?;

        if matches.opt_present("help") {
            return Ok(Parsed::Exit(usage(&program)));
        }

        let in_path = match matches.free.as_slice() {
            [] => None,
            [path] => Some(PathBuf::from(path)),
            [_, extra, ..] => {
                return Err(usage_error(
                    &program,
                    format_args!("unexpected argument '{extra}' found"),
                ));
            }
        };

        Ok(Parsed::Run(Options {
            filter: matches.opt_present("filter"),
            out_path: last_value(&matches, "out").map(PathBuf::from),
            strand: parse_value(&matches, &program, "strand", "INT", DEFAULT_STRAND)?,
            weight: parse_value(&matches, &program, "weight", "REAL", DEFAULT_WEIGHT)?,
            in_path,
        }))
    }
}
