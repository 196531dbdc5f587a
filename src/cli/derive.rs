//! CLI argument parsing using clap's derive API.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use super::{DEFAULT_STRAND, DEFAULT_WEIGHT, OptionResolver, Options, Parsed, from_clap_error};
use crate::error::DemoError;

/// Line-oriented text processing skeleton.
///
/// Reads the input file (or standard input) line by line and hands each
/// line to a processing hook, writing any output to the output file (or
/// standard output).
#[derive(Parser, Debug)]
#[command(name = "linedemo", version, about, long_about = None, args_override_self = true)]
pub struct Args {
    /// Apply strict filtering
    #[arg(short, long)]
    pub filter: bool,

    /// File to which output will be written; default is terminal (stdout)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Strand to search; provide a positive number for the forward strand, a
    /// negative number for the reverse strand, or 0 for both strands
    #[arg(
        short,
        long,
        value_name = "INT",
        default_value_t = DEFAULT_STRAND,
        allow_negative_numbers = true
    )]
    pub strand: i32,

    /// User-defined weight
    #[arg(
        short,
        long,
        value_name = "REAL",
        default_value_t = DEFAULT_WEIGHT,
        allow_negative_numbers = true
    )]
    pub weight: f64,

    /// Input file; default is terminal (stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl From<Args> for Options {
    fn from(args: Args) -> Self {
        Self {
            filter: args.filter,
            out_path: args.out,
            strand: args.strand,
            weight: args.weight,
            in_path: args.input,
        }
    }
}

/// Resolver backed by [`Args`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DeriveResolver;

impl OptionResolver for DeriveResolver {
    fn name(&self) -> &'static str {
        "derive"
    }

    fn resolve(&self, args: Vec<OsString>) -> Result<Parsed, DemoError> {
        match Args::try_parse_from(args) {
            Ok(args) => Ok(Parsed::Run(args.into())),
            Err(err) => from_clap_error(&err),
        }
    }
}
