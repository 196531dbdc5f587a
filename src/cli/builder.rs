//! CLI argument parsing using clap's builder API.
//!
//! Same option set as [`super::derive`], declared as `Arg` values at runtime.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

use super::{
    DEFAULT_STRAND, DEFAULT_WEIGHT, FILTER_HELP, INPUT_HELP, OUT_HELP, OptionResolver, Options,
    Parsed, STRAND_HELP, WEIGHT_HELP, from_clap_error,
};
use crate::error::DemoError;

/// Builds the `linedemo-builder` command.
#[must_use]
pub fn command() -> Command {
    Command::new("linedemo-builder")
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .args_override_self(true)
        .arg(
            Arg::new("filter")
                .short('f')
                .long("filter")
                .action(ArgAction::SetTrue)
                .help(FILTER_HELP),
        )
        .arg(
            Arg::new("out")
                .short('o')
                .long("out")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help(OUT_HELP),
        )
        .arg(
            Arg::new("strand")
                .short('s')
                .long("strand")
                .value_name("INT")
                .value_parser(value_parser!(i32))
                .allow_negative_numbers(true)
                .default_value("0")
                .help(STRAND_HELP),
        )
        .arg(
            Arg::new("weight")
                .short('w')
                .long("weight")
                .value_name("REAL")
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .default_value("0.9")
                .help(WEIGHT_HELP),
        )
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help(INPUT_HELP),
        )
}

fn options_from_matches(matches: &ArgMatches) -> Options {
    Options {
        filter: matches.get_flag("filter"),
        out_path: matches.get_one::<PathBuf>("out").cloned(),
        strand: matches
            .get_one::<i32>("strand")
            .copied()
            .unwrap_or(DEFAULT_STRAND),
        weight: matches
            .get_one::<f64>("weight")
            .copied()
            .unwrap_or(DEFAULT_WEIGHT),
        in_path: matches.get_one::<PathBuf>("input").cloned(),
    }
}

/// Resolver backed by [`command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuilderResolver;

impl OptionResolver for BuilderResolver {
    fn name(&self) -> &'static str {
        "builder"
    }

    fn resolve(&self, args: Vec<OsString>) -> Result<Parsed, DemoError> {
        match command().try_get_matches_from(args) {
            Ok(matches) => Ok(Parsed::Run(options_from_matches(&matches))),
            Err(err) => from_clap_error(&err),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::super::test_support::argv;
    use super::*;

    fn run(args: &[&str]) -> Options {
        match BuilderResolver.resolve(argv(args)).unwrap() {
            Parsed::Run(opts) => opts,
            Parsed::Exit(text) => panic!("unexpected exit: {text}"),
        }
    }

    #[test]
    fn command_definition_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn no_arguments_yields_defaults() {
        assert_eq!(run(&[]), Options::default());
    }

    #[test]
    fn long_flags_are_mapped() {
        let opts = run(&[
            "--filter", "--out", "o.txt", "--strand", "-2", "--weight", "3.25", "i.txt",
        ]);
        assert!(opts.filter);
        assert_eq!(opts.out_path, Some(PathBuf::from("o.txt")));
        assert_eq!(opts.strand, -2);
        assert_eq!(opts.weight, 3.25);
        assert_eq!(opts.in_path, Some(PathBuf::from("i.txt")));
    }

    #[test]
    fn default_weight_survives_string_round_trip() {
        assert_eq!(run(&["-f"]).weight, DEFAULT_WEIGHT);
    }

    #[test]
    fn help_lists_every_option() {
        let help = command().render_help().to_string();
        for flag in ["--filter", "--out", "--strand", "--weight", "--help"] {
            assert!(help.contains(flag), "missing {flag} in help");
        }
    }
}
