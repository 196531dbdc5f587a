//! Command-line option resolution.
//!
//! Three interchangeable resolvers turn an argument vector into the same
//! [`Options`] record:
//!
//! - [`DeriveResolver`]: clap's derive API, help generated by clap.
//! - [`BuilderResolver`]: clap's builder API, help generated by clap.
//! - [`GetoptResolver`]: a getopt_long style option table via `getopts`,
//!   with `-h/--help` declared explicitly in the table.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::DemoError;

pub mod builder;
pub mod derive;
pub mod getopt;

pub use builder::BuilderResolver;
pub use derive::{Args, DeriveResolver};
pub use getopt::GetoptResolver;

/// Default strand selector (both strands).
pub const DEFAULT_STRAND: i32 = 0;

/// Default weighting factor.
pub const DEFAULT_WEIGHT: f64 = 0.9;

pub(crate) const FILTER_HELP: &str = "apply strict filtering";
pub(crate) const OUT_HELP: &str =
    "file to which output will be written; default is terminal (stdout)";
pub(crate) const STRAND_HELP: &str = "strand to search; provide a positive number for the forward \
     strand, a negative number for the reverse strand, or 0 for both strands; default is 0";
pub(crate) const WEIGHT_HELP: &str = "user-defined weight; default is 0.9";
pub(crate) const INPUT_HELP: &str = "input file; default is terminal (stdin)";

/// Direction selected by the strand option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    Forward,
    Reverse,
    Both,
}

impl Strand {
    /// Maps a signed selector to a direction by its sign.
    #[must_use]
    pub const fn from_selector(selector: i32) -> Self {
        if selector > 0 {
            Self::Forward
        } else if selector < 0 {
            Self::Reverse
        } else {
            Self::Both
        }
    }
}

/// Resolved options. Built once by a resolver and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Apply strict filtering.
    pub filter: bool,
    /// Output destination; `None` means standard output.
    pub out_path: Option<PathBuf>,
    /// Strand selector: positive forward, negative reverse, zero both.
    pub strand: i32,
    /// User-defined weighting factor.
    pub weight: f64,
    /// Input source; `None` means standard input.
    pub in_path: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            filter: false,
            out_path: None,
            strand: DEFAULT_STRAND,
            weight: DEFAULT_WEIGHT,
            in_path: None,
        }
    }
}

impl Options {
    /// Returns the direction the strand selector stands for.
    #[must_use]
    pub const fn strand_direction(&self) -> Strand {
        Strand::from_selector(self.strand)
    }
}

/// Outcome of resolving an argument vector.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    /// Proceed with these options.
    Run(Options),
    /// Help or version was requested: print the text to stdout and exit 0.
    Exit(String),
}

/// Turns a raw argument vector into [`Parsed`].
///
/// `args` includes the program name as its first element, the way
/// `std::env::args_os` yields it.
pub trait OptionResolver {
    /// Short name of the parsing approach, used in log output.
    fn name(&self) -> &'static str;

    /// Resolves the argument vector.
    ///
    /// # Errors
    ///
    /// Returns [`DemoError::Usage`] for unknown flags, missing or malformed
    /// values, and more than one positional argument.
    fn resolve(&self, args: Vec<OsString>) -> Result<Parsed, DemoError>;
}

/// Maps a clap error to either a help/version exit or a usage error.
pub(crate) fn from_clap_error(err: &clap::Error) -> Result<Parsed, DemoError> {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            Ok(Parsed::Exit(err.render().to_string()))
        }
        _ => Err(DemoError::Usage(err.render().to_string())),
    }
}


#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::test_support::argv;
    use super::*;

    fn resolvers() -> Vec<Box<dyn OptionResolver>> {
        vec![
            Box::new(DeriveResolver),
            Box::new(BuilderResolver),
            Box::new(GetoptResolver),
        ]
    }

    #[test]
    fn default_options_match_documented_defaults() {
        let opts = Options::default();
        assert!(!opts.filter);
        assert_eq!(opts.out_path, None);
        assert_eq!(opts.strand, 0);
        assert_eq!(opts.weight, 0.9);
        assert_eq!(opts.in_path, None);
        assert_eq!(opts.strand_direction(), Strand::Both);
    }

    #[test]
    fn strand_direction_follows_sign() {
        assert_eq!(Strand::from_selector(1), Strand::Forward);
        assert_eq!(Strand::from_selector(42), Strand::Forward);
        assert_eq!(Strand::from_selector(-3), Strand::Reverse);
        assert_eq!(Strand::from_selector(0), Strand::Both);
    }

    #[test]
    fn resolvers_agree_on_valid_arguments() {
        let cases: &[&[&str]] = &[
            &[],
            &["-f"],
            &["--filter", "data.txt"],
            &["-o", "out.txt", "-s", "2", "-w", "0.25", "in.txt"],
            &["--out", "out.txt", "--strand", "-3", "--weight", "1.5"],
            &["--strand=-7", "--weight=2"],
            &["data.txt", "-f"],
        ];

        for case in cases {
            let results: Vec<Parsed> = resolvers()
                .iter()
                .map(|r| r.resolve(argv(case)).unwrap())
                .collect();
            for (resolver, result) in resolvers().iter().zip(&results) {
                assert_eq!(
                    result,
                    &results[0],
                    "{} disagrees on {case:?}",
                    resolver.name()
                );
            }
        }
    }

    #[test]
    fn repeated_options_keep_the_last_value() {
        for resolver in resolvers() {
            let name = resolver.name();
            let Parsed::Run(opts) = resolver
                .resolve(argv(&[
                    "-s", "1", "-s", "2", "-f", "-f", "-o", "a.txt", "-o", "b.txt", "-w", "0.1",
                    "--weight", "0.2",
                ]))
                .unwrap()
            else {
                panic!("{name} asked to exit");
            };
            assert_eq!(opts.strand, 2, "{name}");
            assert!(opts.filter, "{name}");
            assert_eq!(opts.out_path, Some(PathBuf::from("b.txt")), "{name}");
            assert_eq!(opts.weight, 0.2, "{name}");
        }
    }

    #[test]
    fn every_resolver_rejects_two_positionals() {
        for resolver in resolvers() {
            let err = resolver.resolve(argv(&["a.txt", "b.txt"])).unwrap_err();
            assert!(err.is_usage(), "{} accepted two inputs", resolver.name());
        }
    }

    #[test]
    fn every_resolver_rejects_unknown_flags() {
        for resolver in resolvers() {
            let err = resolver.resolve(argv(&["-x"])).unwrap_err();
            assert!(err.is_usage(), "{} accepted -x", resolver.name());
        }
    }

    #[test]
    fn every_resolver_rejects_malformed_numbers() {
        for resolver in resolvers() {
            assert!(resolver.resolve(argv(&["-s", "abc"])).is_err());
            assert!(resolver.resolve(argv(&["-w", "heavy"])).is_err());
            assert!(resolver.resolve(argv(&["--strand", "1.5"])).is_err());
        }
    }

    #[test]
    fn every_resolver_rejects_missing_values() {
        for resolver in resolvers() {
            let err = resolver.resolve(argv(&["--out"])).unwrap_err();
            assert!(err.is_usage(), "{} accepted bare --out", resolver.name());
        }
    }

    #[test]
    fn every_resolver_answers_help() {
        for resolver in resolvers() {
            for flag in ["-h", "--help"] {
                match resolver.resolve(argv(&["-o", "never.txt", flag])).unwrap() {
                    Parsed::Exit(text) => {
                        assert!(text.contains("--strand"), "{}", resolver.name());
                        assert!(text.contains("--weight"), "{}", resolver.name());
                    }
                    Parsed::Run(_) => panic!("{} ignored {flag}", resolver.name()),
                }
            }
        }
    }
}
