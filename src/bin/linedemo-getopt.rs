//! `linedemo-getopt` - options declared as a getopt_long style table.

use std::process::ExitCode;

use linedemo::app;
use linedemo::cli::GetoptResolver;
use linedemo::core::Placeholder;

fn main() -> ExitCode {
    app::run(&GetoptResolver, |_| Placeholder)
}
