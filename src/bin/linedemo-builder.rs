//! `linedemo-builder` - options declared with clap's builder API.

use std::process::ExitCode;

use linedemo::app;
use linedemo::cli::BuilderResolver;
use linedemo::core::Placeholder;

fn main() -> ExitCode {
    app::run(&BuilderResolver, |_| Placeholder)
}
