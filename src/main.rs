//! `linedemo` - options declared with clap's derive API.
//!
//! Entry point for the application.

use std::process::ExitCode;

use linedemo::app;
use linedemo::cli::DeriveResolver;
use linedemo::core::Placeholder;

fn main() -> ExitCode {
    app::run(&DeriveResolver, |_| Placeholder)
}
