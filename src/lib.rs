//! `linedemo` - skeleton for line-oriented text tools
//!
//! Resolves a fixed option set from the command line (three interchangeable
//! parsing approaches), opens the input and output streams, and feeds each
//! input line to a pluggable [`core::LineHandler`].

pub mod app;
pub mod cli;
pub mod core;
pub mod error;
pub mod fs;

pub use error::DemoError;
