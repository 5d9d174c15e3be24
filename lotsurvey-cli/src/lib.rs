//! Command line front end for lot survey computation
//!
//! Loads traverse files, runs them through `lotsurvey-core` and prints text or
//! JSON reports.

pub mod cli;
pub mod demo;
pub mod load;
pub mod render;

pub use cli::{run, Cli, Commands, MethodArg};
