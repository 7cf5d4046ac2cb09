//! Library side of the `loan-tape` binary: commands, configuration, logging,
//! terminal summaries, and report writers.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
pub mod summary;
pub mod types;
