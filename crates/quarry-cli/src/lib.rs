//! Library half of the `quarry` binary.
//!
//! Argument parsing, specification building and output live here so they
//! can be exercised without spawning a process; `main.rs` only installs
//! logging and calls [`run`].

pub mod cli;
pub mod filters;
pub mod output;
pub mod seed;

use std::io::Write;

use anyhow::Result;
use quarry::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

/// Installs a stderr `tracing` subscriber.
///
/// `RUST_LOG` is honoured and defaults to `warn`; `verbose` forces `debug`.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Executes a parsed command, writing results to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let reference = cli.reference.unwrap_or_else(seed::default_reference);
    let repo = seed::catalog(cli.size, reference);
    debug!(size = cli.size, %reference, "seeded catalog");

    match &cli.command {
        Command::List => output::write_list(out, &repo.find_all(), cli.format),
        Command::Query(args) => {
            let spec = filters::build(args)?;
            let description = Specification::<Entity>::describe(&spec);
            info!(spec = %description, "running query");
            if args.first {
                output::write_one(out, repo.find_one(&spec).as_ref(), cli.format)
            } else {
                output::write_list(out, &repo.find_all_by(&spec), cli.format)
            }
        }
    }
}
