//! Stub generator CLI.
//!
//! `flatstub steam_api.json steamworks_stub.gen.cpp`
//!
//! Logging goes to stderr and honours `RUST_LOG` (default `info`).

use anyhow::Result;
use clap::Parser;
use flatstub::args::Args;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    flatstub::cli::run(&args, &mut std::io::stdout().lock())
}
