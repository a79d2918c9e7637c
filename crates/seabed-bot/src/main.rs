use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use seabed_bot::cli::Args;
use seabed_bot::turn_loop;
use seabed_core::error::Result;

fn main() -> Result<()> {
    // stdout carries the protocol, logs go to stderr
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("seabed_bot=info,seabed_drone_ai=info,seabed_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();
    let config = args.behavior_config()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = stdout.lock();
    turn_loop::run(stdin.lock(), &mut output, config)
}
