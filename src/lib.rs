//! heapspark - sparklines, bar histograms and vertical digit axes for
//! integer sample sequences, plus a process memory sampler that logs them.

pub mod cli;
pub mod config;
pub mod history;
pub mod input;
pub mod monitor;
pub mod report;
pub mod runtime;
pub mod spark;

use clap::Parser;
use cli::Cli;
use color_eyre::eyre::Result;

/// Main entry point - sets up logging, parses CLI args and runs the command.
///
/// Log output defaults to `info` and can be changed with `RUST_LOG`.
pub fn run_cli() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    rt.block_on(runtime::run(cli))
}
