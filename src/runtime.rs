//! Command dispatch: render samples once, or sample memory then report.

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::input;
use crate::monitor::{Monitor, ProcStatus};
use crate::report::{self, RenderOptions};
use color_eyre::eyre::{Context, Result};
use log::{debug, info};
use std::io::{self, Write};
use std::time::Duration;

pub async fn run(cli: Cli) -> Result<()> {
    let base = AppConfig::load(cli.config.as_deref());
    let config = cli.effective_config(&base);
    debug!("effective config: {:?}", config);

    if cli.save_config {
        let path = config.save(cli.config.as_deref())?;
        info!("saved config to {}", path.display());
    }

    let options = RenderOptions::from(&config);

    if let Some(secs) = cli.monitor {
        return run_monitor(&cli, &config, &options, Duration::from_secs(secs)).await;
    }

    let samples = load_samples(&cli)?;
    let lines = report::render_lines("samples", &samples, &options).with_context(|| {
        format!(
            "could not render {} samples as {}",
            samples.len(),
            options.style.label()
        )
    })?;

    let mut out = io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn load_samples(cli: &Cli) -> Result<Vec<i64>> {
    if !cli.samples.is_empty() {
        return Ok(cli.samples.clone());
    }
    if let Some(ref path) = cli.input {
        return input::read_samples_file(path)
            .with_context(|| format!("could not load samples from {}", path.display()));
    }
    input::read_samples(io::stdin().lock()).context("could not read samples from stdin")
}

async fn run_monitor(
    cli: &Cli,
    config: &AppConfig,
    options: &RenderOptions,
    duration: Duration,
) -> Result<()> {
    let source = match cli.pid {
        Some(pid) => ProcStatus::for_pid(pid),
        None => ProcStatus::current(),
    };
    let source = source
        .ensure_readable()
        .context("memory usage is not readable\n\nMonitoring needs /proc/<pid>/status (Linux)")?;

    let interval = cli.poll_interval(config);
    info!(
        "sampling {} every {}ms for {}s",
        source.path().display(),
        interval.as_millis(),
        duration.as_secs()
    );

    let monitor = Monitor::start(source, interval, config.history_length);

    tokio::select! {
        _ = tokio::time::sleep(duration) => {}
        _ = tokio::signal::ctrl_c() => info!("interrupted, stopping early"),
    }

    let history = monitor.stop().await?;
    info!("collected {} readings", history.len());
    report::log_history(&history, options);
    Ok(())
}
