use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{AppConfig, RenderStyle};
use crate::spark::DigitAlignment;

/// `heapspark` - sparklines, bar histograms and digit axes for integer samples
#[derive(Parser, Debug)]
#[command(name = "heapspark", version, about)]
pub struct Cli {
    /// Samples to render. Read from --input or stdin when none are given
    #[arg(allow_negative_numbers = true)]
    pub samples: Vec<i64>,

    /// File of samples (JSON array, or whitespace/comma separated integers)
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Rendering style (overrides config file)
    #[arg(short = 's', long, value_enum)]
    pub style: Option<RenderStyle>,

    /// Bar fill character (overrides config file)
    #[arg(short = 'f', long)]
    pub fill: Option<char>,

    /// Keep only every Nth digit-axis column (overrides config file)
    #[arg(short = 't', long)]
    pub tick: Option<usize>,

    /// Digit-axis alignment (overrides config file)
    #[arg(long, value_enum)]
    pub align: Option<DigitAlignment>,

    /// Sample process memory for this many seconds, then log a chart per pool
    #[arg(short = 'm', long, value_name = "SECS")]
    pub monitor: Option<u64>,

    /// Process to monitor (defaults to heapspark itself)
    #[arg(short = 'p', long, requires = "monitor")]
    pub pid: Option<u32>,

    /// Memory polling interval in milliseconds (overrides config file)
    #[arg(short = 'r', long, value_name = "MILLIS")]
    pub interval_ms: Option<u64>,

    /// Number of readings to keep per memory pool (overrides config file)
    #[arg(long)]
    pub history_length: Option<usize>,

    /// Config file path
    #[arg(long, env = "HEAPSPARK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the effective settings to the config file
    #[arg(long)]
    pub save_config: bool,
}

impl Cli {
    /// Config file values with command-line overrides applied.
    pub fn effective_config(&self, base: &AppConfig) -> AppConfig {
        AppConfig {
            style: self.style.unwrap_or(base.style),
            fill_char: self.fill.unwrap_or(base.fill_char),
            axis_tick: self.tick.unwrap_or(base.axis_tick),
            axis_alignment: self.align.unwrap_or(base.axis_alignment),
            poll_interval_ms: self.interval_ms.unwrap_or(base.poll_interval_ms),
            history_length: self.history_length.unwrap_or(base.history_length),
        }
    }

    pub fn poll_interval(&self, base: &AppConfig) -> Duration {
        Duration::from_millis(self.effective_config(base).poll_interval_ms.max(1))
    }
}
