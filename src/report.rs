//! Turns sample sequences into display lines and hands them to the log.

use log::{info, warn};
use unicode_width::UnicodeWidthStr;

use crate::config::{AppConfig, RenderStyle};
use crate::monitor::{MemoryPool, PoolHistory};
use crate::spark::{
    self, render_bars_with, render_digit_axis_aligned, render_glyphs, DigitAlignment,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub style: RenderStyle,
    pub fill: char,
    pub tick: usize,
    pub alignment: DigitAlignment,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for RenderOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            style: config.style,
            fill: config.fill_char,
            tick: config.axis_tick,
            alignment: config.axis_alignment,
        }
    }
}

/// Renders `samples` in the requested style. `title` only appears in
/// chart output.
pub fn render_lines(
    title: &str,
    samples: &[i64],
    options: &RenderOptions,
) -> spark::Result<Vec<String>> {
    match options.style {
        RenderStyle::Glyphs => Ok(vec![render_glyphs(samples)?.to_string()]),
        RenderStyle::Bars => Ok(render_bars_with(samples, options.fill)?.rows),
        RenderStyle::Axis => render_digit_axis_aligned(samples, options.tick, options.alignment),
        RenderStyle::Chart => chart_lines(title, samples, options),
    }
}

/// Title, bounds, bar rows, then digit-axis rows, with the rows indented
/// past the title and a trailing blank line.
pub fn chart_lines(
    title: &str,
    samples: &[i64],
    options: &RenderOptions,
) -> spark::Result<Vec<String>> {
    let bars = render_bars_with(samples, options.fill)?;
    let axis = render_digit_axis_aligned(samples, options.tick, options.alignment)?;
    let gutter = " ".repeat(title.width());

    let mut lines = Vec::with_capacity(bars.rows.len() + axis.len() + 3);
    lines.push(format!("{title}:"));
    lines.push(format!("(min:{}/max:{})", bars.min, bars.max));
    lines.extend(bars.rows.iter().map(|row| format!("{gutter}:{row}")));
    lines.extend(axis.iter().map(|row| format!("{gutter}:{row}")));
    lines.push(String::new());
    Ok(lines)
}

pub fn pool_title(pool: MemoryPool) -> String {
    format!("{} in mb", pool.label())
}

/// Chart lines for every pool, in [`MemoryPool::ALL`] order.
pub fn pool_charts(
    history: &PoolHistory,
    options: &RenderOptions,
) -> Vec<(MemoryPool, spark::Result<Vec<String>>)> {
    let options = RenderOptions {
        style: RenderStyle::Chart,
        ..*options
    };
    MemoryPool::ALL
        .into_iter()
        .map(|pool| {
            let chart = render_lines(&pool_title(pool), &history.samples(pool), &options);
            (pool, chart)
        })
        .collect()
}

/// Logs a chart per pool. Pools that cannot be drawn are skipped.
pub fn log_history(history: &PoolHistory, options: &RenderOptions) {
    for (pool, chart) in pool_charts(history, options) {
        match chart {
            Ok(lines) => {
                for line in lines {
                    info!("{line}");
                }
            }
            Err(e) => warn!("skipping {}: {e}", pool_title(pool)),
        }
    }
}
