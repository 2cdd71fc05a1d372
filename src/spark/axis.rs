use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::error::{RenderError, Result};
use super::grid::Grid;

/// Vertical placement of numbers shorter than the tallest one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DigitAlignment {
    /// Units digits share the last row; short numbers are padded above.
    #[default]
    Bottom,
    /// Leading digits share the first row; short numbers are padded below.
    Top,
}

/// Writes each sample's decimal digits top to bottom in its own column,
/// bottom-aligned. See [`render_digit_axis_aligned`].
pub fn render_digit_axis(samples: &[i64], tick: usize) -> Result<Vec<String>> {
    render_digit_axis_aligned(samples, tick, DigitAlignment::Bottom)
}

/// One row per digit of the longest sample. With `tick > 1` only every
/// `tick`-th column (1-based) of each row keeps its digit.
pub fn render_digit_axis_aligned(
    samples: &[i64],
    tick: usize,
    alignment: DigitAlignment,
) -> Result<Vec<String>> {
    if tick == 0 {
        return Err(RenderError::InvalidTick { tick });
    }
    if let Some((index, &value)) = samples.iter().enumerate().find(|(_, v)| **v < 0) {
        return Err(RenderError::NegativeSample { index, value });
    }

    let digits: Vec<String> = samples.iter().map(i64::to_string).collect();
    let height = digits.iter().map(String::len).max().unwrap_or(0);
    let mut grid = Grid::new(samples.len(), height);

    for (col, number) in digits.iter().enumerate() {
        let offset = match alignment {
            DigitAlignment::Bottom => height - number.len(),
            DigitAlignment::Top => 0,
        };
        for (row, digit) in number.chars().enumerate() {
            grid.set(offset + row, col, digit);
        }
    }

    grid.mask_ticks(tick);
    Ok(grid.into_rows())
}
