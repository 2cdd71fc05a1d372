use std::fmt;

use super::error::Result;
use super::grid::Grid;
use super::scale::Scale;
use super::{joined_rows, LINE_SEPARATOR};

pub const DEFAULT_FILL: char = '|';

/// Tallest possible column, in rows.
pub const BAR_LEVELS: usize = 4;

const BAR_SHIFT: u32 = 4;

/// Multi-row bar histogram. `rows` is top row first; the last row is the
/// baseline and is filled in every column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarSparkline {
    pub min: i64,
    pub max: i64,
    pub heights: Vec<usize>,
    pub fill: char,
    pub rows: Vec<String>,
}

impl BarSparkline {
    /// Redraws the same columns with another fill character.
    pub fn rows_with(&self, fill: char) -> Vec<String> {
        draw_columns(&self.heights, fill)
    }

    pub fn joined(&self, separator: &str) -> String {
        joined_rows(&self.rows, separator)
    }
}

impl fmt::Display for BarSparkline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined(LINE_SEPARATOR))
    }
}

pub fn render_bars(samples: &[i64]) -> Result<BarSparkline> {
    render_bars_with(samples, DEFAULT_FILL)
}

/// Renders each sample as a column 1 to [`BAR_LEVELS`] rows tall.
pub fn render_bars_with(samples: &[i64], fill: char) -> Result<BarSparkline> {
    let scale = Scale::new(samples, BAR_LEVELS, BAR_SHIFT)?;
    let heights: Vec<usize> = samples.iter().map(|&v| scale.level(v) + 1).collect();
    let rows = draw_columns(&heights, fill);

    Ok(BarSparkline {
        min: scale.min(),
        max: scale.max(),
        heights,
        fill,
        rows,
    })
}

fn draw_columns(heights: &[usize], fill: char) -> Vec<String> {
    let max_height = heights.iter().copied().max().unwrap_or(0);
    let mut grid = Grid::new(heights.len(), max_height);

    for (col, &height) in heights.iter().enumerate() {
        for row in (max_height - height)..max_height {
            grid.set(row, col, fill);
        }
    }

    grid.into_rows()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spark::RenderError;

    #[test]
    fn heap_like_samples() {
        let bars = render_bars(&[101, 250, 47, 150, 6, 90, 389, 28, 300]).unwrap();
        assert_eq!(bars.min, 6);
        assert_eq!(bars.max, 389);
        assert_eq!(bars.heights, vec![1, 2, 1, 2, 1, 1, 4, 1, 3]);
        assert_eq!(
            bars.rows,
            vec![
                "      |  ",
                "      | |",
                " | |  | |",
                "|||||||||",
            ]
        );
    }

    #[test]
    fn small_values() {
        let bars = render_bars(&[1, 1, 3, 2, 3, 4, 2, 1, 4]).unwrap();
        assert_eq!(
            bars.rows,
            vec![
                "     |  |",
                "  | ||  |",
                "  ||||| |",
                "|||||||||",
            ]
        );
    }

    #[test]
    fn staircase() {
        let bars = render_bars(&[0, 1, 2, 3]).unwrap();
        assert_eq!(bars.rows, vec!["   |", "  ||", " |||", "||||"]);
    }

    #[test]
    fn constant_is_single_baseline_row() {
        let bars = render_bars(&[7, 7, 7]).unwrap();
        assert_eq!(bars.rows.len(), 1);
        assert_eq!(bars.rows, vec!["|||"]);
    }

    #[test]
    fn row_count_follows_tallest_column() {
        // The maximum always lands on the top level unless every sample is equal.
        let bars = render_bars(&[0, 4, 7]).unwrap();
        assert_eq!(bars.heights, vec![1, 2, 4]);
        assert_eq!(bars.rows.len(), 4);
        assert_eq!(bars.rows, vec!["  |", "  |", " ||", "|||"]);
    }

    #[test]
    fn custom_fill() {
        let bars = render_bars_with(&[0, 3], '#').unwrap();
        assert_eq!(bars.fill, '#');
        assert_eq!(bars.rows, vec![" #", " #", " #", "##"]);
    }

    #[test]
    fn rows_with_redraws_without_rescaling() {
        let bars = render_bars(&[0, 3]).unwrap();
        assert_eq!(bars.rows_with('*'), vec![" *", " *", " *", "**"]);
        assert_eq!(bars.rows, vec![" |", " |", " |", "||"]);
    }

    #[test]
    fn joined_has_no_trailing_separator() {
        let bars = render_bars(&[0, 3]).unwrap();
        assert_eq!(bars.joined("\n"), " |\n |\n |\n||");
        assert_eq!(bars.to_string(), bars.joined(LINE_SEPARATOR));
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(render_bars(&[]), Err(RenderError::EmptyInput));
    }
}
