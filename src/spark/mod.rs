//! Text renderers for integer sample sequences.
//!
//! Every renderer is a pure function of its input: the scale (`min`/`max`)
//! is computed once per call from the full sequence, and nothing is shared
//! between calls.

mod axis;
mod bars;
mod error;
mod glyph;
mod grid;
mod scale;


pub use axis::{render_digit_axis, render_digit_axis_aligned, DigitAlignment};
pub use bars::{render_bars, render_bars_with, BarSparkline, BAR_LEVELS, DEFAULT_FILL};
pub use error::{RenderError, Result};
pub use glyph::{render_glyphs, GlyphSparkline, GLYPHS};
pub use scale::{bounds, Scale};

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Joins rows with `separator`, without a trailing separator.
pub fn joined_rows<S: AsRef<str>>(rows: &[S], separator: &str) -> String {
    let mut joined = String::new();
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            joined.push_str(separator);
        }
        joined.push_str(row.as_ref());
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_rows_without_trailing_separator() {
        assert_eq!(joined_rows(&["a", "b", "c"], "\n"), "a\nb\nc");
        assert_eq!(joined_rows(&["a", "b"], "\r\n"), "a\r\nb");
    }

    #[test]
    fn joined_rows_single_and_empty() {
        assert_eq!(joined_rows(&["only"], "\n"), "only");
        assert_eq!(joined_rows::<&str>(&[], "\n"), "");
    }
}
