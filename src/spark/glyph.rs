use std::fmt;

use super::error::Result;
use super::scale::Scale;

/// Block gradient, lightest to darkest.
pub const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

const GLYPH_SHIFT: u32 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSparkline {
    pub min: i64,
    pub max: i64,
    pub levels: Vec<usize>,
    pub line: String,
}

impl fmt::Display for GlyphSparkline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:min/max:{}/{}", self.line, self.min, self.max)
    }
}

/// Renders one glyph per sample on a single row.
pub fn render_glyphs(samples: &[i64]) -> Result<GlyphSparkline> {
    let scale = Scale::new(samples, GLYPHS.len(), GLYPH_SHIFT)?;
    let levels: Vec<usize> = samples.iter().map(|&v| scale.level(v)).collect();
    let line = levels.iter().map(|&idx| GLYPHS[idx]).collect();

    Ok(GlyphSparkline {
        min: scale.min(),
        max: scale.max(),
        levels,
        line,
    })
}
