use super::error::{RenderError, Result};

/// Buckets raw samples into `levels` discrete levels over the sample range.
///
/// Arithmetic is integer multiply-then-divide: the offset from `min` is
/// shifted left by `shift` bits before dividing by a step derived the same
/// way from the full range. The step is floored at 1 so a constant sequence
/// lands every sample on level 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    min: i64,
    max: i64,
    step: i128,
    shift: u32,
    levels: usize,
}

impl Scale {
    pub fn new(samples: &[i64], levels: usize, shift: u32) -> Result<Self> {
        let (min, max) = bounds(samples)?;
        Self::from_bounds(min, max, levels, shift)
    }

    pub fn from_bounds(min: i64, max: i64, levels: usize, shift: u32) -> Result<Self> {
        if levels < 2 {
            return Err(RenderError::InvalidLevelCount { levels });
        }
        debug_assert!(min <= max);

        let span = (i128::from(max) - i128::from(min)) << shift;
        let step = (span / (levels as i128 - 1)).max(1);

        Ok(Self {
            min,
            max,
            step,
            shift,
            levels,
        })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Zero-based level of `value`, in `0..levels`.
    pub fn level(&self, value: i64) -> usize {
        debug_assert!(self.min <= value && value <= self.max);
        let offset = (i128::from(value) - i128::from(self.min)) << self.shift;
        let idx = offset / self.step;
        usize::try_from(idx).unwrap_or(0).min(self.levels - 1)
    }
}

/// Inclusive `(min, max)` over `samples`.
pub fn bounds(samples: &[i64]) -> Result<(i64, i64)> {
    let min = samples.iter().copied().min().ok_or(RenderError::EmptyInput)?;
    let max = samples.iter().copied().max().ok_or(RenderError::EmptyInput)?;
    Ok((min, max))
}
