use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("cannot render an empty sample sequence")]
    EmptyInput,

    #[error("level count must be at least 2, got {levels}")]
    InvalidLevelCount { levels: usize },

    #[error("negative sample {value} at index {index} cannot be drawn as digits")]
    NegativeSample { index: usize, value: i64 },

    #[error("axis tick must be at least 1, got {tick}")]
    InvalidTick { tick: usize },
}

pub type Result<T> = std::result::Result<T, RenderError>;
