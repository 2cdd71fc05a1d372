//! Sample sequences from text: a JSON array of integers, or integers
//! separated by whitespace and/or commas.

use std::fs;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("could not read samples: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON samples: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: {token:?} is not an integer")]
    InvalidToken { line: usize, token: String },
}

pub type Result<T> = std::result::Result<T, InputError>;

pub fn parse_samples(text: &str) -> Result<Vec<i64>> {
    let trimmed = text.trim();
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    let mut samples = Vec::new();
    for (i, line) in text.lines().enumerate() {
        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value: i64 = token.parse().map_err(|_| InputError::InvalidToken {
                line: i + 1,
                token: token.to_string(),
            })?;
            samples.push(value);
        }
    }
    Ok(samples)
}

pub fn read_samples<R: Read>(mut reader: R) -> Result<Vec<i64>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_samples(&text)
}

pub fn read_samples_file(path: &Path) -> Result<Vec<i64>> {
    parse_samples(&fs::read_to_string(path)?)
}
