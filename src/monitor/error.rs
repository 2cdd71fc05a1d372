use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("could not read memory status: {0}")]
    Io(#[from] std::io::Error),

    #[error("memory status has no {field} entry")]
    MissingField { field: &'static str },

    #[error("invalid {field} value: {value}")]
    InvalidField { field: &'static str, value: String },

    #[error("sampling task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, MonitorError>;
