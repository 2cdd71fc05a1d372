use std::fs;
use std::path::{Path, PathBuf};

use super::error::{MonitorError, Result};
use super::{MemoryPool, MemorySource, PoolReading};

/// Reads a process's memory pools from `/proc/<pid>/status`.
#[derive(Debug, Clone)]
pub struct ProcStatus {
    path: PathBuf,
}

impl ProcStatus {
    pub fn current() -> Self {
        Self::from_path("/proc/self/status")
    }

    pub fn for_pid(pid: u32) -> Self {
        Self::from_path(format!("/proc/{pid}/status"))
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads once so an unavailable source fails before polling starts.
    pub fn ensure_readable(self) -> Result<Self> {
        self.read()?;
        Ok(self)
    }
}

impl MemorySource for ProcStatus {
    fn read(&self) -> Result<PoolReading> {
        let contents = fs::read_to_string(&self.path)?;
        parse_status(&contents)
    }
}

/// Extracts every pool from status text, converting kB to whole MiB.
pub fn parse_status(contents: &str) -> Result<PoolReading> {
    let mut reading = PoolReading::default();
    for pool in MemoryPool::ALL {
        reading.set(pool, mebibytes(field_kib(contents, pool.status_field())?));
    }
    Ok(reading)
}

fn field_kib(contents: &str, field: &'static str) -> Result<i64> {
    let line = contents
        .lines()
        .find_map(|line| {
            line.strip_prefix(field)
                .and_then(|rest| rest.strip_prefix(':'))
        })
        .ok_or(MonitorError::MissingField { field })?;

    let value = line.split_whitespace().next().unwrap_or_default();
    value.parse().map_err(|_| MonitorError::InvalidField {
        field,
        value: line.trim().to_string(),
    })
}

fn mebibytes(kib: i64) -> i64 {
    kib / 1024
}
