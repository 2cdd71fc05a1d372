//! Periodic process memory sampling.
//!
//! A [`Monitor`] polls a [`MemorySource`] on a fixed interval from a tokio
//! task. Samples stay inside the task until [`Monitor::stop`] hands the
//! finished [`PoolHistory`] back, so readers only ever see a complete,
//! immutable sequence.

mod error;
mod proc_status;

pub use error::{MonitorError, Result};
pub use proc_status::{parse_status, ProcStatus};

use std::time::Duration;

use log::{debug, trace, warn};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::history::RingBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryPool {
    Resident,
    Data,
    Virtual,
    Swap,
}

impl MemoryPool {
    pub const ALL: [MemoryPool; 4] = [
        MemoryPool::Resident,
        MemoryPool::Data,
        MemoryPool::Virtual,
        MemoryPool::Swap,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Resident => "Resident Set",
            Self::Data => "Data Segment",
            Self::Virtual => "Virtual Size",
            Self::Swap => "Swap",
        }
    }

    pub fn status_field(self) -> &'static str {
        match self {
            Self::Resident => "VmRSS",
            Self::Data => "VmData",
            Self::Virtual => "VmSize",
            Self::Swap => "VmSwap",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Resident => 0,
            Self::Data => 1,
            Self::Virtual => 2,
            Self::Swap => 3,
        }
    }
}

/// One reading of every pool, in MiB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolReading {
    mebibytes: [i64; 4],
}

impl PoolReading {
    pub fn get(&self, pool: MemoryPool) -> i64 {
        self.mebibytes[pool.index()]
    }

    pub fn set(&mut self, pool: MemoryPool, mebibytes: i64) {
        self.mebibytes[pool.index()] = mebibytes;
    }
}

pub trait MemorySource {
    fn read(&self) -> Result<PoolReading>;
}

/// Bounded per-pool sample history.
#[derive(Debug, Clone)]
pub struct PoolHistory {
    pools: [RingBuffer<i64>; 4],
}

impl PoolHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            pools: std::array::from_fn(|_| RingBuffer::new(capacity)),
        }
    }

    pub fn record(&mut self, reading: &PoolReading) {
        for pool in MemoryPool::ALL {
            self.pools[pool.index()].push(reading.get(pool));
        }
    }

    pub fn samples(&self, pool: MemoryPool) -> Vec<i64> {
        self.pools[pool.index()].as_vec()
    }

    /// Number of readings held (identical across pools).
    pub fn len(&self) -> usize {
        self.pools[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct Monitor {
    stop: oneshot::Sender<()>,
    handle: JoinHandle<PoolHistory>,
}

impl Monitor {
    /// Starts polling immediately, then every `interval`. Must be called
    /// from within a tokio runtime.
    pub fn start<S>(source: S, interval: Duration, capacity: usize) -> Self
    where
        S: MemorySource + Send + 'static,
    {
        let (stop, mut stopped) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let mut history = PoolHistory::new(capacity);
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut failures = 0usize;

            loop {
                tokio::select! {
                    _ = &mut stopped => break,
                    _ = ticker.tick() => match source.read() {
                        Ok(reading) => {
                            trace!("memory reading: {:?}", reading);
                            history.record(&reading);
                        }
                        Err(e) => {
                            failures += 1;
                            if failures == 1 {
                                warn!("memory sampling failed: {e}");
                            } else {
                                debug!("memory sampling failed ({failures} times): {e}");
                            }
                        }
                    },
                }
            }

            debug!("sampling stopped after {} readings", history.len());
            history
        });

        Self { stop, handle }
    }

    /// Stops polling and returns everything recorded.
    pub async fn stop(self) -> Result<PoolHistory> {
        let _ = self.stop.send(());
        Ok(self.handle.await?)
    }
}
