//! State sinks: where round snapshots go
//!
//! A sink merges each [`Snapshot`] into the record it keeps. Fields missing
//! from a snapshot are left as they were, so flight ticks (multiplier only)
//! never erase the status written at takeoff.

pub mod file;
pub mod json_lines;
pub mod memory;

pub use file::FileSink;
pub use json_lines::JsonLinesSink;
pub use memory::MemorySink;

use crate::round::Snapshot;

/// Failure to deliver a snapshot. Always fatal to the engine run.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The backing store could not be reached or written
    #[error("state sink unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    /// The store refused the write
    #[error("state sink rejected write: {0}")]
    Rejected(String),
}

impl From<serde_json::Error> for SinkError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            SinkError::Unavailable(err.into())
        } else {
            SinkError::Rejected(err.to_string())
        }
    }
}

/// Receives round snapshots with merge-update semantics
pub trait StateSink {
    fn publish(&mut self, snapshot: &Snapshot) -> Result<(), SinkError>;
}

impl<S: StateSink + ?Sized> StateSink for &mut S {
    fn publish(&mut self, snapshot: &Snapshot) -> Result<(), SinkError> {
        (**self).publish(snapshot)
    }
}

impl<S: StateSink + ?Sized> StateSink for Box<S> {
    fn publish(&mut self, snapshot: &Snapshot) -> Result<(), SinkError> {
        (**self).publish(snapshot)
    }
}
