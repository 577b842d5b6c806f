//! Broadcast sink: one JSON line of merged state per publish

use std::io::Write;

use super::{SinkError, StateSink};
use crate::round::{RoundRecord, Snapshot};

/// Writes the full merged record after every publish
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
    record: RoundRecord,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            record: RoundRecord::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonLinesSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> StateSink for JsonLinesSink<W> {
    fn publish(&mut self, snapshot: &Snapshot) -> Result<(), SinkError> {
        self.record.apply(snapshot);
        serde_json::to_writer(&mut self.writer, &self.record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
