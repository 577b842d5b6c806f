//! In-process sink that remembers what it was sent

use super::{SinkError, StateSink};
use crate::round::{RoundRecord, Snapshot};

/// Keeps the merged record plus the most recent snapshots in publish order
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    record: RoundRecord,
    history: Vec<Snapshot>,
    /// Maximum snapshots kept; unbounded when `None`
    history_limit: Option<usize>,
}

impl MemorySink {
    /// Keep every snapshot (bounded runs and tests)
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` snapshots, dropping the oldest
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            history_limit: Some(limit),
            ..Self::default()
        }
    }

    /// Keep only the merged record
    pub fn record_only() -> Self {
        Self::with_history_limit(0)
    }

    /// Current merged state
    pub fn record(&self) -> &RoundRecord {
        &self.record
    }

    /// Retained snapshots, oldest first
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl StateSink for MemorySink {
    fn publish(&mut self, snapshot: &Snapshot) -> Result<(), SinkError> {
        self.record.apply(snapshot);
        match self.history_limit {
            Some(0) => {}
            Some(limit) => {
                if self.history.len() >= limit {
                    let excess = self.history.len() + 1 - limit;
                    self.history.drain(..excess);
                }
                self.history.push(snapshot.clone());
            }
            None => self.history.push(snapshot.clone()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::{Multiplier, Round, RoundStatus};

    #[test]
    fn test_memory_sink_merges_and_records() {
        let mut sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.publish(&Round::waiting(1, 5).waiting_snapshot()).unwrap();
        sink.publish(&Snapshot::takeoff()).unwrap();
        sink.publish(&Snapshot::flight(Multiplier::from_hundredths(101))).unwrap();

        assert_eq!(sink.len(), 3);
        assert_eq!(sink.record().status, Some(RoundStatus::Flying));
        assert_eq!(sink.record().countdown, Some(0));
        assert_eq!(sink.record().multiplier.as_deref(), Some("1.01"));
    }

    #[test]
    fn test_history_limit_drops_oldest() {
        let mut sink = MemorySink::with_history_limit(2);
        for hundredths in 100..110 {
            sink.publish(&Snapshot::flight(Multiplier::from_hundredths(hundredths))).unwrap();
        }
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.history()[0], Snapshot::flight(Multiplier::from_hundredths(108)));
        assert_eq!(sink.history()[1], Snapshot::flight(Multiplier::from_hundredths(109)));
    }

    #[test]
    fn test_record_only_keeps_no_history() {
        let mut sink = MemorySink::record_only();
        sink.publish(&Snapshot::takeoff()).unwrap();
        sink.publish(&Snapshot::crashed(Multiplier::from_hundredths(250))).unwrap();

        assert!(sink.is_empty());
        assert_eq!(sink.record().status, Some(RoundStatus::Crashed));
        assert_eq!(sink.record().multiplier.as_deref(), Some("2.50"));
    }
}
