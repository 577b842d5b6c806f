//! File-backed sink
//!
//! The merged record is written to a `.tmp` sibling and renamed over the
//! target, so readers never see a half-written file.

use std::fs;
use std::path::PathBuf;

use super::{SinkError, StateSink};
use crate::error::ConfigError;
use crate::round::{RoundRecord, Snapshot};

#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    tmp_path: PathBuf,
    record: RoundRecord,
}

impl FileSink {
    /// Open a sink writing to `path`. The parent directory must exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !parent.is_dir() {
            return Err(ConfigError::MissingOutputDir(parent));
        }

        let mut tmp_name = path
            .file_name()
            .ok_or_else(|| ConfigError::InvalidOutputPath(path.clone()))?
            .to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = parent.join(tmp_name);

        Ok(Self {
            path,
            tmp_path,
            record: RoundRecord::default(),
        })
    }
}

impl StateSink for FileSink {
    fn publish(&mut self, snapshot: &Snapshot) -> Result<(), SinkError> {
        self.record.apply(snapshot);
        let json = serde_json::to_vec_pretty(&self.record)?;
        fs::write(&self.tmp_path, json)?;
        fs::rename(&self.tmp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::{Multiplier, RoundStatus};

    #[test]
    fn test_file_sink_persists_merged_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("live_game.json");
        let mut sink = FileSink::open(&path).unwrap();

        sink.publish(&Snapshot::takeoff()).unwrap();
        sink.publish(&Snapshot::flight(Multiplier::from_hundredths(199))).unwrap();

        let stored: RoundRecord = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(stored.status, Some(RoundStatus::Flying));
        assert_eq!(stored.multiplier.as_deref(), Some("1.99"));
        assert!(!dir.path().join("live_game.json.tmp").exists());
    }

    #[test]
    fn test_missing_directory_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("live_game.json");
        let err = FileSink::open(&path).unwrap_err();
        assert!(matches!(err, ConfigError::MissingOutputDir(_)));
    }

    #[test]
    fn test_directory_vanishing_is_sink_error() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("state");
        fs::create_dir(&sub).unwrap();
        let mut sink = FileSink::open(sub.join("live_game.json")).unwrap();
        fs::remove_dir(&sub).unwrap();

        let err = sink.publish(&Snapshot::takeoff()).unwrap_err();
        assert!(matches!(err, SinkError::Unavailable(_)));
    }
}
