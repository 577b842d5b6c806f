//! Round state and the snapshots published from it

use serde::{Deserialize, Serialize};

use super::multiplier::Multiplier;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoundStatus {
    /// Countdown before takeoff
    Waiting,
    /// Multiplier rising toward the crash point
    Flying,
    /// Settlement pause after the crash
    Crashed,
}

impl RoundStatus {
    /// The phase that always follows this one
    pub fn next(self) -> Self {
        match self {
            RoundStatus::Waiting => RoundStatus::Flying,
            RoundStatus::Flying => RoundStatus::Crashed,
            RoundStatus::Crashed => RoundStatus::Waiting,
        }
    }
}

/// One playthrough of the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Round counter, starting at 1
    pub number: u64,
    pub status: RoundStatus,
    /// Seconds left before takeoff (0 outside WAITING)
    pub countdown: u32,
    pub multiplier: Multiplier,
    /// Drawn on entry to FLYING; never published
    pub crash_point: Option<Multiplier>,
}

impl Round {
    /// Fresh round at the start of its countdown
    pub fn waiting(number: u64, countdown: u32) -> Self {
        Self {
            number,
            status: RoundStatus::Waiting,
            countdown,
            multiplier: Multiplier::ONE,
            crash_point: None,
        }
    }

    /// Enter FLYING with the given crash point
    pub fn take_off(&mut self, crash_point: Multiplier) {
        debug_assert_eq!(self.status, RoundStatus::Waiting);
        self.status = self.status.next();
        self.countdown = 0;
        self.crash_point = Some(crash_point);
    }

    /// Enter CRASHED, fixing the reported multiplier
    pub fn crash(&mut self, reported: Multiplier) {
        debug_assert_eq!(self.status, RoundStatus::Flying);
        self.status = self.status.next();
        self.multiplier = reported;
    }

    /// Still below the crash point?
    pub fn is_airborne(&self) -> bool {
        self.crash_point.is_some_and(|crash| self.multiplier < crash)
    }

    /// Snapshot for the current countdown tick
    pub fn waiting_snapshot(&self) -> Snapshot {
        Snapshot {
            status: Some(RoundStatus::Waiting),
            countdown: Some(self.countdown),
            multiplier: Some(self.multiplier.to_string()),
        }
    }
}

/// Partial round state pushed to a sink.
///
/// Absent fields leave the sink's stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RoundStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countdown: Option<u32>,
    /// Always two decimals, e.g. "1.00"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<String>,
}

impl Snapshot {
    /// FLYING entry: status and a zeroed countdown
    pub fn takeoff() -> Self {
        Self {
            status: Some(RoundStatus::Flying),
            countdown: Some(0),
            multiplier: None,
        }
    }

    /// Flight tick: multiplier only
    pub fn flight(multiplier: Multiplier) -> Self {
        Self {
            multiplier: Some(multiplier.to_string()),
            ..Default::default()
        }
    }

    /// Final crash report
    pub fn crashed(multiplier: Multiplier) -> Self {
        Self {
            status: Some(RoundStatus::Crashed),
            countdown: None,
            multiplier: Some(multiplier.to_string()),
        }
    }
}

/// The merged view of all snapshots a sink has received
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RoundStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countdown: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<String>,
}

impl RoundRecord {
    /// Merge a snapshot: present fields overwrite, absent ones are kept
    pub fn apply(&mut self, snapshot: &Snapshot) {
        if let Some(status) = snapshot.status {
            self.status = Some(status);
        }
        if let Some(countdown) = snapshot.countdown {
            self.countdown = Some(countdown);
        }
        if let Some(multiplier) = &snapshot.multiplier {
            self.multiplier = Some(multiplier.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_cycle() {
        let mut status = RoundStatus::Waiting;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(status);
            status = status.next();
        }
        assert_eq!(
            seen,
            vec![
                RoundStatus::Waiting,
                RoundStatus::Flying,
                RoundStatus::Crashed,
                RoundStatus::Waiting
            ]
        );
    }

    #[test]
    fn test_snapshot_json_omits_absent_fields() {
        let json = serde_json::to_string(&Snapshot::flight(Multiplier::from_hundredths(150))).unwrap();
        assert_eq!(json, r#"{"multiplier":"1.50"}"#);

        let json = serde_json::to_string(&Snapshot::takeoff()).unwrap();
        assert_eq!(json, r#"{"status":"FLYING","countdown":0}"#);

        let round = Round::waiting(1, 5);
        let json = serde_json::to_string(&round.waiting_snapshot()).unwrap();
        assert_eq!(json, r#"{"status":"WAITING","countdown":5,"multiplier":"1.00"}"#);
    }

    #[test]
    fn test_record_json_omits_unset_fields() {
        let mut record = RoundRecord::default();
        assert_eq!(serde_json::to_string(&record).unwrap(), "{}");

        record.apply(&Snapshot::takeoff());
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"status":"FLYING","countdown":0}"#);

        let back: RoundRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_flight_tick_keeps_status() {
        let mut record = RoundRecord::default();
        record.apply(&Snapshot::takeoff());
        record.apply(&Snapshot::flight(Multiplier::from_hundredths(137)));

        assert_eq!(record.status, Some(RoundStatus::Flying));
        assert_eq!(record.countdown, Some(0));
        assert_eq!(record.multiplier.as_deref(), Some("1.37"));
    }

    #[test]
    fn test_round_airborne_until_crash_point() {
        let mut round = Round::waiting(3, 5);
        assert!(!round.is_airborne());

        round.take_off(Multiplier::from_hundredths(102));
        assert_eq!(round.countdown, 0);
        assert!(round.is_airborne());

        round.multiplier = Multiplier::from_hundredths(102);
        assert!(!round.is_airborne());

        round.crash(Multiplier::from_hundredths(102));
        assert_eq!(round.status, RoundStatus::Crashed);
        assert_eq!(round.status.next(), RoundStatus::Waiting);
    }
}
