//! In-memory, append-only adherence event log.
//!
//! Every mutation the schedule applies is recorded as one `DoseEvent`.
//! Events are never modified or removed; the adherence summary is derived
//! from them. The log is process-local — durability, if desired, belongs to
//! the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use medikit_contracts::reminder::ReminderId;

/// What happened to a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoseEventKind {
    Created,
    Edited,
    Taken,
    Paused,
    Resumed,
    /// A scheduled dose was missed and the streak dropped to zero at the
    /// day boundary.
    StreakReset,
}

/// One immutable entry of the adherence log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoseEvent {
    /// Append position, starting at 0, no gaps.
    pub sequence: u64,
    pub reminder_id: ReminderId,
    pub kind: DoseEventKind,
    /// When the event happened. For `Taken` this is the caller-supplied
    /// instant; for everything else it is the wall clock at record time.
    pub timestamp: DateTime<Utc>,
}

/// The append-only event store backing the adherence summary.
#[derive(Debug, Default)]
pub struct DoseLog {
    events: Vec<DoseEvent>,
    sequence: u64,
}

impl DoseLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event stamped with the current wall clock.
    pub(crate) fn record(&mut self, reminder_id: ReminderId, kind: DoseEventKind) {
        self.record_at(reminder_id, kind, Utc::now());
    }

    /// Append one event with an explicit timestamp.
    pub(crate) fn record_at(
        &mut self,
        reminder_id: ReminderId,
        kind: DoseEventKind,
        timestamp: DateTime<Utc>,
    ) {
        let event = DoseEvent {
            sequence: self.sequence,
            reminder_id,
            kind,
            timestamp,
        };
        self.events.push(event);
        self.sequence += 1;
    }

    /// All events in append order.
    pub fn events(&self) -> &[DoseEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// How many doses have been marked taken since the log was created.
    pub fn taken_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.kind == DoseEventKind::Taken)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_monotonic_without_gaps() {
        let mut log = DoseLog::new();
        log.record(ReminderId(1), DoseEventKind::Created);
        log.record(ReminderId(1), DoseEventKind::Taken);
        log.record(ReminderId(2), DoseEventKind::Created);

        for (idx, event) in log.events().iter().enumerate() {
            assert_eq!(event.sequence, idx as u64);
        }
    }

    #[test]
    fn taken_count_ignores_other_kinds() {
        let mut log = DoseLog::new();
        log.record(ReminderId(1), DoseEventKind::Created);
        log.record(ReminderId(1), DoseEventKind::Taken);
        log.record(ReminderId(1), DoseEventKind::Paused);
        log.record(ReminderId(1), DoseEventKind::Resumed);
        log.record(ReminderId(1), DoseEventKind::Taken);

        assert_eq!(log.taken_count(), 2);
        assert_eq!(log.len(), 5);
    }

    #[test]
    fn empty_log_reports_empty() {
        let log = DoseLog::new();
        assert!(log.is_empty());
        assert_eq!(log.taken_count(), 0);
    }
}
