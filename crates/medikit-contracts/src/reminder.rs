//! Medication reminder types.
//!
//! A `Reminder` is a scheduled medication regimen with its adherence state.
//! `NewReminder` is the raw user-supplied input — parsing and validation
//! happen inside the schedule model so every rejection names the offending
//! field. `DueDose` is one entry of the derived "today's doses" projection.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Stable identifier for a reminder, assigned sequentially at creation.
///
/// Creation order is the display order, and the ascending-id tie-break makes
/// the due-list projection deterministic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ReminderId(pub u64);

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scheduled medication regimen owned by the schedule model.
///
/// The rendering layer holds no independent copy of truth — it receives
/// clones of this record and dispatches user intents back into the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Unique, immutable, assigned at creation.
    pub id: ReminderId,
    /// Medication name, non-empty.
    pub medication: String,
    /// Free-text strength/amount descriptor, e.g. "10mg".
    pub dosage: String,
    /// Descriptive label such as "Once daily". Informational only — the
    /// schedule is driven by `dose_times`, not by this label.
    pub frequency: String,
    /// Scheduled administration times, sorted ascending, deduplicated,
    /// never empty.
    pub dose_times: Vec<NaiveTime>,
    /// The reminder has no effect before this date.
    pub start_date: NaiveDate,
    /// The reminder has no effect after this date. Absent = indefinite.
    pub end_date: Option<NaiveDate>,
    /// Paused reminders stay in the inventory but never appear in the
    /// due-list projection.
    pub is_active: bool,
    /// Cleared at every day boundary by `reset_for_new_day`.
    pub taken_today: bool,
    /// Consecutive days this reminder was marked taken.
    pub streak: u32,
}

impl Reminder {
    /// Return true if `date` falls inside the `[start_date, end_date]`
    /// window (inclusive on both ends, open-ended when `end_date` is None).
    pub fn in_window(&self, date: NaiveDate) -> bool {
        if date < self.start_date {
            return false;
        }
        match self.end_date {
            Some(end) => date <= end,
            None => true,
        }
    }
}

/// Raw user input for creating or editing a reminder.
///
/// Times are "HH:MM" strings and dates are "YYYY-MM-DD" strings, exactly as
/// a form would submit them. The schedule model parses and validates these,
/// so a malformed entry is reported as a `Validation` error naming the field
/// rather than a panic or a silent default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewReminder {
    pub medication: String,
    pub dosage: String,
    pub frequency: String,
    pub dose_times: Vec<String>,
    pub start_date: String,
    pub end_date: Option<String>,
}

/// One entry of the derived due-list projection.
///
/// A reminder with several dose times contributes several entries, all
/// sharing the reminder-scoped `taken_today` basis — marking a twice-daily
/// medication taken once suppresses the past-due flag for both times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueDose {
    pub reminder_id: ReminderId,
    pub medication: String,
    pub dosage: String,
    /// The scheduled time this entry represents.
    pub next_time: NaiveTime,
    pub streak: u32,
    pub taken_today: bool,
    /// True when `next_time` has passed and the reminder is not yet taken.
    pub is_past_due: bool,
}
