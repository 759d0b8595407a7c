//! The reminder schedule model.
//!
//! `ReminderSchedule` owns the reminder collection and is the only way to
//! mutate it — all writes flow through the named operations so the
//! invariants (non-empty dose times, unique ids, non-negative streaks,
//! paused reminders never due) are enforced in one place. Every rejected
//! operation leaves the collection unchanged.
//!
//! The model is single-threaded and synchronous: operations are immediate
//! value transformations with no I/O and no timers. Hosts that expose it
//! behind a service boundary must serialize operations per reminder id to
//! preserve the streak and already-taken invariants; `due_list` must see a
//! consistent snapshot, never a half-applied mutation.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use medikit_contracts::{
    error::{MedikitError, MedikitResult},
    reminder::{DueDose, NewReminder, Reminder, ReminderId},
};

use crate::history::{DoseEventKind, DoseLog};
use crate::policy::AdherencePolicy;

/// Aggregate adherence figures for the progress panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdherenceSummary {
    /// Doses marked taken since this schedule was created.
    pub doses_taken: usize,
    /// The longest current streak across all reminders.
    pub best_streak: u32,
    /// Reminders currently active.
    pub active_count: usize,
}

/// Validated form of `NewReminder`, produced before any state is touched.
struct ParsedReminder {
    medication: String,
    dosage: String,
    frequency: String,
    dose_times: Vec<NaiveTime>,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
}

/// The owned store behind the reminders screen.
///
/// Iteration order is creation order (ascending id). The caller is
/// responsible for invoking [`ReminderSchedule::reset_for_new_day`] once per
/// calendar day — the model has no timer of its own.
#[derive(Debug)]
pub struct ReminderSchedule {
    reminders: BTreeMap<ReminderId, Reminder>,
    next_id: u64,
    policy: AdherencePolicy,
    log: DoseLog,
}

impl ReminderSchedule {
    /// Create an empty schedule governed by `policy`.
    pub fn new(policy: AdherencePolicy) -> Self {
        Self {
            reminders: BTreeMap::new(),
            next_id: 1,
            policy,
            log: DoseLog::new(),
        }
    }

    /// Build a schedule from pre-existing reminder records.
    ///
    /// Used to load demo seed data that carries adherence state (streaks,
    /// taken flags) which `add` deliberately cannot set. The seed records
    /// must satisfy the same invariants `add` enforces: unique ids and
    /// non-empty dose times, with `end_date` not before `start_date`.
    pub fn seeded(
        policy: AdherencePolicy,
        seed: Vec<Reminder>,
    ) -> MedikitResult<Self> {
        let mut reminders = BTreeMap::new();
        let mut max_id = 0;

        for mut reminder in seed {
            if reminder.dose_times.is_empty() {
                return Err(MedikitError::validation(
                    "dose_times",
                    format!("seed reminder {} has no dose times", reminder.id),
                ));
            }
            if let Some(end) = reminder.end_date {
                if end < reminder.start_date {
                    return Err(MedikitError::validation(
                        "end_date",
                        format!("seed reminder {} ends before it starts", reminder.id),
                    ));
                }
            }
            reminder.dose_times.sort();
            reminder.dose_times.dedup();

            max_id = max_id.max(reminder.id.0);
            if reminders.insert(reminder.id, reminder).is_some() {
                return Err(MedikitError::validation(
                    "id",
                    "seed contains duplicate reminder ids",
                ));
            }
        }

        Ok(Self {
            reminders,
            next_id: max_id + 1,
            policy,
            log: DoseLog::new(),
        })
    }

    /// Create a reminder from user input.
    ///
    /// All fields are validated before any state changes; the first failing
    /// field is reported by name. On success the reminder receives the next
    /// sequential id, starts active with no adherence history, and is
    /// returned to the caller.
    pub fn add(&mut self, input: NewReminder) -> MedikitResult<Reminder> {
        let parsed = parse_input(&input)?;

        let id = ReminderId(self.next_id);
        self.next_id += 1;

        let reminder = Reminder {
            id,
            medication: parsed.medication,
            dosage: parsed.dosage,
            frequency: parsed.frequency,
            dose_times: parsed.dose_times,
            start_date: parsed.start_date,
            end_date: parsed.end_date,
            is_active: true,
            taken_today: false,
            streak: 0,
        };

        debug!(id = %id, medication = %reminder.medication, "reminder added");
        self.log.record(id, DoseEventKind::Created);
        self.reminders.insert(id, reminder.clone());
        Ok(reminder)
    }

    /// Replace the user-supplied fields of an existing reminder.
    ///
    /// The id and the adherence state (`is_active`, `taken_today`, `streak`)
    /// are preserved. Input is validated exactly as in [`Self::add`], before
    /// anything is touched.
    pub fn edit(&mut self, id: ReminderId, input: NewReminder) -> MedikitResult<Reminder> {
        let parsed = parse_input(&input)?;

        let reminder = self
            .reminders
            .get_mut(&id)
            .ok_or(MedikitError::ReminderNotFound { id })?;

        reminder.medication = parsed.medication;
        reminder.dosage = parsed.dosage;
        reminder.frequency = parsed.frequency;
        reminder.dose_times = parsed.dose_times;
        reminder.start_date = parsed.start_date;
        reminder.end_date = parsed.end_date;

        debug!(id = %id, "reminder updated");
        self.log.record(id, DoseEventKind::Edited);
        Ok(reminder.clone())
    }

    /// Pause or resume a reminder.
    ///
    /// No effect on `streak` or `taken_today`; applying it twice returns
    /// the reminder to its original state.
    pub fn toggle_active(&mut self, id: ReminderId) -> MedikitResult<Reminder> {
        let reminder = self
            .reminders
            .get_mut(&id)
            .ok_or(MedikitError::ReminderNotFound { id })?;

        reminder.is_active = !reminder.is_active;

        let kind = if reminder.is_active {
            DoseEventKind::Resumed
        } else {
            DoseEventKind::Paused
        };
        debug!(id = %id, active = reminder.is_active, "reminder toggled");
        self.log.record(id, kind);
        Ok(reminder.clone())
    }

    /// Mark today's dose taken.
    ///
    /// The second call on the same reminder without an intervening
    /// [`Self::reset_for_new_day`] fails with `AlreadyTaken` and does not
    /// increment the streak again — the streak counts distinct days, not
    /// distinct clicks.
    pub fn mark_taken(
        &mut self,
        id: ReminderId,
        as_of: NaiveDateTime,
    ) -> MedikitResult<Reminder> {
        let reminder = self
            .reminders
            .get_mut(&id)
            .ok_or(MedikitError::ReminderNotFound { id })?;

        if !reminder.is_active {
            warn!(id = %id, "mark_taken rejected: reminder is paused");
            return Err(MedikitError::validation(
                "is_active",
                format!("reminder {} is paused", id),
            ));
        }
        if reminder.taken_today {
            warn!(id = %id, "mark_taken rejected: already taken today");
            return Err(MedikitError::AlreadyTaken { id });
        }

        reminder.taken_today = true;
        reminder.streak += 1;

        info!(id = %id, streak = reminder.streak, "dose marked taken");
        self.log.record_at(id, DoseEventKind::Taken, as_of.and_utc());
        Ok(reminder.clone())
    }

    /// Derive today's dose list for the given instant.
    ///
    /// Pure projection — nothing is mutated. Every active reminder whose
    /// date window contains `as_of` contributes one entry per dose time; an
    /// entry is past due once its time (plus the policy's grace) has passed
    /// and the reminder is not yet taken. `taken_today` is reminder-scoped,
    /// so one mark-taken suppresses the past-due flag for every time of a
    /// multi-dose reminder.
    ///
    /// Entries are sorted ascending by time, ties broken by ascending id.
    pub fn due_list(&self, as_of: NaiveDateTime) -> Vec<DueDose> {
        let today = as_of.date();
        let now = as_of.time();
        let grace = Duration::minutes(i64::from(self.policy.grace_minutes));

        let mut due: Vec<DueDose> = self
            .reminders
            .values()
            .filter(|r| r.is_active && r.in_window(today))
            .flat_map(|r| {
                r.dose_times.iter().map(move |&dose_time| {
                    let (deadline, wrapped) = dose_time.overflowing_add_signed(grace);
                    // A deadline that wraps past midnight cannot have passed today.
                    let is_past_due = wrapped == 0 && deadline < now && !r.taken_today;
                    DueDose {
                        reminder_id: r.id,
                        medication: r.medication.clone(),
                        dosage: r.dosage.clone(),
                        next_time: dose_time,
                        streak: r.streak,
                        taken_today: r.taken_today,
                        is_past_due,
                    }
                })
            })
            .collect();

        due.sort_by_key(|d| (d.next_time, d.reminder_id));
        due
    }

    /// Roll the schedule over to a new calendar day.
    ///
    /// `as_of` is the date of the day that is starting. When the policy
    /// enables `reset_streak_on_miss`, every reminder that was active,
    /// inside its date window on the previous day, and not marked taken
    /// loses its streak. All `taken_today` flags are then cleared.
    ///
    /// The model has no timer; the caller invokes this once per day.
    pub fn reset_for_new_day(&mut self, as_of: NaiveDate) {
        let yesterday = as_of.pred_opt();
        let mut resets = 0;

        for reminder in self.reminders.values_mut() {
            let missed = self.policy.reset_streak_on_miss
                && reminder.is_active
                && !reminder.taken_today
                && yesterday.is_some_and(|d| reminder.in_window(d));

            if missed && reminder.streak > 0 {
                reminder.streak = 0;
                resets += 1;
                self.log.record(reminder.id, DoseEventKind::StreakReset);
            }
            reminder.taken_today = false;
        }

        info!(date = %as_of, streaks_reset = resets, "day rolled over");
    }

    /// Aggregate adherence figures across the collection and the log.
    pub fn adherence(&self) -> AdherenceSummary {
        AdherenceSummary {
            doses_taken: self.log.taken_count(),
            best_streak: self.reminders.values().map(|r| r.streak).max().unwrap_or(0),
            active_count: self.reminders.values().filter(|r| r.is_active).count(),
        }
    }

    pub fn get(&self, id: ReminderId) -> Option<&Reminder> {
        self.reminders.get(&id)
    }

    /// All reminders in creation order, paused ones included.
    pub fn all(&self) -> impl Iterator<Item = &Reminder> {
        self.reminders.values()
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    pub fn policy(&self) -> &AdherencePolicy {
        &self.policy
    }

    /// The adherence event log, append order.
    pub fn log(&self) -> &DoseLog {
        &self.log
    }
}

/// Parse and validate raw reminder input, naming the first offending field.
fn parse_input(input: &NewReminder) -> MedikitResult<ParsedReminder> {
    let medication = input.medication.trim();
    if medication.is_empty() {
        return Err(MedikitError::validation("medication", "must not be empty"));
    }

    let dosage = input.dosage.trim();
    if dosage.is_empty() {
        return Err(MedikitError::validation("dosage", "must not be empty"));
    }

    let frequency = input.frequency.trim();
    if frequency.is_empty() {
        return Err(MedikitError::validation("frequency", "must not be empty"));
    }

    if input.dose_times.is_empty() {
        return Err(MedikitError::validation(
            "dose_times",
            "at least one dose time is required",
        ));
    }
    let mut dose_times = Vec::with_capacity(input.dose_times.len());
    for raw in &input.dose_times {
        let time = NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(|_| {
            MedikitError::validation(
                "dose_times",
                format!("'{}' is not a valid HH:MM time", raw),
            )
        })?;
        dose_times.push(time);
    }
    dose_times.sort();
    dose_times.dedup();

    let start_date = NaiveDate::parse_from_str(input.start_date.trim(), "%Y-%m-%d")
        .map_err(|_| {
            MedikitError::validation(
                "start_date",
                format!("'{}' is not a valid YYYY-MM-DD date", input.start_date),
            )
        })?;

    let end_date = match &input.end_date {
        Some(raw) => {
            let end = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
                MedikitError::validation(
                    "end_date",
                    format!("'{}' is not a valid YYYY-MM-DD date", raw),
                )
            })?;
            if end < start_date {
                return Err(MedikitError::validation(
                    "end_date",
                    "must not be earlier than start_date",
                ));
            }
            Some(end)
        }
        None => None,
    };

    Ok(ParsedReminder {
        medication: medication.to_string(),
        dosage: dosage.to_string(),
        frequency: frequency.to_string(),
        dose_times,
        start_date,
        end_date,
    })
}

// ── Tests ────────────────────────────────────────────────────────────────────
