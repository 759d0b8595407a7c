//! # medikit-reminders
//!
//! The medication reminder schedule model: an owned, in-memory collection of
//! reminders behind an explicit mutation API, with a derived due-list
//! projection and an append-only adherence log.
//!
//! ## Overview
//!
//! - [`ReminderSchedule`] — the model. All mutation flows through its named
//!   operations; rejected operations never change state.
//! - [`AdherencePolicy`] — TOML-loadable rules (streak reset on miss, grace
//!   period) applied by the model.
//! - [`DoseLog`] — append-only record of every mutation, backing the
//!   adherence summary.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medikit_reminders::{AdherencePolicy, ReminderSchedule};
//!
//! let mut schedule = ReminderSchedule::new(AdherencePolicy::default());
//! let reminder = schedule.add(new_reminder)?;
//! let due = schedule.due_list(now);
//! schedule.mark_taken(reminder.id, now)?;
//! ```
//!
//! The model has no timer: the hosting layer supplies the current instant to
//! `due_list` and calls `reset_for_new_day` at each day boundary.

pub mod history;
pub mod policy;
pub mod schedule;

pub use history::{DoseEvent, DoseEventKind, DoseLog};
pub use policy::AdherencePolicy;
pub use schedule::{AdherenceSummary, ReminderSchedule};
