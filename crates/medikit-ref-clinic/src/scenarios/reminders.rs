//! Scenario 1: Medication Reminders
//!
//! Walks the core adherence loop on the seeded schedule at a fixed instant
//! (2026-03-02 09:00):
//!
//! Step A — derive the due list and show which doses are past due
//! Step B — mark the Metformin morning dose taken, bumping its streak
//! Step C — retry the same dose → AlreadyTaken (idempotency guard)
//! Step D — roll to the next day and show streak resets + cleared flags
//!
//! The schedule never consults the wall clock; every call here passes the
//! instant explicitly, which is what makes the walkthrough deterministic.

use chrono::{NaiveDate, NaiveDateTime};

use medikit_contracts::{
    error::{MedikitError, MedikitResult},
    reminder::ReminderId,
};
use medikit_reminders::{AdherencePolicy, ReminderSchedule};

use crate::mock_data::seed_reminders;

fn demo_instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 2)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap_or_default()
}

/// Run Scenario 1: Medication Reminders.
pub fn run_scenario() -> MedikitResult<()> {
    println!("=== Scenario 1: Medication Reminders ===");
    println!();

    let now = demo_instant();
    let mut schedule = ReminderSchedule::seeded(AdherencePolicy::default(), seed_reminders())?;

    println!("  Seeded reminders:       {}", schedule.len());
    for reminder in schedule.all() {
        println!(
            "    [{}] {} {} — {} ({})",
            reminder.id,
            reminder.medication,
            reminder.dosage,
            reminder.frequency,
            if reminder.is_active { "active" } else { "paused" },
        );
    }
    println!();

    // ── Step A: today's due list ──────────────────────────────────────────────

    println!("  Step A: due list at {}", now.format("%Y-%m-%d %H:%M"));
    let due = schedule.due_list(now);
    for dose in &due {
        println!(
            "    {} — {} {} (streak {}{}{})",
            dose.next_time.format("%H:%M"),
            dose.medication,
            dose.dosage,
            dose.streak,
            if dose.taken_today { ", taken" } else { "" },
            if dose.is_past_due { ", PAST DUE" } else { "" },
        );
    }
    println!("  Doses listed:           {}", due.len());
    println!("  Note: Omega-3 is paused and never appears here.");
    println!();

    // ── Step B: mark the Metformin morning dose taken ─────────────────────────

    let metformin = ReminderId(2);
    println!("  Step B: mark Metformin taken");
    let before = schedule
        .get(metformin)
        .map(|r| r.streak)
        .unwrap_or_default();
    schedule.mark_taken(metformin, now)?;
    let after = schedule
        .get(metformin)
        .map(|r| r.streak)
        .unwrap_or_default();
    println!("  Streak:                 {} -> {}", before, after);
    println!("  RESULT: SUCCESS (expected)");
    println!();

    // ── Step C: the idempotency guard ─────────────────────────────────────────

    println!("  Step C: mark the same dose taken again");
    match schedule.mark_taken(metformin, now) {
        Err(MedikitError::AlreadyTaken { id }) => {
            println!("  Rejected:               reminder {} already taken today", id);
            println!("  RESULT: AlreadyTaken (expected)");
        }
        Err(e) => println!("  Unexpected error: {}", e),
        Ok(_) => println!("  Unexpectedly succeeded — double-log guard failed"),
    }
    println!();

    // ── Step D: roll to the next day ──────────────────────────────────────────

    let tomorrow = now.date().succ_opt().unwrap_or(now.date());
    println!("  Step D: roll to {}", tomorrow);
    schedule.reset_for_new_day(tomorrow);
    for reminder in schedule.all() {
        println!(
            "    [{}] {} — streak {}, taken_today {}",
            reminder.id, reminder.medication, reminder.streak, reminder.taken_today,
        );
    }
    println!("  All taken-today flags cleared; missed active streaks reset.");
    println!();

    let summary = schedule.adherence();
    println!("  Doses taken (logged):   {}", summary.doses_taken);
    println!("  Best current streak:    {}", summary.best_streak);
    println!("  Active reminders:       {}", summary.active_count);
    println!();

    println!("  Scenario 1 complete.");
    println!();

    Ok(())
}
