//! Scenario 3: Teleconsultation Booking
//!
//! Walks the consultation screen against the seeded roster:
//!
//! Step A — list the roster with fees and slot grids
//! Step B — look up open slots for one doctor on a fixed date
//! Step C — book the 09:00 slot with Dr. Sarah Johnson
//! Step D — attempt the same slot again → SlotUnavailable

use chrono::{NaiveDate, NaiveTime};

use medikit_contracts::{
    booking::{AppointmentRequest, DoctorId},
    error::{MedikitError, MedikitResult},
};
use medikit_care::AppointmentBook;

use crate::mock_data::seed_doctors;

fn demo_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap_or_default()
}

/// Run Scenario 3: Teleconsultation Booking.
pub fn run_scenario() -> MedikitResult<()> {
    println!("=== Scenario 3: Teleconsultation Booking ===");
    println!();

    let mut book = AppointmentBook::new(seed_doctors());
    let date = demo_date();

    // ── Step A: the roster ────────────────────────────────────────────────────

    println!("  Step A: available doctors");
    for doctor in book.doctors() {
        println!(
            "    {} — {} (rated {}, {} yrs, ${} per visit, {} slot(s))",
            doctor.name,
            doctor.specialty,
            doctor.rating,
            doctor.years_experience,
            doctor.fee_usd,
            doctor.availability.len(),
        );
    }
    println!();

    // ── Step B: open slots ────────────────────────────────────────────────────

    let johnson = DoctorId(1);
    println!("  Step B: open slots for Dr. Sarah Johnson on {}", date);
    let slots = book.available_slots(johnson, date)?;
    let listing: Vec<String> = slots.iter().map(|s| s.format("%H:%M").to_string()).collect();
    println!("    {}", listing.join("  "));
    println!();

    // ── Step C: book the morning slot ─────────────────────────────────────────

    let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default();
    println!("  Step C: book 09:00");
    let appointment = book.book(AppointmentRequest {
        doctor_id: johnson,
        date,
        time: nine,
    })?;
    println!("  Booking id:             {}", appointment.id);
    println!("  Doctor:                 {}", appointment.doctor_name);
    println!("  Fee:                    ${}", appointment.fee_usd);
    println!("  RESULT: SUCCESS (expected)");
    println!();

    // ── Step D: the slot is gone ──────────────────────────────────────────────

    println!("  Step D: book the same slot again");
    match book.book(AppointmentRequest {
        doctor_id: johnson,
        date,
        time: nine,
    }) {
        Err(MedikitError::SlotUnavailable { doctor, slot }) => {
            println!("  Rejected:               {} has no opening at {}", doctor, slot);
            println!("  RESULT: SlotUnavailable (expected)");
        }
        Err(e) => println!("  Unexpected error: {}", e),
        Ok(_) => println!("  Unexpectedly succeeded — double booking slipped through"),
    }
    println!();

    let remaining = book.available_slots(johnson, date)?;
    println!("  Slots left that day:    {}", remaining.len());
    println!();

    println!("  Scenario 3 complete.");
    println!();

    Ok(())
}
