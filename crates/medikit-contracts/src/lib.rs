//! # medikit-contracts
//!
//! Shared types and error definitions for the MediKit demo core.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod booking;
pub mod directory;
pub mod error;
pub mod reminder;

#[cfg(test)]
mod tests {
    use super::*;
    use booking::{BookingId, DoctorId};
    use chrono::{NaiveDate, NaiveTime};
    use error::MedikitError;
    use reminder::{Reminder, ReminderId};

    fn reminder_with_window(start: &str, end: Option<&str>) -> Reminder {
        Reminder {
            id: ReminderId(1),
            medication: "Lisinopril".to_string(),
            dosage: "10mg".to_string(),
            frequency: "Once daily".to_string(),
            dose_times: vec![NaiveTime::from_hms_opt(8, 0, 0).unwrap()],
            start_date: NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
            end_date: end.map(|e| NaiveDate::parse_from_str(e, "%Y-%m-%d").unwrap()),
            is_active: true,
            taken_today: false,
            streak: 0,
        }
    }

    // ── Reminder date window ─────────────────────────────────────────────────

    #[test]
    fn window_open_ended_contains_any_later_date() {
        let r = reminder_with_window("2024-01-01", None);
        assert!(r.in_window(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert!(r.in_window(NaiveDate::from_ymd_opt(2030, 12, 31).unwrap()));
        assert!(!r.in_window(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()));
    }

    #[test]
    fn window_with_end_date_is_inclusive_on_both_ends() {
        let r = reminder_with_window("2024-01-01", Some("2024-01-31"));
        assert!(r.in_window(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert!(r.in_window(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert!(!r.in_window(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
    }

    // ── Identifier ordering and uniqueness ───────────────────────────────────

    #[test]
    fn reminder_ids_order_by_creation_sequence() {
        let mut ids = vec![ReminderId(3), ReminderId(1), ReminderId(2)];
        ids.sort();
        assert_eq!(ids, vec![ReminderId(1), ReminderId(2), ReminderId(3)]);
    }

    #[test]
    fn booking_id_new_produces_unique_values() {
        let ids: Vec<BookingId> = (0..100).map(|_| BookingId::new()).collect();
        let unique: std::collections::HashSet<String> =
            ids.iter().map(|id| id.to_string()).collect();
        assert_eq!(unique.len(), 100);
    }

    // ── Serde round-trips ────────────────────────────────────────────────────

    #[test]
    fn reminder_round_trips_through_json() {
        let original = reminder_with_window("2024-01-01", Some("2024-06-30"));
        let json = serde_json::to_string(&original).unwrap();
        let decoded: Reminder = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    // ── Error display messages ───────────────────────────────────────────────

    #[test]
    fn error_validation_display() {
        let err = MedikitError::validation("medication", "must not be empty");
        let msg = err.to_string();
        assert!(msg.contains("medication"));
        assert!(msg.contains("must not be empty"));
    }

    #[test]
    fn error_not_found_display() {
        let err = MedikitError::ReminderNotFound { id: ReminderId(42) };
        assert!(err.to_string().contains("42"));

        let err = MedikitError::DoctorNotFound { id: DoctorId(7) };
        assert!(err.to_string().contains("7"));
    }

    #[test]
    fn error_already_taken_display() {
        let err = MedikitError::AlreadyTaken { id: ReminderId(2) };
        let msg = err.to_string();
        assert!(msg.contains("already marked taken"));
        assert!(msg.contains("2"));
    }

    #[test]
    fn error_slot_unavailable_display() {
        let err = MedikitError::SlotUnavailable {
            doctor: "Dr. Sarah Johnson".to_string(),
            slot: "09:00 on 2026-03-02".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Dr. Sarah Johnson"));
        assert!(msg.contains("09:00"));
    }
}
