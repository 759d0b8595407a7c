//! The teleconsultation appointment book.
//!
//! Owns the doctor roster and the confirmed appointments. A slot can be
//! booked once per doctor per date; everything else about scheduling
//! (calendars, payment, video links) is outside this model.

use chrono::{NaiveDate, NaiveTime, Utc};
use tracing::{debug, info};

use medikit_contracts::{
    booking::{Appointment, AppointmentRequest, BookingId, Doctor, DoctorId},
    error::{MedikitError, MedikitResult},
};

/// In-memory booking state for the consultation screen.
#[derive(Debug)]
pub struct AppointmentBook {
    doctors: Vec<Doctor>,
    appointments: Vec<Appointment>,
}

impl AppointmentBook {
    /// Create a book over the given roster.
    ///
    /// Each doctor's availability is sorted so slot listings are stable.
    pub fn new(mut doctors: Vec<Doctor>) -> Self {
        for doctor in &mut doctors {
            doctor.availability.sort();
            doctor.availability.dedup();
        }
        Self {
            doctors,
            appointments: Vec::new(),
        }
    }

    /// The full roster, in seed order.
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn doctor(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    /// The slots still open for one doctor on one date.
    ///
    /// A doctor's advertised availability minus whatever is already booked
    /// for that date, ascending.
    pub fn available_slots(
        &self,
        doctor_id: DoctorId,
        date: NaiveDate,
    ) -> MedikitResult<Vec<NaiveTime>> {
        let doctor = self
            .doctor(doctor_id)
            .ok_or(MedikitError::DoctorNotFound { id: doctor_id })?;

        let open: Vec<NaiveTime> = doctor
            .availability
            .iter()
            .copied()
            .filter(|&slot| !self.is_booked(doctor_id, date, slot))
            .collect();

        debug!(doctor = %doctor.name, date = %date, open = open.len(), "slot lookup");
        Ok(open)
    }

    /// Confirm a booking.
    ///
    /// Fails with `DoctorNotFound` for an unknown doctor and with
    /// `SlotUnavailable` when the time is not one the doctor offers or is
    /// already booked for that date. On success the appointment gets a fresh
    /// id and a copy of the doctor's name and fee.
    pub fn book(&mut self, request: AppointmentRequest) -> MedikitResult<Appointment> {
        let doctor = self
            .doctor(request.doctor_id)
            .ok_or(MedikitError::DoctorNotFound { id: request.doctor_id })?;

        let offered = doctor.availability.contains(&request.time);
        if !offered || self.is_booked(request.doctor_id, request.date, request.time) {
            return Err(MedikitError::SlotUnavailable {
                doctor: doctor.name.clone(),
                slot: format!("{} on {}", request.time.format("%H:%M"), request.date),
            });
        }

        let appointment = Appointment {
            id: BookingId::new(),
            doctor_id: doctor.id,
            doctor_name: doctor.name.clone(),
            date: request.date,
            time: request.time,
            fee_usd: doctor.fee_usd,
            booked_at: Utc::now(),
        };

        info!(
            booking = %appointment.id,
            doctor = %appointment.doctor_name,
            date = %appointment.date,
            time = %appointment.time.format("%H:%M"),
            "consultation booked"
        );

        self.appointments.push(appointment.clone());
        Ok(appointment)
    }

    /// Confirmed appointments in booking order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    fn is_booked(&self, doctor_id: DoctorId, date: NaiveDate, time: NaiveTime) -> bool {
        self.appointments
            .iter()
            .any(|a| a.doctor_id == doctor_id && a.date == date && a.time == time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn d(date: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()
    }

    fn roster() -> Vec<Doctor> {
        vec![
            Doctor {
                id: DoctorId(1),
                name: "Dr. Sarah Johnson".to_string(),
                specialty: "General Medicine".to_string(),
                rating: 4.9,
                years_experience: 15,
                fee_usd: 75,
                availability: vec![t(14, 0), t(9, 0), t(10, 30), t(15, 30)],
            },
            Doctor {
                id: DoctorId(2),
                name: "Dr. Michael Chen".to_string(),
                specialty: "Cardiology".to_string(),
                rating: 4.8,
                years_experience: 12,
                fee_usd: 120,
                availability: vec![t(11, 0), t(13, 0), t(16, 0)],
            },
        ]
    }

    fn request(doctor: u32, date: &str, hour: u32, minute: u32) -> AppointmentRequest {
        AppointmentRequest {
            doctor_id: DoctorId(doctor),
            date: d(date),
            time: t(hour, minute),
        }
    }

    #[test]
    fn availability_is_sorted_on_construction() {
        let book = AppointmentBook::new(roster());
        let slots = book.available_slots(DoctorId(1), d("2026-03-02")).unwrap();
        assert_eq!(slots, vec![t(9, 0), t(10, 30), t(14, 0), t(15, 30)]);
    }

    #[test]
    fn booking_copies_doctor_name_and_fee() {
        let mut book = AppointmentBook::new(roster());
        let appt = book.book(request(1, "2026-03-02", 9, 0)).unwrap();

        assert_eq!(appt.doctor_name, "Dr. Sarah Johnson");
        assert_eq!(appt.fee_usd, 75);
        assert_eq!(book.appointments().len(), 1);
    }

    #[test]
    fn booked_slot_disappears_from_availability() {
        let mut book = AppointmentBook::new(roster());
        book.book(request(1, "2026-03-02", 9, 0)).unwrap();

        let slots = book.available_slots(DoctorId(1), d("2026-03-02")).unwrap();
        assert!(!slots.contains(&t(9, 0)));
        assert_eq!(slots.len(), 3);

        // Another date is unaffected.
        let other_day = book.available_slots(DoctorId(1), d("2026-03-03")).unwrap();
        assert_eq!(other_day.len(), 4);
    }

    #[test]
    fn double_booking_the_same_slot_fails() {
        let mut book = AppointmentBook::new(roster());
        book.book(request(1, "2026-03-02", 9, 0)).unwrap();

        match book.book(request(1, "2026-03-02", 9, 0)) {
            Err(MedikitError::SlotUnavailable { doctor, slot }) => {
                assert_eq!(doctor, "Dr. Sarah Johnson");
                assert!(slot.contains("09:00"));
                assert!(slot.contains("2026-03-02"));
            }
            other => panic!("expected SlotUnavailable, got {:?}", other),
        }
        assert_eq!(book.appointments().len(), 1);
    }

    #[test]
    fn same_time_on_another_date_succeeds() {
        let mut book = AppointmentBook::new(roster());
        book.book(request(1, "2026-03-02", 9, 0)).unwrap();
        let second = book.book(request(1, "2026-03-03", 9, 0)).unwrap();
        assert_eq!(second.time, t(9, 0));
    }

    #[test]
    fn unoffered_time_is_unavailable() {
        let mut book = AppointmentBook::new(roster());
        // Dr. Chen does not offer 09:00.
        assert!(matches!(
            book.book(request(2, "2026-03-02", 9, 0)),
            Err(MedikitError::SlotUnavailable { .. })
        ));
    }

    #[test]
    fn unknown_doctor_is_not_found() {
        let mut book = AppointmentBook::new(roster());
        assert!(matches!(
            book.book(request(99, "2026-03-02", 9, 0)),
            Err(MedikitError::DoctorNotFound { .. })
        ));
        assert!(matches!(
            book.available_slots(DoctorId(99), d("2026-03-02")),
            Err(MedikitError::DoctorNotFound { .. })
        ));
    }

    #[test]
    fn booking_ids_are_unique() {
        let mut book = AppointmentBook::new(roster());
        let a = book.book(request(1, "2026-03-02", 9, 0)).unwrap();
        let b = book.book(request(1, "2026-03-02", 10, 30)).unwrap();
        assert_ne!(a.id, b.id);
    }
}
