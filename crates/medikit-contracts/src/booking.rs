//! Teleconsultation booking types.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier for a doctor in the roster.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DoctorId(pub u32);

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A doctor available for teleconsultation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialty: String,
    pub rating: f32,
    pub years_experience: u32,
    /// Consultation fee per session, whole dollars.
    pub fee_usd: u32,
    /// The daily slots this doctor offers, sorted ascending.
    pub availability: Vec<NaiveTime>,
}

/// Unique identifier for a confirmed booking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(pub uuid::Uuid);

impl BookingId {
    /// Create a new, unique booking ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user's intent to book one doctor at one date and time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub doctor_id: DoctorId,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// A confirmed consultation booking.
///
/// The doctor's name and fee are copied in at booking time so the record
/// stays meaningful even if the roster changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: BookingId,
    pub doctor_id: DoctorId,
    pub doctor_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub fee_usd: u32,
    /// Wall-clock time the booking was confirmed (UTC).
    pub booked_at: DateTime<Utc>,
}
