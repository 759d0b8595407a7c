//! Error types shared by every MediKit crate.
//!
//! All fallible model operations return `MedikitResult<T>`. A rejected
//! operation never mutates the owning collection — errors are reported to the
//! caller and the model state is left exactly as it was.

use thiserror::Error;

use crate::booking::DoctorId;
use crate::reminder::ReminderId;

/// The unified error type for the MediKit model crates.
#[derive(Debug, Error)]
pub enum MedikitError {
    /// A user-supplied input field is missing or malformed.
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    /// No reminder exists with the given id.
    #[error("no reminder with id {id}")]
    ReminderNotFound { id: ReminderId },

    /// The reminder was already marked taken today.
    ///
    /// This is the idempotency guard on `mark_taken`: a streak counts
    /// distinct days, not distinct clicks.
    #[error("reminder {id} is already marked taken today")]
    AlreadyTaken { id: ReminderId },

    /// No doctor exists with the given id.
    #[error("no doctor with id {id}")]
    DoctorNotFound { id: DoctorId },

    /// The requested consultation slot is not offered or already booked.
    #[error("slot {slot} with {doctor} is unavailable")]
    SlotUnavailable { doctor: String, slot: String },

    /// The profile wizard was driven through an illegal transition.
    #[error("profile wizard error: {reason}")]
    Wizard { reason: String },

    /// A configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

impl MedikitError {
    /// Convenience constructor for validation failures.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        MedikitError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the MediKit crates.
pub type MedikitResult<T> = Result<T, MedikitError>;
