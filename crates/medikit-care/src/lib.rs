//! # medikit-care
//!
//! Patient-facing care flows: the teleconsultation [`AppointmentBook`] and
//! the linear [`ProfileWizard`].
//!
//! Both are in-memory models driven entirely by the hosting layer — no
//! network, no timers, no persistence.

pub mod booking;
pub mod wizard;

pub use booking::AppointmentBook;
pub use wizard::{
    Lifestyle, MedicalHistory, MedicalProfile, PersonalInfo, ProfileWizard, WizardStep,
};
