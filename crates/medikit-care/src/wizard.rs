//! The medical profile wizard.
//!
//! A linear four-step flow: personal information, medical history, lifestyle
//! factors, review. Navigation is clamped at both ends — stepping back from
//! the first step or forward from the last is a no-op for `back` and an
//! error for `advance`, matching the screen that disables those buttons.
//! The collected draft becomes a `MedicalProfile` only through `finish`,
//! which validates the required fields.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use medikit_contracts::error::{MedikitError, MedikitResult};

/// The wizard's four steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    PersonalInfo,
    MedicalHistory,
    Lifestyle,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::PersonalInfo,
        WizardStep::MedicalHistory,
        WizardStep::Lifestyle,
        WizardStep::Review,
    ];

    /// Zero-based position in the flow.
    pub fn index(self) -> usize {
        match self {
            WizardStep::PersonalInfo => 0,
            WizardStep::MedicalHistory => 1,
            WizardStep::Lifestyle => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::PersonalInfo => "Personal Information",
            WizardStep::MedicalHistory => "Medical History",
            WizardStep::Lifestyle => "Lifestyle Factors",
            WizardStep::Review => "Review",
        }
    }
}

/// Basic details about the user. Date of birth stays a raw string until
/// `finish` validates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    /// "YYYY-MM-DD".
    pub date_of_birth: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
}

/// Health background collected on step two.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicalHistory {
    pub conditions: Vec<String>,
    pub allergies: Vec<String>,
    pub medications: Vec<String>,
    pub surgeries: Vec<String>,
}

/// Habits collected on step three.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lifestyle {
    pub smoking_status: String,
    pub alcohol_consumption: String,
    pub exercise_frequency: String,
    pub dietary_restrictions: Vec<String>,
}

/// The completed, validated profile produced by `finish`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalProfile {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub history: MedicalHistory,
    pub lifestyle: Lifestyle,
    pub completed_at: DateTime<Utc>,
}

/// Linear step machine collecting a profile draft.
#[derive(Debug, Default)]
pub struct ProfileWizard {
    step_index: usize,
    completed: [bool; 4],
    personal: PersonalInfo,
    history: MedicalHistory,
    lifestyle: Lifestyle,
}

impl ProfileWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The step currently shown.
    pub fn step(&self) -> WizardStep {
        WizardStep::ALL[self.step_index]
    }

    /// Whether a step has been advanced past at least once.
    pub fn is_completed(&self, step: WizardStep) -> bool {
        self.completed[step.index()]
    }

    /// Move to the next step, marking the current one completed.
    ///
    /// Advancing from `Review` is rejected — the only way out of the last
    /// step is [`Self::finish`].
    pub fn advance(&mut self) -> MedikitResult<WizardStep> {
        if self.step() == WizardStep::Review {
            return Err(MedikitError::Wizard {
                reason: "already on the final step; call finish instead".to_string(),
            });
        }
        self.completed[self.step_index] = true;
        self.step_index += 1;
        debug!(step = ?self.step(), "wizard advanced");
        Ok(self.step())
    }

    /// Move to the previous step. Clamped at the first step.
    pub fn back(&mut self) -> WizardStep {
        self.step_index = self.step_index.saturating_sub(1);
        self.step()
    }

    pub fn set_personal(&mut self, personal: PersonalInfo) {
        self.personal = personal;
    }

    pub fn set_lifestyle(&mut self, lifestyle: Lifestyle) {
        self.lifestyle = lifestyle;
    }

    pub fn add_condition(&mut self, condition: impl Into<String>) {
        self.history.conditions.push(condition.into());
    }

    pub fn add_allergy(&mut self, allergy: impl Into<String>) {
        self.history.allergies.push(allergy.into());
    }

    pub fn add_medication(&mut self, medication: impl Into<String>) {
        self.history.medications.push(medication.into());
    }

    pub fn history(&self) -> &MedicalHistory {
        &self.history
    }

    /// Validate the draft and produce the completed profile.
    ///
    /// Only legal on the `Review` step. First and last name must be
    /// non-empty and the date of birth must parse; the first failing field
    /// is named in the error.
    pub fn finish(&self) -> MedikitResult<MedicalProfile> {
        if self.step() != WizardStep::Review {
            return Err(MedikitError::Wizard {
                reason: format!(
                    "cannot finish from step '{}'; complete the flow first",
                    self.step().title()
                ),
            });
        }

        let first_name = self.personal.first_name.trim();
        if first_name.is_empty() {
            return Err(MedikitError::validation("first_name", "must not be empty"));
        }
        let last_name = self.personal.last_name.trim();
        if last_name.is_empty() {
            return Err(MedikitError::validation("last_name", "must not be empty"));
        }
        let date_of_birth =
            NaiveDate::parse_from_str(self.personal.date_of_birth.trim(), "%Y-%m-%d")
                .map_err(|_| {
                    MedikitError::validation(
                        "date_of_birth",
                        format!(
                            "'{}' is not a valid YYYY-MM-DD date",
                            self.personal.date_of_birth
                        ),
                    )
                })?;

        Ok(MedicalProfile {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            date_of_birth,
            gender: self.personal.gender.clone(),
            phone: self.personal.phone.clone(),
            email: self.personal.email.clone(),
            history: self.history.clone(),
            lifestyle: self.lifestyle.clone(),
            completed_at: Utc::now(),
        })
    }
}
