//! Scenario 4: Medical Profile Wizard
//!
//! Walks the four-step onboarding flow end to end:
//!
//! Step A — fill personal information and advance
//! Step B — pick medical history from the suggestion chips
//! Step C — record lifestyle factors
//! Step D — finish from the review step and show the validated profile
//!
//! Also demonstrates the guard rails: finishing early is rejected, and the
//! error names the step the user is still on.

use medikit_contracts::error::{MedikitError, MedikitResult};
use medikit_care::{Lifestyle, PersonalInfo, ProfileWizard};

use crate::mock_data::profile_suggestions;

/// Run Scenario 4: Medical Profile Wizard.
pub fn run_scenario() -> MedikitResult<()> {
    println!("=== Scenario 4: Medical Profile Wizard ===");
    println!();

    let mut wizard = ProfileWizard::new();

    // Finishing before reaching Review is rejected.
    println!("  Guard: finish from step '{}'", wizard.step().title());
    match wizard.finish() {
        Err(MedikitError::Wizard { reason }) => {
            println!("  Rejected:               {}", reason);
            println!("  RESULT: Wizard error (expected)");
        }
        Err(e) => println!("  Unexpected error: {}", e),
        Ok(_) => println!("  Unexpectedly produced a profile"),
    }
    println!();

    // ── Step A: personal information ──────────────────────────────────────────

    println!("  Step A: {}", wizard.step().title());
    wizard.set_personal(PersonalInfo {
        first_name: "Alex".to_string(),
        last_name: "Morgan".to_string(),
        date_of_birth: "1985-06-15".to_string(),
        gender: "other".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        email: "alex.morgan@example.com".to_string(),
    });
    wizard.advance()?;
    println!();

    // ── Step B: medical history ───────────────────────────────────────────────

    println!("  Step B: {}", wizard.step().title());
    for (group, suggestions) in profile_suggestions() {
        println!("    {}: {}", group, suggestions.join(", "));
    }
    wizard.add_condition("Hypertension");
    wizard.add_allergy("Penicillin");
    wizard.add_medication("Lisinopril");
    println!(
        "    Recorded {} condition(s), {} allergy(ies), {} medication(s)",
        wizard.history().conditions.len(),
        wizard.history().allergies.len(),
        wizard.history().medications.len(),
    );
    wizard.advance()?;
    println!();

    // ── Step C: lifestyle factors ─────────────────────────────────────────────

    println!("  Step C: {}", wizard.step().title());
    wizard.set_lifestyle(Lifestyle {
        smoking_status: "Never".to_string(),
        alcohol_consumption: "Socially".to_string(),
        exercise_frequency: "Moderate (1-3 times/week)".to_string(),
        dietary_restrictions: vec!["Low-Sodium".to_string()],
    });
    wizard.advance()?;
    println!();

    // ── Step D: review and finish ─────────────────────────────────────────────

    println!("  Step D: {}", wizard.step().title());
    let profile = wizard.finish()?;
    println!(
        "  Profile:                {} {} (born {})",
        profile.first_name, profile.last_name, profile.date_of_birth,
    );
    println!("  Conditions:             {}", profile.history.conditions.join(", "));
    println!("  Allergies:              {}", profile.history.allergies.join(", "));
    println!("  Smoking status:         {}", profile.lifestyle.smoking_status);
    println!("  RESULT: SUCCESS (expected)");
    println!();

    println!("  Scenario 4 complete.");
    println!();

    Ok(())
}
