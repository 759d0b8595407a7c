//! # medikit-ref-clinic
//!
//! Reference clinic data and walkthrough scenarios for the MediKit demo.
//!
//! Four scenarios, one per screen of the companion app:
//!
//! 1. **Medication Reminders** — the seeded adherence loop: due list,
//!    mark-taken, the already-taken guard, and the day rollover.
//! 2. **Pharmacy Finder** — directory search and nearest-first ordering.
//! 3. **Teleconsultation Booking** — slot lookup, booking, double-book guard.
//! 4. **Medical Profile Wizard** — the four-step onboarding flow.
//!
//! All data is hardcoded and fictional. No external API calls are made.

pub mod mock_data;
pub mod scenarios;
