//! MediKit demo scenarios.
//!
//! Each scenario is a self-contained module that wires up real MediKit
//! components (reminder schedule, directory search, appointment book,
//! profile wizard) with seed data and walks through one screen's flow.

pub mod booking;
pub mod pharmacy;
pub mod profile;
pub mod reminders;
