//! MediKit Reference Clinic — Demo CLI
//!
//! Runs one or all of the four MediKit demo scenarios.  Each scenario wires
//! real MediKit components (reminder schedule, directory search, appointment
//! book, profile wizard) together with seeded clinic data.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- reminders
//!   cargo run -p demo -- pharmacy
//!   cargo run -p demo -- booking
//!   cargo run -p demo -- profile

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use medikit_ref_clinic::scenarios::{booking, pharmacy, profile, reminders};

// ── CLI definition ────────────────────────────────────────────────────────────

/// MediKit — consumer medication companion demo.
///
/// Each subcommand runs one or all of the four screen walkthroughs: the
/// adherence loop, the pharmacy finder, teleconsultation booking, and the
/// profile wizard.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "MediKit reference clinic demo",
    long_about = "Runs MediKit demo scenarios showing the reminder adherence loop,\n\
                  pharmacy directory search, consultation booking, and the\n\
                  medical profile wizard."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all four scenarios in sequence.
    RunAll,
    /// Scenario 1: Medication Reminders (due list, mark-taken, rollover).
    Reminders,
    /// Scenario 2: Pharmacy Finder (search and nearest-first ordering).
    Pharmacy,
    /// Scenario 3: Teleconsultation Booking (slots and double-book guard).
    Booking,
    /// Scenario 4: Medical Profile Wizard (four-step onboarding).
    Profile,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::Reminders => reminders::run_scenario(),
        Command::Pharmacy => pharmacy::run_scenario(),
        Command::Booking => booking::run_scenario(),
        Command::Profile => profile::run_scenario(),
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

fn run_all() -> medikit_contracts::error::MedikitResult<()> {
    reminders::run_scenario()?;
    pharmacy::run_scenario()?;
    booking::run_scenario()?;
    profile::run_scenario()?;
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("MediKit — Medication Companion");
    println!("Reference Clinic Demo");
    println!("==============================");
    println!();
    println!("Models exercised per scenario:");
    println!("  [1] ReminderSchedule — due-list projection, streaks, day rollover");
    println!("  [2] Directory search — case-insensitive substring over seed data");
    println!("  [3] AppointmentBook — per-doctor per-date slot bookkeeping");
    println!("  [4] ProfileWizard — linear four-step flow with validated finish");
    println!();
}
