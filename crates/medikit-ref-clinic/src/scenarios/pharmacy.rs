//! Scenario 2: Pharmacy Finder
//!
//! Walks the pharmacy screen's two lists:
//!
//! Step A — free-text search over the pharmacy directory
//! Step B — nearest-first ordering of the full directory
//! Step C — searching the over-the-counter quick-order catalogue
//!
//! Search is substring-based and case-insensitive over name and address;
//! an empty query returns everything in seed order.

use medikit_contracts::error::MedikitResult;
use medikit_directory::{search, sort_by_distance};

use crate::mock_data::{seed_otc_medications, seed_pharmacies};

/// Run Scenario 2: Pharmacy Finder.
pub fn run_scenario() -> MedikitResult<()> {
    println!("=== Scenario 2: Pharmacy Finder ===");
    println!();

    let pharmacies = seed_pharmacies();
    let medications = seed_otc_medications();

    // ── Step A: search the directory ──────────────────────────────────────────

    let query = "health";
    println!("  Step A: search pharmacies for '{}'", query);
    let hits = search(query, &pharmacies);
    for pharmacy in &hits {
        println!(
            "    {} — {} ({} mi, rated {}, {})",
            pharmacy.name,
            pharmacy.address,
            pharmacy.distance_miles,
            pharmacy.rating,
            if pharmacy.is_open { "open" } else { "closed" },
        );
    }
    println!("  Matches:                {}", hits.len());
    println!();

    // ── Step B: nearest first ─────────────────────────────────────────────────

    println!("  Step B: full directory, nearest first");
    let mut by_distance = pharmacies.clone();
    sort_by_distance(&mut by_distance);
    for pharmacy in &by_distance {
        println!(
            "    {:>4.1} mi  {} [{}]",
            pharmacy.distance_miles,
            pharmacy.name,
            pharmacy.services.join(", "),
        );
    }
    println!();

    // ── Step C: the quick-order catalogue ─────────────────────────────────────

    let med_query = "vitamin";
    println!("  Step C: search medications for '{}'", med_query);
    for med in search(med_query, &medications) {
        println!(
            "    {} — {} (${:.2})",
            med.name, med.category, med.price_usd
        );
    }
    println!();

    println!("  Scenario 2 complete.");
    println!();

    Ok(())
}
