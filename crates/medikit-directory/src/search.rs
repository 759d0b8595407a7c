//! Case-insensitive substring search over directory records.
//!
//! This is the one search behavior the whole application uses: an empty
//! query returns everything, a non-empty query keeps the records where it
//! appears in at least one designated text field. No fuzzy matching, no
//! ranking — all qualifying records are returned in their original order.

use tracing::debug;

use medikit_contracts::{
    directory::{OtcMedication, Pharmacy},
    reminder::Reminder,
};

/// A record that exposes text fields the search may match against.
pub trait Searchable {
    /// The designated fields, in display priority order.
    fn search_text(&self) -> Vec<&str>;
}

impl Searchable for Pharmacy {
    /// Pharmacies match on name or address, as the locator screen does.
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.address]
    }
}

impl Searchable for OtcMedication {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.category]
    }
}

impl Searchable for Reminder {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.medication]
    }
}

/// Filter `records` down to those matching `query`.
///
/// Matching is case-insensitive substring containment against any field the
/// record designates. An empty or all-whitespace query matches everything.
/// Order is preserved; nothing is ranked or deduplicated.
pub fn search<'a, T: Searchable>(query: &str, records: &'a [T]) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }

    let hits: Vec<&T> = records
        .iter()
        .filter(|record| {
            record
                .search_text()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect();

    debug!(query = %query, hits = hits.len(), total = records.len(), "search");
    hits
}

/// Order pharmacies nearest-first, for the locator list.
pub fn sort_by_distance(pharmacies: &mut [Pharmacy]) {
    pharmacies.sort_by(|a, b| {
        a.distance_miles
            .partial_cmp(&b.distance_miles)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
