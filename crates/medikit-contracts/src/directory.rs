//! Pharmacy directory record types.
//!
//! These are plain read-model records: the directory crate filters and sorts
//! them, but nothing mutates them after seeding.

use serde::{Deserialize, Serialize};

/// A pharmacy listing as shown on the locator screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pharmacy {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub distance_miles: f64,
    pub rating: f32,
    pub is_open: bool,
    /// Display string, e.g. "8:00 AM - 10:00 PM" or "24/7".
    pub hours: String,
    pub phone: String,
    /// Offered services, e.g. "Prescription", "Home Delivery".
    pub services: Vec<String>,
}

/// An over-the-counter medication in the quick-order catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtcMedication {
    pub name: String,
    pub category: String,
    pub price_usd: f64,
}
