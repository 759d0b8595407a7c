//! # medikit-directory
//!
//! Pharmacy directory filtering: the generic case-insensitive substring
//! [`search`] used by the locator and quick-order screens, plus ordering
//! helpers.
//!
//! Records come from `medikit-contracts`; this crate never mutates them.

pub mod search;

pub use search::{search, sort_by_distance, Searchable};
