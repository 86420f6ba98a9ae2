//! Static cat-breed catalog and fact list.
//!
//! Everything here is compiled in and never mutated. The only behavior is
//! [`filter_breeds`], a case-folded substring match over breed names.

mod data;

pub use data::{BREEDS, FACTS, INTRO, TITLE};

/// One entry of the breed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreedRecord {
    /// Unique display name; search compares it case-insensitively.
    pub name: &'static str,
    pub description: &'static str,
    /// Opaque image URI. Shown as text, never fetched.
    pub image_ref: &'static str,
}

/// Returns the records whose lower-cased name contains the lower-cased query.
///
/// Catalog order is preserved. An empty query returns every record.
pub fn filter_breeds<'a>(catalog: &'a [BreedRecord], query: &str) -> Vec<&'a BreedRecord> {
    if query.is_empty() {
        return catalog.iter().collect();
    }
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|breed| breed.name.to_lowercase().contains(&needle))
        .collect()
}

/// Looks a breed up by its exact name.
pub fn find_breed(name: &str) -> Option<&'static BreedRecord> {
    BREEDS.iter().find(|breed| breed.name == name)
}

pub fn is_known_breed(name: &str) -> bool {
    find_breed(name).is_some()
}
