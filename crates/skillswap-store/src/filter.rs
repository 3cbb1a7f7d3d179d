//! Filter engine
//!
//! A listing is kept when the query matches its title, description or
//! provider (case-insensitive substring, empty query matches all) and the
//! category selector admits its category. Store order is preserved.

use crate::ListingStore;
use skillswap_types::{CategoryFilter, SkillListing};

/// Whether `listing` matches an already lowercased query
fn matches_query(listing: &SkillListing, needle: &str) -> bool {
    needle.is_empty()
        || listing.title.to_lowercase().contains(needle)
        || listing.description.to_lowercase().contains(needle)
        || listing.provider.to_lowercase().contains(needle)
}

/// Filter listings by free-text query and category
pub fn filter<'a>(
    listings: &'a [SkillListing],
    query: &str,
    category: &CategoryFilter,
) -> Vec<&'a SkillListing> {
    let needle = query.to_lowercase();
    listings
        .iter()
        .filter(|l| matches_query(l, &needle) && category.matches(l.category))
        .collect()
}

impl ListingStore {
    /// Filter the store; see [`filter`]
    pub fn filter(&self, query: &str, category: &CategoryFilter) -> Vec<&SkillListing> {
        filter(self.listings(), query, category)
    }
}
