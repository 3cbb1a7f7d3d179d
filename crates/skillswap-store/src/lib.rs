//! SkillSwap listing store
//!
//! The in-memory, fixed-order sequence of listings that every render and
//! filter reads from. Only the `saved` flag is ever mutated.

pub mod filter;
pub mod seed;

use skillswap_types::{ListingId, SkillListing, SkillswapError};
use std::collections::HashSet;
use tracing::{debug, info};

/// In-memory store of skill listings
#[derive(Debug, Clone)]
pub struct ListingStore {
    listings: Vec<SkillListing>,
}

impl ListingStore {
    /// Create a store from seed records, rejecting zero or duplicate ids
    pub fn new(listings: Vec<SkillListing>) -> Result<Self, SkillswapError> {
        let mut seen = HashSet::with_capacity(listings.len());
        for listing in &listings {
            if listing.id.get() == 0 {
                return Err(SkillswapError::InvalidSeed(format!(
                    "listing '{}' has id 0, ids must be positive",
                    listing.title
                )));
            }
            if !seen.insert(listing.id) {
                return Err(SkillswapError::InvalidSeed(format!(
                    "duplicate listing id {}",
                    listing.id
                )));
            }
        }

        info!("Listing store initialized with {} listings", listings.len());
        Ok(Self { listings })
    }

    /// Store seeded with the built-in listings
    pub fn with_default_seed() -> anyhow::Result<Self> {
        let listings = seed::default_listings()?;
        Ok(Self::new(listings)?)
    }

    /// All listings in seed order
    pub fn listings(&self) -> &[SkillListing] {
        &self.listings
    }

    /// Look up a listing by id
    pub fn get(&self, id: ListingId) -> Option<&SkillListing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Flip `saved` on a listing, returning the new value.
    /// Unknown ids are a no-op and return `None`.
    pub fn toggle_saved(&mut self, id: ListingId) -> Option<bool> {
        let listing = self.listings.iter_mut().find(|l| l.id == id)?;
        listing.saved = !listing.saved;
        debug!("Listing {} saved={}", id, listing.saved);
        Some(listing.saved)
    }

    /// Get number of listings
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Check if store is empty
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillswap_types::Category;

    fn listing(id: u32) -> SkillListing {
        SkillListing {
            id: ListingId(id),
            title: format!("Skill {id}"),
            icon: "fas fa-star".to_string(),
            provider: "Someone".to_string(),
            location: "Somewhere".to_string(),
            description: "Something".to_string(),
            category: Category::Music,
            saved: false,
        }
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = ListingStore::new(vec![listing(1), listing(1)]).unwrap_err();
        assert!(matches!(err, SkillswapError::InvalidSeed(_)));
    }

    #[test]
    fn test_rejects_zero_id() {
        assert!(ListingStore::new(vec![listing(0)]).is_err());
    }

    #[test]
    fn test_toggle_saved_twice_restores() {
        let mut store = ListingStore::new(vec![listing(1), listing(2)]).unwrap();
        assert_eq!(store.toggle_saved(ListingId(2)), Some(true));
        assert_eq!(store.get(ListingId(2)).unwrap().save_label(), "Saved");
        assert_eq!(store.toggle_saved(ListingId(2)), Some(false));
        assert_eq!(store.get(ListingId(2)).unwrap().save_label(), "Save");
        assert!(!store.get(ListingId(1)).unwrap().saved);
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut store = ListingStore::new(vec![listing(1)]).unwrap();
        let before = store.listings().to_vec();
        assert_eq!(store.toggle_saved(ListingId(99)), None);
        assert_eq!(store.listings(), before.as_slice());
    }

    #[test]
    fn test_default_seed_order() {
        let store = ListingStore::with_default_seed().unwrap();
        let ids: Vec<u32> = store.listings().iter().map(|l| l.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }
}
