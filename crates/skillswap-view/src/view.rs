//! Declarative page description

use crate::overlay::OverlayView;
use serde::Serialize;
use skillswap_types::{ListingId, Notification, SkillListing};

/// Placeholder shown when no listing passes the filter
pub const NO_RESULTS_MESSAGE: &str = "No skills match your search criteria.";

/// Visual tone of the save control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Accent,
    Dark,
}

/// Save toggle of a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveControl {
    pub listing: ListingId,
    pub label: &'static str,
    pub saved: bool,
    pub tone: Tone,
}

impl SaveControl {
    pub fn for_listing(listing: &SkillListing) -> Self {
        Self {
            listing: listing.id,
            label: listing.save_label(),
            saved: listing.saved,
            tone: if listing.saved { Tone::Accent } else { Tone::Dark },
        }
    }
}

/// Swap request control of a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapControl {
    pub listing: ListingId,
    pub label: &'static str,
}

/// One listing card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: ListingId,
    pub title: String,
    pub icon: String,
    pub provider: String,
    pub location: String,
    pub description: String,
    pub save: SaveControl,
    pub swap: SwapControl,
}

impl From<&SkillListing> for CardView {
    fn from(listing: &SkillListing) -> Self {
        Self {
            id: listing.id,
            title: listing.title.clone(),
            icon: listing.icon.clone(),
            provider: listing.provider.clone(),
            location: listing.location.clone(),
            description: listing.description.clone(),
            save: SaveControl::for_listing(listing),
            swap: SwapControl {
                listing: listing.id,
                label: "Swap",
            },
        }
    }
}

/// Contents of the listing region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListingRegion {
    /// Terminal state for an empty result, not an empty card list
    NoResults { message: String },
    Cards { cards: Vec<CardView> },
}

impl ListingRegion {
    /// Build the region for a filtered sequence, in sequence order
    pub fn from_listings(listings: &[&SkillListing]) -> Self {
        if listings.is_empty() {
            return ListingRegion::NoResults {
                message: NO_RESULTS_MESSAGE.to_string(),
            };
        }
        ListingRegion::Cards {
            cards: listings.iter().map(|l| CardView::from(*l)).collect(),
        }
    }

    pub fn cards(&self) -> &[CardView] {
        match self {
            ListingRegion::Cards { cards } => cards,
            ListingRegion::NoResults { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ListingRegion::NoResults { .. })
    }

    /// Card for `id`, if shown
    pub fn card(&self, id: ListingId) -> Option<&CardView> {
        self.cards().iter().find(|c| c.id == id)
    }
}

/// Everything the page shows at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub search_query: String,
    pub category: String,
    pub listings: ListingRegion,
    pub overlay: Option<OverlayView>,
    pub notifications: Vec<Notification>,
    pub newsletter_email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillswap_types::Category;

    fn listing(id: u32, saved: bool) -> SkillListing {
        SkillListing {
            id: ListingId(id),
            title: "Guitar Lessons".to_string(),
            icon: "fas fa-guitar".to_string(),
            provider: "Maria Garcia".to_string(),
            location: "Austin".to_string(),
            description: "All styles.".to_string(),
            category: Category::Music,
            saved,
        }
    }

    #[test]
    fn test_empty_sequence_is_placeholder() {
        let region = ListingRegion::from_listings(&[]);
        assert!(region.is_empty());
        assert!(region.cards().is_empty());
        assert_eq!(
            region,
            ListingRegion::NoResults {
                message: NO_RESULTS_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_cards_follow_sequence_order() {
        let (a, b) = (listing(4, false), listing(2, true));
        let region = ListingRegion::from_listings(&[&a, &b]);
        let ids: Vec<u32> = region.cards().iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![4, 2]);
    }

    #[test]
    fn test_controls_keyed_by_listing() {
        let saved = listing(2, true);
        let card = CardView::from(&saved);
        assert_eq!(card.save.listing, ListingId(2));
        assert_eq!(card.save.label, "Saved");
        assert_eq!(card.save.tone, Tone::Accent);
        assert_eq!(card.swap.listing, ListingId(2));
        assert_eq!(card.swap.label, "Swap");

        let unsaved = CardView::from(&listing(3, false));
        assert_eq!(unsaved.save.label, "Save");
        assert_eq!(unsaved.save.tone, Tone::Dark);
    }
}
