//! SkillSwap Types - Core types for the SkillSwap marketplace
//!
//! This module defines the data types shared by the store, view and controller crates.

pub mod error;
pub mod events;

pub use error::{Result, SkillswapError};
pub use events::{TimerEvent, UiEvent};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a listing, assigned by the seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub u32);

impl ListingId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ListingId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Marketplace category a listing belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Music,
    Languages,
    Sports,
    Arts,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Technology,
        Category::Music,
        Category::Languages,
        Category::Sports,
        Category::Arts,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Music => "music",
            Category::Languages => "languages",
            Category::Sports => "sports",
            Category::Arts => "arts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SkillswapError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SkillswapError::UnknownCategory(s.to_string()))
    }
}

/// Category selector as chosen in the filter dropdown
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// The `"all"` sentinel: no restriction
    #[default]
    All,
    Only(Category),
    /// A selector naming no known category; matches nothing
    Unmatched(String),
}

impl CategoryFilter {
    pub const ALL_SENTINEL: &'static str = "all";

    /// Parse the selector value. Never fails: unknown values filter everything out.
    pub fn from_selector(value: &str) -> Self {
        if value == Self::ALL_SENTINEL {
            return CategoryFilter::All;
        }
        match value.parse::<Category>() {
            Ok(category) => CategoryFilter::Only(category),
            Err(_) => CategoryFilter::Unmatched(value.to_string()),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
            CategoryFilter::Unmatched(_) => false,
        }
    }

    pub fn as_selector(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_SENTINEL,
            CategoryFilter::Only(category) => category.as_str(),
            CategoryFilter::Unmatched(raw) => raw,
        }
    }
}

/// One skill offer in the marketplace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillListing {
    pub id: ListingId,
    pub title: String,
    /// Glyph reference, opaque to the core (e.g. `fas fa-code`)
    pub icon: String,
    pub provider: String,
    pub location: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub saved: bool,
}

impl SkillListing {
    /// Label of the save control for the current `saved` state
    pub fn save_label(&self) -> &'static str {
        if self.saved {
            "Saved"
        } else {
            "Save"
        }
    }
}

/// Which form the auth overlay shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    Login,
    #[default]
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

/// Severity flag of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Error,
}

/// Identifier of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display phase of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPhase {
    Visible,
    Fading,
}

/// A transient status message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub phase: NotificationPhase,
}

impl Notification {
    pub fn new(id: NotificationId, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id,
            message: message.into(),
            severity,
            phase: NotificationPhase::Visible,
        }
    }
}
