//! Seed data loading
//!
//! Listings come from a TOML document of `[[listings]]` tables. The six
//! built-in listings are embedded; a configured file replaces them.

use anyhow::{Context, Result};
use serde::Deserialize;
use skillswap_types::SkillListing;
use std::fs;
use std::path::Path;
use tracing::info;

const DEFAULT_SEED: &str = include_str!("../seed/listings.toml");

#[derive(Debug, Deserialize)]
struct SeedDocument {
    #[serde(default)]
    listings: Vec<SkillListing>,
}

/// Parse a TOML seed document
pub fn parse(content: &str) -> Result<Vec<SkillListing>> {
    let document: SeedDocument =
        toml::from_str(content).context("Failed to parse seed document")?;
    Ok(document.listings)
}

/// The built-in listings
pub fn default_listings() -> Result<Vec<SkillListing>> {
    parse(DEFAULT_SEED).context("Embedded seed is invalid")
}

/// Load listings from `path`, or the built-in seed when no path is given
pub fn load(path: Option<&Path>) -> Result<Vec<SkillListing>> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read seed file {:?}", path))?;
            let listings =
                parse(&content).with_context(|| format!("Invalid seed file {:?}", path))?;
            info!("Loaded {} listings from {:?}", listings.len(), path);
            Ok(listings)
        }
        None => default_listings(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillswap_types::{Category, ListingId};

    #[test]
    fn test_default_seed() {
        let listings = default_listings().unwrap();
        assert_eq!(listings.len(), 6);
        assert_eq!(listings[1].title, "Guitar Lessons");
        assert_eq!(listings[1].category, Category::Music);
        assert!(listings.iter().all(|l| !l.saved));
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let content = r#"
[[listings]]
id = 1
title = "Pottery"
icon = "fas fa-mug"
provider = "Ann"
location = "Leeds"
description = "Wheel throwing"
category = "crafts"
"#;
        assert!(parse(content).is_err());
    }

    #[test]
    fn test_parse_saved_flag() {
        let content = r#"
[[listings]]
id = 7
title = "Chess"
icon = "fas fa-chess"
provider = "Bo"
location = "Oslo"
description = "Openings and endgames"
category = "sports"
saved = true
"#;
        let listings = parse(content).unwrap();
        assert_eq!(listings[0].id, ListingId(7));
        assert!(listings[0].saved);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Some(Path::new("/nonexistent/seed.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read seed file"));
    }
}
