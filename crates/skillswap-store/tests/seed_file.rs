//! Loading listings from a seed file on disk

use skillswap_store::{seed, ListingStore};
use skillswap_types::{CategoryFilter, ListingId};
use std::io::Write;

const SEED: &str = r#"
[[listings]]
id = 10
title = "Bread Baking"
icon = "fas fa-bread-slice"
provider = "Nina Park"
location = "Portland"
description = "Sourdough starters and shaping."
category = "arts"

[[listings]]
id = 11
title = "Rust Programming"
icon = "fas fa-code"
provider = "Ferris Crab"
location = "Remote"
description = "Ownership, borrowing and async."
category = "technology"
"#;

#[test]
fn test_store_from_seed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SEED.as_bytes()).unwrap();

    let listings = seed::load(Some(file.path())).unwrap();
    let store = ListingStore::new(listings).unwrap();

    assert_eq!(store.len(), 2);
    let found = store.filter("rust", &CategoryFilter::All);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, ListingId(11));
}

#[test]
fn test_duplicate_ids_in_file_rejected() {
    let duplicated = SEED.replace("id = 11", "id = 10");
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(duplicated.as_bytes()).unwrap();

    let listings = seed::load(Some(file.path())).unwrap();
    assert!(ListingStore::new(listings).is_err());
}

#[test]
fn test_default_seed_when_no_path() {
    let listings = seed::load(None).unwrap();
    assert_eq!(listings.len(), 6);
}
