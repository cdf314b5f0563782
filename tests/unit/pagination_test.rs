//! Unit tests for pagination over a loaded catalog

use std::sync::Arc;

use pokedeck::loader::CatalogLoader;
use pokedeck::{get_page, Endpoints, PageCursor, SharedCache};

use crate::helpers::pokeapi;

#[tokio::test]
async fn pages_of_full_catalog() {
    let fetcher = Arc::new(pokeapi(151));
    let catalog = CatalogLoader::new(fetcher, SharedCache::unbounded(), Endpoints::default())
        .load_catalog(151)
        .await
        .unwrap();

    let first = get_page(catalog.as_slice(), 1, 20);
    let ids: Vec<u32> = first.items.iter().map(|s| s.id).collect();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    assert_eq!(first.range_label, "Showing 1-20 of 151");
    assert!(first.has_more);

    let last = get_page(catalog.as_slice(), 8, 20);
    let ids: Vec<u32> = last.items.iter().map(|s| s.id).collect();
    assert_eq!(ids, (141..=151).collect::<Vec<_>>());
    assert!(!last.has_more);
}

#[test]
fn cursor_walks_until_no_more() {
    let catalog: Vec<u32> = (1..=45).collect();
    let mut cursor = PageCursor::new(20);
    let mut labels = vec![cursor.page(&catalog).range_label];
    while cursor.page(&catalog).has_more {
        cursor.advance();
        labels.push(cursor.page(&catalog).range_label);
    }

    assert_eq!(
        labels,
        vec![
            "Showing 1-20 of 45",
            "Showing 21-40 of 45",
            "Showing 41-45 of 45"
        ]
    );
}

#[tokio::test]
async fn every_page_size_covers_the_catalog() {
    let fetcher = Arc::new(pokeapi(45));
    let catalog = CatalogLoader::new(fetcher, SharedCache::unbounded(), Endpoints::default())
        .load_catalog(45)
        .await
        .unwrap();

    for size in (1..=45).chain([46, 200]) {
        let mut cursor = PageCursor::new(size);
        let mut ids = Vec::new();
        loop {
            let page = cursor.page(catalog.as_slice());
            ids.extend(page.items.iter().map(|s| s.id));
            if !page.has_more {
                break;
            }
            cursor.advance();
        }
        assert_eq!(ids, (1..=45).collect::<Vec<_>>(), "page size {}", size);
    }
}
