//! Unit tests for the record cache

use pokedeck::RecordCache;

#[test]
fn bounded_cache_prunes_oldest_inserted() {
    let mut cache = RecordCache::bounded(50);
    for id in 1..=51u32 {
        cache.set(format!("detail:{}", id), id);
    }

    assert_eq!(cache.len(), 50);
    assert!(!cache.has(&"detail:1".to_string()));
    assert!(cache.has(&"detail:2".to_string()));
    assert_eq!(cache.get(&"detail:51".to_string()), Some(&51));
}

#[test]
fn overwrite_does_not_refresh_position() {
    let mut cache = RecordCache::bounded(2);
    cache.set("a", 1);
    cache.set("b", 2);
    cache.set("a", 10);
    cache.set("c", 3);

    assert!(!cache.has(&"a"));
    assert_eq!(cache.get(&"b"), Some(&2));
    assert_eq!(cache.get(&"c"), Some(&3));
}

#[test]
fn unbounded_cache_keeps_everything() {
    let mut cache = RecordCache::unbounded();
    for id in 0..500u32 {
        cache.set(id, id);
    }
    assert_eq!(cache.len(), 500);
    assert_eq!(cache.capacity(), None);
}
