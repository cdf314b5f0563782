//! Unit tests for shared links

use pokedeck::link::{parse_shared_id, share_url, LinkError};

#[test]
fn every_catalog_id_round_trips() {
    for id in 1..=151 {
        let link = share_url("https://pokedeck.app/", id).unwrap();
        assert_eq!(parse_shared_id(&link, 151), Ok(id));
    }
}

#[test]
fn links_outside_catalog_are_rejected() {
    let link = share_url("https://pokedeck.app/", 200).unwrap();
    assert_eq!(
        parse_shared_id(&link, 151),
        Err(LinkError::OutOfRange { id: 200, count: 151 })
    );
}
