//! Catalog, detail and type loaders.
//!
//! All three consult the session cache before touching the network and
//! convert fetch failures at their own boundary, so nothing above them ever
//! sees a raw `FetchError`.

mod catalog;
mod detail;
mod types;

pub use catalog::{find_by_id, Catalog, CatalogLoader};
pub use detail::{normalize, DetailLoader};
pub use types::load_types;
