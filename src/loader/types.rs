//! Type names for the Pokédex filter control.

use std::sync::Arc;

use tracing::warn;

use crate::api::wire::NamedResourceList;
use crate::api::{Endpoints, Fetcher};
use crate::record_cache::SharedCache;

/// Load every type name, once per session.
///
/// A failure leaves the filter empty rather than blocking anything.
pub async fn load_types<F: Fetcher>(
    fetcher: &F,
    cache: &SharedCache,
    endpoints: &Endpoints,
) -> Arc<Vec<String>> {
    if let Some(types) = cache.types() {
        return types;
    }

    let url = endpoints.types();
    let names = match fetcher.get_json(&url).await {
        Ok(body) => match serde_json::from_value::<NamedResourceList>(body) {
            Ok(list) => list.results.into_iter().map(|r| r.name).collect(),
            Err(e) => {
                warn!(url, error = %e, "type list has an unexpected shape");
                return Arc::new(Vec::new());
            }
        },
        Err(e) => {
            warn!(error = %e, "type list fetch failed");
            return Arc::new(Vec::new());
        }
    };

    let names = Arc::new(names);
    cache.set_types(Arc::clone(&names));
    names
}
