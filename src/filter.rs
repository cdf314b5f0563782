//! Pokédex search box and type dropdown.

use crate::model::Entity;

/// Name substring plus optional type tag.
///
/// Both parts are case-insensitive. An entity whose details have not loaded
/// yet has no known types, so it only matches when no type is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    search: String,
    type_name: Option<String>,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl AsRef<str>) -> Self {
        self.search = search.as_ref().trim().to_lowercase();
        self
    }

    pub fn with_type(mut self, type_name: impl AsRef<str>) -> Self {
        let type_name = type_name.as_ref().trim();
        self.type_name = (!type_name.is_empty()).then(|| type_name.to_lowercase());
        self
    }

    /// Whether this filter lets everything through.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.type_name.is_none()
    }

    /// Whether the type dropdown has a selection.
    pub fn needs_details(&self) -> bool {
        self.type_name.is_some()
    }

    pub fn matches(&self, entity: &Entity) -> bool {
        let matches_search =
            self.search.is_empty() || entity.summary.name.to_lowercase().contains(&self.search);
        let matches_type = match &self.type_name {
            None => true,
            Some(wanted) => entity
                .details
                .as_ref()
                .is_some_and(|details| details.has_type(wanted)),
        };
        matches_search && matches_type
    }

    /// Keep matching entities in catalog order.
    pub fn apply<'a, I>(&self, entities: I) -> Vec<Entity>
    where
        I: IntoIterator<Item = &'a Entity>,
    {
        entities
            .into_iter()
            .filter(|entity| self.matches(entity))
            .cloned()
            .collect()
    }
}
