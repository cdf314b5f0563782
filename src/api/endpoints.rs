//! URL construction for the catalog API and derived asset locations.

use crate::config::ApiConfig;
use crate::model::cry_slug;

/// Resolved endpoint roots for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    base_url: String,
    sprite_base_url: String,
    cry_base_url: String,
}

impl Endpoints {
    pub fn new(base_url: &str, sprite_base_url: &str, cry_base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            sprite_base_url: sprite_base_url.trim_end_matches('/').to_string(),
            cry_base_url: cry_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(api: &ApiConfig) -> Self {
        Self::new(&api.base_url, &api.sprite_base_url, &api.cry_base_url)
    }

    /// `GET {base}/pokemon?limit={count}`
    pub fn catalog(&self, count: u32) -> String {
        format!("{}/pokemon?limit={}", self.base_url, count)
    }

    /// `GET {base}/type`
    pub fn types(&self) -> String {
        format!("{}/type", self.base_url)
    }

    /// Detail locator used when the listing omits one.
    pub fn detail(&self, id: u32) -> String {
        format!("{}/pokemon/{}/", self.base_url, id)
    }

    pub fn image(&self, id: u32) -> String {
        format!("{}/{}.png", self.sprite_base_url, id)
    }

    pub fn shiny_image(&self, id: u32) -> String {
        format!("{}/shiny/{}.png", self.sprite_base_url, id)
    }

    pub fn cry(&self, name: &str) -> String {
        format!("{}/{}.ogg", self.cry_base_url, cry_slug(name))
    }

    pub fn cry_fallback(&self, name: &str) -> String {
        format!("{}/{}.mp3", self.cry_base_url, cry_slug(name))
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_config(&ApiConfig::default())
    }
}
