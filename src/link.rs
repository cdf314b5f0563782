//! Shareable links that open a specific entity: `{share_base}?pokemon={id}`.

use thiserror::Error;
use url::{form_urlencoded, Url};

/// Query parameter carrying the shared id.
pub const SHARE_PARAM: &str = "pokemon";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("invalid share base URL '{url}': {message}")]
    InvalidBase { url: String, message: String },

    #[error("link has no 'pokemon' parameter")]
    MissingId,

    #[error("'{0}' is not a Pokédex number")]
    NotANumber(String),

    #[error("#{id} is outside the Pokédex (1-{count})")]
    OutOfRange { id: u32, count: u32 },
}

/// Build the link that opens entity `id`.
///
/// Any existing query on `base` is replaced.
pub fn share_url(base: &str, id: u32) -> Result<String, LinkError> {
    let mut url = Url::parse(base.trim()).map_err(|e| LinkError::InvalidBase {
        url: base.to_string(),
        message: e.to_string(),
    })?;
    url.set_fragment(None);
    url.query_pairs_mut()
        .clear()
        .append_pair(SHARE_PARAM, &id.to_string());
    Ok(url.to_string())
}

/// Resolve user input to an entity id.
///
/// Accepts a bare number, a full link, or just the query string
/// (`?pokemon=25` or `pokemon=25`). The id must lie within `1..=count`.
pub fn parse_shared_id(input: &str, count: u32) -> Result<u32, LinkError> {
    let input = input.trim();
    let raw = if input.chars().all(|c| c.is_ascii_digit()) && !input.is_empty() {
        input.to_string()
    } else {
        shared_param(input).ok_or(LinkError::MissingId)?
    };

    let id: u32 = raw
        .trim()
        .parse()
        .map_err(|_| LinkError::NotANumber(raw.clone()))?;
    if id == 0 || id > count {
        return Err(LinkError::OutOfRange { id, count });
    }
    Ok(id)
}

fn shared_param(input: &str) -> Option<String> {
    let find = |pairs: form_urlencoded::Parse<'_>| {
        pairs
            .into_iter()
            .find(|(key, _)| key == SHARE_PARAM)
            .map(|(_, value)| value.into_owned())
    };

    match Url::parse(input) {
        Ok(url) => find(url.query_pairs()),
        Err(_) => find(form_urlencoded::parse(
            input.trim_start_matches('?').as_bytes(),
        )),
    }
}
