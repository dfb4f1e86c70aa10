//! Classification of raw user input before it reaches the network.

use patio_core::plate::{Plate, PlateError};

/// A search box query: numeric record id or license plate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    Id(String),
    Plate(Plate),
}

impl SearchQuery {
    /// Digits-only input is a record id; anything else must validate as a
    /// plate.
    pub fn parse(input: &str) -> Result<Self, PlateError> {
        let trimmed = input.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Ok(SearchQuery::Id(trimmed.to_string()));
        }
        Plate::parse(trimmed).map(SearchQuery::Plate)
    }
}

/// Lightweight email shape check, enough to catch obvious typos before a
/// round-trip to the server.
pub fn looks_like_email(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
}
