//! Scraper payload parsing shared by the HTTP and file sources.

use crate::domain::{Comment, DomainError};
use serde_json::Value;

/// Envelope keys under which scrapers commonly nest the comment list.
const ENVELOPE_KEYS: [&str; 3] = ["comments", "results", "data"];

/// Extract the ordered comment list from a scraper payload.
///
/// Accepts a bare JSON array, or an object carrying the array under one of
/// `comments`, `results` or `data`. Entries are mapped leniently.
///
/// # Errors
/// `DomainError::InvalidInput` when no list can be found.
pub fn comments_from_payload(payload: &Value) -> Result<Vec<Comment>, DomainError> {
    if let Value::Object(map) = payload {
        for key in ENVELOPE_KEYS {
            if let Some(list) = map.get(key) {
                if list.is_array() {
                    return Comment::list_from_value(list);
                }
            }
        }
    }
    Comment::list_from_value(payload)
}
