//! sessionStorage cache for remote catalog bodies.
//!
//! Entries live for the browser session, so moving between pages never
//! refetches while a new visit always sees fresh content. Bodies are stored
//! raw; callers validate them and [`remove`] the ones that fail.

use thiserror::Error;

use super::dom;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CacheError {
    #[error("sessionStorage is not available")]
    StorageUnavailable,
    #[error("sessionStorage rejected the entry (quota?)")]
    WriteFailed,
}

pub fn get(key: &str) -> Option<String> {
    dom::session_storage()?.get_item(key).ok().flatten()
}

pub fn set(key: &str, body: &str) -> Result<(), CacheError> {
    dom::session_storage()
        .ok_or(CacheError::StorageUnavailable)?
        .set_item(key, body)
        .map_err(|_| CacheError::WriteFailed)
}

pub fn remove(key: &str) {
    if let Some(storage) = dom::session_storage() {
        let _ = storage.remove_item(key);
    }
}
