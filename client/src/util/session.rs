//! Session token persistence in `localStorage`.
//!
//! The token is opaque: it is stored exactly as issued and sent back verbatim
//! as the `Authorization` header. Outside the browser every call is a no-op.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(any(test, feature = "hydrate"))]
const STORAGE_KEY: &str = "Authorization";

/// A stored value only counts as a token when it has non-blank content.
#[cfg(any(test, feature = "hydrate"))]
fn usable_token(raw: Option<String>) -> Option<String> {
    raw.filter(|t| !t.trim().is_empty())
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored session token.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        usable_token(storage()?.get_item(STORAGE_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a freshly issued token.
pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            log::warn!("localStorage unavailable; session will not persist");
            return;
        };
        if storage.set_item(STORAGE_KEY, token).is_err() {
            log::warn!("failed to persist session token");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Forget the session token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
