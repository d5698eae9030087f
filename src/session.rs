//! Admin Session
//!
//! Bearer token persistence for the admin views. The token is opaque:
//! no expiry is inspected locally; a 401 from any protected call is the
//! only signal that the session has ended.

pub const TOKEN_KEY: &str = "admin_token";
pub const USERNAME_KEY: &str = "admin_username";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Currently stored bearer token, if any
pub fn token() -> Option<String> {
    local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
}

/// Stored admin username, if any
pub fn username() -> Option<String> {
    local_storage().and_then(|s| s.get_item(USERNAME_KEY).ok().flatten())
}

/// The session guard predicate: a token is present
pub fn is_authenticated() -> bool {
    token().is_some()
}

/// Persist a fresh login
pub fn store_login(token: &str, username: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(USERNAME_KEY, username);
    }
}

/// Purge the stored credential. Called on logout and on any 401.
pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USERNAME_KEY);
    }
}
