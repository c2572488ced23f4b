//! Durable storage for the refresh credential. Only the long-lived refresh
//! token is ever written to `localStorage`; the access token lives in memory
//! and dies with the tab. There is exactly one key, overwritten on rotation
//! and removed on sign-out or failed restoration.

/// `localStorage` key holding the refresh credential while signed in.
/// Renaming it silently signs every user out on deploy.
#[cfg(target_arch = "wasm32")]
const REFRESH_TOKEN_KEY: &str = "ensaluti_refresh_token";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok())
        .flatten()
}

#[cfg(target_arch = "wasm32")]
pub fn read_refresh_token() -> Option<String> {
    local_storage()?
        .get_item(REFRESH_TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|value| !value.is_empty())
}

#[cfg(target_arch = "wasm32")]
pub fn write_refresh_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(REFRESH_TOKEN_KEY, token);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn clear_refresh_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_refresh_token() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn write_refresh_token(_token: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_refresh_token() {}
