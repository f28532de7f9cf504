//! Persistence for the bearer token. A single named slot in browser local
//! storage survives reloads; everything else about the session is rebuilt from
//! the API. Non-wasm builds compile these to no-ops so the state machine can
//! be tested on the host.

/// Storage slot holding the bearer token across reloads.
const TOKEN_STORAGE_KEY: &str = "authToken";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
pub fn load_token() -> Option<String> {
    let token = local_storage()?.get_item(TOKEN_STORAGE_KEY).ok()??;
    if token.is_empty() { None } else { Some(token) }
}

#[cfg(target_arch = "wasm32")]
pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_token() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn store_token(_token: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_token() {}
