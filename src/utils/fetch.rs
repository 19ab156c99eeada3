//! Remote catalog download.
//!
//! Only reached when a catalog URL is baked in at build time
//! (`NSAPPS_CATALOG_URL`); the default build serves the bundled fixtures.
//! Bodies are returned as text and decoded by the caller, so a bad payload
//! can be evicted from the session cache before falling back.

use js_sys::{Array, Promise};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;
use crate::utils::cache;

/// Outcome of racing a promise against a timer.
#[derive(Debug)]
enum Race {
    Settled(JsValue),
    TimedOut,
    Rejected(String),
}

/// `Promise.race` between `promise` and a timer resolving to `undefined`.
async fn race_timeout(promise: Promise, timeout_ms: i32) -> Race {
    let Some(window) = web_sys::window() else {
        return Race::Rejected("window not available".to_string());
    };

    let timer = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });
    let contenders = Array::of2(&promise, &timer);

    match JsFuture::from(Promise::race(&contenders)).await {
        Ok(value) if value.is_undefined() => Race::TimedOut,
        Ok(value) => Race::Settled(value),
        Err(e) => Race::Rejected(e.as_string().unwrap_or_else(|| "request rejected".to_string())),
    }
}

/// GET `url` and return the body, giving up after `FETCH_TIMEOUT_MS`.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::Cors);
    let request =
        Request::new_with_str_and_init(url, &init).map_err(|_| FetchError::RequestCreationFailed)?;

    let response: Response = match race_timeout(window.fetch_with_request(&request), FETCH_TIMEOUT_MS).await {
        Race::TimedOut => return Err(FetchError::Timeout),
        Race::Rejected(reason) => return Err(FetchError::NetworkError(reason)),
        Race::Settled(value) => value.dyn_into().map_err(|_| FetchError::InvalidContent)?,
    };
    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    let body = response.text().map_err(|_| FetchError::ResponseReadFailed)?;
    JsFuture::from(body)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?
        .as_string()
        .ok_or(FetchError::InvalidContent)
}

/// [`fetch_text`] backed by the session cache under `cache_key`.
pub async fn fetch_text_cached(url: &str, cache_key: &str) -> Result<String, FetchError> {
    if let Some(body) = cache::get(cache_key) {
        return Ok(body);
    }

    let body = fetch_text(url).await?;
    if let Err(e) = cache::set(cache_key, &body) {
        web_sys::console::warn_1(&format!("Not caching {}: {}", url, e).into());
    }
    Ok(body)
}
