//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and for the raw
//! `fetch` calls that gloo-net does not cover (multipart bodies, blobs).

use contracts::shared::api_error::ApiErrorBody;
use contracts::shared::config::{resolve_api_base, LOCAL_API_BASE};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, FormData, Request, RequestInit, RequestMode, Response};

/// Get the base URL for API requests
///
/// Local pages (`localhost`, `127.0.0.1`, `file:`) talk to the dev backend on
/// port 8000; a deployed site talks to its own origin.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return LOCAL_API_BASE.to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location.hostname().unwrap_or_default();
    let origin = location.origin().unwrap_or_default();
    resolve_api_base(&protocol, &hostname, &origin)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/chat");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// POST a multipart form. The browser sets the multipart boundary header.
pub async fn post_form(path: &str, form_data: &FormData) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form_data);

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    resp_value.dyn_into::<Response>().map_err(|e| format!("{e:?}"))
}

pub async fn response_text(resp: &Response) -> Result<String, String> {
    let text = JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    text.as_string().ok_or_else(|| "bad text".to_string())
}

pub async fn response_json<T: DeserializeOwned>(resp: &Response) -> Result<T, String> {
    let value = JsFuture::from(resp.json().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| format!("{e}"))
}

pub async fn response_blob(resp: &Response) -> Result<Blob, String> {
    let value = JsFuture::from(resp.blob().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    value.dyn_into::<Blob>().map_err(|e| format!("{e:?}"))
}

/// `detail` from a failed response body, or `fallback`.
pub async fn error_detail(resp: &Response, fallback: &str) -> String {
    let raw = response_text(resp).await.unwrap_or_default();
    ApiErrorBody::parse(&raw).message_or(fallback)
}
