//! REST API helpers for communicating with the server.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: stubs returning `None`, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so a failed listing
//! degrades the gallery instead of breaking rendering.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use serde::Deserialize;

pub const IMAGES_ENDPOINT: &str = "/api/images";

#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
struct ImagesResponse {
    images: Vec<String>,
}

/// Extract the image paths from an `/api/images` response body.
#[cfg(any(test, feature = "csr"))]
fn parse_images_body(body: &str) -> Option<Vec<String>> {
    serde_json::from_str::<ImagesResponse>(body).ok().map(|r| r.images)
}

/// Fetch the public image paths from `/api/images`.
/// Returns `None` on any failure or outside the browser.
pub async fn fetch_images() -> Option<Vec<String>> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(IMAGES_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            log::warn!("image listing failed: {}", resp.status());
            return None;
        }
        let body = resp.text().await.ok()?;
        parse_images_body(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
