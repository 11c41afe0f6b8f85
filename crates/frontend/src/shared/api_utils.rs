//! API utilities for console-backend communication
//!
//! Every list and options call is a `PUT` with a JSON body; mutations are
//! `POST`. Transport failures are mapped onto [`ApiError`] here so pages only
//! ever see the typed error.

use crate::shared::config::config;
use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Uses `[api] base_url` from the configuration when set, otherwise derives
/// it from the current window location with port 3000.
pub fn api_base() -> String {
    let configured = config().api.base_url.trim_end_matches('/');
    if !configured.is_empty() {
        return configured.to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from an endpoint such as `vendor/all`
pub fn api_url(endpoint: &str) -> String {
    join_url(&api_base(), endpoint)
}

fn join_url(base: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// `PUT <endpoint>` with a JSON body, decoding the JSON answer
pub async fn put_json<B, T>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let request = Request::put(&api_url(endpoint))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = send(request, endpoint).await?;
    decode(response).await
}

/// `POST <endpoint>` with a JSON body; the answer body is ignored
pub async fn post_json<B>(endpoint: &str, body: &B) -> Result<(), ApiError>
where
    B: Serialize + ?Sized,
{
    let request = Request::post(&api_url(endpoint))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    send(request, endpoint).await?;
    Ok(())
}

async fn send(request: Request, endpoint: &str) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        log::warn!("{} answered with status {}", endpoint, response.status());
        return Err(ApiError::from_status(response.status()));
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_normalizes_slashes() {
        assert_eq!(
            join_url("http://localhost:3000/", "/vendor/all"),
            "http://localhost:3000/vendor/all"
        );
        assert_eq!(
            join_url("http://localhost:3000", "location/state"),
            "http://localhost:3000/location/state"
        );
    }
}
