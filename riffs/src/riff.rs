use serde_json::Value;

use crate::models::NewRiff;
use crate::params::segment;
use crate::{Client, Method, RequestOptions, Result};

/// Mints a new riff for `wallet_address`.
///
/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn create(client: &Client, wallet_address: &str, riff: &NewRiff) -> Result<Value> {
    let options = RequestOptions::new()
        .method(Method::POST)
        .wallet_address(wallet_address)
        .body(riff);
    client.request("/riffs", options).await
}

/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn get(client: &Client, id: &str, wallet_address: &str) -> Result<Value> {
    let options = RequestOptions::new().wallet_address(wallet_address);
    client
        .request(&format!("/riffs/riff/{}", segment(id)), options)
        .await
}

/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn latest(client: &Client) -> Result<Value> {
    client.request("/riffs/latest", RequestOptions::new()).await
}

/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn random(client: &Client) -> Result<Value> {
    client.request("/riffs/random", RequestOptions::new()).await
}
