use serde_json::Value;

use crate::models::NewCollection;
use crate::{Client, Method, RequestOptions, Result};

/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn create(
    client: &Client,
    wallet_address: &str,
    collection: &NewCollection,
) -> Result<Value> {
    let options = RequestOptions::new()
        .method(Method::POST)
        .wallet_address(wallet_address)
        .body(collection);
    client.request("/collections", options).await
}
