//! Wallet sign-in. Signature checks happen in the backend.

use serde::Serialize;
use serde_json::Value;

use crate::{Client, Method, RequestOptions, Result};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NonceRequest<'a> {
    wallet_address: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyRequest<'a> {
    wallet_address: &'a str,
    signature: &'a str,
    message: &'a str,
}

/// Requests a nonce for `wallet_address` to sign.
///
/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn nonce(client: &Client, wallet_address: &str) -> Result<Value> {
    let options = RequestOptions::new()
        .method(Method::POST)
        .body(NonceRequest { wallet_address });
    client.request("/auth/nonce", options).await
}

/// Submits the signed nonce `message`.
///
/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn verify_signature(
    client: &Client,
    wallet_address: &str,
    signature: &str,
    message: &str,
) -> Result<Value> {
    let options = RequestOptions::new().method(Method::POST).body(VerifyRequest {
        wallet_address,
        signature,
        message,
    });
    client.request("/auth/verify", options).await
}

/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn current_user(client: &Client, wallet_address: &str) -> Result<Value> {
    let options = RequestOptions::new().wallet_address(wallet_address);
    client.request("/auth/me", options).await
}
