use serde_json::Value;

use crate::params::{Page, LISTINGS};
use crate::{Client, RequestOptions, Result};

/// Lists marketplace offers. Pages start at 1 here, unlike the profile lists.
///
/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn listings(client: &Client, wallet_address: &str, page: Page) -> Result<Value> {
    let options = RequestOptions::new().wallet_address(wallet_address);
    client
        .request(
            &format!("/marketplace/listings?{}", page.query(LISTINGS)),
            options,
        )
        .await
}
