use serde::Serialize;
use serde_json::Value;

use crate::models::{NewTippingTier, ProfileUpdate, StakingSettingsUpdate, TippingTierUpdate};
use crate::params::{query_value, segment, Page, ACTIVITY, USER_LIST};
use crate::{Client, Method, RequestOptions, Result};

pub const DEFAULT_NFT_TYPE: &str = "created";

const WALLET_ADDRESS_FIELD: &str = "walletAddress";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateTier<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    wallet_address: Option<&'a str>,
    #[serde(flatten)]
    tier: &'a NewTippingTier,
}

impl<'a> CreateTier<'a> {
    /// A `walletAddress` carried in the tier replaces the owner's.
    fn new(wallet_address: &'a str, tier: &'a NewTippingTier) -> Self {
        let wallet_address =
            (!tier.extra.contains_key(WALLET_ADDRESS_FIELD)).then_some(wallet_address);
        CreateTier {
            wallet_address,
            tier,
        }
    }
}

fn profile_path(wallet_address: &str) -> String {
    format!("/users/profile/{}", segment(wallet_address))
}

fn tier_path(tier_id: i64) -> String {
    format!("/tipping/tiers/{tier_id}")
}

/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn profile(client: &Client, wallet_address: &str) -> Result<Value> {
    client
        .request(&profile_path(wallet_address), RequestOptions::new())
        .await
}

/// Applies the fields set in `update` to the profile.
///
/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn update_profile(
    client: &Client,
    wallet_address: &str,
    update: &ProfileUpdate,
) -> Result<Value> {
    let options = RequestOptions::new()
        .method(Method::PUT)
        .wallet_address(wallet_address)
        .body(update);
    client.request(&profile_path(wallet_address), options).await
}

/// Nfts of a profile, `kind` defaults to [`DEFAULT_NFT_TYPE`].
///
/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn nfts(
    client: &Client,
    wallet_address: &str,
    page: Page,
    kind: Option<&str>,
) -> Result<Value> {
    let endpoint = format!(
        "{}/nfts?{}&type={}",
        profile_path(wallet_address),
        page.query(USER_LIST),
        query_value(kind.unwrap_or(DEFAULT_NFT_TYPE))
    );
    client.request(&endpoint, RequestOptions::new()).await
}

/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn collections(client: &Client, wallet_address: &str, page: Page) -> Result<Value> {
    let endpoint = format!(
        "{}/collections?{}",
        profile_path(wallet_address),
        page.query(USER_LIST)
    );
    client.request(&endpoint, RequestOptions::new()).await
}

/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn favorites(client: &Client, wallet_address: &str, page: Page) -> Result<Value> {
    let endpoint = format!(
        "{}/favorites?{}",
        profile_path(wallet_address),
        page.query(USER_LIST)
    );
    client.request(&endpoint, RequestOptions::new()).await
}

/// Activity of every profile, newest first.
///
/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn all_activity(client: &Client, page: Page) -> Result<Value> {
    let endpoint = format!("/activity?{}", page.query(ACTIVITY));
    client.request(&endpoint, RequestOptions::new()).await
}

/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn activity(client: &Client, wallet_address: &str, page: Page) -> Result<Value> {
    let endpoint = format!(
        "{}/activity?{}",
        profile_path(wallet_address),
        page.query(ACTIVITY)
    );
    client.request(&endpoint, RequestOptions::new()).await
}

/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn tipping_tiers(client: &Client, wallet_address: &str) -> Result<Value> {
    let endpoint = format!("/tipping/tiers/{}", segment(wallet_address));
    client.request(&endpoint, RequestOptions::new()).await
}

/// Creates a tier owned by `wallet_address`.
///
/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn create_tipping_tier(
    client: &Client,
    wallet_address: &str,
    tier: &NewTippingTier,
) -> Result<Value> {
    let options = RequestOptions::new()
        .method(Method::POST)
        .body(CreateTier::new(wallet_address, tier));
    client.request("/tipping/tiers", options).await
}

/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn update_tipping_tier(
    client: &Client,
    tier_id: i64,
    update: &TippingTierUpdate,
) -> Result<Value> {
    let options = RequestOptions::new().method(Method::PUT).body(update);
    client.request(&tier_path(tier_id), options).await
}

/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn delete_tipping_tier(client: &Client, tier_id: i64) -> Result<Value> {
    let options = RequestOptions::new().method(Method::DELETE);
    client.request(&tier_path(tier_id), options).await
}

/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn staking_settings(client: &Client, wallet_address: &str) -> Result<Value> {
    let endpoint = format!("{}/staking-settings", profile_path(wallet_address));
    let options = RequestOptions::new().wallet_address(wallet_address);
    client.request(&endpoint, options).await
}

/// Replaces the staking defaults and returns them with the backend's confirmation message.
///
/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn update_staking_settings(
    client: &Client,
    wallet_address: &str,
    settings: StakingSettingsUpdate,
) -> Result<Value> {
    let endpoint = format!("{}/staking-settings", profile_path(wallet_address));
    let options = RequestOptions::new()
        .method(Method::PUT)
        .wallet_address(wallet_address)
        .body(settings);
    client.request(&endpoint, options).await
}

/// # Errors
/// Any [`crate::Error`] returned by [`Client::request`].
pub async fn most_tipped_profile(client: &Client) -> Result<Value> {
    client
        .request("/users/most-tipped", RequestOptions::new())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_tier_body_spreads_tier() {
        let tier = NewTippingTier {
            name: "Gold".into(),
            amount: 5.0,
            description: Some("thanks".into()),
            ..Default::default()
        };
        let body = serde_json::to_value(CreateTier::new("0xABC", &tier)).unwrap();
        assert_eq!(
            body,
            json!({
                "walletAddress": "0xABC",
                "name": "Gold",
                "amount": 5.0,
                "description": "thanks"
            })
        );
    }

    #[test]
    fn test_create_tier_body_lets_tier_wallet_win() {
        let mut tier = NewTippingTier {
            name: "Gold".into(),
            amount: 5.0,
            ..Default::default()
        };
        tier.extra.insert("walletAddress".into(), json!("0xOTHER"));
        let body = serde_json::to_string(&CreateTier::new("0xABC", &tier)).unwrap();
        assert_eq!(body.matches("walletAddress").count(), 1);
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["walletAddress"], "0xOTHER");
    }

    #[test]
    fn test_paths() {
        assert_eq!(profile_path("0xABC"), "/users/profile/0xABC");
        assert_eq!(tier_path(12), "/tipping/tiers/12");
    }
}
